//! Cost pipeline: catalog prices, vehicle, fuel, guide and margin chained
//! into a two-tier quote.
//!
//! Pure functions of their inputs, with no hidden state. Monetary
//! values stay unrounded `f64` until presentation. Numeric edge cases
//! (zero mpg, missing price slots) contribute zero instead of erroring.

use crate::autoschedule::number_of_days;
use crate::models::course::PricingMode;
use crate::models::pricing::{CostBreakdown, MarginCategory, PricingInputs};
use crate::models::schedule::ScheduleItem;
use crate::models::tree::CourseTree;
use crate::models::vehicle::VehicleSetting;
use crate::selection::SelectionSet;

/// Guide lodging surcharge per night beyond the first.
const GUIDE_LODGING_PER_NIGHT: f64 = 100.0;

/// Fixed tip policy applied after margin and additional costs.
const TIP_RATE: f64 = 0.15;

/// Effective margin percentage for a category.
///
/// `FailedRecruitment` uses the user-supplied percentage clamped to
/// [10, 20], defaulting to 15. The table never reaches 100, so the selling
/// price division is always safe.
pub fn margin_rate(category: MarginCategory, custom_pct: Option<f64>) -> f64 {
    match category {
        MarginCategory::Default => 30.0,
        MarginCategory::LowSeason => 20.0,
        MarginCategory::HighSeason => 40.0,
        MarginCategory::FailedRecruitment => custom_pct.unwrap_or(15.0).clamp(10.0, 20.0),
    }
}

/// Price contribution of one selected course.
fn course_price(tree: &CourseTree, id: u64, inputs: &PricingInputs) -> f64 {
    let Some(record) = tree.record(id) else {
        return 0.0;
    };
    match record.pricing_mode {
        PricingMode::PerVehicle => record
            .vehicle_prices
            .get(&inputs.vehicle_type)
            .copied()
            .unwrap_or(0.0),
        PricingMode::PerPerson => record.price_adult * inputs.participants as f64,
    }
}

/// Computes the full derived quote.
///
/// `vehicle` is the active [`VehicleSetting`] matching the pricing inputs'
/// vehicle type; when absent (unknown type), rental and fuel contribute
/// zero.
pub fn compute(
    selection: &SelectionSet,
    tree: &CourseTree,
    schedule: &[ScheduleItem],
    inputs: &PricingInputs,
    vehicle: Option<&VehicleSetting>,
) -> CostBreakdown {
    let number_of_days = number_of_days(schedule);

    let mut entrance_fees = 0.0;
    let mut lodging = 0.0;
    for &id in selection {
        let price = course_price(tree, id, inputs);
        if tree.is_accommodation(id) {
            lodging += price;
        } else {
            entrance_fees += price;
        }
    }
    if number_of_days > 1 {
        lodging += (number_of_days - 1) as f64 * GUIDE_LODGING_PER_NIGHT;
    }

    let vehicle_rental_cost = vehicle
        .map(|v| v.daily_rental_rate * number_of_days as f64)
        .unwrap_or(0.0);

    let derived_fuel = match vehicle {
        Some(v) if inputs.mileage > 0.0 && v.miles_per_gallon > 0.0 => {
            (inputs.mileage / v.miles_per_gallon) * inputs.gas_price
        }
        _ => 0.0,
    };
    let fuel_cost = inputs.fuel_cost_override.unwrap_or(derived_fuel);

    let guide_fee = inputs
        .guide_fee_override
        .unwrap_or(inputs.guide_hours * inputs.guide_hourly_rate);

    let total_cost = entrance_fees + lodging + vehicle_rental_cost + fuel_cost + guide_fee;

    let margin_rate = margin_rate(inputs.margin_category, inputs.custom_margin_pct);
    let selling_price = total_cost / (1.0 - margin_rate / 100.0);
    let margin_amount = selling_price - total_cost;

    let additional_cost: f64 = inputs.expenses.iter().map(|e| e.amount).sum();
    let total_before_tip = selling_price + additional_cost;
    let tip_amount = total_before_tip * TIP_RATE;
    let selling_price_with_tip = total_before_tip + tip_amount;

    CostBreakdown {
        number_of_days,
        entrance_fees,
        hotel_accommodation_cost: lodging,
        vehicle_rental_cost,
        fuel_cost,
        guide_fee,
        total_cost,
        margin_rate,
        selling_price,
        margin_amount,
        additional_cost,
        total_before_tip,
        tip_amount,
        selling_price_with_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::CourseRecord;
    use crate::models::pricing::ExpenseItem;
    use std::collections::BTreeMap;

    fn per_person(id: u64, adult: f64) -> CourseRecord {
        CourseRecord {
            id,
            parent_id: None,
            name: format!("course-{id}"),
            category: "sight".to_string(),
            pricing_mode: PricingMode::PerPerson,
            vehicle_prices: BTreeMap::new(),
            price_adult: adult,
            price_child: 0.0,
            price_infant: 0.0,
            duration_minutes: 60,
            lat: None,
            lon: None,
        }
    }

    fn per_vehicle(id: u64, prices: &[(&str, f64)], category: &str) -> CourseRecord {
        CourseRecord {
            id,
            parent_id: None,
            name: format!("course-{id}"),
            category: category.to_string(),
            pricing_mode: PricingMode::PerVehicle,
            vehicle_prices: prices
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            price_adult: 0.0,
            price_child: 0.0,
            price_infant: 0.0,
            duration_minutes: 60,
            lat: None,
            lon: None,
        }
    }

    fn minivan() -> VehicleSetting {
        VehicleSetting {
            vehicle_type: "minivan".to_string(),
            display_name: "Minivan".to_string(),
            daily_rental_rate: 80.0,
            miles_per_gallon: 20.0,
        }
    }

    fn inputs(participants: u32) -> PricingInputs {
        PricingInputs {
            participants,
            ..PricingInputs::default()
        }
    }

    #[test]
    fn test_margin_table() {
        assert_eq!(margin_rate(MarginCategory::Default, None), 30.0);
        assert_eq!(margin_rate(MarginCategory::LowSeason, None), 20.0);
        assert_eq!(margin_rate(MarginCategory::HighSeason, None), 40.0);
        assert_eq!(margin_rate(MarginCategory::FailedRecruitment, None), 15.0);
        assert_eq!(
            margin_rate(MarginCategory::FailedRecruitment, Some(5.0)),
            10.0
        );
        assert_eq!(
            margin_rate(MarginCategory::FailedRecruitment, Some(35.0)),
            20.0
        );
        assert_eq!(
            margin_rate(MarginCategory::FailedRecruitment, Some(18.0)),
            18.0
        );
    }

    #[test]
    fn test_margin_round_trip() {
        for total_cost in [0.0f64, 150.0, 999.99, 123456.78] {
            for rate in [0.0, 15.0, 30.0, 40.0, 99.0] {
                let selling = total_cost / (1.0 - rate / 100.0);
                assert!(
                    (selling * (1.0 - rate / 100.0) - total_cost).abs() < 1e-6,
                    "round trip failed for {total_cost} at {rate}%"
                );
            }
        }
    }

    #[test]
    fn test_per_person_quote_default_margin() {
        // One per-person course at $50 adult, 3 participants, default 30%
        let tree = CourseTree::build(&[per_person(1, 50.0)]);
        let selection = SelectionSet::from([1]);
        let breakdown = compute(&selection, &tree, &[], &inputs(3), None);

        assert!((breakdown.entrance_fees - 150.0).abs() < 1e-9);
        assert!((breakdown.total_cost - 150.0).abs() < 1e-9);
        assert!((breakdown.selling_price - 150.0 / 0.7).abs() < 1e-9);
        assert!((breakdown.selling_price - 214.2857).abs() < 1e-3);
        assert!((breakdown.tip_amount - 32.1428).abs() < 1e-3);
        assert!((breakdown.selling_price_with_tip - 246.4285).abs() < 1e-3);
        assert!((breakdown.margin_amount - (breakdown.selling_price - 150.0)).abs() < 1e-9);
    }

    #[test]
    fn test_guide_lodging_surcharge_without_accommodation_course() {
        use crate::models::schedule::ScheduleItem;
        let tree = CourseTree::build(&[per_person(1, 0.0)]);
        let selection = SelectionSet::from([1]);
        let schedule = vec![
            ScheduleItem {
                course_id: 1,
                day: Some("2일".to_string()),
                time: None,
                duration_minutes: 60,
            },
        ];
        let breakdown = compute(&selection, &tree, &schedule, &inputs(2), None);

        assert_eq!(breakdown.number_of_days, 2);
        assert!((breakdown.hotel_accommodation_cost - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_vehicle_price_slot_and_accommodation_split() {
        let tree = CourseTree::build(&[
            per_vehicle(1, &[("minivan", 60.0), ("9seater", 90.0)], "sight"),
            per_vehicle(2, &[("minivan", 200.0)], "hotel"),
            per_vehicle(3, &[("9seater", 70.0)], "sight"), // no minivan slot
        ]);
        let selection = SelectionSet::from([1, 2, 3]);
        let breakdown = compute(&selection, &tree, &[], &inputs(4), None);

        assert!((breakdown.entrance_fees - 60.0).abs() < 1e-9);
        assert!((breakdown.hotel_accommodation_cost - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_vehicle_rental_and_fuel() {
        let tree = CourseTree::build(&[per_person(1, 0.0)]);
        let selection = SelectionSet::from([1]);
        let mut pricing = inputs(4);
        pricing.mileage = 100.0;
        pricing.gas_price = 4.0;
        let breakdown = compute(&selection, &tree, &[], &pricing, Some(&minivan()));

        // One day rental at 80, fuel 100/20*4 = 20
        assert!((breakdown.vehicle_rental_cost - 80.0).abs() < 1e-9);
        assert!((breakdown.fuel_cost - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_mpg_contributes_zero_fuel() {
        let tree = CourseTree::build(&[per_person(1, 0.0)]);
        let selection = SelectionSet::from([1]);
        let mut pricing = inputs(4);
        pricing.mileage = 100.0;
        pricing.gas_price = 4.0;
        let mut cart = minivan();
        cart.miles_per_gallon = 0.0;
        let breakdown = compute(&selection, &tree, &[], &pricing, Some(&cart));
        assert_eq!(breakdown.fuel_cost, 0.0);
    }

    #[test]
    fn test_overrides_win() {
        let tree = CourseTree::build(&[per_person(1, 0.0)]);
        let selection = SelectionSet::from([1]);
        let mut pricing = inputs(4);
        pricing.mileage = 100.0;
        pricing.gas_price = 4.0;
        pricing.fuel_cost_override = Some(55.0);
        pricing.guide_hours = 8.0;
        pricing.guide_hourly_rate = 25.0;
        pricing.guide_fee_override = Some(300.0);
        let breakdown = compute(&selection, &tree, &[], &pricing, Some(&minivan()));

        assert!((breakdown.fuel_cost - 55.0).abs() < 1e-9);
        assert!((breakdown.guide_fee - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_guide_fee_from_hours() {
        let tree = CourseTree::build(&[per_person(1, 0.0)]);
        let selection = SelectionSet::from([1]);
        let mut pricing = inputs(4);
        pricing.guide_hours = 8.0;
        pricing.guide_hourly_rate = 25.0;
        let breakdown = compute(&selection, &tree, &[], &pricing, None);
        assert!((breakdown.guide_fee - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_expenses_are_margin_exempt() {
        let tree = CourseTree::build(&[per_person(1, 100.0)]);
        let selection = SelectionSet::from([1]);
        let mut pricing = inputs(1);
        pricing.expenses = vec![
            ExpenseItem {
                label: "ferry".to_string(),
                amount: 30.0,
            },
            ExpenseItem {
                label: "parking".to_string(),
                amount: 10.0,
            },
        ];
        let breakdown = compute(&selection, &tree, &[], &pricing, None);

        // 100 cost -> 142.857 selling; expenses added after margin
        assert!((breakdown.additional_cost - 40.0).abs() < 1e-9);
        assert!(
            (breakdown.total_before_tip - (breakdown.selling_price + 40.0)).abs() < 1e-9
        );
        assert!((breakdown.tip_amount - breakdown.total_before_tip * 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_empty_selection_quotes_zero() {
        let tree = CourseTree::build(&[]);
        let breakdown = compute(&SelectionSet::new(), &tree, &[], &inputs(1), None);
        assert_eq!(breakdown.total_cost, 0.0);
        assert_eq!(breakdown.selling_price, 0.0);
        assert_eq!(breakdown.selling_price_with_tip, 0.0);
    }
}
