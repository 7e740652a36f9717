//! Pricing inputs, margin categories, and the derived cost breakdown.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named pricing policy selecting the markup over real cost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarginCategory {
    /// Standard 30% margin
    #[default]
    Default,

    /// Low season, 20%
    LowSeason,

    /// High season, 40%
    HighSeason,

    /// Under-subscribed departure; user-supplied margin clamped to [10, 20]
    FailedRecruitment,
}

impl FromStr for MarginCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(MarginCategory::Default),
            "low_season" | "lowseason" => Ok(MarginCategory::LowSeason),
            "high_season" | "highseason" => Ok(MarginCategory::HighSeason),
            "failed_recruitment" => Ok(MarginCategory::FailedRecruitment),
            _ => Err(format!("Invalid margin category: {s}")),
        }
    }
}

impl MarginCategory {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarginCategory::Default => "default",
            MarginCategory::LowSeason => "low_season",
            MarginCategory::HighSeason => "high_season",
            MarginCategory::FailedRecruitment => "failed_recruitment",
        }
    }
}

/// Free-form margin-exempt expense line, added after margin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseItem {
    /// What the expense is for
    pub label: String,

    /// Amount in dollars
    pub amount: f64,
}

/// Everything the cost pipeline needs besides the selection and schedule.
///
/// All fields are user-editable; `mileage` is normally fed from the route
/// collaborator but can be entered manually when the provider is
/// unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingInputs {
    /// Number of participants (adult tier)
    pub participants: u32,

    /// Active vehicle type key
    pub vehicle_type: String,

    /// Gas price per gallon
    pub gas_price: f64,

    /// Total trip mileage (route-derived or manual)
    pub mileage: f64,

    /// Manual fuel cost, overriding the mileage/mpg derivation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_cost_override: Option<f64>,

    /// Manually entered total travel time in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_hours: Option<f64>,

    /// Total guide working hours
    pub guide_hours: f64,

    /// Guide hourly rate
    pub guide_hourly_rate: f64,

    /// Manual guide fee, overriding hours x rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_fee_override: Option<f64>,

    /// Active margin policy
    #[serde(default)]
    pub margin_category: MarginCategory,

    /// Custom margin percentage for `FailedRecruitment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_margin_pct: Option<f64>,

    /// Margin-exempt other expenses
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            participants: 1,
            vehicle_type: "minivan".to_string(),
            gas_price: 0.0,
            mileage: 0.0,
            fuel_cost_override: None,
            travel_hours: None,
            guide_hours: 0.0,
            guide_hourly_rate: 0.0,
            guide_fee_override: None,
            margin_category: MarginCategory::Default,
            custom_margin_pct: None,
            expenses: Vec::new(),
        }
    }
}

/// Fully derived two-tier quote.
///
/// Never stored; always recomputed from its inputs by
/// [`crate::costing::compute`]. Values are unrounded; rounding happens in
/// the Display impl only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    /// Itinerary length derived from schedule day labels (min 1)
    pub number_of_days: u32,

    /// Sum of non-accommodation course prices
    pub entrance_fees: f64,

    /// Accommodation course prices plus guide lodging surcharge
    pub hotel_accommodation_cost: f64,

    /// Daily rental rate x number of days
    pub vehicle_rental_cost: f64,

    /// Derived or overridden fuel cost
    pub fuel_cost: f64,

    /// Derived or overridden guide fee
    pub guide_fee: f64,

    /// Real cost: sum of the five components above
    pub total_cost: f64,

    /// Effective margin percentage
    pub margin_rate: f64,

    /// total_cost / (1 - margin_rate/100)
    pub selling_price: f64,

    /// selling_price - total_cost
    pub margin_amount: f64,

    /// Sum of margin-exempt expense lines
    pub additional_cost: f64,

    /// selling_price + additional_cost
    pub total_before_tip: f64,

    /// 15% of total_before_tip
    pub tip_amount: f64,

    /// Final customer-facing price
    pub selling_price_with_tip: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_category_round_trip() {
        for s in ["default", "low_season", "high_season", "failed_recruitment"] {
            let cat: MarginCategory = s.parse().unwrap();
            assert_eq!(cat.as_str(), s);
        }
        assert!("negotiated".parse::<MarginCategory>().is_err());
    }

    #[test]
    fn test_pricing_inputs_json_defaults() {
        let inputs: PricingInputs = serde_json::from_str(
            r#"{"participants": 3, "vehicle_type": "minivan", "gas_price": 4.0,
                "mileage": 0.0, "guide_hours": 0.0, "guide_hourly_rate": 0.0}"#,
        )
        .unwrap();
        assert_eq!(inputs.margin_category, MarginCategory::Default);
        assert!(inputs.expenses.is_empty());
        assert!(inputs.fuel_cost_override.is_none());
    }
}
