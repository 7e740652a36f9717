//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display. This is the only
//! place monetary values get rounded; the cost pipeline itself keeps full
//! precision.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    CostBreakdown, ItinerarySummary, MarginCategory, PricingMode, SavedItinerary, Template,
    VehicleSetting,
};

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MarginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for VehicleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (`{}`)", self.display_name, self.vehicle_type)?;
        writeln!(f)?;
        writeln!(f, "- Daily rental: ${:.2}", self.daily_rental_rate)?;
        writeln!(f, "- Fuel efficiency: {:.1} mpg", self.miles_per_gallon)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Quote ({} day{})", self.number_of_days, plural(self.number_of_days))?;
        writeln!(f)?;

        writeln!(f, "## Costs")?;
        writeln!(f)?;
        writeln!(f, "- Entrance fees: ${:.2}", self.entrance_fees)?;
        writeln!(
            f,
            "- Hotel / accommodation: ${:.2}",
            self.hotel_accommodation_cost
        )?;
        writeln!(f, "- Vehicle rental: ${:.2}", self.vehicle_rental_cost)?;
        writeln!(f, "- Fuel: ${:.2}", self.fuel_cost)?;
        writeln!(f, "- Guide fee: ${:.2}", self.guide_fee)?;
        writeln!(f, "- **Total cost**: ${:.2}", self.total_cost)?;
        writeln!(f)?;

        writeln!(f, "## Pricing")?;
        writeln!(f)?;
        writeln!(f, "- Margin rate: {:.0}%", self.margin_rate)?;
        writeln!(f, "- Selling price: ${:.2}", self.selling_price)?;
        writeln!(f, "- Margin: ${:.2}", self.margin_amount)?;
        if self.additional_cost > 0.0 {
            writeln!(f, "- Additional expenses: ${:.2}", self.additional_cost)?;
        }
        writeln!(f, "- Total before tip: ${:.2}", self.total_before_tip)?;
        writeln!(f, "- Tip (15%): ${:.2}", self.tip_amount)?;
        writeln!(
            f,
            "- **Final price**: ${:.2}",
            self.selling_price_with_tip
        )?;

        Ok(())
    }
}

impl fmt::Display for SavedItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Selected courses: {}", self.snapshot.selected_ids.len())?;
        writeln!(f, "- Scheduled stops: {}", self.snapshot.schedule.len())?;
        match &self.route {
            Some(route) => writeln!(
                f,
                "- Route: {:.1} miles, {:.1} hours",
                route.total_distance_miles, route.total_duration_hours
            )?,
            None => writeln!(f, "- Route: not calculated")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        Ok(())
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Stops**: {}", self.stop_count)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Courses**: {}", self.selected_ids.len())?;
        writeln!(f, "- **Stops**: {}", self.schedule.len())?;
        writeln!(f)?;
        Ok(())
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
