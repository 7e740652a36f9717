//! Parameter structures for Operator operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers wrap these
//! with their own derives (clap args structs in the CLI) and convert via
//! `into_params()`-style methods, keeping the core interface-agnostic.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::models::route::RouteSummary;
use crate::models::saved::ItinerarySnapshot;
use crate::models::schedule::ScheduleEntry;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItinerary {
    /// Customer-facing name of the itinerary (required, non-empty)
    pub name: String,
}

impl CreateItinerary {
    /// Validates the creation parameters.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TourError::invalid_input("name", "name must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for saving an itinerary's working state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveItinerary {
    /// Itinerary ID to save into
    pub id: u64,
    /// Serialized selection + schedule + pricing
    pub snapshot: ItinerarySnapshot,
    /// Applied route, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,
}

/// Parameters for creating or updating a vehicle setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertVehicle {
    /// Human-readable name; slugified into the key when none is given
    pub display_name: String,
    /// Explicit vehicle-type key; auto-derived when absent
    pub key: Option<String>,
    /// Rental cost per itinerary day
    pub daily_rental_rate: f64,
    /// Fuel efficiency in miles per gallon
    pub miles_per_gallon: f64,
}

impl UpsertVehicle {
    /// Validates the vehicle parameters.
    pub fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(TourError::invalid_input(
                "display_name",
                "display name must not be empty",
            ));
        }
        if self.daily_rental_rate < 0.0 {
            return Err(TourError::invalid_input(
                "daily_rental_rate",
                "rental rate must be non-negative",
            ));
        }
        if self.miles_per_gallon < 0.0 {
            return Err(TourError::invalid_input(
                "miles_per_gallon",
                "miles per gallon must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Parameters for saving a named, reusable template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveTemplate {
    /// Template name (unique)
    pub name: String,
    /// Selected course ids
    pub selected_ids: Vec<u64>,
    /// Schedule entries (full items; legacy bare ids accepted on load)
    pub schedule: Vec<ScheduleEntry>,
}

impl SaveTemplate {
    /// Validates the template parameters.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TourError::invalid_input("name", "name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_itinerary_rejects_blank_name() {
        let params = CreateItinerary {
            name: "  ".to_string(),
        };
        assert!(matches!(
            params.validate().unwrap_err(),
            TourError::InvalidInput { field, .. } if field == "name"
        ));
    }

    #[test]
    fn test_upsert_vehicle_rejects_negative_rate() {
        let params = UpsertVehicle {
            display_name: "Minivan".to_string(),
            key: None,
            daily_rental_rate: -1.0,
            miles_per_gallon: 20.0,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_upsert_vehicle_valid() {
        let params = UpsertVehicle {
            display_name: "Minivan".to_string(),
            key: Some("minivan".to_string()),
            daily_rental_rate: 80.0,
            miles_per_gallon: 20.0,
        };
        assert!(params.validate().is_ok());
    }
}
