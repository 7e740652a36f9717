//! Course catalog record and pricing mode.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keywords that mark a course as an accommodation (hotel stay) node.
///
/// Matched case-insensitively against both the category tag and the display
/// name, in either language the catalog is maintained in.
const ACCOMMODATION_KEYWORDS: &[&str] = &[
    "hotel",
    "accommodation",
    "lodging",
    "stay",
    "호텔",
    "숙박",
    "펜션",
];

/// How a course's price is charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// One price per vehicle, keyed by vehicle type
    #[default]
    PerVehicle,

    /// Price per participant (adult tier is the one aggregated)
    PerPerson,
}

impl FromStr for PricingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per_vehicle" => Ok(PricingMode::PerVehicle),
            "per_person" => Ok(PricingMode::PerPerson),
            _ => Err(format!("Invalid pricing mode: {s}")),
        }
    }
}

impl PricingMode {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::PerVehicle => "per_vehicle",
            PricingMode::PerPerson => "per_person",
        }
    }
}

/// A single catalog entry: a tour stop, a category, or an accommodation
/// night.
///
/// `parent_id`, if present, should reference another record's id; the edge
/// set is untrusted, so consumers must not assume acyclicity (see
/// [`crate::models::tree::CourseTree`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRecord {
    /// Unique identifier for the course
    pub id: u64,

    /// Optional parent course forming the catalog hierarchy
    pub parent_id: Option<u64>,

    /// Display name
    pub name: String,

    /// Category tag (also used for accommodation detection)
    #[serde(default)]
    pub category: String,

    /// How this course is priced
    #[serde(default)]
    pub pricing_mode: PricingMode,

    /// Per-vehicle-type prices, keyed by vehicle type
    #[serde(default)]
    pub vehicle_prices: BTreeMap<String, f64>,

    /// Per-person price, adult tier
    #[serde(default)]
    pub price_adult: f64,

    /// Per-person price, child tier (stored, never aggregated)
    #[serde(default)]
    pub price_child: f64,

    /// Per-person price, infant tier (stored, never aggregated)
    #[serde(default)]
    pub price_infant: f64,

    /// Estimated visit duration in minutes
    #[serde(default)]
    pub duration_minutes: u32,

    /// Geocoded latitude, when the stop has been located
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Geocoded longitude, when the stop has been located
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl CourseRecord {
    /// Whether this course represents an overnight accommodation.
    ///
    /// Branches both the cost pipeline (lodging vs. entrance fees) and the
    /// auto-scheduler (day rollover after an overnight stay).
    pub fn is_accommodation(&self) -> bool {
        let category = self.category.to_lowercase();
        let name = self.name.to_lowercase();
        ACCOMMODATION_KEYWORDS
            .iter()
            .any(|kw| category.contains(kw) || name.contains(kw))
    }
}
