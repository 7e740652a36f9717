//! Persisted itinerary configurations and templates.
//!
//! These are the shapes exchanged with the persistence collaborator. The
//! engine only produces and consumes them; it does not own storage.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::pricing::PricingInputs;
use crate::models::route::RouteSummary;
use crate::models::schedule::ScheduleEntry;

/// Serialized form of an editing session: an id array, the schedule
/// entries (in either shape), and the pricing inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItinerarySnapshot {
    /// Selected course ids
    pub selected_ids: Vec<u64>,

    /// Schedule entries; legacy bare ids are normalized on restore
    pub schedule: Vec<ScheduleEntry>,

    /// All pricing inputs at save time
    pub pricing: PricingInputs,
}

/// A stored itinerary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedItinerary {
    /// Unique identifier
    pub id: u64,

    /// Customer-facing name
    pub name: String,

    /// The saved session state
    pub snapshot: ItinerarySnapshot,

    /// The applied route at save time, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,

    /// Timestamp when the itinerary was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the itinerary was last updated (UTC)
    pub updated_at: Timestamp,
}

/// Compact itinerary listing row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItinerarySummary {
    /// Unique identifier
    pub id: u64,

    /// Customer-facing name
    pub name: String,

    /// Number of scheduled stops
    pub stop_count: usize,

    /// Timestamp when the itinerary was last updated (UTC)
    pub updated_at: Timestamp,
}

/// A named, reusable selection + schedule subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Unique template name
    pub name: String,

    /// Selected course ids
    pub selected_ids: Vec<u64>,

    /// Schedule entries; may contain legacy bare ids
    pub schedule: Vec<ScheduleEntry>,
}
