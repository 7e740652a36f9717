//! Route collaborator contract.
//!
//! The routing service is an external collaborator: given an ordered list of
//! waypoints it returns total distance, total duration, and per-leg travel
//! durations forming a closed loop (the last leg returns to the first
//! waypoint), with waypoint order preserved: no reordering or optimization.
//! The engine never blocks on the provider being unavailable; dependent
//! values keep their last manually-set state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geocoded stop handed to the route provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,

    /// Optional human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Result of a successful route calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    /// Total loop distance in miles
    pub total_distance_miles: f64,

    /// Total driving duration in hours
    pub total_duration_hours: f64,

    /// Per-leg driving durations in seconds, one per input leg, closed
    /// loop: entry `i` covers waypoint `i` to `i + 1`, the last entry
    /// returns to waypoint 0
    pub leg_durations_secs: Vec<u32>,
}

impl RouteSummary {
    /// Legs between consecutive schedule items (the return leg excluded).
    pub fn forward_legs(&self) -> &[u32] {
        if self.leg_durations_secs.is_empty() {
            &[]
        } else {
            &self.leg_durations_secs[..self.leg_durations_secs.len() - 1]
        }
    }
}

/// Classified route collaborator failures.
///
/// Each case is surfaced distinctly so callers can fall back to manual
/// mileage entry without losing previously derived values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Fewer than two locatable waypoints
    #[error("Route calculation requires at least 2 located points, got {count}")]
    InsufficientWaypoints { count: usize },

    /// A waypoint could not be geocoded
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// The provider returned no routes
    #[error("Route provider returned zero results")]
    ZeroResults,

    /// The provider rejected the request
    #[error("Route provider denied the request: {message}")]
    Denied { message: String },

    /// Transport or provider-internal failure
    #[error("Route provider error: {message}")]
    Provider { message: String },
}

/// External geolocation/routing provider.
///
/// Implementations must preserve waypoint order and close the loop. The
/// engine consumes this through [`crate::engine::Itinerary::apply_route`];
/// callers are expected to surface [`RouteError`] and allow manual mileage
/// entry as a fallback.
pub trait RouteProvider {
    /// Calculates the closed-loop route over the given waypoints.
    fn route(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RouteError>;
}

/// Fixed-response provider for tests and offline use.
pub struct StaticRouteProvider {
    /// The summary returned for any request with >= 2 waypoints
    pub summary: RouteSummary,
}

impl RouteProvider for StaticRouteProvider {
    fn route(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::InsufficientWaypoints {
                count: waypoints.len(),
            });
        }
        Ok(self.summary.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_legs_drops_return_leg() {
        let summary = RouteSummary {
            total_distance_miles: 120.0,
            total_duration_hours: 3.0,
            leg_durations_secs: vec![600, 1200, 1800],
        };
        assert_eq!(summary.forward_legs(), &[600, 1200]);
    }

    #[test]
    fn test_forward_legs_empty() {
        let summary = RouteSummary {
            total_distance_miles: 0.0,
            total_duration_hours: 0.0,
            leg_durations_secs: vec![],
        };
        assert!(summary.forward_legs().is_empty());
    }

    #[test]
    fn test_static_provider_insufficient_waypoints() {
        let provider = StaticRouteProvider {
            summary: RouteSummary {
                total_distance_miles: 10.0,
                total_duration_hours: 0.5,
                leg_durations_secs: vec![900, 900],
            },
        };
        let err = provider
            .route(&[Coordinate {
                lat: 33.4,
                lon: 126.5,
                label: None,
            }])
            .unwrap_err();
        assert_eq!(err, RouteError::InsufficientWaypoints { count: 1 });
    }
}
