//! File-backed route provider.
//!
//! The CLI has no live routing service; instead a precomputed route
//! summary is supplied as a JSON file (for example, exported from the
//! routing dashboard). The provider still enforces the waypoint contract
//! so the engine behaves the same as with a live collaborator.

use std::path::PathBuf;

use daytrip_core::models::route::{Coordinate, RouteError, RouteProvider, RouteSummary};

/// Reads a [`RouteSummary`] from a JSON file on each request.
pub struct FileRouteProvider {
    path: PathBuf,
}

impl FileRouteProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RouteProvider for FileRouteProvider {
    fn route(&self, waypoints: &[Coordinate]) -> Result<RouteSummary, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::InsufficientWaypoints {
                count: waypoints.len(),
            });
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| RouteError::Provider {
            message: format!("cannot read {}: {e}", self.path.display()),
        })?;
        let summary: RouteSummary =
            serde_json::from_str(&contents).map_err(|e| RouteError::Provider {
                message: format!("invalid route file {}: {e}", self.path.display()),
            })?;

        if summary.leg_durations_secs.is_empty() {
            return Err(RouteError::ZeroResults);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn waypoint(lat: f64, lon: f64) -> Coordinate {
        Coordinate {
            lat,
            lon,
            label: None,
        }
    }

    #[test]
    fn test_reads_summary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"total_distance_miles": 42.0, "total_duration_hours": 1.5,
                "leg_durations_secs": [1800, 1500, 2100]}}"#
        )
        .unwrap();

        let provider = FileRouteProvider::new(file.path().to_path_buf());
        let summary = provider
            .route(&[waypoint(33.4, 126.5), waypoint(33.5, 126.9)])
            .unwrap();
        assert_eq!(summary.total_distance_miles, 42.0);
        assert_eq!(summary.forward_legs(), &[1800, 1500]);
    }

    #[test]
    fn test_requires_two_waypoints() {
        let provider = FileRouteProvider::new(PathBuf::from("/nonexistent"));
        let err = provider.route(&[waypoint(33.4, 126.5)]).unwrap_err();
        assert_eq!(err, RouteError::InsufficientWaypoints { count: 1 });
    }

    #[test]
    fn test_missing_file_is_provider_error() {
        let provider = FileRouteProvider::new(PathBuf::from("/nonexistent/route.json"));
        let err = provider
            .route(&[waypoint(33.4, 126.5), waypoint(33.5, 126.9)])
            .unwrap_err();
        assert!(matches!(err, RouteError::Provider { .. }));
    }
}
