//! Core library for the Daytrip tour itinerary application.
//!
//! This crate provides the business logic for assembling guided day-tour
//! itineraries from a hierarchical course catalog: selection with
//! ancestor/descendant propagation, order-preserving schedule derivation,
//! route-driven automatic scheduling, and the two-tier cost pipeline that
//! turns real costs into a customer-facing quote.
//!
//! # Architecture
//!
//! The crate splits into a pure in-memory layer and a storage facade:
//!
//! - [`engine::Itinerary`] is one editing session. Everything it holds is
//!   recomputed from its inputs; it performs no I/O.
//! - [`Operator`] moves engine snapshots, the course catalog, and the
//!   vehicle fleet in and out of SQLite.
//! - [`models::route::RouteProvider`] is the seam for the external routing
//!   collaborator; the engine consumes whatever summary a provider yields.
//!
//! # Quick Start
//!
//! ```rust
//! use daytrip_core::{engine::Itinerary, OperatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let operator = OperatorBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Load the catalog and start an editing session
//! let records = operator.list_courses().await?;
//! let mut itinerary = Itinerary::new(&records);
//!
//! itinerary.select(3);
//! for item in itinerary.schedule() {
//!     println!("stop: {}", item.course_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod autoschedule;
pub mod costing;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod operator;
pub mod params;
pub mod selection;
pub mod sync;

// Re-export commonly used types
pub use db::Database;
pub use display::{CourseTreeView, ItinerarySummaries, LocalDateTime, ScheduleView, VehicleList};
pub use engine::Itinerary;
pub use error::{Result, TourError};
pub use models::{
    CostBreakdown, CourseRecord, CourseTree, ItinerarySnapshot, ItinerarySummary, MarginCategory,
    PricingInputs, PricingMode, RouteProvider, RouteSummary, SavedItinerary, ScheduleEntry,
    ScheduleItem, Template, VehicleSetting,
};
pub use operator::{Operator, OperatorBuilder};
pub use params::{CreateItinerary, Id, SaveItinerary, SaveTemplate, UpsertVehicle};
pub use selection::{SelectionOp, SelectionSet};
