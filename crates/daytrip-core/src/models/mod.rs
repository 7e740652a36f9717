//! Data models for courses, schedules, vehicles, pricing, and routes.
//!
//! This module contains the core domain models for the Daytrip itinerary
//! system. Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! The central shapes are:
//!
//! - [`CourseRecord`] / [`CourseTree`]: the flat catalog and its derived
//!   hierarchy (an arena keyed by id; the edge set comes from untrusted
//!   data, so every traversal is cycle-guarded).
//! - [`ScheduleItem`] / [`ScheduleEntry`]: the ordered day plan, including
//!   the legacy bare-id persisted shape.
//! - [`VehicleSetting`] and [`PricingInputs`]: read-only inputs to the cost
//!   pipeline.
//! - [`CostBreakdown`]: the fully derived quote; never stored, always
//!   recomputed from its inputs.
//! - [`route`]: the external routing collaborator contract.

pub mod course;
pub mod pricing;
pub mod route;
pub mod saved;
pub mod schedule;
pub mod tree;
pub mod vehicle;

pub use course::{CourseRecord, PricingMode};
pub use pricing::{CostBreakdown, ExpenseItem, MarginCategory, PricingInputs};
pub use route::{Coordinate, RouteError, RouteProvider, RouteSummary};
pub use saved::{ItinerarySnapshot, ItinerarySummary, SavedItinerary, Template};
pub use schedule::{ScheduleEntry, ScheduleItem};
pub use tree::{CourseNode, CourseTree};
pub use vehicle::VehicleSetting;
