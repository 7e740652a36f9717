//! Display formatting for domain models and collections.
//!
//! Display implementations live here rather than next to the model
//! definitions, keeping data structures separate from presentation. All
//! formatters produce markdown for rich terminal rendering; monetary
//! values are rounded at this layer only, never in the cost pipeline.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (VehicleList,
//!   ItinerarySummaries) and borrowed views (CourseTreeView, ScheduleView)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{CourseTreeView, ItinerarySummaries, ScheduleView, VehicleList};
pub use datetime::LocalDateTime;
