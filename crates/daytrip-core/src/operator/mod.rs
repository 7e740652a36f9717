//! High-level operator API for the catalog, fleet, and saved itineraries.
//!
//! This module provides the main [`Operator`] interface for interacting
//! with persistent tour data. The operator sits between interface layers
//! and the database; all in-memory itinerary editing happens in
//! [`crate::engine::Itinerary`], and the operator moves snapshots in and
//! out of storage.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Interface    │    │    Operator     │    │    Database     │
//! │ (CLI handlers)  │───▶│ (catalog_ops,   │───▶│   (via db/)     │
//! │                 │    │  itinerary_ops) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    User Interface       Storage Facade         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Operator`] instances with
//!   configuration
//! - [`catalog_ops`]: Course catalog import and retrieval
//! - [`vehicle_ops`]: Vehicle fleet management
//! - [`itinerary_ops`]: Saved itinerary and template operations
//!
//! # Usage Examples
//!
//! ```rust
//! use daytrip_core::OperatorBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with default database path
//! let operator = OperatorBuilder::new().build().await?;
//!
//! // Or specify custom database path
//! let operator = OperatorBuilder::new()
//!     .with_database_path(Some("/custom/path/daytrip.db"))
//!     .build()
//!     .await?;
//!
//! let catalog = operator.list_courses().await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod catalog_ops;
pub mod itinerary_ops;
pub mod vehicle_ops;

pub use builder::OperatorBuilder;

/// Main operator interface for persistent tour data.
pub struct Operator {
    pub(crate) db_path: PathBuf,
}

impl Operator {
    /// Creates a new operator with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
