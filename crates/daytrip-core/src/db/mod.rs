//! Database operations and SQLite management for the tour catalog and
//! saved itineraries.
//!
//! This module provides the low-level persistence layer: SQLite connection
//! handling, schema management, and specialized query interfaces for
//! courses, vehicles, itineraries, and templates. Selection sets, schedule
//! lists, pricing inputs, and route summaries are stored as JSON text;
//! the persisted configuration is opaque at this layer.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod course_queries;
pub mod itinerary_queries;
pub mod migrations;
pub mod vehicle_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
