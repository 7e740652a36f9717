//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TourError};

/// Idempotent schema, executed on every connection.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY,
    parent_id INTEGER,
    name TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT '',
    pricing_mode TEXT NOT NULL DEFAULT 'per_vehicle',
    vehicle_prices TEXT NOT NULL DEFAULT '{}',
    price_adult REAL NOT NULL DEFAULT 0,
    price_child REAL NOT NULL DEFAULT 0,
    price_infant REAL NOT NULL DEFAULT 0,
    duration_minutes INTEGER NOT NULL DEFAULT 0,
    lat REAL,
    lon REAL,
    position INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS vehicles (
    vehicle_type TEXT PRIMARY KEY,
    display_name TEXT NOT NULL,
    daily_rental_rate REAL NOT NULL DEFAULT 0,
    miles_per_gallon REAL NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS itineraries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    selected_ids TEXT NOT NULL DEFAULT '[]',
    schedule TEXT NOT NULL DEFAULT '[]',
    pricing TEXT NOT NULL,
    route TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS templates (
    name TEXT PRIMARY KEY,
    selected_ids TEXT NOT NULL DEFAULT '[]',
    schedule TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_courses_parent ON courses(parent_id);
";

impl super::Database {
    /// Initializes the database schema.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created before the geocoding and
    /// ordering columns existed.
    fn apply_migrations(&self) -> Result<()> {
        let has_lat_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('courses') WHERE name = 'lat'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_lat_column {
            self.connection
                .execute("ALTER TABLE courses ADD COLUMN lat REAL", [])
                .map_err(|e| {
                    TourError::database_error("Failed to add lat column to courses table", e)
                })?;
            self.connection
                .execute("ALTER TABLE courses ADD COLUMN lon REAL", [])
                .map_err(|e| {
                    TourError::database_error("Failed to add lon column to courses table", e)
                })?;
        }

        let has_position_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('courses') WHERE name = 'position'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_position_column {
            self.connection
                .execute(
                    "ALTER TABLE courses ADD COLUMN position INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .map_err(|e| {
                    TourError::database_error("Failed to add position column to courses table", e)
                })?;
        }

        Ok(())
    }
}
