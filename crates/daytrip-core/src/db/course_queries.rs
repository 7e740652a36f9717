//! Course catalog queries.
//!
//! The catalog is imported wholesale and read back in import order, which
//! is the order every derived structure (tree, leaf schedule) preserves.

use std::collections::BTreeMap;

use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, TourError},
    models::{CourseRecord, PricingMode},
};

// Optimized SQL queries as const strings for compile-time optimization
const DELETE_COURSES_SQL: &str = "DELETE FROM courses";
const INSERT_COURSE_SQL: &str = "INSERT INTO courses (id, parent_id, name, category, pricing_mode, vehicle_prices, price_adult, price_child, price_infant, duration_minutes, lat, lon, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const SELECT_COURSES_SQL: &str = "SELECT id, parent_id, name, category, pricing_mode, vehicle_prices, price_adult, price_child, price_infant, duration_minutes, lat, lon FROM courses ORDER BY position";

impl super::Database {
    fn build_course_from_row(row: &rusqlite::Row) -> rusqlite::Result<CourseRecord> {
        let mode_str: String = row.get(4)?;
        let pricing_mode = mode_str.parse::<PricingMode>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid pricing mode: {mode_str}").into(),
            )
        })?;

        let prices_json: String = row.get(5)?;
        let vehicle_prices: BTreeMap<String, f64> =
            serde_json::from_str(&prices_json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?;

        Ok(CourseRecord {
            id: row.get::<_, i64>(0)? as u64,
            parent_id: row.get::<_, Option<i64>>(1)?.map(|p| p as u64),
            name: row.get(2)?,
            category: row.get(3)?,
            pricing_mode,
            vehicle_prices,
            price_adult: row.get(6)?,
            price_child: row.get(7)?,
            price_infant: row.get(8)?,
            duration_minutes: row.get::<_, i64>(9)? as u32,
            lat: row.get(10)?,
            lon: row.get(11)?,
        })
    }

    /// Replaces the entire course catalog with the given records, keeping
    /// their order.
    pub fn replace_courses(&mut self, records: &[CourseRecord]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_COURSES_SQL, [])
            .map_err(|e| TourError::database_error("Failed to clear course catalog", e))?;

        for (position, record) in records.iter().enumerate() {
            let prices_json = serde_json::to_string(&record.vehicle_prices)?;
            tx.execute(
                INSERT_COURSE_SQL,
                params![
                    record.id as i64,
                    record.parent_id.map(|p| p as i64),
                    record.name,
                    record.category,
                    record.pricing_mode.as_str(),
                    prices_json,
                    record.price_adult,
                    record.price_child,
                    record.price_infant,
                    record.duration_minutes as i64,
                    record.lat,
                    record.lon,
                    position as i64,
                ],
            )
            .map_err(|e| TourError::database_error("Failed to insert course", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(records.len())
    }

    /// Reads the full catalog in import order.
    pub fn list_courses(&self) -> Result<Vec<CourseRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSES_SQL)
            .map_err(|e| TourError::database_error("Failed to prepare query", e))?;

        let courses = stmt
            .query_map([], Self::build_course_from_row)
            .map_err(|e| TourError::database_error("Failed to query courses", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TourError::database_error("Failed to fetch courses", e))?;

        Ok(courses)
    }
}
