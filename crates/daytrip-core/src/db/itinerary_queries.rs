//! Saved itinerary and template queries.
//!
//! Snapshots are stored as JSON text columns so the engine's serialized
//! shape round-trips without a relational mapping. Legacy bare-id schedule
//! entries deserialize transparently through [`ScheduleEntry`].

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TourError},
    models::{
        ItinerarySnapshot, ItinerarySummary, PricingInputs, RouteSummary, SavedItinerary,
        ScheduleEntry, Template,
    },
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_ITINERARY_SQL: &str = "INSERT INTO itineraries (name, selected_ids, schedule, pricing, route, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ITINERARY_SQL: &str = "SELECT id, name, selected_ids, schedule, pricing, route, created_at, updated_at FROM itineraries WHERE id = ?1";
const SELECT_ITINERARY_SUMMARIES_SQL: &str =
    "SELECT id, name, schedule, updated_at FROM itineraries ORDER BY updated_at DESC";
const UPDATE_ITINERARY_SQL: &str = "UPDATE itineraries SET selected_ids = ?1, schedule = ?2, pricing = ?3, route = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_ITINERARY_SQL: &str = "DELETE FROM itineraries WHERE id = ?1";
const UPSERT_TEMPLATE_SQL: &str = "INSERT INTO templates (name, selected_ids, schedule) VALUES (?1, ?2, ?3) ON CONFLICT(name) DO UPDATE SET selected_ids = ?2, schedule = ?3";
const SELECT_TEMPLATE_SQL: &str =
    "SELECT name, selected_ids, schedule FROM templates WHERE name = ?1";
const SELECT_TEMPLATES_SQL: &str = "SELECT name, selected_ids, schedule FROM templates ORDER BY name";
const DELETE_TEMPLATE_SQL: &str = "DELETE FROM templates WHERE name = ?1";

fn parse_json_column<T: serde::de::DeserializeOwned>(
    index: usize,
    json: &str,
) -> rusqlite::Result<T> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
    })
}

impl super::Database {
    fn build_itinerary_from_row(row: &rusqlite::Row) -> rusqlite::Result<SavedItinerary> {
        let selected_json: String = row.get(2)?;
        let schedule_json: String = row.get(3)?;
        let pricing_json: String = row.get(4)?;
        let route_json: Option<String> = row.get(5)?;

        let selected_ids: Vec<u64> = parse_json_column(2, &selected_json)?;
        let schedule: Vec<ScheduleEntry> = parse_json_column(3, &schedule_json)?;
        let pricing: PricingInputs = parse_json_column(4, &pricing_json)?;
        let route: Option<RouteSummary> = match route_json {
            Some(ref json) => Some(parse_json_column(5, json)?),
            None => None,
        };

        Ok(SavedItinerary {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            snapshot: ItinerarySnapshot {
                selected_ids,
                schedule,
                pricing,
            },
            route,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new saved itinerary from a snapshot.
    pub fn create_itinerary(
        &mut self,
        name: &str,
        snapshot: &ItinerarySnapshot,
        route: Option<&RouteSummary>,
    ) -> Result<SavedItinerary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        let selected_json = serde_json::to_string(&snapshot.selected_ids)?;
        let schedule_json = serde_json::to_string(&snapshot.schedule)?;
        let pricing_json = serde_json::to_string(&snapshot.pricing)?;
        let route_json = route.map(serde_json::to_string).transpose()?;

        tx.execute(
            INSERT_ITINERARY_SQL,
            params![
                name,
                selected_json,
                schedule_json,
                pricing_json,
                route_json,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| TourError::database_error("Failed to insert itinerary", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SavedItinerary {
            id,
            name: name.into(),
            snapshot: snapshot.clone(),
            route: route.cloned(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a saved itinerary by its ID.
    pub fn get_itinerary(&self, id: u64) -> Result<Option<SavedItinerary>> {
        self.connection
            .query_row(
                SELECT_ITINERARY_SQL,
                params![id as i64],
                Self::build_itinerary_from_row,
            )
            .optional()
            .map_err(|e| TourError::database_error("Failed to query itinerary", e))
    }

    /// Lists saved itineraries, most recently updated first.
    pub fn list_itineraries(&self) -> Result<Vec<ItinerarySummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITINERARY_SUMMARIES_SQL)
            .map_err(|e| TourError::database_error("Failed to prepare query", e))?;

        let summaries = stmt
            .query_map([], |row| {
                let schedule_json: String = row.get(2)?;
                let schedule: Vec<ScheduleEntry> = parse_json_column(2, &schedule_json)?;

                Ok(ItinerarySummary {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    stop_count: schedule.len(),
                    updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)),
                    )?,
                })
            })
            .map_err(|e| TourError::database_error("Failed to query itineraries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TourError::database_error("Failed to fetch itineraries", e))?;

        Ok(summaries)
    }

    /// Overwrites the snapshot and route of an existing itinerary.
    pub fn update_itinerary(
        &mut self,
        id: u64,
        snapshot: &ItinerarySnapshot,
        route: Option<&RouteSummary>,
    ) -> Result<SavedItinerary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();

        let selected_json = serde_json::to_string(&snapshot.selected_ids)?;
        let schedule_json = serde_json::to_string(&snapshot.schedule)?;
        let pricing_json = serde_json::to_string(&snapshot.pricing)?;
        let route_json = route.map(serde_json::to_string).transpose()?;

        let rows = tx
            .execute(
                UPDATE_ITINERARY_SQL,
                params![
                    selected_json,
                    schedule_json,
                    pricing_json,
                    route_json,
                    &now_str,
                    id as i64
                ],
            )
            .map_err(|e| TourError::database_error("Failed to update itinerary", e))?;

        if rows == 0 {
            return Err(TourError::ItineraryNotFound { id });
        }

        let saved = tx
            .query_row(
                SELECT_ITINERARY_SQL,
                params![id as i64],
                Self::build_itinerary_from_row,
            )
            .map_err(|e| TourError::database_error("Failed to query updated itinerary", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(saved)
    }

    /// Permanently deletes a saved itinerary. This operation cannot be
    /// undone.
    pub fn delete_itinerary(&self, id: u64) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_ITINERARY_SQL, params![id as i64])
            .map_err(|e| TourError::database_error("Failed to delete itinerary", e))?;

        if rows == 0 {
            return Err(TourError::ItineraryNotFound { id });
        }
        Ok(())
    }

    /// Inserts or overwrites a named template.
    pub fn upsert_template(&self, template: &Template) -> Result<()> {
        let selected_json = serde_json::to_string(&template.selected_ids)?;
        let schedule_json = serde_json::to_string(&template.schedule)?;

        self.connection
            .execute(
                UPSERT_TEMPLATE_SQL,
                params![template.name, selected_json, schedule_json],
            )
            .map_err(|e| TourError::database_error("Failed to upsert template", e))?;
        Ok(())
    }

    fn build_template_from_row(row: &rusqlite::Row) -> rusqlite::Result<Template> {
        let selected_json: String = row.get(1)?;
        let schedule_json: String = row.get(2)?;

        Ok(Template {
            name: row.get(0)?,
            selected_ids: parse_json_column(1, &selected_json)?,
            schedule: parse_json_column(2, &schedule_json)?,
        })
    }

    /// Retrieves a template by name.
    pub fn get_template(&self, name: &str) -> Result<Option<Template>> {
        self.connection
            .query_row(
                SELECT_TEMPLATE_SQL,
                params![name],
                Self::build_template_from_row,
            )
            .optional()
            .map_err(|e| TourError::database_error("Failed to query template", e))
    }

    /// Lists all templates by name.
    pub fn list_templates(&self) -> Result<Vec<Template>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEMPLATES_SQL)
            .map_err(|e| TourError::database_error("Failed to prepare query", e))?;

        let templates = stmt
            .query_map([], Self::build_template_from_row)
            .map_err(|e| TourError::database_error("Failed to query templates", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TourError::database_error("Failed to fetch templates", e))?;

        Ok(templates)
    }

    /// Removes a template by name.
    pub fn delete_template(&self, name: &str) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_TEMPLATE_SQL, params![name])
            .map_err(|e| TourError::database_error("Failed to delete template", e))?;

        if rows == 0 {
            return Err(TourError::TemplateNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
