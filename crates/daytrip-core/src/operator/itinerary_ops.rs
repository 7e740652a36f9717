//! Saved itinerary and template operations for the Operator.

use tokio::task;

use super::Operator;
use crate::{
    db::Database,
    error::{Result, TourError},
    models::{ItinerarySummary, SavedItinerary, Template},
    params::{CreateItinerary, Id, SaveItinerary, SaveTemplate},
};

impl Operator {
    /// Creates a new named itinerary from an empty snapshot.
    pub async fn create_itinerary(&self, params: &CreateItinerary) -> Result<SavedItinerary> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let snapshot = crate::models::ItinerarySnapshot {
                selected_ids: Vec::new(),
                schedule: Vec::new(),
                pricing: Default::default(),
            };
            db.create_itinerary(&name, &snapshot, None)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a saved itinerary by its ID.
    pub async fn get_itinerary(&self, params: &Id) -> Result<Option<SavedItinerary>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_itinerary(id)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists saved itineraries, most recently updated first.
    pub async fn list_itineraries(&self) -> Result<Vec<ItinerarySummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_itineraries()
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Saves an editing session's snapshot and route into an existing
    /// itinerary.
    pub async fn save_itinerary(&self, params: &SaveItinerary) -> Result<SavedItinerary> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_itinerary(params.id, &params.snapshot, params.route.as_ref())
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a saved itinerary.
    /// This operation cannot be undone.
    pub async fn delete_itinerary(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_itinerary(id)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates or overwrites a named template.
    pub async fn save_template(&self, params: &SaveTemplate) -> Result<Template> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let template = Template {
                name: params.name,
                selected_ids: params.selected_ids,
                schedule: params.schedule,
            };
            db.upsert_template(&template)?;
            Ok(template)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a template by name, failing when it does not exist.
    pub async fn get_template(&self, name: &str) -> Result<Template> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_template(&name)?
                .ok_or(TourError::TemplateNotFound { name })
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all templates by name.
    pub async fn list_templates(&self) -> Result<Vec<Template>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_templates()
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a template by name.
    pub async fn delete_template(&self, name: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_template(&name)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
