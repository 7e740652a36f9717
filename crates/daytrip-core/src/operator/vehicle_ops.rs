//! Vehicle fleet operations for the Operator.

use tokio::task;

use super::Operator;
use crate::{
    db::Database,
    error::{Result, TourError},
    models::{vehicle, VehicleSetting},
    params::UpsertVehicle,
};

impl Operator {
    /// Creates or updates a vehicle setting.
    ///
    /// When no explicit key is given the display name is slugified into
    /// one, with a numeric suffix on collision. Returns the stored setting.
    pub async fn upsert_vehicle(&self, params: &UpsertVehicle) -> Result<VehicleSetting> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;

            let vehicle_type = match params.key {
                Some(key) => key,
                None => {
                    let existing = db.list_vehicle_keys()?;
                    vehicle::vehicle_key(&params.display_name, &existing)
                }
            };

            let setting = VehicleSetting {
                vehicle_type,
                display_name: params.display_name,
                daily_rental_rate: params.daily_rental_rate,
                miles_per_gallon: params.miles_per_gallon,
            };
            db.upsert_vehicle(&setting)?;
            Ok(setting)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a vehicle setting by its type key.
    pub async fn get_vehicle(&self, vehicle_type: &str) -> Result<Option<VehicleSetting>> {
        let db_path = self.db_path.clone();
        let vehicle_type = vehicle_type.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_vehicle(&vehicle_type)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all configured vehicles.
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleSetting>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_vehicles()
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a vehicle setting by its type key.
    pub async fn remove_vehicle(&self, vehicle_type: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let vehicle_type = vehicle_type.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_vehicle(&vehicle_type)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
