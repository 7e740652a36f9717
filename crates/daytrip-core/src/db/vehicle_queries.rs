//! Vehicle fleet queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{Result, TourError},
    models::VehicleSetting,
};

// Optimized SQL queries as const strings for compile-time optimization
const UPSERT_VEHICLE_SQL: &str = "INSERT INTO vehicles (vehicle_type, display_name, daily_rental_rate, miles_per_gallon) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(vehicle_type) DO UPDATE SET display_name = ?2, daily_rental_rate = ?3, miles_per_gallon = ?4";
const SELECT_VEHICLE_SQL: &str = "SELECT vehicle_type, display_name, daily_rental_rate, miles_per_gallon FROM vehicles WHERE vehicle_type = ?1";
const SELECT_VEHICLES_SQL: &str = "SELECT vehicle_type, display_name, daily_rental_rate, miles_per_gallon FROM vehicles ORDER BY vehicle_type";
const SELECT_VEHICLE_KEYS_SQL: &str = "SELECT vehicle_type FROM vehicles ORDER BY vehicle_type";
const DELETE_VEHICLE_SQL: &str = "DELETE FROM vehicles WHERE vehicle_type = ?1";

impl super::Database {
    fn build_vehicle_from_row(row: &rusqlite::Row) -> rusqlite::Result<VehicleSetting> {
        Ok(VehicleSetting {
            vehicle_type: row.get(0)?,
            display_name: row.get(1)?,
            daily_rental_rate: row.get(2)?,
            miles_per_gallon: row.get(3)?,
        })
    }

    /// Inserts or updates a vehicle setting keyed by its type slug.
    pub fn upsert_vehicle(&self, vehicle: &VehicleSetting) -> Result<()> {
        self.connection
            .execute(
                UPSERT_VEHICLE_SQL,
                params![
                    vehicle.vehicle_type,
                    vehicle.display_name,
                    vehicle.daily_rental_rate,
                    vehicle.miles_per_gallon,
                ],
            )
            .map_err(|e| TourError::database_error("Failed to upsert vehicle", e))?;
        Ok(())
    }

    /// Retrieves a vehicle setting by its type slug.
    pub fn get_vehicle(&self, vehicle_type: &str) -> Result<Option<VehicleSetting>> {
        self.connection
            .query_row(
                SELECT_VEHICLE_SQL,
                params![vehicle_type],
                Self::build_vehicle_from_row,
            )
            .optional()
            .map_err(|e| TourError::database_error("Failed to query vehicle", e))
    }

    /// Lists all configured vehicles.
    pub fn list_vehicles(&self) -> Result<Vec<VehicleSetting>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VEHICLES_SQL)
            .map_err(|e| TourError::database_error("Failed to prepare query", e))?;

        let vehicles = stmt
            .query_map([], Self::build_vehicle_from_row)
            .map_err(|e| TourError::database_error("Failed to query vehicles", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TourError::database_error("Failed to fetch vehicles", e))?;

        Ok(vehicles)
    }

    /// Lists the vehicle type slugs currently in use.
    pub fn list_vehicle_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VEHICLE_KEYS_SQL)
            .map_err(|e| TourError::database_error("Failed to prepare query", e))?;

        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| TourError::database_error("Failed to query vehicle keys", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TourError::database_error("Failed to fetch vehicle keys", e))?;

        Ok(keys)
    }

    /// Removes a vehicle setting.
    pub fn delete_vehicle(&self, vehicle_type: &str) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_VEHICLE_SQL, params![vehicle_type])
            .map_err(|e| TourError::database_error("Failed to delete vehicle", e))?;

        if rows == 0 {
            return Err(TourError::VehicleNotFound {
                key: vehicle_type.to_string(),
            });
        }
        Ok(())
    }
}
