//! Builder for creating and configuring Operator instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Operator;
use crate::{
    db::Database,
    error::{Result, TourError},
};

/// Builder for creating and configuring Operator instances.
#[derive(Debug, Clone)]
pub struct OperatorBuilder {
    database_path: Option<PathBuf>,
}

impl OperatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/daytrip/daytrip.db` or
    /// `~/.local/share/daytrip/daytrip.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured operator instance.
    ///
    /// # Errors
    ///
    /// Returns `TourError::FileSystem` if the database path is invalid
    /// Returns `TourError::Database` if database initialization fails
    pub async fn build(self) -> Result<Operator> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TourError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TourError>(())
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Operator::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("daytrip")
            .place_data_file("daytrip.db")
            .map_err(|e| TourError::XdgDirectory(e.to_string()))
    }
}

impl Default for OperatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
