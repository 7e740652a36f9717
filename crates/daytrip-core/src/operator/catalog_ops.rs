//! Course catalog operations for the Operator.

use tokio::task;

use super::Operator;
use crate::{
    db::Database,
    error::{Result, TourError},
    models::{CourseRecord, CourseTree},
};

impl Operator {
    /// Replaces the stored course catalog with the given records.
    ///
    /// Returns the number of imported courses.
    pub async fn import_courses(&self, records: Vec<CourseRecord>) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_courses(&records)
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reads the stored catalog in import order.
    pub async fn list_courses(&self) -> Result<Vec<CourseRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_courses()
        })
        .await
        .map_err(|e| TourError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reads the catalog and derives the course hierarchy from it.
    pub async fn load_tree(&self) -> Result<CourseTree> {
        let records = self.list_courses().await?;
        Ok(CourseTree::build(&records))
    }
}
