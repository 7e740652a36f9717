//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::route::RouteError;

/// Comprehensive error type for all itinerary and store operations.
#[derive(Error, Debug)]
pub enum TourError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Itinerary not found for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: u64 },
    /// Course not found for the given ID
    #[error("Course with ID {id} not found")]
    CourseNotFound { id: u64 },
    /// Vehicle setting not found for the given key
    #[error("Vehicle type '{key}' not found")]
    VehicleNotFound { key: String },
    /// Template not found for the given name
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },
    /// Auto-scheduling requested before any route data was applied
    #[error("No travel-time data available; calculate a route first")]
    RouteRequired,
    /// Route collaborator failure, classified per cause
    #[error(transparent)]
    Route(#[from] RouteError),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TourError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TourError::database_error(message, e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, TourError>;
