use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the task database.
///
/// Every error is local to one operation; nothing is retried.
#[derive(Debug, Error)]
pub enum DbError {
    /// The file exists but is not a JSON array of valid task records.
    #[error("Invalid database file {}", .path.display())]
    InvalidDatabaseFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing the database file failed. The operation did not complete.
    #[error("Failed to write database file {}", .path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No task with id: {0}")]
    NotFound(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DbError {
    pub(crate) fn invalid_file(path: impl Into<PathBuf>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DbError::InvalidDatabaseFile {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DbError::PersistenceFailure { path: path.into(), source }
    }
}

pub type DbResult<T> = Result<T, DbError>;
