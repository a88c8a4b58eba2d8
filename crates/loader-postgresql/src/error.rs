//! Error types for the PostgreSQL backend.

use loader_core::SessionError;
use thiserror::Error;

/// Errors that can occur while talking to PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgresLoaderError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),
}

impl From<PostgresLoaderError> for SessionError {
    fn from(err: PostgresLoaderError) -> Self {
        SessionError::driver(err)
    }
}
