//! Error types for the MySQL backend.

use loader_core::SessionError;
use thiserror::Error;

/// Errors that can occur while talking to MySQL.
#[derive(Error, Debug)]
pub enum MySqlLoaderError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),
}

impl From<MySqlLoaderError> for SessionError {
    fn from(err: MySqlLoaderError) -> Self {
        SessionError::driver(err)
    }
}
