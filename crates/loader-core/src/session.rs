//! The seam between the loader and a concrete database backend.
//!
//! A [`Database`] is an already connected and pinged handle. It introspects
//! tables and hands out independent [`Session`]s, one per loader worker. A
//! session owns its connection, so transactions are never shared between
//! workers.

use crate::dialect::Dialect;
use crate::schema::TableStructure;
use crate::values::GeneratedValue;
use async_trait::async_trait;

/// Boxed driver error carried by [`SessionError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a database backend.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Error reported by the underlying driver.
    #[error("database error: {0}")]
    Driver(#[source] BoxError),

    /// Introspection found no such table.
    #[error("table '{schema}.{table}' not found or has no columns")]
    TableNotFound {
        /// Schema (database or namespace) searched
        schema: String,
        /// Table searched for
        table: String,
    },

    /// `execute` was called before `prepare`.
    #[error("no statement has been prepared in this transaction")]
    NotPrepared,

    /// A row did not match the prepared statement's parameter count.
    #[error("row has {actual} values but the statement expects {expected}")]
    ParameterCount {
        /// Parameters in the prepared statement
        expected: usize,
        /// Values in the row
        actual: usize,
    },
}

impl SessionError {
    /// Wrap any driver error.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Driver(Box::new(err))
    }
}

/// A connected database that can describe tables and open sessions.
#[async_trait]
pub trait Database: Send + Sync {
    /// The dialect this database speaks.
    fn dialect(&self) -> Dialect;

    /// Check the connection is alive.
    async fn ping(&self) -> Result<(), SessionError>;

    /// Read the structure of `schema.table`.
    async fn parse_table(&self, schema: &str, table: &str)
        -> Result<TableStructure, SessionError>;

    /// Open a session on its own connection.
    async fn open_session(&self) -> Result<Box<dyn Session>, SessionError>;
}

/// One worker's private connection.
///
/// The call sequence is `begin`, `prepare`, any number of `execute`, then
/// `commit` or `rollback`, repeated.
#[async_trait]
pub trait Session: Send {
    /// Start a transaction.
    async fn begin(&mut self) -> Result<(), SessionError>;

    /// Prepare `sql` inside the current transaction. Replaces any earlier statement.
    async fn prepare(&mut self, sql: &str) -> Result<(), SessionError>;

    /// Execute the prepared statement with one row of values.
    async fn execute(&mut self, row: &[GeneratedValue]) -> Result<(), SessionError>;

    /// Commit the current transaction.
    async fn commit(&mut self) -> Result<(), SessionError>;

    /// Roll back the current transaction.
    async fn rollback(&mut self) -> Result<(), SessionError>;
}
