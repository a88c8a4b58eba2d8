//! `Database` and `Session` on `tokio-postgres`.

use crate::error::PostgresLoaderError;
use crate::forward::TextParam;
use crate::schema::collect_table_structure;
use async_trait::async_trait;
use loader_core::{Database, Dialect, GeneratedValue, Session, SessionError, TableStructure};
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, info};

/// Open a client and spawn its connection task.
async fn connect_client(connection_string: &str) -> Result<Client, PostgresLoaderError> {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

    // Spawn the connection task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    Ok(client)
}

/// A PostgreSQL database.
///
/// Holds one client for introspection and pings. Sessions connect on their
/// own so every worker has a private connection.
pub struct PostgresDatabase {
    connection_string: String,
    client: Client,
}

impl PostgresDatabase {
    /// Connect with a `host=... user=...` or `postgresql://` connection string
    /// and check that the server answers.
    pub async fn connect(connection_string: &str) -> Result<Self, PostgresLoaderError> {
        let client = connect_client(connection_string).await?;

        // Test connection
        client.simple_query("SELECT 1").await?;
        info!("Connected to PostgreSQL");

        Ok(Self {
            connection_string: connection_string.to_string(),
            client,
        })
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn ping(&self) -> Result<(), SessionError> {
        self.client
            .simple_query("SELECT 1")
            .await
            .map_err(PostgresLoaderError::from)?;
        Ok(())
    }

    async fn parse_table(&self, schema: &str, table: &str) -> Result<TableStructure, SessionError> {
        let structure = collect_table_structure(&self.client, schema, table).await?;
        debug!(
            "Described {schema}.{table}: {} columns, {} indexes, {} foreign keys",
            structure.columns.len(),
            structure.indexes.len(),
            structure.foreign_keys.len()
        );
        Ok(structure)
    }

    async fn open_session(&self) -> Result<Box<dyn Session>, SessionError> {
        let client = connect_client(&self.connection_string).await?;
        Ok(Box::new(PostgresSession::new(client)))
    }
}

/// One client running explicit transactions.
pub struct PostgresSession {
    client: Client,
    statement: Option<Statement>,
}

impl PostgresSession {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            statement: None,
        }
    }

    async fn batch(&self, sql: &str) -> Result<(), SessionError> {
        self.client
            .batch_execute(sql)
            .await
            .map_err(PostgresLoaderError::from)?;
        Ok(())
    }
}

#[async_trait]
impl Session for PostgresSession {
    async fn begin(&mut self) -> Result<(), SessionError> {
        self.batch("BEGIN").await
    }

    async fn prepare(&mut self, sql: &str) -> Result<(), SessionError> {
        let statement = self
            .client
            .prepare(sql)
            .await
            .map_err(PostgresLoaderError::from)?;
        self.statement = Some(statement);
        Ok(())
    }

    async fn execute(&mut self, row: &[GeneratedValue]) -> Result<(), SessionError> {
        let statement = self.statement.as_ref().ok_or(SessionError::NotPrepared)?;

        let expected = statement.params().len();
        if expected != row.len() {
            return Err(SessionError::ParameterCount {
                expected,
                actual: row.len(),
            });
        }

        let params: Vec<TextParam> = row.iter().map(TextParam::from_value).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        self.client
            .execute(statement, &param_refs)
            .await
            .map_err(PostgresLoaderError::from)?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), SessionError> {
        self.batch("COMMIT").await
    }

    async fn rollback(&mut self) -> Result<(), SessionError> {
        self.batch("ROLLBACK").await
    }
}
