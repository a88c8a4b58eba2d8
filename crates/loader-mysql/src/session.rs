//! `Database` and `Session` on a `mysql_async` pool.

use crate::error::MySqlLoaderError;
use crate::forward::to_mysql_value;
use crate::schema::collect_table_structure;
use async_trait::async_trait;
use loader_core::{Database, Dialect, GeneratedValue, Session, SessionError, TableStructure};
use mysql_async::prelude::*;
use mysql_async::{Conn, Params, Pool, Statement};
use tracing::{debug, info};

/// A MySQL database reached through a connection pool.
pub struct MySqlDatabase {
    pool: Pool,
}

impl MySqlDatabase {
    /// Create the pool from a `mysql://` URL and check that the server answers.
    pub async fn connect(url: &str) -> Result<Self, MySqlLoaderError> {
        let pool = Pool::from_url(url)?;
        let db = Self { pool };

        let mut conn = db.pool.get_conn().await?;
        conn.ping().await?;
        info!("Connected to MySQL");

        Ok(db)
    }
}

#[async_trait]
impl Database for MySqlDatabase {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    async fn ping(&self) -> Result<(), SessionError> {
        let mut conn = self.pool.get_conn().await.map_err(MySqlLoaderError::from)?;
        conn.ping().await.map_err(MySqlLoaderError::from)?;
        Ok(())
    }

    async fn parse_table(&self, schema: &str, table: &str) -> Result<TableStructure, SessionError> {
        let mut conn = self.pool.get_conn().await.map_err(MySqlLoaderError::from)?;
        let structure = collect_table_structure(&mut conn, schema, table).await?;
        debug!(
            "Described {schema}.{table}: {} columns, {} indexes, {} foreign keys",
            structure.columns.len(),
            structure.indexes.len(),
            structure.foreign_keys.len()
        );
        Ok(structure)
    }

    async fn open_session(&self) -> Result<Box<dyn Session>, SessionError> {
        let conn = self.pool.get_conn().await.map_err(MySqlLoaderError::from)?;
        Ok(Box::new(MySqlSession::new(conn)))
    }
}

/// A pooled connection running explicit transactions.
pub struct MySqlSession {
    conn: Conn,
    statement: Option<Statement>,
}

impl MySqlSession {
    pub fn new(conn: Conn) -> Self {
        Self {
            conn,
            statement: None,
        }
    }

    async fn query(&mut self, sql: &str) -> Result<(), SessionError> {
        self.conn
            .query_drop(sql)
            .await
            .map_err(MySqlLoaderError::from)?;
        Ok(())
    }
}

#[async_trait]
impl Session for MySqlSession {
    async fn begin(&mut self) -> Result<(), SessionError> {
        self.query("START TRANSACTION").await
    }

    async fn prepare(&mut self, sql: &str) -> Result<(), SessionError> {
        let statement = self.conn.prep(sql).await.map_err(MySqlLoaderError::from)?;
        self.statement = Some(statement);
        Ok(())
    }

    async fn execute(&mut self, row: &[GeneratedValue]) -> Result<(), SessionError> {
        let statement = self.statement.as_ref().ok_or(SessionError::NotPrepared)?;

        let expected = statement.num_params() as usize;
        if expected != row.len() {
            return Err(SessionError::ParameterCount {
                expected,
                actual: row.len(),
            });
        }

        let params: Vec<mysql_async::Value> = row.iter().map(to_mysql_value).collect();
        self.conn
            .exec_drop(statement, Params::Positional(params))
            .await
            .map_err(MySqlLoaderError::from)?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), SessionError> {
        self.query("COMMIT").await
    }

    async fn rollback(&mut self) -> Result<(), SessionError> {
        self.query("ROLLBACK").await
    }
}
