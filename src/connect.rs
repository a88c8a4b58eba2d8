use loader_core::{Database, Dialect, SessionError};
use loader_mysql::MySqlDatabase;
use loader_postgresql::PostgresDatabase;
use std::sync::Arc;

// Connect to the database named by `dsn` and check it answers
pub async fn connect(dialect: Dialect, dsn: &str) -> Result<Arc<dyn Database>, SessionError> {
    let database: Arc<dyn Database> = match dialect {
        Dialect::MySql => Arc::new(MySqlDatabase::connect(dsn).await?),
        Dialect::Postgres => Arc::new(PostgresDatabase::connect(dsn).await?),
    };
    database.ping().await?;
    Ok(database)
}
