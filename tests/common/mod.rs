//! In-memory `Database` used by the loader tests.
//!
//! Sessions keep executed rows in a pending buffer. Commit moves the buffer
//! into the shared table, rollback discards it.

#![allow(dead_code)]

use async_trait::async_trait;
use loader_core::{
    Column, Database, Dialect, GeneratedValue, Index, Row, Session, SessionError, TableStructure,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MemoryState {
    pub rows: Vec<Row>,
    pub prepared: Vec<String>,
    pub commits: usize,
    pub rollbacks: usize,
    pub sessions: usize,
}

pub struct MemoryDatabase {
    dialect: Dialect,
    table: TableStructure,
    state: Arc<Mutex<MemoryState>>,
    fail_next_execute: Arc<AtomicBool>,
    panic_next_execute: Arc<AtomicBool>,
    execute_delay: Option<Duration>,
}

impl MemoryDatabase {
    pub fn new(dialect: Dialect, table: TableStructure) -> Self {
        Self {
            dialect,
            table,
            state: Arc::new(Mutex::new(MemoryState::default())),
            fail_next_execute: Arc::new(AtomicBool::new(false)),
            panic_next_execute: Arc::new(AtomicBool::new(false)),
            execute_delay: None,
        }
    }

    /// The first execute on any session fails.
    pub fn failing_first_execute(self) -> Self {
        self.fail_next_execute.store(true, Ordering::SeqCst);
        self
    }

    /// The first execute on any session panics.
    pub fn panicking_first_execute(self) -> Self {
        self.panic_next_execute.store(true, Ordering::SeqCst);
        self
    }

    /// Every execute sleeps first, so loads can be cancelled midway.
    pub fn with_execute_delay(mut self, delay: Duration) -> Self {
        self.execute_delay = Some(delay);
        self
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn ping(&self) -> Result<(), SessionError> {
        Ok(())
    }

    async fn parse_table(&self, schema: &str, table: &str) -> Result<TableStructure, SessionError> {
        if table == self.table.name {
            Ok(self.table.clone())
        } else {
            Err(SessionError::TableNotFound {
                schema: schema.to_string(),
                table: table.to_string(),
            })
        }
    }

    async fn open_session(&self) -> Result<Box<dyn Session>, SessionError> {
        self.state.lock().unwrap().sessions += 1;
        Ok(Box::new(MemorySession {
            state: self.state.clone(),
            fail_next_execute: self.fail_next_execute.clone(),
            panic_next_execute: self.panic_next_execute.clone(),
            execute_delay: self.execute_delay,
            prepared: None,
            pending: Vec::new(),
        }))
    }
}

struct MemorySession {
    state: Arc<Mutex<MemoryState>>,
    fail_next_execute: Arc<AtomicBool>,
    panic_next_execute: Arc<AtomicBool>,
    execute_delay: Option<Duration>,
    prepared: Option<String>,
    pending: Vec<Row>,
}

#[async_trait]
impl Session for MemorySession {
    async fn begin(&mut self) -> Result<(), SessionError> {
        self.pending.clear();
        self.prepared = None;
        Ok(())
    }

    async fn prepare(&mut self, sql: &str) -> Result<(), SessionError> {
        self.state.lock().unwrap().prepared.push(sql.to_string());
        self.prepared = Some(sql.to_string());
        Ok(())
    }

    async fn execute(&mut self, row: &[GeneratedValue]) -> Result<(), SessionError> {
        if let Some(delay) = self.execute_delay {
            tokio::time::sleep(delay).await;
        }

        let sql = self.prepared.as_ref().ok_or(SessionError::NotPrepared)?;
        let expected = sql.matches('?').count() + sql.matches('$').count();
        if expected != row.len() {
            return Err(SessionError::ParameterCount {
                expected,
                actual: row.len(),
            });
        }

        if self.panic_next_execute.swap(false, Ordering::SeqCst) {
            panic!("injected execute panic");
        }

        if self.fail_next_execute.swap(false, Ordering::SeqCst) {
            return Err(SessionError::driver(std::io::Error::other(
                "injected execute failure",
            )));
        }

        self.pending.push(row.to_vec());
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap();
        state.rows.append(&mut self.pending);
        state.commits += 1;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), SessionError> {
        self.pending.clear();
        self.state.lock().unwrap().rollbacks += 1;
        Ok(())
    }
}

/// `users(id int PK, name varchar(20), age tinyint unsigned, active bool)`
pub fn users_table() -> TableStructure {
    TableStructure::new("users")
        .with_column(Column::new("id", "int(11)").not_null())
        .with_column(Column::new("name", "varchar(20)"))
        .with_column(Column::new("age", "tinyint unsigned"))
        .with_column(Column::new("active", "boolean"))
        .with_index(Index::primary("PRIMARY", &["id"]))
}
