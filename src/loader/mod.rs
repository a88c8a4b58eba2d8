//! The table data loader.
//!
//! ```text
//! GeneratorRegistry ──► producer ──► async_channel::bounded ──► worker 0 ──► session
//!                                                          ├──► worker 1 ──► session
//!                                                          └──► worker N ──► session
//! ```
//!
//! One producer generates rows and publishes them onto a bounded channel.
//! `parallelism` workers share the receiving end, each inserting through its
//! own session and committing every `batch_size` rows. A cancellation token
//! stops both sides; `load_data` returns once every task has joined.

mod error;
mod producer;
mod stats;
mod worker;

pub use error::{LoaderError, Stage, WorkerError};
pub use stats::LoadStats;

use loader_core::{Database, Dialect, InsertStatement, TableStructure};
use loader_generator::{
    apply_default_generators, GeneratorConfig, GeneratorOverrides, GeneratorRegistry,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use worker::Worker;

/// Fills one table with generated rows.
pub struct TableDataLoader {
    database: Arc<dyn Database>,
    dialect: Dialect,
    table: Arc<TableStructure>,
    batch_size: usize,
    parallelism: usize,
    seed: Option<u64>,
    generators: GeneratorRegistry,
}

impl TableDataLoader {
    /// Create a loader with an empty generator registry.
    ///
    /// `batch_size` is the number of rows per commit and `parallelism` the
    /// number of workers. Both must be at least 1.
    pub fn new(
        database: Arc<dyn Database>,
        dialect: Dialect,
        table: TableStructure,
        batch_size: usize,
        parallelism: usize,
    ) -> Result<Self, LoaderError> {
        if batch_size == 0 {
            return Err(LoaderError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if parallelism == 0 {
            return Err(LoaderError::InvalidConfig(
                "parallelism must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database,
            dialect,
            table: Arc::new(table),
            batch_size,
            parallelism,
            seed: None,
            generators: GeneratorRegistry::new(),
        })
    }

    /// Seed the row generator so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn table(&self) -> &TableStructure {
        &self.table
    }

    pub fn generators(&self) -> &GeneratorRegistry {
        &self.generators
    }

    /// Bind a generator to every column the selection policy accepts.
    ///
    /// Bindings the caller made for skipped columns are kept.
    pub fn set_default_generators(&mut self) -> Result<(), LoaderError> {
        apply_default_generators(&mut self.generators, &self.table, self.dialect);
        self.log_bindings();
        debug!(
            table = %self.table.name,
            generators = self.generators.len(),
            "Default generators set"
        );
        Ok(())
    }

    /// Bind `generator` to `column`, replacing any earlier binding.
    pub fn set_generator(&mut self, column: impl Into<String>, generator: GeneratorConfig) {
        self.generators.set(column, generator);
    }

    /// Apply per-column overrides, rejecting columns the table does not have.
    pub fn apply_overrides(&mut self, overrides: &GeneratorOverrides) -> Result<(), LoaderError> {
        overrides.apply(&mut self.generators, &self.table)?;
        self.log_bindings();
        Ok(())
    }

    fn log_bindings(&self) {
        for column in &self.table.columns {
            match self.generators.get(&column.name) {
                Some(config) => debug!(
                    column = %column.name,
                    data_type = %column.data_type,
                    generator = config.kind(),
                    "Column bound"
                ),
                None => debug!(
                    column = %column.name,
                    data_type = %column.data_type,
                    "Column skipped"
                ),
            }
        }
    }

    /// The INSERT statement over every column that has a generator.
    pub fn insert_statement(&self) -> Result<InsertStatement, LoaderError> {
        let columns: Vec<String> = self
            .generators
            .eligible_columns(&self.table)
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        if columns.is_empty() {
            return Err(LoaderError::NoEligibleColumns {
                table: self.table.name.clone(),
            });
        }
        Ok(InsertStatement::new(&self.table.name, columns, self.dialect))
    }

    /// Generate and insert `num_rows` rows.
    ///
    /// `channel_capacity` bounds how many generated rows may wait for a
    /// worker. Cancellation is not an error: the stats cover whatever was
    /// committed. If any worker fails the others keep draining the channel
    /// and [`LoaderError::Workers`] reports every failure after all tasks
    /// have joined.
    pub async fn load_data(
        &self,
        cancel: CancellationToken,
        num_rows: u64,
        channel_capacity: usize,
    ) -> Result<LoadStats, LoaderError> {
        if channel_capacity == 0 {
            return Err(LoaderError::InvalidConfig(
                "channel capacity must be at least 1".to_string(),
            ));
        }

        let eligible = self.generators.eligible_columns(&self.table);
        let statement = self.insert_statement()?;
        let generators: Arc<[GeneratorConfig]> =
            eligible.into_iter().map(|(_, config)| config).collect();

        info!(
            table = %self.table.name,
            rows = num_rows,
            columns = statement.columns.len(),
            workers = self.parallelism,
            batch_size = self.batch_size,
            "Starting load"
        );
        debug!("Insert statement: {}", statement.sql);

        let start = Instant::now();
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (tx, rx) = async_channel::bounded(channel_capacity);
        let sql: Arc<str> = Arc::from(statement.sql.as_str());

        let mut workers = Vec::with_capacity(self.parallelism);
        for id in 0..self.parallelism {
            let worker = Worker {
                id,
                database: self.database.clone(),
                sql: sql.clone(),
                batch_size: self.batch_size,
                rows: rx.clone(),
                cancel: cancel.clone(),
            };
            workers.push(tokio::spawn(worker.run()));
        }

        // Drop our receiver so the producer sees a closed channel if every worker stops
        drop(rx);

        let producer = tokio::spawn(producer::produce_rows(
            generators,
            rng,
            num_rows,
            tx,
            cancel.clone(),
        ));

        // Join every task before reporting a panic so none is left detached
        let produced = producer.await;

        let mut stats = LoadStats::default();
        let mut failures = Vec::new();
        let mut join_error = None;
        for handle in workers {
            match handle.await {
                Ok(outcome) => {
                    stats.rows_inserted += outcome.rows_committed;
                    stats.commits += outcome.commits;
                    if let Some(err) = outcome.error {
                        failures.push(err);
                    }
                }
                Err(err) => {
                    join_error.get_or_insert(err);
                }
            }
        }

        stats.rows_generated = produced?;
        if let Some(err) = join_error {
            return Err(err.into());
        }
        stats.failed_workers = failures.len();
        stats.elapsed = start.elapsed();

        if cancel.is_cancelled() && stats.rows_generated < num_rows {
            warn!(
                rows = stats.rows_inserted,
                "Load cancelled before all rows were inserted"
            );
        }

        if failures.is_empty() {
            Ok(stats)
        } else {
            Err(LoaderError::Workers { failures, stats })
        }
    }
}
