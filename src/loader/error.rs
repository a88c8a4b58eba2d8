//! Error types for the loader.

use crate::loader::LoadStats;
use loader_core::SessionError;
use loader_generator::OverrideError;
use std::fmt;
use thiserror::Error;

/// The step a worker was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Begin,
    Prepare,
    Execute,
    Commit,
    Rollback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Connect => "connect",
            Stage::Begin => "begin",
            Stage::Prepare => "prepare",
            Stage::Execute => "execute",
            Stage::Commit => "commit",
            Stage::Rollback => "rollback",
        };
        f.write_str(name)
    }
}

/// A worker stopped on a database error.
#[derive(Debug, Error)]
#[error("worker {worker_id} failed during {stage}: {source}")]
pub struct WorkerError {
    pub worker_id: usize,
    pub stage: Stage,
    #[source]
    pub source: SessionError,
}

/// Errors returned by [`TableDataLoader`](crate::TableDataLoader).
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Batch size, parallelism or channel capacity is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No column of the table has a generator.
    #[error("Table '{table}' has no columns with a generator")]
    NoEligibleColumns { table: String },

    /// Generator overrides could not be applied.
    #[error(transparent)]
    Overrides(#[from] OverrideError),

    /// One or more workers failed. Rows they had not committed are lost.
    #[error("{} worker(s) failed, {} rows inserted", failures.len(), stats.rows_inserted)]
    Workers {
        failures: Vec<WorkerError>,
        stats: LoadStats,
    },

    /// A producer or worker task panicked or was aborted.
    #[error("Loader task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_error_message() {
        let err = WorkerError {
            worker_id: 3,
            stage: Stage::Commit,
            source: SessionError::NotPrepared,
        };
        assert_eq!(
            err.to_string(),
            "worker 3 failed during commit: no statement has been prepared in this transaction"
        );
    }

    #[test]
    fn test_workers_error_message() {
        let err = LoaderError::Workers {
            failures: vec![WorkerError {
                worker_id: 0,
                stage: Stage::Execute,
                source: SessionError::NotPrepared,
            }],
            stats: LoadStats {
                rows_inserted: 99,
                ..Default::default()
            },
        };
        assert_eq!(err.to_string(), "1 worker(s) failed, 99 rows inserted");
    }
}
