//! A batched loader worker.
//!
//! Each worker owns one session. It pulls rows from the shared channel,
//! executes the prepared insert once per row and commits every `batch_size`
//! rows, then begins a new transaction and prepares again.

use crate::loader::error::{Stage, WorkerError};
use async_channel::Receiver;
use loader_core::{Database, Row, Session, SessionError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// What a worker achieved before it stopped.
#[derive(Debug, Default)]
pub(crate) struct WorkerOutcome {
    pub rows_committed: u64,
    pub commits: u64,
    pub error: Option<WorkerError>,
}

pub(crate) struct Worker {
    pub id: usize,
    pub database: Arc<dyn Database>,
    pub sql: Arc<str>,
    pub batch_size: usize,
    pub rows: Receiver<Row>,
    pub cancel: CancellationToken,
}

impl Worker {
    pub async fn run(self) -> WorkerOutcome {
        let mut outcome = WorkerOutcome::default();
        let mut session: Option<Box<dyn Session>> = None;

        if let Err(err) = self.load(&mut session, &mut outcome).await {
            if let Some(session) = session.as_mut() {
                if let Err(rollback_err) = session.rollback().await {
                    warn!(worker = self.id, "Rollback after failure also failed: {rollback_err}");
                }
            }
            error!(
                worker = self.id,
                stage = %err.stage,
                "Worker stopped: {}",
                err.source
            );
            outcome.error = Some(err);
        }

        outcome
    }

    async fn load(
        &self,
        slot: &mut Option<Box<dyn Session>>,
        outcome: &mut WorkerOutcome,
    ) -> Result<(), WorkerError> {
        let opened = self
            .database
            .open_session()
            .await
            .map_err(|e| self.fail(Stage::Connect, e))?;
        let session = slot.insert(opened);

        self.start_batch(&mut **session).await?;
        let mut pending = 0usize;

        loop {
            let row = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!(worker = self.id, "Worker cancelled");
                    break;
                }
                row = self.rows.recv() => match row {
                    Ok(row) => row,
                    // Channel closed and drained
                    Err(_) => break,
                },
            };

            session
                .execute(&row)
                .await
                .map_err(|e| self.fail(Stage::Execute, e))?;
            pending += 1;

            if pending >= self.batch_size {
                self.commit(&mut **session, pending, outcome).await?;
                pending = 0;
                self.start_batch(&mut **session).await?;
            }
        }

        if pending > 0 {
            self.commit(&mut **session, pending, outcome).await?;
        } else {
            session
                .rollback()
                .await
                .map_err(|e| self.fail(Stage::Rollback, e))?;
        }

        debug!(
            worker = self.id,
            rows = outcome.rows_committed,
            commits = outcome.commits,
            "Worker finished"
        );
        Ok(())
    }

    async fn start_batch(&self, session: &mut dyn Session) -> Result<(), WorkerError> {
        session
            .begin()
            .await
            .map_err(|e| self.fail(Stage::Begin, e))?;
        session
            .prepare(&self.sql)
            .await
            .map_err(|e| self.fail(Stage::Prepare, e))
    }

    async fn commit(
        &self,
        session: &mut dyn Session,
        rows: usize,
        outcome: &mut WorkerOutcome,
    ) -> Result<(), WorkerError> {
        session
            .commit()
            .await
            .map_err(|e| self.fail(Stage::Commit, e))?;
        outcome.rows_committed += rows as u64;
        outcome.commits += 1;
        debug!(worker = self.id, rows, "Committed batch");
        Ok(())
    }

    fn fail(&self, stage: Stage, source: SessionError) -> WorkerError {
        WorkerError {
            worker_id: self.id,
            stage,
            source,
        }
    }
}
