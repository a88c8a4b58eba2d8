//! The row stream producer.

use async_channel::Sender;
use loader_core::Row;
use loader_generator::{generate_value, GeneratorConfig};
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Publish up to `num_rows` generated rows and return how many were sent.
///
/// Stops early when `cancel` fires or when every receiver has gone away.
/// Dropping `rows` on return closes the channel for the workers.
pub(crate) async fn produce_rows(
    generators: Arc<[GeneratorConfig]>,
    mut rng: StdRng,
    num_rows: u64,
    rows: Sender<Row>,
    cancel: CancellationToken,
) -> u64 {
    let mut published = 0u64;

    while published < num_rows {
        if cancel.is_cancelled() {
            debug!(rows = published, "Producer cancelled");
            break;
        }

        let row: Row = generators
            .iter()
            .map(|generator| generate_value(generator, &mut rng))
            .collect();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(rows = published, "Producer cancelled while waiting for capacity");
                break;
            }
            sent = rows.send(row) => {
                if sent.is_err() {
                    debug!(rows = published, "All workers stopped, producer exiting");
                    break;
                }
            }
        }

        published += 1;
    }

    published
}
