//! Async doubling stream
//!
//! A spawned producer task writes each input doubled into a bounded
//! `tokio::sync::mpsc` channel and drops its sender when done, so the
//! consumer sees `None` from `recv()` once every value has been read.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawn a producer that sends `v * 2` for every `v` in `values`, in order.
///
/// The channel holds the whole sequence, so the producer runs to completion
/// without waiting on the consumer. The task is detached; if the receiver is
/// dropped early it stops at the next send. Doubling wraps on overflow.
///
/// Must be called from within a tokio runtime.
pub fn process_async(values: &[i64]) -> mpsc::Receiver<i64> {
    let (rx, _producer) = spawn_producer(values);
    rx
}

/// Spawn the producer task and return its handle alongside the receiver.
pub(crate) fn spawn_producer(values: &[i64]) -> (mpsc::Receiver<i64>, JoinHandle<()>) {
    // tokio rejects a zero-capacity channel
    let (tx, rx) = mpsc::channel::<i64>(values.len().max(1));
    let values = values.to_vec();

    let handle = tokio::spawn(async move {
        debug!(count = values.len(), "doubler started");
        for value in values {
            if tx.send(value.wrapping_mul(2)).await.is_err() {
                debug!("doubler receiver dropped, stopping");
                return;
            }
        }
        debug!("doubler finished, closing channel");
    });

    (rx, handle)
}
