//! Timeout-bounded consumption of a result channel

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Default wait for the next value before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// How a drain loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// The producer closed the channel after `received` values.
    Closed { received: usize },
    /// No value or close arrived within one timeout window.
    TimedOut { received: usize },
}

impl DrainOutcome {
    pub fn received(&self) -> usize {
        match self {
            DrainOutcome::Closed { received } | DrainOutcome::TimedOut { received } => *received,
        }
    }
}

/// Read values from `rx` and write one `Result: <v>` line per value to `out`.
///
/// Each wait races `recv()` against a fresh `timeout` timer, so the window
/// restarts after every value rather than bounding the whole loop. When the
/// timer wins a `Timeout` line is written and the loop stops.
pub async fn drain<W: Write>(
    rx: &mut mpsc::Receiver<i64>,
    timeout: Duration,
    out: &mut W,
) -> Result<DrainOutcome> {
    let mut received = 0;

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Some(value) => {
                        writeln!(out, "Result: {}", value)?;
                        received += 1;
                    }
                    None => {
                        debug!(received, "result channel closed");
                        return Ok(DrainOutcome::Closed { received });
                    }
                }
            }

            _ = tokio::time::sleep(timeout) => {
                writeln!(out, "Timeout")?;
                warn!(received, timeout_ms = timeout.as_millis() as u64, "timed out waiting for result");
                return Ok(DrainOutcome::TimedOut { received });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf)
            .lines()
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn test_drains_until_closed() {
        let (tx, mut rx) = mpsc::channel(4);
        for v in [2, 4, 6] {
            tx.send(v).await.unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        let outcome = drain(&mut rx, DEFAULT_TIMEOUT, &mut out).await.unwrap();

        assert_eq!(outcome, DrainOutcome::Closed { received: 3 });
        assert_eq!(lines(&out), vec!["Result: 2", "Result: 4", "Result: 6"]);
    }

    #[tokio::test]
    async fn test_closed_empty_channel_prints_nothing() {
        let (tx, mut rx) = mpsc::channel::<i64>(1);
        drop(tx);

        let mut out = Vec::new();
        let outcome = drain(&mut rx, DEFAULT_TIMEOUT, &mut out).await.unwrap();

        assert_eq!(outcome, DrainOutcome::Closed { received: 0 });
        assert!(out.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_silent_open_channel_times_out() {
        let (tx, mut rx) = mpsc::channel::<i64>(4);
        tx.send(7).await.unwrap();

        let mut out = Vec::new();
        let outcome = drain(&mut rx, DEFAULT_TIMEOUT, &mut out).await.unwrap();

        assert_eq!(outcome, DrainOutcome::TimedOut { received: 1 });
        assert_eq!(outcome.received(), 1);
        assert_eq!(lines(&out), vec!["Result: 7", "Timeout"]);
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_rearms_per_value() {
        let (tx, mut rx) = mpsc::channel::<i64>(4);

        // Four values 600ms apart: 2.4s total, but no single wait exceeds 1s
        tokio::spawn(async move {
            for v in 1..=4 {
                tokio::time::sleep(Duration::from_millis(600)).await;
                if tx.send(v).await.is_err() {
                    return;
                }
            }
        });

        let mut out = Vec::new();
        let outcome = drain(&mut rx, DEFAULT_TIMEOUT, &mut out).await.unwrap();

        assert_eq!(outcome, DrainOutcome::Closed { received: 4 });
        assert!(!lines(&out).iter().any(|l| l == "Timeout"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timeout_applies() {
        let (tx, mut rx) = mpsc::channel::<i64>(1);
        let start = tokio::time::Instant::now();

        let mut out = Vec::new();
        let outcome = drain(&mut rx, Duration::from_millis(250), &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, DrainOutcome::TimedOut { received: 0 });
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert!(start.elapsed() < DEFAULT_TIMEOUT);
        drop(tx);
    }
}
