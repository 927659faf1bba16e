//! Program flow: record line, sum line, then the doubled results

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::calculator::Calculator;
use crate::config::RunConfig;
use crate::doubler;
use crate::drain::{self, DrainOutcome};

/// How the record line is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// `Person{Name: <name>, Age: <age>}`.
    #[default]
    Text,
    /// Compact JSON object.
    Json,
}

/// Run the whole flow against `out`.
///
/// Must be called from within a tokio runtime.
pub async fn run<W: Write>(
    config: &RunConfig,
    format: RecordFormat,
    out: &mut W,
) -> Result<DrainOutcome> {
    let person = config.person();
    match format {
        RecordFormat::Text => writeln!(out, "{}", person)?,
        RecordFormat::Json => {
            let json = person.to_json().context("failed to serialize person")?;
            writeln!(out, "{}", json)?;
        }
    }
    debug!(adult = person.is_adult(), "rendered person");

    let mut calc = Calculator::new();
    let sum = calc.add_if_positive(config.sum_a, config.sum_b);
    writeln!(out, "Sum: {}", sum)?;
    debug!(history = ?calc.history(), "calculator history");

    let mut results = doubler::process_async(&config.numbers);
    let outcome = drain::drain(&mut results, config.timeout(), out).await?;
    out.flush()?;

    info!(received = outcome.received(), ?outcome, "run complete");
    Ok(outcome)
}
