//! sample-project library
//!
//! A person record, a conditional sum, and an async doubling stream drained
//! under a per-value timeout.

pub mod app;
pub mod calculator;
pub mod config;
pub mod doubler;
pub mod drain;
pub mod error;
pub mod record;

// Re-export main types for convenience
pub use app::RecordFormat;
pub use calculator::{add_if_positive, Calculator};
pub use config::RunConfig;
pub use doubler::process_async;
pub use drain::{DrainOutcome, DEFAULT_TIMEOUT};
pub use error::ConfigError;
pub use record::Person;
