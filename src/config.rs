use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::drain::DEFAULT_TIMEOUT;
use crate::error::{ConfigError, Result};
use crate::record::Person;

/// Inputs for a single program run.
///
/// Every field has a default, so an empty or partial TOML file is valid and
/// running without a config file reproduces the built-in scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub sum_a: i64,
    pub sum_b: i64,
    pub numbers: Vec<i64>,
    pub timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: "Alice".to_string(),
            age: 30,
            email: None,
            sum_a: 5,
            sum_b: 3,
            numbers: vec![1, 2, 3, 4, 5],
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl RunConfig {
    /// Load from `config_path`, or return defaults when no path is given.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<RunConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms));
        }
        Ok(())
    }

    pub fn person(&self) -> Person {
        let person = Person::new(self.name.clone(), self.age);
        match &self.email {
            Some(email) => person.with_email(email.clone()),
            None => person,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
