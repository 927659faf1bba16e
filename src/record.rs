//! Person record and its text rendering

use std::fmt;

use serde::{Deserialize, Serialize};

/// Age at which `is_adult` starts returning true.
const ADULT_AGE: i64 = 18;

/// A named person with an age.
///
/// No validation happens at construction: empty names and zero or negative
/// ages are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    /// Create a person without an email.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
            email: None,
        }
    }

    /// Attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Compact JSON with `name`, `age` and (when set) `email` keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{Name: {}, Age: {}}}", self.name, self.age)
    }
}
