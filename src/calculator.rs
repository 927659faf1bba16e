//! Conditional sum

/// Returns `a + b` when `a` is positive, otherwise `0`.
///
/// Only `a` gates the result; a negative `b` is added as-is. The addition
/// wraps on overflow.
pub fn add_if_positive(a: i64, b: i64) -> i64 {
    if a > 0 {
        a.wrapping_add(b)
    } else {
        0
    }
}

/// Calculator that remembers every sum it evaluated.
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `add_if_positive` and record it as `"a + b = result"`.
    pub fn add_if_positive(&mut self, a: i64, b: i64) -> i64 {
        let result = add_if_positive(a, b);
        self.history.push(format!("{} + {} = {}", a, b, result));
        result
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
