//! Numeric Context
//!
//! The single shared number used to resolve `{number}` formula tokens.

/// User-editable global number, defaulting to 1. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericContext {
    value: i64,
}

impl Default for NumericContext {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl NumericContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set(&mut self, value: i64) {
        self.value = value;
    }
}
