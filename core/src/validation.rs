//! Presence validation shared by both resources.
//!
//! Violations are collected in field order so one failed request reports
//! every blank field, e.g.
//! `Validation failed: Title can't be blank, Created by can't be blank`.

use std::fmt;

use thiserror::Error;

const BLANK: &str = "can't be blank";

/// A single violated constraint. `field` is the human-readable label
/// ("Created by"), not the wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Ordered list of violations found while validating one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join(.0))]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field` if `value` is blank (empty or only
    /// whitespace).
    pub fn require(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.0.push(Violation {
                field,
                message: BLANK,
            });
        }
        self
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
