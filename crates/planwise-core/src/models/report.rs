//! Validation results reported as data.

use serde::{Deserialize, Serialize};

/// A single validation failure: the offending field and a message a user
/// can act on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the plan field that failed validation
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The outcome of validating a plan definition.
///
/// All failures for a submission attempt are accumulated and surfaced
/// together so a user can fix every problem in a single pass. An empty
/// issue list means the plan is valid. The engine never returns `Err` for a
/// malformed plan; form errors are expected, recoverable outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Accumulated failures, in the order the checks ran
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A report with no issues.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A report containing exactly one issue.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue::new(field, message)],
        }
    }

    /// True iff no check failed.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Record a failure.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message));
    }

    /// Issues recorded against a specific field.
    pub fn issues_for(&self, field: &str) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.field == field).collect()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True iff the report holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
