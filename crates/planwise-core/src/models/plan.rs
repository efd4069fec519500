//! Plan definition record and related functionality.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PlanType;
use crate::error::{PlanwiseError, Result};

/// A subscription plan as collected from a data-entry form.
///
/// The record is transient: it is constructed in UI state, validated with
/// [`crate::rules::validate`], optionally enriched with suggested name and
/// price, and then handed to the backend for persistence. Fields may be
/// partially populated; the rule engine reports what is missing rather than
/// the type system enforcing it, because a half-filled form must be
/// representable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDefinition {
    /// Display name of the plan
    #[serde(default)]
    pub name: String,

    /// Description shown to subscribers
    #[serde(default)]
    pub description: String,

    /// Price in the platform currency; must be positive to pass validation
    #[serde(default)]
    pub price: Decimal,

    /// Plan type selecting which of the fields below are mandatory
    #[serde(default)]
    pub plan_type: Option<PlanType>,

    /// Academic subject this plan covers
    #[serde(default)]
    pub subject_id: Option<u64>,

    /// Single academic term (used by single-term plans)
    #[serde(default)]
    pub term_id: Option<u64>,

    /// Academic year (used by full-year plans and price suggestion)
    #[serde(default)]
    pub year_id: Option<u64>,

    /// Comma-separated term ids (used only by multi-term plans)
    #[serde(default)]
    pub included_term_ids: Option<String>,

    /// Whether the plan is offered for purchase
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for PlanDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            plan_type: None,
            subject_id: None,
            term_id: None,
            year_id: None,
            included_term_ids: None,
            is_active: true,
        }
    }
}

impl PlanDefinition {
    /// Load a plan record from a JSON file.
    ///
    /// # Errors
    ///
    /// * [`PlanwiseError::FileSystem`] - When the file cannot be read
    /// * [`PlanwiseError::Serialization`] - When the JSON is malformed
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlanwiseError::file_system(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The distinct, non-blank segments of `included_term_ids`, in
    /// first-seen order.
    ///
    /// Whitespace-only and empty segments are discarded before counting, so
    /// `"12,,13"` yields two terms and `"12, 12"` yields one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwise_core::models::PlanDefinition;
    ///
    /// let plan = PlanDefinition {
    ///     included_term_ids: Some("12, ,13,12".to_string()),
    ///     ..PlanDefinition::default()
    /// };
    /// assert_eq!(plan.included_terms(), vec!["12", "13"]);
    /// ```
    pub fn included_terms(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        if let Some(ids) = &self.included_term_ids {
            for segment in ids.split(',') {
                let segment = segment.trim();
                if !segment.is_empty() && !seen.contains(&segment) {
                    seen.push(segment);
                }
            }
        }
        seen
    }

    /// Number of distinct selected terms.
    pub fn included_term_count(&self) -> usize {
        self.included_terms().len()
    }
}
