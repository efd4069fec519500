//! Core library for the Planwise subscription-plan tooling.
//!
//! This crate provides the business rules an educational platform applies to
//! subscription plan records before they are persisted: plan-type-dependent
//! validation, suggested display names composed from subject/term/year
//! lookups, and suggested prices derived from a configurable per-year price
//! table.
//!
//! # Design
//!
//! The rule functions in [`rules`] are pure: they take a plan record and
//! read-only lookup data, and return results as values. Validation failures
//! are reported as data ([`models::ValidationReport`]), never as `Err`;
//! user-facing form errors are expected, recoverable outcomes. The error
//! type in [`error`] covers the surrounding concerns only (loading catalog
//! and pricing files, bad input at the interface boundary).
//!
//! Display formatting lives in [`display`], separate from the domain models,
//! so the same data can be rendered differently per context (check reports,
//! suggestion output, plan summaries).
//!
//! # Quick Start
//!
//! ```rust
//! use planwise_core::models::{PlanDefinition, PlanType};
//! use planwise_core::rules;
//! use rust_decimal_macros::dec;
//!
//! let plan = PlanDefinition {
//!     name: "Mathematics Term 1".to_string(),
//!     description: "Term 1 access to Mathematics".to_string(),
//!     price: dec!(49.99),
//!     plan_type: Some(PlanType::SingleTerm),
//!     subject_id: Some(5),
//!     term_id: Some(12),
//!     ..PlanDefinition::default()
//! };
//!
//! let report = rules::validate(&plan);
//! assert!(report.is_valid());
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod rules;

// Re-export commonly used types
pub use display::{CheckResult, Suggestions};
pub use error::{PlanwiseError, Result};
pub use models::{
    Catalog, CatalogEntry, PlanDefinition, PlanType, ValidationIssue, ValidationReport,
};
pub use rules::{is_generated_name, suggested_name, suggested_price, validate, PricingConfig};
