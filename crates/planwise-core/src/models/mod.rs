//! Data models for subscription plans and lookup catalogs.
//!
//! This module contains the domain records the rule engine operates on: the
//! transient [`PlanDefinition`] being validated, the closed [`PlanType`]
//! enumeration that selects which fields are mandatory, the read-only
//! [`Catalog`] of subject/term/year display names supplied by collaborators,
//! and the [`ValidationReport`] the engine returns.
//!
//! Display implementations for these models are located in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! All models (de)serialize with serde: the surrounding system ships these
//! records to a REST backend as JSON, and partially populated form state
//! must deserialize without error, so every field carries a default.

pub mod catalog;
pub mod plan;
pub mod plan_type;
pub mod report;


// Re-export all public types at the models level
pub use catalog::{Catalog, CatalogEntry};
pub use plan::PlanDefinition;
pub use plan_type::PlanType;
pub use report::{ValidationIssue, ValidationReport};
