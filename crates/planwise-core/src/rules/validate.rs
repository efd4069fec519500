//! Plan-type-dependent validation rules.

use rust_decimal::Decimal;

use crate::models::{PlanDefinition, PlanType, ValidationReport};

/// Minimum number of distinct terms a multi-term plan must include.
pub const MIN_MULTI_TERM_COUNT: usize = 2;

/// Validate a plan definition against its declared plan type.
///
/// Checks run in a fixed order and accumulate every failure rather than
/// stopping at the first, so the caller can surface all of them in one
/// pass:
///
/// 1. `name` present and non-blank after trimming
/// 2. `description` present and non-blank after trimming
/// 3. `price` greater than zero
/// 4. `plan_type` present; when it is missing the report contains only
///    this issue, since none of the type-specific rules can be evaluated
/// 5. the type-specific rules:
///    - [`PlanType::SingleTerm`] requires `subject_id` and `term_id`
///    - [`PlanType::MultiTerm`] requires `subject_id` and at least two
///      distinct entries in `included_term_ids` (blank segments discarded)
///    - [`PlanType::FullYear`] requires `year_id`
///    - [`PlanType::SubjectAnnual`] requires `subject_id`
///
/// # Examples
///
/// ```rust
/// use planwise_core::models::{PlanDefinition, PlanType};
/// use planwise_core::rules::validate;
/// use rust_decimal_macros::dec;
///
/// let plan = PlanDefinition {
///     name: "Science 2 Terms".to_string(),
///     description: "Science for terms 1 and 2".to_string(),
///     price: dec!(89.98),
///     plan_type: Some(PlanType::MultiTerm),
///     subject_id: Some(3),
///     included_term_ids: Some("12,13".to_string()),
///     ..PlanDefinition::default()
/// };
/// assert!(validate(&plan).is_valid());
/// ```
pub fn validate(plan: &PlanDefinition) -> ValidationReport {
    let mut report = ValidationReport::valid();

    if plan.name.trim().is_empty() {
        report.push("name", "A plan name is required");
    }
    if plan.description.trim().is_empty() {
        report.push("description", "A plan description is required");
    }
    if plan.price <= Decimal::ZERO {
        report.push("price", "The price must be greater than zero");
    }

    // Without a plan type none of the remaining rules apply; the report
    // carries only this issue.
    let Some(plan_type) = plan.plan_type else {
        return ValidationReport::single("plan_type", "A plan type must be selected");
    };

    match plan_type {
        PlanType::SingleTerm => {
            if plan.subject_id.is_none() {
                report.push("subject_id", "Single term plans require a subject");
            }
            if plan.term_id.is_none() {
                report.push("term_id", "Single term plans require a term");
            }
        }
        PlanType::MultiTerm => {
            if plan.subject_id.is_none() {
                report.push("subject_id", "Multi term plans require a subject");
            }
            if plan.included_term_count() < MIN_MULTI_TERM_COUNT {
                report.push(
                    "included_term_ids",
                    "Multi term plans require at least two included terms",
                );
            }
        }
        PlanType::FullYear => {
            if plan.year_id.is_none() {
                report.push("year_id", "Full year plans require a year");
            }
        }
        PlanType::SubjectAnnual => {
            if plan.subject_id.is_none() {
                report.push("subject_id", "Subject annual plans require a subject");
            }
        }
    }

    report
}
