//! The closed enumeration of subscription plan types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan types.
///
/// The plan type selects which identifying fields a plan must carry before
/// it may be saved (see [`crate::rules::validate`]) and which multiplier the
/// price suggestion applies (see [`crate::rules::suggested_price`]). The
/// original platform stored these as small integers; the closed enum gives
/// every plan-type switch exhaustiveness checking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// One subject for one academic term
    SingleTerm,

    /// One subject for a chosen set of terms (at least two)
    MultiTerm,

    /// Every subject for a whole academic year
    FullYear,

    /// One subject for a whole academic year
    SubjectAnnual,
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single_term" | "singleterm" => Ok(PlanType::SingleTerm),
            "multi_term" | "multiterm" => Ok(PlanType::MultiTerm),
            "full_year" | "fullyear" => Ok(PlanType::FullYear),
            "subject_annual" | "subjectannual" => Ok(PlanType::SubjectAnnual),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

impl PlanType {
    /// All plan types, in presentation order.
    pub const ALL: [PlanType; 4] = [
        PlanType::SingleTerm,
        PlanType::MultiTerm,
        PlanType::FullYear,
        PlanType::SubjectAnnual,
    ];

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::SingleTerm => "single_term",
            PlanType::MultiTerm => "multi_term",
            PlanType::FullYear => "full_year",
            PlanType::SubjectAnnual => "subject_annual",
        }
    }

    /// Human-readable label for pickers and reports.
    pub fn label(&self) -> &'static str {
        match self {
            PlanType::SingleTerm => "Single Term",
            PlanType::MultiTerm => "Multi Term",
            PlanType::FullYear => "Full Year",
            PlanType::SubjectAnnual => "Subject Annual",
        }
    }

    /// Short description of the fields this plan type requires.
    pub fn requirements(&self) -> &'static str {
        match self {
            PlanType::SingleTerm => "requires a subject and a term",
            PlanType::MultiTerm => "requires a subject and at least two included terms",
            PlanType::FullYear => "requires a year",
            PlanType::SubjectAnnual => "requires a subject",
        }
    }
}
