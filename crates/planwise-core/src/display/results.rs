//! Wrapper types for formatting operation results.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::{PlanDefinition, ValidationReport};

/// A validation report paired with the plan it describes.
///
/// Wrappers hold references, not owned data; build one right before
/// formatting.
pub struct CheckResult<'a> {
    plan: &'a PlanDefinition,
    report: &'a ValidationReport,
}

impl<'a> CheckResult<'a> {
    /// Pair a plan with its validation report for display.
    pub fn new(plan: &'a PlanDefinition, report: &'a ValidationReport) -> Self {
        Self { plan, report }
    }
}

impl fmt::Display for CheckResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.plan.name.trim().is_empty() {
            "(unnamed plan)"
        } else {
            self.plan.name.as_str()
        };

        if self.report.is_valid() {
            writeln!(f, "# Plan check: {name}")?;
            writeln!(f)?;
            writeln!(f, "All checks passed. The plan is ready to save.")?;
        } else {
            writeln!(f, "# Plan check: {name}")?;
            writeln!(f)?;
            writeln!(
                f,
                "{} issue(s) must be fixed before this plan can be saved:",
                self.report.len()
            )?;
            writeln!(f)?;
            for issue in &self.report.issues {
                writeln!(f, "- {issue}")?;
            }
        }
        Ok(())
    }
}

/// Suggested name and/or price for a plan, formatted together.
///
/// Only the suggestions attached via the `with_*` methods are printed, so
/// a name-only request does not mention prices at all. An attached but
/// unresolvable suggestion (empty name, `None` price) prints as an
/// explanatory line rather than being dropped.
#[derive(Default)]
pub struct Suggestions {
    name: Option<String>,
    price: Option<Decimal>,
    price_requested: bool,
}

impl Suggestions {
    /// An empty suggestion block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a name suggestion (empty means nothing could be composed).
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Attach a price suggestion (`None` means no plan type to price).
    pub fn with_price(mut self, price: Option<Decimal>) -> Self {
        self.price = price;
        self.price_requested = true;
        self
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Suggestions")?;
        writeln!(f)?;
        if let Some(name) = &self.name {
            if name.is_empty() {
                writeln!(f, "- **Name:** no suggestion for the current selections")?;
            } else {
                writeln!(f, "- **Name:** {name}")?;
            }
        }
        if self.price_requested {
            match self.price {
                Some(p) => writeln!(f, "- **Price:** {p}")?,
                None => writeln!(f, "- **Price:** no suggestion without a plan type")?,
            }
        }
        Ok(())
    }
}
