//! Display implementations for the domain models.

use std::fmt;

use crate::models::{PlanDefinition, PlanType, ValidationIssue};

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {}", self.field, self.message)
    }
}

impl fmt::Display for PlanDefinition {
    /// Markdown summary of a plan record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.trim().is_empty() {
            "(unnamed plan)"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;

        match self.plan_type {
            Some(t) => writeln!(f, "- **Type:** {t}")?,
            None => writeln!(f, "- **Type:** not selected")?,
        }
        writeln!(f, "- **Price:** {}", self.price)?;
        writeln!(
            f,
            "- **Active:** {}",
            if self.is_active { "yes" } else { "no" }
        )?;
        if let Some(id) = self.subject_id {
            writeln!(f, "- **Subject id:** {id}")?;
        }
        if let Some(id) = self.term_id {
            writeln!(f, "- **Term id:** {id}")?;
        }
        if let Some(id) = self.year_id {
            writeln!(f, "- **Year id:** {id}")?;
        }
        let terms = self.included_terms();
        if !terms.is_empty() {
            writeln!(f, "- **Included terms:** {}", terms.join(", "))?;
        }

        if !self.description.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}
