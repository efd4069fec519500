//! Suggested display names composed from catalog lookups.

use crate::models::{Catalog, PlanDefinition, PlanType};

/// Compose a suggested display name for a plan from resolved lookups.
///
/// The shape depends on the plan type:
///
/// - [`PlanType::SingleTerm`] → `"{subject} {term}"`
/// - [`PlanType::MultiTerm`] → `"{subject} {N} Terms"` where N is the
///   distinct selected term count
/// - [`PlanType::SubjectAnnual`] → `"{subject} Full Year"`
/// - [`PlanType::FullYear`] → `"Full Year Access"`
///
/// A `" - {year}"` suffix is appended whenever the plan's year resolves in
/// the catalog, and silently omitted when it does not. If the plan type is
/// missing, or a required subject/term ingredient does not resolve, the
/// suggestion is the empty string; callers treat that as "nothing to
/// offer", never as an error.
///
/// The input plan is never mutated; the caller decides whether to apply the
/// suggestion (see [`is_generated_name`]).
pub fn suggested_name(plan: &PlanDefinition, catalog: &Catalog) -> String {
    let Some(plan_type) = plan.plan_type else {
        return String::new();
    };

    let subject = plan.subject_id.and_then(|id| catalog.subject_name(id));
    let year = plan.year_id.and_then(|id| catalog.year_name(id));

    let base = match plan_type {
        PlanType::SingleTerm => {
            let term = plan.term_id.and_then(|id| catalog.term_name(id));
            match (subject, term) {
                (Some(s), Some(t)) => format!("{s} {t}"),
                _ => return String::new(),
            }
        }
        PlanType::MultiTerm => {
            let count = plan.included_term_count();
            match subject {
                Some(s) if count > 0 => format!("{s} {count} Terms"),
                _ => return String::new(),
            }
        }
        PlanType::SubjectAnnual => match subject {
            Some(s) => format!("{s} Full Year"),
            None => return String::new(),
        },
        PlanType::FullYear => "Full Year Access".to_string(),
    };

    match year {
        Some(y) => format!("{base} - {y}"),
        None => base,
    }
}

/// Whether a plan name looks like one of our generated suggestions.
///
/// The data-entry flow only auto-applies a fresh suggestion when the
/// current name is blank or was itself generated, so hand-edited names are
/// never clobbered. Centralizing the pattern recognition here keeps every
/// caller's notion of "generated" identical.
///
/// # Examples
///
/// ```rust
/// use planwise_core::models::{Catalog, CatalogEntry};
/// use planwise_core::rules::is_generated_name;
///
/// let catalog = Catalog {
///     subjects: vec![CatalogEntry { id: 5, display_name: "Mathematics".to_string() }],
///     terms: vec![CatalogEntry { id: 12, display_name: "Term 1".to_string() }],
///     years: vec![CatalogEntry { id: 3, display_name: "Year 9".to_string() }],
/// };
///
/// assert!(is_generated_name("", &catalog));
/// assert!(is_generated_name("Mathematics Term 1 - Year 9", &catalog));
/// assert!(is_generated_name("Mathematics 3 Terms", &catalog));
/// assert!(!is_generated_name("Springtime maths special", &catalog));
/// ```
pub fn is_generated_name(name: &str, catalog: &Catalog) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return true;
    }

    let stem = strip_year_suffix(name, catalog);

    if stem == "Full Year Access" {
        return true;
    }

    for subject in &catalog.subjects {
        let Some(rest) = stem
            .strip_prefix(subject.display_name.as_str())
            .and_then(|r| r.strip_prefix(' '))
        else {
            continue;
        };

        if rest == "Full Year" {
            return true;
        }
        if is_terms_count(rest) {
            return true;
        }
        if catalog.terms.iter().any(|t| t.display_name == rest) {
            return true;
        }
    }

    false
}

/// Remove a trailing `" - {year}"` suffix when the year is known to the
/// catalog.
fn strip_year_suffix<'a>(name: &'a str, catalog: &Catalog) -> &'a str {
    for year in &catalog.years {
        if let Some(stem) = name
            .strip_suffix(year.display_name.as_str())
            .and_then(|r| r.strip_suffix(" - "))
        {
            return stem;
        }
    }
    name
}

/// True for `"{N} Terms"` with a numeric N.
fn is_terms_count(rest: &str) -> bool {
    rest.strip_suffix(" Terms")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
