//! Command handlers wiring the rule engine to the terminal.
//!
//! Each handler loads what it needs from the JSON files given on the
//! command line, runs the pure rule functions from `planwise-core`, and
//! renders their markdown output. The handlers own no business logic of
//! their own; they decide only process-level concerns such as the `check`
//! exit code.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{debug, info};
use planwise_core::{
    display::{CheckResult, Suggestions},
    models::{Catalog, PlanDefinition, PlanType},
    rules::{self, PricingConfig},
};

use crate::renderer::Renderer;

/// CLI command dispatcher holding the loaded lookup data and renderer.
pub struct Cli {
    catalog: Catalog,
    pricing: PricingConfig,
    renderer: Renderer,
}

impl Cli {
    /// Create a new command dispatcher.
    pub fn new(catalog: Catalog, pricing: PricingConfig, renderer: Renderer) -> Self {
        Self {
            catalog,
            pricing,
            renderer,
        }
    }

    /// Validate a plan record and report every issue.
    ///
    /// Returns a failure exit code when the plan is invalid so scripts can
    /// gate on the result; the issues themselves are ordinary output, not
    /// errors.
    pub fn check_plan(&self, plan_file: &Path) -> Result<ExitCode> {
        let plan = load_plan(plan_file)?;
        let report = rules::validate(&plan);
        info!("Checked plan '{}': {} issue(s)", plan.name, report.len());

        self.renderer
            .render(&format!("{}", CheckResult::new(&plan, &report)))?;

        if report.is_valid() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }

    /// Print the suggested display name for a plan.
    pub fn suggest_name(&self, plan_file: &Path) -> Result<ExitCode> {
        let plan = load_plan(plan_file)?;
        let name = rules::suggested_name(&plan, &self.catalog);
        debug!("Suggested name for '{}': '{name}'", plan.name);

        let mut output = format!("{}", Suggestions::new().with_name(name));
        if !plan.name.trim().is_empty() && !rules::is_generated_name(&plan.name, &self.catalog) {
            writeln!(
                output,
                "\nThe current name `{}` looks hand-edited; apply the suggestion deliberately.",
                plan.name
            )?;
        }
        self.renderer.render(&output)?;
        Ok(ExitCode::SUCCESS)
    }

    /// Print the suggested price for a plan.
    pub fn suggest_price(&self, plan_file: &Path, terms: Option<u32>) -> Result<ExitCode> {
        let plan = load_plan(plan_file)?;
        let term_count = terms
            .unwrap_or_else(|| u32::try_from(plan.included_term_count()).unwrap_or(u32::MAX));
        let price = rules::suggested_price(&plan, &self.pricing, term_count);
        debug!(
            "Suggested price for '{}' with {term_count} term(s): {price:?}",
            plan.name
        );

        self.renderer
            .render(&format!("{}", Suggestions::new().with_price(price)))?;
        Ok(ExitCode::SUCCESS)
    }

    /// List the plan types with their required fields.
    pub fn list_types(&self) -> Result<ExitCode> {
        let mut output = String::from("# Plan types\n\n");
        for plan_type in PlanType::ALL {
            writeln!(
                output,
                "- **{}** (`{}`): {}",
                plan_type.label(),
                plan_type.as_str(),
                plan_type.requirements()
            )?;
        }
        self.renderer.render(&output)?;
        Ok(ExitCode::SUCCESS)
    }
}

fn load_plan(path: &Path) -> Result<PlanDefinition> {
    PlanDefinition::from_json_file(path)
        .with_context(|| format!("Failed to load plan from {}", path.display()))
}
