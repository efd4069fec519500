//! Planwise CLI Application
//!
//! Command-line interface for the planwise subscription-plan rule engine.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands, SuggestCommands};
use clap::Parser;
use cli::Cli;
use log::info;
use planwise_core::{models::Catalog, rules::PricingConfig};
use renderer::Renderer;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        catalog_file,
        pricing_file,
        no_color,
        command,
    } = Args::parse();

    let catalog = match catalog_file {
        Some(path) => Catalog::from_json_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::default(),
    };
    let pricing = match pricing_file {
        Some(path) => PricingConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load pricing config from {}", path.display()))?,
        None => PricingConfig::default(),
    };

    let renderer = Renderer::new(!no_color);
    let cli = Cli::new(catalog, pricing, renderer);

    info!("Planwise started");

    match command {
        Commands::Check { plan_file } => cli.check_plan(&plan_file),
        Commands::Suggest { command } => match command {
            SuggestCommands::Name { plan_file } => cli.suggest_name(&plan_file),
            SuggestCommands::Price { plan_file, terms } => cli.suggest_price(&plan_file, terms),
        },
        Commands::Types => cli.list_types(),
    }
}
