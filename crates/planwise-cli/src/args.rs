use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Planwise plan-checking tool
///
/// Planwise applies an educational platform's subscription-plan business
/// rules from the command line: it validates plan records against their
/// declared plan type and computes the suggested display name and price a
/// data-entry UI would offer. Plan records and lookup catalogs are plain
/// JSON files; nothing is fetched or persisted.
#[derive(Parser)]
#[command(version, about, name = "planwise")]
pub struct Args {
    /// Path to a JSON file with subject/term/year lookup tables. Names and
    /// year-based prices cannot resolve without one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Path to a JSON pricing configuration. Defaults to the built-in
    /// year-7-to-12 price table
    #[arg(long, global = true)]
    pub pricing_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Planwise CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan record; exits non-zero when the plan has issues
    #[command(alias = "c")]
    Check {
        /// Path to the plan JSON file
        plan_file: PathBuf,
    },
    /// Compute non-binding suggestions for a plan
    #[command(alias = "s")]
    Suggest {
        #[command(subcommand)]
        command: SuggestCommands,
    },
    /// List the plan types and the fields each one requires
    Types,
}

/// Suggestion subcommands
#[derive(Subcommand)]
pub enum SuggestCommands {
    /// Suggest a display name from the plan's subject/term/year selections
    Name {
        /// Path to the plan JSON file
        plan_file: PathBuf,
    },
    /// Suggest a price from the plan's year and type
    Price {
        /// Path to the plan JSON file
        plan_file: PathBuf,
        /// Selected term count for multi-term plans. Defaults to the count
        /// parsed from the plan's included term ids
        #[arg(long)]
        terms: Option<u32>,
    },
}
