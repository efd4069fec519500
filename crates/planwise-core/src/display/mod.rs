//! Display formatting for rule-engine output.
//!
//! Domain models carry data only; their `Display` implementations and the
//! wrapper types that add context (a check report for a specific plan, a
//! suggestion block) live here. All formatters produce markdown so the CLI
//! can render them richly in a terminal or print them as plain text.

pub mod models;
pub mod results;

pub use results::{CheckResult, Suggestions};
