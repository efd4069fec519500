//! The plan rule engine: validation, name suggestion, price suggestion.
//!
//! Every function in this module is a pure function of its inputs: no I/O,
//! no state, no clock. Validation gates submission; the two suggestion
//! operations produce non-binding defaults the caller may apply to empty or
//! previously auto-generated fields. Calling any of them twice on the same
//! input yields identical results.

pub mod naming;
pub mod pricing;
pub mod validate;


pub use naming::{is_generated_name, suggested_name};
pub use pricing::{suggested_price, PricingConfig};
pub use validate::validate;
