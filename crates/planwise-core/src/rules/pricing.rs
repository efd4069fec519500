//! Suggested prices derived from a configurable per-year price table.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PlanwiseError, Result};
use crate::models::{PlanDefinition, PlanType};

/// Pricing configuration injected into [`suggested_price`].
///
/// Everything the price heuristic needs is data on this struct: there is
/// no ambient table and no arithmetic relating year ids to academic year
/// numbers. The platform's year id 1 happens to be Year 7, which an older
/// implementation encoded as `year_id + 6`; here that positional assumption
/// is an explicit [`year_numbers`](Self::year_numbers) mapping that a
/// deployment can override from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Year id → academic year number (e.g. 1 → 7 for Year 7)
    #[serde(default)]
    pub year_numbers: BTreeMap<u64, u32>,

    /// Academic year number → base price of one subject for one term
    #[serde(default)]
    pub base_prices: BTreeMap<u32, Decimal>,

    /// Base price used when the year cannot be resolved
    pub default_base_price: Decimal,

    /// Multiplier applied per term for multi-term plans (0.90 = 10% off)
    pub multi_term_multiplier: Decimal,

    /// Multiplier applied to annual bundles (0.75 = 25% off)
    pub annual_multiplier: Decimal,

    /// Terms in an academic year, for subject-annual pricing
    pub terms_per_year: u32,

    /// Subjects in an academic year, for full-year pricing
    pub subjects_per_year: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            year_numbers: (1u32..=6).map(|n| (u64::from(n), n + 6)).collect(),
            base_prices: BTreeMap::from([
                (7, dec!(39.99)),
                (8, dec!(39.99)),
                (9, dec!(44.99)),
                (10, dec!(49.99)),
                (11, dec!(59.99)),
                (12, dec!(59.99)),
            ]),
            default_base_price: dec!(49.99),
            multi_term_multiplier: dec!(0.90),
            annual_multiplier: dec!(0.75),
            terms_per_year: 4,
            subjects_per_year: 6,
        }
    }
}

impl PricingConfig {
    /// Load a pricing configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// * [`PlanwiseError::FileSystem`] - When the file cannot be read
    /// * [`PlanwiseError::Serialization`] - When the JSON is malformed
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlanwiseError::file_system(path, e))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that would produce nonsense suggestions.
    ///
    /// # Errors
    ///
    /// * [`PlanwiseError::InvalidInput`] - When a price, multiplier, or
    ///   bundle size is not positive
    /// * [`PlanwiseError::Configuration`] - When the base price table holds
    ///   a non-positive entry
    pub fn check(&self) -> Result<()> {
        if self.default_base_price <= Decimal::ZERO {
            return Err(PlanwiseError::invalid_input(
                "default_base_price",
                "must be greater than zero",
            ));
        }
        if self.multi_term_multiplier <= Decimal::ZERO {
            return Err(PlanwiseError::invalid_input(
                "multi_term_multiplier",
                "must be greater than zero",
            ));
        }
        if self.annual_multiplier <= Decimal::ZERO {
            return Err(PlanwiseError::invalid_input(
                "annual_multiplier",
                "must be greater than zero",
            ));
        }
        if self.terms_per_year == 0 {
            return Err(PlanwiseError::invalid_input(
                "terms_per_year",
                "must be at least one",
            ));
        }
        if self.subjects_per_year == 0 {
            return Err(PlanwiseError::invalid_input(
                "subjects_per_year",
                "must be at least one",
            ));
        }
        for (year_number, price) in &self.base_prices {
            if *price <= Decimal::ZERO {
                return Err(PlanwiseError::configuration(format!(
                    "base price for year {year_number} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// The per-term base price for a plan's year, falling back to
    /// [`default_base_price`](Self::default_base_price) when the year id or
    /// its academic year number is unknown.
    pub fn base_price_for(&self, year_id: Option<u64>) -> Decimal {
        year_id
            .and_then(|id| self.year_numbers.get(&id))
            .and_then(|n| self.base_prices.get(n))
            .copied()
            .unwrap_or(self.default_base_price)
    }
}

/// Compute a suggested price for a plan.
///
/// The base price comes from the plan's year via
/// [`PricingConfig::base_price_for`]; the plan type selects the multiplier:
///
/// - [`PlanType::SingleTerm`] → base, unchanged
/// - [`PlanType::MultiTerm`] → base × `term_count` × 0.9
/// - [`PlanType::SubjectAnnual`] → base × 4 × 0.75
/// - [`PlanType::FullYear`] → base × 6 × 0.75
///
/// (multipliers and bundle sizes per the supplied config). The result is
/// rounded to cents, midpoint away from zero. Returns `None` only when the
/// plan has no type, since there is then no basis for a suggestion.
///
/// `term_count` is the caller's selection bookkeeping for multi-term plans;
/// it is ignored by the other plan types.
///
/// # Examples
///
/// ```rust
/// use planwise_core::models::{PlanDefinition, PlanType};
/// use planwise_core::rules::{suggested_price, PricingConfig};
/// use rust_decimal_macros::dec;
///
/// let plan = PlanDefinition {
///     plan_type: Some(PlanType::MultiTerm),
///     year_id: Some(4), // Year 10, base 49.99 in the default table
///     ..PlanDefinition::default()
/// };
/// let price = suggested_price(&plan, &PricingConfig::default(), 2);
/// assert_eq!(price, Some(dec!(89.98)));
/// ```
pub fn suggested_price(
    plan: &PlanDefinition,
    config: &PricingConfig,
    term_count: u32,
) -> Option<Decimal> {
    let plan_type = plan.plan_type?;
    let base = config.base_price_for(plan.year_id);

    let price = match plan_type {
        PlanType::SingleTerm => base,
        PlanType::MultiTerm => {
            base * Decimal::from(term_count) * config.multi_term_multiplier
        }
        PlanType::SubjectAnnual => {
            base * Decimal::from(config.terms_per_year) * config.annual_multiplier
        }
        PlanType::FullYear => {
            base * Decimal::from(config.subjects_per_year) * config.annual_multiplier
        }
    };

    Some(price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
