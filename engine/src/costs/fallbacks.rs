//! Fallback Rates
//!
//! Named defaults used when neither the overrides record nor the cost
//! factor supplies a value for a field. Estimates must always produce a
//! number, so these are product constants rather than error paths; they
//! live in one table so every fallback is documented and testable in one
//! place.
//!
//! Rates are fractions of selling price; monetary values are USD.

use serde::{Deserialize, Serialize};

/// Fallback Rates Configuration
///
/// The engine is normally built with `FallbackRates::default()`. A custom
/// table can be supplied via `CostEngine::with_fallbacks`, which is also
/// how the breakeven margin target becomes tunable without touching the
/// roll-up code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackRates {
    /// Share of units returned when the dataset has no return rate
    pub return_rate: f64,

    /// Marketing spend as a share of selling price
    pub marketing_rate: f64,

    /// Payment processing rate on selling price
    pub payment_rate: f64,

    /// Fixed payment processing fee per order (USD)
    pub payment_fixed_fee: f64,

    /// General & administrative share of selling price
    pub ga_rate: f64,

    /// Cost share of revenue at the breakeven price
    /// (0.65 = fixed 35% target margin)
    pub breakeven_cost_share: f64,
}

impl Default for FallbackRates {
    fn default() -> Self {
        Self {
            return_rate: 0.10,          // 10% of units come back
            marketing_rate: 0.15,       // 15% of selling price
            payment_rate: 0.029,        // 2.9% processing
            payment_fixed_fee: 0.30,    // $0.30 per order
            ga_rate: 0.05,              // 5% of selling price
            breakeven_cost_share: 0.65, // 35% target margin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_rates_default() {
        let rates = FallbackRates::default();
        assert_eq!(rates.return_rate, 0.10);
        assert_eq!(rates.marketing_rate, 0.15);
        assert_eq!(rates.payment_rate, 0.029);
        assert_eq!(rates.payment_fixed_fee, 0.30);
        assert_eq!(rates.ga_rate, 0.05);
        assert_eq!(rates.breakeven_cost_share, 0.65);
    }

    #[test]
    fn test_fallback_rates_serialize_deserialize() {
        let rates = FallbackRates::default();
        let json = serde_json::to_string(&rates).unwrap();
        let restored: FallbackRates = serde_json::from_str(&json).unwrap();

        assert_eq!(rates, restored);
    }
}
