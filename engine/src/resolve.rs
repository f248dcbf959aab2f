//! Override resolution
//!
//! Every factor-derived value resolves through the same three tiers:
//!
//! 1. explicit user override for the field, when the overrides record
//!    defines it - even `Some(0.0)` counts as defined
//! 2. else the value on the loaded `CostFactor` (itself possibly absent)
//! 3. else a documented numeric fallback (see `costs::fallbacks`)
//!
//! `FactorView` is the single lookup point; engine code never reads
//! `CostFactor` fields directly, so the precedence rule cannot be
//! duplicated ad hoc per field.

use crate::models::factor::CostFactor;

/// Read view over a cost factor plus optional per-calculation overrides
#[derive(Clone, Copy)]
pub struct FactorView<'a> {
    factor: &'a CostFactor,
    overrides: Option<&'a CostFactor>,
}

impl<'a> FactorView<'a> {
    pub fn new(factor: &'a CostFactor, overrides: Option<&'a CostFactor>) -> Self {
        Self { factor, overrides }
    }

    /// Two-tier lookup: override value if defined, else factor value.
    pub fn value<T, F>(&self, get: F) -> Option<T>
    where
        F: Fn(&CostFactor) -> Option<T>,
    {
        self.overrides
            .and_then(|o| get(o))
            .or_else(|| get(self.factor))
    }

    /// Rate lookup with an explicit fallback for the absent case.
    pub fn rate<F>(&self, get: F, fallback: f64) -> f64
    where
        F: Fn(&CostFactor) -> Option<f64>,
    {
        self.value(get).unwrap_or(fallback)
    }

    /// Monetary lookup; absent degrades to zero.
    pub fn amount<F>(&self, get: F) -> f64
    where
        F: Fn(&CostFactor) -> Option<f64>,
    {
        self.value(get).unwrap_or(0.0)
    }

    /// Lookup screened to non-zero values.
    ///
    /// Used where a flat fee beats a rate-based estimate only when the
    /// dataset actually quotes one (CAC, FBA fee, customer-service cost).
    pub fn nonzero<F>(&self, get: F) -> Option<f64>
    where
        F: Fn(&CostFactor) -> Option<f64>,
    {
        self.value(get).filter(|v| *v != 0.0)
    }

    /// Lookup screened to strictly positive values.
    ///
    /// Used for the pre-aggregated CAPEX totals, which win over itemized
    /// sums only when positive.
    pub fn positive<F>(&self, get: F) -> Option<f64>
    where
        F: Fn(&CostFactor) -> Option<f64>,
    {
        self.value(get).filter(|v| *v > 0.0)
    }

    /// Lookup for serialized (string) fields.
    pub fn text<F>(&self, get: F) -> Option<&'a str>
    where
        F: Fn(&'a CostFactor) -> Option<&'a str>,
    {
        self.overrides
            .and_then(|o| get(o))
            .or_else(|| get(self.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor() -> CostFactor {
        CostFactor {
            vat_rate: Some(0.19),
            return_rate: Some(0.05),
            m4_logistics: Some("{}".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_factor_value_used_without_overrides() {
        let f = factor();
        let view = FactorView::new(&f, None);
        assert_eq!(view.value(|f| f.vat_rate), Some(0.19));
        assert_eq!(view.rate(|f| f.vat_rate, 0.0), 0.19);
    }

    #[test]
    fn test_override_wins_over_factor() {
        let f = factor();
        let o = CostFactor {
            vat_rate: Some(0.07),
            ..Default::default()
        };
        let view = FactorView::new(&f, Some(&o));
        assert_eq!(view.rate(|f| f.vat_rate, 0.0), 0.07);
        // Fields absent from the overrides fall through to the factor
        assert_eq!(view.rate(|f| f.return_rate, 0.1), 0.05);
    }

    #[test]
    fn test_defined_zero_override_wins() {
        // "Defined" is the test, not "non-zero": an explicit 0 override
        // must mask a non-zero factor value.
        let f = factor();
        let o = CostFactor {
            vat_rate: Some(0.0),
            ..Default::default()
        };
        let view = FactorView::new(&f, Some(&o));
        assert_eq!(view.value(|f| f.vat_rate), Some(0.0));
        assert_eq!(view.rate(|f| f.vat_rate, 0.19), 0.0);
    }

    #[test]
    fn test_fallback_when_both_absent() {
        let f = CostFactor::default();
        let view = FactorView::new(&f, None);
        assert_eq!(view.rate(|f| f.return_rate, 0.1), 0.1);
        assert_eq!(view.amount(|f| f.return_logistics_cost), 0.0);
        assert_eq!(view.value(|f| f.vat_rate), None);
    }

    #[test]
    fn test_nonzero_and_positive_screens() {
        let f = CostFactor {
            customer_acquisition_cost: Some(0.0),
            m2_estimated_cost: Some(-1.0),
            m3_total_estimated: Some(250.0),
            ..Default::default()
        };
        let view = FactorView::new(&f, None);
        assert_eq!(view.nonzero(|f| f.customer_acquisition_cost), None);
        assert_eq!(view.positive(|f| f.m2_estimated_cost), None);
        assert_eq!(view.positive(|f| f.m3_total_estimated), Some(250.0));
    }

    #[test]
    fn test_text_resolution() {
        let f = factor();
        let o = CostFactor {
            m4_logistics: Some(r#"{"sea_freight":{"usd_per_kg":9.0}}"#.to_string()),
            ..Default::default()
        };
        let view = FactorView::new(&f, Some(&o));
        assert!(view
            .text(|f| f.m4_logistics.as_deref())
            .unwrap()
            .contains("9.0"));

        let view = FactorView::new(&f, None);
        assert_eq!(view.text(|f| f.m4_logistics.as_deref()), Some("{}"));
    }
}
