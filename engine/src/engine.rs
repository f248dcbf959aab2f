//! Cost roll-up engine
//!
//! Turns a `CostFactor` + `Scope` + optional overrides into a
//! `CostResult` in one synchronous pass:
//!
//! ```text
//! 1. CAPEX   M1 market entry, M2 compliance, M3 supply-chain setup
//! 2. OPEX    ten per-unit lines in dependency order
//!            (cogs -> logistics -> tariff -> VAT -> fulfillment ->
//!             returns -> marketing -> payment -> commission -> G&A)
//! 3. Derive  unit economics, KPIs, ordered cost breakdown
//! ```
//!
//! The computation is pure and infallible. Missing dataset fields
//! degrade to documented fallbacks, a malformed logistics record
//! degrades that single line to zero, and a loss-making scenario
//! surfaces `Infinity` sentinels in the payback/breakeven KPIs.
//!
//! # Example
//!
//! ```
//! use gecom_cost_engine::{CostEngine, CostFactor, SalesChannel, Scope};
//!
//! let factor = CostFactor {
//!     vat_rate: Some(0.06),
//!     last_mile_delivery_fee: Some(3.20),
//!     ..Default::default()
//! };
//! let scope = Scope::new(
//!     "MY",
//!     "consumer_electronics",
//!     SalesChannel::DirectToConsumer,
//!     2.0,
//!     8.0,
//!     29.0,
//!     1000.0,
//! );
//!
//! let result = CostEngine::new().calculate(&factor, &scope, None);
//! assert!(result.opex.total > 0.0);
//! assert_eq!(result.cost_breakdown.len(), 10);
//! ```

use crate::costs::{parse_logistics, FallbackRates};
use crate::models::factor::CostFactor;
use crate::models::result::{
    CapexBreakdown, CostBreakdownRow, CostResult, Kpis, OpexBreakdown, UnitEconomics,
};
use crate::models::scope::{CapexOptions, SalesChannel, Scope};
use crate::resolve::FactorView;

/// Pure cost roll-up engine
///
/// Holds only the fallback-rate table; each `calculate` call reads its
/// three inputs and allocates a fresh result, so one engine instance is
/// safe to share across threads and requests.
#[derive(Debug, Clone)]
pub struct CostEngine {
    fallbacks: FallbackRates,
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CostEngine {
    /// Engine with the documented fallback table
    pub fn new() -> Self {
        Self {
            fallbacks: FallbackRates::default(),
        }
    }

    /// Engine with a custom fallback table
    pub fn with_fallbacks(fallbacks: FallbackRates) -> Self {
        Self { fallbacks }
    }

    pub fn fallbacks(&self) -> &FallbackRates {
        &self.fallbacks
    }

    /// One-time market-entry CAPEX, by category.
    ///
    /// A direct total on `scope.capex` wins for its category when present
    /// and non-zero; otherwise the category is estimated from the factor.
    /// Missing data silently degrades to 0 - a deliberate simplification,
    /// estimates always produce a number.
    pub fn calculate_capex(
        &self,
        factor: &CostFactor,
        scope: &Scope,
        overrides: Option<&CostFactor>,
    ) -> CapexBreakdown {
        let view = FactorView::new(factor, overrides);
        let direct = |get: fn(&CapexOptions) -> Option<f64>| {
            scope.capex.as_ref().and_then(get).filter(|v| *v != 0.0)
        };

        let m1_market_entry = direct(|c| c.m1_market_entry).unwrap_or_else(|| {
            view.amount(|f| f.company_registration_fee)
                + view.amount(|f| f.business_license_fee)
                + view.amount(|f| f.tax_registration_fee)
                + view.amount(|f| f.legal_consulting_fee)
        });

        let m2_compliance = direct(|c| c.m2_compliance).unwrap_or_else(|| {
            view.positive(|f| f.m2_estimated_cost).unwrap_or_else(|| {
                view.amount(|f| f.product_testing_cost)
                    + view.amount(|f| f.trademark_registration_fee)
            })
        });

        let m3_supply_chain = direct(|c| c.m3_supply_chain).unwrap_or_else(|| {
            view.positive(|f| f.m3_total_estimated).unwrap_or_else(|| {
                view.amount(|f| f.warehouse_deposit)
                    + view.amount(|f| f.equipment_purchase_cost)
                    + view.amount(|f| f.initial_inventory_cost)
                    + view.amount(|f| f.system_setup_cost)
            })
        });

        CapexBreakdown {
            m1_market_entry,
            m2_compliance,
            m3_supply_chain,
            total: m1_market_entry + m2_compliance + m3_supply_chain,
        }
    }

    /// Per-unit OPEX, ten lines in dependency order.
    ///
    /// Later lines build on earlier ones: tariff applies to the CIF base
    /// (cogs + logistics), VAT to CIF + duty.
    pub fn calculate_opex(
        &self,
        factor: &CostFactor,
        scope: &Scope,
        overrides: Option<&CostFactor>,
    ) -> OpexBreakdown {
        let view = FactorView::new(factor, overrides);
        let fb = &self.fallbacks;
        let price = scope.selling_price_usd;

        let m4_cogs = scope.cogs_usd;

        let m4_logistics = view
            .text(|f| f.m4_logistics.as_deref())
            .and_then(parse_logistics)
            .map(|table| table.rate_for(scope.shipping_method()).usd_per_kg * scope.product_weight_kg)
            .unwrap_or(0.0);

        let m4_tariff = (m4_cogs + m4_logistics) * view.rate(|f| f.effective_tariff_rate, 0.0);

        let m4_vat = (m4_cogs + m4_logistics + m4_tariff) * view.rate(|f| f.vat_rate, 0.0);

        let m5_last_mile = match scope.sales_channel {
            SalesChannel::MarketplaceFulfillment => view
                .nonzero(|f| f.fba_standard_fee)
                .unwrap_or_else(|| view.amount(|f| f.last_mile_delivery_fee)),
            SalesChannel::DirectToConsumer => view.amount(|f| f.last_mile_delivery_fee),
        };

        let m5_return =
            view.rate(|f| f.return_rate, fb.return_rate) * view.amount(|f| f.return_logistics_cost);

        let m6_marketing = view
            .nonzero(|f| f.customer_acquisition_cost)
            .unwrap_or_else(|| price * view.rate(|f| f.marketing_rate, fb.marketing_rate));

        let m7_payment = price * view.rate(|f| f.payment_processing_rate, fb.payment_rate)
            + view.rate(|f| f.payment_fixed_fee, fb.payment_fixed_fee);

        // Commission rate precedence: user-chosen rate (even 0.0), then
        // the M7 dataset field when non-zero, then the M6 field.
        let commission_rate = scope
            .custom_platform_commission_rate()
            .or_else(|| view.nonzero(|f| f.m7_platform_commission_rate))
            .unwrap_or_else(|| view.amount(|f| f.m6_platform_commission_rate));
        let m7_platform_commission = price * commission_rate;

        let m8_ga = view
            .nonzero(|f| f.customer_service_cost_per_order)
            .unwrap_or_else(|| price * view.rate(|f| f.ga_rate, fb.ga_rate));

        let total = m4_cogs
            + m4_logistics
            + m4_tariff
            + m4_vat
            + m5_last_mile
            + m5_return
            + m6_marketing
            + m7_payment
            + m7_platform_commission
            + m8_ga;

        OpexBreakdown {
            m4_cogs,
            m4_logistics,
            m4_tariff,
            m4_vat,
            m5_last_mile,
            m5_return,
            m6_marketing,
            m7_payment,
            m7_platform_commission,
            m8_ga,
            total,
        }
    }

    /// Full cost result: CAPEX + OPEX + unit economics, KPIs, and the
    /// ordered cost breakdown.
    pub fn calculate(
        &self,
        factor: &CostFactor,
        scope: &Scope,
        overrides: Option<&CostFactor>,
    ) -> CostResult {
        let capex = self.calculate_capex(factor, scope, overrides);
        let opex = self.calculate_opex(factor, scope, overrides);

        let revenue = scope.selling_price_usd;
        let cost = opex.total;
        let gross_profit = revenue - cost;
        // Unguarded for zero revenue: the non-finite result is inherited
        // behavior and consumers screen KPIs with is_finite().
        let gross_margin = gross_profit / revenue;
        let monthly_profit = gross_profit * scope.monthly_volume;

        let payback_period_months = if monthly_profit > 0.0 {
            capex.total / monthly_profit
        } else {
            f64::INFINITY
        };

        let roi_pct = if capex.total > 0.0 {
            (monthly_profit * 12.0 - capex.total) / capex.total * 100.0
        } else {
            0.0
        };

        let breakeven_price = cost / self.fallbacks.breakeven_cost_share;

        let breakeven_volume = if gross_profit > 0.0 {
            capex.total / gross_profit
        } else {
            f64::INFINITY
        };

        let cost_breakdown = opex
            .components()
            .iter()
            .map(|&(module, amount)| CostBreakdownRow {
                module: module.to_string(),
                amount,
                percentage: amount / opex.total * 100.0,
            })
            .collect();

        CostResult {
            capex,
            opex,
            unit_economics: UnitEconomics {
                revenue,
                cost,
                gross_profit,
                gross_margin,
                monthly_profit,
            },
            kpis: Kpis {
                roi_pct,
                payback_period_months,
                breakeven_price,
                breakeven_volume,
            },
            cost_breakdown,
        }
    }
}
