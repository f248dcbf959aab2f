//! Cost factor record
//!
//! One country x industry cost profile from the hand-curated dataset.
//! Coverage varies a lot between countries, so every field is optional;
//! the engine resolves absent fields through documented fallbacks instead
//! of erroring (see `resolve::FactorView`).
//!
//! The same shape doubles as the per-calculation overrides record: a field
//! that is present on the overrides wins over the factor for that single
//! calculation, even when the value is `Some(0.0)`.
//!
//! Field groups follow the dataset's module numbering:
//! - M1-M3: one-time market-entry costs (CAPEX)
//! - M4: goods, head-haul logistics, tariff, VAT
//! - M5: fulfillment and returns
//! - M6: marketing
//! - M7: payment and platform fees
//! - M8: general & administrative

use serde::{Deserialize, Serialize};

/// One country x industry cost profile.
///
/// Monetary fields are non-negative USD; rate fields are fractions in
/// `[0, 1]`. Loaded read-only from the dataset and never mutated.
///
/// # Example
/// ```
/// use gecom_cost_engine::CostFactor;
///
/// let factor = CostFactor {
///     vat_rate: Some(0.06),
///     effective_tariff_rate: Some(0.0),
///     fba_standard_fee: Some(7.50),
///     ..Default::default()
/// };
/// assert!(factor.company_registration_fee.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostFactor {
    // --- M1: market entry (one-time) ---
    /// Company registration fee (USD)
    pub company_registration_fee: Option<f64>,

    /// Business license fee (USD)
    pub business_license_fee: Option<f64>,

    /// Tax registration fee (USD)
    pub tax_registration_fee: Option<f64>,

    /// Legal consulting fee for market entry (USD)
    pub legal_consulting_fee: Option<f64>,

    // --- M2: compliance (one-time) ---
    /// Pre-aggregated compliance total (USD); wins over the itemized
    /// fields below when positive
    pub m2_estimated_cost: Option<f64>,

    /// Product testing / certification cost (USD)
    pub product_testing_cost: Option<f64>,

    /// Trademark registration fee (USD)
    pub trademark_registration_fee: Option<f64>,

    // --- M3: supply-chain setup (one-time) ---
    /// Pre-aggregated supply-chain-setup total (USD); wins over the
    /// itemized fields below when positive
    pub m3_total_estimated: Option<f64>,

    /// Warehouse deposit (USD)
    pub warehouse_deposit: Option<f64>,

    /// Equipment purchase cost (USD)
    pub equipment_purchase_cost: Option<f64>,

    /// Initial inventory cost (USD)
    pub initial_inventory_cost: Option<f64>,

    /// Systems / software setup cost (USD)
    pub system_setup_cost: Option<f64>,

    // --- M4: goods movement (per unit) ---
    /// Effective import tariff rate on the CIF base (fraction)
    pub effective_tariff_rate: Option<f64>,

    /// VAT / GST rate on the CIF + duty base (fraction)
    pub vat_rate: Option<f64>,

    /// Serialized logistics record: a JSON **string** carrying
    /// `sea_freight` and `air_freight` objects with `usd_per_kg` rates
    /// (plus transit metadata the engine ignores). Parsed defensively;
    /// malformed content degrades the logistics line to zero.
    pub m4_logistics: Option<String>,

    // --- M5: fulfillment and returns (per unit) ---
    /// Marketplace standard fulfillment fee (USD/unit); used instead of
    /// the generic last-mile fee when the scenario sells through the
    /// marketplace fulfillment channel
    pub fba_standard_fee: Option<f64>,

    /// Generic last-mile delivery fee (USD/unit)
    pub last_mile_delivery_fee: Option<f64>,

    /// Share of units returned (fraction)
    pub return_rate: Option<f64>,

    /// Reverse-logistics handling cost per returned unit (USD)
    pub return_logistics_cost: Option<f64>,

    // --- M6: marketing (per unit) ---
    /// Marketing spend as a share of selling price (fraction)
    pub marketing_rate: Option<f64>,

    /// Flat customer acquisition cost (USD/order); wins over
    /// `marketing_rate` when non-zero
    pub customer_acquisition_cost: Option<f64>,

    /// Platform commission rate as recorded by the M6 data module
    /// (fraction); the M7 field below is the preferred source
    pub m6_platform_commission_rate: Option<f64>,

    // --- M7: payment and platform (per unit) ---
    /// Payment processing rate on selling price (fraction)
    pub payment_processing_rate: Option<f64>,

    /// Fixed payment processing fee per order (USD)
    pub payment_fixed_fee: Option<f64>,

    /// Platform commission rate as recorded by the M7 data module
    /// (fraction)
    pub m7_platform_commission_rate: Option<f64>,

    // --- M8: general & administrative (per unit) ---
    /// G&A overhead as a share of selling price (fraction)
    pub ga_rate: Option<f64>,

    /// Flat customer-service cost per order (USD); wins over `ga_rate`
    /// when non-zero
    pub customer_service_cost_per_order: Option<f64>,
}
