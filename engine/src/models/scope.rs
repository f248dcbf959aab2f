//! Business scenario
//!
//! A `Scope` describes one product/market scenario to cost out: target
//! country and industry, sales channel, product weight, unit economics
//! inputs, and optional OPEX/CAPEX knobs. Constructed fresh per
//! calculation request; immutable input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sales channel for the scenario
///
/// Determines which fulfillment fee applies: the marketplace's standard
/// fulfillment fee, or the country's generic last-mile delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    /// Fulfillment-by-marketplace program (FBA-style pick/pack/ship)
    MarketplaceFulfillment,

    /// Direct-to-consumer via own storefront
    DirectToConsumer,
}

/// Head-haul shipping method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Sea,
    Air,
}

impl Default for ShippingMethod {
    fn default() -> Self {
        ShippingMethod::Sea
    }
}

/// Optional per-scenario OPEX knobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpexOptions {
    /// Head-haul shipping method; absent means sea freight
    pub shipping_method: Option<ShippingMethod>,

    /// User-chosen platform commission rate (fraction). When present it
    /// wins over both factor commission fields, even at `0.0`.
    pub custom_platform_commission_rate: Option<f64>,
}

/// Optional direct CAPEX totals, bypassing factor-based estimation
///
/// A supplied total of `0.0` is treated as absent, matching the loose
/// semantics of the upstream wizard input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapexOptions {
    /// Market-entry total (USD)
    pub m1_market_entry: Option<f64>,

    /// Compliance total (USD)
    pub m2_compliance: Option<f64>,

    /// Supply-chain-setup total (USD)
    pub m3_supply_chain: Option<f64>,
}

/// Errors from validating a scenario's numeric inputs
#[derive(Debug, Error, PartialEq)]
pub enum ScopeError {
    #[error("product weight must be non-negative, got {0}")]
    NegativeWeight(f64),

    #[error("cost of goods sold must be non-negative, got {0}")]
    NegativeCogs(f64),

    #[error("selling price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("monthly volume must be non-negative, got {0}")]
    NegativeVolume(f64),
}

/// One business scenario to cost out
///
/// # Example
/// ```
/// use gecom_cost_engine::{SalesChannel, Scope, ShippingMethod};
///
/// let scope = Scope::new(
///     "MY",
///     "consumer_electronics",
///     SalesChannel::MarketplaceFulfillment,
///     5.0,    // kg
///     10.0,   // COGS USD
///     35.0,   // selling price USD
///     1000.0, // units/month
/// );
/// assert_eq!(scope.shipping_method(), ShippingMethod::Sea);
/// assert!(scope.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    /// Target country code
    pub country: String,

    /// Industry segment within the dataset
    pub industry: String,

    /// Sales channel
    pub sales_channel: SalesChannel,

    /// Product weight (kg)
    pub product_weight_kg: f64,

    /// Cost of goods sold per unit (USD)
    pub cogs_usd: f64,

    /// Selling price per unit (USD)
    pub selling_price_usd: f64,

    /// Monthly sales volume (units)
    pub monthly_volume: f64,

    /// Optional OPEX knobs
    #[serde(default)]
    pub opex: Option<OpexOptions>,

    /// Optional direct CAPEX totals
    #[serde(default)]
    pub capex: Option<CapexOptions>,
}

impl Scope {
    pub fn new(
        country: impl Into<String>,
        industry: impl Into<String>,
        sales_channel: SalesChannel,
        product_weight_kg: f64,
        cogs_usd: f64,
        selling_price_usd: f64,
        monthly_volume: f64,
    ) -> Self {
        Self {
            country: country.into(),
            industry: industry.into(),
            sales_channel,
            product_weight_kg,
            cogs_usd,
            selling_price_usd,
            monthly_volume,
            opex: None,
            capex: None,
        }
    }

    /// Attach OPEX knobs (builder style)
    pub fn with_opex(mut self, opex: OpexOptions) -> Self {
        self.opex = Some(opex);
        self
    }

    /// Attach direct CAPEX totals (builder style)
    pub fn with_capex(mut self, capex: CapexOptions) -> Self {
        self.capex = Some(capex);
        self
    }

    /// Shipping method for the head-haul leg, defaulting to sea freight
    pub fn shipping_method(&self) -> ShippingMethod {
        self.opex
            .as_ref()
            .and_then(|o| o.shipping_method)
            .unwrap_or_default()
    }

    /// User-chosen platform commission rate, when one was supplied
    pub fn custom_platform_commission_rate(&self) -> Option<f64> {
        self.opex
            .as_ref()
            .and_then(|o| o.custom_platform_commission_rate)
    }

    /// Check the scenario's numeric invariants.
    ///
    /// The engine itself never calls this - estimates always produce a
    /// number - but callers accepting raw user input can reject nonsense
    /// before calculating.
    pub fn validate(&self) -> Result<(), ScopeError> {
        if self.product_weight_kg < 0.0 {
            return Err(ScopeError::NegativeWeight(self.product_weight_kg));
        }
        if self.cogs_usd < 0.0 {
            return Err(ScopeError::NegativeCogs(self.cogs_usd));
        }
        if self.selling_price_usd < 0.0 {
            return Err(ScopeError::NegativePrice(self.selling_price_usd));
        }
        if self.monthly_volume < 0.0 {
            return Err(ScopeError::NegativeVolume(self.monthly_volume));
        }
        Ok(())
    }
}
