//! Serialized logistics record
//!
//! `CostFactor::m4_logistics` is a JSON-encoded **string** (not a nested
//! object) carrying per-kilogram sea- and air-freight rates:
//!
//! ```json
//! {
//!   "sea_freight": { "usd_per_kg": 0.70, "transit_days": 30 },
//!   "air_freight": { "usd_per_kg": 5.50, "transit_days": 5 }
//! }
//! ```
//!
//! The string is parsed once at the top of the OPEX calculation. Parse
//! failure is a recoverable condition: the caller gets `None`, a warning
//! is emitted, and the logistics line item degrades to zero. It never
//! propagates as an error.

use serde::{Deserialize, Serialize};

use crate::models::scope::ShippingMethod;

/// Freight rate for one shipping method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreightRate {
    /// Head-haul rate in USD per kilogram
    pub usd_per_kg: f64,

    /// Port-to-port transit time (metadata, not used in the roll-up)
    pub transit_days: Option<f64>,
}

/// Parsed shape of the serialized logistics record
///
/// A missing sub-object deserializes to a zero rate, so a record that
/// only quotes sea freight still works for sea scenarios and degrades to
/// zero for air.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsTable {
    pub sea_freight: FreightRate,
    pub air_freight: FreightRate,
}

impl LogisticsTable {
    /// Rate record for the requested shipping method
    pub fn rate_for(&self, method: ShippingMethod) -> &FreightRate {
        match method {
            ShippingMethod::Sea => &self.sea_freight,
            ShippingMethod::Air => &self.air_freight,
        }
    }
}

/// Parse the serialized logistics record.
///
/// Empty input means the dataset has no logistics quote and yields `None`
/// quietly; syntactically invalid JSON yields `None` with a warning.
pub fn parse_logistics(raw: &str) -> Option<LogisticsTable> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(table) => Some(table),
        Err(err) => {
            tracing::warn!(%err, "malformed logistics record, degrading freight cost to zero");
            None
        }
    }
}
