//! GECOM Cost Engine - Rust Core
//!
//! Landed-cost roll-up engine for cross-border e-commerce market entry.
//! Turns a per-country cost-factor record plus a business scenario (and
//! optional per-calculation overrides) into a structured cost result:
//! CAPEX, per-unit OPEX, unit economics, KPIs, and an ordered cost
//! breakdown.
//!
//! # Architecture
//!
//! - **models**: Domain types (CostFactor, Scope, CostResult)
//! - **costs**: Fallback rate table and the serialized logistics record
//! - **resolve**: Three-tier override resolution (overrides -> factor -> fallback)
//! - **engine**: CAPEX/OPEX roll-up and KPI derivation
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 USD; rate fields are fractions in [0, 1]
//! 2. The calculation is pure and infallible: missing dataset fields
//!    degrade to documented fallbacks, never to errors
//! 3. Non-finite KPI values (`Infinity` payback for a loss-making
//!    scenario) are intentional sentinels - consumers branch on
//!    `is_finite()` before formatting

// Module declarations
pub mod costs;
pub mod engine;
pub mod models;
pub mod resolve;

// Re-exports for convenience
pub use costs::{parse_logistics, FallbackRates, FreightRate, LogisticsTable};
pub use engine::CostEngine;
pub use models::{
    factor::CostFactor,
    result::{CapexBreakdown, CostBreakdownRow, CostResult, Kpis, OpexBreakdown, UnitEconomics},
    scope::{CapexOptions, OpexOptions, SalesChannel, Scope, ScopeError, ShippingMethod},
};
pub use resolve::FactorView;
