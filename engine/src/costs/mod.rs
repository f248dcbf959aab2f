//! Cost configuration and serialized sub-records
//!
//! This module provides:
//! - The named fallback-rate table (`FallbackRates`)
//! - The serialized logistics record and its defensive parser

pub mod fallbacks;
pub mod logistics;

// Re-exports
pub use fallbacks::FallbackRates;
pub use logistics::{parse_logistics, FreightRate, LogisticsTable};
