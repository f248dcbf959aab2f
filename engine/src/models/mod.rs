//! Domain models
//!
//! Input records (CostFactor, Scope) and the engine output (CostResult).

pub mod factor;
pub mod result;
pub mod scope;
