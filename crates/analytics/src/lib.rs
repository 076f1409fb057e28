//! `smartstock-analytics`
//!
//! **Responsibility:** the inventory decision engine.
//!
//! - Demand forecast from a trailing window of daily sales.
//! - Three-factor stockout risk score (pressure, volatility, lead-time exposure).
//! - Stockout timing against supplier lead time.
//! - Capital-constrained reorder quantity.
//!
//! Every function is a pure function of its inputs: no IO, no shared state.
//! Evaluations for distinct products can run concurrently without coordination.

pub mod advisory;
pub mod engine;
pub mod forecast;
pub mod reorder;
pub mod risk;
pub mod stats;
pub mod timing;

pub use advisory::{
    Advisories, BusinessSummary, CapitalStatus, RiskLevel, TimingAdvice, VolatilityBand,
};
pub use engine::{EvaluationReport, evaluate};
pub use forecast::{FORECAST_HORIZON_DAYS, ForecastResult, forecast};
pub use reorder::{ReorderDecision, optimize};
pub use risk::{RiskScoreResult, score};
pub use timing::{TimingEstimate, estimate};
