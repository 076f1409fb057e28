//! Risk scorer: three normalized sub-scores folded into a 0-100 composite.
//!
//! Model:
//! - **Pressure**: projected demand against stock on hand.
//! - **Volatility**: trailing-window spread relative to the overall mean.
//! - **Lead-time exposure**: supplier lead time against the stockout runway.
//!
//! Each sub-score is clamped to `[0, 1]` and the weights sum to 100, so the
//! composite is always an integer in `[0, 100]`.

use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, DomainResult, ProductSeries, RiskInputs, ValueObject};

use crate::forecast::ForecastResult;
use crate::stats;
use crate::timing;

/// Demand/stock ratio at which pressure saturates to 1.
pub const PRESSURE_SATURATION_RATIO: f64 = 2.0;

pub const PRESSURE_WEIGHT: f64 = 50.0;
pub const VOLATILITY_WEIGHT: f64 = 30.0;
pub const LEAD_TIME_WEIGHT: f64 = 20.0;

/// Normalized stockout risk.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreResult {
    pub pressure_score: f64,
    pub volatility_score: f64,
    pub lead_time_score: f64,
    pub composite_score: u8,
}

impl ValueObject for RiskScoreResult {}

/// Score stockout risk for one product.
///
/// The lead-time sub-score uses the same runway as [`timing::estimate`]
/// (full-history mean, same current stock).
pub fn score(
    series: &ProductSeries,
    forecast: &ForecastResult,
    inputs: &RiskInputs,
) -> DomainResult<RiskScoreResult> {
    let all_sales = stats::as_f64(series.sales());
    let overall_mean = stats::mean(&all_sales)
        .ok_or_else(|| DomainError::insufficient_data(series.product().as_str()))?;

    let window = stats::as_f64(series.trailing_window().iter().map(|r| r.sales));
    let window_mean = stats::mean(&window).unwrap_or(overall_mean);
    let window_stddev = stats::stddev_sample(&window, window_mean);

    let runway = timing::from_daily_average(overall_mean, inputs);

    let pressure_score = pressure_score(forecast.predicted_units, inputs.current_stock);
    let volatility_score = volatility_score(window_stddev, overall_mean);
    let lead_time_score =
        lead_time_score(inputs.supplier_lead_time_days, runway.days_until_stockout);

    Ok(RiskScoreResult {
        pressure_score,
        volatility_score,
        lead_time_score,
        composite_score: composite_score(pressure_score, volatility_score, lead_time_score),
    })
}

/// `min(1, (predicted / (stock + 1)) / 2)`.
pub fn pressure_score(predicted_units: u64, current_stock: u64) -> f64 {
    let raw = predicted_units as f64 / (current_stock as f64 + 1.0);
    unit_clamp(raw / PRESSURE_SATURATION_RATIO)
}

/// `min(1, stddev / (mean + 1))`.
pub fn volatility_score(window_stddev: f64, overall_mean: f64) -> f64 {
    unit_clamp(window_stddev / (overall_mean + 1.0))
}

/// `min(1, lead_time / (days_until_stockout + 1))`.
pub fn lead_time_score(supplier_lead_time_days: f64, days_until_stockout: f64) -> f64 {
    unit_clamp(supplier_lead_time_days / (days_until_stockout + 1.0))
}

/// Weighted sum of the sub-scores, floored to an integer in `[0, 100]`.
pub fn composite_score(pressure: f64, volatility: f64, lead_time: f64) -> u8 {
    let weighted =
        pressure * PRESSURE_WEIGHT + volatility * VOLATILITY_WEIGHT + lead_time * LEAD_TIME_WEIGHT;
    weighted.clamp(0.0, 100.0).floor() as u8
}

fn unit_clamp(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
