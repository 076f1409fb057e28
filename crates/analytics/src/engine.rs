//! Analytics facade: one product's series in, one report out.

use serde::{Deserialize, Serialize};

use smartstock_core::{
    CapitalConstraint, DomainError, DomainResult, ProductId, ProductSeries, RiskInputs, ValueObject,
};

use crate::advisory::Advisories;
use crate::forecast::{self, ForecastResult};
use crate::reorder::{self, ReorderDecision};
use crate::risk::{self, RiskScoreResult};
use crate::timing::{self, TimingEstimate};

/// Everything presentation needs for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub product: ProductId,
    pub current_stock: u64,
    pub forecast: ForecastResult,
    pub risk: RiskScoreResult,
    pub timing: TimingEstimate,
    pub reorder: ReorderDecision,
}

impl ValueObject for EvaluationReport {}

impl EvaluationReport {
    /// Classifications and human-readable guidance derived from the numbers.
    pub fn advisories(&self) -> Advisories {
        Advisories::from_report(self)
    }
}

/// Run forecaster, risk scorer, timing estimator and reorder optimizer in order.
///
/// Fails fast with [`DomainError::InsufficientData`] on an empty series, before
/// any stage runs.
pub fn evaluate(
    series: &ProductSeries,
    inputs: &RiskInputs,
    capital: &CapitalConstraint,
) -> DomainResult<EvaluationReport> {
    if series.is_empty() {
        return Err(DomainError::insufficient_data(series.product().as_str()));
    }

    let forecast = forecast::forecast(series)?;
    let risk = risk::score(series, &forecast, inputs)?;
    let timing = timing::estimate(series, inputs)?;
    let reorder = reorder::optimize(&forecast, inputs.current_stock, capital);

    tracing::debug!(
        product = %series.product(),
        records = series.len(),
        predicted_units = forecast.predicted_units,
        composite_score = risk.composite_score,
        days_until_stockout = timing.days_until_stockout,
        optimized_units = reorder.optimized_units,
        "evaluated product"
    );

    if reorder.is_capital_constrained() {
        tracing::warn!(
            product = %series.product(),
            recommended_units = reorder.recommended_units,
            optimized_units = reorder.optimized_units,
            "reorder limited by available capital"
        );
    }

    if timing.is_urgent {
        tracing::warn!(
            product = %series.product(),
            days_until_stockout = timing.days_until_stockout,
            lead_time_days = inputs.supplier_lead_time_days,
            "stockout expected within supplier lead time"
        );
    }

    Ok(EvaluationReport {
        product: series.product().clone(),
        current_stock: inputs.current_stock,
        forecast,
        risk,
        timing,
        reorder,
    })
}
