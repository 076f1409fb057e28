//! Reorder optimizer: unconstrained need capped by what the budget can buy.

use serde::{Deserialize, Serialize};

use smartstock_core::{CapitalConstraint, ValueObject};

use crate::forecast::ForecastResult;

/// Final reorder quantity for one product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderDecision {
    /// Units needed to cover the forecast, ignoring capital.
    pub recommended_units: u64,
    pub max_affordable_units: u64,
    /// `min(recommended_units, max_affordable_units)`.
    pub optimized_units: u64,
}

impl ValueObject for ReorderDecision {}

impl ReorderDecision {
    /// True when the budget cuts the order below the recommended quantity.
    pub fn is_capital_constrained(&self) -> bool {
        self.optimized_units < self.recommended_units
    }

    /// Units recommended but not affordable.
    pub fn shortfall_units(&self) -> u64 {
        self.recommended_units - self.optimized_units
    }
}

/// Compute the capital-feasible reorder quantity.
pub fn optimize(
    forecast: &ForecastResult,
    current_stock: u64,
    capital: &CapitalConstraint,
) -> ReorderDecision {
    let recommended_units = forecast.predicted_units.saturating_sub(current_stock);
    let max_affordable_units = max_affordable_units(capital);

    ReorderDecision {
        recommended_units,
        max_affordable_units,
        optimized_units: recommended_units.min(max_affordable_units),
    }
}

/// `floor(available_capital / unit_cost)`.
///
/// A zero unit cost buys nothing: free stock is treated as a data problem, not
/// as unlimited affordability.
pub fn max_affordable_units(capital: &CapitalConstraint) -> u64 {
    if capital.unit_cost > 0.0 {
        (capital.available_capital / capital.unit_cost).floor() as u64
    } else {
        0
    }
}
