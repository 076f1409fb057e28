//! Scalar inputs supplied by the caller for one evaluation.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Stock position and supplier replenishment time, as of the evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    /// Units currently on hand.
    pub current_stock: u64,
    pub supplier_lead_time_days: f64,
}

impl ValueObject for RiskInputs {}

impl RiskInputs {
    pub fn new(current_stock: u64, supplier_lead_time_days: f64) -> Result<Self, DomainError> {
        ensure_non_negative("supplier_lead_time_days", supplier_lead_time_days)?;
        Ok(Self {
            current_stock,
            supplier_lead_time_days,
        })
    }
}

/// Purchasing budget for a reorder.
///
/// Amounts are plain numbers in whatever currency the caller uses; no currency
/// or tax handling happens here.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalConstraint {
    pub unit_cost: f64,
    pub available_capital: f64,
}

impl ValueObject for CapitalConstraint {}

impl CapitalConstraint {
    pub fn new(unit_cost: f64, available_capital: f64) -> Result<Self, DomainError> {
        ensure_non_negative("unit_cost", unit_cost)?;
        ensure_non_negative("available_capital", available_capital)?;
        Ok(Self {
            unit_cost,
            available_capital,
        })
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a finite non-negative number (got {value})"
        )));
    }
    Ok(())
}
