//! Classification of engine outputs into levels and guidance messages.
//!
//! The engine itself never branches on these; they exist so every front end
//! phrases the same numbers the same way.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::EvaluationReport;
use crate::forecast::FORECAST_HORIZON_DAYS;
use crate::reorder::ReorderDecision;
use crate::timing::TimingEstimate;

/// Composite score at or above which risk is moderate.
pub const MODERATE_RISK_THRESHOLD: u8 = 36;
/// Composite score at or above which risk is high.
pub const HIGH_RISK_THRESHOLD: u8 = 66;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_composite(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Stockout Risk",
            RiskLevel::Moderate => "Moderate Stockout Risk",
            RiskLevel::High => "High Stockout Risk",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Inventory position is currently stable.",
            RiskLevel::Moderate => "Monitor demand closely and prepare reorder plan.",
            RiskLevel::High => "Strong likelihood of stockout without intervention.",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityBand {
    Stable,
    Moderate,
    High,
}

impl VolatilityBand {
    pub fn from_score(volatility_score: f64) -> Self {
        if volatility_score > 0.6 {
            VolatilityBand::High
        } else if volatility_score > 0.3 {
            VolatilityBand::Moderate
        } else {
            VolatilityBand::Stable
        }
    }
}

impl fmt::Display for VolatilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VolatilityBand::Stable => "Stable demand pattern.",
            VolatilityBand::Moderate => "Moderate demand variability.",
            VolatilityBand::High => "High demand volatility detected.",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CapitalStatus {
    Sufficient,
    Constrained { affordable: u64, recommended: u64 },
}

impl CapitalStatus {
    pub fn from_decision(decision: &ReorderDecision) -> Self {
        if decision.is_capital_constrained() {
            CapitalStatus::Constrained {
                affordable: decision.optimized_units,
                recommended: decision.recommended_units,
            }
        } else {
            CapitalStatus::Sufficient
        }
    }
}

impl fmt::Display for CapitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapitalStatus::Sufficient => {
                write!(f, "You have sufficient capital to cover the recommended reorder.")
            }
            CapitalStatus::Constrained {
                affordable,
                recommended,
            } => write!(
                f,
                "Capital constraint detected. You can only afford to reorder {affordable} units \
                 instead of the recommended {recommended} units."
            ),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum TimingAdvice {
    ReorderNow { days_until_stockout: u64 },
    SafeFor { days: u64 },
}

impl TimingAdvice {
    pub fn from_estimate(timing: &TimingEstimate) -> Self {
        match timing.safe_window_days {
            Some(days) if !timing.is_urgent => TimingAdvice::SafeFor { days },
            _ => TimingAdvice::ReorderNow {
                days_until_stockout: timing.whole_days_until_stockout(),
            },
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, TimingAdvice::ReorderNow { .. })
    }
}

impl fmt::Display for TimingAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingAdvice::ReorderNow {
                days_until_stockout,
            } => write!(
                f,
                "You may stock out in approximately {days_until_stockout} days. \
                 Reorder immediately to avoid disruption."
            ),
            TimingAdvice::SafeFor { days } => write!(
                f,
                "You have approximately {days} days before reorder becomes urgent."
            ),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BusinessSummary {
    StockSufficient,
    Reorder { units: u64 },
    CapitalLimited { recommended: u64, affordable: u64 },
}

impl BusinessSummary {
    pub fn from_decision(decision: &ReorderDecision) -> Self {
        if decision.recommended_units == 0 {
            BusinessSummary::StockSufficient
        } else if decision.is_capital_constrained() {
            BusinessSummary::CapitalLimited {
                recommended: decision.recommended_units,
                affordable: decision.optimized_units,
            }
        } else {
            BusinessSummary::Reorder {
                units: decision.recommended_units,
            }
        }
    }
}

impl fmt::Display for BusinessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessSummary::StockSufficient => {
                write!(f, "Current inventory appears sufficient for projected demand.")
            }
            BusinessSummary::Reorder { units } => write!(
                f,
                "Projected demand suggests reordering {units} units within the next \
                 {FORECAST_HORIZON_DAYS} days."
            ),
            BusinessSummary::CapitalLimited {
                recommended,
                affordable,
            } => write!(
                f,
                "Demand indicates a reorder of {recommended} units, but capital constraints \
                 limit you to {affordable} units. Consider phased purchasing or increasing \
                 working capital."
            ),
        }
    }
}

/// All presentation classifications for one report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisories {
    pub risk_level: RiskLevel,
    pub volatility: VolatilityBand,
    pub capital: CapitalStatus,
    pub timing: TimingAdvice,
    pub summary: BusinessSummary,
}

impl Advisories {
    pub fn from_report(report: &EvaluationReport) -> Self {
        Self {
            risk_level: RiskLevel::from_composite(report.risk.composite_score),
            volatility: VolatilityBand::from_score(report.risk.volatility_score),
            capital: CapitalStatus::from_decision(&report.reorder),
            timing: TimingAdvice::from_estimate(&report.timing),
            summary: BusinessSummary::from_decision(&report.reorder),
        }
    }
}
