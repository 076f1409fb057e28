//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and analytics layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Loader and
/// process concerns belong to the crates that own them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The product series is empty (or otherwise unusable) for analytics.
    #[error("insufficient data: no sales history for product '{0}'")]
    InsufficientData(String),

    /// A value failed validation (e.g. negative stock, non-finite cost).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn insufficient_data(product: impl Into<String>) -> Self {
        Self::InsufficientData(product.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for the "no data for this product" family of failures.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }
}
