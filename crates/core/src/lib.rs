//! `smartstock-core` — domain foundation for inventory analytics.
//!
//! This crate contains **pure domain** value objects (no IO, no logging setup).
//! Everything here is created per evaluation and discarded afterwards.

pub mod error;
pub mod id;
pub mod inputs;
pub mod series;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use inputs::{CapitalConstraint, RiskInputs};
pub use series::{ProductSeries, SalesRecord, TRAILING_WINDOW_DAYS};
pub use value_object::ValueObject;
