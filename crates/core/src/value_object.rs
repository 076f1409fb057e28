//! Value object trait: equality by value, not identity.
//!
//! Every analytics input and output in this workspace is a value object: it has
//! no identity, is created fresh for a single evaluation and is compared by its
//! attribute values. Two forecasts with the same numbers are the same forecast.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: values are copied freely between pipeline stages
/// - **PartialEq**: values are compared by their attributes (idempotence checks rely on it)
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Forecast {
///     predicted_units: u64,
/// }
///
/// impl ValueObject for Forecast {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
