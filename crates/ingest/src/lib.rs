//! `smartstock-ingest`: getting sales history into and out of CSV.
//!
//! - [`Dataset`]: load a `date,product,sales` CSV and hand out per-product
//!   series that satisfy the engine's input contract (one product, sorted by
//!   date, unique dates).
//! - [`template`]: the sample CSV offered to new users.
//! - [`demo`]: deterministic synthetic history for demos and benchmarks.

pub mod dataset;
pub mod demo;
pub mod error;
pub mod template;

pub use dataset::{Dataset, REQUIRED_COLUMNS, write_records};
pub use demo::{DemoDataConfig, generate};
pub use error::IngestError;
