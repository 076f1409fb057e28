use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use smartstock_core::DomainError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "CSV must contain columns: date, product, sales (missing: {missing:?}, found: {found:?})"
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("line {line}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: {source}")]
    InvalidField {
        line: u64,
        #[source]
        source: DomainError,
    },

    #[error("product '{product}' has more than one record for {date}")]
    DuplicateDate { product: String, date: NaiveDate },

    #[error("'{}' contains no sales rows", .0.display())]
    EmptyDataset(PathBuf),

    #[error("no data available for product '{0}'")]
    UnknownProduct(String),

    #[error("invalid demo data configuration: {0}")]
    InvalidConfig(String),
}
