//! Sales history value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::ProductId;
use crate::value_object::ValueObject;

/// Number of most recent records that make up the trailing window.
pub const TRAILING_WINDOW_DAYS: usize = 30;

/// One day of sales for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product: ProductId,
    pub sales: u32,
}

impl ValueObject for SalesRecord {}

/// Sales history of a single product, ordered ascending by date.
///
/// The series does not re-check ordering or date uniqueness: the loader that
/// builds it owns that contract (see `smartstock-ingest`). An empty series is
/// representable so that "no data" can be reported as a domain error instead of
/// a construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSeries {
    product: ProductId,
    records: Vec<SalesRecord>,
}

impl ValueObject for ProductSeries {}

impl ProductSeries {
    /// Wrap records that are already filtered to `product` and sorted by date.
    pub fn new(product: ProductId, records: Vec<SalesRecord>) -> Self {
        Self { product, records }
    }

    pub fn empty(product: ProductId) -> Self {
        Self::new(product, Vec::new())
    }

    /// Convenience constructor: consecutive daily sales starting at `start`.
    pub fn from_daily_sales(product: ProductId, start: NaiveDate, sales: &[u32]) -> Self {
        let records = start
            .iter_days()
            .zip(sales)
            .map(|(date, &sales)| SalesRecord {
                date,
                product: product.clone(),
                sales,
            })
            .collect();
        Self::new(product, records)
    }

    pub fn product(&self) -> &ProductId {
        &self.product
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sales values over the whole history, oldest first.
    pub fn sales(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|r| r.sales)
    }

    /// The most recent `TRAILING_WINDOW_DAYS` records (fewer if history is shorter).
    pub fn trailing_window(&self) -> &[SalesRecord] {
        let start = self.records.len().saturating_sub(TRAILING_WINDOW_DAYS);
        &self.records[start..]
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}
