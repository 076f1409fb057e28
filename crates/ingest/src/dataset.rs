//! Series loader: CSV rows → validated per-product series.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use smartstock_core::{ProductId, ProductSeries, SalesRecord};

use crate::error::IngestError;

/// Columns every sales CSV must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "product", "sales"];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    product: String,
    sales: u32,
}

/// All sales rows of an uploaded (or demo) file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Load a CSV file; a file with no data rows is an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        if dataset.is_empty() {
            return Err(IngestError::EmptyDataset(path.to_path_buf()));
        }
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            "loaded sales dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, IngestError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        check_columns(&headers)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let raw: RawRow = row.deserialize(Some(&headers))?;

            let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|_| {
                IngestError::InvalidDate {
                    line,
                    value: raw.date.clone(),
                }
            })?;
            let product = ProductId::new(raw.product)
                .map_err(|source| IngestError::InvalidField { line, source })?;

            records.push(SalesRecord {
                date,
                product,
                sales: raw.sales,
            });
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Distinct products in first-seen order.
    pub fn products(&self) -> Vec<ProductId> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(&r.product))
            .map(|r| r.product.clone())
            .collect()
    }

    /// The date-sorted series for one product.
    ///
    /// Rejects a product with two records on the same date; the engine treats
    /// every record as a separate day and must not see duplicates.
    pub fn series(&self, product: &ProductId) -> Result<ProductSeries, IngestError> {
        let mut records: Vec<SalesRecord> = self
            .records
            .iter()
            .filter(|r| &r.product == product)
            .cloned()
            .collect();

        if records.is_empty() {
            return Err(IngestError::UnknownProduct(product.to_string()));
        }

        records.sort_by_key(|r| r.date);

        if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(IngestError::DuplicateDate {
                product: product.to_string(),
                date: pair[0].date,
            });
        }

        Ok(ProductSeries::new(product.clone(), records))
    }
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), IngestError> {
    let found: Vec<String> = headers.iter().map(str::to_string).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !found.iter().any(|h| h == *required))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { missing, found })
    }
}

/// Write records as a `date,product,sales` CSV.
pub fn write_records<W: io::Write>(writer: W, records: &[SalesRecord]) -> Result<(), IngestError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Dataset, IngestError> {
        Dataset::from_reader(csv.as_bytes())
    }

    fn id(name: &str) -> ProductId {
        ProductId::new(name).unwrap()
    }

    #[test]
    fn loads_rows_and_ignores_extra_columns() {
        let data = load(
            "date,product,sales,store\n\
             2025-01-01,Rice 50kg,45,Ikeja\n\
             2025-01-02,Rice 50kg,38,Ikeja\n",
        )
        .unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.records()[1].sales, 38);
        assert_eq!(data.records()[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = load("sales,date,product\n7,2025-03-01,Milo Refill\n").unwrap();
        assert_eq!(data.records()[0].product, id("Milo Refill"));
        assert_eq!(data.records()[0].sales, 7);
    }

    #[test]
    fn missing_columns_are_reported() {
        let err = load("day,product,units\n2025-01-01,Rice 50kg,4\n").unwrap_err();
        match err {
            IngestError::MissingColumns { missing, found } => {
                assert_eq!(missing, vec!["date".to_string(), "sales".to_string()]);
                assert_eq!(found, vec!["day", "product", "units"]);
            }
            other => panic!("Expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn invalid_date_reports_line() {
        let err = load("date,product,sales\n2025-01-01,A,1\n01/02/2025,A,2\n").unwrap_err();
        match err {
            IngestError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "01/02/2025");
            }
            other => panic!("Expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn negative_sales_are_rejected() {
        let err = load("date,product,sales\n2025-01-01,A,-4\n").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn blank_product_is_rejected() {
        let err = load("date,product,sales\n2025-01-01,  ,4\n").unwrap_err();
        assert!(matches!(err, IngestError::InvalidField { line: 2, .. }));
    }

    #[test]
    fn products_are_listed_in_first_seen_order() {
        let data = load(
            "date,product,sales\n\
             2025-01-01,Sugar 1kg,1\n\
             2025-01-01,Bread Loaf,2\n\
             2025-01-02,Sugar 1kg,3\n",
        )
        .unwrap();
        assert_eq!(data.products(), vec![id("Sugar 1kg"), id("Bread Loaf")]);
    }

    #[test]
    fn series_is_filtered_and_sorted() {
        let data = load(
            "date,product,sales\n\
             2025-01-03,A,3\n\
             2025-01-01,B,100\n\
             2025-01-01,A,1\n\
             2025-01-02,A,2\n",
        )
        .unwrap();

        let series = data.series(&id("A")).unwrap();
        let sales: Vec<u32> = series.sales().collect();
        assert_eq!(sales, vec![1, 2, 3]);
        assert_eq!(series.product(), &id("A"));
    }

    #[test]
    fn unknown_product_has_no_series() {
        let data = load("date,product,sales\n2025-01-01,A,1\n").unwrap();
        let err = data.series(&id("Z")).unwrap_err();
        assert!(matches!(err, IngestError::UnknownProduct(p) if p == "Z"));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let data = load(
            "date,product,sales\n\
             2025-01-01,A,1\n\
             2025-01-02,A,2\n\
             2025-01-01,A,5\n",
        )
        .unwrap();

        match data.series(&id("A")).unwrap_err() {
            IngestError::DuplicateDate { product, date } => {
                assert_eq!(product, "A");
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
            }
            other => panic!("Expected DuplicateDate, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_on_disk_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "smartstock-header-only-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "date,product,sales\n").unwrap();

        let result = Dataset::from_path(&path);
        std::fs::remove_file(&path).unwrap();

        match result.unwrap_err() {
            IngestError::EmptyDataset(p) => assert_eq!(p, path),
            other => panic!("Expected EmptyDataset, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Dataset::from_path("/nonexistent/smartstock/sales.csv").unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let data = load("date,product,sales\n").unwrap();
        assert!(data.is_empty());
        assert!(data.products().is_empty());
    }
}
