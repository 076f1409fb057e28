//! Sample CSV handed to users who need to see the expected layout.

use std::io;

use chrono::NaiveDate;

use smartstock_core::{DomainError, ProductId, SalesRecord};

use crate::dataset::write_records;
use crate::error::IngestError;

/// Suggested file name for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "smartstock_sample_template.csv";

pub fn template_records() -> Result<Vec<SalesRecord>, DomainError> {
    let product = ProductId::new("Rice 50kg")?;
    let rows = [((2025, 1, 1), 45), ((2025, 1, 2), 38)];

    rows.into_iter()
        .map(|((y, m, d), sales)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                DomainError::validation(format!("invalid template date {y}-{m}-{d}"))
            })?;
            Ok(SalesRecord {
                date,
                product: product.clone(),
                sales,
            })
        })
        .collect()
}

pub fn write_template<W: io::Write>(writer: W) -> Result<(), IngestError> {
    let records =
        template_records().map_err(|source| IngestError::InvalidField { line: 0, source })?;
    write_records(writer, &records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_matches_documented_layout() {
        let mut out = Vec::new();
        write_template(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,product,sales\n2025-01-01,Rice 50kg,45\n2025-01-02,Rice 50kg,38\n"
        );
    }
}
