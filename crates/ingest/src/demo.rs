//! Deterministic synthetic sales history.
//!
//! Model, per product:
//! - base daily demand drawn from `[20, 60)` and a daily growth rate from
//!   `[0.0005, 0.002)`;
//! - `trend = base * (1 + growth * day_index)`;
//! - Friday to Sunday sell 20% more;
//! - Gaussian noise (sd 5), truncated to whole units and floored at zero.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use smartstock_core::{ProductId, SalesRecord};

use crate::error::IngestError;

pub const DEFAULT_PRODUCTS: [&str; 10] = [
    "Rice 50kg",
    "Indomie Carton",
    "Coca-Cola Crate",
    "Peak Milk Tin",
    "Golden Penny Flour",
    "Sugar 1kg",
    "Palm Oil 5L",
    "Dettol Soap",
    "Milo Refill",
    "Bread Loaf",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataConfig {
    pub seed: u64,
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub products: Vec<String>,
    pub weekend_boost: f64,
    pub noise_std_dev: f64,
}

impl Default for DemoDataConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
            products: DEFAULT_PRODUCTS.iter().map(|p| p.to_string()).collect(),
            weekend_boost: 1.2,
            noise_std_dev: 5.0,
        }
    }
}

impl DemoDataConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate the full history, product by product, each in date order.
pub fn generate(config: &DemoDataConfig) -> Result<Vec<SalesRecord>, IngestError> {
    if config.end < config.start {
        return Err(IngestError::InvalidConfig(format!(
            "end date {} is before start date {}",
            config.end, config.start
        )));
    }

    ensure_non_negative("noise_std_dev", config.noise_std_dev)?;
    ensure_non_negative("weekend_boost", config.weekend_boost)?;

    let noise = Normal::new(0.0, config.noise_std_dev)
        .map_err(|e| IngestError::InvalidConfig(format!("noise_std_dev: {e}")))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let days: Vec<NaiveDate> = config
        .start
        .iter_days()
        .take_while(|d| *d <= config.end)
        .collect();

    let mut records = Vec::with_capacity(days.len() * config.products.len());
    for name in &config.products {
        let product = ProductId::new(name.as_str())
            .map_err(|e| IngestError::InvalidConfig(e.to_string()))?;
        let base_demand = f64::from(rng.gen_range(20u32..60));
        let growth_rate: f64 = rng.gen_range(0.0005..0.002);

        for (i, date) in days.iter().enumerate() {
            let trend = base_demand * (1.0 + growth_rate * i as f64);
            let boost = if is_weekend(*date) {
                config.weekend_boost
            } else {
                1.0
            };
            let value = (trend * boost + noise.sample(&mut rng)).trunc().max(0.0);

            records.push(SalesRecord {
                date: *date,
                product: product.clone(),
                sales: value as u32,
            });
        }
    }

    tracing::debug!(
        seed = config.seed,
        products = config.products.len(),
        days = days.len(),
        "generated demo sales history"
    );

    Ok(records)
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), IngestError> {
    if !value.is_finite() || value < 0.0 {
        return Err(IngestError::InvalidConfig(format!(
            "{field} must be a finite non-negative number (got {value})"
        )));
    }
    Ok(())
}

/// Friday, Saturday and Sunday.
fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 4
}
