//! Generated demo data flows through CSV, back through the loader and into the engine.

use smartstock_analytics::evaluate;
use smartstock_core::{CapitalConstraint, RiskInputs, TRAILING_WINDOW_DAYS};
use smartstock_ingest::{Dataset, DemoDataConfig, generate, write_records};

#[test]
fn demo_history_loads_and_evaluates_for_every_product() {
    let config = DemoDataConfig::default();
    let records = generate(&config).unwrap();

    let mut csv = Vec::new();
    write_records(&mut csv, &records).unwrap();
    let dataset = Dataset::from_reader(csv.as_slice()).unwrap();

    assert_eq!(dataset.len(), records.len());
    let products = dataset.products();
    assert_eq!(products.len(), config.products.len());

    let inputs = RiskInputs::new(500, 7.0).unwrap();
    let capital = CapitalConstraint::new(1000.0, 500_000.0).unwrap();

    for product in &products {
        let series = dataset.series(product).unwrap();
        assert_eq!(series.len(), 184);

        let report = evaluate(&series, &inputs, &capital).unwrap();
        assert_eq!(report.forecast.window_len, TRAILING_WINDOW_DAYS);
        assert!(report.risk.composite_score <= 100);
        assert!(report.reorder.optimized_units <= report.reorder.recommended_units);
        assert!(report.reorder.optimized_units <= 500);
    }
}

#[test]
fn shuffled_rows_produce_the_same_report() {
    let records = generate(&DemoDataConfig::default().with_seed(3)).unwrap();
    let mut reversed = records.clone();
    reversed.reverse();

    let inputs = RiskInputs::new(250, 4.0).unwrap();
    let capital = CapitalConstraint::new(500.0, 100_000.0).unwrap();

    let in_order = Dataset::new(records);
    let backwards = Dataset::new(reversed);
    let product = &in_order.products()[0];

    let a = evaluate(&in_order.series(product).unwrap(), &inputs, &capital).unwrap();
    let b = evaluate(&backwards.series(product).unwrap(), &inputs, &capital).unwrap();
    assert_eq!(a, b);
}
