//! End-to-end scenarios through the analytics facade.

use chrono::NaiveDate;

use smartstock_analytics::{
    BusinessSummary, CapitalStatus, RiskLevel, TimingAdvice, VolatilityBand, evaluate,
};
use smartstock_core::{CapitalConstraint, DomainError, ProductId, ProductSeries, RiskInputs};

fn product(name: &str) -> ProductId {
    ProductId::new(name).unwrap()
}

fn daily(name: &str, sales: &[u32]) -> ProductSeries {
    ProductSeries::from_daily_sales(
        product(name),
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        sales,
    )
}

#[test]
fn reference_retailer_scenario() {
    let series = daily("Rice 50kg", &[40; 30]);
    let inputs = RiskInputs::new(500, 7.0).unwrap();
    let capital = CapitalConstraint::new(1000.0, 500_000.0).unwrap();

    let report = evaluate(&series, &inputs, &capital).unwrap();

    assert_eq!(report.product, product("Rice 50kg"));
    assert_eq!(report.forecast.predicted_units, 1200);
    assert_eq!(report.reorder.recommended_units, 700);
    assert_eq!(report.reorder.max_affordable_units, 500);
    assert_eq!(report.reorder.optimized_units, 500);
    assert!((report.timing.days_until_stockout - 500.0 / 41.0).abs() < 1e-9);
    assert!(!report.timing.is_urgent);
    assert_eq!(report.timing.safe_window_days, Some(5));
    assert_eq!(report.risk.composite_score, 60);

    let advisories = report.advisories();
    assert_eq!(advisories.risk_level, RiskLevel::Moderate);
    assert_eq!(advisories.volatility, VolatilityBand::Stable);
    assert_eq!(
        advisories.capital,
        CapitalStatus::Constrained {
            affordable: 500,
            recommended: 700
        }
    );
    assert_eq!(advisories.timing, TimingAdvice::SafeFor { days: 5 });
    assert_eq!(
        advisories.summary,
        BusinessSummary::CapitalLimited {
            recommended: 700,
            affordable: 500
        }
    );
}

#[test]
fn empty_series_fails_before_any_stage() {
    let series = ProductSeries::empty(product("Bread Loaf"));
    let inputs = RiskInputs::new(500, 7.0).unwrap();
    let capital = CapitalConstraint::new(1000.0, 500_000.0).unwrap();

    let err = evaluate(&series, &inputs, &capital).unwrap_err();
    assert_eq!(err, DomainError::InsufficientData("Bread Loaf".to_string()));
}

#[test]
fn nearly_empty_shelf_is_high_risk_and_urgent() {
    let series = daily("Coca-Cola Crate", &[55; 45]);
    let inputs = RiskInputs::new(20, 10.0).unwrap();
    let capital = CapitalConstraint::new(2500.0, 10_000_000.0).unwrap();

    let report = evaluate(&series, &inputs, &capital).unwrap();
    let advisories = report.advisories();

    assert!(report.timing.is_urgent);
    assert_eq!(report.reorder.optimized_units, report.reorder.recommended_units);
    // pressure 1, volatility 0, lead-time 1 -> 70
    assert_eq!(report.risk.composite_score, 70);
    assert_eq!(advisories.risk_level, RiskLevel::High);
    assert_eq!(
        advisories.timing,
        TimingAdvice::ReorderNow {
            days_until_stockout: 0
        }
    );
    assert_eq!(advisories.capital, CapitalStatus::Sufficient);
}

#[test]
fn overstocked_product_needs_no_reorder() {
    let series = daily("Sugar 1kg", &[10; 30]);
    let inputs = RiskInputs::new(5_000, 3.0).unwrap();
    let capital = CapitalConstraint::new(100.0, 0.0).unwrap();

    let report = evaluate(&series, &inputs, &capital).unwrap();
    let advisories = report.advisories();

    assert_eq!(report.reorder.recommended_units, 0);
    assert_eq!(report.reorder.optimized_units, 0);
    assert_eq!(advisories.summary, BusinessSummary::StockSufficient);
    assert_eq!(advisories.capital, CapitalStatus::Sufficient);
    assert_eq!(advisories.risk_level, RiskLevel::Low);
}

#[test]
fn evaluation_is_idempotent() {
    let sales: Vec<u32> = (0..90).map(|i| 20 + (i * 7 % 13)).collect();
    let series = daily("Peak Milk Tin", &sales);
    let inputs = RiskInputs::new(350, 5.0).unwrap();
    let capital = CapitalConstraint::new(750.0, 200_000.0).unwrap();

    let first = evaluate(&series, &inputs, &capital).unwrap();
    let second = evaluate(&series, &inputs, &capital).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn distinct_products_evaluate_independently_across_threads() {
    let catalog: Vec<ProductSeries> = (0..8u32)
        .map(|i| daily(&format!("Product {i}"), &vec![10 + i; 40]))
        .collect();
    let inputs = RiskInputs::new(100, 4.0).unwrap();
    let capital = CapitalConstraint::new(10.0, 5_000.0).unwrap();

    let sequential: Vec<_> = catalog
        .iter()
        .map(|s| evaluate(s, &inputs, &capital).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = catalog
            .iter()
            .map(|s| scope.spawn(move || evaluate(s, &inputs, &capital).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
