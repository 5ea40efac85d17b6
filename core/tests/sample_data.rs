//! Synthetic table generation: ids, bounds, derived columns, determinism.

use churn_core::{
    config::{DashboardConfig, ProbabilityProfile, ReasonThresholds, TableConfig},
    customer::CustomerRow,
    rng::TableSlot,
    error::DashboardError,
    sample_data::{fallback_reason, generate},
};

const COMPANIES: [&str; 4] = ["Airtel", "Jio", "VI", "BSNL"];

fn rows(company: &str, slot: TableSlot, table: &TableConfig, seed: u64) -> Vec<CustomerRow> {
    generate(company, slot, table, seed)
        .unwrap()
        .into_iter()
        .map(|r| CustomerRow::derive(r, &ReasonThresholds::default(), fallback_reason(slot)))
        .collect()
}

#[test]
fn record_count_and_ids_follow_the_table() {
    let config = DashboardConfig::default();

    let current = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 42).unwrap();
    assert_eq!(current.len(), 50);
    assert_eq!(current[0].customer_id, "AI-1");
    assert_eq!(current[49].customer_id, "AI-50");

    let future = generate("BSNL", TableSlot::FutureChurn, &config.future_churn, 42).unwrap();
    assert_eq!(future.len(), 30);
    assert_eq!(future[0].customer_id, "BS-F1");
}

#[test]
fn generated_values_stay_inside_configured_bounds() {
    let config = DashboardConfig::default();
    for seed in [1u64, 42, 0xDEAD_BEEF] {
        for company in COMPANIES {
            for (slot, table) in [
                (TableSlot::CurrentMonth, &config.current_month),
                (TableSlot::FutureChurn, &config.future_churn),
            ] {
                for r in generate(company, slot, table, seed).unwrap() {
                    assert!((0.0..=1.0).contains(&r.churn_probability));
                    if let ProbabilityProfile::Uniform { low, high } = table.probability {
                        assert!(
                            r.churn_probability >= low && r.churn_probability <= high,
                            "{} probability {} outside [{low}, {high}]",
                            r.customer_id,
                            r.churn_probability,
                        );
                    }
                    let charges = r.monthly_charges.expect("charges");
                    assert!((table.charges_min..=table.charges_max).contains(&charges));
                    let tenure = r.tenure.expect("tenure");
                    assert!((table.tenure_min..=table.tenure_max).contains(&tenure));
                    assert!(r.contract_type.is_some());
                }
            }
        }
    }
}

#[test]
fn will_churn_matches_probability_and_reasons_are_never_empty() {
    let config = DashboardConfig::default();
    for seed in 0..20u64 {
        for slot in [TableSlot::CurrentMonth, TableSlot::FutureChurn] {
            let table = match slot {
                TableSlot::CurrentMonth => &config.current_month,
                TableSlot::FutureChurn => &config.future_churn,
            };
            for row in rows("Jio", slot, table, seed) {
                assert_eq!(row.will_churn, row.record.churn_probability > 0.5);
                assert!(!row.churn_reason.is_empty(), "{} has no reason", row.record.customer_id);
                assert!(row.churn_reason.starts_with(&row.main_reason));
            }
        }
    }
}

/// Future table draws from 0.65..0.99, so every customer is a predicted churner.
#[test]
fn future_table_is_all_high_risk() {
    let config = DashboardConfig::default();
    let rows = rows("VI", TableSlot::FutureChurn, &config.future_churn, 7);
    assert!(rows.iter().all(|r| r.will_churn));
}

#[test]
fn same_seed_same_table() {
    let config = DashboardConfig::default();
    let a = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 0xC4E5_F1CA).unwrap();
    let b = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 0xC4E5_F1CA).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_different_tables() {
    let config = DashboardConfig::default();
    let a = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 42).unwrap();
    let b = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 99).unwrap();
    assert_ne!(a, b, "seed is not reaching the generator");
}

/// Companies get independent streams, so their tables differ beyond the id prefix.
#[test]
fn companies_get_independent_tables() {
    let config = DashboardConfig::default();
    let a = generate("Airtel", TableSlot::CurrentMonth, &config.current_month, 42).unwrap();
    let b = generate("Jio", TableSlot::CurrentMonth, &config.current_month, 42).unwrap();
    let any_different = a
        .iter()
        .zip(b.iter())
        .any(|(x, y)| x.churn_probability != y.churn_probability || x.monthly_charges != y.monthly_charges);
    assert!(any_different);
}

#[test]
fn contract_weights_can_pin_a_single_contract() {
    let mut table = TableConfig::future_default();
    table.contract_weights.month_to_month = 1.0;
    table.contract_weights.one_year = 0.0;
    table.contract_weights.two_year = 0.0;

    let rows = rows("Jio", TableSlot::FutureChurn, &table, 3);
    assert!(rows.iter().all(|r| r.churn_reason.contains("No long-term contract")));
}

#[test]
fn empty_table_is_allowed() {
    let mut table = TableConfig::current_month_default();
    table.record_count = 0;
    assert!(generate("Airtel", TableSlot::CurrentMonth, &table, 1).unwrap().is_empty());
}

#[test]
fn unusable_probability_profiles_are_reported() {
    let mut table = TableConfig::current_month_default();
    table.probability = ProbabilityProfile::Beta { alpha: 0.0, beta: 3.0 };
    let err = generate("Airtel", TableSlot::CurrentMonth, &table, 1).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidProfile { .. }));

    table.probability = ProbabilityProfile::Uniform { low: 0.9, high: 0.1 };
    let err = generate("Airtel", TableSlot::CurrentMonth, &table, 1).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidProfile { .. }));
}
