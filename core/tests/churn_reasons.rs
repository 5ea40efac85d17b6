//! Reason derivation: rule order, thresholds and the fallback guarantee.

use churn_core::{
    config::ReasonThresholds,
    customer::{CustomerRecord, CustomerRow},
    reasons::{derive_reasons, join_reasons, ReasonTag},
    types::ContractType,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn record(charges: Option<u32>, tenure: Option<u32>, contract: Option<ContractType>) -> CustomerRecord {
    CustomerRecord {
        customer_id: "AI-1".into(),
        churn_probability: 0.7,
        monthly_charges: charges,
        tenure,
        contract_type: contract,
    }
}

fn thresholds() -> ReasonThresholds {
    ReasonThresholds::default()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn all_three_rules_fire_in_fixed_order() {
    let r = record(Some(1300), Some(2), Some(ContractType::MonthToMonth));
    let tags = derive_reasons(&r, &thresholds(), ReasonTag::UsagePatternRisk);

    assert_eq!(
        tags,
        vec![ReasonTag::HighMonthlyCharges, ReasonTag::LowTenure, ReasonTag::NoLongTermContract]
    );
    assert_eq!(join_reasons(&tags), "High monthly charges, Low tenure, No long-term contract");
}

#[test]
fn quiet_record_gets_exactly_the_fallback() {
    let r = record(Some(500), Some(24), Some(ContractType::TwoYear));

    let current = derive_reasons(&r, &thresholds(), ReasonTag::GeneralUsagePattern);
    assert_eq!(current, vec![ReasonTag::GeneralUsagePattern]);

    let future = derive_reasons(&r, &thresholds(), ReasonTag::UsagePatternRisk);
    assert_eq!(future, vec![ReasonTag::UsagePatternRisk]);
    assert_eq!(join_reasons(&future), "Usage pattern risk");
}

/// Charges must be strictly above the threshold; tenure at or below.
#[test]
fn threshold_boundaries() {
    let t = thresholds();
    let at_charge_limit = record(Some(t.high_charges_above), Some(12), Some(ContractType::OneYear));
    assert_eq!(
        derive_reasons(&at_charge_limit, &t, ReasonTag::GeneralUsagePattern),
        vec![ReasonTag::GeneralUsagePattern]
    );

    let above = record(Some(t.high_charges_above + 1), Some(12), Some(ContractType::OneYear));
    assert_eq!(
        derive_reasons(&above, &t, ReasonTag::GeneralUsagePattern),
        vec![ReasonTag::HighMonthlyCharges]
    );

    let at_tenure_limit = record(Some(100), Some(t.low_tenure_at_most), Some(ContractType::OneYear));
    assert_eq!(
        derive_reasons(&at_tenure_limit, &t, ReasonTag::GeneralUsagePattern),
        vec![ReasonTag::LowTenure]
    );

    let past = record(Some(100), Some(t.low_tenure_at_most + 1), Some(ContractType::OneYear));
    assert_eq!(
        derive_reasons(&past, &t, ReasonTag::GeneralUsagePattern),
        vec![ReasonTag::GeneralUsagePattern]
    );
}

#[test]
fn missing_fields_never_fire() {
    let r = record(None, None, None);
    assert_eq!(
        derive_reasons(&r, &thresholds(), ReasonTag::GeneralUsagePattern),
        vec![ReasonTag::GeneralUsagePattern]
    );
}

#[test]
fn custom_thresholds_are_respected() {
    let t = ReasonThresholds { high_charges_above: 1400, low_tenure_at_most: 6 };
    let r = record(Some(1300), Some(5), Some(ContractType::TwoYear));
    assert_eq!(derive_reasons(&r, &t, ReasonTag::UsagePatternRisk), vec![ReasonTag::LowTenure]);
}

#[test]
fn row_derives_main_reason_and_will_churn() {
    let r = record(Some(800), Some(2), Some(ContractType::MonthToMonth));
    let row = CustomerRow::derive(r, &thresholds(), ReasonTag::GeneralUsagePattern);

    assert!(row.will_churn);
    assert_eq!(row.churn_reason, "Low tenure, No long-term contract");
    assert_eq!(row.main_reason, "Low tenure");
}

/// Exactly 0.5 is not a churn prediction.
#[test]
fn will_churn_cutoff_is_strict() {
    let mut r = record(None, None, None);
    r.churn_probability = 0.5;
    assert!(!r.will_churn());
    r.churn_probability = 0.51;
    assert!(r.will_churn());
}
