//! Threshold rules that explain why a customer might churn.
//!
//! Rule order is fixed: charges → tenure → contract → fallback.
//! Each record is evaluated on its own; there is no cross-record state.

use crate::{
    config::ReasonThresholds,
    customer::CustomerRecord,
    types::ContractType,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTag {
    HighMonthlyCharges,
    LowTenure,
    NoLongTermContract,
    /// Fallback on the current-month page.
    GeneralUsagePattern,
    /// Fallback on the future page.
    UsagePatternRisk,
}

impl ReasonTag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighMonthlyCharges  => "High monthly charges",
            Self::LowTenure           => "Low tenure",
            Self::NoLongTermContract  => "No long-term contract",
            Self::GeneralUsagePattern => "General usage pattern",
            Self::UsagePatternRisk    => "Usage pattern risk",
        }
    }
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered reason tags for one record. Never empty: `fallback` is
/// returned alone when no rule fires. A missing field never fires.
pub fn derive_reasons(
    record: &CustomerRecord,
    thresholds: &ReasonThresholds,
    fallback: ReasonTag,
) -> Vec<ReasonTag> {
    let mut tags = Vec::with_capacity(3);

    if record.monthly_charges.is_some_and(|c| c > thresholds.high_charges_above) {
        tags.push(ReasonTag::HighMonthlyCharges);
    }
    if record.tenure.is_some_and(|t| t <= thresholds.low_tenure_at_most) {
        tags.push(ReasonTag::LowTenure);
    }
    if record.contract_type == Some(ContractType::MonthToMonth) {
        tags.push(ReasonTag::NoLongTermContract);
    }
    if tags.is_empty() {
        tags.push(fallback);
    }
    tags
}

/// The comma-joined ChurnReason column.
pub fn join_reasons(tags: &[ReasonTag]) -> String {
    tags.iter().map(ReasonTag::label).collect::<Vec<_>>().join(", ")
}
