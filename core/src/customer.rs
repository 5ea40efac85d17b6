use crate::{
    config::ReasonThresholds,
    reasons::{derive_reasons, join_reasons, ReasonTag},
    types::{ContractType, CustomerId},
};
use serde::{Deserialize, Serialize};

/// Probability above which a customer is predicted to churn.
pub const CHURN_CUTOFF: f64 = 0.5;

/// One synthetic customer as generated for a page.
/// Optional fields stay `None` when a table does not carry them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    #[serde(rename = "CustomerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "ChurnProbability")]
    pub churn_probability: f64,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: Option<u32>,
    #[serde(rename = "Tenure")]
    pub tenure: Option<u32>,
    #[serde(rename = "ContractType")]
    pub contract_type: Option<ContractType>,
}

impl CustomerRecord {
    pub fn will_churn(&self) -> bool {
        self.churn_probability > CHURN_CUTOFF
    }
}

/// A record plus the columns derived from it for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRow {
    #[serde(flatten)]
    pub record: CustomerRecord,
    #[serde(rename = "WillChurn")]
    pub will_churn: bool,
    #[serde(rename = "ChurnReason")]
    pub churn_reason: String,
    #[serde(rename = "MainReason")]
    pub main_reason: String,
}

impl CustomerRow {
    pub fn derive(record: CustomerRecord, thresholds: &ReasonThresholds, fallback: ReasonTag) -> Self {
        let tags = derive_reasons(&record, thresholds, fallback);
        // derive_reasons always returns at least the fallback.
        let main_reason = tags.first().copied().unwrap_or(fallback).label().to_string();
        Self {
            will_churn: record.will_churn(),
            churn_reason: join_reasons(&tags),
            main_reason,
            record,
        }
    }
}
