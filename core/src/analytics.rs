//! Frequency counts and summary metrics that feed the charts.

use crate::customer::CustomerRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const NOT_CHURN_LABEL: &str = "Not Churn";
pub const CHURN_LABEL: &str = "Churn";

/// One bar of a bar chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountBar {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChurnMetrics {
    pub total_customers:    usize,
    pub predicted_to_churn: usize,
    /// Percentage in [0, 100].
    pub churn_rate_pct:     f64,
}

impl ChurnMetrics {
    /// The rate as shown on the metric card, one decimal.
    pub fn churn_rate_display(&self) -> String {
        format!("{:.1}", self.churn_rate_pct)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub customer_id: String,
    pub monthly_charges: u32,
    pub churn_probability: f64,
}

pub fn churn_metrics(rows: &[CustomerRow]) -> ChurnMetrics {
    let total = rows.len();
    let churners = rows.iter().filter(|r| r.will_churn).count();
    let rate = if total == 0 {
        0.0
    } else {
        churners as f64 / total as f64 * 100.0
    };
    ChurnMetrics {
        total_customers: total,
        predicted_to_churn: churners,
        churn_rate_pct: rate,
    }
}

/// Count over WillChurn, labelled "Not Churn" / "Churn".
pub fn churn_distribution(rows: &[CustomerRow]) -> Vec<CountBar> {
    value_counts(rows.iter().map(|r| if r.will_churn { CHURN_LABEL } else { NOT_CHURN_LABEL }))
}

/// Count over MainReason.
pub fn reason_distribution(rows: &[CustomerRow]) -> Vec<CountBar> {
    value_counts(rows.iter().map(|r| r.main_reason.as_str()))
}

/// Charges-vs-probability points; rows without charges are skipped.
pub fn charges_scatter(rows: &[CustomerRow]) -> Vec<ScatterPoint> {
    rows.iter()
        .filter_map(|r| {
            r.record.monthly_charges.map(|charges| ScatterPoint {
                customer_id: r.record.customer_id.clone(),
                monthly_charges: charges,
                churn_probability: r.record.churn_probability,
            })
        })
        .collect()
}

/// Frequency count sorted by descending count, ties by label.
pub fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CountBar> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut bars: Vec<CountBar> = counts
        .into_iter()
        .map(|(label, count)| CountBar { label: label.to_string(), count })
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    bars
}
