//! Synthetic customer tables for the two data pages.
//!
//! Tables are regenerated on every render and never stored.
//! Same (seed, company, slot, config) always yields the same table.

use crate::{
    config::{ProbabilityProfile, TableConfig},
    customer::CustomerRecord,
    error::{DashResult, DashboardError},
    reasons::ReasonTag,
    rng::{PageRng, RngBank, TableSlot},
    types::ContractType,
};
use rand_distr::{Beta, Uniform};

/// Two-letter upper-case prefix used in customer ids ("Airtel" → "AI").
pub fn company_code(company: &str) -> String {
    company.chars().take(2).collect::<String>().to_uppercase()
}

/// The customer id for the `index`-th (1-based) row of a table.
pub fn customer_id(company: &str, slot: TableSlot, index: usize) -> String {
    let code = company_code(company);
    match slot {
        TableSlot::CurrentMonth => format!("{code}-{index}"),
        TableSlot::FutureChurn  => format!("{code}-F{index}"),
    }
}

/// The fallback reason tag each table uses.
pub fn fallback_reason(slot: TableSlot) -> ReasonTag {
    match slot {
        TableSlot::CurrentMonth => ReasonTag::GeneralUsagePattern,
        TableSlot::FutureChurn  => ReasonTag::UsagePatternRisk,
    }
}

/// Generate `table.record_count` customers for `company` on `slot`.
pub fn generate(
    company: &str,
    slot: TableSlot,
    table: &TableConfig,
    seed: u64,
) -> DashResult<Vec<CustomerRecord>> {
    let sampler = ProbabilitySampler::new(table.probability)?;
    let mut rng = RngBank::new(seed).for_table(company, slot);
    let records: Vec<CustomerRecord> = (1..=table.record_count)
        .map(|i| CustomerRecord {
            customer_id: customer_id(company, slot, i),
            churn_probability: sampler.draw(&mut rng),
            monthly_charges: Some(rng.next_u32_between(table.charges_min, table.charges_max)),
            tenure: Some(rng.next_u32_between(table.tenure_min, table.tenure_max)),
            contract_type: Some(pick_contract(table, &mut rng)),
        })
        .collect();

    log::debug!(
        "generated {} {} rows for {company} (seed={seed}, stream={})",
        records.len(),
        slot.name(),
        rng.name,
    );
    Ok(records)
}

/// A probability profile turned into a ready-to-draw distribution.
enum ProbabilitySampler {
    Uniform { dist: Uniform<f64>, low: f64, high: f64 },
    Beta(Beta<f64>),
}

impl ProbabilitySampler {
    fn new(profile: ProbabilityProfile) -> DashResult<Self> {
        match profile {
            ProbabilityProfile::Uniform { low, high } => {
                if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
                    return Err(DashboardError::InvalidProfile {
                        reason: format!("uniform band [{low}, {high}] must sit inside [0, 1]"),
                    });
                }
                Ok(Self::Uniform { dist: Uniform::new_inclusive(low, high), low, high })
            }
            ProbabilityProfile::Beta { alpha, beta } => Beta::new(alpha, beta)
                .map(Self::Beta)
                .map_err(|e| DashboardError::InvalidProfile { reason: e.to_string() }),
        }
    }

    /// Draw a probability rounded to two decimals and kept inside the profile's range.
    fn draw(&self, rng: &mut PageRng) -> f64 {
        let (raw, lo, hi) = match self {
            Self::Uniform { dist, low, high } => (rng.sample(dist), *low, *high),
            Self::Beta(dist) => (rng.sample(dist), 0.0, 1.0),
        };
        ((raw * 100.0).round() / 100.0).clamp(lo, hi)
    }
}

fn pick_contract(table: &TableConfig, rng: &mut PageRng) -> ContractType {
    let weights = &table.contract_weights;
    let roll = rng.next_f64() * weights.total();
    let mut cumulative = 0.0;
    for contract in ContractType::ALL {
        cumulative += weights.weight(contract);
        if roll < cumulative {
            return contract;
        }
    }
    ContractType::TwoYear
}
