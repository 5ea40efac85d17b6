use crate::types::{CompanyName, ContractType};
use serde::{Deserialize, Serialize};

// ── Reason thresholds ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReasonThresholds {
    /// "High monthly charges" fires when charges are strictly above this.
    pub high_charges_above: u32,
    /// "Low tenure" fires when tenure (months) is at or below this.
    pub low_tenure_at_most: u32,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            high_charges_above: 1000,
            low_tenure_at_most: 3,
        }
    }
}

// ── Generation ─────────────────────────────────────────────────────

/// Upper bound on rows per table. Tables are rebuilt on every render.
pub const MAX_RECORD_COUNT: usize = 1000;

/// How churn probabilities are drawn for a table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbabilityProfile {
    Uniform { low: f64, high: f64 },
    Beta { alpha: f64, beta: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractWeights {
    pub month_to_month: f64,
    pub one_year: f64,
    pub two_year: f64,
}

impl ContractWeights {
    pub fn weight(&self, contract: ContractType) -> f64 {
        match contract {
            ContractType::MonthToMonth => self.month_to_month,
            ContractType::OneYear      => self.one_year,
            ContractType::TwoYear      => self.two_year,
        }
    }

    pub fn total(&self) -> f64 {
        self.month_to_month + self.one_year + self.two_year
    }
}

impl Default for ContractWeights {
    fn default() -> Self {
        Self {
            month_to_month: 0.55,
            one_year: 0.25,
            two_year: 0.20,
        }
    }
}

/// Everything needed to generate one page's customer table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    pub record_count: usize,
    pub probability: ProbabilityProfile,
    pub charges_min: u32,
    pub charges_max: u32,
    pub tenure_min: u32,
    pub tenure_max: u32,
    #[serde(default)]
    pub contract_weights: ContractWeights,
}

impl TableConfig {
    pub fn current_month_default() -> Self {
        Self {
            record_count: 50,
            probability: ProbabilityProfile::Beta { alpha: 2.0, beta: 3.0 },
            charges_min: 300,
            charges_max: 1500,
            tenure_min: 1,
            tenure_max: 72,
            contract_weights: ContractWeights::default(),
        }
    }

    pub fn future_default() -> Self {
        Self {
            record_count: 30,
            probability: ProbabilityProfile::Uniform { low: 0.65, high: 0.99 },
            charges_min: 700,
            charges_max: 1500,
            tenure_min: 1,
            tenure_max: 24,
            contract_weights: ContractWeights::default(),
        }
    }

    fn validate(&self, name: &str) -> anyhow::Result<()> {
        if self.record_count > MAX_RECORD_COUNT {
            anyhow::bail!(
                "{name}: record_count {} exceeds the limit of {MAX_RECORD_COUNT}",
                self.record_count
            );
        }
        if self.charges_min > self.charges_max {
            anyhow::bail!("{name}: charges_min {} > charges_max {}", self.charges_min, self.charges_max);
        }
        if self.tenure_min > self.tenure_max {
            anyhow::bail!("{name}: tenure_min {} > tenure_max {}", self.tenure_min, self.tenure_max);
        }
        let w = &self.contract_weights;
        if w.month_to_month < 0.0 || w.one_year < 0.0 || w.two_year < 0.0 || w.total() <= 0.0 {
            anyhow::bail!("{name}: contract weights must be non-negative with a positive sum");
        }
        match self.probability {
            ProbabilityProfile::Uniform { low, high } => {
                if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
                    anyhow::bail!("{name}: uniform band [{low}, {high}] must sit inside [0, 1]");
                }
            }
            ProbabilityProfile::Beta { alpha, beta } => {
                if alpha <= 0.0 || beta <= 0.0 {
                    anyhow::bail!("{name}: beta parameters must be > 0 (got {alpha}, {beta})");
                }
            }
        }
        Ok(())
    }
}

// ── Root config ────────────────────────────────────────────────────

/// Dashboard configuration. Credentials are deliberately absent:
/// the demo accounts live in `auth::CredentialStore` only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub companies: Vec<CompanyName>,
    pub default_seed: u64,
    pub thresholds: ReasonThresholds,
    pub current_month: TableConfig,
    pub future_churn: TableConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Telecom Churn Dashboard".into(),
            companies: vec!["Airtel".into(), "Jio".into(), "VI".into(), "BSNL".into()],
            default_seed: 42,
            thresholds: ReasonThresholds::default(),
            current_month: TableConfig::current_month_default(),
            future_churn: TableConfig::future_default(),
        }
    }
}

impl DashboardConfig {
    /// Load a JSON config file. Every field is required; start from
    /// `serde_json::to_string_pretty(&DashboardConfig::default())`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        log::info!("loaded config from {path}: {} companies", config.companies.len());
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.companies.is_empty() {
            anyhow::bail!("companies must not be empty");
        }
        if let Some(bad) = self.companies.iter().find(|c| c.trim().is_empty()) {
            anyhow::bail!("company names must not be blank (got {bad:?})");
        }
        self.current_month.validate("current_month")?;
        self.future_churn.validate("future_churn")?;
        Ok(())
    }

    pub fn has_company(&self, name: &str) -> bool {
        self.companies.iter().any(|c| c == name)
    }

    /// Small tables for tests; thresholds and companies match the default.
    pub fn default_test() -> Self {
        let mut config = Self::default();
        config.current_month.record_count = 20;
        config.future_churn.record_count = 15;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        DashboardConfig::default().validate().unwrap();
        DashboardConfig::default_test().validate().unwrap();
    }

    #[test]
    fn inverted_band_is_rejected() {
        let mut config = DashboardConfig::default();
        config.future_churn.probability = ProbabilityProfile::Uniform { low: 0.9, high: 0.2 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_tables_are_rejected() {
        let mut config = DashboardConfig::default();
        config.current_month.record_count = MAX_RECORD_COUNT;
        config.validate().unwrap();

        config.current_month.record_count = MAX_RECORD_COUNT + 1;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.future_churn.record_count = usize::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("future_churn"), "unexpected error: {err}");
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!("churn-missing-{}.json", uuid::Uuid::new_v4()));
        let err = DashboardConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Cannot read"), "unexpected error: {err}");
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!("churn-bad-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ \"title\": ").unwrap();
        let err = DashboardConfig::load(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().starts_with("Cannot parse"), "unexpected error: {err}");
    }

    #[test]
    fn load_rejects_oversized_table_from_file() {
        let path = std::env::temp_dir().join(format!("churn-big-{}.json", uuid::Uuid::new_v4()));
        let mut config = DashboardConfig::default();
        config.current_month.record_count = 10_000_000;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let result = DashboardConfig::load(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn config_round_trips_through_json_file() {
        let path = std::env::temp_dir().join(format!("churn-config-{}.json", uuid::Uuid::new_v4()));
        let mut config = DashboardConfig::default();
        config.companies = vec!["Airtel".into(), "Jio".into()];
        config.thresholds.high_charges_above = 1200;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = DashboardConfig::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
