//! Shared primitive types used across the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for one browser-style session.
pub type SessionId = String;

/// A telecom company name as shown in the selector ("Airtel", "Jio", ...).
pub type CompanyName = String;

/// A synthetic customer identifier ("AI-7", "JI-F3").
pub type CustomerId = String;

/// The four pages the session router moves between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    CompanySelect,
    CurrentMonth,
    FutureChurn,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login         => "login",
            Self::CompanySelect => "company_select",
            Self::CurrentMonth  => "current_month",
            Self::FutureChurn   => "future_churn",
        }
    }

    /// Pages that show customer data and therefore need a selected company.
    pub fn is_data_page(&self) -> bool {
        matches!(self, Self::CurrentMonth | Self::FutureChurn)
    }

    /// Parse the snake_case page name used by commands and the terminal.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "login"          => Some(Self::Login),
            "company_select" => Some(Self::CompanySelect),
            "current_month"  => Some(Self::CurrentMonth),
            "future_churn"   => Some(Self::FutureChurn),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contract length a synthetic customer is on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContractType {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [Self::MonthToMonth, Self::OneYear, Self::TwoYear];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::OneYear      => "One year",
            Self::TwoYear      => "Two year",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
