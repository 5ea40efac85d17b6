//! Page rendering.
//!
//! `render` is a pure function of the session, the config, the seed and
//! the date. It runs after every transition and rebuilds the whole page;
//! tables are regenerated each time, never cached. It fails only when a
//! table's probability profile cannot be sampled.

use crate::{
    analytics::{self, ChurnMetrics, CountBar, ScatterPoint},
    config::DashboardConfig,
    customer::CustomerRow,
    error::{DashResult, DashboardError},
    event::{Notice, NoticeLevel},
    rng::TableSlot,
    sample_data,
    session::Session,
    types::{CompanyName, Page},
};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_UP_TAB_HINT: &str = "Sign Up (Demo Only): type 'signup'.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct View {
    pub title:      String,
    pub page:       Page,
    pub user_email: Option<String>,
    pub notice:     Option<Notice>,
    pub body:       ViewBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewBody {
    Login {
        sign_up_hint: String,
    },
    CompanySelect {
        companies: Vec<CompanyName>,
        selected:  Option<CompanyName>,
    },
    CurrentMonth(CurrentMonthView),
    FutureChurn(FutureChurnView),
    /// A data page was reached with no company; carries the way back.
    NoCompanySelected {
        warning:     String,
        redirect_to: Page,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentMonthView {
    pub company:             CompanyName,
    pub month_label:         String,
    pub metrics:             ChurnMetrics,
    pub churn_distribution:  Vec<CountBar>,
    pub reason_distribution: Vec<CountBar>,
    pub customers:           Vec<CustomerRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FutureChurnView {
    pub company:             CompanyName,
    pub month_label:         String,
    pub high_risk_customers: Vec<CustomerRow>,
    pub reason_distribution: Vec<CountBar>,
    pub scatter:             Vec<ScatterPoint>,
}

impl View {
    /// Rows of the customer table, if this view shows one.
    pub fn customer_table(&self) -> Option<&[CustomerRow]> {
        match &self.body {
            ViewBody::CurrentMonth(v) => Some(&v.customers),
            ViewBody::FutureChurn(v) => Some(&v.high_risk_customers),
            _ => None,
        }
    }
}

pub fn render(
    session: &Session,
    config: &DashboardConfig,
    seed: u64,
    notice: Option<Notice>,
    today: NaiveDate,
) -> DashResult<View> {
    let body = if !session.logged_in {
        ViewBody::Login { sign_up_hint: SIGN_UP_TAB_HINT.to_string() }
    } else {
        match (session.page, session.selected_company.as_deref()) {
            (Page::Login | Page::CompanySelect, selected) => ViewBody::CompanySelect {
                companies: config.companies.clone(),
                selected: selected.map(str::to_string),
            },
            (Page::CurrentMonth | Page::FutureChurn, None) => {
                log::warn!("render: {} requested without a company", session.page);
                ViewBody::NoCompanySelected {
                    warning: DashboardError::NoCompanySelected.to_string(),
                    redirect_to: Page::CompanySelect,
                }
            }
            (Page::CurrentMonth, Some(company)) => {
                ViewBody::CurrentMonth(current_month(company, config, seed, today)?)
            }
            (Page::FutureChurn, Some(company)) => {
                ViewBody::FutureChurn(future_churn(company, config, seed, today)?)
            }
        }
    };

    Ok(View {
        title: config.title.clone(),
        page: session.page,
        user_email: session.user_email.clone(),
        notice,
        body,
    })
}

fn current_month(
    company: &str,
    config: &DashboardConfig,
    seed: u64,
    today: NaiveDate,
) -> DashResult<CurrentMonthView> {
    let rows = build_rows(company, TableSlot::CurrentMonth, config, seed)?;
    Ok(CurrentMonthView {
        company: company.to_string(),
        month_label: month_label(today, 0),
        metrics: analytics::churn_metrics(&rows),
        churn_distribution: analytics::churn_distribution(&rows),
        reason_distribution: analytics::reason_distribution(&rows),
        customers: rows,
    })
}

fn future_churn(
    company: &str,
    config: &DashboardConfig,
    seed: u64,
    today: NaiveDate,
) -> DashResult<FutureChurnView> {
    let rows = build_rows(company, TableSlot::FutureChurn, config, seed)?;
    Ok(FutureChurnView {
        company: company.to_string(),
        month_label: month_label(today, 1),
        reason_distribution: analytics::reason_distribution(&rows),
        scatter: analytics::charges_scatter(&rows),
        high_risk_customers: rows,
    })
}

fn build_rows(
    company: &str,
    slot: TableSlot,
    config: &DashboardConfig,
    seed: u64,
) -> DashResult<Vec<CustomerRow>> {
    let table = match slot {
        TableSlot::CurrentMonth => &config.current_month,
        TableSlot::FutureChurn  => &config.future_churn,
    };
    let fallback = sample_data::fallback_reason(slot);
    let rows = sample_data::generate(company, slot, table, seed)?
        .into_iter()
        .map(|record| CustomerRow::derive(record, &config.thresholds, fallback))
        .collect();
    Ok(rows)
}

/// "October 2026" for `ahead = 0`, the following month for `ahead = 1`.
pub fn month_label(today: NaiveDate, ahead: u32) -> String {
    let first = today.with_day(1).unwrap_or(today);
    first
        .checked_add_months(Months::new(ahead))
        .unwrap_or(first)
        .format("%B %Y")
        .to_string()
}

// ── Plain-text rendering for the terminal front end ────────────────

const BAR_WIDTH: usize = 30;
const SCATTER_COLS: usize = 40;
const SCATTER_ROWS: usize = 10;

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} :: {} ====", self.title, self.page)?;
        if let Some(email) = &self.user_email {
            writeln!(f, "Logged in as: {email}")?;
        }
        if let Some(notice) = &self.notice {
            let tag = match notice.level {
                NoticeLevel::Success => "OK",
                NoticeLevel::Info    => "INFO",
                NoticeLevel::Warning => "WARN",
                NoticeLevel::Error   => "ERROR",
            };
            writeln!(f, "[{tag}] {}", notice.text)?;
        }
        writeln!(f)?;

        match &self.body {
            ViewBody::Login { sign_up_hint } => {
                writeln!(f, "Telecom Churn Portal - Login")?;
                writeln!(f, "  login <email> <password>")?;
                writeln!(f, "  {sign_up_hint}")?;
            }
            ViewBody::CompanySelect { companies, selected } => {
                writeln!(f, "Select Telecom Company:")?;
                for c in companies {
                    let mark = if selected.as_deref() == Some(c.as_str()) { "*" } else { " " };
                    writeln!(f, "  [{mark}] {c}")?;
                }
                writeln!(f)?;
                writeln!(f, "'company <name>' to choose, 'next' to view the current month.")?;
            }
            ViewBody::NoCompanySelected { warning, redirect_to } => {
                writeln!(f, "{warning}")?;
                writeln!(f, "'goto {redirect_to}' to choose a company.")?;
            }
            ViewBody::CurrentMonth(v) => {
                writeln!(f, "Current Month Churn - {} ({})", v.company, v.month_label)?;
                writeln!(
                    f,
                    "  Total Customers (sample): {}   Predicted to Churn: {}   Churn Rate (%): {}",
                    v.metrics.total_customers,
                    v.metrics.predicted_to_churn,
                    v.metrics.churn_rate_display(),
                )?;
                writeln!(f)?;
                write_bars(f, "Churn Distribution", &v.churn_distribution)?;
                write_bars(f, "Reason Distribution", &v.reason_distribution)?;
                write_table(f, "Customer Predictions", &v.customers)?;
                writeln!(f, "'next' for the future prediction, 'back' to change company.")?;
            }
            ViewBody::FutureChurn(v) => {
                writeln!(f, "Future Churn Prediction - {} ({})", v.company, v.month_label)?;
                writeln!(f)?;
                write_table(f, "High Risk Customers", &v.high_risk_customers)?;
                write_bars(f, "Reason Distribution", &v.reason_distribution)?;
                write_scatter(f, &v.scatter)?;
                writeln!(f, "'back' for the current month, 'home' to change company.")?;
            }
        }
        Ok(())
    }
}

fn write_bars(f: &mut fmt::Formatter<'_>, heading: &str, bars: &[CountBar]) -> fmt::Result {
    writeln!(f, "#### {heading}")?;
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    for bar in bars {
        let len = bar.count * BAR_WIDTH / max;
        writeln!(
            f,
            "  {:<width$} | {} {}",
            bar.label,
            "#".repeat(len.max(1)),
            bar.count,
            width = label_width,
        )?;
    }
    writeln!(f)
}

fn write_table(f: &mut fmt::Formatter<'_>, heading: &str, rows: &[CustomerRow]) -> fmt::Result {
    writeln!(f, "#### {heading}")?;
    writeln!(
        f,
        "  {:<8} {:>6} {:>8} {:>6} {:<15} {:<5} {}",
        "ID", "Prob", "Charges", "Tenure", "Contract", "Churn", "Reason",
    )?;
    for row in rows {
        let r = &row.record;
        writeln!(
            f,
            "  {:<8} {:>6.2} {:>8} {:>6} {:<15} {:<5} {}",
            r.customer_id,
            r.churn_probability,
            opt(r.monthly_charges),
            opt(r.tenure),
            r.contract_type.map(|c| c.label()).unwrap_or("-"),
            if row.will_churn { "yes" } else { "no" },
            row.churn_reason,
        )?;
    }
    writeln!(f)
}

fn write_scatter(f: &mut fmt::Formatter<'_>, points: &[ScatterPoint]) -> fmt::Result {
    writeln!(f, "#### Monthly Charges vs Churn Probability")?;
    let (Some(min), Some(max)) = (
        points.iter().map(|p| p.monthly_charges).min(),
        points.iter().map(|p| p.monthly_charges).max(),
    ) else {
        return writeln!(f, "  (no data)\n");
    };
    let span = (max - min).max(1) as f64;

    let mut grid = vec![vec![' '; SCATTER_COLS]; SCATTER_ROWS];
    for p in points {
        let col = ((p.monthly_charges - min) as f64 / span * (SCATTER_COLS - 1) as f64).round() as usize;
        let row = ((1.0 - p.churn_probability) * (SCATTER_ROWS - 1) as f64).round() as usize;
        grid[row.min(SCATTER_ROWS - 1)][col.min(SCATTER_COLS - 1)] = '*';
    }
    for (i, line) in grid.iter().enumerate() {
        let axis = 1.0 - i as f64 / (SCATTER_ROWS - 1) as f64;
        writeln!(f, "  {axis:>4.1} |{}", line.iter().collect::<String>())?;
    }
    writeln!(f, "       +{}", "-".repeat(SCATTER_COLS))?;
    writeln!(f, "        {min:<w$}{max}", w = SCATTER_COLS - max.to_string().len())?;
    writeln!(f)
}

fn opt(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
