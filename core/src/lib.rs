//! Telecom churn demo dashboard: a session router over four pages and
//! seeded synthetic customer tables with threshold-based churn reasons.

pub mod analytics;
pub mod auth;
pub mod command;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod reasons;
pub mod rng;
pub mod router;
pub mod sample_data;
pub mod session;
pub mod types;
pub mod view;
