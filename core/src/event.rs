//! Session events and user-facing notices.
//!
//! RULE: The router reports every state change as an event.
//! The dashboard logs them; views never read them.

use crate::types::{CompanyName, Page};
use serde::{Deserialize, Serialize};

/// Every event a transition can produce.
/// Variants are appended — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    LoggedIn {
        email: String,
    },
    LoginRejected {
        email: String,
    },
    LoggedOut {
        email: Option<String>,
    },
    CompanySelected {
        company: CompanyName,
    },
    PageChanged {
        from: Page,
        to: Page,
    },
    /// A data page was requested with no company selected.
    GuardRedirect {
        requested: Page,
    },
    CommandIgnored {
        command: String,
        page: Page,
    },
    CommandRejected {
        command: String,
        reason: String,
    },
}

impl SessionEvent {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. }        => "logged_in",
            Self::LoginRejected { .. }   => "login_rejected",
            Self::LoggedOut { .. }       => "logged_out",
            Self::CompanySelected { .. } => "company_selected",
            Self::PageChanged { .. }     => "page_changed",
            Self::GuardRedirect { .. }   => "guard_redirect",
            Self::CommandIgnored { .. }  => "command_ignored",
            Self::CommandRejected { .. } => "command_rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// An inline message shown above the page body for one render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}
