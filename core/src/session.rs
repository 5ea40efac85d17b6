//! Per-session state. One value per connected front end; the router
//! takes it by reference and hands back the next value.

use crate::types::{CompanyName, Page, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub session_id:       SessionId,
    pub started_at:       DateTime<Utc>,
    pub logged_in:        bool,
    pub user_email:       Option<String>,
    pub page:             Page,
    pub selected_company: Option<CompanyName>,
}

impl Session {
    /// A fresh, logged-out session parked on the login page.
    pub fn new() -> Self {
        Self {
            session_id:       uuid::Uuid::new_v4().to_string(),
            started_at:       Utc::now(),
            logged_in:        false,
            user_email:       None,
            page:             Page::Login,
            selected_company: None,
        }
    }

    /// Drop everything tied to the signed-in user.
    /// `selected_company` goes too, so the next user starts clean.
    pub fn clear_user(&mut self) {
        self.logged_in = false;
        self.user_email = None;
        self.selected_company = None;
        self.page = Page::Login;
    }

    /// True when the session sits on a data page with nothing selected.
    pub fn needs_company(&self) -> bool {
        self.page.is_data_page() && self.selected_company.is_none()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
