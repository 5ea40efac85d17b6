//! The dashboard driver — one session, its config, and the render loop.
//!
//! CYCLE (every command, no exceptions):
//!   1. Router computes the next session (pure).
//!   2. Events are logged.
//!   3. The whole page is rendered again from the new session.

use crate::{
    auth::CredentialStore,
    command::UserCommand,
    config::DashboardConfig,
    error::DashResult,
    event::{Notice, SessionEvent},
    router,
    session::Session,
    view::{self, View},
};
use chrono::NaiveDate;

pub struct Dashboard {
    pub config:  DashboardConfig,
    seed:        u64,
    credentials: CredentialStore,
    session:     Session,
    /// Fixed date for month labels; `None` reads the local clock.
    today:       Option<NaiveDate>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `credentials` is deliberately omitted.
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("session", &self.session)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Validate `config` and start a fresh logged-out session.
    pub fn new(config: DashboardConfig, seed: u64) -> DashResult<Self> {
        config.validate()?;
        let session = Session::new();
        log::info!("session {} started (seed={seed})", session.session_id);
        Ok(Self {
            seed,
            credentials: CredentialStore::demo(),
            session,
            today: None,
            config,
        })
    }

    /// Dashboard wired with the small test config and a pinned date.
    pub fn build_test(seed: u64) -> DashResult<Self> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap_or_default();
        Ok(Self::new(DashboardConfig::default_test(), seed)?.with_today(today))
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply one command and return the freshly rendered page.
    pub fn handle(&mut self, command: &UserCommand) -> DashResult<View> {
        let transition = router::transition(&self.session, command, &self.credentials, &self.config);
        for event in &transition.events {
            log::trace!("{} on session {}", event.type_name(), self.session.session_id);
            log_event(event);
        }
        self.session = transition.session;
        self.render_with(transition.notice)
    }

    /// Render the current page with no notice.
    pub fn current_view(&self) -> DashResult<View> {
        self.render_with(None)
    }

    /// JSON-lines entry point: one `UserCommand` in, one `View` out.
    pub fn handle_json(&mut self, line: &str) -> DashResult<String> {
        let command: UserCommand = serde_json::from_str(line)?;
        let view = self.handle(&command)?;
        Ok(serde_json::to_string(&view)?)
    }

    fn render_with(&self, notice: Option<Notice>) -> DashResult<View> {
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        view::render(&self.session, &self.config, self.seed(), notice, today)
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::LoggedIn { email } => log::info!("login: {email}"),
        SessionEvent::LoggedOut { email } => {
            log::info!("logout: {}", email.as_deref().unwrap_or("<unknown>"));
        }
        SessionEvent::CompanySelected { company } => log::info!("company selected: {company}"),
        SessionEvent::PageChanged { from, to } => log::debug!("page: {from} -> {to}"),
        SessionEvent::LoginRejected { email } => log::warn!("login rejected for {email}"),
        SessionEvent::GuardRedirect { requested } => {
            log::warn!("guard: {requested} needs a company, redirected to company_select");
        }
        SessionEvent::CommandIgnored { command, page } => {
            log::debug!("ignored {command} on {page}");
        }
        SessionEvent::CommandRejected { command, reason } => {
            log::warn!("{command} rejected: {reason}");
        }
    }
}
