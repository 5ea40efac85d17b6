//! Session router — the page state machine.
//!
//!   login → company_select → current_month ⇄ future_churn
//!
//! RULES:
//!   - `transition` is pure: it reads the current session and returns the
//!     next one. Nothing else mutates a Session during a command.
//!   - While logged out, every command except login/sign-up lands on login.
//!   - A data page with no selected company is never a resting state:
//!     the guard sends it back to company_select after every transition.
//!   - Logout clears the user and the selected company.

use crate::{
    auth::CredentialStore,
    command::UserCommand,
    config::DashboardConfig,
    error::{DashResult, DashboardError},
    event::{Notice, SessionEvent},
    session::Session,
    types::Page,
};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const SIGN_UP_INFO: &str = "For project demo, signup will just show a message.";
pub const LOGGED_OUT: &str = "You have been logged out.";

/// The outcome of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub events:  Vec<SessionEvent>,
    pub notice:  Option<Notice>,
}

/// Apply `command` to `session` and return the next state.
pub fn transition(
    session: &Session,
    command: &UserCommand,
    credentials: &CredentialStore,
    config: &DashboardConfig,
) -> Transition {
    let mut next = session.clone();
    let mut notice = None;

    let mut events = match apply(&mut next, command, credentials, config, &mut notice) {
        Ok(events) => events,
        Err(err) => {
            // Rejections leave the session exactly as it was.
            next = session.clone();
            if !next.logged_in {
                next.page = Page::Login;
            }
            let event = rejection_event(command, &err);
            notice = Some(Notice::error(err.to_string()));
            vec![event]
        }
    };

    if let Some(redirect) = guard(&mut next) {
        if notice.is_none() {
            notice = Some(Notice::warning(DashboardError::NoCompanySelected.to_string()));
        }
        events.push(redirect);
    }

    if next.page != session.page {
        events.push(SessionEvent::PageChanged { from: session.page, to: next.page });
    }

    Transition { session: next, events, notice }
}

/// Redirect a data page with no selected company to company_select.
/// Returns the redirect event when it fired.
pub fn guard(session: &mut Session) -> Option<SessionEvent> {
    if !session.needs_company() {
        return None;
    }
    let requested = session.page;
    session.page = Page::CompanySelect;
    Some(SessionEvent::GuardRedirect { requested })
}

fn apply(
    next: &mut Session,
    command: &UserCommand,
    credentials: &CredentialStore,
    config: &DashboardConfig,
    notice: &mut Option<Notice>,
) -> DashResult<Vec<SessionEvent>> {
    if !next.logged_in {
        return apply_logged_out(next, command, credentials, notice);
    }

    let mut events = Vec::new();
    match command {
        UserCommand::Logout => {
            let email = next.user_email.clone();
            next.clear_user();
            *notice = Some(Notice::info(LOGGED_OUT));
            events.push(SessionEvent::LoggedOut { email });
        }
        UserCommand::SelectCompany { company } => {
            if !config.has_company(company) {
                return Err(DashboardError::UnknownCompany { name: company.clone() });
            }
            next.selected_company = Some(company.clone());
            events.push(SessionEvent::CompanySelected { company: company.clone() });
        }
        UserCommand::Advance => match next.page {
            Page::CompanySelect => next.page = Page::CurrentMonth,
            Page::CurrentMonth  => next.page = Page::FutureChurn,
            _ => events.push(ignored(command, next.page)),
        },
        UserCommand::Back => match next.page {
            Page::CurrentMonth => next.page = Page::CompanySelect,
            Page::FutureChurn  => next.page = Page::CurrentMonth,
            _ => events.push(ignored(command, next.page)),
        },
        UserCommand::Home => match next.page {
            Page::CurrentMonth | Page::FutureChurn => next.page = Page::CompanySelect,
            _ => events.push(ignored(command, next.page)),
        },
        // Leaving through the login page goes through Logout instead.
        UserCommand::Goto { page: Page::Login } => events.push(ignored(command, next.page)),
        UserCommand::Goto { page } => next.page = *page,
        UserCommand::Login { .. } | UserCommand::SignUp => {
            events.push(ignored(command, next.page));
        }
        UserCommand::Refresh => {}
    }
    Ok(events)
}

fn apply_logged_out(
    next: &mut Session,
    command: &UserCommand,
    credentials: &CredentialStore,
    notice: &mut Option<Notice>,
) -> DashResult<Vec<SessionEvent>> {
    // A logged-out session only ever shows the login page.
    next.page = Page::Login;

    match command {
        UserCommand::Login { email, password } => {
            if !credentials.authenticate(email, password) {
                return Err(DashboardError::InvalidCredentials);
            }
            next.logged_in = true;
            next.user_email = Some(email.clone());
            next.page = Page::CompanySelect;
            *notice = Some(Notice::success(LOGIN_SUCCESS));
            Ok(vec![SessionEvent::LoggedIn { email: email.clone() }])
        }
        UserCommand::SignUp => {
            *notice = Some(Notice::info(SIGN_UP_INFO));
            Ok(Vec::new())
        }
        UserCommand::Refresh => Ok(Vec::new()),
        _ => Ok(vec![ignored(command, Page::Login)]),
    }
}

fn ignored(command: &UserCommand, page: Page) -> SessionEvent {
    SessionEvent::CommandIgnored { command: command.kind().to_string(), page }
}

fn rejection_event(command: &UserCommand, err: &DashboardError) -> SessionEvent {
    match (command, err) {
        (UserCommand::Login { email, .. }, DashboardError::InvalidCredentials) => {
            SessionEvent::LoginRejected { email: email.clone() }
        }
        _ => SessionEvent::CommandRejected {
            command: command.kind().to_string(),
            reason: err.to_string(),
        },
    }
}
