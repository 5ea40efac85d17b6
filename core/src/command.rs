use crate::{
    error::{DashResult, DashboardError},
    types::{CompanyName, Page},
};
use serde::{Deserialize, Serialize};

/// All user-issued commands.
/// Every front end (terminal, JSON lines) funnels into these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UserCommand {
    // ── Login page ────────────────────────────────
    Login { email: String, password: String },
    SignUp,

    // ── Navigation ────────────────────────────────
    SelectCompany { company: CompanyName },
    Advance,
    Back,
    Home,
    Goto { page: Page },
    Logout,

    /// Re-render the current page without changing state.
    Refresh,
}

impl UserCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Login { .. }         => "login",
            Self::SignUp               => "sign_up",
            Self::SelectCompany { .. } => "select_company",
            Self::Advance              => "advance",
            Self::Back                 => "back",
            Self::Home                 => "home",
            Self::Goto { .. }          => "goto",
            Self::Logout               => "logout",
            Self::Refresh              => "refresh",
        }
    }
}

/// One line typed into the terminal front end.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalInput {
    Command(UserCommand),
    Help,
    Quit,
    Blank,
}

impl TerminalInput {
    /// Parse `login <email> <password>`, `company <name>`, `goto <page>`,
    /// and the bare words `signup`, `next`, `back`, `home`, `logout`,
    /// `show`, `help`, `quit`.
    pub fn parse(line: &str) -> DashResult<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Blank);
        };

        let cmd = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" => return Ok(Self::Quit),
            "login" => {
                let email = words.next().ok_or(DashboardError::MissingArgument {
                    command: "login",
                    expected: "<email> <password>",
                })?;
                // A missing password submits as "" and fails authentication.
                let password = words.next().unwrap_or_default();
                UserCommand::Login { email: email.into(), password: password.into() }
            }
            "signup" => UserCommand::SignUp,
            "company" => {
                let rest: Vec<&str> = words.by_ref().collect();
                if rest.is_empty() {
                    return Err(DashboardError::MissingArgument {
                        command: "company",
                        expected: "<name>",
                    });
                }
                UserCommand::SelectCompany { company: rest.join(" ") }
            }
            "next" => UserCommand::Advance,
            "back" => UserCommand::Back,
            "home" => UserCommand::Home,
            "logout" => UserCommand::Logout,
            "show" => UserCommand::Refresh,
            "goto" => {
                let name = words.next().ok_or(DashboardError::MissingArgument {
                    command: "goto",
                    expected: "<login|company_select|current_month|future_churn>",
                })?;
                let page = Page::from_name(name)
                    .ok_or_else(|| DashboardError::UnknownPage { name: name.into() })?;
                UserCommand::Goto { page }
            }
            _ => return Err(DashboardError::UnknownCommand { input: head.into() }),
        };
        if words.next().is_some() {
            let (command, expected) = usage(&cmd);
            return Err(DashboardError::TooManyArguments { command, expected });
        }
        Ok(Self::Command(cmd))
    }
}

/// Terminal word and argument list for a command, as shown in errors.
fn usage(cmd: &UserCommand) -> (&'static str, &'static str) {
    match cmd {
        UserCommand::Login { .. }         => ("login", "<email> <password>"),
        UserCommand::SignUp               => ("signup", "no arguments"),
        UserCommand::SelectCompany { .. } => ("company", "<name>"),
        UserCommand::Advance              => ("next", "no arguments"),
        UserCommand::Back                 => ("back", "no arguments"),
        UserCommand::Home                 => ("home", "no arguments"),
        UserCommand::Goto { .. }          => ("goto", "<page>"),
        UserCommand::Logout               => ("logout", "no arguments"),
        UserCommand::Refresh              => ("show", "no arguments"),
    }
}

pub const TERMINAL_HELP: &str = "\
commands:
  login <email> <password>   sign in with a demo account
  signup                     demo sign-up (shows a message only)
  company <name>             choose a telecom company
  next                       advance to the next page
  back                       go back one page
  home                       return to company selection
  goto <page>                jump to login|company_select|current_month|future_churn
  logout                     sign out
  show                       re-render the current page
  help                       this list
  quit                       leave the dashboard";
