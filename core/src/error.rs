use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please select a company first")]
    NoCompanySelected,

    #[error("Unknown company '{name}'")]
    UnknownCompany { name: String },

    #[error("Unknown page '{name}'")]
    UnknownPage { name: String },

    #[error("Unknown command '{input}' (type 'help' for the list)")]
    UnknownCommand { input: String },

    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument { command: &'static str, expected: &'static str },

    #[error("Too many arguments for '{command}': expected {expected}")]
    TooManyArguments { command: &'static str, expected: &'static str },

    #[error("Invalid probability profile: {reason}")]
    InvalidProfile { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashResult<T> = Result<T, DashboardError>;
