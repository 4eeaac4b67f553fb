//! CLI command implementations for Asciigol.

pub(crate) mod generate;
pub(crate) mod run;
pub(crate) mod validate;

mod output;
mod terminal;

use asciigol::{Background, ConfigError, ResultCode, RunError};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Background color mode for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BackgroundArg {
    /// Terminal default colors.
    None,
    /// Black on white.
    Light,
    /// White on black.
    Dark,
}

impl From<BackgroundArg> for Background {
    fn from(arg: BackgroundArg) -> Self {
        match arg {
            BackgroundArg::None => Self::None,
            BackgroundArg::Light => Self::Light,
            BackgroundArg::Dark => Self::Dark,
        }
    }
}

/// Initial cell state for the `gen` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CellArg {
    /// Every cell starts dead.
    #[value(name = "0")]
    Dead,
    /// Every cell starts alive.
    #[value(name = "1")]
    Alive,
}

impl CellArg {
    pub(crate) const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

/// Output format for the `validate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
    code: Option<ResultCode>,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self {
            code: Some(ResultCode::from(&e)),
            message: e.to_string(),
        }
    }
}

impl From<RunError> for CliError {
    fn from(e: RunError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
        }
    }
}
