//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single `&GlobalOptions`
//! instead of threading each flag through.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// Flag > environment variable > config file > default. This struct holds the
/// flag/env layer; config file values are merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, if given on the command line or environment
    pub format: Option<OutputFormat>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.jobboard/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.jobboard/session.yaml)
    pub session: Option<String>,
}

impl GlobalOptions {
    /// Build from the parsed command line. Called once in `main`.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
            session: cli.session.clone(),
        }
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }
}
