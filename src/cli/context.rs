//! Command execution context
//!
//! Loads the config once, resolves the base URL and output format, and builds
//! the API client and session store every command works with.

use std::time::Duration;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::JobBoardClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::FileSessionStore;

/// Context for command execution: client, session and output format.
pub struct CommandContext {
    /// API client bound to the resolved base URL
    pub client: JobBoardClient,
    /// Persistent session
    pub session: FileSessionStore,
    /// Output format after applying the config file preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed, or the
    /// home directory cannot be resolved.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = resolve_format(opts.format, &config);
        let base_url = config.api_url(opts.api_url_ref());
        let timeout = Duration::from_secs(config.preferences.timeout_secs);

        debug!("Using API at {} (timeout {:?})", base_url, timeout);
        let client = JobBoardClient::new(base_url, timeout)?;
        let session = FileSessionStore::at(opts.session_ref())?;

        Ok(Self {
            client,
            session,
            format,
        })
    }
}

/// Flag/env format, else the config preference, else pretty.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_config)
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    fn config_with_format(format: Option<&str>) -> Config {
        Config {
            api_url: None,
            preferences: Preferences {
                format: format.map(str::to_string),
                ..Preferences::default()
            },
        }
    }

    #[test]
    fn test_flag_beats_config_format() {
        let config = config_with_format(Some("table"));
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Table);
    }

    #[test]
    fn test_unknown_config_format_falls_back() {
        let config = config_with_format(Some("xml"));
        assert_eq!(resolve_format(None, &config), OutputFormat::Pretty);
        assert_eq!(
            resolve_format(None, &config_with_format(None)),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_context_uses_override_url_and_session_path() {
        let temp = tempfile::tempdir().unwrap();
        let session_path = temp.path().join("session.yaml");
        let opts = GlobalOptions {
            format: None,
            api_url: Some("http://127.0.0.1:9999/".to_string()),
            config: Some(temp.path().join("missing.yaml").display().to_string()),
            session: Some(session_path.display().to_string()),
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(ctx.session.path(), session_path.as_path());
        assert_eq!(ctx.format, OutputFormat::Pretty);
    }
}
