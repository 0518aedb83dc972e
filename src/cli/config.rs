//! Config file commands

use clap::ValueEnum;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Settings that can be changed with `jobboard config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// API base URL
    ApiUrl,
    /// Default output format
    Format,
    /// Request timeout in seconds
    Timeout,
}

/// Run the config show command
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let path = Config::resolve_path(opts.config_ref())?;

    println!("# {}", path.display().to_string().dimmed());
    println!("api-url: {}", config.api_url(None));
    println!(
        "format: {}",
        config.preferences.format.as_deref().unwrap_or("pretty")
    );
    println!("timeout: {}", config.preferences.timeout_secs);
    Ok(())
}

/// Run the config set command
pub fn set(opts: &GlobalOptions, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    apply(&mut config, key, Some(value))?;
    config.save_at(opts.config_ref())?;
    println!("{} Saved", "✓".green());
    Ok(())
}

/// Run the config unset command
pub fn unset(opts: &GlobalOptions, key: ConfigKey) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    apply(&mut config, key, None)?;
    config.save_at(opts.config_ref())?;
    println!("{} Saved", "✓".green());
    Ok(())
}

/// Set `key` to `value`, or back to its default when `value` is `None`
fn apply(config: &mut Config, key: ConfigKey, value: Option<&str>) -> Result<()> {
    match key {
        ConfigKey::ApiUrl => {
            config.api_url = match value {
                Some(url) => {
                    let url = url.trim().trim_end_matches('/');
                    if !(url.starts_with("http://") || url.starts_with("https://")) {
                        return Err(ConfigError::Invalid(format!(
                            "api-url must start with http:// or https:// (got '{}')",
                            url
                        ))
                        .into());
                    }
                    Some(url.to_string())
                }
                None => None,
            };
        }
        ConfigKey::Format => {
            config.preferences.format = match value {
                Some(format) => {
                    OutputFormat::from_config(format).ok_or_else(|| {
                        ConfigError::Invalid(format!(
                            "format must be pretty, table or json (got '{}')",
                            format
                        ))
                    })?;
                    Some(format.trim().to_lowercase())
                }
                None => None,
            };
        }
        ConfigKey::Timeout => {
            config.preferences.timeout_secs = match value {
                Some(secs) => match secs.trim().parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => {
                        return Err(ConfigError::Invalid(format!(
                            "timeout must be a positive number of seconds (got '{}')",
                            secs
                        ))
                        .into());
                    }
                },
                None => Config::default().preferences.timeout_secs,
            };
        }
    }
    Ok(())
}
