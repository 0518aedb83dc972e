//! Status command implementation

use colored::Colorize;

use crate::board::Notice;
use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::Result;
use crate::output::format_notice;
use crate::session::{FileSessionStore, SessionStore};

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Job Board Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let source = if opts.api_url_ref().is_some() {
                "(--api-url / JOBBOARD_API_URL)"
            } else if config.api_url.is_some() {
                "(config file)"
            } else {
                "(default)"
            };
            println!(
                "API URL: {} {}",
                config.api_url(opts.api_url_ref()),
                source.dimmed()
            );
            println!("Request timeout: {}s", config.preferences.timeout_secs);
        }
        Err(err) => {
            println!("{}", format_notice(&Notice::error(err.to_string())));
            println!("API URL: {} {}", DEFAULT_API_URL, "(default)".dimmed());
        }
    }

    println!();

    let store = FileSessionStore::at(opts.session_ref())?;
    println!("Session file: {}", store.path().display().to_string().cyan());
    match store.get() {
        Ok(Some(session)) => {
            println!(
                "{} Signed in as {} <{}> ({})",
                "✓".green(),
                session.user.name.bold(),
                session.user.email,
                session.user.role
            );
        }
        Ok(None) => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run {} to sign in", "jobboard login".cyan());
        }
        Err(err) => println!("{}", format_notice(&Notice::error(err.to_string()))),
    }

    println!();
    Ok(())
}
