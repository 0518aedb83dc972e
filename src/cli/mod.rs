//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::{JobType, Role};

pub mod args;
pub mod auth;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod handlers;
pub mod jobs;
pub mod prompt;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// jobboard - browse, post and apply to jobs from the terminal
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "JOBBOARD_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Job Board API base URL
    #[arg(long = "api-url", global = true, env = "JOBBOARD_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "JOBBOARD_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "JOBBOARD_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBBOARD_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse, apply to and post jobs
    #[command(subcommand)]
    Jobs(JobsCommands),

    /// Manage the jobs you posted
    #[command(subcommand)]
    Dashboard(DashboardCommands),

    /// Sign in
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,
    },

    /// Create an account
    Register {
        /// Display name (prompted if omitted)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account role (prompted if omitted)
        #[arg(long, short = 'r', ignore_case = true)]
        role: Option<Role>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// View or change the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   jobboard completion bash > /etc/bash_completion.d/jobboard
  zsh:    jobboard completion zsh > \"${fpath[1]}/_jobboard\"
  fish:   jobboard completion fish > ~/.config/fish/completions/jobboard.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Job listing subcommands
#[derive(Subcommand, Debug)]
pub enum JobsCommands {
    /// List every posting (marks the ones you applied to when signed in)
    #[command(visible_alias = "ls")]
    List {
        /// Only show postings whose title contains this text (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Apply to a posting
    Apply {
        /// Posting ID
        job_id: String,
    },

    /// List the postings you applied to
    Applied,

    /// Post a new job (prompts for missing fields in a terminal)
    #[command(after_help = "EXAMPLES:\n  \
        jobboard jobs post\n  \
        jobboard jobs post --title Engineer --company Acme --location Remote \\\n      \
        --salary 90000 --job-type full-time")]
    Post(PostArgs),
}

/// Fields of the post-a-job form
#[derive(Args, Debug, Default, Clone)]
pub struct PostArgs {
    /// Job title
    #[arg(long)]
    pub title: Option<String>,

    /// Hiring company
    #[arg(long)]
    pub company: Option<String>,

    /// Job location
    #[arg(long)]
    pub location: Option<String>,

    /// Annual salary (non-negative whole number)
    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<String>,

    /// Employment type (prompted if omitted)
    #[arg(long = "job-type", short = 't', ignore_case = true)]
    pub job_type: Option<JobType>,
}

/// Dashboard subcommands
#[derive(Subcommand, Debug)]
pub enum DashboardCommands {
    /// List the postings you own
    #[command(visible_alias = "ls")]
    List,

    /// Show one of your postings in detail
    Show {
        /// Posting ID
        job_id: String,
    },

    /// Delete one of your postings
    #[command(visible_alias = "rm")]
    Delete {
        /// Posting ID
        job_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a config value (api-url, format, timeout)
    Set {
        /// Setting name
        key: config::ConfigKey,

        /// New value
        value: String,
    },

    /// Remove a config value, restoring its default
    Unset {
        /// Setting name
        key: config::ConfigKey,
    },
}
