//! jobboard - terminal client for the Job Board API

use clap::{CommandFactory, Parser};

mod board;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use board::Route;
use cli::args::GlobalOptions;
use cli::{Cli, Commands, ConfigCommands, DashboardCommands, JobsCommands};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if err.route() == Some(Route::Login) {
            cli::handlers::login_hint();
        }
        let code = if matches!(err, Error::Cancelled) { 130 } else { 1 };
        std::process::exit(code);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("jobboard", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Jobs(jobs_cmd) => match jobs_cmd {
            JobsCommands::List { search } => cli::jobs::list(&opts, search.as_deref()).await,
            JobsCommands::Apply { job_id } => cli::jobs::apply(&opts, &job_id).await,
            JobsCommands::Applied => cli::jobs::applied(&opts).await,
            JobsCommands::Post(args) => cli::jobs::post(&opts, args).await,
        },
        Commands::Dashboard(dashboard_cmd) => match dashboard_cmd {
            DashboardCommands::List => cli::dashboard::list(&opts).await,
            DashboardCommands::Show { job_id } => cli::dashboard::show(&opts, &job_id).await,
            DashboardCommands::Delete { job_id, yes } => {
                cli::dashboard::delete(&opts, &job_id, yes).await
            }
        },
        Commands::Login { email } => cli::auth::login(&opts, email).await,
        Commands::Register { name, email, role } => {
            cli::auth::register(&opts, name, email, role).await
        }
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::Set { key, value } => cli::config::set(&opts, key, &value),
            ConfigCommands::Unset { key } => cli::config::unset(&opts, key),
        },
        Commands::Version => {
            println!("jobboard version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "jobboard", &mut std::io::stdout());
            Ok(())
        }
    }
}
