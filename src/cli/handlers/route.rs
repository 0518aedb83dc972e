//! Following the route an action hands back

use colored::Colorize;
use log::debug;

use super::interrupt::until_interrupted;
use crate::board::{Outcome, Route};
use crate::cli::{CommandContext, dashboard};
use crate::error::Result;
use crate::output::print_notice;

/// Print the outcome's notice, then show the screen it points to.
pub async fn follow(ctx: &CommandContext, outcome: Outcome) -> Result<()> {
    print_notice(&outcome.notice);

    match outcome.route {
        Some(Route::Dashboard) => {
            debug!("Following route to dashboard");
            until_interrupted(dashboard::render(ctx)).await
        }
        Some(Route::Login) => {
            login_hint();
            Ok(())
        }
        None => Ok(()),
    }
}

/// Point the user at the login command
pub fn login_hint() {
    eprintln!("  → Run {} to sign in", "jobboard login".cyan());
}
