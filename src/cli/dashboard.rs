//! Dashboard commands

use crate::board::{DashboardView, Notice};
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, prompt};
use crate::error::{Error, Result};
use crate::models::{JobDetail, JobListing};
use crate::output::progress::Spinner;
use crate::output::{Formattable, print_notice};

const NO_POSTINGS: &str = "You have not posted any jobs yet.";

async fn load(ctx: &CommandContext) -> Result<DashboardView> {
    let _spinner = Spinner::start(ctx.format, "Loading your jobs...");
    DashboardView::load(&ctx.client, &ctx.session).await
}

/// Run the dashboard list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    render(&ctx).await
}

/// Load and print the signed-in user's postings
pub async fn render(ctx: &CommandContext) -> Result<()> {
    let view = load(ctx).await?;
    JobListing::new(view.jobs())
        .empty_message(NO_POSTINGS)
        .print(ctx.format)
}

/// Run the dashboard show command
pub async fn show(opts: &GlobalOptions, job_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = load(&ctx).await?;

    let job = view.open(job_id)?;
    JobDetail { job }.print(ctx.format)?;
    if view.modal().is_visible() {
        view.close();
    }

    Ok(())
}

/// Run the dashboard delete command
pub async fn delete(opts: &GlobalOptions, job_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        if !prompt::is_interactive() {
            return Err(Error::Other(
                "Refusing to delete without confirmation; pass --yes".to_string(),
            ));
        }
        if !prompt::confirm(&format!("Delete job {}?", job_id))? {
            print_notice(&Notice::warning("Delete aborted"));
            return Ok(());
        }
    }

    let mut view = load(&ctx).await?;
    let outcome = {
        let _spinner = Spinner::start(ctx.format, "Deleting...");
        view.delete(&ctx.client, &ctx.session, job_id).await?
    };
    print_notice(&outcome.notice);

    JobListing::new(view.jobs())
        .empty_message(NO_POSTINGS)
        .print(ctx.format)
}
