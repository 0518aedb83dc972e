//! Job listing commands

use log::debug;

use crate::board::guard::require_session;
use crate::board::listing::{APPLY_LOGIN_MESSAGE, applied_jobs};
use crate::board::{JobForm, ListingView, Notice};
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{follow, interruptible};
use crate::cli::{CommandContext, PostArgs, prompt};
use crate::error::{Error, Result};
use crate::models::JobListing;
use crate::output::progress::Spinner;
use crate::output::{Formattable, print_notice};

/// Run the jobs list command
pub async fn list(opts: &GlobalOptions, search: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    render(&ctx, search).await
}

/// Load the listing and print it, narrowed by `search` when given
pub async fn render(ctx: &CommandContext, search: Option<&str>) -> Result<()> {
    let view = {
        let _spinner = Spinner::start(ctx.format, "Loading jobs...");
        ListingView::load(&ctx.client, &ctx.session).await?
    };

    let (jobs, empty) = match search {
        Some(query) => {
            debug!("Filtering {} jobs by '{}'", view.jobs().len(), query);
            (view.filter(query), "No jobs match your search.")
        }
        None => (view.jobs().iter().collect(), "No jobs found."),
    };

    let mut listing = JobListing::new(jobs).empty_message(empty);
    if view.is_signed_in() {
        listing = listing.with_applied(view.applied());
    }
    listing.print(ctx.format)
}

/// Run the jobs apply command
pub async fn apply(opts: &GlobalOptions, job_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    require_session(&ctx.session, APPLY_LOGIN_MESSAGE)?;

    let mut view = {
        let _spinner = Spinner::start(ctx.format, "Loading jobs...");
        ListingView::load(&ctx.client, &ctx.session).await?
    };

    let outcome = {
        let _spinner = Spinner::start(ctx.format, "Applying...");
        view.apply(&ctx.client, &ctx.session, job_id).await?
    };
    print_notice(&outcome.notice);
    Ok(())
}

/// Run the jobs applied command
pub async fn applied(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let jobs = {
        let _spinner = Spinner::start(ctx.format, "Loading applications...");
        applied_jobs(&ctx.client, &ctx.session).await?
    };

    JobListing::new(&jobs)
        .empty_message("You have not applied to any jobs yet.")
        .print(ctx.format)
}

/// Run the jobs post command
pub async fn post(opts: &GlobalOptions, args: PostArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut form = JobForm::new();
    form.title = args.title.unwrap_or_default();
    form.company = args.company.unwrap_or_default();
    form.location = args.location.unwrap_or_default();
    form.salary = args.salary.unwrap_or_default();

    prompt::fill(&mut form.title, "Job title")?;
    prompt::fill(&mut form.company, "Company")?;
    prompt::fill(&mut form.location, "Location")?;
    prompt::fill(&mut form.salary, "Salary")?;
    form.job_type = Some(prompt::job_type(args.job_type)?);

    let outcome = loop {
        let result = {
            let _spinner = Spinner::start(ctx.format, "Posting job...");
            interruptible(form.submit(&ctx.client, &ctx.session), || {
                if form.is_submitting() {
                    form.cancel();
                }
            })
            .await
        };

        match result {
            Err(Error::Validation(_)) if prompt::is_interactive() => {
                if let Some(message) = form.error() {
                    print_notice(&Notice::warning(message));
                }
                prompt::edit(&mut form.title, "Job title")?;
                prompt::edit(&mut form.company, "Company")?;
                prompt::edit(&mut form.location, "Location")?;
                prompt::edit(&mut form.salary, "Salary")?;
            }
            other => break other?,
        }
    };

    follow(&ctx, outcome).await
}
