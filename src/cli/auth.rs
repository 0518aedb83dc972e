//! Login, register and logout commands

use crate::board::{LoginForm, Notice, RegisterForm, logout as clear_session};
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{follow, interruptible};
use crate::cli::{CommandContext, prompt};
use crate::client::models::Role;
use crate::error::{Error, Result};
use crate::output::print_notice;
use crate::output::progress::Spinner;
use crate::session::FileSessionStore;

/// Run the login command
pub async fn login(opts: &GlobalOptions, email: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut form = LoginForm::new(email.unwrap_or_default(), String::new());
    prompt::fill(&mut form.email, "Email")?;
    form.password = prompt::password(false)?;

    let outcome = loop {
        let result = {
            let _spinner = Spinner::start(ctx.format, "Signing in...");
            interruptible(form.submit(&ctx.client, &ctx.session), || {
                if form.is_submitting() {
                    form.cancel();
                }
            })
            .await
        };

        match result {
            Err(Error::Validation(_)) if prompt::password_is_prompted() => {
                if let Some(message) = form.error() {
                    print_notice(&Notice::warning(message));
                }
                prompt::edit(&mut form.email, "Email")?;
                form.password = prompt::password(false)?;
            }
            other => break other?,
        }
    };

    follow(&ctx, outcome).await
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut form = RegisterForm::new(
        name.unwrap_or_default(),
        email.unwrap_or_default(),
        String::new(),
        Role::default(),
    );
    prompt::fill(&mut form.name, "Name")?;
    prompt::fill(&mut form.email, "Email")?;
    form.role = prompt::role(role)?;
    form.password = prompt::password(true)?;

    let outcome = loop {
        let result = {
            let _spinner = Spinner::start(ctx.format, "Creating account...");
            interruptible(form.submit(&ctx.client), || {
                if form.is_submitting() {
                    form.cancel();
                }
            })
            .await
        };

        match result {
            Err(Error::Validation(_)) if prompt::password_is_prompted() => {
                if let Some(message) = form.error() {
                    print_notice(&Notice::warning(message));
                }
                prompt::edit(&mut form.name, "Name")?;
                prompt::edit(&mut form.email, "Email")?;
                form.password = prompt::password(true)?;
            }
            other => break other?,
        }
    };

    follow(&ctx, outcome).await
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let store = FileSessionStore::at(opts.session_ref())?;
    let outcome = clear_session(&store)?;
    print_notice(&outcome.notice);
    Ok(())
}
