//! Interactive prompts for form fields
//!
//! Prompts only run when both stdin and stderr are terminals. Otherwise the
//! field is left as given so validation reports what is missing.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::client::models::{JobType, Role};
use crate::error::Result;

/// Environment variable read before prompting for a password
pub const PASSWORD_ENV: &str = "JOBBOARD_PASSWORD";

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Prompt for `field` when it is blank and a terminal is attached
pub fn fill(field: &mut String, prompt: &str) -> Result<()> {
    if !field.trim().is_empty() || !is_interactive() {
        return Ok(());
    }

    *field = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Prompt for `field` again, starting from its current value
pub fn edit(field: &mut String, prompt: &str) -> Result<()> {
    *field = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(field.clone())
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Whether the password comes from a prompt rather than `JOBBOARD_PASSWORD`
pub fn password_is_prompted() -> bool {
    is_interactive() && std::env::var(PASSWORD_ENV).is_err()
}

/// Password from `JOBBOARD_PASSWORD`, else a hidden prompt.
///
/// Returns an empty string when neither is available.
pub fn password(confirm: bool) -> Result<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    if !is_interactive() {
        return Ok(String::new());
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Pick a job type; defaults to Full-time without a terminal
pub fn job_type(current: Option<JobType>) -> Result<JobType> {
    if let Some(job_type) = current {
        return Ok(job_type);
    }
    if !is_interactive() {
        return Ok(JobType::FullTime);
    }

    let labels: Vec<&str> = JobType::SELECTABLE.iter().map(JobType::as_str).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Job type")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(JobType::SELECTABLE[index])
}

/// Pick an account role; defaults to jobseeker without a terminal
pub fn role(current: Option<Role>) -> Result<Role> {
    if let Some(role) = current {
        return Ok(role);
    }
    if !is_interactive() {
        return Ok(Role::default());
    }

    let roles = [Role::Jobseeker, Role::Employer];
    let labels = ["Job seeker", "Employer"];
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("I am a")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(roles[index])
}

/// Yes/no question, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
