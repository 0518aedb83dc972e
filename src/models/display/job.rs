//! Job posting display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::board::AppliedSet;
use crate::cli::OutputFormat;
use crate::client::models::{EmployerRef, JobPosting};
use crate::error::Result;
use crate::output::formatters::{format_posted, format_salary, truncate};
use crate::output::table::{format_table, format_table_or};
use crate::output::{Formattable, json};

const TITLE_WIDTH: usize = 40;

/// Job posting row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "JOB ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Formatted salary (e.g., "$90,000")
    #[tabled(rename = "SALARY")]
    pub salary: String,

    #[tabled(rename = "TYPE")]
    pub job_type: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,

    /// Checkmark when the signed-in user has applied
    #[tabled(rename = "APPLIED")]
    pub applied: String,
}

impl From<&JobPosting> for JobDisplay {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id.clone(),
            title: truncate(&job.title, TITLE_WIDTH),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: format_salary(job.salary),
            job_type: job.job_type.to_string(),
            posted: format_posted(job.created_at.as_ref()),
            applied: String::new(),
        }
    }
}

impl JobDisplay {
    pub fn with_applied(mut self, applied: bool) -> Self {
        self.applied = if applied { "\u{2713}".to_string() } else { String::new() };
        self
    }
}

/// Posting plus its applied flag, as emitted in JSON
#[derive(Serialize)]
struct JobRecord<'a> {
    #[serde(flatten)]
    job: &'a JobPosting,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied: Option<bool>,
}

/// A list of postings, optionally with the applied markers of the session.
pub struct JobListing<'a> {
    jobs: Vec<&'a JobPosting>,
    applied: Option<&'a AppliedSet>,
    empty: &'static str,
}

impl<'a> JobListing<'a> {
    pub fn new(jobs: impl IntoIterator<Item = &'a JobPosting>) -> Self {
        Self {
            jobs: jobs.into_iter().collect(),
            applied: None,
            empty: "No jobs found.",
        }
    }

    /// Mark postings found in `applied`
    pub fn with_applied(mut self, applied: &'a AppliedSet) -> Self {
        self.applied = Some(applied);
        self
    }

    /// Message shown when there is nothing to list
    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty = message;
        self
    }

    fn is_applied(&self, job: &JobPosting) -> Option<bool> {
        self.applied.map(|set| set.contains(&job.id))
    }
}

impl Formattable for JobListing<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let records: Vec<JobRecord<'_>> = self
                    .jobs
                    .iter()
                    .copied()
                    .map(|job| JobRecord {
                        job,
                        applied: self.is_applied(job),
                    })
                    .collect();
                Ok(json::format_json(&records)?)
            }
            OutputFormat::Table => {
                let rows: Vec<JobDisplay> = self
                    .jobs
                    .iter()
                    .copied()
                    .map(|job| {
                        JobDisplay::from(job).with_applied(self.is_applied(job).unwrap_or(false))
                    })
                    .collect();
                Ok(format_table_or(&rows, self.empty))
            }
            OutputFormat::Pretty => {
                if self.jobs.is_empty() {
                    return Ok(self.empty.to_string());
                }
                let cards: Vec<String> = self
                    .jobs
                    .iter()
                    .copied()
                    .map(|job| format_card(job, self.is_applied(job), false))
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }
}

/// Single posting as shown in the dashboard detail view
pub struct JobDetail<'a> {
    pub job: &'a JobPosting,
}

impl Formattable for JobDetail<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self.job)?),
            OutputFormat::Table => Ok(format_table(&[JobDisplay::from(self.job)])),
            OutputFormat::Pretty => Ok(format_card(self.job, None, true)),
        }
    }
}

fn format_card(job: &JobPosting, applied: Option<bool>, detailed: bool) -> String {
    let mut title = job.title.bold().to_string();
    if applied == Some(true) {
        title = format!("{} {}", title, "\u{2713} Applied".green());
    }

    let mut lines = vec![
        title,
        format!("  {} \u{00b7} {}", job.company.cyan(), job.location),
        format!("  {} \u{00b7} {}", format_salary(job.salary), job.job_type),
    ];

    if detailed {
        lines.push(format!("  Posted:   {}", format_posted(job.created_at.as_ref())));
        if let Some(employer) = &job.employer {
            lines.push(format!("  Employer: {}", employer_label(employer)));
        }
    }
    lines.push(format!("  {}", format!("ID {}", job.id).dimmed()));

    lines.join("\n")
}

fn employer_label(employer: &EmployerRef) -> String {
    match employer {
        EmployerRef::Profile {
            name: Some(name), ..
        } => name.clone(),
        other => other.id().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::posting;

    #[test]
    fn test_job_display_from_posting() {
        let display = JobDisplay::from(&posting("j1", "Engineer"));

        assert_eq!(display.id, "j1");
        assert_eq!(display.salary, "$90,000");
        assert_eq!(display.job_type, "Full-time");
        assert_eq!(display.posted, "--");
        assert_eq!(display.applied, "");
        assert_eq!(display.with_applied(true).applied, "\u{2713}");
    }

    #[test]
    fn test_listing_table_marks_applied() {
        let jobs = vec![posting("j1", "Engineer"), posting("j2", "Designer")];
        let mut applied = AppliedSet::default();
        applied.mark("j2");

        let output = JobListing::new(&jobs)
            .with_applied(&applied)
            .format(OutputFormat::Table)
            .unwrap();

        let designer_line = output.lines().find(|l| l.contains("Designer")).unwrap();
        let engineer_line = output.lines().find(|l| l.contains("Engineer")).unwrap();
        assert!(designer_line.contains('\u{2713}'));
        assert!(!engineer_line.contains('\u{2713}'));
    }

    #[test]
    fn test_listing_json_includes_applied_only_with_session() {
        let jobs = vec![posting("j1", "Engineer")];

        let anonymous = JobListing::new(&jobs).format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&anonymous).unwrap();
        assert!(value["data"][0].get("applied").is_none());
        assert_eq!(value["data"][0]["_id"], "j1");

        let applied = AppliedSet::from_jobs(&jobs);
        let signed_in = JobListing::new(&jobs)
            .with_applied(&applied)
            .format(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&signed_in).unwrap();
        assert_eq!(value["data"][0]["applied"], true);
    }

    #[test]
    fn test_empty_listing_message() {
        let jobs: Vec<JobPosting> = vec![];
        let listing = JobListing::new(&jobs).empty_message("No jobs posted yet.");
        assert_eq!(listing.format(OutputFormat::Pretty).unwrap(), "No jobs posted yet.");
        assert_eq!(listing.format(OutputFormat::Table).unwrap(), "No jobs posted yet.");
    }

    #[test]
    fn test_detail_pretty_shows_employer() {
        colored::control::set_override(false);
        let mut job = posting("j1", "Engineer");
        job.employer = Some(EmployerRef::Profile {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
        });

        let output = JobDetail { job: &job }.format(OutputFormat::Pretty).unwrap();
        assert!(output.contains("Engineer"));
        assert!(output.contains("Employer: Ada"));
        assert!(output.contains("ID j1"));
    }
}
