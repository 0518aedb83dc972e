//! Job posting models

use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Employment type of a posting
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    #[value(name = "full-time", alias = "fulltime")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[value(name = "part-time", alias = "parttime")]
    PartTime,
    Contract,
    Internship,
    Remote,
    /// Any value the server sends that this client does not know
    #[serde(other)]
    #[value(skip)]
    Other,
}

impl JobType {
    /// Types offered when posting a job.
    pub const SELECTABLE: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
            JobType::Other => "Other",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the employer that owns a posting.
///
/// Depending on whether the server populates the relation, this is either
/// the bare user ID or a small user object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployerRef {
    Id(String),
    Profile {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl EmployerRef {
    pub fn id(&self) -> &str {
        match self {
            EmployerRef::Id(id) => id,
            EmployerRef::Profile { id, .. } => id,
        }
    }
}

/// A job listing record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Posting ID
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub title: String,

    pub company: String,

    pub location: String,

    /// Annual salary
    #[serde(deserialize_with = "deserialize_salary")]
    pub salary: u64,

    #[serde(default)]
    pub job_type: JobType,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Owning employer
    #[serde(
        default,
        alias = "postedBy",
        alias = "createdBy",
        skip_serializing_if = "Option::is_none"
    )]
    pub employer: Option<EmployerRef>,
}

/// Creation payload for `POST /api/job`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: u64,
    pub job_type: JobType,
}

/// List endpoints answer either with a bare array or with `{ "jobs": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobsPayload {
    List(Vec<JobPosting>),
    Wrapped { jobs: Vec<JobPosting> },
}

impl JobsPayload {
    pub fn into_jobs(self) -> Vec<JobPosting> {
        match self {
            JobsPayload::List(jobs) | JobsPayload::Wrapped { jobs } => jobs,
        }
    }
}

/// Accept salaries sent as integers, floats or numeric strings.
fn deserialize_salary<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let from_float = |f: f64| {
        if f.is_finite() && f >= 0.0 {
            Ok(f.round() as u64)
        } else {
            Err(serde::de::Error::custom(format!("invalid salary {}", f)))
        }
    };

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Float(f) => from_float(f),
        Raw::Text(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(n) => Ok(n),
                Err(_) => s
                    .parse::<f64>()
                    .map_err(|_| serde::de::Error::custom(format!("invalid salary '{}'", s)))
                    .and_then(from_float),
            }
        }
    }
}
