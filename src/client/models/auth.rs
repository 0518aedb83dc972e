//! Authentication models

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses and applies to postings
    #[default]
    #[value(aliases = ["seeker", "job-seeker"])]
    Jobseeker,
    /// Posts and manages postings
    Employer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Jobseeker => write!(f, "jobseeker"),
            Role::Employer => write!(f, "employer"),
        }
    }
}

/// Signed-in user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Account role
    #[serde(default)]
    pub role: Role,
}

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token
    pub token: String,
    pub user: UserProfile,
}

/// Body for `POST /api/auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response from `POST /api/auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
}
