//! Job posting API trait
//!
//! Public reads take no credentials. Every other call takes the session's
//! bearer token explicitly so a missing session can never reach the wire.

use async_trait::async_trait;

use crate::client::models::{JobPosting, NewJob};
use crate::error::Result;

/// Job posting operations for the Job Board API
#[async_trait]
pub trait JobApi: Send + Sync {
    // ========================================================================
    // Public
    // ========================================================================

    /// List every posting (no pagination)
    async fn list_jobs(&self) -> Result<Vec<JobPosting>>;

    // ========================================================================
    // Authenticated
    // ========================================================================

    /// List postings the caller has applied to
    async fn list_applied(&self, token: &str) -> Result<Vec<JobPosting>>;

    /// Apply to a posting
    async fn apply(&self, token: &str, job_id: &str) -> Result<()>;

    /// Create a posting owned by the caller
    async fn create_job(&self, token: &str, job: &NewJob) -> Result<()>;

    /// List postings owned by the caller
    async fn list_my_jobs(&self, token: &str) -> Result<Vec<JobPosting>>;

    /// Delete one posting owned by the caller
    async fn delete_job(&self, token: &str, job_id: &str) -> Result<()>;
}
