//! Mock Job Board API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::api::{AuthApi, JobApi};
use super::models::{
    JobPosting, LoginRequest, LoginResponse, NewJob, RegisterRequest, RegisterResponse,
    UserProfile,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockJobBoardClient::new().with_jobs(vec![posting("j1", "Engineer")]).await;
///
/// let jobs = mock.list_jobs().await?;
/// assert_eq!(jobs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockJobBoardClient {
    /// Postings returned from list_jobs
    jobs: Arc<Mutex<Vec<JobPosting>>>,
    /// Postings returned from list_applied
    applied: Arc<Mutex<Vec<JobPosting>>>,
    /// Postings returned from list_my_jobs; delete_job removes from here
    my_jobs: Arc<Mutex<Vec<JobPosting>>>,
    /// Successful login response
    login: Arc<Mutex<Option<LoginResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by list_applied only - consumed on first use
    applied_error: Arc<Mutex<Option<ApiError>>>,
    /// Artificial latency applied to mutations
    delay: Arc<Mutex<Option<Duration>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub list_jobs: usize,
    pub list_applied: usize,
    pub apply: usize,
    pub create_job: usize,
    pub list_my_jobs: usize,
    pub delete_job: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.list_jobs
            + self.list_applied
            + self.apply
            + self.create_job
            + self.list_my_jobs
            + self.delete_job
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "apply", "create_job")
    pub method: String,
    /// Bearer token sent, if any
    pub token: Option<String>,
    /// Posting ID for per-posting calls
    pub job_id: Option<String>,
    /// Creation payload for create_job
    pub new_job: Option<NewJob>,
}

impl MockJobBoardClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure postings returned from list_jobs.
    pub async fn with_jobs(self, jobs: Vec<JobPosting>) -> Self {
        *self.jobs.lock().await = jobs;
        self
    }

    /// Configure postings returned from list_applied.
    pub async fn with_applied(self, jobs: Vec<JobPosting>) -> Self {
        *self.applied.lock().await = jobs;
        self
    }

    /// Configure postings returned from list_my_jobs.
    pub async fn with_my_jobs(self, jobs: Vec<JobPosting>) -> Self {
        *self.my_jobs.lock().await = jobs;
        self
    }

    /// Configure a successful login for the given user.
    pub async fn with_login(self, token: &str, user: UserProfile) -> Self {
        *self.login.lock().await = Some(LoginResponse {
            token: token.to_string(),
            user,
        });
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error returned by the next list_applied call only.
    pub async fn with_applied_error(self, error: ApiError) -> Self {
        *self.applied_error.lock().await = Some(error);
        self
    }

    /// Delay every mutation by `delay` so tests can overlap requests.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    /// Record a captured request for test assertions.
    async fn capture_request(
        &self,
        method: &str,
        token: Option<&str>,
        job_id: Option<&str>,
        new_job: Option<&NewJob>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            token: token.map(|s| s.to_string()),
            job_id: job_id.map(|s| s.to_string()),
            new_job: new_job.cloned(),
        });
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockJobBoardClient {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
        self.capture_request("login", None, None, None).await;
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        self.login.lock().await.clone().ok_or_else(|| {
            ApiError::InvalidCredentials("Invalid email or password".to_string()).into()
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.capture_request("register", None, None, None).await;
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        Ok(RegisterResponse {
            user: Some(UserProfile {
                id: "mock-user".to_string(),
                name: request.name.clone(),
                email: request.email.clone(),
                role: request.role,
            }),
        })
    }
}

// ============================================================================
// JobApi Implementation
// ============================================================================

#[async_trait]
impl JobApi for MockJobBoardClient {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>> {
        self.capture_request("list_jobs", None, None, None).await;
        self.call_count.lock().await.list_jobs += 1;
        self.check_error().await?;

        Ok(self.jobs.lock().await.clone())
    }

    async fn list_applied(&self, token: &str) -> Result<Vec<JobPosting>> {
        self.capture_request("list_applied", Some(token), None, None)
            .await;
        self.call_count.lock().await.list_applied += 1;
        if let Some(e) = self.applied_error.lock().await.take() {
            return Err(e.into());
        }

        Ok(self.applied.lock().await.clone())
    }

    async fn apply(&self, token: &str, job_id: &str) -> Result<()> {
        self.capture_request("apply", Some(token), Some(job_id), None)
            .await;
        self.call_count.lock().await.apply += 1;
        self.simulate_latency().await;
        self.check_error().await?;

        Ok(())
    }

    async fn create_job(&self, token: &str, job: &NewJob) -> Result<()> {
        self.capture_request("create_job", Some(token), None, Some(job))
            .await;
        self.call_count.lock().await.create_job += 1;
        self.simulate_latency().await;
        self.check_error().await?;

        Ok(())
    }

    async fn list_my_jobs(&self, token: &str) -> Result<Vec<JobPosting>> {
        self.capture_request("list_my_jobs", Some(token), None, None)
            .await;
        self.call_count.lock().await.list_my_jobs += 1;
        self.check_error().await?;

        Ok(self.my_jobs.lock().await.clone())
    }

    async fn delete_job(&self, token: &str, job_id: &str) -> Result<()> {
        self.capture_request("delete_job", Some(token), Some(job_id), None)
            .await;
        self.call_count.lock().await.delete_job += 1;
        self.simulate_latency().await;
        self.check_error().await?;

        let mut my_jobs = self.my_jobs.lock().await;
        let before = my_jobs.len();
        my_jobs.retain(|j| j.id != job_id);
        if my_jobs.len() == before {
            return Err(ApiError::NotFound(format!("Job {}", job_id)).into());
        }

        Ok(())
    }
}

/// Build a posting for tests
pub fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        salary: 90000,
        job_type: super::models::JobType::FullTime,
        created_at: None,
        employer: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_list_jobs() {
        let mock = MockJobBoardClient::new()
            .with_jobs(vec![posting("1", "Engineer"), posting("2", "Designer")])
            .await;

        let jobs = mock.list_jobs().await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(mock.call_counts().await.list_jobs, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockJobBoardClient::new()
            .with_error(ApiError::Timeout)
            .await;

        assert!(mock.list_jobs().await.is_err());
        assert!(mock.list_jobs().await.is_ok());
        assert_eq!(mock.call_counts().await.list_jobs, 2);
    }

    #[tokio::test]
    async fn test_mock_delete_removes_owned_posting() {
        let mock = MockJobBoardClient::new()
            .with_my_jobs(vec![posting("1", "Engineer")])
            .await;

        mock.delete_job("tok", "1").await.unwrap();
        assert!(mock.list_my_jobs("tok").await.unwrap().is_empty());
        assert!(mock.delete_job("tok", "1").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_captures_token() {
        let mock = MockJobBoardClient::new();
        mock.apply("tok-1", "job-9").await.unwrap();

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].token.as_deref(), Some("tok-1"));
        assert_eq!(requests[0].job_id.as_deref(), Some("job-9"));
    }
}
