//! Job Board API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, JobApi};
use super::models::{
    JobPosting, JobsPayload, LoginRequest, LoginResponse, NewJob, RegisterRequest,
    RegisterResponse,
};
use crate::error::{ApiError, ConfigError, Result};

/// Outbound request budget shared by every call the client makes
const RATE_LIMIT_PER_SECOND: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// Job Board API client
pub struct JobBoardClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl JobBoardClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            RATE_LIMIT_PER_SECOND,
        )));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` extended by `segments`, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = || ConfigError::Invalid(format!("API URL '{}' is not usable", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the response if the status is 2xx.
    ///
    /// The bearer token is attached only when one is given.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let url = self.endpoint(segments)?;
        debug!(
            "{} {}{}",
            method,
            url,
            if token.is_some() { " (authenticated)" } else { "" }
        );

        let mut request = self.http.request(method, url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("{} -> {}", url, status);

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        Err(status_error(status, &body, token.is_some(), retry_after).into())
    }

    /// Decode a JSON response body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected response format: {}", e)).into()
        })
    }

    async fn get_jobs(&self, segments: &[&str], token: Option<&str>) -> Result<Vec<JobPosting>> {
        let response = self.send::<()>(Method::GET, segments, token, None).await?;
        let payload: JobsPayload = Self::decode(response).await?;
        Ok(payload.into_jobs())
    }
}

/// Map a non-2xx status to an [`ApiError`].
///
/// A 401 on an authenticated call means the session is no longer valid; on
/// an anonymous call (login) it means the credentials were rejected.
fn status_error(
    status: StatusCode,
    body: &str,
    authenticated: bool,
    retry_after: Option<u64>,
) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED if authenticated => ApiError::Unauthorized,
        StatusCode::UNAUTHORIZED => {
            ApiError::InvalidCredentials(error_message(body, "Invalid credentials"))
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden(error_message(body, "Forbidden")),
        StatusCode::NOT_FOUND => ApiError::NotFound(error_message(body, "Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimit(Duration::from_secs(retry_after.unwrap_or(60)))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(error_message(body, &format!("HTTP {}", status.as_u16())))
        }
        status => ApiError::UnexpectedStatus {
            status: status.as_u16(),
            message: error_message(body, "no message"),
        },
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the JSON `message` (or `error`) field, then the raw text.
pub fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str())
                && !msg.trim().is_empty()
            {
                return msg.trim().to_string();
            }
        }
    }

    let text = body.trim();
    if text.is_empty() || text.starts_with('<') {
        fallback.to_string()
    } else {
        text.to_string()
    }
}

#[async_trait]
impl AuthApi for JobBoardClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .send(Method::POST, &["api", "auth", "login"], None, Some(request))
            .await
            .map_err(|err| match err {
                crate::error::Error::Api(ApiError::BadRequest(msg)) => {
                    ApiError::InvalidCredentials(msg).into()
                }
                other => other,
            })?;

        Self::decode(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let response = self
            .send(Method::POST, &["api", "auth", "register"], None, Some(request))
            .await?;

        Self::decode(response).await
    }
}

#[async_trait]
impl JobApi for JobBoardClient {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>> {
        self.get_jobs(&["api", "job"], None).await
    }

    async fn list_applied(&self, token: &str) -> Result<Vec<JobPosting>> {
        self.get_jobs(&["api", "job", "applied"], Some(token)).await
    }

    async fn apply(&self, token: &str, job_id: &str) -> Result<()> {
        self.send::<()>(Method::POST, &["api", "job", job_id, "apply"], Some(token), None)
            .await?;
        Ok(())
    }

    async fn create_job(&self, token: &str, job: &NewJob) -> Result<()> {
        self.send(Method::POST, &["api", "job"], Some(token), Some(job))
            .await?;
        Ok(())
    }

    async fn list_my_jobs(&self, token: &str) -> Result<Vec<JobPosting>> {
        self.get_jobs(&["api", "job", "my", "jobs"], Some(token)).await
    }

    async fn delete_job(&self, token: &str, job_id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &["api", "job", job_id], Some(token), None)
            .await?;
        Ok(())
    }
}
