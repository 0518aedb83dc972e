//! Post-a-job form

use log::debug;

use super::guard::{expire_on_unauthorized, require_session};
use super::inflight::FormStatus;
use super::validation::{Field, ValidationError};
use super::{Notice, Outcome, Route};
use crate::client::JobApi;
use crate::client::models::{JobType, NewJob};
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// Raw input of the post-a-job form.
///
/// Field values are kept as typed so a failed submit can be corrected and
/// resubmitted without re-entering everything.
#[derive(Default)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: Option<JobType>,
    status: FormStatus,
}

impl JobForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check required fields and build the creation payload.
    pub fn validate(&self) -> std::result::Result<NewJob, ValidationError> {
        let mut errors = ValidationError::default();
        errors.require(Field::Title, &self.title);
        errors.require(Field::Company, &self.company);
        errors.require(Field::Location, &self.location);
        errors.require(Field::Salary, &self.salary);
        if self.job_type.is_none() {
            errors.missing.push(Field::JobType);
        }

        let salary = match parse_salary(&self.salary) {
            Ok(salary) => salary,
            Err(reason) => {
                if !self.salary.trim().is_empty() {
                    errors.reject(Field::Salary, reason);
                }
                0
            }
        };

        errors.into_result()?;

        Ok(NewJob {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            salary,
            job_type: self.job_type.unwrap_or_default(),
        })
    }

    /// Validate, check the session, and create the posting.
    ///
    /// Nothing is sent when validation fails or no one is signed in. On
    /// success the user is sent to the dashboard; on failure the form keeps
    /// its input and records the inline error.
    pub async fn submit<A, S>(&self, api: &A, store: &S) -> Result<Outcome>
    where
        A: JobApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        self.status.clear_error();

        let job = self.validate().map_err(|e| {
            self.status.set_error(e.to_string());
            Error::from(e)
        })?;

        let session = require_session(store, "You must be logged in to post a job.")?;

        debug!("Posting job '{}' at {}", job.title, job.company);
        match self
            .status
            .run(api.create_job(&session.token, &job))
            .await
        {
            Ok(()) => Ok(Outcome::navigate(
                Notice::success("Job posted successfully!"),
                Route::Dashboard,
            )),
            Err(Error::Busy) => Err(Error::Busy),
            Err(err) => {
                let err = expire_on_unauthorized(store, err);
                self.status.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Inline error from the last submit
    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    /// Whether the submit control is disabled
    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Abort an outstanding submit
    pub fn cancel(&self) {
        self.status.cancel();
    }
}

fn parse_salary(raw: &str) -> std::result::Result<u64, &'static str> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if let Ok(value) = cleaned.parse::<u64>() {
        return Ok(value);
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value < 0.0 => Err("must not be negative"),
        Ok(value) if value >= u64::MAX as f64 => Err("is too large"),
        Ok(value) if value.fract() == 0.0 => Ok(value as u64),
        _ => Err("must be a whole number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockJobBoardClient;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, test_session};
    use std::sync::Arc;
    use std::time::Duration;

    fn filled_form() -> JobForm {
        JobForm {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: "90000".to_string(),
            job_type: Some(JobType::FullTime),
            ..JobForm::default()
        }
    }

    #[test]
    fn test_validate_builds_payload() {
        let job = filled_form().validate().unwrap();
        assert_eq!(
            job,
            NewJob {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                salary: 90000,
                job_type: JobType::FullTime,
            }
        );
    }

    #[test]
    fn test_validate_reports_exactly_missing_fields() {
        let form = JobForm {
            company: "  ".to_string(),
            salary: String::new(),
            job_type: None,
            ..filled_form()
        };

        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec![Field::Company, Field::Salary, Field::JobType]);
        assert!(err.invalid.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let form = JobForm {
            salary: "-100".to_string(),
            ..filled_form()
        };

        let err = form.validate().unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(
            err.invalid,
            vec![(Field::Salary, "must not be negative".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_salary_beyond_range() {
        for salary in ["1e30", "18446744073709551616", "inf"] {
            let form = JobForm {
                salary: salary.to_string(),
                ..filled_form()
            };

            let err = form.validate().unwrap_err();
            assert_eq!(
                err.invalid,
                vec![(Field::Salary, "is too large".to_string())],
                "salary {:?}",
                salary
            );
        }

        assert_eq!(parse_salary("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("90,000"), Ok(90000));
        assert_eq!(parse_salary(" 0 "), Ok(0));
        assert_eq!(parse_salary("1e3"), Ok(1000));
        assert_eq!(parse_salary("12.5"), Err("must be a whole number"));
        assert_eq!(parse_salary("lots"), Err("must be a whole number"));
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_makes_no_call() {
        let api = MockJobBoardClient::new();
        let store = MemorySessionStore::with_session(test_session());
        let form = JobForm {
            title: String::new(),
            ..filled_form()
        };

        let err = form.submit(&api, &store).await.unwrap_err();
        match err {
            Error::Validation(v) => assert_eq!(v.missing, vec![Field::Title]),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(api.call_counts().await.total(), 0);
        assert!(form.error().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn test_submit_without_session_routes_to_login() {
        let api = MockJobBoardClient::new();
        let store = MemorySessionStore::new();

        let err = filled_form().submit(&api, &store).await.unwrap_err();
        assert_eq!(err.route(), Some(Route::Login));
        assert_eq!(api.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_submit_sends_exact_payload_and_routes_to_dashboard() {
        let api = MockJobBoardClient::new();
        let store = MemorySessionStore::with_session(test_session());

        let outcome = filled_form().submit(&api, &store).await.unwrap();
        assert_eq!(outcome.route, Some(Route::Dashboard));

        let requests = api.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "create_job");
        assert_eq!(requests[0].token.as_deref(), Some("tok-123"));
        assert_eq!(requests[0].new_job, Some(filled_form().validate().unwrap()));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_input_for_resubmit() {
        let api = MockJobBoardClient::new()
            .with_error(ApiError::ServerError("database down".to_string()))
            .await;
        let store = MemorySessionStore::with_session(test_session());
        let form = filled_form();

        let err = form.submit(&api, &store).await.unwrap_err();
        assert!(err.to_string().contains("database down"));
        assert_eq!(form.title, "Engineer");
        assert!(form.error().is_some());
        assert!(store.get().unwrap().is_some());

        // Resubmit succeeds and clears the inline error
        form.submit(&api, &store).await.unwrap();
        assert!(form.error().is_none());
        assert_eq!(api.call_counts().await.create_job, 2);
    }

    #[tokio::test]
    async fn test_unauthorized_submit_clears_session() {
        let api = MockJobBoardClient::new()
            .with_error(ApiError::Unauthorized)
            .await;
        let store = MemorySessionStore::with_session(test_session());

        let err = filled_form().submit(&api, &store).await.unwrap_err();
        assert_eq!(err.route(), Some(Route::Login));
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_double_submit_is_rejected() {
        let api = Arc::new(
            MockJobBoardClient::new()
                .with_delay(Duration::from_millis(200))
                .await,
        );
        let store = Arc::new(MemorySessionStore::with_session(test_session()));
        let form = Arc::new(filled_form());

        let first = {
            let (api, store, form) = (Arc::clone(&api), Arc::clone(&store), Arc::clone(&form));
            tokio::spawn(async move { form.submit(api.as_ref(), store.as_ref()).await })
        };

        while !form.is_submitting() {
            tokio::task::yield_now().await;
        }
        assert!(matches!(
            form.submit(api.as_ref(), store.as_ref()).await,
            Err(Error::Busy)
        ));

        assert!(first.await.unwrap().is_ok());
        assert_eq!(api.call_counts().await.create_job, 1);
    }

    #[tokio::test]
    async fn test_cancelled_submit_leaves_form_intact() {
        let api = Arc::new(
            MockJobBoardClient::new()
                .with_delay(Duration::from_secs(30))
                .await,
        );
        let store = Arc::new(MemorySessionStore::with_session(test_session()));
        let form = Arc::new(filled_form());

        let pending = {
            let (api, store, form) = (Arc::clone(&api), Arc::clone(&store), Arc::clone(&form));
            tokio::spawn(async move { form.submit(api.as_ref(), store.as_ref()).await })
        };

        while !form.is_submitting() {
            tokio::task::yield_now().await;
        }
        form.cancel();

        assert!(matches!(pending.await.unwrap(), Err(Error::Cancelled)));
        assert!(!form.is_submitting());
        assert_eq!(form.company, "Acme");
    }
}
