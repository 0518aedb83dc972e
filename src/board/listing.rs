//! Browse-all-jobs screen

use std::time::Duration;

use log::{debug, warn};

use super::applied::AppliedSet;
use super::guard::{expire_on_unauthorized, require_session};
use super::{Notice, Outcome};
use crate::client::JobApi;
use crate::client::models::JobPosting;
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// Shown when apply is attempted while signed out
pub const APPLY_LOGIN_MESSAGE: &str = "Please login to apply.";

/// How long the listing waits for the applied list once the postings are in
pub const APPLIED_GRACE: Duration = Duration::from_millis(750);

/// All postings plus the signed-in user's applied markers
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    jobs: Vec<JobPosting>,
    applied: AppliedSet,
    signed_in: bool,
}

impl ListingView {
    /// Fetch every posting.
    ///
    /// With a session, the applied list is fetched alongside. It never holds
    /// the listing back: once the postings arrive it gets at most
    /// [`APPLIED_GRACE`] more, and its failure or expiry only costs the
    /// markers. An unreadable session file counts as signed out here.
    pub async fn load<A, S>(api: &A, store: &S) -> Result<Self>
    where
        A: JobApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let session = store.get().unwrap_or_else(|err| {
            warn!("Ignoring unreadable session: {}", err);
            None
        });
        let Some(session) = session else {
            let jobs = api.list_jobs().await?;
            debug!("Loaded {} jobs (signed out)", jobs.len());
            return Ok(Self {
                jobs,
                applied: AppliedSet::default(),
                signed_in: false,
            });
        };

        let jobs_request = api.list_jobs();
        let applied_request = api.list_applied(&session.token);
        tokio::pin!(jobs_request);
        tokio::pin!(applied_request);

        let mut applied = None;
        let jobs = loop {
            tokio::select! {
                jobs = &mut jobs_request => break jobs,
                result = &mut applied_request, if applied.is_none() => applied = Some(result),
            }
        };
        let jobs = jobs?;

        let applied = match applied {
            Some(result) => Some(result),
            None => tokio::time::timeout(APPLIED_GRACE, &mut applied_request)
                .await
                .ok(),
        };

        let mut signed_in = true;
        let applied = match applied {
            Some(Ok(applied)) => AppliedSet::from_jobs(&applied),
            Some(Err(err)) => {
                let err = expire_on_unauthorized(store, err);
                if err.is_unauthorized() {
                    signed_in = false;
                } else {
                    warn!("Could not load applied jobs: {}", err);
                }
                AppliedSet::default()
            }
            None => {
                warn!(
                    "Applied jobs did not arrive within {:?}; showing the list without markers",
                    APPLIED_GRACE
                );
                AppliedSet::default()
            }
        };

        debug!("Loaded {} jobs, {} applied", jobs.len(), applied.count());

        Ok(Self {
            jobs,
            applied,
            signed_in,
        })
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn applied(&self) -> &AppliedSet {
        &self.applied
    }

    /// Postings whose title contains `query` exactly as given, ignoring case.
    ///
    /// Works on the loaded list only. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&JobPosting> {
        let needle = query.to_lowercase();
        self.jobs
            .iter()
            .filter(|job| job.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Apply to `job_id` and mark it applied.
    ///
    /// The applied marker is updated locally; the list is not re-fetched. A
    /// 401 signs the user out and drops every marker, as a reload would.
    pub async fn apply<A, S>(&mut self, api: &A, store: &S, job_id: &str) -> Result<Outcome>
    where
        A: JobApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let session = require_session(store, APPLY_LOGIN_MESSAGE)?;

        let (title, company) = match self.jobs.iter().find(|j| j.id == job_id) {
            Some(job) => (job.title.clone(), job.company.clone()),
            None => return Err(Error::Other(format!("No job posting with ID {}", job_id))),
        };

        if self.applied.contains(job_id) {
            return Ok(Outcome::stay(Notice::info(format!(
                "Already applied to {} at {}",
                title, company
            ))));
        }

        match api.apply(&session.token, job_id).await {
            Ok(()) => {
                self.applied.mark(job_id);
                Ok(Outcome::stay(Notice::success(format!(
                    "Applied to {} at {}",
                    title, company
                ))))
            }
            Err(err) => {
                let err = expire_on_unauthorized(store, err);
                if err.is_unauthorized() {
                    self.signed_in = false;
                    self.applied = AppliedSet::default();
                }
                Err(err)
            }
        }
    }
}

/// Postings the signed-in user has applied to
pub async fn applied_jobs<A, S>(api: &A, store: &S) -> Result<Vec<JobPosting>>
where
    A: JobApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let session = require_session(store, "Please login to see your applications.")?;
    api.list_applied(&session.token)
        .await
        .map_err(|e| expire_on_unauthorized(store, e))
}
