//! Employer dashboard: postings owned by the signed-in user

use log::debug;

use super::guard::{expire_on_unauthorized, require_session};
use super::{Notice, Outcome};
use crate::client::JobApi;
use crate::client::models::JobPosting;
use crate::error::{Error, Result};
use crate::session::SessionStore;

const DASHBOARD_LOGIN_MESSAGE: &str = "Please login to view your dashboard.";

/// Owned postings plus the detail modal state
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    jobs: Vec<JobPosting>,
    modal: DetailModal,
}

impl DashboardView {
    /// Fetch the postings owned by the current session.
    pub async fn load<A, S>(api: &A, store: &S) -> Result<Self>
    where
        A: JobApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let session = require_session(store, DASHBOARD_LOGIN_MESSAGE)?;
        let jobs = api
            .list_my_jobs(&session.token)
            .await
            .map_err(|e| expire_on_unauthorized(store, e))?;
        debug!("Loaded {} owned jobs", jobs.len());

        Ok(Self {
            jobs,
            modal: DetailModal::default(),
        })
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    /// Show the detail modal for an owned posting. No request is made.
    pub fn open(&mut self, job_id: &str) -> Result<&JobPosting> {
        let job = self
            .jobs
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
            .ok_or_else(|| Error::Other(format!("No posting with ID {} on your dashboard", job_id)))?;
        Ok(self.modal.show(job))
    }

    pub fn close(&mut self) {
        self.modal.hide();
    }

    /// Delete one posting, then replace the list with a fresh fetch.
    ///
    /// The local list is never edited directly: whatever the server returns
    /// after the delete is what the dashboard shows.
    pub async fn delete<A, S>(&mut self, api: &A, store: &S, job_id: &str) -> Result<Outcome>
    where
        A: JobApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let session = require_session(store, DASHBOARD_LOGIN_MESSAGE)?;

        debug!("Deleting job {}", job_id);
        api.delete_job(&session.token, job_id)
            .await
            .map_err(|e| expire_on_unauthorized(store, e))?;

        if self.modal.selected().is_some_and(|j| j.id == job_id) {
            self.modal.hide();
        }

        self.jobs = api
            .list_my_jobs(&session.token)
            .await
            .map_err(|e| expire_on_unauthorized(store, e))?;

        Ok(Outcome::stay(Notice::success("Job deleted successfully")))
    }
}

/// Selected posting and visibility of the detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModal {
    selected: Option<JobPosting>,
    visible: bool,
}

impl DetailModal {
    pub fn show(&mut self, job: JobPosting) -> &JobPosting {
        self.visible = true;
        self.selected.insert(job)
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&JobPosting> {
        self.selected.as_ref()
    }
}
