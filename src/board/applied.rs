//! Postings the signed-in user has applied to

use std::collections::HashSet;

use crate::client::models::JobPosting;

/// Set of posting IDs marked as applied.
///
/// Seeded once from the applied-list endpoint and afterwards changed only by
/// [`AppliedSet::mark`]. There is no withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedSet {
    ids: HashSet<String>,
}

impl AppliedSet {
    /// Seed from the postings returned by the applied-list endpoint
    pub fn from_jobs(jobs: &[JobPosting]) -> Self {
        Self {
            ids: jobs.iter().map(|j| j.id.clone()).collect(),
        }
    }

    /// Mark `job_id` as applied. Returns false if it already was.
    pub fn mark(&mut self, job_id: &str) -> bool {
        self.ids.insert(job_id.to_string())
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.contains(job_id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::posting;

    #[test]
    fn test_seed_from_jobs() {
        let set = AppliedSet::from_jobs(&[posting("a", "One"), posting("b", "Two")]);
        assert_eq!(set.count(), 2);
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut set = AppliedSet::default();
        assert_eq!(set.count(), 0);
        assert!(set.mark("a"));
        assert!(!set.mark("a"));
        assert_eq!(set.count(), 1);
    }
}
