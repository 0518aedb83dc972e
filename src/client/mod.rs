//! Job Board API client

pub mod api;
pub mod jobboard;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, JobApi};
pub use jobboard::JobBoardClient;
#[cfg(test)]
pub use mock::MockJobBoardClient;

