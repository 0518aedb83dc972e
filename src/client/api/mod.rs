//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and registration
//! - [`JobApi`] - Job posting reads and mutations

mod auth;
mod jobs;

pub use auth::AuthApi;
pub use jobs::JobApi;
