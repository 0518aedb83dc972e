//! Job Board API data models
//!
//! Wire types exchanged with the Job Board API, grouped by resource.

mod auth;
mod job;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, UserProfile};
pub use job::{EmployerRef, JobPosting, JobType, JobsPayload, NewJob};
