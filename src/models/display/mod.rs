//! Display model implementations for table, JSON and pretty output

mod job;

pub use job::{JobDetail, JobListing};
