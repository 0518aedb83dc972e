//! Display models for CLI output
//!
//! Converts API records into the rows and views the commands print.

pub mod display;

pub use display::{JobDetail, JobListing};
