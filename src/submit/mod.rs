//! Submission: one JSON POST of the full recap record.

mod client;
mod error;

pub use client::{BASE_URL, SubmissionClient};
pub use error::SubmitError;
