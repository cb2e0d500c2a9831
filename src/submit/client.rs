use crate::model::RecapRecord;

use super::error::SubmitError;

/// Base URL of the campaign's collection backend. Fixed; there is no
/// configuration surface to override it.
pub const BASE_URL: &str = "http://192.168.0.11:8000";

/// Path of the daily recap intake endpoint.
const RECAPS_PATH: &str = "/api/daily-recaps/";

/// Submits one recap record to the collection backend.
///
/// A single fire-and-forget POST: no retry, no backoff, no idempotency key.
/// Callers decide what to do with failures; the app logs and swallows them.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for SubmissionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionClient {
    /// Creates a client pointed at [`BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a client pointed at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the full intake endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RECAPS_PATH)
    }

    /// Serializes the full record and performs one POST.
    ///
    /// Succeeds only on a 2xx response.
    pub async fn submit(&self, record: &RecapRecord) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(record)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}
