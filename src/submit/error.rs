/// Errors that can occur while submitting a recap.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request failed or the server answered with an error status.
    #[error("submission failed: {0}")]
    Http(#[from] reqwest::Error),
}
