/// Errors that can occur while resolving a position fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The user has not granted (or has revoked) location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// No fix arrived within the bounded wait.
    #[error("timed out waiting for a position fix")]
    Timeout,

    /// The positioning backend failed for another reason.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}
