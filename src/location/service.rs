use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::error::GeoError;
use crate::model::Fix;

/// Foreground location permission state, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// The user has granted access.
    Granted,
    /// The user has denied access.
    Denied,
    /// The user has not been asked yet.
    #[default]
    Undetermined,
}

/// Requested positioning accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    Low,
    Balanced,
    #[default]
    High,
}

/// Parameters for a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Requested accuracy class.
    pub accuracy: Accuracy,
    /// Abandon the request if no fix arrives within this bound.
    pub timeout: Duration,
    /// Accept a cached fix no older than this.
    pub max_age: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::High,
            timeout: Duration::from_secs(15),
            max_age: Duration::from_secs(10),
        }
    }
}

/// The device geolocation capability boundary.
///
/// Implementations are expected to enforce [`FetchOptions::timeout`]
/// themselves and return [`GeoError::Timeout`] when it elapses.
#[async_trait]
pub trait GeolocationService: Send + Sync {
    /// Reads the current permission state without prompting.
    async fn permission(&self) -> PermissionState;

    /// Prompts the user for permission and returns the resulting state.
    async fn request_permission(&self) -> PermissionState;

    /// Resolves the current position.
    async fn current_position(&self, opts: FetchOptions) -> Result<Fix, GeoError>;
}

/// Stand-in backend for hosts without a positioning service.
///
/// Reports a fixed coordinate and grants permission when asked. Real
/// platform backends implement [`GeolocationService`] instead.
pub struct ManualFix {
    latitude: f64,
    longitude: f64,
    permission: Mutex<PermissionState>,
}

impl ManualFix {
    /// Creates a backend reporting the given coordinate, permission
    /// initially undetermined.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            permission: Mutex::new(PermissionState::Undetermined),
        }
    }

    fn permission_state(&self) -> PermissionState {
        *self
            .permission
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GeolocationService for ManualFix {
    async fn permission(&self) -> PermissionState {
        self.permission_state()
    }

    async fn request_permission(&self) -> PermissionState {
        let mut guard = self
            .permission
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = PermissionState::Granted;
        *guard
    }

    async fn current_position(&self, _opts: FetchOptions) -> Result<Fix, GeoError> {
        Ok(Fix {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: 0.0,
            accuracy: 0.0,
            timestamp: Utc::now(),
        })
    }
}
