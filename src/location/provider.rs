use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::GeoError;
use super::service::{FetchOptions, GeolocationService, PermissionState};
use crate::model::Fix;

/// Orchestrates the permission-then-fetch flow over a
/// [`GeolocationService`].
///
/// The provider owns a shared loading flag that is `true` for the whole
/// duration of [`request_and_fetch`](Self::request_and_fetch), on every
/// outcome. Callers use it to disable the triggering control; only one fetch
/// is expected in flight at a time, and that is the caller's responsibility,
/// not an internal lock.
pub struct LocationProvider<S> {
    service: Arc<S>,
    loading: Arc<AtomicBool>,
}

impl<S> Clone for LocationProvider<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            loading: Arc::clone(&self.loading),
        }
    }
}

impl<S: GeolocationService> LocationProvider<S> {
    /// Creates a provider over the given service.
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Reads the current permission state without prompting.
    pub async fn check_permission(&self) -> PermissionState {
        self.service.permission().await
    }

    /// Resolves a position fix, prompting for permission if needed.
    ///
    /// 1. Reads the current permission; if not granted, requests it.
    /// 2. If still not granted, fails with [`GeoError::PermissionDenied`]
    ///    without touching the positioning backend.
    /// 3. Otherwise fetches the current position with the default bounds
    ///    (high accuracy, 15 s wait, 10 s staleness).
    pub async fn request_and_fetch(&self) -> Result<Fix, GeoError> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.fetch(FetchOptions::default()).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn fetch(&self, opts: FetchOptions) -> Result<Fix, GeoError> {
        let mut status = self.service.permission().await;
        if status != PermissionState::Granted {
            status = self.service.request_permission().await;
        }
        if status != PermissionState::Granted {
            return Err(GeoError::PermissionDenied);
        }
        self.service.current_position(opts).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn make_fix() -> Fix {
        Fix {
            latitude: -1.455833,
            longitude: -48.503887,
            altitude: 12.0,
            accuracy: 3.5,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 5, 11, 30, 0).unwrap(),
        }
    }

    struct MockService {
        permission: PermissionState,
        after_request: PermissionState,
        position: Result<Fix, GeoError>,
        request_calls: Arc<AtomicUsize>,
        position_calls: Arc<AtomicUsize>,
        // Loading flag injected by the test so the mock can record its
        // value while the fetch is in progress.
        loading_flag: Arc<Mutex<Option<Arc<AtomicBool>>>>,
        loading_seen: Arc<Mutex<Vec<bool>>>,
    }

    impl MockService {
        fn new(
            permission: PermissionState,
            after_request: PermissionState,
            position: Result<Fix, GeoError>,
        ) -> Self {
            Self {
                permission,
                after_request,
                position,
                request_calls: Arc::new(AtomicUsize::new(0)),
                position_calls: Arc::new(AtomicUsize::new(0)),
                loading_flag: Arc::new(Mutex::new(None)),
                loading_seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl GeolocationService for MockService {
        async fn permission(&self) -> PermissionState {
            self.permission
        }

        async fn request_permission(&self) -> PermissionState {
            self.request_calls.fetch_add(1, Ordering::SeqCst);
            self.after_request
        }

        async fn current_position(&self, _opts: FetchOptions) -> Result<Fix, GeoError> {
            self.position_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(flag) = self.loading_flag.lock().unwrap().as_ref() {
                self.loading_seen
                    .lock()
                    .unwrap()
                    .push(flag.load(Ordering::SeqCst));
            }
            self.position.clone()
        }
    }

    #[tokio::test]
    async fn granted_permission_skips_request() {
        let mock = MockService::new(
            PermissionState::Granted,
            PermissionState::Granted,
            Ok(make_fix()),
        );
        let request_calls = Arc::clone(&mock.request_calls);

        let provider = LocationProvider::new(mock);
        let fix = provider.request_and_fetch().await.unwrap();

        assert_eq!(fix, make_fix());
        assert_eq!(request_calls.load(Ordering::SeqCst), 0);
        assert!(!provider.is_loading());
    }

    #[tokio::test]
    async fn undetermined_permission_is_requested_once() {
        let mock = MockService::new(
            PermissionState::Undetermined,
            PermissionState::Granted,
            Ok(make_fix()),
        );
        let request_calls = Arc::clone(&mock.request_calls);

        let provider = LocationProvider::new(mock);
        provider.request_and_fetch().await.unwrap();

        assert_eq!(request_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn denied_twice_fails_without_fetching() {
        let mock = MockService::new(
            PermissionState::Denied,
            PermissionState::Denied,
            Ok(make_fix()),
        );
        let request_calls = Arc::clone(&mock.request_calls);
        let position_calls = Arc::clone(&mock.position_calls);

        let provider = LocationProvider::new(mock);
        let result = provider.request_and_fetch().await;

        assert_eq!(result, Err(GeoError::PermissionDenied));
        assert_eq!(request_calls.load(Ordering::SeqCst), 1);
        assert_eq!(position_calls.load(Ordering::SeqCst), 0);
        assert!(!provider.is_loading());
    }

    #[tokio::test]
    async fn loading_is_true_during_fetch_and_false_after() {
        let mock = MockService::new(
            PermissionState::Granted,
            PermissionState::Granted,
            Ok(make_fix()),
        );
        let loading_flag = Arc::clone(&mock.loading_flag);
        let loading_seen = Arc::clone(&mock.loading_seen);

        let provider = LocationProvider::new(mock);
        *loading_flag.lock().unwrap() = Some(Arc::clone(&provider.loading));

        assert!(!provider.is_loading());
        provider.request_and_fetch().await.unwrap();

        assert_eq!(*loading_seen.lock().unwrap(), vec![true]);
        assert!(!provider.is_loading());
    }

    #[tokio::test]
    async fn loading_clears_on_failure_too() {
        let mock = MockService::new(
            PermissionState::Granted,
            PermissionState::Granted,
            Err(GeoError::Timeout),
        );
        let provider = LocationProvider::new(mock);

        assert_eq!(provider.request_and_fetch().await, Err(GeoError::Timeout));
        assert!(!provider.is_loading());
    }

    #[tokio::test]
    async fn backend_errors_pass_through() {
        let mock = MockService::new(
            PermissionState::Granted,
            PermissionState::Granted,
            Err(GeoError::Unavailable("no satellites".into())),
        );
        let provider = LocationProvider::new(mock);

        assert_eq!(
            provider.request_and_fetch().await,
            Err(GeoError::Unavailable("no satellites".into()))
        );
    }

    #[tokio::test]
    async fn check_permission_reads_without_prompting() {
        let mock = MockService::new(
            PermissionState::Denied,
            PermissionState::Granted,
            Ok(make_fix()),
        );
        let request_calls = Arc::clone(&mock.request_calls);

        let provider = LocationProvider::new(mock);
        assert_eq!(provider.check_permission().await, PermissionState::Denied);
        assert_eq!(request_calls.load(Ordering::SeqCst), 0);
    }
}
