//! Geolocation: capability boundary, permission/fetch orchestration.

mod error;
mod provider;
mod service;

pub use error::GeoError;
pub use provider::LocationProvider;
pub use service::{Accuracy, FetchOptions, GeolocationService, ManualFix, PermissionState};
