use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single resolved geolocation reading.
///
/// Produced once per explicit user request and immutable after capture. Only
/// the latitude and longitude are projected into the form record, as
/// fixed-precision decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of the prime meridian.
    pub longitude: f64,
    /// Meters above the WGS84 ellipsoid.
    pub altitude: f64,
    /// Horizontal accuracy radius in meters.
    pub accuracy: f64,
    /// When the fix was taken.
    pub timestamp: DateTime<Utc>,
}
