//! Single-shot location acquisition and the status line that reports it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::capabilities::{GeolocationError, GeolocationResult, Position};

const MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Colour of the status dot next to the status line.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    #[default]
    Ready,
    Pending,
    Error,
}

impl StatusTone {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ready => "#10B981",
            Self::Pending => "#F59E0B",
            Self::Error => "#EF4444",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationStatus {
    pub text: String,
    pub tone: StatusTone,
}

impl LocationStatus {
    fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Validated lat/lon
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Four-decimal label shown under the map pin.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }

    pub fn maps_link(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(MAPS_BASE_URL)?;
        url.set_query(Some(&format!("q={},{}", self.lat, self.lon)));
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationState {
    pub tracking: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Outcome of a successful acquisition, handed back for sharing.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedLocation {
    pub coords: LatLon,
    pub accuracy_m: u32,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStart {
    Started,
    Unsupported,
    AlreadyInFlight,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationService {
    state: LocationState,
    status: LocationStatus,
    in_flight: bool,
    pin_bouncing: bool,
    share_link: Option<String>,
}

impl LocationService {
    pub fn init(&mut self, supported: bool) {
        self.status = if supported {
            LocationStatus::new("🟢 GPS Ready", StatusTone::Ready)
        } else {
            LocationStatus::new("❌ GPS Not Available", StatusTone::Error)
        };
    }

    pub fn begin(&mut self, supported: bool) -> RequestStart {
        if !supported {
            return RequestStart::Unsupported;
        }
        if self.in_flight {
            return RequestStart::AlreadyInFlight;
        }
        self.in_flight = true;
        self.pin_bouncing = false;
        self.status = LocationStatus::new("📡 Acquiring GPS signal...", StatusTone::Pending);
        RequestStart::Started
    }

    /// Applies the single answer to the in-flight request. Coordinates are
    /// only stored on success; a failure leaves any earlier fix untouched.
    pub fn complete(&mut self, result: GeolocationResult) -> Result<SharedLocation, GeolocationError> {
        self.in_flight = false;
        let position = match result.and_then(validate) {
            Ok(position) => position,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let accuracy_m = position.accuracy_m.max(0.0).round() as u32;
        let coords = LatLon {
            lat: position.latitude,
            lon: position.longitude,
        };

        self.state = LocationState {
            tracking: true,
            latitude: Some(coords.lat),
            longitude: Some(coords.lon),
        };
        self.status = LocationStatus::new(
            format!("📍 Location acquired (±{accuracy_m}m)"),
            StatusTone::Ready,
        );
        self.pin_bouncing = true;
        self.share_link = match coords.maps_link() {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!(error = %e, "failed to build map link");
                None
            }
        };

        info!(lat = coords.lat, lon = coords.lon, accuracy_m, "location acquired");
        Ok(SharedLocation {
            coords,
            accuracy_m,
            link: self.share_link.clone(),
        })
    }

    fn fail(&mut self, error: &GeolocationError) {
        self.status = LocationStatus::new(error.status_text(), StatusTone::Error);
        debug!(error = %error, "location request failed");
    }

    pub fn state(&self) -> LocationState {
        self.state
    }

    pub fn status(&self) -> &LocationStatus {
        &self.status
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn pin_bouncing(&self) -> bool {
        self.pin_bouncing
    }

    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    pub fn map_label(&self) -> Option<String> {
        match (self.state.latitude, self.state.longitude) {
            (Some(lat), Some(lon)) => Some(LatLon { lat, lon }.label()),
            _ => None,
        }
    }
}

fn validate(position: Position) -> Result<Position, GeolocationError> {
    if LatLon::new(position.latitude, position.longitude).is_none() || position.accuracy_m.is_nan() {
        warn!(?position, "shell returned an invalid position");
        return Err(GeolocationError::PositionUnavailable);
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix() -> Position {
        Position {
            latitude: 12.34,
            longitude: 56.78,
            accuracy_m: 15.0,
        }
    }

    #[test]
    fn test_init_status() {
        let mut service = LocationService::default();
        service.init(true);
        assert_eq!(service.status().text, "🟢 GPS Ready");
        assert_eq!(service.status().tone.color(), "#10B981");

        service.init(false);
        assert_eq!(service.status().text, "❌ GPS Not Available");
        assert_eq!(service.status().tone, StatusTone::Error);
    }

    #[test]
    fn test_begin_rejects_unsupported_and_duplicates() {
        let mut service = LocationService::default();
        assert_eq!(service.begin(false), RequestStart::Unsupported);
        assert!(!service.in_flight());

        assert_eq!(service.begin(true), RequestStart::Started);
        assert_eq!(service.status().tone, StatusTone::Pending);
        assert_eq!(service.begin(true), RequestStart::AlreadyInFlight);
    }

    #[test]
    fn test_success_stores_coordinates() {
        let mut service = LocationService::default();
        service.begin(true);
        let shared = service.complete(Ok(fix())).unwrap();

        assert_eq!(shared.accuracy_m, 15);
        assert!(service.status().text.contains("±15m"));
        assert_eq!(service.map_label().as_deref(), Some("12.3400, 56.7800"));
        assert_eq!(
            service.share_link(),
            Some("https://www.google.com/maps?q=12.34,56.78")
        );
        assert!(service.state().tracking);
        assert!(service.pin_bouncing());
        assert!(!service.in_flight());
    }

    #[test]
    fn test_accuracy_is_rounded() {
        let mut service = LocationService::default();
        service.begin(true);
        let shared = service
            .complete(Ok(Position {
                accuracy_m: 7.6,
                ..fix()
            }))
            .unwrap();
        assert_eq!(shared.accuracy_m, 8);
    }

    #[test]
    fn test_denied_stores_nothing() {
        let mut service = LocationService::default();
        service.begin(true);
        let err = service
            .complete(Err(GeolocationError::PermissionDenied))
            .unwrap_err();
        assert_eq!(err, GeolocationError::PermissionDenied);

        assert_eq!(service.status().text, "❌ Location permission denied");
        assert_eq!(service.state(), LocationState::default());
        assert_eq!(service.map_label(), None);
    }

    #[test]
    fn test_failure_keeps_previous_fix() {
        let mut service = LocationService::default();
        service.begin(true);
        service.complete(Ok(fix())).unwrap();

        service.begin(true);
        assert!(service.complete(Err(GeolocationError::Timeout)).is_err());

        assert_eq!(service.status().text, "⏱️ Location request timed out");
        assert_eq!(service.map_label().as_deref(), Some("12.3400, 56.7800"));
    }

    #[test]
    fn test_invalid_position_is_unavailable() {
        let mut service = LocationService::default();
        service.begin(true);
        let result = service.complete(Ok(Position {
            latitude: f64::NAN,
            ..fix()
        }));
        assert_eq!(result, Err(GeolocationError::PositionUnavailable));
    }

    #[test]
    fn test_latlon_validation() {
        assert!(LatLon::new(91.0, 0.0).is_none());
        assert!(LatLon::new(0.0, -181.0).is_none());
        assert!(LatLon::new(f64::INFINITY, 0.0).is_none());
        assert!(LatLon::new(-33.8688, 151.2093).is_some());
    }
}
