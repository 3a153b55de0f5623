use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mirrors the W3C `PositionOptions` dictionary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u64,
    pub maximum_age_ms: u64,
}

impl PositionOptions {
    /// Fresh, high-accuracy fix; cached positions are never acceptable.
    pub const fn emergency(timeout_ms: u64) -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms,
            maximum_age_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of the 95% confidence circle, in metres.
    pub accuracy_m: f64,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location information unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("unknown location error: {message}")]
    Unknown { message: String },
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code` value.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown {
                message: message.into(),
            },
        }
    }

    /// Status-line text shown for this failure.
    pub const fn status_text(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "❌ Location permission denied",
            Self::PositionUnavailable => "❌ Location information unavailable",
            Self::Timeout => "⏱️ Location request timed out",
            Self::Unknown { .. } => "❌ Unknown location error",
        }
    }
}

pub type GeolocationResult = Result<Position, GeolocationError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeolocationOperation {
    GetCurrentPosition(PositionOptions),
}

impl Operation for GeolocationOperation {
    type Output = GeolocationResult;
}

pub struct Geolocation<Ev> {
    context: CapabilityContext<GeolocationOperation, Ev>,
}

impl<Ev> Capability<Ev> for Geolocation<Ev> {
    type Operation = GeolocationOperation;
    type MappedSelf<MappedEv> = Geolocation<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Geolocation::new(self.context.map_event(f))
    }
}

impl<Ev> Geolocation<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<GeolocationOperation, Ev>) -> Self {
        Self { context }
    }

    /// Single-shot request. The shell must answer with exactly one result;
    /// the platform enforces `options.timeout_ms`.
    pub fn get_current_position<F>(&self, options: PositionOptions, make_event: F)
    where
        F: FnOnce(GeolocationResult) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(GeolocationOperation::GetCurrentPosition(options))
                .await;
            context.update_app(make_event(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_w3c_codes() {
        assert_eq!(GeolocationError::from_code(1, ""), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(2, ""), GeolocationError::PositionUnavailable);
        assert_eq!(GeolocationError::from_code(3, ""), GeolocationError::Timeout);
        assert!(matches!(
            GeolocationError::from_code(0, "weird"),
            GeolocationError::Unknown { message } if message == "weird"
        ));
    }

    #[test]
    fn test_each_failure_has_distinct_status() {
        let texts = [
            GeolocationError::PermissionDenied.status_text(),
            GeolocationError::PositionUnavailable.status_text(),
            GeolocationError::Timeout.status_text(),
            GeolocationError::Unknown { message: String::new() }.status_text(),
        ];
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_emergency_options() {
        let options = PositionOptions::emergency(10_000);
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.maximum_age_ms, 0);
    }
}
