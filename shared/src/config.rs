use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 4_000;
pub const DEFAULT_LOCATION_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 100;
pub const DEFAULT_LOW_BATTERY_PERCENT: u8 = 20;

/// Pause between showing the "calling" toast and asking for confirmation.
/// Not part of [`Config`]: the delay plus the prompt guard against a panicked
/// single tap placing a real call.
pub const DIAL_CONFIRM_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("low battery threshold {0}% is above 100%")]
    PercentOutOfRange(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub toast_duration_ms: u64,
    pub location_timeout_ms: u64,
    pub activity_log_capacity: usize,
    pub low_battery_percent: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            location_timeout_ms: DEFAULT_LOCATION_TIMEOUT_MS,
            activity_log_capacity: DEFAULT_ACTIVITY_LOG_CAPACITY,
            low_battery_percent: DEFAULT_LOW_BATTERY_PERCENT,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Zero { field: "toast_duration_ms" });
        }
        if self.location_timeout_ms == 0 {
            return Err(ConfigError::Zero { field: "location_timeout_ms" });
        }
        if self.activity_log_capacity == 0 {
            return Err(ConfigError::Zero { field: "activity_log_capacity" });
        }
        if self.low_battery_percent > 100 {
            return Err(ConfigError::PercentOutOfRange(self.low_battery_percent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"toast_duration_ms": 2500}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 2_500);
        assert_eq!(config.activity_log_capacity, DEFAULT_ACTIVITY_LOG_CAPACITY);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = Config {
            activity_log_capacity: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zero { field: "activity_log_capacity" })
        );
    }

    #[test]
    fn test_rejects_percent_over_100() {
        let config = Config {
            low_battery_percent: 120,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PercentOutOfRange(120)));
    }
}
