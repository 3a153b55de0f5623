//! Connectivity, battery and exit-guard monitors. None of these own a state
//! machine; they only decide what the notifier and log should say.

use serde::{Deserialize, Serialize};

pub const BACK_ONLINE: &str = "🌐 Back online";
pub const OFFLINE_MODE: &str = "📡 Offline mode - Emergency features still work";
pub const LOW_BATTERY_ADVISORY: &str = "⚠️ Low battery - consider enabling battery saver mode";
pub const EXIT_PROMPT: &str = "SOS is active. Are you sure you want to leave?";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connectivity {
    online: bool,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self { online: true }
    }
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        Self { online }
    }

    /// Records the new state and returns the reassurance toast if it changed.
    pub fn transition(&mut self, online: bool) -> Option<&'static str> {
        if self.online == online {
            return None;
        }
        self.online = online;
        Some(if online { BACK_ONLINE } else { OFFLINE_MODE })
    }

    pub fn is_online(&self) -> bool {
        self.online
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatteryMonitor {
    percent: Option<u8>,
    charging: Option<bool>,
}

impl BatteryMonitor {
    /// Takes a `0.0..=1.0` level and returns the rounded percentage, or `None`
    /// for a nonsensical reading (which is then ignored).
    pub fn update(&mut self, level: f64, charging: Option<bool>) -> Option<u8> {
        if !level.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (level * 100.0).round().clamp(0.0, 100.0) as u8;
        self.percent = Some(percent);
        if charging.is_some() {
            self.charging = charging;
        }
        Some(percent)
    }

    pub fn percent(&self) -> Option<u8> {
        self.percent
    }

    pub fn charging(&self) -> Option<bool> {
        self.charging
    }

    pub fn is_low(&self, threshold_percent: u8) -> bool {
        self.percent.is_some_and(|p| p < threshold_percent)
    }

    /// Display-only advice; nothing switches modes automatically.
    pub fn advisory(&self, threshold_percent: u8) -> Option<&'static str> {
        self.is_low(threshold_percent).then_some(LOW_BATTERY_ADVISORY)
    }
}

/// Text for the leave-page confirmation, present only while SOS is open.
pub fn exit_prompt(sos_active: bool) -> Option<&'static str> {
    sos_active.then_some(EXIT_PROMPT)
}
