use serde::{Deserialize, Serialize};

use crate::activity_log::ActivityLog;
use crate::capabilities::{TimerId, ACTIVITY_LOG_KEY, CONTACTS_KEY};
use crate::config::Config;
use crate::contacts::ContactBook;
use crate::fake_call::FakeCall;
use crate::location::LocationService;
use crate::monitors::{BatteryMonitor, Connectivity};
use crate::toast::Toasts;

/// What the host platform can do, reported once by the shell at start-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlatformFeatures {
    pub geolocation: bool,
    pub clipboard: bool,
    pub vibration: bool,
    pub battery: bool,
    pub service_worker: bool,
    pub online: bool,
}

impl Default for PlatformFeatures {
    fn default() -> Self {
        Self {
            geolocation: false,
            clipboard: false,
            vibration: false,
            battery: false,
            service_worker: false,
            online: true,
        }
    }
}

impl PlatformFeatures {
    /// Everything a modern mobile browser offers.
    pub const fn full() -> Self {
        Self {
            geolocation: true,
            clipboard: true,
            vibration: true,
            battery: true,
            service_worker: true,
            online: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SosModal {
    active: bool,
}

impl SosModal {
    /// Returns `true` if the modal was closed before.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Returns `true` if the modal was open before.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub const fn root_font_px(self) -> u8 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub high_contrast: bool,
    pub text_size: TextSize,
}

/// How far a stored list has got in being read back from local storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// The two JSON arrays kept in local storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoredRecord {
    Contacts,
    ActivityLog,
}

impl StoredRecord {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Contacts => CONTACTS_KEY,
            Self::ActivityLog => ACTIVITY_LOG_KEY,
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub started: bool,
    pub config: Config,
    pub features: PlatformFeatures,

    pub sos: SosModal,
    pub toasts: Toasts,
    pub location: LocationService,
    pub fake_call: FakeCall,

    pub contacts: ContactBook,
    pub contacts_load: LoadState,
    pub activity_log: ActivityLog,
    pub activity_log_load: LoadState,

    pub connectivity: Connectivity,
    pub battery: BatteryMonitor,
    pub accessibility: Accessibility,

    next_timer: u64,
}

impl Model {
    pub fn next_timer_id(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    pub fn load_state(&self, record: StoredRecord) -> LoadState {
        match record {
            StoredRecord::Contacts => self.contacts_load,
            StoredRecord::ActivityLog => self.activity_log_load,
        }
    }

    pub fn set_load_state(&mut self, record: StoredRecord, state: LoadState) {
        match record {
            StoredRecord::Contacts => self.contacts_load = state,
            StoredRecord::ActivityLog => self.activity_log_load = state,
        }
    }

    /// Writes to a list are only safe once its stored copy has been read.
    pub fn is_loaded(&self, record: StoredRecord) -> bool {
        self.load_state(record) == LoadState::Loaded
    }
}
