use serde::{Deserialize, Serialize};

use crate::activity_log::Details;
use crate::capabilities::{BatteryResult, ClipboardResult, GeolocationResult, KvResult, TimerOutput};
use crate::config::Config;
use crate::contacts::ContactId;
use crate::dispatch::EmergencyCall;
use crate::model::{PlatformFeatures, StoredRecord, TextSize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum Event {
    #[default]
    Noop,

    // --- Lifecycle ---
    AppStarted {
        features: PlatformFeatures,
        #[serde(default)]
        config: Option<Config>,
    },

    // --- SOS modal ---
    OpenSos,
    CloseSos,
    SosBackdropClicked,
    KeyPressed {
        key: String,
    },

    // --- Emergency dispatch ---
    TriggerEmergencyCall {
        service: String,
    },
    #[serde(skip)]
    DialDelayElapsed {
        call: EmergencyCall,
        output: TimerOutput,
    },
    #[serde(skip)]
    DialConfirmed {
        call: EmergencyCall,
        confirmed: bool,
    },

    // --- Location ---
    ShareLocation,
    #[serde(skip)]
    PositionResolved(GeolocationResult),
    #[serde(skip)]
    LinkCopied(ClipboardResult),

    // --- Fake call & navigation ---
    ShowFakeCall,
    TriggerFakeCall {
        caller: String,
    },
    FakeCallDismissed,
    ShowSafetyTips,

    // --- Toasts ---
    ShowToast {
        message: String,
    },
    DismissToast,
    #[serde(skip)]
    ToastTimer(TimerOutput),

    // --- Persistence ---
    AddContact {
        name: String,
        phone: String,
    },
    RemoveContact {
        id: ContactId,
    },
    LogAction {
        action: String,
        #[serde(default)]
        details: Details,
    },
    #[serde(skip)]
    Loaded {
        record: StoredRecord,
        result: KvResult,
    },
    #[serde(skip)]
    Persisted {
        record: StoredRecord,
        result: KvResult,
    },

    // --- Ambient monitors ---
    ConnectivityChanged {
        online: bool,
    },
    #[serde(skip)]
    BatteryRead(BatteryResult),
    BatteryLevelChanged {
        level: f64,
    },

    // --- Accessibility ---
    ToggleHighContrast,
    AdjustTextSize(TextSize),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted { .. } => "app_started",
            Self::OpenSos => "open_sos",
            Self::CloseSos => "close_sos",
            Self::SosBackdropClicked => "sos_backdrop_clicked",
            Self::KeyPressed { .. } => "key_pressed",
            Self::TriggerEmergencyCall { .. } => "trigger_emergency_call",
            Self::DialDelayElapsed { .. } => "dial_delay_elapsed",
            Self::DialConfirmed { .. } => "dial_confirmed",
            Self::ShareLocation => "share_location",
            Self::PositionResolved(_) => "position_resolved",
            Self::LinkCopied(_) => "link_copied",
            Self::ShowFakeCall => "show_fake_call",
            Self::TriggerFakeCall { .. } => "trigger_fake_call",
            Self::FakeCallDismissed => "fake_call_dismissed",
            Self::ShowSafetyTips => "show_safety_tips",
            Self::ShowToast { .. } => "show_toast",
            Self::DismissToast => "dismiss_toast",
            Self::ToastTimer(_) => "toast_timer",
            Self::AddContact { .. } => "add_contact",
            Self::RemoveContact { .. } => "remove_contact",
            Self::LogAction { .. } => "log_action",
            Self::Loaded { .. } => "loaded",
            Self::Persisted { .. } => "persisted",
            Self::ConnectivityChanged { .. } => "connectivity_changed",
            Self::BatteryRead(_) => "battery_read",
            Self::BatteryLevelChanged { .. } => "battery_level_changed",
            Self::ToggleHighContrast => "toggle_high_contrast",
            Self::AdjustTextSize(_) => "adjust_text_size",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::OpenSos
                | Self::CloseSos
                | Self::SosBackdropClicked
                | Self::KeyPressed { .. }
                | Self::TriggerEmergencyCall { .. }
                | Self::ShareLocation
                | Self::ShowFakeCall
                | Self::TriggerFakeCall { .. }
                | Self::FakeCallDismissed
                | Self::ShowSafetyTips
                | Self::DismissToast
                | Self::AddContact { .. }
                | Self::RemoveContact { .. }
                | Self::ToggleHighContrast
                | Self::AdjustTextSize(_)
        )
    }

    /// Events that never change what the shell displays.
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        matches!(self, Self::Noop | Self::LinkCopied(_))
    }
}
