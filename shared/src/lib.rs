// lib.rs - SafeShield shared core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

pub mod activity_log;
pub mod capabilities;
pub mod config;
pub mod contacts;
pub mod dispatch;
pub mod event;
pub mod fake_call;
pub mod location;
pub mod model;
pub mod monitors;
pub mod toast;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use contacts::{ContactId, EmergencyContact};
pub use crux_core::App as CruxApp;
pub use event::Event;
pub use model::{Model, PlatformFeatures, TextSize};

use crate::capabilities::{BatteryError, GeolocationError, KvError};
use crate::config::ConfigError;
use crate::contacts::ContactError;

pub const LOCATION_REQUESTED_TOAST: &str = "📍 Requesting location access...";
pub const LOCATION_SHARED_TOAST: &str = "✅ Location shared with trusted contacts!";
pub const FAKE_CALL_READY_TOAST: &str = "📞 Fake call feature ready";
pub const SAFETY_TIPS_TOAST: &str = "💡 View essential safety tips below";
pub const HIGH_CONTRAST_TOAST: &str = "🎨 High contrast mode toggled";
pub const STORAGE_FAILED_TOAST: &str = "⚠️ Could not save to this device";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Geolocation,
    Clipboard,
    Vibration,
    Battery,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Geolocation => "GPS",
            Self::Clipboard => "Clipboard",
            Self::Vibration => "Vibration",
            Self::Battery => "Battery status",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    CapabilityAbsent,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Storage,
    Validation,
    Unknown,
}

/// Every failure a user action can run into. None is fatal: each ends in a
/// toast (and, for location, a status-line update) and nothing else.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    #[error("{0} not available on this device")]
    Unsupported(Feature),

    #[error(transparent)]
    Location(#[from] GeolocationError),

    #[error(transparent)]
    Storage(#[from] KvError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Battery(#[from] BatteryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unsupported(_) | Self::Battery(BatteryError::Unavailable) => {
                ErrorKind::CapabilityAbsent
            }
            Self::Location(GeolocationError::PermissionDenied) => ErrorKind::PermissionDenied,
            Self::Location(GeolocationError::PositionUnavailable) => ErrorKind::PositionUnavailable,
            Self::Location(GeolocationError::Timeout) => ErrorKind::Timeout,
            Self::Location(GeolocationError::Unknown { .. }) | Self::Battery(_) => ErrorKind::Unknown,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Contact(_) | Self::Config(_) => ErrorKind::Validation,
        }
    }

    /// Toast text for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unsupported(feature) => format!("❌ {feature} not available on this device"),
            Self::Location(e) => e.status_text().to_string(),
            Self::Storage(_) => STORAGE_FAILED_TOAST.to_string(),
            Self::Contact(e) => format!("⚠️ {e}"),
            Self::Battery(_) | Self::Config(_) => format!("⚠️ {self}"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationView {
    pub status: String,
    /// Hex colour for the status dot.
    pub status_color: String,
    pub map_label: Option<String>,
    pub pin_bouncing: bool,
    pub share_link: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FakeCallView {
    pub caller: Option<String>,
    pub status: Option<String>,
    pub ringing: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub sos_active: bool,
    pub scroll_locked: bool,
    pub toast: Option<String>,
    pub location: LocationView,
    pub fake_call: FakeCallView,
    pub contacts: Vec<EmergencyContact>,
    pub activity_log_len: usize,
    pub online: bool,
    pub battery_percent: Option<u8>,
    pub battery_advisory: Option<String>,
    /// `beforeunload` text; `None` lets navigation proceed.
    pub exit_prompt: Option<String>,
    pub high_contrast: bool,
    pub root_font_px: u8,
}

pub mod app {
    use chrono::Utc;
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json::Value;
    use tracing::{debug, info, instrument, warn};

    use super::{
        AppError, ErrorKind, Feature, FakeCallView, LocationView, ViewModel, FAKE_CALL_READY_TOAST,
        HIGH_CONTRAST_TOAST, LOCATION_REQUESTED_TOAST, LOCATION_SHARED_TOAST, SAFETY_TIPS_TOAST,
    };
    use crate::activity_log::{ActivityLogEntry, Details};
    use crate::capabilities::{
        Capabilities, GeolocationResult, KvError, KvKey, KvResult, PositionOptions, Section,
        TimerOutput, TypedRecord, INCOMING_CALL_PATTERN, SOS_OPENED_PATTERN,
    };
    use crate::config::{Config, DIAL_CONFIRM_DELAY_MS};
    use crate::contacts::EmergencyContact;
    use crate::dispatch::EmergencyCall;
    use crate::event::Event;
    use crate::location::RequestStart;
    use crate::model::{LoadState, Model, PlatformFeatures, StoredRecord};
    use crate::monitors::{self, Connectivity};

    fn details<const N: usize>(pairs: [(&str, Value); N]) -> Details {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[derive(Default)]
    pub struct App;

    impl App {
        fn show_toast(model: &mut Model, caps: &Capabilities, message: impl Into<String>) {
            let message = message.into();
            debug!(%message, "toast");

            let timer = model.next_timer_id();
            if let Some(stale) = model.toasts.show(message, timer) {
                caps.timer.cancel(stale);
            }
            caps.timer
                .start(timer, model.config.toast_duration_ms, Event::ToastTimer);
        }

        fn report(model: &mut Model, caps: &Capabilities, error: &AppError) {
            warn!(kind = ?error.kind(), error = %error, "action failed");
            Self::show_toast(model, caps, error.user_message());
        }

        /// Failures the user never asked about: logged, no toast.
        fn degrade(error: &AppError) {
            if error.kind() == ErrorKind::CapabilityAbsent {
                debug!(error = %error, "skipped");
            } else {
                warn!(kind = ?error.kind(), error = %error, "degraded");
            }
        }

        fn open_sos(model: &mut Model, caps: &Capabilities) {
            if !model.sos.open() {
                return;
            }
            info!("SOS modal opened");
            if model.features.vibration {
                caps.haptics.vibrate(SOS_OPENED_PATTERN);
            } else {
                Self::degrade(&AppError::Unsupported(Feature::Vibration));
            }
            Self::record(model, caps, "sos_opened", Details::new());
        }

        fn close_sos(model: &mut Model) {
            if model.sos.close() {
                info!("SOS modal closed");
            }
        }

        fn record(model: &mut Model, caps: &Capabilities, action: &str, details: Details) {
            let entry = ActivityLogEntry::new(action, details, Utc::now());
            debug!(action = %entry.action, "activity recorded");
            let evicted = model.activity_log.record(entry);
            if evicted > 0 {
                debug!(evicted, "activity log at capacity");
            }
            Self::persist(model, caps, StoredRecord::ActivityLog);
        }

        /// Writes one stored list back in full. Held back until that list has
        /// been read, so a write can never clobber data from an earlier
        /// session. A list whose read failed is read again first.
        #[instrument(skip(model, caps))]
        fn persist(model: &mut Model, caps: &Capabilities, record: StoredRecord) {
            match model.load_state(record) {
                LoadState::Loaded => {}
                LoadState::Loading => {
                    debug!("not loaded yet; write deferred");
                    return;
                }
                LoadState::Unloaded => {
                    debug!("stored copy unread; retrying read before writing");
                    Self::load(model, caps, record);
                    return;
                }
            }

            let written = match record {
                StoredRecord::Contacts => {
                    Self::write(caps, record, &model.contacts.list().to_vec())
                }
                StoredRecord::ActivityLog => {
                    Self::write(caps, record, &model.activity_log.to_vec())
                }
            };
            if let Err(e) = written {
                Self::write_failed(model, caps, record, e);
            }
        }

        /// Contacts are saved on request, so losing them is worth a toast.
        /// The activity log is background bookkeeping and must not displace
        /// the toast of the action that produced it.
        fn write_failed(model: &mut Model, caps: &Capabilities, record: StoredRecord, error: KvError) {
            match record {
                StoredRecord::Contacts => Self::report(model, caps, &error.into()),
                StoredRecord::ActivityLog => {
                    warn!(error = %error, "activity log could not be saved");
                }
            }
        }

        fn write<T>(caps: &Capabilities, record: StoredRecord, value: &T) -> Result<(), KvError>
        where
            T: Serialize + DeserializeOwned,
        {
            let typed = TypedRecord::<T>::new(record.key())?;
            let bytes = typed.encode(value)?;
            caps.key_value
                .set(typed.key().clone(), bytes, move |result| Event::Persisted { record, result });
            Ok(())
        }

        #[instrument(skip(model, caps))]
        fn load(model: &mut Model, caps: &Capabilities, record: StoredRecord) {
            match KvKey::new(record.key()) {
                Ok(key) => {
                    model.set_load_state(record, LoadState::Loading);
                    caps.key_value
                        .get(key, move |result| Event::Loaded { record, result });
                }
                Err(e) => warn!(error = %e, "could not request stored data"),
            }
        }

        /// Decodes a stored list. A missing key is an empty list, and so is
        /// corrupt JSON, which would never parse on a later read either. Any
        /// other failure means the stored copy was not seen at all.
        fn decode<T>(record: StoredRecord, result: KvResult) -> Result<Vec<T>, KvError>
        where
            T: Serialize + DeserializeOwned,
        {
            let decoded = TypedRecord::<Vec<T>>::new(record.key())
                .and_then(|typed| result.and_then(|output| typed.decode(output)));
            match decoded {
                Ok(items) => Ok(items.unwrap_or_default()),
                Err(e @ KvError::Serialization { .. }) => {
                    warn!(?record, error = %e, "stored data corrupt; starting empty");
                    Ok(Vec::new())
                }
                Err(e) => Err(e),
            }
        }

        fn on_loaded(model: &mut Model, caps: &Capabilities, record: StoredRecord, result: KvResult) {
            if model.is_loaded(record) {
                debug!(?record, "duplicate load result ignored");
                return;
            }

            let decoded = match record {
                StoredRecord::Contacts => {
                    Self::decode::<EmergencyContact>(record, result).map(|persisted| {
                        info!(count = persisted.len(), "emergency contacts loaded");
                        let pending = !model.contacts.is_empty();
                        model.contacts.merge_loaded(persisted);
                        pending
                    })
                }
                StoredRecord::ActivityLog => {
                    Self::decode::<ActivityLogEntry>(record, result).map(|persisted| {
                        debug!(count = persisted.len(), "activity log loaded");
                        let pending = !model.activity_log.is_empty();
                        model.activity_log.merge_loaded(persisted);
                        pending
                    })
                }
            };

            let pending_writes = match decoded {
                Ok(pending) => {
                    model.set_load_state(record, LoadState::Loaded);
                    pending
                }
                Err(e) => {
                    warn!(?record, error = %e, "stored data could not be read; writes held back");
                    model.set_load_state(record, LoadState::Unloaded);
                    return;
                }
            };

            if pending_writes {
                Self::persist(model, caps, record);
            }
        }

        fn on_started(
            model: &mut Model,
            caps: &Capabilities,
            features: PlatformFeatures,
            config: Option<Config>,
        ) {
            if model.started {
                warn!("duplicate start ignored");
                return;
            }
            model.started = true;

            if let Some(config) = config {
                match config.validate() {
                    Ok(()) => model.config = config,
                    Err(e) => {
                        warn!("invalid config; using defaults");
                        Self::degrade(&e.into());
                    }
                }
            }
            model.activity_log.set_capacity(model.config.activity_log_capacity);

            model.features = features;
            model.connectivity = Connectivity::new(features.online);
            model.location.init(features.geolocation);

            info!(
                online = features.online,
                geolocation = features.geolocation,
                "SafeShield core started"
            );
            if features.service_worker {
                info!("service worker support detected; offline caching not enabled");
            }

            if features.battery {
                caps.battery.read_status(Event::BatteryRead);
            } else {
                Self::degrade(&AppError::Unsupported(Feature::Battery));
            }

            for record in [StoredRecord::Contacts, StoredRecord::ActivityLog] {
                Self::load(model, caps, record);
            }
        }

        fn trigger_emergency_call(model: &mut Model, caps: &Capabilities, service: &str) {
            let call = EmergencyCall::resolve(service);
            info!(service = %call.service, number = %call.number, "emergency call triggered");

            Self::show_toast(model, caps, call.message.clone());
            Self::close_sos(model);
            Self::record(
                model,
                caps,
                "emergency_call",
                details([
                    ("service", Value::from(call.service.clone())),
                    ("number", Value::from(call.number.clone())),
                ]),
            );

            // Never dial straight from the tap: wait, then ask.
            let timer = model.next_timer_id();
            caps.timer.start(timer, DIAL_CONFIRM_DELAY_MS, move |output| {
                Event::DialDelayElapsed { call, output }
            });
        }

        fn share_location(model: &mut Model, caps: &Capabilities) {
            match model.location.begin(model.features.geolocation) {
                RequestStart::Unsupported => {
                    Self::report(model, caps, &AppError::Unsupported(Feature::Geolocation));
                }
                RequestStart::AlreadyInFlight => {
                    debug!("location request already in flight");
                }
                RequestStart::Started => {
                    Self::show_toast(model, caps, LOCATION_REQUESTED_TOAST);
                    let options = PositionOptions::emergency(model.config.location_timeout_ms);
                    caps.geolocation
                        .get_current_position(options, Event::PositionResolved);
                }
            }
        }

        fn on_position(model: &mut Model, caps: &Capabilities, result: GeolocationResult) {
            match model.location.complete(result) {
                Ok(shared) => {
                    Self::show_toast(model, caps, LOCATION_SHARED_TOAST);
                    Self::close_sos(model);
                    Self::record(
                        model,
                        caps,
                        "location_shared",
                        details([("accuracy_m", Value::from(shared.accuracy_m))]),
                    );

                    if let Some(link) = shared.link {
                        info!(%link, "map link ready");
                        if model.features.clipboard {
                            caps.clipboard.write_text(link, Event::LinkCopied);
                        } else {
                            Self::degrade(&AppError::Unsupported(Feature::Clipboard));
                        }
                    }
                }
                Err(e) => {
                    Self::record(
                        model,
                        caps,
                        "location_failed",
                        details([("reason", Value::from(e.to_string()))]),
                    );
                    Self::report(model, caps, &e.into());
                }
            }
        }

        fn apply_battery(model: &mut Model, level: f64, charging: Option<bool>) {
            let Some(percent) = model.battery.update(level, charging) else {
                warn!(level, "ignoring invalid battery level");
                return;
            };
            info!(level = percent, "battery level");
            if model.battery.is_low(model.config.low_battery_percent) {
                warn!(level = percent, "low battery - consider enabling battery saver mode");
            }
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let event_name = event.name();
            if event.is_user_initiated() {
                info!(event = event_name, "user action");
            } else {
                debug!(event = event_name, "update");
            }
            let quiet = event.is_quiet();

            match event {
                Event::Noop => {}

                Event::AppStarted { features, config } => {
                    Self::on_started(model, caps, features, config);
                }

                Event::OpenSos => Self::open_sos(model, caps),

                Event::CloseSos | Event::SosBackdropClicked => Self::close_sos(model),

                Event::KeyPressed { key } => match key.as_str() {
                    "s" | "S" if !model.sos.is_active() => Self::open_sos(model, caps),
                    "Escape" => Self::close_sos(model),
                    _ => {}
                },

                Event::TriggerEmergencyCall { service } => {
                    Self::trigger_emergency_call(model, caps, &service);
                }

                Event::DialDelayElapsed { call, output } => match output {
                    TimerOutput::Fired { .. } => {
                        let prompt = call.confirmation_prompt();
                        caps.dialog
                            .confirm(prompt, move |confirmed| Event::DialConfirmed { call, confirmed });
                    }
                    TimerOutput::Cancelled { id } => {
                        warn!(%id, service = %call.service, "dial timer cancelled by shell");
                    }
                },

                Event::DialConfirmed { call, confirmed } => {
                    if confirmed {
                        info!(service = %call.service, number = %call.number, "dialing");
                        caps.telephony.dial(&call.number);
                    } else {
                        info!(service = %call.service, "call declined at confirmation");
                    }
                }

                Event::ShareLocation => Self::share_location(model, caps),

                Event::PositionResolved(result) => Self::on_position(model, caps, result),

                Event::LinkCopied(result) => match result {
                    Ok(()) => debug!("location link copied to clipboard"),
                    Err(e) => debug!(error = %e, "clipboard write failed"),
                },

                Event::ShowFakeCall => {
                    Self::show_toast(model, caps, FAKE_CALL_READY_TOAST);
                    caps.page.scroll_to(Section::FakeCall);
                    Self::close_sos(model);
                }

                Event::TriggerFakeCall { caller } => {
                    info!(%caller, "fake call triggered");
                    model.fake_call.ring(caller.clone());
                    if model.features.vibration {
                        caps.haptics.vibrate(INCOMING_CALL_PATTERN);
                    } else {
                        Self::degrade(&AppError::Unsupported(Feature::Vibration));
                    }
                    Self::show_toast(model, caps, format!("📱 Incoming call from {caller}"));
                    Self::record(
                        model,
                        caps,
                        "fake_call",
                        details([("caller", Value::from(caller))]),
                    );
                }

                Event::FakeCallDismissed => model.fake_call.dismiss(),

                Event::ShowSafetyTips => {
                    caps.page.scroll_to(Section::SafetyTips);
                    Self::show_toast(model, caps, SAFETY_TIPS_TOAST);
                    Self::close_sos(model);
                }

                Event::ShowToast { message } => Self::show_toast(model, caps, message),

                Event::DismissToast => {
                    if let Some(timer) = model.toasts.dismiss() {
                        caps.timer.cancel(timer);
                    }
                }

                Event::ToastTimer(output) => {
                    if let TimerOutput::Fired { id } = output {
                        if !model.toasts.expire(id) {
                            debug!(%id, "stale toast timer");
                        }
                    }
                }

                Event::AddContact { name, phone } => {
                    match model.contacts.add(&name, &phone, Utc::now().timestamp_millis()) {
                        Ok(id) => {
                            info!(%id, "emergency contact added");
                            Self::persist(model, caps, StoredRecord::Contacts);
                            Self::show_toast(model, caps, format!("✅ Added emergency contact: {}", name.trim()));
                            Self::record(
                                model,
                                caps,
                                "contact_added",
                                details([("id", Value::from(id.0))]),
                            );
                        }
                        Err(e) => Self::report(model, caps, &e.into()),
                    }
                }

                Event::RemoveContact { id } => {
                    let removed = model.contacts.remove(id);
                    info!(%id, removed, "emergency contact removed");
                    if removed > 0 {
                        Self::persist(model, caps, StoredRecord::Contacts);
                        Self::record(
                            model,
                            caps,
                            "contact_removed",
                            details([("id", Value::from(id.0))]),
                        );
                    }
                }

                Event::LogAction { action, details } => {
                    Self::record(model, caps, &action, details);
                }

                Event::Loaded { record, result } => Self::on_loaded(model, caps, record, result),

                Event::Persisted { record, result } => match result {
                    Ok(_) => debug!(?record, "persisted"),
                    Err(e) => Self::write_failed(model, caps, record, e),
                },

                Event::ConnectivityChanged { online } => {
                    if let Some(message) = model.connectivity.transition(online) {
                        if online {
                            info!("network connection restored");
                        } else {
                            warn!("network connection lost; operating in offline mode");
                        }
                        Self::show_toast(model, caps, message);
                    }
                }

                Event::BatteryRead(result) => match result {
                    Ok(reading) => Self::apply_battery(model, reading.level, Some(reading.charging)),
                    Err(e) => Self::degrade(&e.into()),
                },

                Event::BatteryLevelChanged { level } => Self::apply_battery(model, level, None),

                Event::ToggleHighContrast => {
                    model.accessibility.high_contrast = !model.accessibility.high_contrast;
                    Self::show_toast(model, caps, HIGH_CONTRAST_TOAST);
                }

                Event::AdjustTextSize(size) => {
                    model.accessibility.text_size = size;
                    Self::show_toast(model, caps, format!("📝 Text size: {}", size.label()));
                }
            }

            if !quiet {
                caps.render.render();
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let location = &model.location;
            let sos_active = model.sos.is_active();

            ViewModel {
                sos_active,
                scroll_locked: sos_active,
                toast: model.toasts.visible().map(str::to_string),
                location: LocationView {
                    status: location.status().text.clone(),
                    status_color: location.status().tone.color().to_string(),
                    map_label: location.map_label(),
                    pin_bouncing: location.pin_bouncing(),
                    share_link: location.share_link().map(str::to_string),
                },
                fake_call: FakeCallView {
                    caller: model.fake_call.caller().map(str::to_string),
                    status: model.fake_call.status().map(str::to_string),
                    ringing: model.fake_call.is_ringing(),
                },
                contacts: model.contacts.list().to_vec(),
                activity_log_len: model.activity_log.len(),
                online: model.connectivity.is_online(),
                battery_percent: model.battery.percent(),
                battery_advisory: model
                    .battery
                    .advisory(model.config.low_battery_percent)
                    .map(str::to_string),
                exit_prompt: monitors::exit_prompt(sos_active).map(str::to_string),
                high_contrast: model.accessibility.high_contrast,
                root_font_px: model.accessibility.text_size.root_font_px(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::StorageErrorCode;
    use crate::config::Config;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AppError::Unsupported(Feature::Geolocation).kind(),
            ErrorKind::CapabilityAbsent
        );
        assert_eq!(
            AppError::from(GeolocationError::PermissionDenied).kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(AppError::from(GeolocationError::Timeout).kind(), ErrorKind::Timeout);
        assert_eq!(
            AppError::from(KvError::storage(StorageErrorCode::Unavailable, "private mode")).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::Unsupported(Feature::Geolocation).user_message(),
            "❌ GPS not available on this device"
        );
        assert_eq!(
            AppError::from(GeolocationError::PositionUnavailable).user_message(),
            "❌ Location information unavailable"
        );
        assert_eq!(
            AppError::from(ContactError::MissingName).user_message(),
            "⚠️ contact name is required"
        );
    }

    #[test]
    fn test_background_failures_are_classified() {
        assert_eq!(
            AppError::from(BatteryError::Unavailable).kind(),
            ErrorKind::CapabilityAbsent
        );
        let invalid = Config {
            toast_duration_ms: 0,
            ..Config::default()
        };
        let error = AppError::from(invalid.validate().unwrap_err());
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(
            AppError::Unsupported(Feature::Clipboard).to_string(),
            "Clipboard not available on this device"
        );
    }
}
