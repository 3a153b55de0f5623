//! Platform capabilities requested by the core and resolved by the shell.

mod battery;
mod clipboard;
mod dialog;
mod geolocation;
mod haptics;
mod kv;
mod page;
mod telephony;
mod timer;

pub use self::battery::{Battery, BatteryError, BatteryOperation, BatteryReading, BatteryResult};
pub use self::clipboard::{Clipboard, ClipboardError, ClipboardOperation, ClipboardResult};
pub use self::dialog::{Dialog, DialogOperation};
pub use self::geolocation::{
    Geolocation, GeolocationError, GeolocationOperation, GeolocationResult, Position,
    PositionOptions,
};
pub use self::haptics::{Haptics, HapticsOperation, INCOMING_CALL_PATTERN, SOS_OPENED_PATTERN};
pub use self::kv::{
    KeyValue, KvError, KvKey, KvOperation, KvOutput, KvResult, StorageErrorCode, TypedRecord,
    ACTIVITY_LOG_KEY, CONTACTS_KEY, MAX_VALUE_SIZE,
};
pub use self::page::{Page, PageOperation, Section};
pub use self::telephony::{tel_uri, Telephony, TelephonyOperation};
pub use self::timer::{Timer, TimerId, TimerOperation, TimerOutput};

// Crux's built-in Render covers view updates; no custom wrapper needed.
pub use crux_core::render::Render;

use crate::event::Event;
// Referenced by the `Effect` derive.
#[allow(unused_imports)]
use crate::App;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub key_value: KeyValue<Event>,
    pub timer: Timer<Event>,
    pub geolocation: Geolocation<Event>,
    pub clipboard: Clipboard<Event>,
    pub haptics: Haptics<Event>,
    pub telephony: Telephony<Event>,
    pub dialog: Dialog<Event>,
    pub page: Page<Event>,
    pub battery: Battery<Event>,
}
