#![allow(dead_code)]

use crux_core::testing::AppTester;
use crux_core::Request;
use safeshield_core::capabilities::{
    BatteryOperation, ClipboardOperation, DialogOperation, GeolocationOperation,
    HapticsOperation, KvOperation, KvOutput, PageOperation, TelephonyOperation, TimerOperation,
    TimerOutput,
};
use safeshield_core::{App, Effect, Event, Model, PlatformFeatures};

pub type Tester = AppTester<App, Effect>;

/// Effects from one update, split by capability.
#[derive(Default)]
pub struct Effects {
    pub renders: usize,
    pub kv: Vec<Request<KvOperation>>,
    pub timers: Vec<Request<TimerOperation>>,
    pub geolocation: Vec<Request<GeolocationOperation>>,
    pub clipboard: Vec<Request<ClipboardOperation>>,
    pub haptics: Vec<Request<HapticsOperation>>,
    pub telephony: Vec<Request<TelephonyOperation>>,
    pub dialog: Vec<Request<DialogOperation>>,
    pub page: Vec<Request<PageOperation>>,
    pub battery: Vec<Request<BatteryOperation>>,
}

impl Effects {
    pub fn sort(effects: Vec<Effect>) -> Self {
        let mut sorted = Self::default();
        for effect in effects {
            match effect {
                Effect::Render(_) => sorted.renders += 1,
                Effect::KeyValue(r) => sorted.kv.push(r),
                Effect::Timer(r) => sorted.timers.push(r),
                Effect::Geolocation(r) => sorted.geolocation.push(r),
                Effect::Clipboard(r) => sorted.clipboard.push(r),
                Effect::Haptics(r) => sorted.haptics.push(r),
                Effect::Telephony(r) => sorted.telephony.push(r),
                Effect::Dialog(r) => sorted.dialog.push(r),
                Effect::Page(r) => sorted.page.push(r),
                Effect::Battery(r) => sorted.battery.push(r),
            }
        }
        sorted
    }

    /// Timer started for `millis`, if any.
    pub fn timer_for(&mut self, millis: u64) -> Option<Request<TimerOperation>> {
        let index = self.timers.iter().position(|r| {
            matches!(r.operation, TimerOperation::Start { millis: m, .. } if m == millis)
        })?;
        Some(self.timers.remove(index))
    }

    /// Last `Set` written under `key`, decoded as JSON.
    pub fn last_write(&self, key: &str) -> Option<serde_json::Value> {
        self.kv.iter().rev().find_map(|r| match &r.operation {
            KvOperation::Set { key: k, value } if k.as_str() == key => {
                serde_json::from_slice(value).ok()
            }
            _ => None,
        })
    }
}

/// Runs `event` and feeds any events produced by capabilities straight back in.
pub fn update(app: &Tester, model: &mut Model, event: Event) -> Effects {
    let update = app.update(event, model);
    let mut effects = Effects::sort(update.effects);
    for event in update.events {
        let more = self::update(app, model, event);
        effects.merge(more);
    }
    effects
}

impl Effects {
    fn merge(&mut self, other: Effects) {
        self.renders += other.renders;
        self.kv.extend(other.kv);
        self.timers.extend(other.timers);
        self.geolocation.extend(other.geolocation);
        self.clipboard.extend(other.clipboard);
        self.haptics.extend(other.haptics);
        self.telephony.extend(other.telephony);
        self.dialog.extend(other.dialog);
        self.page.extend(other.page);
        self.battery.extend(other.battery);
    }
}

/// Resolves `request` and applies the resulting events to the model.
pub fn resolve<Op>(app: &Tester, model: &mut Model, request: &mut Request<Op>, output: Op::Output) -> Effects
where
    Op: crux_core::capability::Operation,
{
    let update = app.resolve(request, output).expect("request should be resolvable");
    let mut effects = Effects::sort(update.effects);
    for event in update.events {
        effects.merge(self::update(app, model, event));
    }
    effects
}

/// Starts the app with `features` and answers both storage loads with
/// `contacts` / `log` (raw JSON, `None` for a missing key).
pub fn start_with(
    features: PlatformFeatures,
    contacts: Option<&str>,
    log: Option<&str>,
) -> (Tester, Model, Effects) {
    let app = Tester::default();
    let mut model = Model::default();
    let mut effects = update(
        &app,
        &mut model,
        Event::AppStarted {
            features,
            config: None,
        },
    );

    let loads: Vec<_> = effects.kv.drain(..).collect();
    for mut request in loads {
        let stored = match &request.operation {
            KvOperation::Get { key } if key.as_str() == "emergencyContacts" => contacts,
            KvOperation::Get { key } if key.as_str() == "activityLogs" => log,
            _ => panic!("unexpected storage request during start"),
        };
        let output = KvOutput::Value(stored.map(|s| s.as_bytes().to_vec()));
        let more = resolve(&app, &mut model, &mut request, Ok(output));
        effects.merge(more);
    }
    (app, model, effects)
}

pub fn start() -> (Tester, Model) {
    let (app, model, _) = start_with(PlatformFeatures::full(), None, None);
    (app, model)
}

/// Lets a started timer fire.
pub fn fire(app: &Tester, model: &mut Model, request: &mut Request<TimerOperation>) -> Effects {
    let TimerOperation::Start { id, .. } = request.operation else {
        panic!("only started timers can fire");
    };
    resolve(app, model, request, TimerOutput::Fired { id })
}
