mod common;

use common::{start, update};
use crux_core::App as _;
use safeshield_core::capabilities::{DialogOperation, TelephonyOperation};
use safeshield_core::{App, Event};

fn trigger(service: &str) -> Event {
    Event::TriggerEmergencyCall {
        service: service.to_string(),
    }
}

#[test]
fn fire_waits_then_confirms_then_dials_101() {
    let (app, mut model) = start();
    update(&app, &mut model, Event::OpenSos);

    let mut effects = update(&app, &mut model, trigger("Fire"));

    let view = App.view(&model);
    assert_eq!(view.toast.as_deref(), Some("🚒 Calling Fire Brigade (101)..."));
    assert!(!view.sos_active);
    // Nothing is dialed or asked straight away.
    assert!(effects.telephony.is_empty());
    assert!(effects.dialog.is_empty());

    let mut delay = effects.timer_for(1_000).expect("dial delay timer");
    let mut effects = common::fire(&app, &mut model, &mut delay);

    assert_eq!(effects.dialog.len(), 1);
    let mut prompt = effects.dialog.remove(0);
    assert_eq!(
        prompt.operation,
        DialogOperation::Confirm {
            message: "Do you want to call Fire (101)?".to_string()
        }
    );

    let effects = common::resolve(&app, &mut model, &mut prompt, true);
    assert_eq!(effects.telephony.len(), 1);
    assert_eq!(
        effects.telephony[0].operation,
        TelephonyOperation::Dial {
            uri: "tel:101".to_string()
        }
    );
}

#[test]
fn declining_the_prompt_never_dials() {
    let (app, mut model) = start();
    let mut effects = update(&app, &mut model, trigger("Police"));
    let mut delay = effects.timer_for(1_000).expect("dial delay timer");
    let mut effects = common::fire(&app, &mut model, &mut delay);
    let mut prompt = effects.dialog.remove(0);

    let effects = common::resolve(&app, &mut model, &mut prompt, false);
    assert!(effects.telephony.is_empty());
}

#[test]
fn unknown_service_falls_back_to_100() {
    let (app, mut model) = start();
    let mut effects = update(&app, &mut model, trigger("UnknownService"));
    assert_eq!(
        App.view(&model).toast.as_deref(),
        Some("📞 Calling Emergency Services...")
    );

    let mut delay = effects.timer_for(1_000).expect("dial delay timer");
    let mut effects = common::fire(&app, &mut model, &mut delay);
    let mut prompt = effects.dialog.remove(0);
    let effects = common::resolve(&app, &mut model, &mut prompt, true);
    assert_eq!(
        effects.telephony[0].operation,
        TelephonyOperation::Dial {
            uri: "tel:100".to_string()
        }
    );
}

#[test]
fn emergency_call_is_logged() {
    let (app, mut model) = start();
    let effects = update(&app, &mut model, trigger("Ambulance"));

    let log = effects.last_write("activityLogs").expect("log persisted");
    let last = log.as_array().and_then(|entries| entries.last()).cloned().unwrap();
    assert_eq!(last["action"], "emergency_call");
    assert_eq!(last["details"]["number"], "108");
}
