use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TelephonyOperation {
    /// Hand a `tel:` URI to the platform dialer.
    Dial { uri: String },
}

impl Operation for TelephonyOperation {
    type Output = ();
}

pub fn tel_uri(number: &str) -> String {
    format!("tel:{number}")
}

pub struct Telephony<Ev> {
    context: CapabilityContext<TelephonyOperation, Ev>,
}

impl<Ev> Capability<Ev> for Telephony<Ev> {
    type Operation = TelephonyOperation;
    type MappedSelf<MappedEv> = Telephony<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Telephony::new(self.context.map_event(f))
    }
}

impl<Ev> Telephony<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<TelephonyOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn dial(&self, number: &str) {
        let context = self.context.clone();
        let uri = tel_uri(number);
        self.context.spawn(async move {
            context.notify_shell(TelephonyOperation::Dial { uri }).await;
        });
    }
}
