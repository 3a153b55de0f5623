use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Alternating vibrate/pause durations in milliseconds, as taken by
/// `navigator.vibrate`.
pub const SOS_OPENED_PATTERN: &[u32] = &[200, 100, 200];
pub const INCOMING_CALL_PATTERN: &[u32] = &[500, 200, 500, 200, 500];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HapticsOperation {
    Vibrate { pattern_ms: Vec<u32> },
}

impl Operation for HapticsOperation {
    type Output = ();
}

pub struct Haptics<Ev> {
    context: CapabilityContext<HapticsOperation, Ev>,
}

impl<Ev> Capability<Ev> for Haptics<Ev> {
    type Operation = HapticsOperation;
    type MappedSelf<MappedEv> = Haptics<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Haptics::new(self.context.map_event(f))
    }
}

impl<Ev> Haptics<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<HapticsOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn vibrate(&self, pattern_ms: &[u32]) {
        let context = self.context.clone();
        let pattern_ms = pattern_ms.to_vec();
        self.context.spawn(async move {
            context
                .notify_shell(HapticsOperation::Vibrate { pattern_ms })
                .await;
        });
    }
}
