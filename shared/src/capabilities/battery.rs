use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BatteryReading {
    /// Charge fraction in `0.0..=1.0`, as reported by `BatteryManager.level`.
    pub level: f64,
    pub charging: bool,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum BatteryError {
    #[error("battery status unavailable")]
    Unavailable,

    #[error("battery status failed: {message}")]
    Failed { message: String },
}

pub type BatteryResult = Result<BatteryReading, BatteryError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BatteryOperation {
    ReadStatus,
}

impl Operation for BatteryOperation {
    type Output = BatteryResult;
}

pub struct Battery<Ev> {
    context: CapabilityContext<BatteryOperation, Ev>,
}

impl<Ev> Capability<Ev> for Battery<Ev> {
    type Operation = BatteryOperation;
    type MappedSelf<MappedEv> = Battery<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Battery::new(self.context.map_event(f))
    }
}

impl<Ev> Battery<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<BatteryOperation, Ev>) -> Self {
        Self { context }
    }

    /// One-off read. Later level changes arrive from the shell as events.
    pub fn read_status<F>(&self, make_event: F)
    where
        F: FnOnce(BatteryResult) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context.request_from_shell(BatteryOperation::ReadStatus).await;
            context.update_app(make_event(result));
        });
    }
}
