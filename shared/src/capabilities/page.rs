use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    FakeCall,
    SafetyTips,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageOperation {
    ScrollTo { section: Section },
}

impl Operation for PageOperation {
    type Output = ();
}

pub struct Page<Ev> {
    context: CapabilityContext<PageOperation, Ev>,
}

impl<Ev> Capability<Ev> for Page<Ev> {
    type Operation = PageOperation;
    type MappedSelf<MappedEv> = Page<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Page::new(self.context.map_event(f))
    }
}

impl<Ev> Page<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<PageOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn scroll_to(&self, section: Section) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(PageOperation::ScrollTo { section }).await;
        });
    }
}
