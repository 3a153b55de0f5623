use serde::{Deserialize, Serialize};

pub const INCOMING_STATUS: &str = "Incoming Call...";

/// Simulated incoming call used as a social exit. Stays ringing until the
/// shell reports it dismissed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FakeCall {
    caller: Option<String>,
    status: Option<String>,
    ringing: bool,
}

impl FakeCall {
    pub fn ring(&mut self, caller: impl Into<String>) {
        self.caller = Some(caller.into());
        self.status = Some(INCOMING_STATUS.to_string());
        self.ringing = true;
    }

    pub fn dismiss(&mut self) {
        self.ringing = false;
    }

    pub fn caller(&self) -> Option<&str> {
        self.caller.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_ringing(&self) -> bool {
        self.ringing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_sets_labels() {
        let mut call = FakeCall::default();
        call.ring("Mom");
        assert_eq!(call.caller(), Some("Mom"));
        assert_eq!(call.status(), Some("Incoming Call..."));
        assert!(call.is_ringing());
    }

    #[test]
    fn test_ring_again_replaces_caller() {
        let mut call = FakeCall::default();
        call.ring("Mom");
        call.ring("Boss");
        assert_eq!(call.caller(), Some("Boss"));
    }

    #[test]
    fn test_dismiss_keeps_labels() {
        let mut call = FakeCall::default();
        call.ring("Mom");
        call.dismiss();
        assert!(!call.is_ringing());
        assert_eq!(call.caller(), Some("Mom"));
    }
}
