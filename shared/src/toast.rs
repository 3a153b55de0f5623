//! Single-slot toast notifier.
//!
//! At most one toast is visible. Each `show` is paired with a fresh timer;
//! only the timer belonging to the visible toast may hide it, so a stale
//! timer firing late is harmless.

use serde::{Deserialize, Serialize};

use crate::capabilities::TimerId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub timer: TimerId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toasts {
    current: Option<Toast>,
}

impl Toasts {
    /// Replaces whatever is showing. Returns the timer of the replaced toast,
    /// which the caller should cancel.
    pub fn show(&mut self, message: impl Into<String>, timer: TimerId) -> Option<TimerId> {
        let previous = self.current.replace(Toast {
            message: message.into(),
            timer,
        });
        previous.map(|toast| toast.timer)
    }

    /// Hides the toast if `timer` is the one armed for it.
    pub fn expire(&mut self, timer: TimerId) -> bool {
        match &self.current {
            Some(toast) if toast.timer == timer => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) -> Option<TimerId> {
        self.current.take().map(|toast| toast.timer)
    }

    pub fn visible(&self) -> Option<&str> {
        self.current.as_ref().map(|toast| toast.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_show_then_expire() {
        let mut toasts = Toasts::default();
        assert_eq!(toasts.show("hello", TimerId(1)), None);
        assert_eq!(toasts.visible(), Some("hello"));

        assert!(toasts.expire(TimerId(1)));
        assert_eq!(toasts.visible(), None);
        assert!(!toasts.expire(TimerId(1)));
    }

    #[test]
    fn test_second_show_supersedes_first_timer() {
        let mut toasts = Toasts::default();
        toasts.show("first", TimerId(1));
        assert_eq!(toasts.show("second", TimerId(2)), Some(TimerId(1)));

        assert!(!toasts.expire(TimerId(1)));
        assert_eq!(toasts.visible(), Some("second"));
        assert!(toasts.expire(TimerId(2)));
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::default();
        toasts.show("bye", TimerId(7));
        assert_eq!(toasts.dismiss(), Some(TimerId(7)));
        assert_eq!(toasts.dismiss(), None);
    }

    proptest! {
        #[test]
        fn last_show_wins(messages in prop::collection::vec("[a-z]{1,12}", 1..20)) {
            let mut toasts = Toasts::default();
            for (i, message) in messages.iter().enumerate() {
                toasts.show(message.clone(), TimerId(i as u64));
            }
            let last = messages.len() as u64 - 1;

            for stale in 0..last {
                prop_assert!(!toasts.expire(TimerId(stale)));
                prop_assert_eq!(toasts.visible(), messages.last().map(String::as_str));
            }
            prop_assert!(toasts.expire(TimerId(last)));
            prop_assert_eq!(toasts.visible(), None);
        }
    }
}
