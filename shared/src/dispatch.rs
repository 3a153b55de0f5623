use serde::{Deserialize, Serialize};

pub const FALLBACK_NUMBER: &str = "100";
pub const FALLBACK_LABEL: &str = "Emergency Services";

/// Fixed helpline table. Aliases cover the labels used on the page buttons.
const SERVICES: &[(&[&str], &str, &str)] = &[
    (&["Police", "Police – 100"], "100", "📞 Calling Police (100)..."),
    (
        &["Women Helpline", "Women Helpline – 181"],
        "181",
        "📞 Calling Women Helpline (181)...",
    ),
    (&["Ambulance"], "108", "🚑 Calling Ambulance (108)..."),
    (&["Fire"], "101", "🚒 Calling Fire Brigade (101)..."),
    (&["Childline"], "1098", "📞 Calling Childline (1098)..."),
    (&["Cyber Crime"], "1930", "💻 Calling Cyber Crime (1930)..."),
];

/// A resolved emergency call, carried from the trigger through the delayed
/// confirmation to the dial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyCall {
    /// Name as the user picked it; unknown names are kept verbatim.
    pub service: String,
    pub number: String,
    pub message: String,
}

impl EmergencyCall {
    pub fn resolve(service: &str) -> Self {
        let (number, message) = SERVICES
            .iter()
            .find(|(names, _, _)| names.contains(&service))
            .map_or_else(
                || (FALLBACK_NUMBER.to_string(), format!("📞 Calling {FALLBACK_LABEL}...")),
                |(_, number, message)| ((*number).to_string(), (*message).to_string()),
            );

        Self {
            service: service.to_string(),
            number,
            message,
        }
    }

    pub fn confirmation_prompt(&self) -> String {
        format!("Do you want to call {} ({})?", self.service, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_services() {
        assert_eq!(EmergencyCall::resolve("Police").number, "100");
        assert_eq!(EmergencyCall::resolve("Women Helpline").number, "181");
        assert_eq!(EmergencyCall::resolve("Ambulance").number, "108");
        assert_eq!(EmergencyCall::resolve("Fire").number, "101");
        assert_eq!(EmergencyCall::resolve("Childline").number, "1098");
        assert_eq!(EmergencyCall::resolve("Cyber Crime").number, "1930");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(EmergencyCall::resolve("Police – 100").number, "100");
        assert_eq!(EmergencyCall::resolve("Women Helpline – 181").number, "181");
    }

    #[test]
    fn test_unknown_falls_back() {
        let call = EmergencyCall::resolve("UnknownService");
        assert_eq!(call.number, "100");
        assert_eq!(call.message, "📞 Calling Emergency Services...");
        assert_eq!(call.service, "UnknownService");
    }

    #[test]
    fn test_fire_message_and_prompt() {
        let call = EmergencyCall::resolve("Fire");
        assert_eq!(call.message, "🚒 Calling Fire Brigade (101)...");
        assert_eq!(call.confirmation_prompt(), "Do you want to call Fire (101)?");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(EmergencyCall::resolve("fire").message, "📞 Calling Emergency Services...");
    }
}
