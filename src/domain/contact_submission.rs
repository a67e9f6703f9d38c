use serde::{Deserialize, Serialize};

/// Contact form payload as it travels over the wire.
///
/// Every field defaults to an empty string so that a missing field is
/// reported as a validation failure instead of a deserialization one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Honeypot. Hidden from humans, so any value means a bot filled it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ContactSubmission {
    /// Looks at the honeypot before the body is typed, so a bot that also
    /// sends malformed fields is still answered as if it succeeded.
    pub fn honeypot_filled(raw: &serde_json::Value) -> bool {
        match raw.get("company") {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(company)) => !company.trim().is_empty(),
            Some(_) => true,
        }
    }
}
