use serde::Serialize;

pub const THANK_YOU: &str = "Thank you for your message! We'll be in touch soon.";

/// Snapshot of the contact form, logged on submit. Nothing is sent anywhere yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn from_fields<F>(field: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: field("name").unwrap_or_default(),
            email: field("email").unwrap_or_default(),
            service: field("service").filter(|s| !s.is_empty()),
            message: field("message").unwrap_or_default(),
        }
    }
}
