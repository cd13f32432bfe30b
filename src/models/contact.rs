use chrono::Utc;
use serde::{ Serialize, Deserialize };

/// One contact-form submission as the page sends it. `country` and
/// `service` exist only on the long form variant; the short form omits
/// the fields entirely rather than sending empty strings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The flat record both delivery targets receive. Field names match the
/// mail template placeholders.
#[derive(Serialize, Debug, Clone)]
pub struct DispatchRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub service: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactSubmission {
    /// Builds the dispatch record: values trimmed, absent optional fields
    /// sent as "Not specified", timestamp stamped server-side when the
    /// client did not provide one.
    pub fn to_record(&self) -> DispatchRecord {
        DispatchRecord {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            country: optional_field(&self.country),
            service: optional_field(&self.service),
            message: self.message.trim().to_string(),
            timestamp: self
                .timestamp
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }
}

fn optional_field(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => "Not specified".to_string(),
    }
}
