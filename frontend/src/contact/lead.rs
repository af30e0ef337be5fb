use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const LEAD_SOURCE: &str = "Website Contact Form";

pub const SECTORS: &[&str] = &[
    "Flight School",
    "Charter Operation",
    "Aviation Service",
    "High-Ticket Consultant",
    "Other Service Business",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Network error: {0}")]
    Network(String),

    /// The webhook answered, but not with a 2xx
    #[error("Webhook rejected the lead with status {0}")]
    Rejected(u16),

    #[error("Could not encode lead: {0}")]
    Encode(String),
}

impl ContactError {
    /// Alert text shown to the visitor.
    pub fn alert_message(&self) -> &'static str {
        match self {
            ContactError::Network(_) => "Connectivity error: Check your frequency and try again.",
            ContactError::Rejected(_) | ContactError::Encode(_) => {
                "System error: Unable to dispatch mission. Please try the direct line."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sector: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sector: String,
    pub message: String,
    pub source: String,
    pub timestamp: String,
}

impl LeadPayload {
    pub fn from_form(form: &ContactForm, now: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            sector: form.sector.clone(),
            message: form.message.trim().to_string(),
            source: LEAD_SOURCE.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// POSTs the lead to the routing webhook.
pub async fn dispatch_lead(payload: &LeadPayload) -> Result<(), ContactError> {
    let request = Request::post(config::LEAD_WEBHOOK_URL)
        .header("Content-Type", "application/json")
        .json(payload)
        .map_err(|e| ContactError::Encode(e.to_string()))?;

    match request.send().await {
        Ok(response) if response.ok() => {
            info!("Lead from {} dispatched", payload.email);
            Ok(())
        }
        Ok(response) => {
            error!("Transmission failed with status {}", response.status());
            Err(ContactError::Rejected(response.status()))
        }
        Err(e) => {
            error!("Network error: {}", e);
            Err(ContactError::Network(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> ContactForm {
        ContactForm {
            name: " Amelia Earhart ".to_string(),
            email: "amelia@example.com".to_string(),
            phone: "555-0100".to_string(),
            sector: "Flight School".to_string(),
            message: "Need more discovery flights.".to_string(),
        }
    }

    #[test]
    fn payload_carries_source_and_iso_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let payload = LeadPayload::from_form(&form(), now);
        assert_eq!(payload.name, "Amelia Earhart");
        assert_eq!(payload.source, "Website Contact Form");
        assert_eq!(payload.timestamp, "2025-03-14T09:26:53.000Z");
    }

    #[test]
    fn payload_serializes_with_webhook_field_names() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let value = serde_json::to_value(LeadPayload::from_form(&form(), now)).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "message", "name", "phone", "sector", "source", "timestamp"]);
    }

    #[test]
    fn alerts_distinguish_network_from_rejection() {
        assert!(ContactError::Network("x".into()).alert_message().starts_with("Connectivity error"));
        assert!(ContactError::Rejected(500).alert_message().starts_with("System error"));
    }
}
