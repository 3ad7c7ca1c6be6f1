//! WhatsApp deep links and click analytics payloads.

use serde::Serialize;

pub const DEFAULT_MESSAGE: &str = "Olá! Gostaria de entrar em contato.";

/// Keeps only ASCII digits: `+55 (11) 99999-9999` -> `5511999999999`.
pub fn normalize_phone(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Percent-encodes `input` with the same unreserved set as JavaScript's
/// `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// `https://wa.me/<digits>?text=<message>`
pub fn deep_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", normalize_phone(number), encode_uri_component(message))
}

/// Message for a button: its `data-message`, or the default greeting when the
/// attribute is missing or empty. Whitespace is sent as written.
pub fn message_for(data_message: Option<&str>) -> &str {
    data_message.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MESSAGE)
}

/// Parameters passed to `gtag('event', action, params)`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalyticsEvent {
    #[serde(skip)]
    pub action: &'static str,
    pub event_category: &'static str,
    pub event_label: String,
}

impl AnalyticsEvent {
    pub fn whatsapp_click(message: &str) -> Self {
        Self {
            action: "whatsapp_click",
            event_category: "engagement",
            event_label: message.to_string(),
        }
    }
}
