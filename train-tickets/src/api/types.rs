//! Ticketing API response DTOs.
//!
//! These map directly to the JSON the API returns. The API is loose about
//! types: `data` is an object on success but may be an empty string or be
//! missing on failure, and the price `data` object mixes fare strings with
//! other members. Both are kept as raw JSON values here and interpreted in
//! `convert`.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Response from the availability (left ticket) query.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the API considers the request successful.
    pub status: Option<bool>,

    /// HTTP-style status echoed in the body.
    pub httpstatus: Option<u16>,

    /// Payload; see [`AvailabilityData`].
    #[serde(default)]
    pub data: Value,

    /// Human-readable messages, usually an array of strings.
    #[serde(default)]
    pub messages: Value,
}

/// The `data` member of a successful availability response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityData {
    /// One pipe-delimited record per train.
    #[serde(default)]
    pub result: Vec<String>,

    /// Station telecode → station name for every code in `result`.
    #[serde(default)]
    pub map: HashMap<String, String>,

    /// Opaque flag, "1" when results are present.
    pub flag: Option<String>,
}

/// Response from the price query.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    /// Whether the API considers the request successful.
    pub status: Option<bool>,

    /// Fare-class code → price string, plus unrelated members.
    #[serde(default)]
    pub data: Value,

    /// Human-readable messages.
    #[serde(default)]
    pub messages: Value,
}

/// Join the `messages` member into one line, if it holds any text.
pub(crate) fn messages_text(messages: &Value) -> Option<String> {
    let text = match messages {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    };
    if text.is_empty() { None } else { Some(text) }
}
