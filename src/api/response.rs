use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::models::{Entry, TrendingWord};
use crate::error::Result;

/// Message used when neither the envelope nor the body supplies one.
pub const DEFAULT_MESSAGE: &str = "Okay";

/// Shown for failed calls whose message came back empty.
pub const NO_DETAILS: &str = "No details were returned by the news API";

/// Status reported for calls that never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 503;

const MESSAGE_KEY: &str = "message";
const RESULTS_KEY: &str = "results";
const MAX_RESULTS_KEY: &str = "max_results";

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The API's outer JSON object. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    payload: Option<Value>,
    #[serde(default)]
    metadata: Option<Value>,
}

/// Uniform result of one API call.
///
/// After normalization `message` is always equal to `metadata["message"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    pub status_code: u16,
    pub message: String,
    pub payload: Value,
    pub metadata: Map<String, Value>,
}

impl ApiResult {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// The message to show a user, or `Error {code}: <generic>` when it is blank.
    pub fn display_message(&self, generic: &str) -> String {
        if self.message.trim().is_empty() {
            format!("Error {}: {}", self.status_code, generic)
        } else {
            self.message.clone()
        }
    }

    pub fn transport_failure(err: impl std::fmt::Display) -> Self {
        finish(
            TRANSPORT_FAILURE_STATUS,
            format!("Could not reach the news API: {}", err),
            empty_payload(),
            Map::new(),
        )
    }

    /// Entries listed under `payload.results`. A missing list is empty.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        match self.payload.get(RESULTS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(results) => Ok(Vec::<Entry>::deserialize(results)?),
        }
    }

    /// The word cloud carried directly as the payload list.
    pub fn words(&self) -> Result<Vec<TrendingWord>> {
        match &self.payload {
            Value::Array(_) => Ok(Vec::<TrendingWord>::deserialize(&self.payload)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Total number of search hits the API knows about.
    pub fn max_results(&self) -> Option<u64> {
        match self.metadata.get(MAX_RESULTS_KEY)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Turns any HTTP response into an [`ApiResult`].
///
/// An embedded `code` wins over the transport status. Bodies that are not a
/// JSON object keep the HTTP status and surface their raw text as the message.
pub fn normalize(raw: RawResponse, default_message: &str) -> ApiResult {
    let envelope = match serde_json::from_str::<Value>(&raw.body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value::<Envelope>(value).ok(),
        _ => None,
    };

    match envelope {
        Some(envelope) => {
            let status_code = envelope
                .code
                .as_ref()
                .and_then(status_from_code)
                .unwrap_or(raw.status);
            let payload = envelope
                .payload
                .filter(|p| !p.is_null())
                .unwrap_or_else(empty_payload);
            let metadata = match envelope.metadata {
                Some(Value::Object(map)) => map,
                _ => Map::new(),
            };
            finish(status_code, default_message.to_string(), payload, metadata)
        }
        None => finish(raw.status, raw.body, empty_payload(), Map::new()),
    }
}

fn finish(
    status_code: u16,
    fallback: String,
    payload: Value,
    mut metadata: Map<String, Value>,
) -> ApiResult {
    let message = match metadata.get(MESSAGE_KEY) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => fallback,
        Some(other) => other.to_string(),
    };
    metadata.insert(MESSAGE_KEY.to_string(), Value::String(message.clone()));

    ApiResult {
        status_code,
        message,
        payload,
        metadata,
    }
}

fn status_from_code(code: &Value) -> Option<u16> {
    match code {
        Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn empty_payload() -> Value {
    Value::Object(Map::new())
}
