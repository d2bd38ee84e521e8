//! Stateless HTTP request builder and response parser for the APOD API.
//!
//! # Design
//! `ApodClient` holds the endpoint and the API key, both fixed at
//! construction. `build_fetch` produces an `HttpRequest` and `parse_fetch`
//! consumes an `HttpResponse`; the caller executes the round-trip in between,
//! keeping the core deterministic and free of I/O dependencies.

use url::Url;

use crate::error::ApodError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::ApodRecord;

/// Public APOD endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Synchronous, stateless client for the APOD endpoint.
#[derive(Debug, Clone)]
pub struct ApodClient {
    endpoint: Url,
    api_key: String,
}

impl ApodClient {
    /// Bind a client to `endpoint` and `api_key`.
    ///
    /// An empty key is accepted; the provider rejects it, which surfaces as
    /// an `ApodError::Http` at parse time.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, ApodError> {
        let invalid = |reason: String| ApodError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let parsed = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        Ok(Self {
            endpoint: parsed,
            api_key: api_key.to_string(),
        })
    }

    /// The endpoint without credentials. Safe to log.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn build_fetch(&self) -> HttpRequest {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
        }
    }

    /// Parse a response into a record.
    ///
    /// A JSON object is a record. An empty body value (`null`, `false`, `0`,
    /// `""`, `[]`) is `Ok(None)`: the server answered but sent nothing. Any
    /// other non-object body is a `Deserialization` error.
    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Option<ApodRecord>, ApodError> {
        check_status(&response)?;
        let value: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApodError::Deserialization(e.to_string()))?;
        if value.is_object() {
            return serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApodError::Deserialization(e.to_string()));
        }
        if is_empty_value(&value) {
            return Ok(None);
        }
        Err(ApodError::Deserialization(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )))
    }
}

/// Map non-2xx status codes to `ApodError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApodError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApodError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(_) => false,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
