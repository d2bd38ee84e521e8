//! The APOD record as returned by the provider.
//!
//! # Design
//! Every field is optional on the wire. Absent fields are kept as `None` and
//! the placeholder text is applied by the accessors, so the record itself
//! always reflects exactly what the server sent. Fields the page does not use
//! (`media_type`, `hdurl`, `copyright`, ...) are ignored on decode.
//!
//! Decoding is lenient: a field holding a number, boolean or nested JSON is
//! kept as its JSON text, so an odd value is displayed rather than failing
//! the whole record. `null` counts as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_DATE: &str = "Unknown Date";
pub const DEFAULT_EXPLANATION: &str = "No explanation available.";

/// One Astronomy Picture of the Day entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApodRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ApodRecord {
    /// The image url, or `None` when it is absent or empty.
    pub fn image_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or(DEFAULT_DATE)
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or(DEFAULT_EXPLANATION)
    }
}

/// Accept any JSON value for a text field. Strings pass through, `null` is
/// absent, everything else becomes its JSON text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
