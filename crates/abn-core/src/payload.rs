//! Typed views of the two services' JSON bodies.
//!
//! Both services are loose about types: fields may be missing, `error` may be
//! a boolean or a string, and identifiers sometimes arrive as numbers. Text
//! fields therefore go through [`lenient_text`], and `error` keeps its raw JSON
//! value so it can be tested for truthiness.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `GET .../ABN_LOOKUP_SERVICE/lookup/{abn}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierPayload {
    /// Service-reported error flag or code
    #[serde(default)]
    pub error: Option<Value>,
    /// Human-readable error message
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    /// The ABN the record belongs to
    #[serde(default, deserialize_with = "lenient_text")]
    pub abn: Option<String>,
    /// Registered entity name
    #[serde(default, deserialize_with = "lenient_text")]
    pub entity_name: Option<String>,
    /// Entity type, e.g. "Australian Private Company"
    #[serde(default, deserialize_with = "lenient_text")]
    pub entity_type: Option<String>,
    /// GST registration status
    #[serde(default, deserialize_with = "lenient_text")]
    pub gst_status: Option<String>,
    /// Status in the Australian Business Register
    #[serde(default, deserialize_with = "lenient_text")]
    pub abr_status: Option<String>,
    /// Service mode (live, mock, ...)
    #[serde(default, deserialize_with = "lenient_text")]
    pub mode: Option<String>,
    /// ISO-8601 retrieval time
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
}

impl IdentifierPayload {
    /// Whether the service flagged this body as an error
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }
}

/// Body of `GET .../ABN_NAME_SEARCH/search?name=...`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePayload {
    /// Service-reported error flag or code
    #[serde(default)]
    pub error: Option<Value>,
    /// Human-readable error message
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    /// Term the service searched for
    #[serde(default, deserialize_with = "lenient_text")]
    pub search_term: Option<String>,
    /// Matching registrations; anything other than a non-empty array means none
    #[serde(default)]
    pub results: Option<Value>,
}

impl NamePayload {
    /// Whether the service flagged this body as an error
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }

    /// Whether at least one registration matched.
    ///
    /// An empty array and a missing field are both "no match".
    pub fn has_matches(&self) -> bool {
        matches!(&self.results, Some(Value::Array(entries)) if !entries.is_empty())
    }
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserializes strings as-is and numbers as their decimal text. Anything else
/// becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
