use core::result::Result as CoreResult;

use serde_json::Value;
use thiserror::Error;

use crate::payload::is_truthy;

/// Result type for lookup operations.
pub type Result<T> = CoreResult<T, LookupError>;

/// Message shown when the service cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "Network error. Please check if the lookup service is reachable.";

/// Message shown for blank submissions.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a business name";

/// Fallback when a failed response carries no usable message.
const SEARCH_FAILED: &str = "Search failed";

/// Errors that can occur while performing a search.
///
/// A service-reported error inside a successful response is not a
/// `LookupError`; it is rendered from the payload instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input was empty or whitespace only. Never reaches the network.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No response, or a failure response without a structured body.
    #[error("Service unreachable: {0}")]
    Unreachable(String),

    /// Failure response with a structured JSON body.
    #[error("Service returned {status}: {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// `message` or `error` field of the body, or a fallback
        message: String,
    },

    /// A successful response whose body could not be decoded.
    #[error("Invalid response from service: {0}")]
    Decode(String),
}

impl LookupError {
    /// Rejection for blank input.
    pub fn empty_input() -> Self {
        Self::InvalidInput(EMPTY_INPUT_MESSAGE.to_owned())
    }

    /// Inline message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::Unreachable(_) => UNREACHABLE_MESSAGE.to_owned(),
            Self::Service { message, .. } => format!("Error: {message}"),
            Self::Decode(_) => format!("Error: {SEARCH_FAILED}"),
        }
    }

    /// Whether this error was produced locally without a network call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Builds a [`LookupError::Service`] from the `message` and `error` fields
    /// of a failure body, preferring `message`, then `error`, then a generic
    /// fallback. Truthy numbers and booleans are shown as their JSON text.
    pub fn from_failure_body(status: u16, message: Option<&Value>, error: Option<&Value>) -> Self {
        let message = failure_text(message)
            .or_else(|| failure_text(error))
            .unwrap_or_else(|| SEARCH_FAILED.to_owned());
        Self::Service { status, message }
    }
}

/// Printable text of a failure body field, if it is a truthy scalar.
fn failure_text(field: Option<&Value>) -> Option<String> {
    match field? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        scalar @ (Value::Bool(_) | Value::Number(_)) if is_truthy(scalar) => {
            Some(scalar.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message_for_unreachable_is_generic() {
        let error = LookupError::Unreachable("connection refused (os error 111)".to_owned());
        assert_eq!(error.user_message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_user_message_for_service_error_is_verbatim() {
        let error = LookupError::Service {
            status: 503,
            message: "Upstream registry offline".to_owned(),
        };
        assert_eq!(error.user_message(), "Error: Upstream registry offline");
    }

    #[test]
    fn test_failure_body_prefers_message_then_error() {
        let message = json!("bad name");
        let code = json!("BAD_REQUEST");
        let blank = json!("");

        let both = LookupError::from_failure_body(400, Some(&message), Some(&code));
        let only_error = LookupError::from_failure_body(400, None, Some(&code));
        let blank_message = LookupError::from_failure_body(400, Some(&blank), Some(&code));
        let neither = LookupError::from_failure_body(500, None, None);

        assert_eq!(both.user_message(), "Error: bad name");
        assert_eq!(only_error.user_message(), "Error: BAD_REQUEST");
        assert_eq!(blank_message.user_message(), "Error: BAD_REQUEST");
        assert_eq!(neither.user_message(), "Error: Search failed");
    }

    #[test]
    fn test_failure_body_scalars_render_as_text() {
        let flag = json!(true);
        let code = json!(418);
        let nested = json!({ "code": 7 });

        let from_flag = LookupError::from_failure_body(500, None, Some(&flag));
        let from_number = LookupError::from_failure_body(500, Some(&code), Some(&flag));
        let from_object = LookupError::from_failure_body(500, Some(&nested), None);

        assert_eq!(from_flag.user_message(), "Error: true");
        assert_eq!(from_number.user_message(), "Error: 418");
        assert_eq!(from_object.user_message(), "Error: Search failed");
    }

    #[test]
    fn test_failure_body_falsy_scalars_fall_back() {
        let zero = json!(0);
        let flag = json!(false);
        let null = Value::Null;

        let error = LookupError::from_failure_body(500, Some(&zero), Some(&flag));
        let nothing = LookupError::from_failure_body(500, Some(&null), None);

        assert_eq!(error.user_message(), "Error: Search failed");
        assert_eq!(nothing.user_message(), "Error: Search failed");
    }

    #[test]
    fn test_empty_input_is_local() {
        let error = LookupError::empty_input();
        assert!(error.is_local());
        assert_eq!(error.user_message(), EMPTY_INPUT_MESSAGE);
        assert!(!LookupError::Decode("eof".to_owned()).is_local());
    }

    #[test]
    fn test_error_display() {
        let error = LookupError::Service {
            status: 404,
            message: "not found".to_owned(),
        };
        assert_eq!(error.to_string(), "Service returned 404: not found");
    }
}
