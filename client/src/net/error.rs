//! Submission failures and their user-facing classification.
//!
//! DESIGN
//! ======
//! HTTP helpers reduce every failure to a [`SubmitFailure`] without looking at
//! what the user should see. [`classify`] is the only place that decides the
//! notification text, so the policy is testable without `gloo-net` or a
//! browser:
//!
//! 1. transport failure whose payload `message` is a list: one notice per
//!    string entry, in order (an empty list yields no notices);
//! 2. transport failure with a single message (payload string first, then the
//!    transport's own message): that message;
//! 3. runtime failure: its message, as is;
//! 4. anything else: [`FALLBACK_ERROR_MESSAGE`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Text shown when no more specific error message can be determined.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Opaque failure of a customer API call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitFailure {
    /// The request could not complete or the API answered with a non-success status.
    #[error("{message}")]
    Transport {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Transport-level description (e.g. `request failed with status code 409`).
        message: String,
        /// Parsed JSON body of the error response, if any.
        payload: Option<Value>,
    },
    /// A local failure outside the transport (encoding, decoding, unavailable API).
    #[error("{0}")]
    Runtime(String),
    /// A failure with nothing recognizable attached.
    #[error("An unexpected error occurred")]
    Unknown,
}

/// What the user is told about a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorNotice {
    /// Field-level validation messages, one notification each.
    ValidationErrors(Vec<String>),
    /// One notification with this text.
    SingleMessage(String),
    /// One notification with [`FALLBACK_ERROR_MESSAGE`].
    Fallback,
}

impl ErrorNotice {
    /// Notification texts in emission order. Empty only for an empty validation list.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::ValidationErrors(messages) => messages,
            Self::SingleMessage(message) => vec![message],
            Self::Fallback => vec![FALLBACK_ERROR_MESSAGE.to_owned()],
        }
    }
}

/// Map a failure to the notice shown to the user.
#[must_use]
pub fn classify(failure: &SubmitFailure) -> ErrorNotice {
    match failure {
        SubmitFailure::Transport { message, payload, .. } => {
            let payload_message = payload.as_ref().and_then(|body| body.get("message"));
            if let Some(messages) = payload_message.and_then(validation_messages) {
                return ErrorNotice::ValidationErrors(messages);
            }
            payload_message
                .and_then(Value::as_str)
                .and_then(non_blank)
                .or_else(|| non_blank(message))
                .map_or(ErrorNotice::Fallback, ErrorNotice::SingleMessage)
        }
        SubmitFailure::Runtime(message) => ErrorNotice::SingleMessage(message.clone()),
        SubmitFailure::Unknown => ErrorNotice::Fallback,
    }
}

/// String entries of a `message` array; `None` when `message` is not an array.
fn validation_messages(value: &Value) -> Option<Vec<String>> {
    Some(value.as_array()?.iter().filter_map(Value::as_str).map(str::to_owned).collect())
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text.to_owned()) }
}
