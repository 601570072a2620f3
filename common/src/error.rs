//! Failure taxonomy for calls to the admin REST API.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Shown when the server gave no usable message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";
/// Shown for a 404 without a usable message.
pub const ITEM_GONE: &str = "The requested item no longer exists.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing, expired or rejected credential (HTTP 401).
    #[error("authentication required")]
    Unauthorized,

    /// Authenticated but lacking permission (HTTP 403).
    #[error("permission denied")]
    Forbidden,

    #[error("not found: {}", .message.as_deref().unwrap_or("no message"))]
    NotFound { message: Option<String> },

    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// What the UI does after a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Drop the stored credential and go to the login view.
    SignIn,
    /// Tell the user they lack permission and go to the home view.
    GoHome,
    /// Show the message; the UI stays where it is.
    Notify(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound {
                message: server_message(body),
            },
            _ => ApiError::Server {
                status,
                message: server_message(body),
            },
        }
    }

    /// Text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => SESSION_EXPIRED.to_string(),
            ApiError::Forbidden => PERMISSION_DENIED.to_string(),
            ApiError::NotFound {
                message: Some(message),
            }
            | ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::NotFound { message: None } => ITEM_GONE.to_string(),
            ApiError::Server { message: None, .. }
            | ApiError::Network(_)
            | ApiError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn recovery(&self) -> Recovery {
        match self {
            ApiError::Unauthorized => Recovery::SignIn,
            ApiError::Forbidden => Recovery::GoHome,
            other => Recovery::Notify(other.user_message()),
        }
    }
}

/// Extracts `message` (string or list of strings) or `error` from a JSON
/// error body. Plain-text bodies are used as-is when short.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(parsed) => {
            let from_message = match parsed.message {
                Some(Value::String(text)) => Some(text),
                Some(Value::Array(items)) => Some(
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|item| !item.trim().is_empty())
                        .collect::<Vec<_>>()
                        .join("; "),
                ),
                _ => None,
            };
            non_blank(from_message).or_else(|| non_blank(parsed.error))
        }
        Err(_) if !trimmed.starts_with('<') && trimmed.len() <= 200 => Some(trimmed.to_string()),
        Err(_) => None,
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_redirects() {
        assert_eq!(ApiError::from_response(401, "").recovery(), Recovery::SignIn);
        assert_eq!(ApiError::from_response(403, "{}").recovery(), Recovery::GoHome);
    }

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_response(409, r#"{"message":"Subscriber already removed"}"#);
        assert_eq!(
            err.recovery(),
            Recovery::Notify("Subscriber already removed".into())
        );
    }

    #[test]
    fn validation_message_lists_are_joined() {
        let err = ApiError::from_response(400, r#"{"message":["email is invalid","name too long"]}"#);
        assert_eq!(err.user_message(), "email is invalid; name too long");
    }

    #[test]
    fn error_key_is_used_as_fallback() {
        let err = ApiError::from_response(500, r#"{"error":"Internal Server Error"}"#);
        assert_eq!(err.user_message(), "Internal Server Error");
    }

    #[test]
    fn html_or_empty_bodies_fall_back_to_generic_text() {
        assert_eq!(
            ApiError::from_response(502, "<html>Bad gateway</html>").user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(ApiError::from_response(500, "").user_message(), GENERIC_FAILURE);
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn not_found_keeps_the_server_message() {
        let err = ApiError::from_response(404, r#"{"message":"Subscriber 7 was already removed"}"#);
        assert_eq!(err.user_message(), "Subscriber 7 was already removed");
        assert_eq!(
            err.recovery(),
            Recovery::Notify("Subscriber 7 was already removed".into())
        );
        assert_eq!(ApiError::from_response(404, "").user_message(), ITEM_GONE);
    }

    #[test]
    fn blank_message_does_not_hide_the_error_key() {
        let err = ApiError::from_response(500, r#"{"message":"","error":"Database unavailable"}"#);
        assert_eq!(err.user_message(), "Database unavailable");

        let err = ApiError::from_response(500, r#"{"message":"   ","error":"Database unavailable"}"#);
        assert_eq!(err.user_message(), "Database unavailable");

        let err = ApiError::from_response(400, r#"{"message":[1,2],"error":"Bad Request"}"#);
        assert_eq!(err.user_message(), "Bad Request");

        let err = ApiError::from_response(500, r#"{"message":"","error":" "}"#);
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }
}
