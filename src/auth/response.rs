//! Shared interpretation of backend auth responses.
//!
//! The backend answers 2xx with `{"token": "...", "user": {...}}` and
//! non-2xx with either `{"detail": "..."}` or a Django-REST-style map of
//! field name to message list. Everything is reduced to a
//! `Result<AuthToken, AuthError>` here; nothing throws past the submit
//! boundary.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde_json::Value;

use super::error::{AuthError, GENERIC_ERROR_MESSAGE};
use super::AuthToken;
use crate::net::types::ServiceResponse;

/// Interpret a decoded backend response.
///
/// # Errors
///
/// - [`AuthError::Service`] for a recognized error payload, rendered for
///   display.
/// - [`AuthError::Unexpected`] for a success body without a string
///   `token`, or an error payload in no recognized shape.
pub fn interpret(response: &ServiceResponse) -> Result<AuthToken, AuthError> {
    if response.ok {
        return response
            .body
            .get("token")
            .and_then(Value::as_str)
            .map(AuthToken::new)
            .ok_or_else(|| AuthError::Unexpected(GENERIC_ERROR_MESSAGE.to_owned()));
    }
    Err(failure_from_payload(&response.body))
}

/// Render a non-success payload as a displayable error.
fn failure_from_payload(body: &Value) -> AuthError {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return AuthError::Service(detail.to_owned());
    }
    match body.as_object() {
        Some(fields) if !fields.is_empty() => {
            // Field errors render one line per field, in payload order.
            let lines: Vec<String> = fields
                .iter()
                .map(|(field, messages)| format!("{field}: {}", render_messages(messages)))
                .collect();
            AuthError::Service(lines.join("\n"))
        }
        _ => AuthError::Unexpected(GENERIC_ERROR_MESSAGE.to_owned()),
    }
}

fn render_messages(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(render_message)
            .collect::<Vec<_>>()
            .join(", "),
        other => render_message(other),
    }
}

fn render_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
