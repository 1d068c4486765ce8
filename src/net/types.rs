//! Decoded backend responses, before interpretation.

use serde_json::Value;

/// A backend response reduced to what interpretation needs: whether the
/// transport reported success, and the decoded JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse {
    pub ok: bool,
    pub body: Value,
}

impl ServiceResponse {
    /// A 2xx response with the given body.
    pub fn success(body: Value) -> Self {
        Self { ok: true, body }
    }

    /// A non-2xx response with the given error payload.
    pub fn failure(body: Value) -> Self {
        Self { ok: false, body }
    }
}
