//! Uniform response envelope for the HTTP API.
//!
//! Every endpoint, success or failure, answers with the same shape:
//! `{code, success, message, result}`. `result` is always present in the
//! body (possibly null) and, when non-null, is a JSON object keyed by a
//! semantic payload name (`{"users": [...]}`, `{"user": {...}}`) so clients
//! can discriminate payload type without inspecting shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The wire-level body produced for every handler result and error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status code, duplicated into the body
    pub code: u16,
    /// Derived, never supplied: `200 <= code < 300`
    pub success: bool,
    /// Human-readable message, may be empty
    pub message: String,
    /// Named payload object, or null
    pub result: Option<Value>,
}

impl Envelope {
    /// Build an envelope around `result`.
    ///
    /// A non-null `result` that is not a JSON object is a handler bug, not a
    /// client error: it panics in debug builds and degrades to a 500
    /// envelope in release builds.
    pub fn build(result: Option<Value>, status: StatusCode, message: impl Into<String>) -> Self {
        if let Some(ref value) = result {
            debug_assert!(
                value.is_object(),
                "envelope result must be a named JSON object, got: {value}"
            );
            if !value.is_object() {
                return Self::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                );
            }
        }
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result,
        }
    }

    /// 200 envelope with a payload and an empty message.
    pub fn ok(result: Value) -> Self {
        Self::build(Some(result), StatusCode::OK, "")
    }

    /// Error envelope: null result plus a human-readable message.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: None,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
