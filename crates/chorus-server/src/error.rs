//! The client-facing error contract.
//!
//! Every failure becomes a JSON body `{"error": ..., "details": ...}` with
//! a status from a fixed taxonomy: configuration problems are 500s and never
//! the caller's fault, malformed client fields are 400s naming the field,
//! a missing JSON content type is a 415, upstream failures keep the upstream
//! status and carry its body in `details`, and transport failures collapse
//! to a generic 500 whose cause goes to the logs only.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chorus_provision::ProvisionError;
use serde_json::{json, Value};
use thiserror::Error;

/// Which conversation operation an upstream failure interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationAction {
    Start,
    Stop,
}

impl ConversationAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Failed to {} conversation: {status}", .action.verb())]
    Upstream {
        action: ConversationAction,
        status: u16,
        body: String,
    },

    #[error("provisioning service unreachable")]
    Transport(#[source] reqwest::Error),
}

impl GatewayError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Lifts a provisioning-layer error into the client contract.
    ///
    /// `action` picks the client-facing verb for upstream failures; the
    /// other variants map independently of the route.
    pub fn from_provision(err: ProvisionError, action: ConversationAction) -> Self {
        match err {
            ProvisionError::Config(msg) => Self::Config(msg),
            ProvisionError::UnsupportedVendor(v) => {
                Self::Config(format!("unsupported TTS vendor: {}", v))
            }
            ProvisionError::Token(e) => Self::Config(e.to_string()),
            ProvisionError::Upstream { status, body } => Self::Upstream {
                action,
                status,
                body,
            },
            ProvisionError::Transport(e) => Self::Transport(e),
        }
    }

    /// Maps an axum JSON extraction failure onto the taxonomy.
    ///
    /// A missing/wrong content type is the caller using the wrong media
    /// type; everything else (empty body, malformed JSON, wrong field
    /// shapes) is a plain validation failure.
    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::UnsupportedMediaType,
            other => Self::validation("body", other.body_text()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            GatewayError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            GatewayError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            GatewayError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                json!({ "error": self.to_string() }),
            ),
            GatewayError::Upstream { status, ref body, .. } => {
                // Upstream bodies are JSON when the service is healthy enough
                // to say what went wrong; pass them through structured.
                let details: Value = serde_json::from_str(body)
                    .unwrap_or_else(|_| Value::String(body.clone()));
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    json!({ "error": self.to_string(), "details": details }),
                )
            }
            GatewayError::Transport(ref cause) => {
                tracing::error!(error = %cause, "upstream call could not complete");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
