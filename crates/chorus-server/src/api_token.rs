//! Channel token endpoint.

use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Extension, Query};
use axum::response::Json;
use chorus_provision::session_label;
use chorus_token::{ChannelRole, DEFAULT_TOKEN_TTL_SECS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TokenParams {
    pub uid: Option<String>,
    pub channel: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub uid: String,
    pub channel: String,
}

/// `GET /token?uid=&channel=` — mints a one-hour client credential.
///
/// `uid` defaults to the anonymous identity `"0"`; an omitted or empty
/// `channel` gets a generated `ai-conversation-<epoch_millis>-<suffix>`
/// name.
pub async fn token_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TokenParams>,
) -> Result<Json<TokenResponse>, GatewayError> {
    let uid = params
        .uid
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "0".to_string());
    let channel = params
        .channel
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| session_label("ai-conversation"));

    let credential = state
        .issuer
        .issue(&channel, &uid, ChannelRole::Publisher, DEFAULT_TOKEN_TTL_SECS)
        .map_err(|e| GatewayError::Config(e.to_string()))?;

    tracing::debug!(%channel, %uid, expires_at = credential.expires_at, "issued client token");

    Ok(Json(TokenResponse {
        token: credential.token,
        uid,
        channel,
    }))
}
