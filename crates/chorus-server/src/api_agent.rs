//! Agent invite/remove endpoints.
//!
//! Both handlers run the same gauntlet: configuration completeness first
//! (a broken deployment is never reported as a client error), then JSON
//! extraction, then field validation, then the upstream call. Nothing is
//! retried; one upstream failure is one client-visible failure.

use crate::error::{ConversationAction, GatewayError};
use crate::validate;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::response::Json;
use chorus_types::{AgentResponse, InviteAgentRequest, RemoveAgentRequest};
use serde_json::json;
use std::sync::Arc;

/// `POST /agent/invite` — provisions an agent into a channel.
///
/// Returns the upstream response unchanged.
pub async fn invite_agent_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<InviteAgentRequest>, JsonRejection>,
) -> Result<Json<AgentResponse>, GatewayError> {
    validate::ensure_config_complete(&state.config)?;

    let Json(req) = payload.map_err(GatewayError::from_json_rejection)?;
    validate::validate_invite(&req)?;

    let agent = state
        .provision
        .invite(&req)
        .await
        .map_err(|e| GatewayError::from_provision(e, ConversationAction::Start))?;

    Ok(Json(agent))
}

/// `POST /agent/remove` — stops a previously provisioned agent.
///
/// The gateway keeps no agent state; whether the agent ever existed is the
/// upstream's call.
pub async fn remove_agent_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RemoveAgentRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    validate::ensure_config_complete(&state.config)?;

    let Json(req) = payload.map_err(GatewayError::from_json_rejection)?;
    validate::validate_remove(&req)?;

    state
        .provision
        .remove(&req.agent_id)
        .await
        .map_err(|e| GatewayError::from_provision(e, ConversationAction::Stop))?;

    Ok(Json(json!({ "success": true })))
}
