//! Chorus gateway server library logic.

pub mod api_agent;
pub mod api_token;
pub mod config;
pub mod error;
pub mod validate;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use chorus_provision::ProvisionService;
use chorus_token::CredentialIssuer;
use config::Config;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Maximum request body size (64 KiB). Invite/remove bodies are tiny;
/// anything bigger is not a legitimate request.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across all request handlers.
///
/// Built once at startup from the immutable configuration; handlers never
/// reach into ambient process state.
#[derive(Clone)]
pub struct AppState {
    /// The configuration snapshot the server started with.
    pub config: Config,
    /// Credential issuer for client and agent channel tokens.
    pub issuer: CredentialIssuer,
    /// Upstream provisioning client.
    pub provision: ProvisionService,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let issuer = CredentialIssuer::new(&config.rtc.app_id, &config.rtc.app_certificate);
        let provision = ProvisionService::new(
            &config.rtc.app_id,
            config.provision.clone(),
            config.llm.clone(),
            config.tts.clone(),
            issuer.clone(),
        );
        Self {
            config,
            issuer,
            provision,
        }
    }
}

/// Liveness handler.
async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/token", get(api_token::token_handler))
        .route("/agent/invite", post(api_agent::invite_agent_handler))
        .route("/agent/remove", post(api_agent::remove_agent_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
