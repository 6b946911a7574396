//! Request and configuration validation.
//!
//! Pure checks producing decision values; no side effects. Configuration
//! completeness is checked first and independently of the request body, so
//! a misconfigured deployment reports a server-side error before any
//! client-field validation runs.

use crate::config::Config;
use crate::error::GatewayError;
use chorus_provision::ProvisionError;
use chorus_types::{InviteAgentRequest, RemoveAgentRequest, RequesterId};

const CHANNEL_NAME_MIN_LEN: usize = 3;
const CHANNEL_NAME_MAX_LEN: usize = 64;

/// Verifies every configuration key the agent routes depend on.
///
/// Missing identity-provider credentials, provisioning-service credentials,
/// LLM settings, or the selected TTS vendor's fields are configuration
/// errors, never the caller's fault.
pub fn ensure_config_complete(config: &Config) -> Result<(), GatewayError> {
    let mut missing = Vec::new();

    if config.rtc.app_id.is_empty() {
        missing.push("rtc.app_id");
    }
    if config.rtc.app_certificate.is_empty() {
        missing.push("rtc.app_certificate");
    }
    if config.provision.base_url.is_empty() {
        missing.push("provision.base_url");
    }
    if config.provision.customer_id.is_empty() {
        missing.push("provision.customer_id");
    }
    if config.provision.customer_secret.is_empty() {
        missing.push("provision.customer_secret");
    }
    if config.llm.url.is_empty() {
        missing.push("llm.url");
    }
    if config.llm.api_key.is_empty() {
        missing.push("llm.api_key");
    }
    if config.llm.model.is_empty() {
        missing.push("llm.model");
    }

    if !missing.is_empty() {
        return Err(GatewayError::Config(format!(
            "missing configuration: {}",
            missing.join(", ")
        )));
    }

    // The selected vendor's fields are validated by the resolver itself so
    // the field-naming logic lives in one place.
    match chorus_provision::tts::resolve(&config.tts) {
        Ok(_) => Ok(()),
        Err(ProvisionError::Config(msg)) => Err(GatewayError::Config(msg)),
        Err(ProvisionError::UnsupportedVendor(v)) => Err(GatewayError::Config(format!(
            "unsupported TTS vendor: {}",
            v
        ))),
        Err(other) => Err(GatewayError::Config(other.to_string())),
    }
}

/// Field-level rules for `POST /agent/invite`.
pub fn validate_invite(req: &InviteAgentRequest) -> Result<(), GatewayError> {
    match &req.requester_id {
        RequesterId::Text(s) if s.is_empty() => {
            return Err(GatewayError::validation(
                "requester_id",
                "requester_id must not be empty",
            ));
        }
        RequesterId::Numeric(n) if *n < 0 => {
            return Err(GatewayError::validation(
                "requester_id",
                "requester_id must be a non-negative integer",
            ));
        }
        _ => {}
    }

    let len = req.channel_name.chars().count();
    if !(CHANNEL_NAME_MIN_LEN..=CHANNEL_NAME_MAX_LEN).contains(&len) {
        return Err(GatewayError::validation(
            "channel_name",
            format!(
                "channel_name must be {}-{} characters",
                CHANNEL_NAME_MIN_LEN, CHANNEL_NAME_MAX_LEN
            ),
        ));
    }

    Ok(())
}

/// Field-level rules for `POST /agent/remove`.
pub fn validate_remove(req: &RemoveAgentRequest) -> Result<(), GatewayError> {
    if req.agent_id.is_empty() {
        return Err(GatewayError::validation(
            "agent_id",
            "agent_id must not be empty",
        ));
    }
    Ok(())
}
