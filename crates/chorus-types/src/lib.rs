//! Shared types and wire contracts for the Chorus gateway.
//!
//! This crate provides the foundational types used across all Chorus crates:
//! the client-facing invite/remove request shapes, the upstream provisioning
//! payload tree, the TTS vendor configuration union, and the channel
//! credential value.
//!
//! No crate in the workspace depends on anything *except* `chorus-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

use serde::{Deserialize, Serialize};

pub mod provision;
pub mod tts;

pub use provision::{
    AgentProperties, AgentProvisionRequest, AsrProperties, LlmParams, LlmProperties,
    SystemMessage, VadProperties,
};
pub use tts::{ElevenLabsTts, MicrosoftTts, TtsParams};

/// The identity a client supplies when asking for an agent.
///
/// The upstream provisioning API distinguishes numeric channel identities
/// from opaque string identities, so both JSON shapes are accepted on the
/// wire. Any other JSON shape fails deserialization and is reported as a
/// client error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequesterId {
    /// An opaque string identity, e.g. `"user-1234"`.
    Text(String),
    /// A numeric channel identity, e.g. `1234`.
    Numeric(i64),
}

impl RequesterId {
    /// Returns the identity as it appears on the upstream wire.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Numeric(n) => n.to_string(),
        }
    }

    /// Whether the stringified identity contains at least one ASCII letter.
    ///
    /// The upstream API must be told whether remote identities are numeric
    /// or opaque strings; `"1234"` counts as numeric, `"user-1234"` does not.
    pub fn contains_alpha(&self) -> bool {
        match self {
            Self::Text(s) => s.chars().any(|c| c.is_ascii_alphabetic()),
            Self::Numeric(_) => false,
        }
    }
}

/// Client request to start a conversational agent in a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteAgentRequest {
    /// The identity of the user the agent should converse with.
    pub requester_id: RequesterId,
    /// The channel the agent joins. Length must be within 3–64 characters.
    pub channel_name: String,
    /// Input media the agent accepts. Defaults to `["text"]` when omitted.
    #[serde(default)]
    pub input_modalities: Option<Vec<String>>,
    /// Output media the agent produces. Defaults to `["text", "audio"]`
    /// when omitted.
    #[serde(default)]
    pub output_modalities: Option<Vec<String>>,
}

/// Client request to stop a previously provisioned agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveAgentRequest {
    /// The upstream identifier returned when the agent was provisioned.
    pub agent_id: String,
}

/// The upstream provisioning service's answer to a successful invite.
///
/// Passed through to the client unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub agent_id: String,
    pub create_ts: i64,
    pub state: String,
}

/// A time-boxed signed value granting an identity access to a channel.
///
/// Created on demand, never persisted. `expires_at` is a Unix timestamp in
/// seconds; the issuing policy is a fixed one-hour TTL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credential {
    pub token: String,
    pub identity: String,
    pub channel: String,
    pub expires_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requester_id_accepts_string_and_integer() {
        let from_string: RequesterId = serde_json::from_str("\"user-1234\"").unwrap();
        assert_eq!(from_string, RequesterId::Text("user-1234".to_string()));

        let from_int: RequesterId = serde_json::from_str("1234").unwrap();
        assert_eq!(from_int, RequesterId::Numeric(1234));
    }

    #[test]
    fn requester_id_rejects_other_json_shapes() {
        assert!(serde_json::from_str::<RequesterId>("1.5").is_err());
        assert!(serde_json::from_str::<RequesterId>("true").is_err());
        assert!(serde_json::from_str::<RequesterId>("[\"a\"]").is_err());
        assert!(serde_json::from_str::<RequesterId>("{\"id\": 1}").is_err());
    }

    #[test]
    fn contains_alpha_mirrors_string_identity_rule() {
        assert!(!RequesterId::Text("1234".to_string()).contains_alpha());
        assert!(RequesterId::Text("user-1234".to_string()).contains_alpha());
        assert!(!RequesterId::Text("-42".to_string()).contains_alpha());
        assert!(!RequesterId::Numeric(1234).contains_alpha());
    }

    #[test]
    fn to_wire_stringifies_numeric_identities() {
        assert_eq!(RequesterId::Numeric(42).to_wire(), "42");
        assert_eq!(RequesterId::Text("abc".to_string()).to_wire(), "abc");
    }

    #[test]
    fn invite_request_parses_without_modalities() {
        let req: InviteAgentRequest = serde_json::from_str(
            r#"{"requester_id": "1234", "channel_name": "demo-chan"}"#,
        )
        .unwrap();
        assert_eq!(req.channel_name, "demo-chan");
        assert!(req.input_modalities.is_none());
        assert!(req.output_modalities.is_none());
    }

    #[test]
    fn agent_response_round_trips_upstream_shape() {
        let resp: AgentResponse = serde_json::from_str(
            r#"{"agent_id": "agt-1", "create_ts": 1700000000, "state": "RUNNING"}"#,
        )
        .unwrap();
        assert_eq!(resp.agent_id, "agt-1");
        assert_eq!(resp.state, "RUNNING");
    }
}
