//! The outbound provisioning payload.
//!
//! `AgentProvisionRequest` is the vendor-specific request the gateway sends
//! to the external provisioning service's `join` endpoint. It is composed
//! fresh per invite, never shared or mutated after construction, and
//! discarded once the upstream call returns.

use crate::tts::TtsParams;
use serde::{Deserialize, Serialize};

/// Top-level body for `POST {base}/{app_id}/join`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProvisionRequest {
    /// Human-readable session label, `conversation-<epoch_millis>-<suffix>`.
    /// A label only — callers must not rely on it for later lookup.
    pub name: String,
    pub properties: AgentProperties,
}

/// Everything the provisioning service needs to place an agent in a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProperties {
    /// The channel the agent joins.
    pub channel: String,
    /// The agent's own channel credential.
    pub token: String,
    /// The identity the agent publishes under.
    pub agent_rtc_uid: String,
    /// The identities the agent listens to. Always a one-element list
    /// holding the requester's identity.
    pub remote_rtc_uids: Vec<String>,
    /// Whether `remote_rtc_uids` holds opaque string identities rather
    /// than numeric ones.
    pub enable_string_uid: bool,
    /// Seconds of silence before the upstream tears the agent down.
    pub idle_timeout: u32,
    pub asr: AsrProperties,
    pub llm: LlmProperties,
    pub tts: TtsParams,
    pub vad: VadProperties,
}

/// Speech-recognition settings. Fixed per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsrProperties {
    pub language: String,
    pub task: String,
}

/// LLM backend settings forwarded to the provisioning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmProperties {
    pub url: String,
    pub api_key: String,
    pub system_messages: Vec<SystemMessage>,
    pub greeting_message: String,
    pub failure_message: String,
    pub max_history: u32,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub params: LlmParams,
}

/// A chat message seeding the agent's conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub role: String,
    pub content: String,
}

impl SystemMessage {
    /// A message with the `system` role.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Pass-through model parameters for the LLM backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmParams {
    pub model: String,
}

/// Voice-activity-detection tuning. Deployment-level knobs, never
/// client-request fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadProperties {
    pub interrupt_duration_ms: u32,
    pub prefix_padding_ms: u32,
    pub silence_duration_ms: u32,
    pub max_speech_duration_ms: u32,
    pub threshold: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::{MicrosoftTts, TtsParams};

    fn sample_request() -> AgentProvisionRequest {
        AgentProvisionRequest {
            name: "conversation-1700000000000-a1b2c3".to_string(),
            properties: AgentProperties {
                channel: "demo-chan".to_string(),
                token: "tok".to_string(),
                agent_rtc_uid: "Agent".to_string(),
                remote_rtc_uids: vec!["1234".to_string()],
                enable_string_uid: false,
                idle_timeout: 30,
                asr: AsrProperties {
                    language: "en-US".to_string(),
                    task: "conversation".to_string(),
                },
                llm: LlmProperties {
                    url: "https://llm.example/v1/chat".to_string(),
                    api_key: "sk-test".to_string(),
                    system_messages: vec![SystemMessage::system("You are helpful.")],
                    greeting_message: "Hello".to_string(),
                    failure_message: "Sorry".to_string(),
                    max_history: 10,
                    input_modalities: vec!["text".to_string()],
                    output_modalities: vec!["text".to_string(), "audio".to_string()],
                    params: LlmParams {
                        model: "gpt-4o-mini".to_string(),
                    },
                },
                tts: TtsParams::Microsoft(MicrosoftTts {
                    key: "k".to_string(),
                    region: "eastus".to_string(),
                    voice_name: "en-US-AriaNeural".to_string(),
                    rate: 1.0,
                    volume: 100.0,
                }),
                vad: VadProperties {
                    interrupt_duration_ms: 160,
                    prefix_padding_ms: 300,
                    silence_duration_ms: 480,
                    max_speech_duration_ms: 15000,
                    threshold: 0.5,
                },
            },
        }
    }

    #[test]
    fn provision_request_serializes_upstream_shape() {
        let value = serde_json::to_value(sample_request()).unwrap();

        assert_eq!(value["name"], "conversation-1700000000000-a1b2c3");
        assert_eq!(value["properties"]["channel"], "demo-chan");
        assert_eq!(value["properties"]["remote_rtc_uids"][0], "1234");
        assert_eq!(value["properties"]["enable_string_uid"], false);
        assert_eq!(value["properties"]["asr"]["language"], "en-US");
        assert_eq!(value["properties"]["vad"]["silence_duration_ms"], 480);
        assert_eq!(value["properties"]["tts"]["vendor"], "microsoft");
        assert_eq!(value["properties"]["llm"]["system_messages"][0]["role"], "system");
    }
}
