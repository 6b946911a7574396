//! Configuration values consumed by the provisioning layer.
//!
//! These structs are deserialized from the server's TOML configuration and
//! handed in as immutable values; nothing here reads ambient process state.
//! Secrets are redacted from `Debug` output so they never reach logs.

use serde::Deserialize;
use std::fmt;

fn default_agent_uid() -> String {
    "Agent".to_string()
}

/// Upstream provisioning service settings.
#[derive(Clone, Deserialize)]
pub struct ProvisionConfig {
    /// Base URL of the provisioning API, e.g. `https://api.example.com/v1/projects`.
    #[serde(default)]
    pub base_url: String,
    /// RESTful customer id for HTTP Basic authentication.
    #[serde(default)]
    pub customer_id: String,
    /// RESTful customer secret for HTTP Basic authentication.
    #[serde(default)]
    pub customer_secret: String,
    /// The identity the agent publishes under in the channel.
    #[serde(default = "default_agent_uid")]
    pub agent_uid: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            customer_id: String::new(),
            customer_secret: String::new(),
            agent_uid: default_agent_uid(),
        }
    }
}

impl fmt::Debug for ProvisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionConfig")
            .field("base_url", &self.base_url)
            .field("customer_id", &self.customer_id)
            .field("customer_secret", &"[REDACTED]")
            .field("agent_uid", &self.agent_uid)
            .finish()
    }
}

fn default_system_prompt() -> String {
    "You are a helpful conversational assistant. Keep your answers short and \
     natural, as they will be spoken aloud."
        .to_string()
}

fn default_greeting() -> String {
    "Hello, how can I help you today?".to_string()
}

fn default_failure() -> String {
    "Sorry, I didn't catch that. Could you repeat it?".to_string()
}

/// LLM backend settings forwarded to the provisioning service.
#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    /// System prompt seeding every conversation. A deployment knob, never a
    /// per-request field.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_greeting")]
    pub greeting_message: String,
    #[serde(default = "default_failure")]
    pub failure_message: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            model: String::new(),
            system_prompt: default_system_prompt(),
            greeting_message: default_greeting(),
            failure_message: default_failure(),
        }
    }
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

/// TTS vendor selection plus per-vendor field tables.
///
/// Both vendor tables may be present in the file; only the selected vendor's
/// table is required, and its fields are validated at resolution time.
#[derive(Clone, Default, Deserialize)]
pub struct TtsSettings {
    /// Vendor tag: `microsoft` or `elevenlabs`.
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub microsoft: MicrosoftTtsSettings,
    #[serde(default)]
    pub elevenlabs: ElevenLabsTtsSettings,
}

impl fmt::Debug for TtsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtsSettings")
            .field("vendor", &self.vendor)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MicrosoftTtsSettings {
    pub key: Option<String>,
    pub region: Option<String>,
    pub voice_name: Option<String>,
    pub rate: Option<f32>,
    pub volume: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElevenLabsTtsSettings {
    pub key: Option<String>,
    pub voice_id: Option<String>,
    pub model_id: Option<String>,
}
