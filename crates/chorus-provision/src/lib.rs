//! Agent provisioning for the Chorus gateway.
//!
//! Turns a validated invite into the vendor-specific request the external
//! Conversational-AI provisioning service understands, and forwards removal
//! calls for previously provisioned agents. The layer is a stateless
//! per-request translator: it issues the agent's channel credential,
//! resolves the configured TTS vendor into a tagged parameter block,
//! composes the outbound body, and maps upstream failures into a typed
//! error taxonomy.

pub mod compose;
pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod tts;

pub use config::{ElevenLabsTtsSettings, LlmSettings, MicrosoftTtsSettings, ProvisionConfig, TtsSettings};
pub use error::ProvisionError;
pub use service::ProvisionService;
pub use session::session_label;
