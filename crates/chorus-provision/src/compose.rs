//! Provisioning request composition.
//!
//! Pure assembly of the outbound [`AgentProvisionRequest`] from a validated
//! invite, a freshly issued agent credential, and a resolved TTS block. The
//! ASR/VAD values and the LLM history bound are deployment tuning constants,
//! not client-request fields.

use crate::config::LlmSettings;
use crate::session;
use chorus_types::{
    AgentProperties, AgentProvisionRequest, AsrProperties, Credential, InviteAgentRequest,
    LlmParams, LlmProperties, SystemMessage, TtsParams, VadProperties,
};

/// Seconds of silence before the upstream tears an idle agent down.
const IDLE_TIMEOUT_SECS: u32 = 30;
/// Conversation turns the LLM backend keeps.
const MAX_HISTORY: u32 = 10;

const ASR_LANGUAGE: &str = "en-US";
const ASR_TASK: &str = "conversation";

const VAD: VadProperties = VadProperties {
    interrupt_duration_ms: 160,
    prefix_padding_ms: 300,
    silence_duration_ms: 480,
    max_speech_duration_ms: 15000,
    threshold: 0.5,
};

fn default_input_modalities() -> Vec<String> {
    vec!["text".to_string()]
}

fn default_output_modalities() -> Vec<String> {
    vec!["text".to_string(), "audio".to_string()]
}

/// Derives a fresh session name, `conversation-<epoch_millis>-<suffix>`.
pub fn new_session_name() -> String {
    session::session_label("conversation")
}

/// Builds the upstream provisioning body.
///
/// `enable_string_uid` mirrors the upstream API's distinction between
/// numeric and opaque string identities: it is set iff the stringified
/// requester identity contains an ASCII letter, and is never configurable.
pub fn compose(
    name: String,
    invite: &InviteAgentRequest,
    agent_credential: &Credential,
    tts: TtsParams,
    llm: &LlmSettings,
) -> AgentProvisionRequest {
    AgentProvisionRequest {
        name,
        properties: AgentProperties {
            channel: invite.channel_name.clone(),
            token: agent_credential.token.clone(),
            agent_rtc_uid: agent_credential.identity.clone(),
            remote_rtc_uids: vec![invite.requester_id.to_wire()],
            enable_string_uid: invite.requester_id.contains_alpha(),
            idle_timeout: IDLE_TIMEOUT_SECS,
            asr: AsrProperties {
                language: ASR_LANGUAGE.to_string(),
                task: ASR_TASK.to_string(),
            },
            llm: LlmProperties {
                url: llm.url.clone(),
                api_key: llm.api_key.clone(),
                system_messages: vec![SystemMessage::system(llm.system_prompt.clone())],
                greeting_message: llm.greeting_message.clone(),
                failure_message: llm.failure_message.clone(),
                max_history: MAX_HISTORY,
                input_modalities: invite
                    .input_modalities
                    .clone()
                    .unwrap_or_else(default_input_modalities),
                output_modalities: invite
                    .output_modalities
                    .clone()
                    .unwrap_or_else(default_output_modalities),
                params: LlmParams {
                    model: llm.model.clone(),
                },
            },
            tts,
            vad: VAD,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_types::{MicrosoftTts, RequesterId};

    fn invite(requester_id: RequesterId) -> InviteAgentRequest {
        InviteAgentRequest {
            requester_id,
            channel_name: "demo-chan".to_string(),
            input_modalities: None,
            output_modalities: None,
        }
    }

    fn credential() -> Credential {
        Credential {
            token: "tok".to_string(),
            identity: "Agent".to_string(),
            channel: "demo-chan".to_string(),
            expires_at: 1_700_003_600,
        }
    }

    fn tts() -> TtsParams {
        TtsParams::Microsoft(MicrosoftTts {
            key: "k".to_string(),
            region: "eastus".to_string(),
            voice_name: "en-US-AriaNeural".to_string(),
            rate: 1.0,
            volume: 100.0,
        })
    }

    #[test]
    fn numeric_identity_disables_string_uid() {
        let request = compose(
            "conversation-1-abcdef".to_string(),
            &invite(RequesterId::Text("1234".to_string())),
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        assert_eq!(request.properties.remote_rtc_uids, vec!["1234"]);
        assert!(!request.properties.enable_string_uid);
    }

    #[test]
    fn alphabetic_identity_enables_string_uid() {
        let request = compose(
            "conversation-1-abcdef".to_string(),
            &invite(RequesterId::Text("user-1234".to_string())),
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        assert_eq!(request.properties.remote_rtc_uids, vec!["user-1234"]);
        assert!(request.properties.enable_string_uid);
    }

    #[test]
    fn omitted_modalities_take_defaults() {
        let request = compose(
            "conversation-1-abcdef".to_string(),
            &invite(RequesterId::Numeric(7)),
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        assert_eq!(request.properties.llm.input_modalities, vec!["text"]);
        assert_eq!(
            request.properties.llm.output_modalities,
            vec!["text", "audio"]
        );
    }

    #[test]
    fn caller_modalities_are_kept() {
        let mut inv = invite(RequesterId::Numeric(7));
        inv.input_modalities = Some(vec!["audio".to_string()]);
        inv.output_modalities = Some(vec!["audio".to_string()]);

        let request = compose(
            "conversation-1-abcdef".to_string(),
            &inv,
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        assert_eq!(request.properties.llm.input_modalities, vec!["audio"]);
        assert_eq!(request.properties.llm.output_modalities, vec!["audio"]);
    }

    #[test]
    fn fixed_tuning_constants_are_applied() {
        let request = compose(
            "conversation-1-abcdef".to_string(),
            &invite(RequesterId::Numeric(7)),
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        let props = &request.properties;
        assert_eq!(props.idle_timeout, 30);
        assert_eq!(props.asr.language, "en-US");
        assert_eq!(props.llm.max_history, 10);
        assert_eq!(props.vad.silence_duration_ms, 480);
        assert_eq!(props.vad.max_speech_duration_ms, 15000);
        assert_eq!(props.vad.interrupt_duration_ms, 160);
        assert_eq!(props.vad.prefix_padding_ms, 300);
        assert!((props.vad.threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn agent_credential_flows_into_the_request() {
        let request = compose(
            "conversation-1-abcdef".to_string(),
            &invite(RequesterId::Numeric(7)),
            &credential(),
            tts(),
            &LlmSettings::default(),
        );

        assert_eq!(request.properties.token, "tok");
        assert_eq!(request.properties.agent_rtc_uid, "Agent");
        assert_eq!(request.properties.channel, "demo-chan");
    }

    #[test]
    fn session_name_has_conversation_prefix() {
        let name = new_session_name();
        assert!(name.starts_with("conversation-"));
    }
}
