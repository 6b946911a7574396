//! TTS vendor configuration.
//!
//! The upstream provisioning API accepts a vendor-tagged TTS block,
//! `{"vendor": "...", "params": {...}}`, whose parameter shape differs per
//! vendor. `TtsParams` models this as a closed tagged union: adding a vendor
//! means adding a variant here and a resolution branch, never new ad-hoc
//! fields. Callers treat the value as a whole and never destructure a
//! specific variant's shape.

use serde::{Deserialize, Serialize};

/// Vendor-tagged TTS configuration, serialized exactly as the upstream
/// wire expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "vendor", content = "params", rename_all = "lowercase")]
pub enum TtsParams {
    Microsoft(MicrosoftTts),
    Elevenlabs(ElevenLabsTts),
}

impl TtsParams {
    /// The wire tag of the selected vendor.
    pub fn vendor(&self) -> &'static str {
        match self {
            Self::Microsoft(_) => "microsoft",
            Self::Elevenlabs(_) => "elevenlabs",
        }
    }
}

/// Microsoft (Azure) speech synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrosoftTts {
    pub key: String,
    pub region: String,
    pub voice_name: String,
    pub rate: f32,
    pub volume: f32,
}

/// ElevenLabs speech synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevenLabsTts {
    pub key: String,
    pub voice_id: String,
    pub model_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn microsoft_variant_serializes_with_vendor_tag() {
        let tts = TtsParams::Microsoft(MicrosoftTts {
            key: "k".to_string(),
            region: "eastus".to_string(),
            voice_name: "en-US-AriaNeural".to_string(),
            rate: 1.0,
            volume: 100.0,
        });

        let value = serde_json::to_value(&tts).unwrap();
        assert_eq!(value["vendor"], "microsoft");
        assert_eq!(value["params"]["region"], "eastus");
        assert_eq!(value["params"]["voice_name"], "en-US-AriaNeural");
        assert_eq!(tts.vendor(), "microsoft");
    }

    #[test]
    fn elevenlabs_variant_serializes_with_vendor_tag() {
        let tts = TtsParams::Elevenlabs(ElevenLabsTts {
            key: "k".to_string(),
            voice_id: "v-1".to_string(),
            model_id: "eleven_flash_v2_5".to_string(),
        });

        let value = serde_json::to_value(&tts).unwrap();
        assert_eq!(value["vendor"], "elevenlabs");
        assert_eq!(value["params"]["voice_id"], "v-1");
        assert_eq!(tts.vendor(), "elevenlabs");
    }

    #[test]
    fn tagged_union_round_trips() {
        let original = json!({
            "vendor": "elevenlabs",
            "params": {"key": "k", "voice_id": "v", "model_id": "m"}
        });
        let parsed: TtsParams = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), original);
    }
}
