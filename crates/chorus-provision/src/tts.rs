//! TTS vendor resolution.
//!
//! A pure function from (vendor tag, configuration) to the vendor-tagged
//! [`TtsParams`] union. Dispatch is a closed two-way switch: an unrecognized
//! vendor fails with `UnsupportedVendor`, and a missing field for the
//! selected vendor is a configuration error naming every absent field.

use crate::config::TtsSettings;
use crate::error::ProvisionError;
use chorus_types::{ElevenLabsTts, MicrosoftTts, TtsParams};

/// Resolves the configured vendor into a ready-to-send TTS block.
pub fn resolve(settings: &TtsSettings) -> Result<TtsParams, ProvisionError> {
    match settings.vendor.to_ascii_lowercase().as_str() {
        "microsoft" => resolve_microsoft(settings),
        "elevenlabs" => resolve_elevenlabs(settings),
        "" => Err(ProvisionError::Config(
            "tts.vendor is not set".to_string(),
        )),
        other => Err(ProvisionError::UnsupportedVendor(other.to_string())),
    }
}

fn resolve_microsoft(settings: &TtsSettings) -> Result<TtsParams, ProvisionError> {
    let ms = &settings.microsoft;
    let mut missing = Vec::new();
    if ms.key.is_none() {
        missing.push("tts.microsoft.key");
    }
    if ms.region.is_none() {
        missing.push("tts.microsoft.region");
    }
    if ms.voice_name.is_none() {
        missing.push("tts.microsoft.voice_name");
    }
    if ms.rate.is_none() {
        missing.push("tts.microsoft.rate");
    }
    if ms.volume.is_none() {
        missing.push("tts.microsoft.volume");
    }
    if !missing.is_empty() {
        return Err(missing_fields_error("microsoft", &missing));
    }

    Ok(TtsParams::Microsoft(MicrosoftTts {
        key: ms.key.clone().unwrap_or_default(),
        region: ms.region.clone().unwrap_or_default(),
        voice_name: ms.voice_name.clone().unwrap_or_default(),
        rate: ms.rate.unwrap_or_default(),
        volume: ms.volume.unwrap_or_default(),
    }))
}

fn resolve_elevenlabs(settings: &TtsSettings) -> Result<TtsParams, ProvisionError> {
    let el = &settings.elevenlabs;
    let mut missing = Vec::new();
    if el.key.is_none() {
        missing.push("tts.elevenlabs.key");
    }
    if el.voice_id.is_none() {
        missing.push("tts.elevenlabs.voice_id");
    }
    if el.model_id.is_none() {
        missing.push("tts.elevenlabs.model_id");
    }
    if !missing.is_empty() {
        return Err(missing_fields_error("elevenlabs", &missing));
    }

    Ok(TtsParams::Elevenlabs(ElevenLabsTts {
        key: el.key.clone().unwrap_or_default(),
        voice_id: el.voice_id.clone().unwrap_or_default(),
        model_id: el.model_id.clone().unwrap_or_default(),
    }))
}

fn missing_fields_error(vendor: &str, missing: &[&str]) -> ProvisionError {
    ProvisionError::Config(format!(
        "missing TTS configuration for vendor `{}`: {}",
        vendor,
        missing.join(", ")
    ))
}
