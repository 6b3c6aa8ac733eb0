pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::tts::voice::{self, VoiceParameters};

/// Body of `POST /api/tts`. Missing or `null` fields fall back to defaults.
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub pitch: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl SpeakRequest {
    pub fn voice_parameters(&self) -> VoiceParameters {
        VoiceParameters::derive(
            self.lang.as_deref().unwrap_or(voice::DEFAULT_LANG),
            self.rate.unwrap_or(voice::DEFAULT_RATE),
            self.pitch.unwrap_or(voice::DEFAULT_PITCH),
            self.volume.unwrap_or(voice::DEFAULT_VOLUME),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub espeak_available: bool,
    pub espeak_version: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthErrorResponse {
    pub status: &'static str,
    pub error: String,
}
