pub const DEFAULT_LANG: &str = "ko-KR";
pub const DEFAULT_RATE: f64 = 0.8;
pub const DEFAULT_PITCH: f64 = 1.0;
pub const DEFAULT_VOLUME: f64 = 0.9;

/// espeak's "normal" words-per-minute.
const BASE_SPEED: f64 = 150.0;
const BASE_PITCH: f64 = 50.0;
/// espeak amplitude scale tops out around this value.
const BASE_VOLUME: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Ko,
    En,
}

impl Voice {
    /// Anything tagged `ko*` speaks Korean, everything else falls back to English.
    pub fn from_lang(lang: &str) -> Self {
        if lang.starts_with("ko") {
            Voice::Ko
        } else {
            Voice::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Ko => "ko",
            Voice::En => "en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceParameters {
    pub voice: Voice,
    pub speed: i32,
    pub pitch_level: i32,
    pub volume_level: i32,
}

impl VoiceParameters {
    pub fn derive(lang: &str, rate: f64, pitch: f64, volume: f64) -> Self {
        Self {
            voice: Voice::from_lang(lang),
            speed: scale_to_level(rate, BASE_SPEED),
            pitch_level: scale_to_level(pitch, BASE_PITCH),
            volume_level: scale_to_level(volume, BASE_VOLUME),
        }
    }
}

impl Default for VoiceParameters {
    fn default() -> Self {
        Self::derive(DEFAULT_LANG, DEFAULT_RATE, DEFAULT_PITCH, DEFAULT_VOLUME)
    }
}

/// Scale a multiplier against an espeak baseline, truncating toward zero.
///
/// Out-of-range products saturate at the `i32` bounds and NaN becomes 0.
pub fn scale_to_level(multiplier: f64, baseline: f64) -> i32 {
    (multiplier * baseline).trunc() as i32
}
