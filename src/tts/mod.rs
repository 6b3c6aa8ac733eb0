pub mod artifact;
pub mod espeak;
pub mod voice;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppError;
use crate::text;

pub use artifact::TempArtifact;
pub use espeak::{Espeak, ProbeReport};
pub use voice::VoiceParameters;

pub const MAX_TEXT_CHARS: usize = 10_000;

pub struct TtsService {
    espeak: Espeak,
    temp_dir: PathBuf,
    normalize_text: bool,
}

impl TtsService {
    pub fn new(espeak: Espeak, temp_dir: PathBuf, normalize_text: bool) -> Self {
        Self {
            espeak,
            temp_dir,
            normalize_text,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Espeak::new(config.espeak_bin.clone(), config.synth_timeout),
            config.temp_dir.clone(),
            config.normalize_text,
        )
    }

    pub async fn speak(&self, text: &str, params: &VoiceParameters) -> Result<Vec<u8>, AppError> {
        // 1. Clean up the text
        let text = self.prepare_text(text)?;

        // 2. Reserve a private output file
        let artifact = TempArtifact::create(&self.temp_dir)?;

        // 3. Synthesize into it
        self.espeak.synthesize(params, &text, artifact.path()).await?;

        // 4. Read it back; the file goes away when `artifact` drops
        let wav = artifact.read_audio().await?;

        match artifact::describe_wav(&wav) {
            Some(summary) => tracing::info!(
                "Synthesized {} bytes ({:.2}s, {} Hz, {} ch)",
                wav.len(),
                summary.duration_secs,
                summary.sample_rate,
                summary.channels
            ),
            None => tracing::debug!("Synthesized {} bytes with an unreadable WAV header", wav.len()),
        }

        Ok(wav)
    }

    pub async fn probe(&self) -> Result<ProbeReport, AppError> {
        self.espeak.probe().await
    }

    fn prepare_text(&self, raw: &str) -> Result<String, AppError> {
        let text = if self.normalize_text {
            text::normalize(raw)
        } else {
            raw.to_string()
        };

        if text.trim().is_empty() {
            return Err(AppError::InvalidInput("Text cannot be empty".into()));
        }

        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::InvalidInput(format!(
                "Text too long (max {} chars)",
                MAX_TEXT_CHARS
            )));
        }

        Ok(text)
    }
}
