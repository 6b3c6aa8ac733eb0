use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::error::AppError;

/// A uniquely named `.wav` file owned by a single request.
///
/// The file is removed exactly once, when the artifact is dropped.
pub struct TempArtifact {
    path: PathBuf,
    guard: Option<TempPath>,
}

impl TempArtifact {
    pub fn create(dir: &Path) -> io::Result<Self> {
        let guard = tempfile::Builder::new()
            .prefix("tts-")
            .suffix(".wav")
            .tempfile_in(dir)?
            .into_temp_path();

        Ok(Self {
            path: guard.to_path_buf(),
            guard: Some(guard),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back whatever the synthesizer wrote. Missing or zero-length
    /// output is reported as `EmptyOutput`.
    pub async fn read_audio(&self) -> Result<Vec<u8>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(AppError::EmptyOutput),
            Err(e) => return Err(e.into()),
        };

        if bytes.is_empty() {
            return Err(AppError::EmptyOutput);
        }

        Ok(bytes)
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        let Some(guard) = self.guard.take() else {
            return;
        };

        match guard.close() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavSummary {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f64,
}

/// Parse just the WAV header. Returns `None` for anything hound can't read.
pub fn describe_wav(bytes: &[u8]) -> Option<WavSummary> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).ok()?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return None;
    }

    Some(WavSummary {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration_secs: reader.duration() as f64 / spec.sample_rate as f64,
    })
}
