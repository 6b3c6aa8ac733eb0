use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::error::AppError;
use crate::tts::voice::VoiceParameters;

/// Outcome of `espeak --version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub available: bool,
    pub version: Option<String>,
}

enum RunError {
    Spawn(io::Error),
    TimedOut(Duration),
}

/// Handle to the external espeak binary. Every call builds a fresh argument
/// vector; nothing is ever passed through a shell.
#[derive(Debug, Clone)]
pub struct Espeak {
    program: PathBuf,
    /// Always empty outside tests; see `with_leading_args`.
    leading_args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl Espeak {
    pub fn new(program: PathBuf, timeout: Option<Duration>) -> Self {
        Self {
            program,
            leading_args: Vec::new(),
            timeout,
        }
    }

    /// Run `program` with these arguments in front of the espeak ones. Lets
    /// tests drive a script through `/bin/sh` without exec'ing a fresh file.
    #[cfg(test)]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Render `text` into a WAV file at `output_path`.
    pub async fn synthesize(
        &self,
        params: &VoiceParameters,
        text: &str,
        output_path: &Path,
    ) -> Result<(), AppError> {
        let mut command = self.command();
        command
            .arg("-v")
            .arg(params.voice.as_str())
            .arg("-s")
            .arg(params.speed.to_string())
            .arg("-p")
            .arg(params.pitch_level.to_string())
            .arg("-a")
            .arg(params.volume_level.to_string())
            .arg("-w")
            .arg(output_path);

        // Keep text like "-v xx" from being read as options
        if text.starts_with('-') {
            command.arg("--");
        }
        command.arg(text);

        tracing::info!(
            program = %self.program.display(),
            voice = params.voice.as_str(),
            speed = params.speed,
            pitch = params.pitch_level,
            volume = params.volume_level,
            output = %output_path.display(),
            chars = text.chars().count(),
            "Running espeak"
        );

        let output = match self.run(&mut command).await {
            Ok(output) => output,
            Err(RunError::Spawn(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::SynthesisFailed(format!(
                    "{} not found (is espeak installed?)",
                    self.program.display()
                )));
            }
            Err(RunError::Spawn(e)) => {
                return Err(AppError::SynthesisFailed(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                )));
            }
            Err(RunError::TimedOut(limit)) => return Err(AppError::SynthesisTimeout(limit)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(AppError::SynthesisFailed(detail));
        }

        Ok(())
    }

    /// Ask the binary for its version. A missing binary or a non-zero exit is
    /// a normal "unavailable" answer; only unexpected failures are errors.
    pub async fn probe(&self) -> Result<ProbeReport, AppError> {
        let mut command = self.command();
        command.arg("--version");

        match self.run(&mut command).await {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(ProbeReport {
                    available: true,
                    version: (!version.is_empty()).then_some(version),
                })
            }
            Ok(output) => {
                tracing::debug!("{} --version exited with {}", self.program.display(), output.status);
                Ok(ProbeReport {
                    available: false,
                    version: None,
                })
            }
            Err(RunError::Spawn(e)) if e.kind() == io::ErrorKind::NotFound => Ok(ProbeReport {
                available: false,
                version: None,
            }),
            Err(RunError::Spawn(e)) => Err(AppError::IoError(e)),
            Err(RunError::TimedOut(limit)) => Err(AppError::SynthesisTimeout(limit)),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        command
    }

    async fn run(&self, command: &mut Command) -> Result<Output, RunError> {
        let output = command.output();
        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, output).await {
                Ok(result) => result.map_err(RunError::Spawn),
                Err(_) => Err(RunError::TimedOut(limit)),
            },
            None => output.await.map_err(RunError::Spawn),
        }
    }
}
