use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub espeak_bin: PathBuf,
    pub temp_dir: PathBuf,
    /// `None` waits for the synthesizer indefinitely.
    pub synth_timeout: Option<Duration>,
    pub normalize_text: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "5000".to_string());

        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            expected: "a port number",
            value: port.clone(),
        })?;

        let addr_str = format!("{}:{}", host, port);
        let addr: SocketAddr = addr_str.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HOST",
            expected: "an IP address",
            value: host,
        })?;

        let espeak_bin = lookup("ESPEAK_BIN")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "espeak".to_string())
            .into();

        let temp_dir = lookup("TTS_TEMP_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        let synth_timeout = match lookup("SYNTH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "SYNTH_TIMEOUT_SECS",
                    expected: "a whole number of seconds",
                    value: raw.clone(),
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(30)),
        };

        let normalize_text = match lookup("NORMALIZE_TEXT") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                name: "NORMALIZE_TEXT",
                expected: "true or false",
                value: raw,
            })?,
            None => true,
        };

        Ok(Self {
            addr,
            espeak_bin,
            temp_dir,
            synth_timeout,
            normalize_text,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.espeak_bin, PathBuf::from("espeak"));
        assert_eq!(config.temp_dir, std::env::temp_dir());
        assert_eq!(config.synth_timeout, Some(Duration::from_secs(30)));
        assert!(config.normalize_text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8123"),
            ("ESPEAK_BIN", "/usr/bin/espeak-ng"),
            ("TTS_TEMP_DIR", "/var/tmp/tts"),
            ("SYNTH_TIMEOUT_SECS", "5"),
            ("NORMALIZE_TEXT", "off"),
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8123".parse().unwrap());
        assert_eq!(config.espeak_bin, PathBuf::from("/usr/bin/espeak-ng"));
        assert_eq!(config.temp_dir, PathBuf::from("/var/tmp/tts"));
        assert_eq!(config.synth_timeout, Some(Duration::from_secs(5)));
        assert!(!config.normalize_text);
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = config_from(&[("SYNTH_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(config.synth_timeout, None);
    }

    #[test]
    fn test_bad_port_names_variable() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_bad_host() {
        assert!(config_from(&[("HOST", "not an address")]).is_err());
    }

    #[test]
    fn test_bad_flag() {
        let err = config_from(&[("NORMALIZE_TEXT", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("NORMALIZE_TEXT"));
    }
}
