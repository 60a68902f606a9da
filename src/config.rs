//! User configuration, read from `<config dir>/pdf-word-converter/config.toml`
//! and then overridden from the environment.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/convert";

const APP_DIR: &str = "pdf-word-converter";
const ENDPOINT_VAR: &str = "PDF2WORD_ENDPOINT";
const OUTPUT_DIR_VAR: &str = "PDF2WORD_OUTPUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion service URL.
    pub endpoint: String,
    /// Where converted documents are saved. Falls back to the OS download dir.
    pub output_dir: Option<PathBuf>,
    /// Open each saved document with the system handler.
    pub open_after_download: bool,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: None,
            open_after_download: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `Ok(None)` when there is no file at `path`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Loads the config file if there is one, then applies environment
    /// overrides. A broken file is reported and replaced by defaults.
    pub fn load() -> Self {
        let from_file = match Self::path() {
            Some(path) => match Self::from_file(&path) {
                Ok(Some(config)) => {
                    info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Ok(None) => Self::default(),
                Err(e) => {
                    warn!(error = %e, "Ignoring configuration file");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        from_file.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:8000/convert");
        assert!(config.output_dir.is_none());
        assert!(!config.open_after_download);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str("open_after_download = true\n").unwrap();
        assert!(config.open_after_download);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml_str(
            r#"
endpoint = "http://converter.lan:9000/convert"
output_dir = "/tmp/converted"
request_timeout_secs = 30
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://converter.lan:9000/convert");
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/converted")));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/converted"));
    }

    #[test]
    fn test_malformed_file() {
        let err = Config::from_toml_str("endpoint = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::from_file(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = \"http://127.0.0.1:1234/convert\"\n").unwrap();

        let loaded = Config::from_file(&path).unwrap().unwrap();
        assert_eq!(loaded.endpoint, "http://127.0.0.1:1234/convert");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENDPOINT_VAR, " http://other:8000/convert "),
            (OUTPUT_DIR_VAR, "/srv/out"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_env_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.endpoint, "http://other:8000/convert");
        assert_eq!(config.output_dir, Some(PathBuf::from("/srv/out")));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = Config::default().with_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
