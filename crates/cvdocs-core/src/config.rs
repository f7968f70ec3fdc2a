use crate::error::{DocsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

pub const CONFIG_FILENAME: &str = "config.json";
pub const LOG_FILENAME: &str = "cvdocs.log";
pub const DEFAULT_BASE_URL: &str = "https://api-sandbox.stellantis-cv.com";
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;

/// Settings shared by every component, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Prefix of every URL in generated cURL commands.
    pub sandbox_base_url: String,
    /// How long a code block shows its "copied" confirmation.
    pub copy_feedback_ms: u64,
    /// Simulated latency of the API explorer.
    pub response_delay_ms: u64,
    /// Seed for the uptime history; a fresh one is drawn per run when unset.
    pub status_seed: Option<u64>,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sandbox_base_url: DEFAULT_BASE_URL.to_string(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            status_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl DocsConfig {
    /// Load `~/.cvdocs/config.json`, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;

        // Handle empty config file
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = &self.sandbox_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DocsError::InvalidConfig(format!(
                "sandbox_base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if url.ends_with('/') {
            return Err(DocsError::InvalidConfig(
                "sandbox_base_url must not end with '/'".to_string(),
            ));
        }
        if self.copy_feedback_ms == 0 || self.response_delay_ms == 0 {
            return Err(DocsError::InvalidConfig(
                "copy_feedback_ms and response_delay_ms must be greater than zero".to_string(),
            ));
        }
        validate_log_level(&self.log_level)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

/// Check a filter such as `info` or `cvdocs_core=debug,warn`.
///
/// Every directive must end in a level; a bare word is read as a level, not
/// as a target.
fn validate_log_level(filter: &str) -> Result<()> {
    if filter.trim().is_empty() {
        return Err(DocsError::InvalidConfig(
            "log_level must not be empty".to_string(),
        ));
    }
    for directive in filter.split(',').map(str::trim) {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level);
        if level.is_empty() || LevelFilter::from_str(level).is_err() {
            return Err(DocsError::InvalidConfig(format!(
                "log_level directive '{}' does not name a level (off, error, warn, info, debug, trace)",
                directive
            )));
        }
    }
    Ok(())
}

/// Get the cvdocs configuration directory
pub fn get_config_dir() -> PathBuf {
    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".cvdocs"))
        .unwrap_or_else(|_| PathBuf::from(".cvdocs"))
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }
    Ok(config_dir)
}

pub fn get_config_file_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILENAME)
}

pub fn get_log_file_path() -> PathBuf {
    get_config_dir().join(LOG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = DocsConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, DocsConfig::default());
        assert_eq!(config.copy_feedback(), Duration::from_millis(2000));
        assert_eq!(config.response_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "status_seed": 7, "response_delay_ms": 250 }"#).unwrap();

        let config = DocsConfig::load_from(&path).unwrap();
        assert_eq!(config.status_seed, Some(7));
        assert_eq!(config.response_delay_ms, 250);
        assert_eq!(config.sandbox_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "sandbox_base_url": "api.example.com" }"#).unwrap();

        let err = DocsConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, DocsError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_delays() {
        let config = DocsConfig {
            copy_feedback_ms: 0,
            ..DocsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_levels() {
        for log_level in ["verbose", "cvdocs=loud", "", "info,"] {
            let config = DocsConfig {
                log_level: log_level.to_string(),
                ..DocsConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(DocsError::InvalidConfig(_))),
                "{:?}",
                log_level
            );
        }
    }

    #[test]
    fn accepts_levels_and_target_directives() {
        for log_level in ["info", "DEBUG", "cvdocs_core=debug,warn", "off"] {
            let config = DocsConfig {
                log_level: log_level.to_string(),
                ..DocsConfig::default()
            };
            assert!(config.validate().is_ok(), "{}", log_level);
        }
    }

    #[test]
    fn invalid_log_level_in_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_level": "chatty" }"#).unwrap();

        let err = DocsConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            DocsConfig::load_from(&path),
            Err(DocsError::Json(_))
        ));
    }
}
