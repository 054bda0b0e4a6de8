//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.prophecy/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ServiceKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProphecyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub service: Option<ServiceKind>,
    pub advance_delay_ms: Option<u64>,
    pub reading_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1200;
pub const DEFAULT_READING_TIMEOUT_MS: u64 = 25_000;
pub const DEFAULT_REMOTE_BASE_URL: &str = "http://localhost:8787";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub service: ServiceKind,
    pub advance_delay: Duration,
    pub reading_timeout: Duration,
    pub api_key: Option<String>,
    pub remote_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.prophecy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".prophecy").join("config.toml"))
}

/// Load config from `~/.prophecy/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ProphecyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ProphecyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ProphecyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ProphecyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ProphecyConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Prophecy Hall Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# service = "static"                 # "static" or "remote"
# advance_delay_ms = 1200            # pause after the second card is drawn
# reading_timeout_ms = 25000         # a slower reading counts as a failure

# [remote]
# api_key = "..."                    # Or set API_KEY env var
# base_url = "http://localhost:8787" # Or set PROPHECY_REMOTE_URL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_service` is from the `--service` flag (None = not specified).
pub fn resolve(config: &ProphecyConfig, cli_service: Option<ServiceKind>) -> ResolvedConfig {
    // Service: CLI → env → config → default
    let service = cli_service
        .or_else(|| {
            std::env::var("PROPHECY_SERVICE")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .or(config.general.service)
        .unwrap_or_default();

    // API key: env → config
    let api_key = std::env::var("API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.remote.api_key.clone());

    // Remote base URL: env → config → default
    let remote_base_url = std::env::var("PROPHECY_REMOTE_URL")
        .ok()
        .or_else(|| config.remote.base_url.clone())
        .unwrap_or_else(|| DEFAULT_REMOTE_BASE_URL.to_string());

    ResolvedConfig {
        service,
        advance_delay: Duration::from_millis(
            config
                .general
                .advance_delay_ms
                .unwrap_or(DEFAULT_ADVANCE_DELAY_MS),
        ),
        reading_timeout: Duration::from_millis(
            config
                .general
                .reading_timeout_ms
                .unwrap_or(DEFAULT_READING_TIMEOUT_MS),
        ),
        api_key,
        remote_base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ProphecyConfig::default();
        assert!(config.general.service.is_none());
        assert!(config.remote.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ProphecyConfig::default();
        let resolved = resolve(&config, Some(ServiceKind::Static));
        assert_eq!(resolved.advance_delay, Duration::from_millis(1200));
        assert_eq!(resolved.reading_timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ProphecyConfig {
            general: GeneralConfig {
                service: Some(ServiceKind::Remote),
                advance_delay_ms: Some(300),
                reading_timeout_ms: Some(5000),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.advance_delay, Duration::from_millis(300));
        assert_eq!(resolved.reading_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_cli_service_wins() {
        let config = ProphecyConfig {
            general: GeneralConfig {
                service: Some(ServiceKind::Remote),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(ServiceKind::Static));
        assert_eq!(resolved.service, ServiceKind::Static);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
service = "remote"
advance_delay_ms = 800

[remote]
api_key = "sk-test-123"
base_url = "http://192.168.1.100:8787"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.service, Some(ServiceKind::Remote));
        assert_eq!(config.general.advance_delay_ms, Some(800));
        assert!(config.general.reading_timeout_ms.is_none());
        assert_eq!(config.remote.api_key.as_deref(), Some("sk-test-123"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nservice = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
