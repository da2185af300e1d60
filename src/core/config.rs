//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::model::AuthorRef;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub graphql: GraphQlConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub splash_ms: Option<u64>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GraphQlConfig {
    pub endpoint: Option<String>,
    pub admin_secret: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8080/v1/graphql";
pub const DEFAULT_SPLASH_MS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "folio.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub admin_secret: Option<String>,
    pub splash: Duration,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Open the detail screen of this author instead of the author list.
    pub initial_author: Option<AuthorRef>,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config endpoint: {:?}", config.graphql.endpoint);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# splash_ms = 600                    # How long the splash logo stays up
# log_file = "folio.log"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [graphql]
# endpoint = "http://localhost:8080/v1/graphql"   # Or set FOLIO_GRAPHQL_ENDPOINT
# admin_secret = "..."                            # Or set HASURA_ADMIN_SECRET
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `cli_endpoint` is the `--endpoint` flag; `initial_author` comes from
/// `--author`/`--name`.
pub fn resolve(
    config: &FolioConfig,
    cli_endpoint: Option<&str>,
    initial_author: Option<AuthorRef>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FOLIO_GRAPHQL_ENDPOINT").ok())
        .or_else(|| config.graphql.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_string());

    // Admin secret: env → config
    let admin_secret = std::env::var("HASURA_ADMIN_SECRET")
        .ok()
        .or_else(|| config.graphql.admin_secret.clone())
        .filter(|s| !s.is_empty());

    // Log level: env → config → default; unparseable values fall back
    let log_level = std::env::var("FOLIO_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        endpoint,
        admin_secret,
        splash: Duration::from_millis(config.general.splash_ms.unwrap_or(DEFAULT_SPLASH_MS)),
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        ),
        log_level,
        initial_author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FolioConfig::default();
        assert!(config.graphql.endpoint.is_none());
        assert!(config.general.splash_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FolioConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.splash, Duration::from_millis(DEFAULT_SPLASH_MS));
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.initial_author.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            general: GeneralConfig {
                splash_ms: Some(0),
                log_file: Some("/tmp/folio-test.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            graphql: GraphQlConfig {
                endpoint: Some("https://example.hasura.app/v1/graphql".to_string()),
                admin_secret: Some("s3cret".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.splash, Duration::ZERO);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/folio-test.log"));
        if std::env::var("FOLIO_LOG_LEVEL").is_err() {
            assert_eq!(resolved.log_level, LevelFilter::Warn);
        }
        if std::env::var("FOLIO_GRAPHQL_ENDPOINT").is_err() {
            assert_eq!(resolved.endpoint, "https://example.hasura.app/v1/graphql");
        }
        if std::env::var("HASURA_ADMIN_SECRET").is_err() {
            assert_eq!(resolved.admin_secret.as_deref(), Some("s3cret"));
        }
    }

    #[test]
    fn test_resolve_cli_endpoint_wins() {
        let config = FolioConfig {
            graphql: GraphQlConfig {
                endpoint: Some("https://from-config/v1/graphql".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("https://from-cli/v1/graphql"), None);
        assert_eq!(resolved.endpoint, "https://from-cli/v1/graphql");
    }

    #[test]
    fn test_resolve_carries_deep_link() {
        let author = AuthorRef {
            id: "a-1".to_string(),
            name: "Jorge Amado".to_string(),
        };
        let resolved = resolve(&FolioConfig::default(), None, Some(author.clone()));
        assert_eq!(resolved.initial_author, Some(author));
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = FolioConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        if std::env::var("FOLIO_LOG_LEVEL").is_err() {
            assert_eq!(resolve(&config, None, None).log_level, DEFAULT_LOG_LEVEL);
        }
    }

    #[test]
    fn test_empty_admin_secret_is_none() {
        let config = FolioConfig {
            graphql: GraphQlConfig {
                admin_secret: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        if std::env::var("HASURA_ADMIN_SECRET").is_err() {
            assert!(resolve(&config, None, None).admin_secret.is_none());
        }
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[graphql]
endpoint = "https://example.hasura.app/v1/graphql"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.graphql.endpoint.as_deref(),
            Some("https://example.hasura.app/v1/graphql")
        );
        assert!(config.graphql.admin_secret.is_none());
        assert!(config.general.splash_ms.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
splash_ms = 250
log_file = "logs/folio.log"
log_level = "info"

[graphql]
endpoint = "https://example.hasura.app/v1/graphql"
admin_secret = "abc"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.splash_ms, Some(250));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.graphql.admin_secret.as_deref(), Some("abc"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[graphql\nendpoint = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("folio-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.graphql.endpoint.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Folio Configuration"));
        // The generated file is all comments, so it parses to defaults.
        assert!(load_config_from(&path).unwrap().graphql.endpoint.is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
