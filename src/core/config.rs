//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flashdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::autoplay::DEFAULT_INTERVAL;
use crate::core::loader::DEFAULT_TERMS;
use crate::lookup::free_dictionary::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub autoplay: AutoplayConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    pub terms: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AutoplayConfig {
    pub interval_ms: Option<u64>,
    pub start_playing: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub fullscreen: Option<bool>,
}

/// Values supplied on the command line. `None`/empty = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub terms: Vec<String>,
    pub interval_ms: Option<u64>,
    pub play: bool,
    pub dictionary_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub terms: Vec<String>,
    pub autoplay_interval: Duration,
    pub start_playing: bool,
    pub dictionary_url: String,
    pub lookup_timeout: Duration,
    pub fullscreen_enabled: bool,
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

/// Returns the path to `~/.flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flashdeck").join("config.toml"))
}

/// Load config from `~/.flashdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlashdeckConfig::default()`.
pub fn load_config() -> Result<FlashdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FlashdeckConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<FlashdeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FlashdeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FlashdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Flashdeck Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [deck]
# terms = ["Information", "Apple", "Computer", "Program", "Nature", "Science", "Music", "Travel"]

# [autoplay]
# interval_ms = 3000                 # Or set FLASHDECK_AUTOPLAY_MS env var
# start_playing = false

# [dictionary]
# base_url = "https://api.dictionaryapi.dev/api/v2"   # Or FLASHDECK_DICTIONARY_URL
# timeout_secs = 10

# [display]
# fullscreen = true                  # false disables the terminal fullscreen request
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
pub fn resolve(config: &FlashdeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
///
/// A zero interval or timeout at any layer counts as unset, so the next
/// layer down still applies.
pub fn resolve_with<F>(config: &FlashdeckConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Terms: CLI → config → default
    let terms = if !cli.terms.is_empty() {
        cli.terms.clone()
    } else {
        config
            .deck
            .terms
            .clone()
            .unwrap_or_else(|| DEFAULT_TERMS.iter().map(|t| t.to_string()).collect())
    };

    // Interval: CLI → env → config → default
    let interval_ms = nonzero(cli.interval_ms)
        .or_else(|| nonzero(env("FLASHDECK_AUTOPLAY_MS").and_then(|v| v.trim().parse().ok())))
        .or(nonzero(config.autoplay.interval_ms));
    let autoplay_interval = interval_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_INTERVAL);

    // Dictionary URL: CLI → env → config → default
    let dictionary_url = cli
        .dictionary_url
        .clone()
        .or_else(|| env("FLASHDECK_DICTIONARY_URL").filter(|v| !v.is_empty()))
        .or_else(|| config.dictionary.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let lookup_timeout = nonzero(config.dictionary.timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    ResolvedConfig {
        terms,
        autoplay_interval,
        start_playing: cli.play || config.autoplay.start_playing.unwrap_or(false),
        dictionary_url,
        lookup_timeout,
        fullscreen_enabled: config.display.fullscreen.unwrap_or(true),
    }
}

fn nonzero(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn config_with_interval(ms: u64) -> FlashdeckConfig {
        FlashdeckConfig {
            autoplay: AutoplayConfig {
                interval_ms: Some(ms),
                start_playing: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = FlashdeckConfig::default();
        assert!(config.deck.terms.is_none());
        assert!(config.autoplay.interval_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&FlashdeckConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.terms.len(), 8);
        assert_eq!(resolved.terms[0], "Information");
        assert_eq!(resolved.terms[7], "Travel");
        assert!(!resolved.start_playing);
        assert_eq!(resolved.lookup_timeout, DEFAULT_TIMEOUT);
        assert!(resolved.fullscreen_enabled);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FlashdeckConfig {
            deck: DeckConfig {
                terms: Some(vec!["Rust".to_string(), "Crab".to_string()]),
            },
            autoplay: AutoplayConfig {
                interval_ms: Some(1500),
                start_playing: Some(true),
            },
            dictionary: DictionaryConfig {
                base_url: None,
                timeout_secs: Some(3),
            },
            display: DisplayConfig {
                fullscreen: Some(false),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.terms, vec!["Rust", "Crab"]);
        assert!(resolved.start_playing);
        assert_eq!(resolved.lookup_timeout, Duration::from_secs(3));
        assert!(!resolved.fullscreen_enabled);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = FlashdeckConfig {
            deck: DeckConfig {
                terms: Some(vec!["Config".to_string()]),
            },
            dictionary: DictionaryConfig {
                base_url: Some("http://config.example".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            terms: vec!["Cli".to_string()],
            interval_ms: Some(500),
            play: true,
            dictionary_url: Some("http://cli.example".to_string()),
        };
        let resolved = resolve_with(&config, &cli, no_env);
        assert_eq!(resolved.terms, vec!["Cli"]);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(500));
        assert!(resolved.start_playing);
        assert_eq!(resolved.dictionary_url, "http://cli.example");
    }

    #[test]
    fn test_zero_interval_is_ignored() {
        let cli = CliOverrides {
            interval_ms: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with(&FlashdeckConfig::default(), &cli, no_env);
        assert_eq!(resolved.autoplay_interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn test_zero_cli_interval_falls_through_to_config() {
        let cli = CliOverrides {
            interval_ms: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with(&config_with_interval(1500), &cli, no_env);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_env_interval_falls_through_to_config() {
        let env = env_of(&[("FLASHDECK_AUTOPLAY_MS", "0")]);
        let resolved = resolve_with(&config_with_interval(1500), &CliOverrides::default(), env);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_config_interval_uses_default() {
        let resolved = resolve_with(&config_with_interval(0), &CliOverrides::default(), no_env);
        assert_eq!(resolved.autoplay_interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = FlashdeckConfig {
            dictionary: DictionaryConfig {
                base_url: None,
                timeout_secs: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.lookup_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_env_beats_config_file() {
        let config = FlashdeckConfig {
            autoplay: AutoplayConfig {
                interval_ms: Some(1500),
                start_playing: None,
            },
            dictionary: DictionaryConfig {
                base_url: Some("http://config.example".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        let env = env_of(&[
            ("FLASHDECK_AUTOPLAY_MS", "2500"),
            ("FLASHDECK_DICTIONARY_URL", "http://env.example"),
        ]);
        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(2500));
        assert_eq!(resolved.dictionary_url, "http://env.example");
    }

    #[test]
    fn test_cli_beats_env() {
        let env = env_of(&[
            ("FLASHDECK_AUTOPLAY_MS", "2500"),
            ("FLASHDECK_DICTIONARY_URL", "http://env.example"),
        ]);
        let cli = CliOverrides {
            interval_ms: Some(700),
            dictionary_url: Some("http://cli.example".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with(&FlashdeckConfig::default(), &cli, env);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(700));
        assert_eq!(resolved.dictionary_url, "http://cli.example");
    }

    #[test]
    fn test_unparsable_env_interval_falls_through() {
        let env = env_of(&[("FLASHDECK_AUTOPLAY_MS", "fast")]);
        let resolved = resolve_with(&config_with_interval(1500), &CliOverrides::default(), env);
        assert_eq!(resolved.autoplay_interval, Duration::from_millis(1500));

        let env = env_of(&[("FLASHDECK_AUTOPLAY_MS", "fast")]);
        let resolved = resolve_with(&FlashdeckConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.autoplay_interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[deck]
terms = ["Apple", "Music"]

[autoplay]
interval_ms = 2000
start_playing = true

[dictionary]
base_url = "http://localhost:8080/api/v2"
timeout_secs = 5

[display]
fullscreen = false
"#;
        let config: FlashdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.deck.terms.as_deref(),
            Some(&["Apple".to_string(), "Music".to_string()][..])
        );
        assert_eq!(config.autoplay.interval_ms, Some(2000));
        assert_eq!(config.autoplay.start_playing, Some(true));
        assert_eq!(
            config.dictionary.base_url.as_deref(),
            Some("http://localhost:8080/api/v2")
        );
        assert_eq!(config.display.fullscreen, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[autoplay]
interval_ms = 1000
"#;
        let config: FlashdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.autoplay.interval_ms, Some(1000));
        assert!(config.deck.terms.is_none());
        assert!(config.dictionary.base_url.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("flashdeck-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[autoplay\ninterval_ms = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("flashdeck-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.deck.terms.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Flashdeck Configuration"));
        // The generated file is all comments and parses to defaults
        let reparsed: FlashdeckConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.autoplay.interval_ms.is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
