//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.deskpilot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::dispatch::{DEFAULT_SMOOTH_DURATION, DEFAULT_TOLERANCE_PX};
use crate::core::progress::DEFAULT_TICK_INTERVAL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeskpilotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub typing: TypingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MotionConfig {
    pub smooth_duration_secs: Option<f64>,
    pub tolerance_px: Option<i32>,
    pub progress_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypingConfig {
    pub delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_LOG_FILE_NAME: &str = "deskpilot.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub smooth_duration: Duration,
    pub tolerance_px: i32,
    pub progress_interval: Duration,
    pub type_delay: Duration,
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

/// Returns the path to `~/.deskpilot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deskpilot").join("config.toml"))
}

/// Load config from `~/.deskpilot/config.toml`.
///
/// Runs before the logger is installed, so nothing here logs; problems are
/// either returned or silently fall back to defaults.
pub fn load_config() -> Result<DeskpilotConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(DeskpilotConfig::default()),
    }
}

/// Load config from an explicit path, generating a default file there if
/// nothing exists yet.
pub fn load_config_from(path: &Path) -> Result<DeskpilotConfig, ConfigError> {
    if !path.exists() {
        generate_default_config(path);
        return Ok(DeskpilotConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# deskpilot configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # off, error, warn, info, debug, trace (env: DESKPILOT_LOG)
# log_file = "/tmp/deskpilot.log"    # (env: DESKPILOT_LOG_FILE)

# [motion]
# smooth_duration_secs = 1.0         # animated move length in the interactive session
# tolerance_px = 2                   # allowed landing error per axis
# progress_interval_ms = 100         # progress tick rate during smooth moves

# [typing]
# delay_ms = 0                       # pause after each typed character (env: DESKPILOT_TYPE_DELAY_MS)
"#;

    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let _ = fs::write(path, default_content);
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` is from the `--log-level` flag (None = not specified).
pub fn resolve(config: &DeskpilotConfig, cli_log_level: Option<&str>) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DESKPILOT_LOG").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → temp dir
    let log_file = std::env::var("DESKPILOT_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));

    // Typing delay: env → config → none
    let type_delay_ms = std::env::var("DESKPILOT_TYPE_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .or(config.typing.delay_ms)
        .unwrap_or(0);

    // Negative, NaN or infinite durations fall back to the default
    let smooth_duration = config
        .motion
        .smooth_duration_secs
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(DEFAULT_SMOOTH_DURATION);

    ResolvedConfig {
        log_level,
        log_file,
        smooth_duration,
        tolerance_px: config
            .motion
            .tolerance_px
            .map(|px| px.max(0))
            .unwrap_or(DEFAULT_TOLERANCE_PX),
        progress_interval: config
            .motion
            .progress_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TICK_INTERVAL),
        type_delay: Duration::from_millis(type_delay_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DeskpilotConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.motion.smooth_duration_secs.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DeskpilotConfig::default();
        let resolved = resolve(&config, Some("info"));
        assert_eq!(resolved.smooth_duration, DEFAULT_SMOOTH_DURATION);
        assert_eq!(resolved.tolerance_px, 2);
        assert_eq!(resolved.progress_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DeskpilotConfig {
            motion: MotionConfig {
                smooth_duration_secs: Some(2.5),
                tolerance_px: Some(5),
                progress_interval_ms: Some(250),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.smooth_duration, Duration::from_millis(2500));
        assert_eq!(resolved.tolerance_px, 5);
        assert_eq!(resolved.progress_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_cli_log_level_wins() {
        let config = DeskpilotConfig {
            general: GeneralConfig {
                log_level: Some("error".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("trace"));
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_resolve_rejects_bad_values() {
        let config = DeskpilotConfig {
            motion: MotionConfig {
                smooth_duration_secs: Some(-1.0),
                tolerance_px: Some(-3),
                progress_interval_ms: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("loud"));
        assert_eq!(resolved.smooth_duration, DEFAULT_SMOOTH_DURATION);
        assert_eq!(resolved.tolerance_px, 0);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "debug"
log_file = "/var/log/deskpilot.log"

[motion]
smooth_duration_secs = 0.5
tolerance_px = 1

[typing]
delay_ms = 40
"#;
        let config: DeskpilotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.general.log_file.as_deref(),
            Some("/var/log/deskpilot.log")
        );
        assert_eq!(config.motion.smooth_duration_secs, Some(0.5));
        assert_eq!(config.motion.progress_interval_ms, None);
        assert_eq!(config.typing.delay_ms, Some(40));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[typing]
delay_ms = 10
"#;
        let config: DeskpilotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.typing.delay_ms, Some(10));
        assert!(config.general.log_file.is_none());
        assert!(config.motion.tolerance_px.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "deskpilot-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[motion\ntolerance_px = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("deskpilot-gen-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.log_level.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert!(generated.contains("[motion]"));
        // Generated file is all comments, so it parses back to defaults
        let reparsed: DeskpilotConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.motion.tolerance_px.is_none());
    }
}
