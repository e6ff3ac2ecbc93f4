//! Configuration management
//!
//! Config file is stored next to the executable as `config.toml`.
//! A missing file is created with defaults; a broken one is reported and
//! replaced by defaults in memory (the file on disk is left untouched).

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_VOLUME, DEFAULT_CUT_FAILED_VOLUME,
    DEFAULT_CUT_SUCCESS_VOLUME, DEFAULT_CUT_VOLUME, DEFAULT_DURATION_MS, DEFAULT_FREQUENCY_HZ,
    DEFAULT_OFF_DURATION_MS, DEFAULT_REPEAT_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_VOLUME, MAX_DURATION_MS, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ,
};
use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub device: DeviceConfig,
    pub sound: SoundConfig,
    pub logs: LogsConfig,
}

/// Where and how requests are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the prop controller (no trailing path)
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout_ms: u64,
    /// Delay between two sends of the continuous-update loop
    pub repeat_interval_ms: u64,
}

/// Values restored by "Reset sound"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub frequency_hz: i32,
    pub duration_ms: i32,
    pub off_duration_ms: i32,
    pub volume: i32,
    pub connect_volume: i32,
    pub cut_volume: i32,
    pub cut_success_volume: i32,
    pub cut_failed_volume: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Maximum log entries in memory
    pub max_entries: usize,
    /// Maximum log entries when exporting
    pub export_max: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL_MS,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            duration_ms: DEFAULT_DURATION_MS,
            off_duration_ms: DEFAULT_OFF_DURATION_MS,
            volume: DEFAULT_VOLUME,
            connect_volume: DEFAULT_CONNECT_VOLUME,
            cut_volume: DEFAULT_CUT_VOLUME,
            cut_success_volume: DEFAULT_CUT_SUCCESS_VOLUME,
            cut_failed_volume: DEFAULT_CUT_FAILED_VOLUME,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            max_entries: 200,
            export_max: 2000,
        }
    }
}

impl DeviceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}

impl Config {
    /// Check values that would make the panel misbehave at runtime
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.device.base_url)?;

        if self.device.repeat_interval_ms == 0 {
            return Err(PanelError::ConfigValidation {
                field: "device.repeat_interval_ms",
                reason: "must be greater than 0".into(),
            });
        }
        if self.device.request_timeout_ms == 0 {
            return Err(PanelError::ConfigValidation {
                field: "device.request_timeout_ms",
                reason: "must be greater than 0".into(),
            });
        }

        let sound = &self.sound;
        if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&sound.frequency_hz) {
            return Err(PanelError::ConfigValidation {
                field: "sound.frequency_hz",
                reason: format!(
                    "{} is outside {}..={}",
                    sound.frequency_hz, MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ
                ),
            });
        }
        for (field, value) in [
            ("sound.duration_ms", sound.duration_ms),
            ("sound.off_duration_ms", sound.off_duration_ms),
        ] {
            if !(0..=MAX_DURATION_MS).contains(&value) {
                return Err(PanelError::ConfigValidation {
                    field,
                    reason: format!("{} is outside 0..={}", value, MAX_DURATION_MS),
                });
            }
        }

        if self.logs.max_entries == 0 {
            return Err(PanelError::ConfigValidation {
                field: "logs.max_entries",
                reason: "must be greater than 0".into(),
            });
        }

        Ok(())
    }
}

/// Accept only absolute http(s) URLs
pub fn validate_base_url(url: &str) -> Result<()> {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(PanelError::ConfigValidation {
            field: "device.base_url",
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        }),
        Err(e) => Err(PanelError::ConfigValidation {
            field: "device.base_url",
            reason: format!("'{}': {}", url, e),
        }),
    }
}

// =============================================================================
// Paths
// =============================================================================

/// Get the project root directory
///
/// Searches in order:
/// 1. Next to executable (production deployment)
/// 2. Up from target/release or target/debug (dev builds)
fn find_project_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| PanelError::Io {
        path: PathBuf::from("executable"),
        source: e,
    })?;
    let exe_dir = exe.parent().ok_or_else(|| PanelError::ConfigValidation {
        field: "exe_path",
        reason: "no parent directory".into(),
    })?;

    if exe_dir.join("config.toml").exists() {
        return Ok(exe_dir.to_path_buf());
    }

    // exe_dir = .../prop-panel/target/release, we want .../prop-panel
    if let Some(target_dir) = exe_dir.parent() {
        if target_dir
            .file_name()
            .map(|n| n == "target")
            .unwrap_or(false)
        {
            if let Some(project_root) = target_dir.parent() {
                if project_root.join("Cargo.toml").exists() {
                    return Ok(project_root.to_path_buf());
                }
            }
        }
    }

    Ok(exe_dir.to_path_buf())
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(find_project_root()?.join("config.toml"))
}

/// Directory holding the config file, also used for traces and exports
pub fn data_dir() -> Result<PathBuf> {
    find_project_root()
}

// =============================================================================
// Load / save
// =============================================================================

/// Load config from the default location, creating it if missing
pub fn load() -> Config {
    match config_path() {
        Ok(path) => load_or_default(&path),
        Err(e) => {
            warn!("Failed to determine config path: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Load config from `path`, falling back to defaults on any problem
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        let config = Config::default();
        if let Err(e) = save_to(&config, path) {
            warn!("Failed to create default config: {}", e);
        }
        return config;
    }

    let config = match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            return Config::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("{} in {:?}, using defaults", e, path);
        return Config::default();
    }

    config
}

/// Strict load: read and parse, no fallback
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| PanelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| PanelError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save config to `path`
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| PanelError::ConfigValidation {
        field: "config",
        reason: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| PanelError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Open config file in default editor, creating it first if missing.
/// Returns the path that was opened.
pub fn open_in_editor() -> Result<PathBuf> {
    let path = config_path()?;

    if !path.exists() {
        save_to(&Config::default(), &path)?;
    }

    crate::platform::open_file(&path)?;
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_config_values() {
        let config = DeviceConfig::default();
        assert_eq!(config.base_url, "http://192.168.127.137");
        assert_eq!(config.repeat_interval(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_sound_config_values() {
        let config = SoundConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.frequency_hz, 1000);
        assert_eq!(config.duration_ms, 300);
        assert_eq!(config.off_duration_ms, 700);
        assert_eq!(
            (
                config.volume,
                config.connect_volume,
                config.cut_volume,
                config.cut_success_volume,
                config.cut_failed_volume
            ),
            (1, 1, 15, 1, 100)
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_partial_device_section() {
        let partial_toml = r#"
[device]
base_url = "http://10.0.0.7"
"#;
        let config: Config = toml::from_str(partial_toml).unwrap();

        assert_eq!(config.device.base_url, "http://10.0.0.7");
        assert_eq!(config.device.repeat_interval_ms, 1000);
        assert_eq!(config.sound, SoundConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.device.repeat_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(PanelError::ConfigValidation {
                field: "device.repeat_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_sound() {
        let mut config = Config::default();
        config.sound.frequency_hz = 100;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sound.off_duration_ms = 2001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://192.168.1.10").is_ok());
        assert!(validate_base_url("https://prop.local:8080").is_ok());
        assert!(validate_base_url("ftp://prop.local").is_err());
        assert!(validate_base_url("192.168.1.10").is_err());
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.device.base_url = "http://10.1.1.1".to_string();
        config.sound.cut_volume = 30;
        save_to(&config, &path).unwrap();

        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[device\nbase_url = ").unwrap();

        assert!(matches!(load_from(&path), Err(PanelError::ConfigParse { .. })));
        assert_eq!(load_or_default(&path), Config::default());
    }
}
