//! TOML-based configuration for the daemon.
//!
//! Reads and writes [`DaemonConfig`] at the platform-appropriate location:
//! - Windows:  `%APPDATA%\Rotkey\config.toml`
//! - Linux:    `~/.config/rotkey/config.toml`
//! - macOS:    `~/Library/Application Support/Rotkey/config.toml`
//!
//! Key identities are written by variant name, so a config file reads:
//!
//! ```toml
//! [cipher]
//! toggle_key = "F24"
//! reseed_key = "Backspace"
//! seed = 1234
//!
//! [daemon]
//! log_level = "info"
//! ```
//!
//! Every field carries a `#[serde(default = "...")]`, so a missing file, a
//! partial file, and a file from an older build all load cleanly. Note that
//! only the *initial* seed is configurable; cipher state itself is never
//! persisted, so every daemon start is a clean slate.

use std::path::PathBuf;

use rotkey_core::cipher::rng::DEFAULT_SEED;
use rotkey_core::{CipherSettings, KeyCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level daemon configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DaemonConfig {
    #[serde(default)]
    pub cipher: CipherConfig,
    #[serde(default)]
    pub daemon: RuntimeConfig,
}

/// Identity of the cipher's special keys and its initial seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CipherConfig {
    /// Key that toggles encrypt mode (consumed, never forwarded).
    #[serde(default = "default_toggle_key")]
    pub toggle_key: KeyCode,
    /// Key whose press at rest redraws the rotation.
    #[serde(default = "default_reseed_key")]
    pub reseed_key: KeyCode,
    /// Initial PRNG seed.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

/// Process-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// Overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl CipherConfig {
    /// Converts the config section into engine settings.
    pub fn to_settings(&self) -> CipherSettings {
        CipherSettings {
            toggle_key: self.toggle_key,
            reseed_key: self.reseed_key,
            seed: self.seed,
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_toggle_key() -> KeyCode {
    KeyCode::F24
}
fn default_reseed_key() -> KeyCode {
    KeyCode::Backspace
}
fn default_seed() -> u32 {
    DEFAULT_SEED
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            toggle_key: default_toggle_key(),
            reseed_key: default_reseed_key(),
            seed: default_seed(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`DaemonConfig`] from disk, returning the defaults if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found", and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<DaemonConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: DaemonConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DaemonConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the config directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &DaemonConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the `Rotkey`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Rotkey"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("rotkey"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Rotkey")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_engine_defaults() {
        // Arrange / Act
        let cfg = DaemonConfig::default();

        // Assert
        assert_eq!(cfg.cipher.toggle_key, KeyCode::F24);
        assert_eq!(cfg.cipher.reseed_key, KeyCode::Backspace);
        assert_eq!(cfg.cipher.seed, 1234);
        assert_eq!(cfg.daemon.log_level, "info");
    }

    #[test]
    fn test_to_settings_carries_all_fields() {
        let cfg = CipherConfig {
            toggle_key: KeyCode::ScrollLock,
            reseed_key: KeyCode::Delete,
            seed: 99,
        };

        let settings = cfg.to_settings();

        assert_eq!(settings.toggle_key, KeyCode::ScrollLock);
        assert_eq!(settings.reseed_key, KeyCode::Delete);
        assert_eq!(settings.seed, 99);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        // Arrange
        let mut cfg = DaemonConfig::default();
        cfg.cipher.toggle_key = KeyCode::F13;
        cfg.cipher.seed = 0xDEAD_BEEF;
        cfg.daemon.log_level = "debug".to_string();

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: DaemonConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_keys_serialize_by_variant_name() {
        let toml_str = toml::to_string_pretty(&DaemonConfig::default()).expect("serialize");

        assert!(toml_str.contains("toggle_key = \"F24\""), "{toml_str}");
        assert!(toml_str.contains("reseed_key = \"Backspace\""), "{toml_str}");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let cfg: DaemonConfig = toml::from_str("").expect("deserialize empty");

        assert_eq!(cfg, DaemonConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        // Arrange
        let toml_str = r#"
[cipher]
reseed_key = "Delete"
"#;

        // Act
        let cfg: DaemonConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.cipher.reseed_key, KeyCode::Delete);
        assert_eq!(cfg.cipher.toggle_key, KeyCode::F24);
        assert_eq!(cfg.cipher.seed, 1234);
    }

    #[test]
    fn test_unknown_key_name_is_a_parse_error() {
        let toml_str = r#"
[cipher]
toggle_key = "HyperShift"
"#;

        let result: Result<DaemonConfig, toml::de::Error> = toml::from_str(toml_str);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result: Result<DaemonConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_shaped_file_round_trip_via_temp_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!(
            "rotkey_test_{}_{}",
            std::process::id(),
            line!()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut cfg = DaemonConfig::default();
        cfg.cipher.seed = 4242;
        cfg.daemon.log_level = "trace".to_string();

        // Act – write and read back (mirrors save_config/load_config I/O)
        let content = toml::to_string_pretty(&cfg).unwrap();
        std::fs::write(&path, &content).unwrap();
        let loaded: DaemonConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        // Assert
        assert_eq!(loaded, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }
}
