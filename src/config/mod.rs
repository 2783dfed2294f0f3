use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::commands::StatusTimestamp;
use crate::content::CONTRACT_ADDRESS_PLACEHOLDER;
use crate::error::ConfigError;

/// Environment variable consulted when the config keeps the placeholder address.
pub const CONTRACT_ADDRESS_ENV: &str = "ORISYS_CONTRACT_ADDRESS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    pub general: GeneralConfig,
    pub terminal: TerminalSettings,
    pub tui: TuiConfig,
    pub brand: BrandConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// error, warn, info, debug, trace or off
    pub log_level: String,

    /// Log destination. Required for any log output while the TUI is up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerminalSettings {
    pub status_timestamp: StatusTimestamp,

    /// Oldest transcript rows are dropped past this count
    pub max_transcript_lines: usize,

    /// Longer input lines are cut before they reach the interpreter
    pub max_input_chars: usize,

    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    pub auto_scroll: bool,
    pub show_quick_commands: bool,

    /// How long the "copied" badge stays up
    pub copy_indicator_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrandConfig {
    pub contract_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// 24-bit colors matching the web terminal
    Neon,
    /// No colors at all
    Plain,
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neon" => Ok(Theme::Neon),
            "plain" => Ok(Theme::Plain),
            _ => Err(ConfigError::InvalidValue {
                key: "theme".to_string(),
                value: s.to_string(),
                expected: "neon or plain",
            }),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            status_timestamp: StatusTimestamp::Invocation,
            max_transcript_lines: 1000,
            max_input_chars: 4096,
            theme: Theme::Neon,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            show_quick_commands: true,
            copy_indicator_ms: 2000,
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS_PLACEHOLDER.to_string(),
        }
    }
}

impl BrandConfig {
    /// Whether a real address has been published.
    pub fn has_contract_address(&self) -> bool {
        let address = self.contract_address.trim();
        !address.is_empty() && address != CONTRACT_ADDRESS_PLACEHOLDER
    }
}

impl TerminalConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.load_env_vars();
        config
            .level_filter()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the default configuration path
    pub fn default_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".orisys").join("config.toml"))
    }

    fn load_env_vars(&mut self) {
        if !self.brand.has_contract_address() {
            if let Ok(address) = std::env::var(CONTRACT_ADDRESS_ENV) {
                if !address.trim().is_empty() {
                    self.brand.contract_address = address.trim().to_string();
                }
            }
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.general.log_level)
    }

    /// Merge with command-line overrides
    pub fn merge_overrides(&mut self, overrides: Vec<(String, String)>) -> Result<(), ConfigError> {
        for (key, value) in overrides {
            match key.as_str() {
                "log_level" => {
                    parse_level(&value)?;
                    self.general.log_level = value;
                }
                "status_timestamp" => self.terminal.status_timestamp = value.parse()?,
                "max_transcript_lines" => {
                    self.terminal.max_transcript_lines = parse_count(&key, &value)?
                }
                "max_input_chars" => self.terminal.max_input_chars = parse_count(&key, &value)?,
                "theme" => self.terminal.theme = value.parse()?,
                "auto_scroll" => {
                    self.tui.auto_scroll = value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.clone(),
                        value: value.clone(),
                        expected: "true or false",
                    })?
                }
                "contract_address" => self.brand.contract_address = value,
                _ => return Err(ConfigError::UnknownKey(key)),
            }
        }
        Ok(())
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: "log_level".to_string(),
        value: value.to_string(),
        expected: "error, warn, info, debug, trace or off",
    })
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a positive integer",
        }),
    }
}

/// Splits a `key=value` command-line override.
pub fn parse_override(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::MalformedOverride(raw.to_string())),
    }
}

/// Load or create configuration
pub fn load_or_create_config(path: Option<&Path>) -> Result<TerminalConfig> {
    let config_path = if let Some(p) = path {
        p.to_path_buf()
    } else {
        TerminalConfig::default_path()?
    };

    if config_path.exists() {
        TerminalConfig::load(&config_path)
    } else {
        let mut config = TerminalConfig::default();
        config.save(&config_path)?;
        config.load_env_vars();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.terminal.status_timestamp, StatusTimestamp::Invocation);
        assert_eq!(config.terminal.max_transcript_lines, 1000);
        assert_eq!(config.tui.copy_indicator_ms, 2000);
        assert!(!config.brand.has_contract_address());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = TerminalConfig::default();
        config.terminal.theme = Theme::Plain;
        config.terminal.status_timestamp = StatusTimestamp::Session;
        config.save(&config_path).unwrap();

        let loaded = TerminalConfig::load(&config_path).unwrap();
        assert_eq!(loaded.terminal, config.terminal);
        assert_eq!(loaded.tui, config.tui);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[terminal]\ntheme = \"plain\"\n").unwrap();

        let loaded = TerminalConfig::load(&config_path).unwrap();
        assert_eq!(loaded.terminal.theme, Theme::Plain);
        assert_eq!(loaded.terminal.max_input_chars, 4096);
        assert!(loaded.tui.auto_scroll);
    }

    #[test]
    fn test_invalid_log_level_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[general]\nlog_level = \"loud\"\n").unwrap();
        assert!(TerminalConfig::load(&config_path).is_err());
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        assert!(!config_path.exists());

        let config = load_or_create_config(Some(&config_path)).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.terminal, TerminalSettings::default());
    }

    #[test]
    fn test_merge_overrides() {
        let mut config = TerminalConfig::default();

        let overrides = vec![
            ("log_level".to_string(), "debug".to_string()),
            ("status_timestamp".to_string(), "session".to_string()),
            ("max_input_chars".to_string(), "80".to_string()),
            ("auto_scroll".to_string(), "false".to_string()),
            ("contract_address".to_string(), "Orisys1111".to_string()),
        ];

        config.merge_overrides(overrides).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.terminal.status_timestamp, StatusTimestamp::Session);
        assert_eq!(config.terminal.max_input_chars, 80);
        assert!(!config.tui.auto_scroll);
        assert!(config.brand.has_contract_address());
    }

    #[test]
    fn test_merge_overrides_rejects_bad_input() {
        let mut config = TerminalConfig::default();
        let err = config
            .merge_overrides(vec![("volume".to_string(), "11".to_string())])
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownKey("volume".to_string()));

        let err = config
            .merge_overrides(vec![("max_transcript_lines".to_string(), "0".to_string())])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("theme = plain").unwrap(),
            ("theme".to_string(), "plain".to_string())
        );
        assert!(parse_override("theme").is_err());
        assert!(parse_override("=plain").is_err());
    }
}
