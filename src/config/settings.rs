//! Configuration settings for telugu-tutor.

use crate::error::{Result, TutorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub scoring: ScoringSettings,
    pub server: ServerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error). `-v` flags and RUST_LOG win.
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Pronunciation scoring thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringSettings {
    /// How many missing characters or mismatches an error message lists.
    /// 0 suppresses both lists; phonetic advisories are still reported.
    pub max_listed_errors: usize,
    /// Accuracy below which the general practice tip is given.
    pub practice_threshold: f64,
    /// Length ratio below which speech counts as truncated.
    pub short_ratio: f64,
    /// Fluency multiplier for truncated speech.
    pub short_penalty: f64,
    /// Length ratio above which speech counts as rambling.
    pub long_ratio: f64,
    /// Fluency multiplier for rambling speech.
    pub long_penalty: f64,
    /// Metric value reported by simulated analyses.
    pub simulated_score: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            max_listed_errors: 3,
            practice_threshold: 70.0,
            short_ratio: 0.5,
            short_penalty: 0.7,
            long_ratio: 1.5,
            long_penalty: 0.8,
            simulated_score: 50.0,
        }
    }
}

impl ScoringSettings {
    /// Reject values that would push scores out of 0..=100.
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| -> Result<()> { Err(TutorError::Config(msg)) };

        if !(0.0..=100.0).contains(&self.practice_threshold) {
            return bad(format!(
                "scoring.practice_threshold must be within 0..=100, got {}",
                self.practice_threshold
            ));
        }
        if !(0.0..=100.0).contains(&self.simulated_score) {
            return bad(format!(
                "scoring.simulated_score must be within 0..=100, got {}",
                self.simulated_score
            ));
        }
        for (name, value) in [
            ("short_penalty", self.short_penalty),
            ("long_penalty", self.long_penalty),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return bad(format!("scoring.{} must be within 0..=1, got {}", name, value));
            }
        }
        if !(self.short_ratio >= 0.0 && self.short_ratio <= self.long_ratio) {
            return bad(format!(
                "scoring.short_ratio ({}) must be non-negative and not exceed long_ratio ({})",
                self.short_ratio, self.long_ratio
            ));
        }
        Ok(())
    }
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS. Any origin when unset.
    pub allowed_origin: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origin: None,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let settings = Self::read_from(path)?;
        settings.scoring.validate()?;
        Ok(settings)
    }

    /// Parse settings without validating them.
    ///
    /// Used by `config` subcommands so an out-of-range file can still be
    /// shown or reset.
    pub fn read_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        if !config_path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        Ok(toml::from_str::<Settings>(&content)?)
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TutorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("telugu-tutor")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.scoring.max_listed_errors, 3);
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.scoring.practice_threshold = 60.0;
        settings.server.allowed_origin = Some("https://learn.example".to_string());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nlong_penalty = 0.5\n").unwrap();

        let loaded = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.scoring.long_penalty, 0.5);
        assert_eq!(loaded.scoring.short_penalty, 0.7);
        assert_eq!(loaded.general, GeneralSettings::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nshort_ratio = 2.0\nlong_ratio = 1.0\n").unwrap();

        let err = Settings::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, TutorError::Config(_)));
    }

    #[test]
    fn test_read_from_skips_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\npractice_threshold = 150.0\n").unwrap();

        assert!(Settings::load_from(Some(path.as_path())).is_err());
        let settings = Settings::read_from(Some(path.as_path())).unwrap();
        assert_eq!(settings.scoring.practice_threshold, 150.0);
        assert!(settings.scoring.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\n").unwrap();

        let err = Settings::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, TutorError::TomlParse(_)));
    }

    #[test]
    fn test_penalty_range() {
        let scoring = ScoringSettings {
            short_penalty: 1.5,
            ..Default::default()
        };
        assert!(scoring.validate().is_err());
        assert!(ScoringSettings::default().validate().is_ok());
    }
}
