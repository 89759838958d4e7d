//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/aardvark/aardvark.toml`
//! 3. Explicit config file: `--config <FILE>`
//! 4. Environment variables: `AARDVARK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::DEFAULT_MAX_LABEL_CHARS;

/// Starting knowledge: one question and the animal on each side of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Root question
    pub question: String,
    /// Animal for which the root question is answered "yes"
    pub yes_animal: String,
    /// Animal for which the root question is answered "no"
    pub no_animal: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            question: "tem penas".into(),
            yes_animal: "pato".into(),
            no_animal: "cachorro".into(),
        }
    }
}

/// Raw seed config for intermediate parsing (`None` = not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSeedConfig {
    pub question: Option<String>,
    pub yes_animal: Option<String>,
    pub no_animal: Option<String>,
}

impl SeedConfig {
    /// Overlay wins for every field it specifies.
    pub fn merge(&self, overlay: &RawSeedConfig) -> Self {
        Self {
            question: overlay
                .question
                .clone()
                .unwrap_or_else(|| self.question.clone()),
            yes_animal: overlay
                .yes_animal
                .clone()
                .unwrap_or_else(|| self.yes_animal.clone()),
            no_animal: overlay
                .no_animal
                .clone()
                .unwrap_or_else(|| self.no_animal.clone()),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_label_chars: Option<usize>,
    pub show_tree: Option<bool>,
    #[serde(default)]
    pub seed: RawSeedConfig,
}

/// Unified configuration for aardvark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Longest label kept, in characters; longer input is truncated
    pub max_label_chars: usize,
    /// Print the knowledge tree after each learned animal
    pub show_tree: bool,
    /// Starting knowledge
    pub seed: SeedConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
            show_tree: false,
            seed: SeedConfig::default(),
        }
    }
}

/// Get the XDG config directory for aardvark.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aardvark").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("aardvark.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    parse_raw_settings(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_raw_settings(content: &str) -> Result<RawSettings, toml::de::Error> {
    toml::from_str(content)
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_label_chars: overlay.max_label_chars.unwrap_or(self.max_label_chars),
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
            seed: self.seed.merge(&overlay.seed),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/aardvark/aardvark.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `AARDVARK_*` prefix, `__` between sections
    ///    (e.g. `AARDVARK_SEED__QUESTION`)
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply AARDVARK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("AARDVARK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_int("max_label_chars") {
            settings.max_label_chars = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("max_label_chars must not be negative: {}", val),
            })?;
        }
        if let Ok(val) = config.get_bool("show_tree") {
            settings.show_tree = val;
        }
        if let Ok(val) = config.get_string("seed.question") {
            settings.seed.question = val;
        }
        if let Ok(val) = config.get_string("seed.yes_animal") {
            settings.seed.yes_animal = val;
        }
        if let Ok(val) = config.get_string("seed.no_animal") {
            settings.seed.no_animal = val;
        }

        Ok(settings)
    }

    /// Reject settings the game cannot start with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_label_chars == 0 {
            return Err(ApplicationError::Config {
                message: "max_label_chars must be at least 1".to_string(),
            });
        }
        let seed = [
            ("seed.question", &self.seed.question),
            ("seed.yes_animal", &self.seed.yes_animal),
            ("seed.no_animal", &self.seed.no_animal),
        ];
        for (key, value) in seed {
            if value.trim().is_empty() {
                return Err(ApplicationError::Config {
                    message: format!("{} must not be empty", key),
                });
            }
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# aardvark configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/aardvark/aardvark.toml
#   Explicit: aardvark --config <FILE>
#   Env:      AARDVARK_* environment variables, e.g. AARDVARK_SEED__QUESTION

# Longest question or animal name kept, in characters (longer input is cut)
# max_label_chars = 255

# Print the knowledge tree after each learned animal
# show_tree = false

[seed]
# The first question, and the animal on each side of it
# question = "tem penas"
# yes_animal = "pato"
# no_animal = "cachorro"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_seed_matches_classic_game() {
        let settings = Settings::default();
        assert_eq!(settings.seed.question, "tem penas");
        assert_eq!(settings.seed.yes_animal, "pato");
        assert_eq!(settings.seed.no_animal, "cachorro");
        assert_eq!(settings.max_label_chars, 255);
        assert!(!settings.show_tree);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let raw = parse_raw_settings(
            r#"
show_tree = true

[seed]
question = "has stripes"
"#,
        )
        .unwrap();

        let merged = Settings::default().merge_with(&raw);

        assert!(merged.show_tree);
        assert_eq!(merged.max_label_chars, 255);
        assert_eq!(merged.seed.question, "has stripes");
        assert_eq!(merged.seed.yes_animal, "pato");
        assert_eq!(merged.seed.no_animal, "cachorro");
    }

    #[test]
    fn given_empty_overlay_when_merging_then_unchanged() {
        let raw = parse_raw_settings("").unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }

    #[test]
    fn given_zero_label_bound_when_validating_then_config_error() {
        let settings = Settings {
            max_label_chars: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("max_label_chars"));
    }

    #[test]
    fn given_blank_seed_animal_when_validating_then_config_error() {
        let mut settings = Settings::default();
        settings.seed.no_animal = "  ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("seed.no_animal"));
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_raw() {
        let toml = Settings::default().to_toml().unwrap();
        let raw = parse_raw_settings(&toml).unwrap();
        assert_eq!(raw.seed.question.as_deref(), Some("tem penas"));
        assert_eq!(raw.max_label_chars, Some(255));
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw = parse_raw_settings(&Settings::template()).unwrap();
        assert!(raw.seed.question.is_none());
    }
}
