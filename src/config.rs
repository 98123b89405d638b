//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `BINTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::MAX_COUNT;
use crate::application::{ApplicationError, Value};

/// Random tree generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of distinct values to insert
    pub count: usize,
    /// Values are drawn from `[0, max_value]`
    pub max_value: Value,
    /// Fixed seed for reproducible trees
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count: 30,
            max_value: 50,
            seed: None,
        }
    }
}

/// Raw generator config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawGeneratorSettings {
    pub count: Option<usize>,
    pub max_value: Option<Value>,
    pub seed: Option<u64>,
}

/// Raw settings as read from a TOML file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_paths: Option<bool>,
    pub generator: RawGeneratorSettings,
}

/// Unified configuration for bintree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Render path labels next to values in tree output
    pub show_paths: bool,
    /// Random tree generator settings
    pub generator: GeneratorSettings,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ApplicationError::config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| ApplicationError::config(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_paths: overlay.show_paths.unwrap_or(self.show_paths),
            generator: GeneratorSettings {
                count: overlay.generator.count.unwrap_or(self.generator.count),
                max_value: overlay
                    .generator
                    .max_value
                    .unwrap_or(self.generator.max_value),
                seed: overlay.generator.seed.or(self.generator.seed),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; unlike
    ///   the global file it must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("show_paths") {
            settings.show_paths = val;
        }
        if let Ok(val) = config.get::<usize>("generator.count") {
            settings.generator.count = val;
        }
        if let Ok(val) = config.get::<Value>("generator.max_value") {
            settings.generator.max_value = val;
        }
        if let Ok(val) = config.get::<u64>("generator.seed") {
            settings.generator.seed = Some(val);
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.generator.count == 0 {
            return Err(ApplicationError::config("generator.count must be at least 1"));
        }
        if self.generator.count > MAX_COUNT {
            return Err(ApplicationError::config(format!(
                "generator.count must not exceed {MAX_COUNT}"
            )));
        }
        if self.generator.max_value < 0 {
            return Err(ApplicationError::config(
                "generator.max_value must not be negative",
            ));
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApplicationError::config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/bintree/bintree.toml
#   Explicit: bintree --config <file>
#   Env:      BINTREE_* environment variables, e.g. BINTREE_GENERATOR__SEED=7

# Show path labels (root/left/right) next to values
# show_paths = false

[generator]
# Number of distinct random values
# count = 30

# Values are drawn from [0, max_value]
# max_value = 50

# Fixed seed for reproducible trees
# seed = 42
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::config(e.to_string())
}
