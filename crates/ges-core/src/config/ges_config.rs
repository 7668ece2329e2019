//! Top-level GES configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScoreConfig, SearchConfig};
use crate::constants::{HARD_MAX_SUBSET_SIZE, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GES_*`)
/// 3. Project config (`ges.toml` in the working root)
/// 4. User config (`~/.ges/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GesConfig {
    pub search: SearchConfig,
    pub score: ScoreConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub phases: Option<Vec<String>>,
    pub iterate: Option<bool>,
    pub parallel: Option<bool>,
    pub max_subset_size: Option<u32>,
    pub max_steps: Option<u64>,
    pub lambda: Option<f64>,
    pub cache: Option<bool>,
}

impl GesConfig {
    /// Load configuration with layered resolution, rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a malformed file is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load an explicit config file on top of the defaults, then env and CLI layers.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GesConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GesConfig) -> Result<(), ConfigError> {
        config.search.effective_phases()?;

        if let Some(cap) = config.search.max_subset_size {
            if cap == 0 || cap > HARD_MAX_SUBSET_SIZE {
                return Err(ConfigError::ValidationFailed {
                    field: "search.max_subset_size".to_string(),
                    message: format!("must be between 1 and {HARD_MAX_SUBSET_SIZE}"),
                });
            }
        }
        if let Some(0) = config.search.max_steps {
            return Err(ConfigError::ValidationFailed {
                field: "search.max_steps".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(lambda) = config.score.lambda {
            if !lambda.is_finite() || lambda <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "score.lambda".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.ges/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GesConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GesConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut GesConfig, other: &GesConfig) {
        // Search
        if !other.search.phases.is_empty() {
            base.search.phases = other.search.phases.clone();
        }
        if other.search.iterate.is_some() {
            base.search.iterate = other.search.iterate;
        }
        if other.search.max_subset_size.is_some() {
            base.search.max_subset_size = other.search.max_subset_size;
        }
        if other.search.parallel.is_some() {
            base.search.parallel = other.search.parallel;
        }
        if other.search.max_steps.is_some() {
            base.search.max_steps = other.search.max_steps;
        }

        // Score
        if other.score.lambda.is_some() {
            base.score.lambda = other.score.lambda;
        }
        if other.score.cache.is_some() {
            base.score.cache = other.score.cache;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GES_SEARCH_ITERATE`, `GES_SCORE_LAMBDA`, etc.
    fn apply_env_overrides(config: &mut GesConfig) {
        if let Ok(val) = std::env::var("GES_SEARCH_PHASES") {
            let phases: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !phases.is_empty() {
                config.search.phases = phases;
            }
        }
        if let Ok(val) = std::env::var("GES_SEARCH_ITERATE") {
            if let Ok(v) = val.parse::<bool>() {
                config.search.iterate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GES_SEARCH_MAX_SUBSET_SIZE") {
            if let Ok(v) = val.parse::<u32>() {
                config.search.max_subset_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GES_SEARCH_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.search.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GES_SEARCH_MAX_STEPS") {
            if let Ok(v) = val.parse::<u64>() {
                config.search.max_steps = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GES_SCORE_LAMBDA") {
            if let Ok(v) = val.parse::<f64>() {
                config.score.lambda = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GES_SCORE_CACHE") {
            if let Ok(v) = val.parse::<bool>() {
                config.score.cache = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GesConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.phases {
            config.search.phases = v.clone();
        }
        if let Some(v) = cli.iterate {
            config.search.iterate = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.search.parallel = Some(v);
        }
        if let Some(v) = cli.max_subset_size {
            config.search.max_subset_size = Some(v);
        }
        if let Some(v) = cli.max_steps {
            config.search.max_steps = Some(v);
        }
        if let Some(v) = cli.lambda {
            config.score.lambda = Some(v);
        }
        if let Some(v) = cli.cache {
            config.score.cache = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.ges/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".ges"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
