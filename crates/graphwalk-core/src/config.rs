//! Configuration for graphwalk (stored in ~/.config/graphwalk/config.toml)
//!
//! Every field has a default, so a missing file or a partial file is fine.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::social::MAX_POPULATION;

pub use types::{AncestorConfig, Config, SocialConfig, TraversalConfig};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl Config {
    /// Default config file location
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            GraphError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.traversal.max_depth == 0 {
            bail_invalid!("traversal.max_depth", "0 (must be at least 1)");
        }

        let social = &self.social;
        if social.num_users > MAX_POPULATION {
            bail_invalid!(
                "social.num_users",
                format!("{} (at most {})", social.num_users, MAX_POPULATION)
            );
        }
        if social.num_users > 1 && social.avg_friendships >= social.num_users {
            bail_invalid!(
                "social.avg_friendships",
                format!(
                    "{} (must be less than social.num_users, {})",
                    social.avg_friendships, social.num_users
                )
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.traversal.max_depth, crate::graph::DEFAULT_MAX_DEPTH);
        assert!(!config.ancestor.early_exit);
        assert_eq!(config.social.num_users, 1000);
        assert_eq!(config.social.avg_friendships, 5);
        assert_eq!(config.social.seed, None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[ancestor]\nearly_exit = true\n").unwrap();
        assert!(config.ancestor.early_exit);
        assert_eq!(config.traversal.max_depth, crate::graph::DEFAULT_MAX_DEPTH);
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.traversal.max_depth = 64;
        config.social.seed = Some(42);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_zero_depth() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[traversal]\nmax_depth = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[traversal\nmax_depth = 3\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(GraphError::Toml(_))
        ));
    }

    #[test]
    fn test_validate_social_bounds() {
        let mut config = Config::default();
        config.social.num_users = 10;
        config.social.avg_friendships = 10;
        assert!(config.validate().is_err());

        config.social.avg_friendships = 9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_limit() {
        let mut config = Config::default();
        config.social.num_users = MAX_POPULATION;
        assert!(config.validate().is_ok());

        config.social.num_users = MAX_POPULATION + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("social.num_users"));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.traversal.max_depth = 12;
        config.ancestor.early_exit = true;

        let traversal = crate::graph::TraversalOptions::from(&config.traversal);
        let ancestor = crate::ancestor::AncestorOptions::from(&config.ancestor);
        assert_eq!(traversal.max_depth, 12);
        assert!(ancestor.early_exit);
    }
}
