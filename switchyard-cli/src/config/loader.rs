use super::types::SwitchyardConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<SwitchyardConfig> {
        let mut config = SwitchyardConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path() {
            config = SwitchyardConfig::merge(config, Self::load_from_path(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        config = SwitchyardConfig::merge(config, Self::load_from_path(&project_path)?);

        Ok(config)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "switchyard").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with SWITCHYARD_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("SWITCHYARD_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".switchyard/config.toml")
        }
    }

    /// Load config from a specific path; a missing file is an empty config
    pub fn load_from_path(path: &Path) -> Result<SwitchyardConfig> {
        if !path.exists() {
            return Ok(SwitchyardConfig::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: SwitchyardConfig = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
