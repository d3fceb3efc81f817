use crate::domain::{
    config::{ConfigLayer, HelpConfig},
    error::{HelpError, HelpResult},
};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "deploy-help";
const PROJECT_CONFIG_DIR: &str = ".deploy-help";
const CONFIG_FILE: &str = "config.toml";

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Locate the global and project configuration files
    pub fn new() -> Self {
        let global_config_path = Self::find_global_config_path();
        if global_config_path.is_none() {
            tracing::warn!("Could not determine home directory, global configuration disabled");
        }

        Self {
            global_config_path,
            project_config_path: Self::find_project_config_path(),
        }
    }

    /// Use explicit locations instead of searching for them
    pub fn with_paths(global_config_path: Option<PathBuf>, project_config_path: Option<PathBuf>) -> Self {
        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Load configuration from files, project values over global ones
    pub fn load_config(&self) -> HelpResult<HelpConfig> {
        let mut config = HelpConfig::default();

        for path in [&self.global_config_path, &self.project_config_path]
            .into_iter()
            .flatten()
        {
            if path.exists() {
                config = config.overlay(self.load_layer_from_path(path)?);
            }
        }

        Ok(config)
    }

    /// Global configuration path
    fn find_global_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        Self::find_project_config_from(&current_dir)
    }

    fn find_project_config_from(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> HelpResult<HelpConfig> {
        Ok(HelpConfig::default().overlay(self.load_layer_from_path(path)?))
    }

    /// Read one file, keeping track of which keys it actually sets
    pub fn load_layer_from_path(&self, path: &Path) -> HelpResult<ConfigLayer> {
        let content = fs::read_to_string(path).map_err(|e| {
            HelpError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let layer = toml::from_str(&content).map_err(|e| {
            HelpError::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;
        tracing::info!(path = %path.display(), "loaded configuration");

        Ok(layer)
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &HelpConfig) -> HelpResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HelpError::config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| HelpError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            HelpError::config(format!("Failed to write config file {}: {}", path.display(), e))
        })?;
        tracing::info!(path = %path.display(), "wrote configuration");

        Ok(())
    }

    /// Create default project configuration under `path`
    pub fn init_project_config(&self, path: &Path) -> HelpResult<PathBuf> {
        let config_file = path.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE);

        if config_file.exists() {
            return Err(HelpError::config("Project configuration already exists"));
        }

        self.save_config_to_path(&config_file, &HelpConfig::default())?;

        Ok(config_file)
    }

    /// Create default global configuration
    pub fn init_global_config(&self) -> HelpResult<PathBuf> {
        let path = self
            .global_config_path
            .as_ref()
            .ok_or_else(|| HelpError::config("Could not determine home directory"))?;

        self.save_config_to_path(path, &HelpConfig::default())?;

        Ok(path.clone())
    }

    /// Get the current project config path (if any)
    pub fn project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path (if any)
    pub fn global_config_path(&self) -> Option<&PathBuf> {
        self.global_config_path.as_ref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
