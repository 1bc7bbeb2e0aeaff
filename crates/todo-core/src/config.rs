use crate::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TICK_RATE_MS: u64 = 16;
const DEFAULT_INPUT_PLACEHOLDER: &str = "Add a new task...";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Event poll interval of the terminal loop
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,

    /// Hint shown in the new-task field while it is empty
    #[serde(default)]
    pub input_placeholder: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the platform config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TodoError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> TodoResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| TodoError::Config(e.to_string()))?;
        if config.tick_rate_ms == Some(0) {
            return Err(TodoError::Config(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)
    }

    pub fn effective_input_placeholder(&self) -> &str {
        self.input_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_INPUT_PLACEHOLDER)
    }
}
