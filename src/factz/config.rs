use crate::error::{FactzError, Result};
use crate::model::SearchMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data/facts.xml";

/// Directory, relative to the working directory, holding `config.json`.
pub const CONFIG_DIR: &str = ".factz";

/// Configuration for factz, stored in .factz/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactzConfig {
    /// Fact file read at startup and appended to by `add`
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Search mode used when none is given on the command line
    #[serde(default)]
    pub search_mode: SearchMode,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for FactzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            search_mode: SearchMode::default(),
        }
    }
}

impl FactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FactzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Value of a config key as shown on the command line.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "search-mode" => Some(self.search_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(FactzError::Api("data-file cannot be empty".to_string()));
                }
                self.data_file = PathBuf::from(value);
            }
            "search-mode" => {
                self.search_mode = value.parse().map_err(FactzError::Api)?;
            }
            other => return Err(FactzError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "search-mode"]
    }
}
