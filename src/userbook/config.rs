use crate::error::{Result, UserbookError};
use crate::store::record_store::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".userbook.json";
const DEFAULT_DATA_FILE: &str = "usuarios.json";
const MAX_INDENT: usize = 16;

/// Configuration for a scope, stored in `<scope dir>/.userbook.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserbookConfig {
    /// Name of the backing file, relative to the scope directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Spaces per indentation level when writing the backing file
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for UserbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            indent: default_indent(),
        }
    }
}

impl UserbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(UserbookError::Io)?;
        let config: UserbookConfig =
            serde_json::from_str(&content).map_err(UserbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(UserbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(UserbookError::Serialization)?;
        fs::write(config_path, content).map_err(UserbookError::Io)?;
        Ok(())
    }

    /// Set a key from its CLI spelling (`data-file`, `indent`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(UserbookError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "indent" => {
                let indent: usize = value.trim().parse().map_err(|_| {
                    UserbookError::Config(format!("indent must be a number, got '{}'", value))
                })?;
                if indent > MAX_INDENT {
                    return Err(UserbookError::Config(format!(
                        "indent must be at most {}",
                        MAX_INDENT
                    )));
                }
                self.indent = indent;
            }
            other => return Err(UserbookError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Value of a key from its CLI spelling
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "indent" => Ok(self.indent.to_string()),
            other => Err(UserbookError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// All `(key, value)` pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-file", self.data_file.clone()),
            ("indent", self.indent.to_string()),
        ]
    }
}
