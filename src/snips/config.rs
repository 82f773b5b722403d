use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnipsError};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".snipe";

/// Configuration for snips, stored in the state directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipsConfig {
    /// Extension of snippet files under the snippets root (e.g. ".snipe")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Snippets root directory; the SNIPS_PATH environment variable
    /// takes precedence
    #[serde(default)]
    pub snippets_dir: Option<PathBuf>,

    /// File names to skip during discovery
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for SnipsConfig {
    fn default() -> Self {
        Self {
            file_ext: DEFAULT_FILE_EXT.to_string(),
            snippets_dir: None,
            exclude: Vec::new(),
        }
    }
}

impl SnipsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SnipsError::Io)?;
        let config: SnipsConfig =
            serde_json::from_str(&content).map_err(SnipsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SnipsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SnipsError::Serialization)?;
        fs::write(config_path, content).map_err(SnipsError::Io)?;
        Ok(())
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }
}
