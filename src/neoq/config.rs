use crate::error::{NeoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NEO_FILE: &str = "data/neos.csv";
const DEFAULT_CAD_FILE: &str = "data/cad.json";
const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Configuration for neoq, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeoConfig {
    /// CSV file with NEO records
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// JSON file with close-approach records
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,

    /// How many query results to print when no explicit limit is given
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from(DEFAULT_NEO_FILE)
}

fn default_cad_file() -> PathBuf {
    PathBuf::from(DEFAULT_CAD_FILE)
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl NeoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NeoError::Io)?;
        let config: NeoConfig = serde_json::from_str(&content).map_err(NeoError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NeoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NeoError::Serialization)?;
        fs::write(config_path, content).map_err(NeoError::Io)?;
        Ok(())
    }

    /// Override the data files with any paths given explicitly.
    pub fn with_data_files(mut self, neo_file: Option<PathBuf>, cad_file: Option<PathBuf>) -> Self {
        if let Some(path) = neo_file {
            self.neo_file = path;
        }
        if let Some(path) = cad_file {
            self.cad_file = path;
        }
        self
    }
}
