use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".lexis")
}

fn default_file_name() -> String {
    "vocabulary.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Keep everything in memory, nothing is written
    #[serde(default)]
    pub ephemeral: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
            ephemeral: false,
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LEXIS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            ..Self::default()
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
