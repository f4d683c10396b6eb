use crate::error::{Result, ShelfError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bookshelf, stored next to the data as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the collection slot inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get_data_file(&self) -> &str {
        &self.data_file
    }

    /// Look up a config value by its user-facing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    /// Set a config value by its user-facing key.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                self.set_data_file(value);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Set the data file name (normalizes to a .json extension)
    pub fn set_data_file(&mut self, name: &str) {
        if name.ends_with(".json") {
            self.data_file = name.to_string();
        } else {
            self.data_file = format!("{}.json", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.data_file, "books.json");
    }

    #[test]
    fn test_set_data_file_with_extension() {
        let mut config = ShelfConfig::default();
        config.set_data_file("shelf.json");
        assert_eq!(config.data_file, "shelf.json");
    }

    #[test]
    fn test_set_data_file_without_extension() {
        let mut config = ShelfConfig::default();
        config.set_data_file("shelf");
        assert_eq!(config.data_file, "shelf.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = ShelfConfig::default();
        config.set_data_file("shelf.json");
        config.save(temp_dir.path()).unwrap();

        let loaded = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.data_file, "shelf.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = ShelfConfig {
            data_file: "library.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ShelfConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
