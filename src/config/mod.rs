//! Configuration management module.
//!
//! This module handles loading and saving application configuration,
//! including the user identity and the remote service base URL.

mod error;

pub use error::ConfigError;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";
const DEFAULT_API_BASE_URL: &str = "https://mate.academy/students-api";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub user_id: Option<u64>,
    pub api_base_url: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            user_id: None,
            api_base_url: default_api_base_url(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is not an error: the user identity
    /// stays unset and the application shows the unauthenticated view.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        // If file exists, try to extract the user identity and base URL
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.user_id = data.user_id;
            self.api_base_url = data.api_base_url;
        }

        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> Result<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        let data = FileSpec {
            user_id: self.user_id,
            api_base_url: self.api_base_url.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("todo-tui-test-{}", name));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn load_without_file_leaves_user_unset() {
        let dir = temp_config_dir("missing");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert_eq!(config.user_id, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_user_id_and_base_url() {
        let dir = temp_config_dir("read");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "user_id: 1234\napi_base_url: http://localhost:9000\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert_eq!(config.user_id, Some(1234));
        assert_eq!(config.api_base_url, "http://localhost:9000");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = temp_config_dir("roundtrip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.user_id = Some(77);
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.user_id, Some(77));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }
}
