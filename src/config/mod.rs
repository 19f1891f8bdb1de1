//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the backend base URL, the last lesson input and the log level.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/exercise-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub lessons: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_lessons")]
    pub lessons: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_lessons() -> String {
    "1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            lessons: default_lessons(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. Missing files leave the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
            self.lessons = data.lessons;
            self.log_level = data.log_level;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            lessons: self.lessons.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

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

    /// Return the configured log level as a filter.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn temp_dir() -> PathBuf {
        let id: u64 = Faker.fake();
        std::env::temp_dir().join(format!("exercise-tui-{}", id))
    }

    #[test]
    fn load_without_file_keeps_defaults() -> Result<(), AppError> {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str())?;
        assert!(dir.exists());
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.lessons, "1");
        assert_eq!(config.level_filter()?, LevelFilter::Info);
        fs::remove_dir_all(dir).ok();
        Ok(())
    }

    #[test]
    fn save_then_load() -> Result<(), AppError> {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str())?;
        config.base_url = "http://localhost:8080".to_string();
        config.lessons = "-2".to_string();
        config.log_level = "debug".to_string();
        config.save()?;

        let mut loaded = Config::new();
        loaded.load(dir.to_str())?;
        assert_eq!(loaded.base_url, "http://localhost:8080");
        assert_eq!(loaded.lessons, "-2");
        assert_eq!(loaded.level_filter()?, LevelFilter::Debug);
        fs::remove_dir_all(dir).ok();
        Ok(())
    }

    #[test]
    fn load_partial_file_fills_defaults() -> Result<(), AppError> {
        let dir = temp_dir();
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(FILE_NAME), "lessons: \"5\"\n")?;

        let mut config = Config::new();
        config.load(dir.to_str())?;
        assert_eq!(config.lessons, "5");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        fs::remove_dir_all(dir).ok();
        Ok(())
    }

    #[test]
    fn load_invalid_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "lessons: [unterminated").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn save_without_path() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn invalid_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
