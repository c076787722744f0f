use std::{fs, io::Read, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directories::config_dir;

const FILE_NAME: &str = "inspector-config.toml";

/// Which windows the inspector leaves out of its report.
///
/// Fields missing from the file take their default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window classes that are never reported.
    pub ignored_classes: Vec<String>,

    /// Process image names that are never reported, compared ignoring ASCII case.
    pub ignored_processes: Vec<String>,

    /// Report windows without a title.
    pub include_untitled: bool,
}

impl Config {
    /// Load the config file, `Ok(None)` if there is no config file.
    pub fn try_load_config() -> Result<Option<Self>, ConfigError> {
        let mut file = match fs::File::open(Self::file_path()) {
            Ok(file) => file,
            Err(error) => {
                if error.kind() == std::io::ErrorKind::NotFound {
                    return Ok(None);
                }

                return Err(ConfigError::Read(error));
            }
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(ConfigError::Read)?;

        let config = Self::from_toml(&contents)?;

        Ok(Some(config))
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;

        fs::write(Self::file_path(), toml_string.as_bytes()).map_err(ConfigError::Write)?;

        Ok(())
    }

    pub fn file_path() -> PathBuf {
        config_dir().join(FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        let ignored_classes = [
            "Shell_TrayWnd",
            "DV2ControlHost",
            "MsgrIMEWindowClass",
            "SysShadow",
            "Button",
            "Windows.UI.Core.CoreWindow",
            "ApplicationFrameWindow",
        ];

        let ignored_processes = [
            "ApplicationFrameHost.exe",
            "TextInputHost.exe",
            "ShellExperienceHost.exe",
            "StartMenuExperienceHost.exe",
            "SearchHost.exe",
        ];

        Self {
            ignored_classes: ignored_classes.into_iter().map(String::from).collect(),
            ignored_processes: ignored_processes.into_iter().map(String::from).collect(),
            include_untitled: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read the config file:\n{0}")]
    Read(#[source] std::io::Error),

    #[error("Could not write the config file:\n{0}")]
    Write(#[source] std::io::Error),

    #[error("The config file is invalid:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Could not serialize the config:\n{0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::from_toml("include_untitled = true").unwrap();

        assert!(config.include_untitled);
        assert_eq!(config.ignored_classes, Config::default().ignored_classes);
        assert_eq!(config.ignored_processes, Config::default().ignored_processes);
    }

    #[test]
    fn empty_lists_are_kept() {
        let config = Config::from_toml("ignored_classes = []\nignored_processes = []").unwrap();

        assert!(config.ignored_classes.is_empty());
        assert!(config.ignored_processes.is_empty());
        assert!(!config.include_untitled);
    }

    #[test]
    fn default_survives_toml() {
        let contents = toml::to_string_pretty(&Config::default()).unwrap();

        assert_eq!(Config::from_toml(&contents).unwrap(), Config::default());
    }

    #[test]
    fn invalid_file() {
        let result = Config::from_toml("ignored_classes = 5");

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
