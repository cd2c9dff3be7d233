use crate::consts;
use crate::game::{Grid, GridSizeError};
use crate::scores::{JsonFileStore, NullStore, ScoreStore};
use crate::speed::Speed;
use crate::util::default_best_score_path;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data & log files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the store in which the best score should be kept
    pub(crate) fn score_store(&self) -> Box<dyn ScoreStore> {
        if self.files.save_best_score {
            let path = self
                .files
                .best_score_file
                .clone()
                .or_else(default_best_score_path);
            Box::new(JsonFileStore::new(path))
        } else {
            Box::new(NullStore)
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Speed preselected on the main menu
    pub(crate) default_speed: Speed,

    pub(crate) grid: Grid,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    default_speed: Speed,
    grid_size: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            default_speed: Speed::default(),
            grid_size: consts::GRID_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GridSizeError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GridSizeError> {
        Ok(GameConfig {
            default_speed: value.default_speed,
            grid: Grid::new(value.grid_size)?,
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    pub(crate) best_score_file: Option<PathBuf>,

    /// Whether to load & save the best score in a file
    pub(crate) save_best_score: bool,

    /// Path to write log messages to; if unset, nothing is logged
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            best_score_file: None,
            save_best_score: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    best_score_file: Option<String>,
    save_best_score: bool,
    log_file: Option<String>,
    log_level: String,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            best_score_file: None,
            save_best_score: true,
            log_file: None,
            log_level: String::from("info"),
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = FileConfigError;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, FileConfigError> {
        let log_level = value
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| FileConfigError::LogLevel(value.log_level.clone()))?;
        Ok(FileConfig {
            best_score_file: value
                .best_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            save_best_score: value.save_best_score,
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
            log_level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum FileConfigError {
    #[error("failed to expand path")]
    Expand(#[from] std::io::Error),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
