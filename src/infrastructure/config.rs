//! Configuration management

use crate::domain::MAX_WINDOW_DAYS;
use crate::error::{MoodjError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "moodj.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MOODJ_CONFIG";

/// Environment variable naming the entries file
pub const FILE_ENV: &str = "MOODJ_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON file holding the entries
    pub data_file: PathBuf,
    /// Window for `stats` when no range is given
    pub stats_days: u32,
    /// Config file this was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("entries.json"),
            stats_days: 30,
            source: None,
        }
    }
}

impl Config {
    /// Load a config file. A relative `data_file` is taken relative to the
    /// directory holding the config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MoodjError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&contents)?;

        if !(1..=MAX_WINDOW_DAYS).contains(&config.stats_days) {
            return Err(MoodjError::Config(format!(
                "stats_days must be between 1 and {}, got {}",
                MAX_WINDOW_DAYS, config.stats_days
            )));
        }

        if config.data_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.data_file = dir.join(&config.data_file);
            }
        }
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Find the config file: explicit path, then `MOODJ_CONFIG`, then
    /// `moodj.toml` in `cwd`. Without any, defaults apply.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Self::load_from_file(Path::new(&path));
            }
        }

        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        Ok(Config::default())
    }

    /// Apply the entries-file overrides; the flag wins over the environment.
    pub fn with_overrides(mut self, env_file: Option<PathBuf>, flag_file: Option<PathBuf>) -> Self {
        if let Some(path) = flag_file.or(env_file) {
            self.data_file = path;
        }
        self
    }

    /// Full resolution used by the binary
    pub fn resolve(config_flag: Option<&Path>, file_flag: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let env_file = std::env::var(FILE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let config = Self::discover(config_flag, &cwd)?.with_overrides(env_file, file_flag);
        log::debug!(
            "using entries file {} (config: {})",
            config.data_file.display(),
            config
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string())
        );
        Ok(config)
    }
}
