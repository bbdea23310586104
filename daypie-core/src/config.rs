//! Global daypie configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UNCOVERED_COLOR;
use crate::error::{DayPieError, DayPieResult};

static DEFAULT_SCHEDULE_PATH: &str = "~/.config/daypie/schedule.toml";

fn default_schedule_file() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_PATH)
}

fn default_uncovered_color() -> String {
    DEFAULT_UNCOVERED_COLOR.to_string()
}

/// Configuration at ~/.config/daypie/config.toml, overridable with
/// `DAYPIE_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPieConfig {
    #[serde(default = "default_schedule_file")]
    pub schedule_file: PathBuf,

    /// Color drawn for time with no scheduled task
    #[serde(default = "default_uncovered_color")]
    pub uncovered_color: String,
}

impl Default for DayPieConfig {
    fn default() -> Self {
        DayPieConfig {
            schedule_file: default_schedule_file(),
            uncovered_color: default_uncovered_color(),
        }
    }
}

impl DayPieConfig {
    pub fn config_path() -> DayPieResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayPieError::Config("Could not determine config directory".into()))?
            .join("daypie");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default on first run.
    pub fn load() -> DayPieResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`, with `DAYPIE_*` environment variables taking
    /// precedence over the file.
    pub fn load_from(path: &Path) -> DayPieResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("DAYPIE"))
    }

    fn load_with_env(path: &Path, env: Environment) -> DayPieResult<Self> {
        let config: DayPieConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| DayPieError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayPieError::Config(e.to_string()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Schedule file location with `~` expanded.
    pub fn schedule_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.schedule_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayPieResult<()> {
        let contents = format!(
            "\
# daypie configuration

# Where your schedule lives:
# schedule_file = \"{}\"

# Color for time with nothing scheduled:
# uncovered_color = \"{}\"
",
            DEFAULT_SCHEDULE_PATH, DEFAULT_UNCOVERED_COLOR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayPieError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayPieError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daypie/config.toml");

        DayPieConfig::create_default_config(&path).unwrap();
        let config = DayPieConfig::load_from(&path).unwrap();

        assert_eq!(config.schedule_file, PathBuf::from(DEFAULT_SCHEDULE_PATH));
        assert_eq!(config.uncovered_color, DEFAULT_UNCOVERED_COLOR);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "schedule_file = \"/tmp/days.toml\"\nuncovered_color = \"#dddddd\"\n",
        )
        .unwrap();

        let config = DayPieConfig::load_from(&path).unwrap();
        assert_eq!(config.schedule_path(), PathBuf::from("/tmp/days.toml"));
        assert_eq!(config.uncovered_color, "#dddddd");
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "uncovered_color = \"#dddddd\"\n").unwrap();

        let vars = config::Map::from([(
            "DAYPIE_UNCOVERED_COLOR".to_string(),
            "#123456".to_string(),
        )]);
        let env = Environment::with_prefix("DAYPIE").source(Some(vars));

        let config = DayPieConfig::load_with_env(&path, env).unwrap();
        assert_eq!(config.uncovered_color, "#123456");
        assert_eq!(config.schedule_file, PathBuf::from(DEFAULT_SCHEDULE_PATH));
    }

    #[test]
    fn schedule_path_expands_tilde() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = DayPieConfig::default();
        assert!(!config.schedule_path().to_string_lossy().starts_with('~'));
    }
}
