use crate::game::{Tuning, TuningError};
use log::LevelFilter;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Parameters of the speed curve
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about the log file
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

    /// Return the path to log to: the file given in the configuration or, if
    /// that is not set, `gridsnake.log` in the local data directory.  Returns
    /// `None` if no path is configured and the data directory could not be
    /// determined.
    pub(crate) fn log_file(&self) -> Option<Cow<'_, Path>> {
        self.files.log_file.as_deref().map(Cow::from).or_else(|| {
            dirs::data_local_dir()
                .map(|p| Cow::from(p.join("gridsnake").join("gridsnake.log")))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) tuning: Tuning,
}

/// The `[game]` table.  Times are in milliseconds; anything left out takes
/// its default.
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    start_speed_ms: Option<u64>,
    speed_step_ms: Option<u64>,
    min_speed_ms: Option<u64>,
    points_per_speed: Option<u32>,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = TuningError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, TuningError> {
        let dflt = Tuning::default();
        let ms = |v: Option<u64>, d: Duration| v.map_or(d, Duration::from_millis);
        let tuning = Tuning::new(
            ms(value.start_speed_ms, dflt.start_speed()),
            ms(value.speed_step_ms, dflt.speed_step()),
            ms(value.min_speed_ms, dflt.min_speed()),
            value.points_per_speed.unwrap_or(dflt.points_per_speed()),
        )?;
        Ok(GameConfig { tuning })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path to the log file
    log_file: Option<PathBuf>,

    /// Most verbose level of messages to write to the log file
    pub(crate) log_level: LevelFilter,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn load_str(s: &str) -> Result<Config, ConfigError> {
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "{s}").unwrap();
        tmpfile.flush().unwrap();
        Config::load(tmpfile.path(), false)
    }

    #[test]
    fn empty_file() {
        let cfg = load_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.tuning, Tuning::default());
        assert_eq!(cfg.files.log_level, LevelFilter::Info);
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "[game]\n",
            "start-speed-ms = 250\n",
            "speed-step-ms = 25\n",
            "min-speed-ms = 100\n",
            "points-per-speed = 3\n",
            "\n",
            "[files]\n",
            "log-file = \"/tmp/snake.log\"\n",
            "log-level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg.game.tuning,
            Tuning::new(ms(250), ms(25), ms(100), 3).unwrap()
        );
        assert_eq!(cfg.files.log_level, LevelFilter::Debug);
        assert_eq!(
            cfg.log_file().as_deref(),
            Some(Path::new("/tmp/snake.log"))
        );
    }

    #[test]
    fn partial_game_table() {
        let cfg = load_str("[game]\nmin-speed-ms = 120\n").unwrap();
        let tuning = cfg.game.tuning;
        assert_eq!(tuning.start_speed(), ms(300));
        assert_eq!(tuning.speed_step(), ms(20));
        assert_eq!(tuning.min_speed(), ms(120));
        assert_eq!(tuning.points_per_speed(), 4);
    }

    #[test]
    fn invalid_tuning() {
        let r = load_str("[game]\nstart-speed-ms = 50\nmin-speed-ms = 80\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
        let r = load_str("[game]\npoints-per-speed = 0\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn unknown_log_level() {
        let r = load_str("[files]\nlog-level = \"chatty\"\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }
}
