use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::cli::CollectArgs;
use crate::store::history::HistoryStore;

const DEFAULT_RETENTION: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub struct Config {
    pub history_dir: PathBuf,
    pub retention: Duration,
    pub input: Option<PathBuf>,
    pub date: Option<String>,
    pub use_sample: bool,
    pub json_output: bool,
    pub verbose: bool,
}

/// Optional overrides from ~/.config/depwatch/config.toml.
#[derive(Deserialize, Default)]
struct FileConfig {
    history_dir: Option<PathBuf>,
    retention: Option<String>,
}

impl Config {
    /// Built-in defaults plus an explicit root override. Never touches
    /// the filesystem, so tests get the same config on every machine.
    pub fn base(history_dir: Option<PathBuf>) -> Self {
        Config {
            history_dir: history_dir.unwrap_or_else(default_history_dir),
            retention: DEFAULT_RETENTION,
            input: None,
            date: None,
            use_sample: false,
            json_output: false,
            verbose: false,
        }
    }

    /// Defaults plus config-file overrides; CLI flags win over both.
    pub fn load(history_dir: Option<PathBuf>) -> Self {
        let file = FileConfig::load();

        let retention = file.retention();
        let mut config = Config::base(history_dir.or(file.history_dir));
        config.retention = retention;
        config
    }

    pub fn from_collect_args(history_dir: Option<PathBuf>, args: &CollectArgs) -> Self {
        let mut config = Config::load(history_dir);
        config.input = args.input.clone();
        config.date = args.date.clone();
        config.use_sample = args.sample;
        config.json_output = args.json;
        config.verbose = args.verbose;
        config
    }
}

impl FileConfig {
    fn load() -> Self {
        let Some(dirs) = directories::ProjectDirs::from("", "", "depwatch") else {
            return FileConfig::default();
        };

        let path = dirs.config_dir().join("config.toml");
        let Ok(text) = std::fs::read_to_string(&path) else {
            return FileConfig::default();
        };

        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: ignoring malformed {}: {e}", path.display());
                FileConfig::default()
            }
        }
    }

    fn retention(&self) -> Duration {
        let Some(text) = self.retention.as_deref() else {
            return DEFAULT_RETENTION;
        };

        match humantime::parse_duration(text) {
            Ok(duration) => duration,
            Err(e) => {
                eprintln!("warning: ignoring retention '{text}': {e}");
                DEFAULT_RETENTION
            }
        }
    }
}

fn default_history_dir() -> PathBuf {
    // last resort for platforms with no home directory
    HistoryStore::default_root().unwrap_or_else(|_| PathBuf::from("data/history"))
}
