//! Client settings read from the environment.

use std::env;
use std::path::PathBuf;

/// Frame length of the headless run, in seconds.
pub const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `classes.ron` and `level.ron`.
    pub data_dir: PathBuf,
    /// Frames to simulate before printing the summary.
    pub ticks: u64,
    pub seed: u64,
    /// When set, logs are also written to `arena.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var_os("ARENA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            ticks: read_env("ARENA_TICKS").unwrap_or(defaults.ticks),
            seed: read_env("ARENA_SEED").unwrap_or(defaults.seed),
            log_dir: env::var_os("ARENA_LOG_DIR").map(PathBuf::from),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: game_content::default_data_dir(),
            ticks: 600,
            seed: 0,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
