//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into `game-core` types. The
//! [`ContentFactory`] ties them together for a whole data directory.

pub mod classes;
pub mod config;
pub mod factory;
pub mod level;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory, default_data_dir};
pub use level::{LevelLoader, TileGrid};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
