//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use game_core::{ClassTable, GameConfig, Level};

use crate::loaders::{ClassLoader, ConfigLoader, LevelLoader, LoadResult};

/// Everything a scene is built from.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: GameConfig,
    pub classes: ClassTable,
    pub level: Level,
}

/// Directory holding the data files shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── classes.ron
/// └── level.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads every content file under `data_dir`.
    pub fn load_dir(data_dir: impl Into<PathBuf>) -> LoadResult<Content> {
        Self::new(data_dir).load_all()
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the class table from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<ClassTable> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    /// Load the level layout from `level.ron`.
    pub fn load_level(&self) -> LoadResult<Level> {
        LevelLoader::load(&self.data_dir.join("level.ron"))
    }

    pub fn load_all(&self) -> LoadResult<Content> {
        Ok(Content {
            config: self.load_config()?,
            classes: self.load_classes()?,
            level: self.load_level()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_data_loads() {
        let content = ContentFactory::load_dir(default_data_dir()).unwrap();
        assert_eq!(content.classes.default_class(&content.config.default_class), "warrior");
        assert_eq!(content.level.player_spawn, game_core::Point::new(72, 72));
        assert_eq!(content.level.enemy_spawns.len(), 2);
        assert!(!content.level.obstacles.is_empty());
    }

    #[test]
    fn loads_from_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "coin_drop_chance = 1.0\n").unwrap();
        fs::write(dir.path().join("classes.ron"), r#"{ "rogue": (speed: 240.0) }"#).unwrap();
        fs::write(
            dir.path().join("level.ron"),
            "(tile_size: 48, rows: [[1, 1, 1], [1, 0, 1], [1, 1, 1]])",
        )
        .unwrap();

        let content = ContentFactory::load_dir(dir.path()).unwrap();
        assert_eq!(content.config.coin_drop_chance, 1.0);
        assert_eq!(content.classes.default_class("warrior"), "rogue");
        assert_eq!(content.level.obstacles.len(), 8);
        assert_eq!(content.level.player_spawn, game_core::Point::new(72, 72));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
