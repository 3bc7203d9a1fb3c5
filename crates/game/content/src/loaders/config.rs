//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`], so an empty file is
    /// a valid configuration.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn overrides_nested_enemy_template() {
        let config = ConfigLoader::parse(
            r#"
            coin_drop_chance = 0.25
            default_class = "mage"

            [enemy]
            speed = 90.0
            "#,
        )
        .unwrap();
        assert_eq!(config.coin_drop_chance, 0.25);
        assert_eq!(config.default_class, "mage");
        assert_eq!(config.enemy.speed, 90.0);
        assert_eq!(config.enemy.size, 28);
        assert_eq!(config.attack_cooldown, 0.45);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ConfigLoader::parse("attack_cooldown = [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
