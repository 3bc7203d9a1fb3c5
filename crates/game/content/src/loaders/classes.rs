//! Playable class table loader.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{ClassStats, ClassTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for class stats from RON files.
///
/// File format: a map from class name to [`ClassStats`]. Missing stats take
/// their defaults and `hp`/`mana`/`damage` are accepted as short names.
///
/// Example:
/// ```ron
/// {
///     "warrior": (speed: 200.0, hp: 120.0, damage: 14.0),
///     "mage": (speed: 180.0, max_health: 80.0, skill: Some("fireball")),
/// }
/// ```
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(path: &Path) -> LoadResult<ClassTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a class table from RON text.
    pub fn parse(content: &str) -> LoadResult<ClassTable> {
        let raw: BTreeMap<String, ClassStats> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse classes RON: {}", e))?;

        ClassTable::new(raw).map_err(|e| anyhow::anyhow!("Invalid class table: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_names_and_defaults() {
        let table = ClassLoader::parse(
            r#"{
                "rogue": (speed: 240.0, hp: 90.0),
                "mage": (mana: 150.0, damage: 8.0, skill: Some("fireball")),
            }"#,
        )
        .unwrap();

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["mage", "rogue"]);
        let rogue = table.get("rogue").unwrap();
        assert_eq!(rogue.max_health, 90.0);
        assert_eq!(rogue.attack_damage, 12.0);
        let mage = table.get("mage").unwrap();
        assert_eq!(mage.speed, 200.0);
        assert_eq!(mage.max_mana, 150.0);
        assert_eq!(mage.skill.as_deref(), Some("fireball"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = ClassLoader::parse("{}").unwrap_err();
        assert!(err.to_string().contains("Invalid class table"));
    }

    #[test]
    fn negative_stat_is_rejected() {
        let err = ClassLoader::parse(r#"{ "ghost": (speed: -1.0) }"#).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
