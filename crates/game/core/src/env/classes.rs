//! Character-class stat tables.
//!
//! Tables are loaded by the content layer and handed to the core already
//! parsed; the core only validates and looks them up.

use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Base stats for one playable class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassStats {
    pub speed: f32,
    #[cfg_attr(feature = "serde", serde(alias = "hp"))]
    pub max_health: f32,
    #[cfg_attr(feature = "serde", serde(alias = "mana"))]
    pub max_mana: f32,
    #[cfg_attr(feature = "serde", serde(alias = "damage"))]
    pub attack_damage: f32,
    /// Identifier of the class skill. Reserved; nothing consumes it yet.
    pub skill: Option<String>,
}

impl ClassStats {
    pub const DEFAULT_SPEED: f32 = 200.0;
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    pub const DEFAULT_MAX_MANA: f32 = 100.0;
    pub const DEFAULT_ATTACK_DAMAGE: f32 = 12.0;

    fn validate(&self, class: &str) -> Result<(), ConfigError> {
        let checks = [
            ("speed", self.speed),
            ("max_health", self.max_health),
            ("max_mana", self.max_mana),
            ("attack_damage", self.attack_damage),
        ];
        for (stat, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidStat {
                    class: class.to_string(),
                    stat,
                });
            }
        }
        Ok(())
    }
}

impl Default for ClassStats {
    fn default() -> Self {
        Self {
            speed: Self::DEFAULT_SPEED,
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_mana: Self::DEFAULT_MAX_MANA,
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            skill: None,
        }
    }
}

/// Validated, name-ordered class table. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassTable {
    classes: BTreeMap<String, ClassStats>,
}

impl ClassTable {
    pub fn new(classes: BTreeMap<String, ClassStats>) -> Result<Self, ConfigError> {
        if classes.is_empty() {
            return Err(ConfigError::EmptyClassTable);
        }
        for (name, stats) in &classes {
            stats.validate(name)?;
        }
        Ok(Self { classes })
    }

    pub fn get(&self, name: &str) -> Result<&ClassStats, ConfigError> {
        self.classes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownClass {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Name of the class at `slot` in table order.
    pub fn name_at(&self, slot: usize) -> Option<&str> {
        self.names().nth(slot)
    }

    /// `preferred` if the table has it, otherwise the first class.
    pub fn default_class<'a>(&'a self, preferred: &'a str) -> &'a str {
        if self.contains(preferred) {
            return preferred;
        }
        // Non-empty by construction.
        self.names().next().unwrap_or(preferred)
    }
}
