/// Tunable simulation parameters.
///
/// Every field has a default matching the shipped balance, and loaders fill
/// missing fields from [`GameConfig::default`], so a config file only needs to
/// list what it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seconds of damage immunity granted to the player after an accepted hit.
    pub invulnerability_duration: f32,
    /// Blink period of the invulnerability flash, in seconds.
    pub flash_interval: f32,
    /// Seconds between two player attacks.
    pub attack_cooldown: f32,
    /// Seconds the hit shape stays visible after an attack.
    pub attack_duration: f32,
    /// Added to the player's body size to get the attack range.
    pub attack_reach_bonus: i32,
    /// Distance an enemy is shoved when struck.
    pub knockback_distance: f32,
    /// Probability that a defeated enemy drops a coin rather than an item.
    pub coin_drop_chance: f64,
    /// Side length of the player's square body.
    pub player_size: i32,
    pub enemy: EnemyTemplate,
    /// Push overlapping enemies apart each tick.
    pub separate_enemies: bool,
    /// Class used when a session starts, if the class table has it.
    pub default_class: String,
}

impl GameConfig {
    pub const DEFAULT_INVULNERABILITY_DURATION: f32 = 0.4;
    pub const DEFAULT_FLASH_INTERVAL: f32 = 0.1;
    pub const DEFAULT_ATTACK_COOLDOWN: f32 = 0.45;
    pub const DEFAULT_ATTACK_DURATION: f32 = 0.1;
    pub const DEFAULT_ATTACK_REACH_BONUS: i32 = 24;
    pub const DEFAULT_KNOCKBACK_DISTANCE: f32 = 16.0;
    pub const DEFAULT_COIN_DROP_CHANCE: f64 = 0.6;
    pub const DEFAULT_PLAYER_SIZE: i32 = 32;
    pub const DEFAULT_CLASS: &'static str = "warrior";

    pub fn new() -> Self {
        Self {
            invulnerability_duration: Self::DEFAULT_INVULNERABILITY_DURATION,
            flash_interval: Self::DEFAULT_FLASH_INTERVAL,
            attack_cooldown: Self::DEFAULT_ATTACK_COOLDOWN,
            attack_duration: Self::DEFAULT_ATTACK_DURATION,
            attack_reach_bonus: Self::DEFAULT_ATTACK_REACH_BONUS,
            knockback_distance: Self::DEFAULT_KNOCKBACK_DISTANCE,
            coin_drop_chance: Self::DEFAULT_COIN_DROP_CHANCE,
            player_size: Self::DEFAULT_PLAYER_SIZE,
            enemy: EnemyTemplate::default(),
            separate_enemies: true,
            default_class: Self::DEFAULT_CLASS.to_string(),
        }
    }

    /// Attack range for a body of `body_size`.
    pub fn attack_range(&self, body_size: i32) -> i32 {
        body_size + self.attack_reach_bonus
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Stats shared by every spawned enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyTemplate {
    pub size: i32,
    pub speed: f32,
    pub health: f32,
    pub contact_damage: f32,
}

impl EnemyTemplate {
    pub const DEFAULT_SIZE: i32 = 28;
    pub const DEFAULT_SPEED: f32 = 140.0;
    pub const DEFAULT_HEALTH: f32 = 30.0;
    pub const DEFAULT_CONTACT_DAMAGE: f32 = 10.0;
}

impl Default for EnemyTemplate {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            speed: Self::DEFAULT_SPEED,
            health: Self::DEFAULT_HEALTH,
            contact_damage: Self::DEFAULT_CONTACT_DAMAGE,
        }
    }
}
