use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Enemy, LootKind, LootPickup};

/// Coin when the draw falls below `coin_chance`, item otherwise.
pub fn roll_kind(rng: &mut impl RngOracle, coin_chance: f64) -> LootKind {
    if rng.chance(coin_chance) {
        LootKind::Coin
    } else {
        LootKind::Item
    }
}

/// Drop for a defeated enemy, placed at its last center.
pub fn on_enemy_defeated(
    enemy: &Enemy,
    rng: &mut impl RngOracle,
    config: &GameConfig,
) -> LootPickup {
    let kind = roll_kind(rng, config.coin_drop_chance);
    LootPickup::new(enemy.center(), kind)
}
