use crate::collision::ObstacleSet;
use crate::config::GameConfig;
use crate::geometry::Aabb;
use crate::state::{Enemy, EnemyId, Player};
use crate::traits::{Combatant, Damageable};

use super::hit_shape::hit_shape;
use super::knockback::knockback;

/// Result of an attack that actually fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub hit_shape: Aabb,
    /// Every enemy the swing connected with, in encounter order.
    pub struck: Vec<EnemyId>,
    /// Enemies this swing killed, in encounter order. Subset of `struck`.
    pub defeated: Vec<EnemyId>,
}

impl AttackOutcome {
    pub fn hit_anything(&self) -> bool {
        !self.struck.is_empty()
    }
}

/// Swings the player's melee attack at `enemies`.
///
/// Returns `None` without touching any state when the player cannot attack
/// (dead, or cooldown still running). Otherwise the cooldown and active timer
/// restart, the hit shape is stored on the player, and every live enemy
/// overlapping it takes the player's attack damage and is knocked back
/// (walls respected). Dead enemies in the slice are ignored.
///
/// Enemies are only mutated in place; removing the defeated ones is the
/// caller's job.
pub fn attempt_attack(
    player: &mut Player,
    enemies: &mut [Enemy],
    obstacles: &ObstacleSet,
    config: &GameConfig,
) -> Option<AttackOutcome> {
    if !player.can_attack() {
        return None;
    }

    player
        .combatant_mut()
        .begin_attack(config.attack_cooldown, config.attack_duration);

    let attacker = player.body();
    let facing = player.facing();
    let shape = hit_shape(attacker, facing, player.attack_range());
    player.set_last_hit_shape(shape);

    let damage = player.attack_damage();
    let mut struck = Vec::new();
    let mut defeated = Vec::new();

    for enemy in enemies.iter_mut() {
        if !enemy.is_alive() || !shape.intersects(&enemy.body()) {
            continue;
        }

        enemy.take_damage(damage);
        let pushed = knockback(
            attacker,
            enemy.body(),
            facing,
            config.knockback_distance,
            obstacles,
        );
        enemy.set_body(pushed);

        struck.push(enemy.id());
        if !enemy.is_alive() {
            defeated.push(enemy.id());
        }
    }

    Some(AttackOutcome {
        hit_shape: shape,
        struck,
        defeated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyTemplate;
    use crate::env::ClassStats;
    use crate::geometry::Point;
    use crate::traits::Timered;

    fn setup() -> (Player, GameConfig) {
        let config = GameConfig::default();
        let player = Player::new(Point::new(100, 100), "warrior", &ClassStats::default(), &config);
        (player, config)
    }

    fn enemy_at(id: u32, x: i32, y: i32) -> Enemy {
        Enemy::spawn(EnemyId(id), Point::new(x, y), &EnemyTemplate::default())
    }

    #[test]
    fn empty_swing_still_consumes_cooldown() {
        let (mut player, config) = setup();
        let outcome = attempt_attack(&mut player, &mut [], &ObstacleSet::empty(), &config).unwrap();
        assert!(!outcome.hit_anything());
        assert!(outcome.defeated.is_empty());
        assert_eq!(player.combatant().attack_cooldown(), 0.45);
        assert_eq!(player.active_hit_shape(), Some(outcome.hit_shape));
    }

    #[test]
    fn second_swing_within_cooldown_is_rejected() {
        let (mut player, config) = setup();
        let mut enemies = vec![enemy_at(1, 140, 100)];
        assert!(attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).is_some());
        player.advance_timers(0.2);
        assert!(attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).is_none());
        assert_eq!(enemies[0].health(), 18.0);

        player.advance_timers(0.3);
        assert!(attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).is_some());
    }

    #[test]
    fn hits_damage_and_knock_back_in_front_only() {
        let (mut player, config) = setup();
        let mut enemies = vec![enemy_at(1, 140, 100), enemy_at(2, 40, 100)];
        let outcome =
            attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).unwrap();

        assert_eq!(outcome.struck, vec![EnemyId(1)]);
        assert_eq!(enemies[0].health(), 18.0);
        assert_eq!(enemies[0].center(), Point::new(156, 100));
        assert_eq!(enemies[1].health(), 30.0);
        assert_eq!(enemies[1].center(), Point::new(40, 100));
    }

    #[test]
    fn reports_defeated_in_encounter_order() {
        let config = GameConfig::default();
        let stats = ClassStats {
            attack_damage: 50.0,
            ..ClassStats::default()
        };
        let mut player = Player::new(Point::new(100, 100), "warrior", &stats, &config);
        let mut enemies = vec![enemy_at(7, 150, 100), enemy_at(3, 130, 100)];
        let outcome =
            attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).unwrap();
        assert_eq!(outcome.defeated, vec![EnemyId(7), EnemyId(3)]);
    }

    #[test]
    fn dead_enemies_are_skipped() {
        let (mut player, config) = setup();
        let mut enemies = vec![enemy_at(1, 140, 100)];
        enemies[0].take_damage(100.0);
        let before = enemies[0].body();
        let outcome =
            attempt_attack(&mut player, &mut enemies, &ObstacleSet::empty(), &config).unwrap();
        assert!(outcome.struck.is_empty());
        assert!(outcome.defeated.is_empty());
        assert_eq!(enemies[0].body(), before);
    }

    #[test]
    fn dead_player_cannot_attack() {
        let (mut player, config) = setup();
        player.take_damage(1_000.0);
        assert!(attempt_attack(&mut player, &mut [], &ObstacleSet::empty(), &config).is_none());
    }
}
