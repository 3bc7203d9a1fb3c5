use crate::state::{Enemy, EnemyId, Player};
use crate::traits::{Combatant, Damageable};

/// Applies touch damage from enemies overlapping the player.
///
/// Enemies are scanned in collection order and the first one whose hit the
/// player accepts ends the scan, so at most one enemy lands contact damage per
/// call. Returns that enemy's id, or `None` when the player is dead, untouched,
/// or every hit was rejected by the invulnerability window.
pub fn apply_contact_damage(player: &mut Player, enemies: &[Enemy]) -> Option<EnemyId> {
    if !player.is_alive() {
        return None;
    }

    let body = player.body();
    for enemy in enemies {
        if !enemy.is_alive() || !enemy.body().intersects(&body) {
            continue;
        }
        if player.take_damage(enemy.contact_damage()) {
            return Some(enemy.id());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnemyTemplate, GameConfig};
    use crate::env::ClassStats;
    use crate::geometry::Point;

    fn player() -> Player {
        Player::new(Point::new(0, 0), "warrior", &ClassStats::default(), &GameConfig::default())
    }

    fn enemy(id: u32, x: i32) -> Enemy {
        Enemy::spawn(EnemyId(id), Point::new(x, 0), &EnemyTemplate::default())
    }

    #[test]
    fn first_overlapping_enemy_wins() {
        let mut p = player();
        let enemies = vec![enemy(1, 500), enemy(2, 10), enemy(3, -10)];
        assert_eq!(apply_contact_damage(&mut p, &enemies), Some(EnemyId(2)));
        assert_eq!(p.health(), 90.0);
        assert!(p.is_invulnerable());

        // Window open: nobody lands a hit.
        assert_eq!(apply_contact_damage(&mut p, &enemies), None);
        assert_eq!(p.health(), 90.0);
    }

    #[test]
    fn dead_enemies_deal_no_contact_damage() {
        let mut p = player();
        let mut e = enemy(1, 0);
        e.take_damage(1_000.0);
        assert_eq!(apply_contact_damage(&mut p, &[e]), None);
        assert_eq!(p.health(), 100.0);
    }
}
