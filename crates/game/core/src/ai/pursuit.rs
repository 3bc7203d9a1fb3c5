use crate::collision::{ObstacleSet, resolve_move};
use crate::geometry::Point;
use crate::state::Enemy;
use crate::traits::{Combatant, Damageable};

/// Moves `enemy` straight toward `target` at its own speed for `dt` seconds.
///
/// Dead enemies and enemies already centered on the target do not move.
pub fn step(enemy: &mut Enemy, target: Point, dt: f32, obstacles: &ObstacleSet) {
    if !enemy.is_alive() {
        return;
    }

    let toward = target.as_vec2() - enemy.body().center_vec();
    let Some(direction) = toward.normalized() else {
        return;
    };

    let movement = direction * (enemy.speed() * dt);
    let moved = resolve_move(enemy.body(), movement, obstacles);
    enemy.set_body(moved);
}
