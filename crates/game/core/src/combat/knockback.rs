use crate::collision::{ObstacleSet, resolve_move};
use crate::geometry::{Aabb, Vec2};

/// Shoves `target` `distance` units directly away from `source`.
///
/// Falls back to `fallback` (the attacker's facing) when both centers
/// coincide. The displacement goes through [`resolve_move`], so knockback
/// stops at walls.
pub fn knockback(
    source: Aabb,
    target: Aabb,
    fallback: Vec2,
    distance: f32,
    obstacles: &ObstacleSet,
) -> Aabb {
    let away = target.center_vec() - source.center_vec();
    let Some(direction) = away.normalized().or_else(|| fallback.normalized()) else {
        return target;
    };
    resolve_move(target, direction * distance, obstacles)
}
