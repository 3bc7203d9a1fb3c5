//! Pairwise separation of two dynamic bodies.

use super::{ObstacleSet, resolve_move};
use crate::geometry::{Aabb, Vec2};

/// Pushes two overlapping bodies apart along the axis of least penetration.
///
/// Returns the inputs unchanged when the boxes do not overlap. Otherwise the
/// total push is `overlap_extent + 1` on the chosen axis (X wins ties), split
/// `share_a` / `1 - share_a` between the two bodies. `a` moves toward the
/// negative axis when its center is not greater than `b`'s. Each push is
/// resolved through [`resolve_move`], so neither body is shoved into a wall.
///
/// `share_a` is clamped to `[0, 1]`; a NaN share splits evenly.
pub fn separate_overlap(
    a: Aabb,
    b: Aabb,
    obstacles: &ObstacleSet,
    share_a: f32,
) -> (Aabb, Aabb) {
    let Some(overlap) = a.intersection(&b) else {
        return (a, b);
    };

    let share_a = if share_a.is_nan() {
        0.5
    } else {
        share_a.clamp(0.0, 1.0)
    };
    let share_b = 1.0 - share_a;

    let center_a = a.center();
    let center_b = b.center();

    let (push_a, push_b) = if overlap.width() <= overlap.height() {
        let push = (overlap.width() + 1) as f32;
        let sign = if center_a.x <= center_b.x { -1.0 } else { 1.0 };
        (
            Vec2::new(sign * push * share_a, 0.0),
            Vec2::new(-sign * push * share_b, 0.0),
        )
    } else {
        let push = (overlap.height() + 1) as f32;
        let sign = if center_a.y <= center_b.y { -1.0 } else { 1.0 };
        (
            Vec2::new(0.0, sign * push * share_a),
            Vec2::new(0.0, -sign * push * share_b),
        )
    };

    (
        resolve_move(a, push_a, obstacles),
        resolve_move(b, push_b, obstacles),
    )
}
