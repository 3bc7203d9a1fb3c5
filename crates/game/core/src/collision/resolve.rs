//! Axis-separated sweep-and-clamp against static obstacles.

use super::ObstacleSet;
use crate::geometry::{Aabb, Vec2};

/// Rounds a continuous displacement component to a whole-unit step, with
/// halves going to the even neighbour.
///
/// Non-finite input produces no movement.
#[inline]
pub(crate) fn axis_step(component: f32) -> i32 {
    if !component.is_finite() {
        return 0;
    }
    component.round_ties_even() as i32
}

/// Moves `body` by `movement` without letting it end up inside an obstacle.
///
/// The X component is applied and resolved first, then the Y component from
/// the X-corrected box. On each axis the box is displaced by the rounded step;
/// every obstacle it then overlaps (visited in set order) snaps it flush to
/// that obstacle's near edge. Resolving axes separately keeps diagonal motion
/// from clipping through wall corners.
///
/// With identical inputs the result is always identical.
pub fn resolve_move(body: Aabb, movement: Vec2, obstacles: &ObstacleSet) -> Aabb {
    let mut resolved = body;

    let step_x = axis_step(movement.x);
    if step_x != 0 {
        resolved = resolved.translated(step_x, 0);
        for obstacle in obstacles {
            if !resolved.intersects(obstacle) {
                continue;
            }
            resolved = if step_x > 0 {
                resolved.with_right(obstacle.left())
            } else {
                resolved.with_left(obstacle.right())
            };
        }
    }

    let step_y = axis_step(movement.y);
    if step_y != 0 {
        resolved = resolved.translated(0, step_y);
        for obstacle in obstacles {
            if !resolved.intersects(obstacle) {
                continue;
            }
            resolved = if step_y > 0 {
                resolved.with_bottom(obstacle.top())
            } else {
                resolved.with_top(obstacle.bottom())
            };
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x: i32, y: i32, w: i32, h: i32) -> Aabb {
        Aabb::new(x, y, w, h)
    }

    #[test]
    fn free_move_rounds_components() {
        let body = Aabb::new(100, 100, 32, 32);
        let moved = resolve_move(body, Vec2::new(19.6, -0.4), &ObstacleSet::empty());
        assert_eq!((moved.x, moved.y), (120, 100));
    }

    #[test]
    fn half_unit_steps_round_to_even() {
        assert_eq!(axis_step(0.5), 0);
        assert_eq!(axis_step(1.5), 2);
        assert_eq!(axis_step(2.5), 2);
        assert_eq!(axis_step(-2.5), -2);
        assert_eq!(axis_step(-0.5), 0);

        let body = Aabb::new(0, 0, 4, 4);
        let moved = resolve_move(body, Vec2::new(2.5, 0.5), &ObstacleSet::empty());
        assert_eq!((moved.x, moved.y), (2, 0));
    }

    #[test]
    fn sub_half_unit_movement_is_dropped() {
        let body = Aabb::new(10, 10, 8, 8);
        let moved = resolve_move(body, Vec2::new(0.49, -0.49), &ObstacleSet::empty());
        assert_eq!(moved, body);
    }

    #[test]
    fn snaps_flush_on_each_direction() {
        let obstacles = ObstacleSet::new(vec![wall(50, 0, 10, 100)]);
        let body = Aabb::new(10, 10, 20, 20);

        let right = resolve_move(body, Vec2::new(30.0, 0.0), &obstacles);
        assert_eq!(right.right(), 50);

        let from_right = Aabb::new(70, 10, 20, 20);
        let left = resolve_move(from_right, Vec2::new(-30.0, 0.0), &obstacles);
        assert_eq!(left.left(), 60);

        let floor = ObstacleSet::new(vec![wall(0, 50, 100, 10)]);
        let down = resolve_move(body, Vec2::new(0.0, 40.0), &floor);
        assert_eq!(down.bottom(), 50);

        let below = Aabb::new(10, 80, 20, 20);
        let up = resolve_move(below, Vec2::new(0.0, -40.0), &floor);
        assert_eq!(up.top(), 60);
    }

    #[test]
    fn diagonal_into_wall_keeps_sliding_along_free_axis() {
        let obstacles = ObstacleSet::new(vec![wall(40, 0, 10, 200)]);
        let body = Aabb::new(10, 10, 20, 20);
        let moved = resolve_move(body, Vec2::new(20.0, 15.0), &obstacles);
        assert_eq!(moved.right(), 40);
        assert_eq!(moved.y, 25);
    }

    #[test]
    fn non_finite_movement_is_ignored() {
        let body = Aabb::new(0, 0, 4, 4);
        let moved = resolve_move(body, Vec2::new(f32::NAN, f32::INFINITY), &ObstacleSet::empty());
        assert_eq!(moved, body);
    }
}
