//! Directional melee hit shape construction.

use crate::geometry::{Aabb, Point, Vec2};

/// Builds the attack box in front of `body`.
///
/// The dominant axis of `facing` picks the forward direction (ties go
/// horizontal). The box is `range` long on the forward axis and as wide as the
/// body on the perpendicular one. Its center sits half the body plus half the
/// range away from the body center, on the side `facing` points to.
pub fn hit_shape(body: Aabb, facing: Vec2, range: i32) -> Aabb {
    let range = range.max(0);
    let center = body.center();
    let horizontal = facing.x.abs() >= facing.y.abs();

    if horizontal {
        let mut offset = body.width() / 2 + range / 2;
        if facing.x < 0.0 {
            offset = -offset;
        }
        Aabb::centered(Point::new(center.x + offset, center.y), range, body.height())
    } else {
        let mut offset = body.height() / 2 + range / 2;
        if facing.y < 0.0 {
            offset = -offset;
        }
        Aabb::centered(Point::new(center.x, center.y + offset), body.width(), range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Aabb {
        Aabb::square(Point::new(100, 100), 32)
    }

    #[test]
    fn faces_right() {
        let shape = hit_shape(body(), Vec2::new(1.0, 0.0), 56);
        // offset 16 + 28 = 44
        assert_eq!(shape.center(), Point::new(144, 100));
        assert_eq!((shape.width(), shape.height()), (56, 32));
        assert_eq!(shape.left(), body().right());
    }

    #[test]
    fn faces_left_and_up() {
        let left = hit_shape(body(), Vec2::new(-1.0, 0.0), 56);
        assert_eq!(left.center(), Point::new(56, 100));
        assert_eq!(left.right(), body().left());

        let up = hit_shape(body(), Vec2::new(0.2, -0.9), 56);
        assert_eq!(up.center(), Point::new(100, 56));
        assert_eq!((up.width(), up.height()), (32, 56));
    }

    #[test]
    fn diagonal_tie_goes_horizontal() {
        let v = Vec2::new(1.0, 1.0).normalized().unwrap();
        let shape = hit_shape(body(), v, 56);
        assert_eq!(shape.center().y, 100);
        assert!(shape.center().x > 100);
    }
}
