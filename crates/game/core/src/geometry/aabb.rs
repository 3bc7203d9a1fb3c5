use super::{Point, Vec2};

/// Axis-aligned bounding box in integer world units.
///
/// `(x, y)` is the top-left corner; `y` grows downward. This is the only
/// spatial primitive in the simulation: entity bodies, walls, hit shapes and
/// pickups are all `Aabb`s.
///
/// # Invariant
///
/// `width` and `height` are never negative. Constructors clamp negative sizes
/// to zero, so an `Aabb` obtained through the public API always upholds this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Box of the given size whose center is `center`.
    pub fn centered(center: Point, width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height).with_center(center)
    }

    /// Square box of side `size` centered on `center`.
    pub fn square(center: Point, size: i32) -> Self {
        Self::centered(center, size, size)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn center_vec(&self) -> Vec2 {
        self.center().as_vec2()
    }

    #[must_use]
    pub const fn with_center(mut self, center: Point) -> Self {
        self.x = center.x - self.width / 2;
        self.y = center.y - self.height / 2;
        self
    }

    #[must_use]
    pub const fn translated(mut self, dx: i32, dy: i32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    #[must_use]
    pub const fn with_right(mut self, right: i32) -> Self {
        self.x = right - self.width;
        self
    }

    #[must_use]
    pub const fn with_left(mut self, left: i32) -> Self {
        self.x = left;
        self
    }

    #[must_use]
    pub const fn with_bottom(mut self, bottom: i32) -> Self {
        self.y = bottom - self.height;
        self
    }

    #[must_use]
    pub const fn with_top(mut self, top: i32) -> Self {
        self.y = top;
        self
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect,
    /// and an empty box intersects nothing.
    pub const fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Overlapping region of two boxes, or `None` when they do not intersect.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Aabb::new(left, top, right - left, bottom - top))
    }
}
