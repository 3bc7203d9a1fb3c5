//! Spatial primitives shared by every simulation subsystem.

mod aabb;
mod vector;

pub use aabb::Aabb;
pub use vector::{Point, Vec2};
