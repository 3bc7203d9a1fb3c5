//! Enemy behavior.
//!
//! Enemies seek the player in a straight line and rely on the collision
//! resolver to keep them out of walls. There is no pathfinding: an enemy whose
//! direct line is blocked will press against the wall until the target moves.

mod pursuit;

pub use pursuit::step;
