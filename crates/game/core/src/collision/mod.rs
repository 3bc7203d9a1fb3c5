//! Collision resolution against static level geometry.
//!
//! Movement is discrete: each tick a body is displaced by whole units and
//! clamped flush to whatever it ran into. There is no time-of-impact sweep,
//! so a single step longer than an obstacle's thickness can tunnel; level
//! walls are tile-sized, which keeps per-tick steps well below that.
//!
//! # Core Functions
//!
//! - [`resolve_move`]: per-axis sweep-and-clamp for one body
//! - [`separate_overlap`]: push two overlapping bodies apart, wall-aware

mod obstacles;
mod resolve;
mod separate;

pub use obstacles::ObstacleSet;
pub use resolve::resolve_move;
pub use separate::separate_overlap;
