//! Per-frame simulation driver.
//!
//! The [`Scene`] is the authoritative owner of the player, live enemies,
//! pickups and the obstacle set. One call to [`Scene::tick`] runs every
//! subsystem to completion in a fixed order; there are no suspension points
//! and nothing carries over half-finished into the next tick.

mod level;
mod report;
mod scene;

pub use level::Level;
pub use report::{TickInput, TickReport};
pub use scene::Scene;
