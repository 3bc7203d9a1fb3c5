//! Read-only inputs supplied by the environment: class stat tables and
//! random sources.
//!
//! Nothing in here is simulation state. The scene borrows or owns these values
//! but never mutates them during a tick (random sources only advance their own
//! internal cursor).

mod classes;
mod rng;

pub use classes::{ClassStats, ClassTable};
pub use rng::{FixedRng, PcgRng, RngOracle};
