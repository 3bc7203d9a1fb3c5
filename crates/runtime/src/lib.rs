//! Runtime orchestration for the arena simulation.
//!
//! This crate wires loaded content, a seeded random source and frame input
//! into a [`Session`] that drives [`game_core::Scene`] one frame at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the frame driver
//! - [`input`] maps raw key state to simulation intent
//! - [`view`] exposes read-only snapshots for renderers and HUDs
//! - [`rng`] adapts `rand` generators to the core's random oracle
pub mod error;
pub mod input;
pub mod rng;
pub mod session;
pub mod view;

pub use error::{Result, RuntimeError};
pub use input::FrameInput;
pub use rng::RandRng;
pub use session::Session;
pub use view::{EntityKind, EntityView, HudView};
