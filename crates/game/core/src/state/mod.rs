//! Simulation entities.
//!
//! [`Player`] and [`Enemy`] are separate types that each embed a
//! [`CombatantState`]; shared behavior comes from the capability traits in
//! [`crate::traits`]. Pickups carry no timers and no health.
mod combatant;
mod enemy;
mod pickup;
mod player;

pub use combatant::{CombatantState, ResourceMeter};
pub use enemy::{Enemy, EnemyId};
pub use pickup::{LootKind, LootPickup};
pub use player::Player;
