//! Loot economy: drops on death, pickup on contact.
//!
//! - [`on_enemy_defeated`]: one Bernoulli roll chooses coin or item
//! - [`check_pickups`]: collects every drop the player overlaps
//! - [`LootCounters`]: running totals for the HUD

mod counters;
mod drops;

pub use counters::{LootCounters, PickupTally, check_pickups};
pub use drops::{on_enemy_defeated, roll_kind};
