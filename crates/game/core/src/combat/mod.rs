//! Melee combat resolution.
//!
//! Pure functions over borrowed entities: nothing here owns state, and every
//! rejected action is reported through the return value rather than an error.
//!
//! # Core Functions
//!
//! - [`attempt_attack`]: cooldown gate, hit shape, damage, knockback
//! - [`hit_shape`]: directional attack box in front of a body
//! - [`knockback`]: fixed-distance shove resolved against walls
//! - [`apply_contact_damage`]: enemy touch damage, first accepted hit wins

mod attack;
mod contact;
mod hit_shape;
mod knockback;

pub use attack::{AttackOutcome, attempt_attack};
pub use contact::apply_contact_damage;
pub use hit_shape::hit_shape;
pub use knockback::knockback;
