//! Capability traits shared by every combatant.
//!
//! Players and enemies are distinct data types; what they have in common is a
//! [`CombatantState`] value embedded in each. Implementing [`Combatant`] (two
//! accessors and a body) grants both capability traits through blanket impls.

use crate::geometry::Aabb;
use crate::state::CombatantState;

/// Anything that embeds a [`CombatantState`] and occupies a body.
pub trait Combatant {
    fn combatant(&self) -> &CombatantState;
    fn combatant_mut(&mut self) -> &mut CombatantState;
    fn body(&self) -> Aabb;
}

/// Can receive damage and die.
pub trait Damageable {
    /// Applies damage. Returns `false` when the hit is rejected (dead, or
    /// inside an invulnerability window) and health is left untouched.
    fn take_damage(&mut self, amount: f32) -> bool;
    fn is_alive(&self) -> bool;
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;
}

/// Owns countdown timers driven by the simulation delta.
pub trait Timered {
    fn advance_timers(&mut self, dt: f32);
}

impl<T: Combatant + ?Sized> Damageable for T {
    fn take_damage(&mut self, amount: f32) -> bool {
        self.combatant_mut().take_damage(amount)
    }

    fn is_alive(&self) -> bool {
        self.combatant().is_alive()
    }

    fn health(&self) -> f32 {
        self.combatant().health()
    }

    fn max_health(&self) -> f32 {
        self.combatant().max_health()
    }
}

impl<T: Combatant + ?Sized> Timered for T {
    fn advance_timers(&mut self, dt: f32) {
        self.combatant_mut().advance_timers(dt);
    }
}
