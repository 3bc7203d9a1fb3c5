use crate::combat::AttackOutcome;
use crate::geometry::Vec2;
use crate::state::{EnemyId, LootPickup};

/// Intents gathered by the input layer for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Desired movement direction. Need not be normalized; zero means idle.
    pub movement: Vec2,
    /// Attack requested this tick.
    pub attack: bool,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            attack: false,
        }
    }

    #[must_use]
    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }
}

/// Everything notable that happened during one [`Scene::tick`](super::Scene::tick).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Zero-based index of the tick that produced this report.
    pub tick: u64,
    /// Present when an attack was requested and fired.
    pub attack: Option<AttackOutcome>,
    /// An attack was requested but rejected by the cooldown or death gate.
    pub attack_rejected: bool,
    /// Drops created for enemies defeated this tick, in defeat order.
    pub drops: Vec<(EnemyId, LootPickup)>,
    /// Enemy whose touch damage the player accepted.
    pub contact_hit: Option<EnemyId>,
    pub coins_collected: u32,
    pub items_collected: u32,
    /// The player's alive flag flipped during this tick.
    pub player_died: bool,
}

impl TickReport {
    pub fn defeated(&self) -> impl Iterator<Item = EnemyId> + '_ {
        self.drops.iter().map(|(id, _)| *id)
    }

    pub fn is_quiet(&self) -> bool {
        self.attack.is_none()
            && !self.attack_rejected
            && self.drops.is_empty()
            && self.contact_hit.is_none()
            && self.coins_collected == 0
            && self.items_collected == 0
            && !self.player_died
    }
}
