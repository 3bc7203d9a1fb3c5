use std::fmt;

use crate::config::EnemyTemplate;
use crate::geometry::{Aabb, Point};
use crate::traits::Combatant;

use super::CombatantState;

/// Stable identifier for a spawned enemy. Never reused within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hostile melee chaser.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    id: EnemyId,
    body: Aabb,
    combat: CombatantState,
    speed: f32,
    contact_damage: f32,
}

impl Enemy {
    pub fn spawn(id: EnemyId, center: Point, template: &EnemyTemplate) -> Self {
        Self {
            id,
            body: Aabb::square(center, template.size.max(0)),
            combat: CombatantState::new(template.health),
            speed: template.speed,
            contact_damage: template.contact_damage,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn center(&self) -> Point {
        self.body.center()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn contact_damage(&self) -> f32 {
        self.contact_damage
    }

    pub(crate) fn set_body(&mut self, body: Aabb) {
        self.body = body;
    }
}

impl Combatant for Enemy {
    fn combatant(&self) -> &CombatantState {
        &self.combat
    }

    fn combatant_mut(&mut self) -> &mut CombatantState {
        &mut self.combat
    }

    fn body(&self) -> Aabb {
        self.body
    }
}
