use crate::collision::{ObstacleSet, resolve_move};
use crate::config::GameConfig;
use crate::env::{ClassStats, ClassTable};
use crate::error::ConfigError;
use crate::geometry::{Aabb, Point, Vec2};
use crate::traits::Combatant;

use super::{CombatantState, ResourceMeter};

/// The controllable character.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    body: Aabb,
    combat: CombatantState,
    speed: f32,
    attack_damage: f32,
    attack_range: i32,
    class_name: String,
    skill: Option<String>,
    /// Tracked for the HUD; no action spends it yet.
    mana: ResourceMeter,
    last_hit_shape: Option<Aabb>,
    velocity: Vec2,
}

impl Player {
    /// Spawns a player of `class_name` centered on `spawn`.
    pub fn new(
        spawn: Point,
        class_name: impl Into<String>,
        stats: &ClassStats,
        config: &GameConfig,
    ) -> Self {
        let size = config.player_size.max(0);
        Self {
            body: Aabb::square(spawn, size),
            combat: CombatantState::new(stats.max_health)
                .with_invulnerability(config.invulnerability_duration, config.flash_interval),
            speed: stats.speed,
            attack_damage: stats.attack_damage,
            attack_range: config.attack_range(size),
            class_name: class_name.into(),
            skill: stats.skill.clone(),
            mana: ResourceMeter::full(stats.max_mana),
            last_hit_shape: None,
            velocity: Vec2::ZERO,
        }
    }

    /// Looks `class_name` up in `classes` and spawns it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownClass`] when the table has no such class.
    pub fn from_class(
        spawn: Point,
        classes: &ClassTable,
        class_name: &str,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        let stats = classes.get(class_name)?;
        Ok(Self::new(spawn, class_name, stats, config))
    }

    pub fn center(&self) -> Point {
        self.body.center()
    }

    pub(crate) fn set_body(&mut self, body: Aabb) {
        self.body = body;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn attack_damage(&self) -> f32 {
        self.attack_damage
    }

    pub fn attack_range(&self) -> i32 {
        self.attack_range
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn skill(&self) -> Option<&str> {
        self.skill.as_deref()
    }

    pub fn mana(&self) -> ResourceMeter {
        self.mana
    }

    pub fn facing(&self) -> Vec2 {
        self.combat.facing()
    }

    /// Displacement applied by the most recent [`walk`](Self::walk).
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Hit shape of the most recent attack, regardless of whether it is
    /// still active.
    pub fn last_hit_shape(&self) -> Option<Aabb> {
        self.last_hit_shape
    }

    /// Hit shape while the attack active timer is running.
    pub fn active_hit_shape(&self) -> Option<Aabb> {
        if self.combat.attack_timer() > 0.0 {
            self.last_hit_shape
        } else {
            None
        }
    }

    pub(crate) fn set_last_hit_shape(&mut self, shape: Aabb) {
        self.last_hit_shape = Some(shape);
    }

    /// Moves along `direction` for `dt` seconds.
    ///
    /// A non-zero direction is normalized and becomes the new facing; a zero
    /// direction leaves the player in place with its previous facing. Dead
    /// players do not move.
    pub fn walk(&mut self, direction: Vec2, dt: f32, obstacles: &ObstacleSet) {
        if !self.combat.is_alive() {
            self.velocity = Vec2::ZERO;
            return;
        }

        let direction = match direction.normalized() {
            Some(unit) => {
                self.combat.face(unit);
                unit
            }
            None => Vec2::ZERO,
        };

        let movement = direction * (self.speed * dt);
        self.velocity = movement;
        self.body = resolve_move(self.body, movement, obstacles);
    }

    pub fn is_invulnerable(&self) -> bool {
        self.combat.is_invulnerable()
    }

    pub fn flash_visible(&self) -> bool {
        self.combat.flash_visible()
    }

    pub fn can_attack(&self) -> bool {
        self.combat.can_attack()
    }
}

impl Combatant for Player {
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
