use crate::geometry::Vec2;

/// Float resource meter (health, mana). `0 <= current <= maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ResourceMeter {
    current: f32,
    maximum: f32,
}

impl ResourceMeter {
    /// Full meter. Negative or non-finite maxima collapse to zero.
    pub fn full(maximum: f32) -> Self {
        let maximum = if maximum.is_finite() { maximum.max(0.0) } else { 0.0 };
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// `current / maximum`, or 0 for an empty meter.
    pub fn ratio(&self) -> f32 {
        if self.maximum > 0.0 {
            self.current / self.maximum
        } else {
            0.0
        }
    }

    /// Subtracts `amount`, flooring at zero.
    fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }
}

/// Player-only damage gate.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Invulnerability {
    timer: f32,
    duration: f32,
    flash_interval: f32,
}

/// Health, timers and facing shared by players and enemies.
///
/// # State machine
///
/// `Alive --take_damage to 0--> Dead`, terminal. A combatant built with
/// [`with_invulnerability`](Self::with_invulnerability) additionally toggles
/// `Vulnerable <-> Invulnerable`: every accepted hit (re)starts the window,
/// and the window closes when its timer decays to zero. Windows never stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatantState {
    health: ResourceMeter,
    alive: bool,
    facing: Vec2,
    attack_cooldown: f32,
    attack_timer: f32,
    invulnerability: Option<Invulnerability>,
}

impl CombatantState {
    /// Full health, zero timers, facing right.
    pub fn new(max_health: f32) -> Self {
        let health = ResourceMeter::full(max_health);
        Self {
            health,
            alive: health.current() > 0.0,
            facing: Vec2::RIGHT,
            attack_cooldown: 0.0,
            attack_timer: 0.0,
            invulnerability: None,
        }
    }

    /// Enables the post-hit invulnerability window.
    #[must_use]
    pub fn with_invulnerability(mut self, duration: f32, flash_interval: f32) -> Self {
        self.invulnerability = Some(Invulnerability {
            timer: 0.0,
            duration: duration.max(0.0),
            flash_interval,
        });
        self
    }

    pub fn health(&self) -> f32 {
        self.health.current()
    }

    pub fn max_health(&self) -> f32 {
        self.health.maximum()
    }

    pub fn health_meter(&self) -> ResourceMeter {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    /// Stores a new facing. Zero or non-finite directions are ignored so the
    /// last valid facing is retained.
    pub fn face(&mut self, direction: Vec2) {
        if let Some(unit) = direction.normalized() {
            self.facing = unit;
        }
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn attack_timer(&self) -> f32 {
        self.attack_timer
    }

    pub fn invulnerability_timer(&self) -> f32 {
        self.invulnerability.map_or(0.0, |window| window.timer)
    }

    /// Decays every timer by `dt`, flooring at zero. Negative or NaN deltas
    /// leave timers unchanged.
    pub fn advance_timers(&mut self, dt: f32) {
        let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
        self.attack_timer = (self.attack_timer - dt).max(0.0);
        if let Some(window) = self.invulnerability.as_mut() {
            window.timer = (window.timer - dt).max(0.0);
        }
    }

    /// Applies `amount` damage.
    ///
    /// Rejected (returns `false`, health untouched) when already dead or while
    /// invulnerable. An accepted hit restarts the invulnerability window, if
    /// this combatant has one, even when the hit is lethal.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive || self.is_invulnerable() {
            return false;
        }

        // NaN.max(0.0) is 0.0, so garbage damage is a harmless hit.
        self.health.drain(amount.max(0.0));
        if self.health.current() == 0.0 {
            self.alive = false;
        }

        if let Some(window) = self.invulnerability.as_mut() {
            window.timer = window.duration;
        }
        true
    }

    pub fn can_attack(&self) -> bool {
        self.alive && self.attack_cooldown == 0.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability_timer() > 0.0
    }

    /// Blink state for the invulnerability effect, toggling every
    /// `flash_interval` seconds. Always `false` outside the window.
    pub fn flash_visible(&self) -> bool {
        let Some(window) = self.invulnerability else {
            return false;
        };
        if window.timer <= 0.0 {
            return false;
        }
        if window.flash_interval <= 0.0 {
            return true;
        }
        ((window.timer / window.flash_interval).floor() as i64) % 2 == 0
    }

    /// Starts the attack cooldown and active timer.
    pub(crate) fn begin_attack(&mut self, cooldown: f32, duration: f32) {
        self.attack_cooldown = cooldown.max(0.0);
        self.attack_timer = duration.max(0.0);
    }
}
