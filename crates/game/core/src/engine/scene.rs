use crate::ai;
use crate::collision::{ObstacleSet, separate_overlap};
use crate::combat::{apply_contact_damage, attempt_attack};
use crate::config::GameConfig;
use crate::env::{ClassTable, RngOracle};
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::loot::{LootCounters, check_pickups, on_enemy_defeated};
use crate::state::{Enemy, EnemyId, LootPickup, Player};
use crate::traits::{Combatant, Damageable, Timered};

use super::{Level, TickInput, TickReport};

/// Simulation context: owns every entity and the static level.
///
/// All mutation happens inside [`tick`](Self::tick) or the explicit setup
/// methods; entities never reference one another.
#[derive(Clone, Debug)]
pub struct Scene {
    config: GameConfig,
    classes: ClassTable,
    obstacles: ObstacleSet,
    player: Player,
    enemies: Vec<Enemy>,
    pickups: Vec<LootPickup>,
    counters: LootCounters,
    next_enemy_id: u32,
    ticks: u64,
}

impl Scene {
    /// Builds a scene with the configured default class, falling back to the
    /// first class in the table.
    pub fn new(config: GameConfig, classes: ClassTable, level: Level) -> Result<Self, ConfigError> {
        let class = classes.default_class(&config.default_class).to_string();
        Self::with_class(config, classes, level, &class)
    }

    /// Builds a scene whose player is of `class_name`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownClass`] when the table has no such class.
    pub fn with_class(
        config: GameConfig,
        classes: ClassTable,
        level: Level,
        class_name: &str,
    ) -> Result<Self, ConfigError> {
        let player = Player::from_class(level.player_spawn, &classes, class_name, &config)?;
        let mut scene = Self {
            config,
            classes,
            obstacles: level.obstacles,
            player,
            enemies: Vec::new(),
            pickups: Vec::new(),
            counters: LootCounters::default(),
            next_enemy_id: 1,
            ticks: 0,
        };
        for spawn in level.enemy_spawns {
            scene.spawn_enemy(spawn);
        }
        Ok(scene)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Live enemies, in spawn order.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    pub fn pickups(&self) -> &[LootPickup] {
        &self.pickups
    }

    pub fn counters(&self) -> LootCounters {
        self.counters
    }

    /// Number of ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Adds an enemy centered on `center` using the configured template.
    pub fn spawn_enemy(&mut self, center: Point) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(Enemy::spawn(id, center, &self.config.enemy));
        id
    }

    /// Places a pickup directly, bypassing the drop roll.
    pub fn place_pickup(&mut self, pickup: LootPickup) {
        self.pickups.push(pickup);
    }

    /// Replaces the player with a fresh one of `class_name` at the same center.
    ///
    /// Health, mana and timers restart from the new class. Returns `Ok(false)`
    /// when `class_name` is already the active class.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownClass`] when the table has no such class; the
    /// current player is kept.
    pub fn switch_class(&mut self, class_name: &str) -> Result<bool, ConfigError> {
        if self.player.class_name() == class_name {
            return Ok(false);
        }
        let player =
            Player::from_class(self.player.center(), &self.classes, class_name, &self.config)?;
        self.player = player;
        Ok(true)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Order: timers, player movement, attack, defeated-enemy removal and
    /// drops, pursuit, crowd separation, contact damage, pickups. Pursuit uses
    /// the player's position after this tick's movement.
    pub fn tick(
        &mut self,
        input: &TickInput,
        dt: f32,
        rng: &mut impl RngOracle,
    ) -> TickReport {
        let mut report = TickReport {
            tick: self.ticks,
            ..TickReport::default()
        };
        let player_was_alive = self.player.is_alive();

        self.player.advance_timers(dt);
        for enemy in &mut self.enemies {
            enemy.advance_timers(dt);
        }

        self.player.walk(input.movement, dt, &self.obstacles);

        if input.attack {
            match attempt_attack(
                &mut self.player,
                &mut self.enemies,
                &self.obstacles,
                &self.config,
            ) {
                Some(outcome) => {
                    self.collect_defeated(&outcome.defeated, rng, &mut report);
                    report.attack = Some(outcome);
                }
                None => report.attack_rejected = true,
            }
        }

        let target = self.player.center();
        for enemy in &mut self.enemies {
            ai::step(enemy, target, dt, &self.obstacles);
        }

        if self.config.separate_enemies {
            self.separate_enemies();
        }

        report.contact_hit = apply_contact_damage(&mut self.player, &self.enemies);

        let tally = check_pickups(self.player.body(), std::mem::take(&mut self.pickups));
        report.coins_collected = tally.coins;
        report.items_collected = tally.items;
        self.counters.record(&tally);
        self.pickups = tally.remaining;

        report.player_died = player_was_alive && !self.player.is_alive();
        self.ticks += 1;
        report
    }

    /// Rolls drops for `defeated` and removes every dead enemy.
    fn collect_defeated(
        &mut self,
        defeated: &[EnemyId],
        rng: &mut impl RngOracle,
        report: &mut TickReport,
    ) {
        for &id in defeated {
            if let Some(enemy) = self.enemies.iter().find(|enemy| enemy.id() == id) {
                let drop = on_enemy_defeated(enemy, rng, &self.config);
                self.pickups.push(drop);
                report.drops.push((id, drop));
            }
        }
        self.enemies.retain(|enemy| enemy.is_alive());
    }

    /// Pushes every overlapping pair of enemies apart, evenly.
    fn separate_enemies(&mut self) {
        let count = self.enemies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let a = self.enemies[i].body();
                let b = self.enemies[j].body();
                if !a.intersects(&b) {
                    continue;
                }
                let (a, b) = separate_overlap(a, b, &self.obstacles, 0.5);
                self.enemies[i].set_body(a);
                self.enemies[j].set_body(b);
            }
        }
    }
}
