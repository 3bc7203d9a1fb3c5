//! Frame driver around a [`Scene`].

use std::path::Path;

use game_content::{Content, ContentFactory};
use game_core::{Damageable, Scene, TickReport};
use rand::rngs::StdRng;

use crate::error::{Result, RuntimeError};
use crate::input::FrameInput;
use crate::rng::RandRng;
use crate::view::{EntityView, HudView};

/// One play session: a scene plus the random source its loot rolls use.
///
/// Sessions built from the same content and seed replay identically for the
/// same sequence of inputs and frame times.
pub struct Session {
    scene: Scene,
    rng: RandRng<StdRng>,
    seed: u64,
}

impl Session {
    /// Builds a session from already loaded content.
    pub fn new(content: Content, seed: u64) -> Result<Self> {
        let Content {
            config,
            classes,
            level,
        } = content;
        let scene = Scene::new(config, classes, level)?;

        tracing::info!(
            seed,
            class = scene.player().class_name(),
            enemies = scene.enemies().len(),
            walls = scene.obstacles().len(),
            "session started"
        );

        Ok(Self {
            scene,
            rng: RandRng::seeded(seed),
            seed,
        })
    }

    /// Loads content from `data_dir` and builds a session from it.
    pub fn load(data_dir: &Path, seed: u64) -> Result<Self> {
        let content = ContentFactory::load_dir(data_dir).map_err(RuntimeError::Content)?;
        Self::new(content, seed)
    }

    /// Applies `input` and advances the scene by `dt` seconds.
    ///
    /// A class hotkey is handled before the tick, so the new class already
    /// moves and attacks this frame.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownClassSlot`] when `input.class_slot` is past the
    /// end of the class table. The frame is not simulated in that case.
    pub fn step(&mut self, input: &FrameInput, dt: f32) -> Result<TickReport> {
        if let Some(slot) = input.class_slot {
            self.select_class_slot(slot)?;
        }

        let report = self.scene.tick(&input.to_tick_input(), dt, &mut self.rng);
        self.log_report(&report);
        Ok(report)
    }

    /// Switches to the class at `slot` in table order, keeping the player's
    /// position. Returns `false` when that class is already active.
    pub fn select_class_slot(&mut self, slot: usize) -> Result<bool> {
        let classes = self.scene.classes();
        let Some(name) = classes.name_at(slot).map(str::to_string) else {
            return Err(RuntimeError::UnknownClassSlot {
                slot,
                available: classes.len(),
            });
        };

        let switched = self.scene.switch_class(&name)?;
        if switched {
            tracing::info!(class = %name, slot, "class switched");
        }
        Ok(switched)
    }

    pub fn hud(&self) -> HudView {
        HudView::from_scene(&self.scene)
    }

    pub fn entities(&self) -> Vec<EntityView> {
        EntityView::collect(&self.scene)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_over(&self) -> bool {
        !self.scene.player().is_alive()
    }

    fn log_report(&self, report: &TickReport) {
        if let Some(enemy) = report.contact_hit {
            tracing::debug!(
                enemy = %enemy,
                health = self.scene.player().health(),
                "player took contact damage"
            );
        }
        for (enemy, pickup) in &report.drops {
            tracing::debug!(
                enemy = %enemy,
                kind = %pickup.kind(),
                x = pickup.position().x,
                y = pickup.position().y,
                "enemy defeated, loot dropped"
            );
        }
        if report.coins_collected > 0 || report.items_collected > 0 {
            let counters = self.scene.counters();
            tracing::debug!(
                coins = report.coins_collected,
                items = report.items_collected,
                total_coins = counters.coins,
                total_items = counters.items,
                "loot collected"
            );
        }
        if report.player_died {
            tracing::info!(tick = report.tick, "player died");
        }

        tracing::trace!(
            tick = report.tick,
            attacked = report.attack.is_some(),
            enemies = self.scene.enemies().len(),
            pickups = self.scene.pickups().len(),
            "tick"
        );
    }
}
