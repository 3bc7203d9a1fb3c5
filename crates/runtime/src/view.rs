//! Read-only snapshots handed to renderers and HUDs.

use game_core::{Aabb, Combatant, Damageable, LootKind, Scene};
use serde::Serialize;

/// Heads-up display values for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudView {
    pub class: String,
    pub health: f32,
    pub max_health: f32,
    pub mana: f32,
    pub max_mana: f32,
    pub coins: u32,
    pub items: u32,
    pub invulnerable: bool,
    /// Whether the player sprite is drawn this frame. Blinks while
    /// invulnerable, always true otherwise.
    pub flash_visible: bool,
}

impl HudView {
    pub fn from_scene(scene: &Scene) -> Self {
        let player = scene.player();
        let mana = player.mana();
        let counters = scene.counters();
        Self {
            class: player.class_name().to_string(),
            health: player.health(),
            max_health: player.max_health(),
            mana: mana.current(),
            max_mana: mana.maximum(),
            coins: counters.coins,
            items: counters.items,
            invulnerable: player.is_invulnerable(),
            flash_visible: !player.is_invulnerable() || player.flash_visible(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Enemy,
    Coin,
    Item,
    HitShape,
}

impl From<LootKind> for EntityKind {
    fn from(kind: LootKind) -> Self {
        match kind {
            LootKind::Coin => EntityKind::Coin,
            LootKind::Item => EntityKind::Item,
        }
    }
}

/// One drawable box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    /// Enemy id; `None` for everything else.
    pub id: Option<u32>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub alive: bool,
    pub health: Option<f32>,
}

impl EntityView {
    fn from_box(kind: EntityKind, body: Aabb) -> Self {
        Self {
            kind,
            id: None,
            x: body.x,
            y: body.y,
            width: body.width(),
            height: body.height(),
            alive: true,
            health: None,
        }
    }

    /// Player, enemies, pickups and the active hit shape, in draw order:
    /// pickups first, hit shape last.
    pub fn collect(scene: &Scene) -> Vec<Self> {
        let player = scene.player();
        let mut views = Vec::with_capacity(scene.pickups().len() + scene.enemies().len() + 2);

        for pickup in scene.pickups() {
            views.push(Self::from_box(pickup.kind().into(), pickup.body()));
        }

        views.push(Self {
            alive: player.is_alive(),
            health: Some(player.health()),
            ..Self::from_box(EntityKind::Player, player.body())
        });

        for enemy in scene.enemies() {
            views.push(Self {
                id: Some(enemy.id().0),
                alive: enemy.is_alive(),
                health: Some(enemy.health()),
                ..Self::from_box(EntityKind::Enemy, enemy.body())
            });
        }

        if let Some(shape) = player.active_hit_shape() {
            views.push(Self::from_box(EntityKind::HitShape, shape));
        }

        views
    }
}
