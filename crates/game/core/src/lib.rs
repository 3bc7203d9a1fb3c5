//! Deterministic top-down action simulation.
//!
//! `game-core` defines the canonical rules: axis-separated collision against
//! static walls, melee combat with knockback and invulnerability windows,
//! straight-line enemy pursuit and a small loot economy. Everything is pure
//! and synchronous. All per-frame mutation flows through
//! [`engine::Scene::tick`], and supporting crates depend on the types
//! re-exported here.
pub mod ai;
pub mod collision;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod loot;
pub mod state;
pub mod traits;

pub use collision::{ObstacleSet, resolve_move, separate_overlap};
pub use combat::{AttackOutcome, apply_contact_damage, attempt_attack, hit_shape, knockback};
pub use config::{EnemyTemplate, GameConfig};
pub use engine::{Level, Scene, TickInput, TickReport};
pub use env::{ClassStats, ClassTable, FixedRng, PcgRng, RngOracle};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use geometry::{Aabb, Point, Vec2};
pub use loot::{LootCounters, PickupTally, check_pickups, on_enemy_defeated};
pub use state::{CombatantState, Enemy, EnemyId, LootKind, LootPickup, Player, ResourceMeter};
pub use traits::{Combatant, Damageable, Timered};
