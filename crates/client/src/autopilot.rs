//! Scripted stand-in for a human player.
//!
//! Heads for the nearest enemy and swings when it is within reach; once the
//! arena is clear it walks over the remaining pickups.

use game_core::{Combatant, Point, Scene};
use runtime::FrameInput;

/// Distance below which an axis counts as lined up.
const DEADZONE: i32 = 4;

pub fn next_input(scene: &Scene) -> FrameInput {
    let player = scene.player();
    let here = player.center();

    let enemy = nearest(here, scene.enemies().iter().map(|enemy| enemy.center()));
    let target = enemy.or_else(|| nearest(here, scene.pickups().iter().map(|p| p.position())));
    let Some(target) = target else {
        return FrameInput::default();
    };

    let dx = target.x - here.x;
    let dy = target.y - here.y;
    let reach = player.attack_range() + player.body().width() / 2;
    FrameInput {
        up: dy < -DEADZONE,
        down: dy > DEADZONE,
        left: dx < -DEADZONE,
        right: dx > DEADZONE,
        attack_pressed: enemy.is_some() && dx.abs().max(dy.abs()) <= reach,
        class_slot: None,
    }
}

fn nearest(from: Point, points: impl Iterator<Item = Point>) -> Option<Point> {
    points.min_by_key(|p| {
        let dx = i64::from(p.x - from.x);
        let dy = i64::from(p.y - from.y);
        dx * dx + dy * dy
    })
}
