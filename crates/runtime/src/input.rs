//! Frame input as read from a keyboard or script.

use game_core::{TickInput, Vec2};

/// Raw per-frame controls.
///
/// `class_slot` selects the n-th class in table order, the way the number
/// keys do in the interactive client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack_pressed: bool,
    pub class_slot: Option<usize>,
}

impl FrameInput {
    /// Unnormalized movement direction. Opposite keys cancel out.
    pub fn direction(&self) -> Vec2 {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn to_tick_input(&self) -> TickInput {
        let input = TickInput::moving(self.direction());
        if self.attack_pressed {
            input.with_attack()
        } else {
            input
        }
    }
}
