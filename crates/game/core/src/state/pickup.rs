use crate::geometry::{Aabb, Point};

/// What a pickup grants when collected.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LootKind {
    Coin,
    Item,
}

impl LootKind {
    /// Side length of the pickup's square box.
    pub const fn size(self) -> i32 {
        match self {
            LootKind::Coin => 18,
            LootKind::Item => 22,
        }
    }
}

/// Static drop lying on the floor until the player touches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootPickup {
    kind: LootKind,
    body: Aabb,
}

impl LootPickup {
    pub fn new(position: Point, kind: LootKind) -> Self {
        Self {
            kind,
            body: Aabb::square(position, kind.size()),
        }
    }

    pub fn kind(&self) -> LootKind {
        self.kind
    }

    pub fn body(&self) -> Aabb {
        self.body
    }

    pub fn position(&self) -> Point {
        self.body.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_and_display_in_snake_case() {
        assert_eq!(LootKind::Coin.to_string(), "coin");
        assert_eq!("ITEM".parse::<LootKind>().unwrap(), LootKind::Item);
    }

    #[test]
    fn box_is_centered_on_drop_point() {
        let pickup = LootPickup::new(Point::new(200, 120), LootKind::Item);
        assert_eq!(pickup.body(), Aabb::new(189, 109, 22, 22));
        assert_eq!(pickup.position(), Point::new(200, 120));
    }
}
