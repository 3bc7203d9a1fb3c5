use crate::geometry::Aabb;
use crate::state::{LootKind, LootPickup};

/// Outcome of one pickup pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickupTally {
    pub remaining: Vec<LootPickup>,
    pub coins: u32,
    pub items: u32,
}

impl PickupTally {
    pub fn collected(&self) -> u32 {
        self.coins + self.items
    }
}

/// Removes every pickup overlapping `player_box` and counts them by kind.
///
/// Plain AABB overlap; a single shared pixel is enough. Uncollected pickups
/// keep their order.
pub fn check_pickups(player_box: Aabb, pickups: Vec<LootPickup>) -> PickupTally {
    let mut tally = PickupTally::default();
    for pickup in pickups {
        if !player_box.intersects(&pickup.body()) {
            tally.remaining.push(pickup);
            continue;
        }
        match pickup.kind() {
            LootKind::Coin => tally.coins += 1,
            LootKind::Item => tally.items += 1,
        }
    }
    tally
}

/// Running coin and item totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootCounters {
    pub coins: u32,
    pub items: u32,
}

impl LootCounters {
    pub fn record(&mut self, tally: &PickupTally) {
        self.coins += tally.coins;
        self.items += tally.items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn collects_overlapping_only() {
        let player = Aabb::square(Point::new(0, 0), 32);
        let pickups = vec![
            LootPickup::new(Point::new(10, 0), LootKind::Coin),
            LootPickup::new(Point::new(300, 0), LootKind::Item),
            LootPickup::new(Point::new(0, -20), LootKind::Item),
            LootPickup::new(Point::new(-5, 5), LootKind::Coin),
        ];
        let tally = check_pickups(player, pickups);
        assert_eq!((tally.coins, tally.items), (2, 1));
        assert_eq!(tally.remaining.len(), 1);
        assert_eq!(tally.remaining[0].position(), Point::new(300, 0));

        let mut counters = LootCounters::default();
        counters.record(&tally);
        counters.record(&tally);
        assert_eq!(counters, LootCounters { coins: 4, items: 2 });
    }

    #[test]
    fn adjacent_pickup_is_not_collected() {
        let player = Aabb::new(0, 0, 32, 32);
        // Coin box spans x 32..50: shares only the edge.
        let coin = LootPickup::new(Point::new(41, 16), LootKind::Coin);
        let tally = check_pickups(player, vec![coin]);
        assert_eq!(tally.collected(), 0);
        assert_eq!(tally.remaining, vec![coin]);
    }
}
