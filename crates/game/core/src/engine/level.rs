use crate::collision::ObstacleSet;
use crate::geometry::Point;

/// Static layout a scene is built from.
///
/// Produced by the content layer from level data; the core does not know how
/// tiles map to walls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Level {
    pub obstacles: ObstacleSet,
    pub player_spawn: Point,
    pub enemy_spawns: Vec<Point>,
}

impl Level {
    pub fn new(obstacles: ObstacleSet, player_spawn: Point, enemy_spawns: Vec<Point>) -> Self {
        Self {
            obstacles,
            player_spawn,
            enemy_spawns,
        }
    }

    /// Open floor with no walls and no enemies.
    pub fn open(player_spawn: Point) -> Self {
        Self::new(ObstacleSet::empty(), player_spawn, Vec::new())
    }
}
