//! Level layout loader.
//!
//! Levels are authored as tile grids. Walls become the static obstacle set and
//! spawn tiles are converted to world-space centers.

use std::path::Path;

use game_core::{Aabb, Level, ObstacleSet, Point};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Tile value that blocks movement. Anything else is floor.
pub const WALL_TILE: u8 = 1;

/// Level data structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct LevelDataRon {
    tile_size: i32,
    rows: Vec<Vec<u8>>,
    #[serde(default)]
    enemy_spawns: Vec<(u32, u32)>, // (column, row)
}

/// Row-major tile grid with square tiles.
///
/// The whole grid extent fits in `i32` world coordinates, so tile positions
/// never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: i32,
    rows: Vec<Vec<u8>>,
}

impl TileGrid {
    /// Rejects non-positive tile sizes and grids whose world extent does not
    /// fit in `i32`.
    pub fn new(tile_size: i32, rows: Vec<Vec<u8>>) -> LoadResult<Self> {
        if tile_size <= 0 {
            return Err(anyhow::anyhow!(
                "Invalid level: tile_size must be positive, got {}",
                tile_size
            ));
        }

        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let tiles = columns.max(rows.len());
        let fits = i32::try_from(tiles)
            .ok()
            .and_then(|tiles| tiles.checked_mul(tile_size))
            .is_some();
        if !fits {
            return Err(anyhow::anyhow!(
                "Invalid level: {} tiles of size {} exceed the coordinate range",
                tiles,
                tile_size
            ));
        }

        Ok(Self { tile_size, rows })
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Tile value at (`col`, `row`), or `None` outside the grid.
    pub fn tile(&self, col: u32, row: u32) -> Option<u8> {
        self.rows
            .get(row as usize)
            .and_then(|tiles| tiles.get(col as usize))
            .copied()
    }

    pub fn is_wall(&self, col: u32, row: u32) -> bool {
        self.tile(col, row) == Some(WALL_TILE)
    }

    /// World-space center of a tile, or `None` outside the grid.
    pub fn tile_center(&self, col: u32, row: u32) -> Option<Point> {
        self.tile(col, row)?;
        let half = self.tile_size / 2;
        Some(Point::new(
            col as i32 * self.tile_size + half,
            row as i32 * self.tile_size + half,
        ))
    }

    /// One obstacle box per wall tile, in row-major order.
    pub fn walls(&self) -> ObstacleSet {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| {
                tiles
                    .iter()
                    .enumerate()
                    .filter(|&(_, &tile)| tile == WALL_TILE)
                    .map(move |(col, _)| {
                        Aabb::new(
                            col as i32 * self.tile_size,
                            row as i32 * self.tile_size,
                            self.tile_size,
                            self.tile_size,
                        )
                    })
            })
            .collect()
    }

    /// Center of the first floor tile in row-major order.
    ///
    /// Falls back to `(tile_size, tile_size)` when the grid has no floor.
    pub fn player_spawn(&self) -> Point {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(row, tiles)| {
                tiles
                    .iter()
                    .position(|&tile| tile != WALL_TILE)
                    .and_then(|col| self.tile_center(col as u32, row as u32))
            })
            .unwrap_or(Point::new(self.tile_size, self.tile_size))
    }
}

/// Loader for level layouts from RON files.
///
/// File format:
/// ```ron
/// (
///     tile_size: 48,
///     rows: [
///         [1, 1, 1],
///         [1, 0, 1],
///         [1, 1, 1],
///     ],
///     enemy_spawns: [(1, 1)],
/// )
/// ```
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a level from RON text.
    ///
    /// Rejects non-positive tile sizes, grids too large for `i32` world
    /// coordinates, and enemy spawns outside the grid or on a wall tile.
    pub fn parse(content: &str) -> LoadResult<Level> {
        let data: LevelDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let grid = TileGrid::new(data.tile_size, data.rows)?;

        let mut enemy_spawns = Vec::with_capacity(data.enemy_spawns.len());
        for (col, row) in data.enemy_spawns {
            let Some(center) = grid.tile_center(col, row) else {
                return Err(anyhow::anyhow!(
                    "Invalid level: enemy spawn ({}, {}) is outside the grid",
                    col,
                    row
                ));
            };
            if grid.is_wall(col, row) {
                return Err(anyhow::anyhow!(
                    "Invalid level: enemy spawn ({}, {}) is on a wall tile",
                    col,
                    row
                ));
            }
            enemy_spawns.push(center);
        }

        Ok(Level::new(grid.walls(), grid.player_spawn(), enemy_spawns))
    }
}
