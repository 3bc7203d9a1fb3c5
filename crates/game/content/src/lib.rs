//! Data-driven content definitions and loaders.
//!
//! This crate turns the bundled RON/TOML data files into the plain values
//! `game-core` is built from:
//! - Game configuration (data-driven via TOML)
//! - Playable class stats (data-driven via RON)
//! - Level layouts as tile grids with enemy spawn tiles (data-driven via RON)
//!
//! Content is consumed when a scene is built and never changes during play.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassLoader, ConfigLoader, Content, ContentFactory, LevelLoader, LoadResult, TileGrid,
    default_data_dir,
};
