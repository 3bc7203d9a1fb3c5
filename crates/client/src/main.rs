//! Arena headless client binary.
//!
//! Loads content, runs a scripted session for a fixed number of frames and
//! prints the final HUD as JSON on stdout.
//!
//! # Environment
//!
//! - `ARENA_DATA_DIR`: content directory (defaults to the bundled data)
//! - `ARENA_TICKS`: frames to simulate (default 600)
//! - `ARENA_SEED`: loot RNG seed (default 0)
//! - `ARENA_LOG_DIR`: also write logs to `arena.log` in this directory
//!
//! # Examples
//!
//! ```bash
//! RUST_LOG=runtime=debug ARENA_TICKS=1200 cargo run -p arena-client
//! ```

mod autopilot;
mod config;
mod logging;

use anyhow::Result;
use runtime::Session;

use crate::config::{ClientConfig, FRAME_DT};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting arena client");
    tracing::info!("Data dir: {}", config.data_dir.display());
    tracing::debug!("Ticks: {}, seed: {}", config.ticks, config.seed);

    let mut session = Session::load(&config.data_dir, config.seed)?;

    let mut frames = 0;
    while frames < config.ticks && !session.is_over() {
        let input = autopilot::next_input(session.scene());
        session.step(&input, FRAME_DT)?;
        frames += 1;
    }

    let hud = session.hud();
    tracing::info!(
        frames,
        coins = hud.coins,
        items = hud.items,
        health = hud.health,
        "Run finished"
    );
    println!("{}", serde_json::to_string_pretty(&hud)?);

    Ok(())
}
