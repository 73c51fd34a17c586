//! Interactive platformer demo -- run and jump across three platforms.
//!
//! Run with:
//!   cargo run --example platformer_visual --features renderer -p platbox-engine
//!
//! Controls:
//!   Left/Right arrows or A/D -- run
//!   Up arrow or W -- jump (only while grounded)
//!   C -- toggle collider outlines
//!   Escape -- quit

use platbox_engine::prelude::*;
use platbox_engine::render::run_windowed;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = SceneConfig::default();
    let sim = Simulation::new(config, TickConfig::default());

    tracing::info!(
        bodies = sim.physics().body_count(),
        "platformer initialized"
    );

    run_windowed(sim, "Platbox -- A/D run, W jump, C outlines, ESC quit", 600, 600)
}
