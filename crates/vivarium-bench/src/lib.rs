//! Benchmark profiles for the Vivarium simulation framework.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the 28x12 reference room with 7 critters
//! - [`stress_profile`]: the reference room tiled into a larger map
//! - [`tiled_plan`]: deterministic plan tiling

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vivarium_agent::LegendError;
use vivarium_agents::{reference_legend, REFERENCE_PLAN};
use vivarium_engine::WorldConfig;

/// Tiles per side in [`stress_profile`].
pub const STRESS_TILES: usize = 8;

/// Build the reference benchmark profile: 28x12 grid (336 cells).
pub fn reference_profile(seed: u64) -> Result<WorldConfig, LegendError> {
    Ok(WorldConfig::new(REFERENCE_PLAN, reference_legend()?).with_seed(seed))
}

/// Build a stress benchmark profile: the reference room repeated
/// [`STRESS_TILES`] times in each direction (224x96, 448 critters).
pub fn stress_profile(seed: u64) -> Result<WorldConfig, LegendError> {
    let plan = tiled_plan(&REFERENCE_PLAN, STRESS_TILES, STRESS_TILES);
    Ok(WorldConfig::new(plan, reference_legend()?).with_seed(seed))
}

/// Repeat `tile` `across` times horizontally and `down` times vertically.
pub fn tiled_plan(tile: &[&str], across: usize, down: usize) -> Vec<String> {
    let mut plan = Vec::with_capacity(tile.len() * down);
    for _ in 0..down {
        for row in tile {
            plan.push(row.repeat(across));
        }
    }
    plan
}
