//! Electronic life: the reference world of bouncers and wall followers.
//!
//! Builds the 28×12 reference plan, runs it for a number of turns, and
//! prints every frame with a one-line summary of what happened.
//!
//! Run with:
//!   cargo run --example electronic_life -- [TURNS] [SEED]
//!
//! Set `RUST_LOG=vivarium_engine=debug` to see discarded moves, or
//! `RUST_LOG=trace` to see every decision.

use vivarium_agents::{reference_legend, REFERENCE_PLAN};
use vivarium_engine::{World, WorldConfig};

// ─── Defaults ───────────────────────────────────────────────────

const TURNS: usize = 5;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let mut args = std::env::args().skip(1);
    let turns = match args.next() {
        Some(a) => a.parse()?,
        None => TURNS,
    };
    let seed = match args.next() {
        Some(a) => a.parse()?,
        None => SEED,
    };

    let config = WorldConfig::new(REFERENCE_PLAN, reference_legend()?).with_seed(seed);
    let mut world = World::new(config)?;

    println!(
        "turn {} ({} occupants, {} agents)",
        world.turn_id(),
        world.occupant_count(),
        world.agent_count()
    );
    print!("{world}");

    for _ in 0..turns {
        let report = world.turn();
        println!();
        println!(
            "turn {}: {} acted, {} moved, {} blocked",
            report.turn,
            report.acted(),
            report.moved(),
            report.blocked()
        );
        print!("{world}");
    }
    Ok(())
}
