//! Turn scheduler and world construction for Vivarium simulations.
//!
//! [`World`] owns the grid and advances it one [`turn()`](World::turn) at a
//! time: occupants are visited in row-major order, each agent decides once
//! through a fresh [`View`](vivarium_agent::View), and the world applies or
//! discards the requested move. Every turn yields a [`TurnReport`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod rng;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use report::{BlockReason, Outcome, TurnReport};
pub use rng::SeededChooser;
pub use world::World;
