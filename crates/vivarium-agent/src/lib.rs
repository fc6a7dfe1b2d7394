//! Behavior trait, sensory view, occupants, and legend for Vivarium.
//!
//! This crate sits between the grid and the scheduler:
//!
//! - [`Behavior`]: the decision capability an agent carries.
//! - [`View`]: what one agent may see during one decision.
//! - [`Occupant`]: what a grid cell holds (an obstacle or an agent).
//! - [`Legend`]: the symbol → constructor table used when a world is built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod error;
pub mod legend;
pub mod occupant;
pub mod view;

pub use behavior::Behavior;
pub use error::LegendError;
pub use legend::{AgentFactory, Legend, Spawn};
pub use occupant::{Occupant, OccupantKind};
pub use view::View;
