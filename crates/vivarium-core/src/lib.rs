//! Core types and traits for the Vivarium grid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! coordinates, compass directions, actions, identifiers, reserved
//! symbols, and the [`Chooser`] randomness seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod chooser;
pub mod coord;
pub mod direction;
pub mod error;
pub mod id;
pub mod symbol;

pub use action::Action;
pub use chooser::{choose, Chooser};
pub use coord::Coord;
pub use direction::Direction;
pub use error::ParseDirectionError;
pub use id::{OccupantId, TurnId};
pub use symbol::{EDGE_SYMBOL, EMPTY_SYMBOL};
