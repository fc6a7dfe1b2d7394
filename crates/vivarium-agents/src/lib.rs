//! Reference agent behaviours for Vivarium.
//!
//! Two behaviours exercise the sensing/acting protocol end to end:
//!
//! - [`Bouncer`]: keeps heading one way until blocked, then picks a random
//!   open direction.
//! - [`WallFollower`]: hugs the wall on its flank while advancing.
//!
//! [`reference`] holds the legend and map of the classic demo world that
//! uses both.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bouncer;
pub mod reference;
pub mod wall_follower;

pub use bouncer::Bouncer;
pub use reference::{reference_legend, BOUNCER, REFERENCE_PLAN, WALL, WALL_FOLLOWER};
pub use wall_follower::WallFollower;

use vivarium_core::{Chooser, Direction};

/// A compass direction drawn uniformly through `chooser`.
pub fn random_direction(chooser: &mut dyn Chooser) -> Direction {
    Direction::from_index(chooser.pick(Direction::ALL.len()))
}
