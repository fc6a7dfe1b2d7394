//! Vivarium: a turn-based grid world of obstacles and critters.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Vivarium sub-crates. For most users, adding `vivarium` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vivarium::prelude::*;
//!
//! // A critter that walks east until something stops it.
//! struct Drifter;
//! impl Behavior for Drifter {
//!     fn name(&self) -> &str { "drifter" }
//!     fn act(&mut self, view: &mut View<'_>) -> Action {
//!         if view.is_empty(Direction::E) {
//!             Action::Move(Direction::E)
//!         } else {
//!             Action::Wait
//!         }
//!     }
//! }
//!
//! let legend = Legend::new()
//!     .obstacle('#').unwrap()
//!     .agent('d', |_| Drifter).unwrap()
//!     .agent('o', Bouncer::new).unwrap();
//! let plan = [
//!     "#######",
//!     "#d    #",
//!     "#  o  #",
//!     "#######",
//! ];
//! let mut world = World::new(WorldConfig::new(plan, legend).with_seed(42)).unwrap();
//! assert_eq!(world.agent_count(), 2);
//!
//! let report = world.turn();
//! assert_eq!(report.acted(), 2);
//! assert_eq!(world.turn_id(), TurnId(1));
//! assert_eq!(world.occupant_count(), 20);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vivarium-core` | Coordinates, compass, actions, IDs, reserved symbols |
//! | [`space`] | `vivarium-space` | The bounded grid |
//! | [`agent`] | `vivarium-agent` | Behaviour trait, view, occupants, legend |
//! | [`agents`] | `vivarium-agents` | Reference behaviours and the reference world |
//! | [`engine`] | `vivarium-engine` | World construction and the turn scheduler |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`vivarium-core`).
///
/// Contains [`types::Coord`], the [`types::Direction`] compass, the
/// [`types::Action`] a behaviour returns, and the [`types::Chooser`]
/// random source trait.
pub use vivarium_core as types;

/// The bounded grid (`vivarium-space`).
pub use vivarium_space as space;

/// Behaviour trait and everything a behaviour touches (`vivarium-agent`).
///
/// [`agent::Behavior`] is the main extension point for user-defined
/// critters.
pub use vivarium_agent as agent;

/// Reference behaviours (`vivarium-agents`).
///
/// [`agents::Bouncer`], [`agents::WallFollower`], and the
/// [`agents::REFERENCE_PLAN`] they were designed for.
pub use vivarium_agents as agents;

/// World construction and turn scheduling (`vivarium-engine`).
pub use vivarium_engine as engine;

/// Common imports for typical Vivarium usage.
///
/// ```rust
/// use vivarium::prelude::*;
/// ```
///
/// This imports the most frequently used types: the world and its config,
/// the behaviour trait, the compass, and the reference critters.
pub mod prelude {
    // Core types
    pub use vivarium_core::{
        Action, Chooser, Coord, Direction, OccupantId, TurnId, EDGE_SYMBOL, EMPTY_SYMBOL,
    };

    // Agent surface
    pub use vivarium_agent::{Behavior, Legend, LegendError, Occupant, View};

    // Reference behaviours
    pub use vivarium_agents::{reference_legend, Bouncer, WallFollower, REFERENCE_PLAN};

    // Engine
    pub use vivarium_engine::{ConfigError, Outcome, TurnReport, World, WorldConfig};
}
