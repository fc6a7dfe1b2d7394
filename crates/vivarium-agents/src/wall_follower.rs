//! Wall-hugging navigator.
//!
//! Each decision first probes the flank three compass steps
//! counter-clockwise of the heading. A wall there means one has just
//! appeared alongside, so the heading swings two steps counter-clockwise
//! towards it. Then the heading turns clockwise one step at a time until
//! the cell ahead is empty. A full revolution without finding an opening
//! ends the search on the starting heading.

use crate::random_direction;
use tracing::trace;
use vivarium_agent::{Behavior, View};
use vivarium_core::{Action, Chooser, Direction};

/// Compass steps from the heading to the probed flank cell.
const FLANK: i32 = -3;
/// Turn applied when the flank probe hits something.
const SWING: i32 = -2;

/// Follows walls, keeping them on its counter-clockwise side.
#[derive(Clone, Debug)]
pub struct WallFollower {
    facing: Direction,
}

impl WallFollower {
    /// A wall follower with a random starting heading.
    pub fn new(chooser: &mut dyn Chooser) -> Self {
        Self {
            facing: random_direction(chooser),
        }
    }

    /// A wall follower with a known starting heading.
    pub fn facing(facing: Direction) -> Self {
        Self { facing }
    }

    /// Current heading.
    pub fn heading(&self) -> Direction {
        self.facing
    }
}

impl Behavior for WallFollower {
    fn name(&self) -> &str {
        "wall_follower"
    }

    fn act(&mut self, view: &mut View<'_>) -> Action {
        let mut start = self.facing;
        if !view.is_empty(self.facing.rotate(FLANK)) {
            self.facing = self.facing.rotate(SWING);
            start = self.facing;
        }
        while !view.is_empty(self.facing) {
            self.facing = self.facing.rotate(1);
            if self.facing == start {
                trace!(at = %view.position(), facing = %self.facing, "wall follower enclosed");
                break;
            }
        }
        Action::Move(self.facing)
    }
}
