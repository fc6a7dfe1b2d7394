//! Randomised obstacle avoider.

use crate::random_direction;
use tracing::trace;
use vivarium_agent::{Behavior, View};
use vivarium_core::{Action, Chooser, Direction, EMPTY_SYMBOL};

/// Heading used when every neighbour is blocked.
const FALLBACK: Direction = Direction::S;

/// Moves in a straight line until the cell ahead is not empty, then turns
/// to a uniformly random empty neighbour.
///
/// When boxed in on all sides it faces south and keeps asking to move
/// there; the world refuses and it stays put.
#[derive(Clone, Debug)]
pub struct Bouncer {
    facing: Direction,
}

impl Bouncer {
    /// A bouncer with a random starting heading.
    pub fn new(chooser: &mut dyn Chooser) -> Self {
        Self {
            facing: random_direction(chooser),
        }
    }

    /// A bouncer with a known starting heading.
    pub fn facing(facing: Direction) -> Self {
        Self { facing }
    }

    /// Current heading.
    pub fn heading(&self) -> Direction {
        self.facing
    }
}

impl Behavior for Bouncer {
    fn name(&self) -> &str {
        "bouncer"
    }

    fn act(&mut self, view: &mut View<'_>) -> Action {
        if !view.is_empty(self.facing) {
            let blocked = self.facing;
            self.facing = view.find(EMPTY_SYMBOL).unwrap_or(FALLBACK);
            trace!(at = %view.position(), %blocked, facing = %self.facing, "bouncer turned");
        }
        Action::Move(self.facing)
    }
}
