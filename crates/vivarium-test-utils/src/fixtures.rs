//! Reusable behaviours and map fixtures.
//!
//! - [`FixedHeading`]: always moves the same way, counting its decisions.
//! - [`Scripted`]: replays a list of actions, then waits.
//! - [`obstacle_grid`]: a grid of obstacles drawn from text rows.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vivarium_agent::{Behavior, Occupant, View};
use vivarium_core::{Action, Coord, Direction, OccupantId, EMPTY_SYMBOL};
use vivarium_space::Grid;

/// Conventional obstacle symbol used by fixtures.
pub const WALL: char = '#';
/// Conventional symbol for [`FixedHeading`] agents.
pub const HEADING: char = 'h';
/// Conventional symbol for [`Scripted`] agents.
pub const SCRIPTED: char = 's';

/// Shared count of how many times behaviours were consulted.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Always requests a move in one direction.
pub struct FixedHeading {
    pub heading: Direction,
    pub calls: CallCounter,
}

impl FixedHeading {
    pub fn new(heading: Direction) -> Self {
        Self {
            heading,
            calls: CallCounter::new(),
        }
    }

    pub fn counted(heading: Direction, calls: CallCounter) -> Self {
        Self { heading, calls }
    }
}

impl Behavior for FixedHeading {
    fn name(&self) -> &str {
        "fixed_heading"
    }

    fn act(&mut self, _view: &mut View<'_>) -> Action {
        self.calls.bump();
        Action::Move(self.heading)
    }
}

/// Replays a fixed list of actions, one per decision, then waits.
pub struct Scripted {
    actions: VecDeque<Action>,
    pub calls: CallCounter,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            calls: CallCounter::new(),
        }
    }
}

impl Behavior for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn act(&mut self, _view: &mut View<'_>) -> Action {
        self.calls.bump();
        self.actions.pop_front().unwrap_or(Action::Wait)
    }
}

/// Build a grid from equal-length rows where every non-blank character
/// becomes an obstacle carrying that symbol.
///
/// Ids are assigned in row-major order starting at 0.
pub fn obstacle_grid(rows: &[&str]) -> Grid<Occupant> {
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut grid = Grid::new(width, rows.len() as u32).expect("fixture grid must be non-empty");
    let mut next = 0u32;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == EMPTY_SYMBOL {
                continue;
            }
            let at = Coord::new(x as i32, y as i32);
            grid.set(at, Some(Occupant::obstacle(OccupantId(next), ch)))
                .expect("fixture rows must be equal length");
            next += 1;
        }
    }
    grid
}
