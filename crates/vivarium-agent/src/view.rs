//! The per-decision sensory handle.
//!
//! A [`View`] is built fresh for every decision and dropped straight after.
//! It exposes the eight cells around one position and nothing else: an
//! agent cannot read the grid at large, only ask what symbol lies one step
//! away in a given direction.

use crate::occupant::Occupant;
use smallvec::SmallVec;
use vivarium_core::{choose, Chooser, Coord, Direction, EDGE_SYMBOL, EMPTY_SYMBOL};
use vivarium_space::Grid;

/// Read-only window onto the 8-neighbourhood of one position.
pub struct View<'a> {
    grid: &'a Grid<Occupant>,
    position: Coord,
    chooser: &'a mut dyn Chooser,
}

impl<'a> View<'a> {
    /// Bind a view to `position` on `grid`, drawing randomness from
    /// `chooser`.
    pub fn new(grid: &'a Grid<Occupant>, position: Coord, chooser: &'a mut dyn Chooser) -> Self {
        Self {
            grid,
            position,
            chooser,
        }
    }

    /// Where the viewing agent stands.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Symbol one step away in `dir`.
    ///
    /// [`EDGE_SYMBOL`] past the grid edge, [`EMPTY_SYMBOL`] for an empty
    /// cell, otherwise the occupant's symbol.
    pub fn look(&self, dir: Direction) -> char {
        let target = self.position + dir;
        if !self.grid.is_inside(target) {
            return EDGE_SYMBOL;
        }
        self.grid.get(target).map_or(EMPTY_SYMBOL, Occupant::symbol)
    }

    /// `true` if the cell one step away in `dir` is empty.
    pub fn is_empty(&self, dir: Direction) -> bool {
        self.look(dir) == EMPTY_SYMBOL
    }

    /// Every direction in which [`look`](Self::look) reports `symbol`, in
    /// compass order.
    pub fn find_all(&self, symbol: char) -> SmallVec<[Direction; 8]> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.look(d) == symbol)
            .collect()
    }

    /// One direction, chosen uniformly, in which [`look`](Self::look)
    /// reports `symbol`. `None` if there is none.
    pub fn find(&mut self, symbol: char) -> Option<Direction> {
        let found = self.find_all(symbol);
        choose(&mut *self.chooser, &found).copied()
    }

    /// The random source for this decision.
    pub fn chooser(&mut self) -> &mut dyn Chooser {
        &mut *self.chooser
    }
}
