//! The symbol → constructor table used to populate a world from a map.
//!
//! A [`Legend`] is consulted once per map cell at world construction and
//! never again. Entries keep their insertion order, which is also the order
//! [`Legend::symbols`] reports.
//!
//! # Examples
//!
//! ```
//! use vivarium_agent::{Behavior, Legend, View};
//! use vivarium_core::Action;
//!
//! struct Sitter;
//! impl Behavior for Sitter {
//!     fn name(&self) -> &str { "sitter" }
//!     fn act(&mut self, _view: &mut View<'_>) -> Action { Action::Wait }
//! }
//!
//! let legend = Legend::new()
//!     .obstacle('#').unwrap()
//!     .agent('s', |_chooser| Sitter).unwrap();
//! assert!(legend.contains('#'));
//! assert!(legend.contains('s'));
//! assert!(!legend.contains('x'));
//! ```

use crate::behavior::Behavior;
use crate::error::LegendError;
use crate::occupant::Occupant;
use indexmap::IndexMap;
use std::fmt;
use vivarium_core::symbol::is_reserved;
use vivarium_core::{Chooser, OccupantId};

/// Builds a fresh behaviour for each map cell carrying its symbol.
///
/// Receives the world's chooser so initial state (such as a starting
/// heading) can be randomised reproducibly.
pub type AgentFactory = Box<dyn Fn(&mut dyn Chooser) -> Box<dyn Behavior> + Send + Sync>;

/// What a legend symbol turns into.
pub enum Spawn {
    /// A stationary obstacle.
    Obstacle,
    /// An agent built by the factory.
    Agent(AgentFactory),
}

impl fmt::Debug for Spawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obstacle => f.write_str("Obstacle"),
            Self::Agent(_) => f.write_str("Agent(..)"),
        }
    }
}

/// Mapping from map symbols to occupant constructors.
#[derive(Default)]
pub struct Legend {
    entries: IndexMap<char, Spawn>,
}

impl Legend {
    /// An empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `symbol` to `spawn`.
    ///
    /// # Errors
    ///
    /// [`LegendError::ReservedSymbol`] for the empty or edge symbol,
    /// [`LegendError::DuplicateSymbol`] if `symbol` is already bound.
    pub fn insert(&mut self, symbol: char, spawn: Spawn) -> Result<(), LegendError> {
        if is_reserved(symbol) {
            return Err(LegendError::ReservedSymbol(symbol));
        }
        if self.entries.contains_key(&symbol) {
            return Err(LegendError::DuplicateSymbol(symbol));
        }
        self.entries.insert(symbol, spawn);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert) for an obstacle.
    pub fn obstacle(mut self, symbol: char) -> Result<Self, LegendError> {
        self.insert(symbol, Spawn::Obstacle)?;
        Ok(self)
    }

    /// Builder form of [`insert`](Self::insert) for an agent.
    pub fn agent<F, B>(mut self, symbol: char, factory: F) -> Result<Self, LegendError>
    where
        F: Fn(&mut dyn Chooser) -> B + Send + Sync + 'static,
        B: Behavior,
    {
        let factory: AgentFactory =
            Box::new(move |chooser: &mut dyn Chooser| -> Box<dyn Behavior> {
                Box::new(factory(chooser))
            });
        self.insert(symbol, Spawn::Agent(factory))?;
        Ok(self)
    }

    /// `true` if `symbol` is bound.
    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// The entry for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&Spawn> {
        self.entries.get(&symbol)
    }

    /// Bound symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Number of bound symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instantiate the occupant for `symbol`, or `None` if it is unbound.
    pub fn spawn(&self, symbol: char, id: OccupantId, chooser: &mut dyn Chooser) -> Option<Occupant> {
        match self.entries.get(&symbol)? {
            Spawn::Obstacle => Some(Occupant::obstacle(id, symbol)),
            Spawn::Agent(factory) => Some(Occupant::agent(id, symbol, factory(chooser))),
        }
    }
}

impl fmt::Debug for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
