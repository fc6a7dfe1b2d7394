//! Grid occupants.

use crate::behavior::Behavior;
use std::fmt;
use vivarium_core::OccupantId;

/// What an occupant is.
///
/// Obstacles have no decision capability and are never scheduled.
pub enum OccupantKind {
    /// Stationary, never acts.
    Obstacle,
    /// Acts every turn through its behaviour.
    Agent(Box<dyn Behavior>),
}

impl fmt::Debug for OccupantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obstacle => f.write_str("Obstacle"),
            Self::Agent(b) => f.debug_tuple("Agent").field(&b.name()).finish(),
        }
    }
}

/// Anything stored in a grid cell.
///
/// Carries the map symbol it was created from so a world can be rendered
/// back to the text it was built from.
#[derive(Debug)]
pub struct Occupant {
    id: OccupantId,
    symbol: char,
    kind: OccupantKind,
}

impl Occupant {
    /// A stationary obstacle.
    pub fn obstacle(id: OccupantId, symbol: char) -> Self {
        Self {
            id,
            symbol,
            kind: OccupantKind::Obstacle,
        }
    }

    /// An agent driven by `behavior`.
    pub fn agent(id: OccupantId, symbol: char, behavior: Box<dyn Behavior>) -> Self {
        Self {
            id,
            symbol,
            kind: OccupantKind::Agent(behavior),
        }
    }

    /// Identity, stable across moves.
    pub fn id(&self) -> OccupantId {
        self.id
    }

    /// The map symbol this occupant renders as.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Obstacle or agent.
    pub fn kind(&self) -> &OccupantKind {
        &self.kind
    }

    /// `true` if this occupant has a decision capability.
    pub fn is_agent(&self) -> bool {
        matches!(self.kind, OccupantKind::Agent(_))
    }

    /// The behaviour, if this occupant is an agent.
    pub fn behavior(&self) -> Option<&dyn Behavior> {
        match &self.kind {
            OccupantKind::Agent(b) => Some(b.as_ref()),
            OccupantKind::Obstacle => None,
        }
    }

    /// Mutable access to the behaviour, if this occupant is an agent.
    pub fn behavior_mut(&mut self) -> Option<&mut (dyn Behavior + 'static)> {
        match &mut self.kind {
            OccupantKind::Agent(b) => Some(b.as_mut()),
            OccupantKind::Obstacle => None,
        }
    }
}
