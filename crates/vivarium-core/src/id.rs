//! Strongly-typed identifiers.

use std::fmt;

/// Identity of a grid occupant.
///
/// Assigned once, in row-major map order, when a world is built. Stays with
/// the occupant as it moves, so it is the key for "already acted this turn"
/// bookkeeping where symbol and position are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u32);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OccupantId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing turn counter.
///
/// `TurnId(0)` is the freshly built world; each completed turn adds one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(pub u64);

impl TurnId {
    /// The following turn.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TurnId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
