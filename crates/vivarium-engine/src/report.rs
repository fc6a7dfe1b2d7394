//! Per-turn outcomes.
//!
//! [`TurnReport`] records, for every agent that acted in a turn and in the
//! order they acted, what became of its request.

use std::fmt;
use vivarium_core::{Coord, OccupantId, TurnId};

/// Why a requested action left the agent in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// A named move used a name that is not a compass direction.
    UnknownDirection(String),
    /// The action kind has no handler.
    UnsupportedAction(String),
    /// The destination lies outside the grid.
    OutOfBounds(Coord),
    /// The destination is taken.
    Occupied {
        /// The contested cell.
        at: Coord,
        /// Who holds it.
        by: OccupantId,
    },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection(name) => write!(f, "unknown direction {name:?}"),
            Self::UnsupportedAction(kind) => write!(f, "unsupported action {kind:?}"),
            Self::OutOfBounds(at) => write!(f, "destination {at} is off the grid"),
            Self::Occupied { at, by } => write!(f, "destination {at} occupied by {by}"),
        }
    }
}

/// What happened to one agent in one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Stepped from `from` to the adjacent cell `to`.
    Moved {
        /// Cell before the move.
        from: Coord,
        /// Cell after the move.
        to: Coord,
    },
    /// Asked to wait, and did.
    Waited {
        /// Where it stayed.
        at: Coord,
    },
    /// The request was discarded; the agent stayed at `at`.
    Blocked {
        /// Where it stayed.
        at: Coord,
        /// Why.
        reason: BlockReason,
    },
}

impl Outcome {
    /// Where the agent stands after the turn.
    pub fn position(&self) -> Coord {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Waited { at } | Self::Blocked { at, .. } => *at,
        }
    }

    /// `true` for [`Outcome::Moved`].
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Result of one [`World::turn`](crate::World::turn).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Number of the completed turn (the first turn is `TurnId(1)`).
    pub turn: TurnId,
    /// Agents in the order they acted, with their outcomes.
    pub outcomes: Vec<(OccupantId, Outcome)>,
}

impl TurnReport {
    /// Number of agents that were asked to decide.
    pub fn acted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of agents that changed cell.
    pub fn moved(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_move()).count()
    }

    /// Number of agents whose request was discarded.
    pub fn blocked(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Blocked { .. }))
            .count()
    }

    /// Outcome for `id`, if it acted this turn.
    pub fn outcome(&self, id: OccupantId) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find_map(|(who, o)| (*who == id).then_some(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn default_report_is_empty() {
        let r = TurnReport::default();
        assert_eq!(r.turn, TurnId(0));
        assert_eq!(r.acted(), 0);
        assert_eq!(r.moved(), 0);
        assert_eq!(r.blocked(), 0);
    }

    #[test]
    fn counts_by_kind() {
        let r = TurnReport {
            turn: TurnId(3),
            outcomes: vec![
                (OccupantId(0), Outcome::Moved { from: c(0, 0), to: c(1, 0) }),
                (OccupantId(4), Outcome::Waited { at: c(2, 2) }),
                (
                    OccupantId(2),
                    Outcome::Blocked {
                        at: c(0, 1),
                        reason: BlockReason::OutOfBounds(c(-1, 1)),
                    },
                ),
            ],
        };
        assert_eq!(r.acted(), 3);
        assert_eq!(r.moved(), 1);
        assert_eq!(r.blocked(), 1);
        assert_eq!(r.outcome(OccupantId(4)), Some(&Outcome::Waited { at: c(2, 2) }));
        assert_eq!(r.outcome(OccupantId(9)), None);
    }

    #[test]
    fn outcome_position() {
        assert_eq!(Outcome::Moved { from: c(0, 0), to: c(1, 1) }.position(), c(1, 1));
        assert_eq!(Outcome::Waited { at: c(3, 3) }.position(), c(3, 3));
    }

    #[test]
    fn block_reason_display() {
        assert_eq!(
            BlockReason::UnknownDirection("up".into()).to_string(),
            "unknown direction \"up\""
        );
        assert_eq!(
            BlockReason::Occupied { at: c(1, 2), by: OccupantId(5) }.to_string(),
            "destination (1, 2) occupied by 5"
        );
        assert_eq!(
            BlockReason::OutOfBounds(c(-1, 0)).to_string(),
            "destination (-1, 0) is off the grid"
        );
    }
}
