//! Actions an agent can request from the world.

use crate::direction::Direction;

/// What an agent asks the world to do with it this turn.
///
/// The world validates every request. Anything it cannot carry out
/// (unknown direction name, occupied or off-grid destination, a kind it has
/// no handler for) leaves the agent where it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Step one cell in a compass direction.
    Move(Direction),
    /// Step one cell in a direction given by its short name (`"n"`, `"se"`,
    /// ...). Used by behaviours that are driven from text, such as scripts.
    MoveNamed(String),
    /// Deliberately do nothing this turn.
    Wait,
    /// An action kind the engine does not implement. Always discarded.
    Unhandled(String),
}

impl Action {
    /// Short label for logging.
    pub fn kind(&self) -> &str {
        match self {
            Action::Move(_) | Action::MoveNamed(_) => "move",
            Action::Wait => "wait",
            Action::Unhandled(kind) => kind,
        }
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Action::Move(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels() {
        assert_eq!(Action::Move(Direction::N).kind(), "move");
        assert_eq!(Action::MoveNamed("sideways".into()).kind(), "move");
        assert_eq!(Action::Wait.kind(), "wait");
        assert_eq!(Action::Unhandled("eat".into()).kind(), "eat");
    }

    #[test]
    fn direction_converts_to_move() {
        assert_eq!(Action::from(Direction::SW), Action::Move(Direction::SW));
    }
}
