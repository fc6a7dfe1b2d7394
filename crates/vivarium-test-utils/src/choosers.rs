//! Deterministic choosers.
//!
//! - [`FirstChoice`]: always the first candidate (compass order for views).
//! - [`LastChoice`]: always the last candidate.
//! - [`ScriptedChoice`]: replays a fixed list of picks, then falls back to 0.

use std::collections::VecDeque;
use vivarium_core::Chooser;

/// Always picks index 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl Chooser for FirstChoice {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Always picks the last index.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastChoice;

impl Chooser for LastChoice {
    fn pick(&mut self, len: usize) -> usize {
        len.saturating_sub(1)
    }
}

/// Replays a scripted sequence of picks.
///
/// Each call consumes the next scripted value (reduced modulo `len`).
/// Once the script is exhausted every pick is 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoice {
    picks: VecDeque<usize>,
}

impl ScriptedChoice {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl Chooser for ScriptedChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |p| p % len.max(1))
    }
}
