//! Error types for core value parsing.

/// A string did not name one of the eight compass directions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown compass direction {name:?}")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub name: String,
}
