//! Error types for legend construction.

/// Errors from building a [`Legend`](crate::Legend).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LegendError {
    /// The symbol is reserved (empty cell or grid edge) and cannot be bound.
    #[error("symbol {0:?} is reserved")]
    ReservedSymbol(char),
    /// The symbol is already bound to another entry.
    #[error("symbol {0:?} is already bound")]
    DuplicateSymbol(char),
}
