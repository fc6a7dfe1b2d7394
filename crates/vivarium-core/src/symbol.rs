//! Reserved map symbols.
//!
//! Every other `char` is free for a legend to bind.

/// Symbol of an empty cell, both in maps and in what a view reports.
pub const EMPTY_SYMBOL: char = ' ';

/// Symbol a view reports when looking past the edge of the grid.
///
/// Never produced by a map cell: the legend refuses to bind it.
pub const EDGE_SYMBOL: char = '\u{25A0}';

/// Returns `true` if `symbol` is reserved and cannot be bound in a legend.
pub fn is_reserved(symbol: char) -> bool {
    symbol == EMPTY_SYMBOL || symbol == EDGE_SYMBOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_symbols_are_distinct() {
        assert_ne!(EMPTY_SYMBOL, EDGE_SYMBOL);
        assert!(is_reserved(EMPTY_SYMBOL));
        assert!(is_reserved(EDGE_SYMBOL));
        assert!(!is_reserved('#'));
        assert!(!is_reserved('o'));
    }
}
