//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a [`World`]. The
//! map is a list of equal-length text rows; every non-blank character must
//! be bound in the [`Legend`]. [`validate()`](WorldConfig::validate) checks
//! all of that up front so construction either fully succeeds or produces
//! nothing.
//!
//! [`World`]: crate::World

use vivarium_agent::Legend;
use vivarium_core::EMPTY_SYMBOL;
use vivarium_space::{Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`] or building a world
/// from it.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The plan has no rows, or its rows are empty.
    #[error("plan has no cells")]
    EmptyPlan,
    /// A row's length differs from the first row's.
    #[error("plan row {row} has {found} cells, expected {expected}")]
    RaggedPlan {
        /// Zero-based row index.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A map symbol is neither blank nor bound in the legend.
    #[error("symbol {symbol:?} at ({x}, {y}) is not in the legend")]
    UnknownSymbol {
        /// The unbound symbol.
        symbol: char,
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// The plan is too large to address.
    #[error("plan of {rows} rows x {cols} columns exceeds the grid limit")]
    PlanTooLarge {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
    /// Grid construction failed.
    #[error("space: {0}")]
    Space(#[from] SpaceError),
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Everything needed to build a [`World`](crate::World).
///
/// Consumed by [`World::new`](crate::World::new).
#[derive(Debug)]
pub struct WorldConfig {
    /// Map rows, top to bottom. Row length is the grid width; row count is
    /// the height. A blank (`' '`) is an empty cell.
    pub plan: Vec<String>,
    /// Symbol → occupant constructor table.
    pub legend: Legend,
    /// Seed for the world's random source. Default: 0.
    pub seed: u64,
}

impl WorldConfig {
    /// A config with seed 0.
    pub fn new<I, S>(plan: I, legend: Legend) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plan: plan.into_iter().map(Into::into).collect(),
            legend,
            seed: 0,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check structural invariants.
    ///
    /// Returns the first problem found, scanning rows top to bottom and
    /// cells left to right.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        for (y, row) in self.plan.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if symbol != EMPTY_SYMBOL && !self.legend.contains(symbol) {
                    return Err(ConfigError::UnknownSymbol { symbol, x, y });
                }
            }
        }
        Ok(())
    }

    /// Grid `(width, height)` described by the plan.
    pub fn dimensions(&self) -> Result<(u32, u32), ConfigError> {
        let rows = self.plan.len();
        let cols = self.plan.first().map_or(0, |r| r.chars().count());
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyPlan);
        }
        for (row, line) in self.plan.iter().enumerate().skip(1) {
            let found = line.chars().count();
            if found != cols {
                return Err(ConfigError::RaggedPlan {
                    row,
                    expected: cols,
                    found,
                });
            }
        }
        let too_large = || ConfigError::PlanTooLarge { rows, cols };
        let width = u32::try_from(cols).map_err(|_| too_large())?;
        let height = u32::try_from(rows).map_err(|_| too_large())?;
        if width > Grid::<()>::MAX_DIM || height > Grid::<()>::MAX_DIM {
            return Err(too_large());
        }
        Ok((width, height))
    }
}
