//! Typed errors the core can hand back to the shell.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::{CleaningMode, Point};

/// Failure modes that cross the core boundary as values. Entrapment and
/// stalling are not listed here: they are ordinary run outcomes, reported
/// through `TraversalEnd`.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions: {columns}x{rows}")]
    InvalidDimensions { columns: i32, rows: i32 },

    /// A requested position lies outside the grid.
    #[error("position ({0}) is outside the grid")]
    OutOfBounds(Point),

    /// The selected cleaning mode is declared but not implemented.
    #[error("cleaning mode {0:?} is not implemented")]
    ModeNotImplemented(CleaningMode),

    /// The visited-point history could not grow.
    #[error("could not grow visited history: {0}")]
    HistoryAllocation(#[from] TryReserveError),
}
