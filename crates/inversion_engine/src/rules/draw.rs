//! Draw detection.

use crate::types::{Cell, Grid};
use tracing::instrument;

/// Checks if every cell on the grid holds a mark.
///
/// A full grid with no loss line is a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().all(|cell| cell != Cell::Empty)
}
