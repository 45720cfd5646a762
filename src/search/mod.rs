//! A* over a [Grid] with the Manhattan heuristic, unit move costs and 4-directional movement.
//!
//! The frontier member with the lowest score is selected each iteration. Ties are decided by a
//! stable sort over the frontier, which makes the visitation order reproducible for a given grid.
//! The end cell is recognized when selected, before it would be settled, so it never appears in
//! the visitation order.
mod astar;
mod frontier;
mod path;

pub use astar::AstarSearch;
pub use path::trace_back;

use crate::config::SearchConfig;
use crate::coord::Coord;
use crate::error::SearchError;
use crate::grid::Grid;

/// Result of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start to end inclusive. A single cell if start and end coincide.
    pub path: Vec<Coord>,
    /// Settled cells in the order they were settled.
    pub visited_order: Vec<Coord>,
}

impl SearchOutcome {
    /// Number of moves along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs A* from the grid's start to its end with the default [SearchConfig].
pub fn run_search(grid: &mut Grid) -> Result<SearchOutcome, SearchError> {
    run_search_with(grid, &SearchConfig::default(), |_| {})
}

/// Runs A* to completion, reporting each settled cell to `on_settled` as it happens. Cells are
/// reported on failed runs too, so a renderer can show what was explored.
pub fn run_search_with<F>(
    grid: &mut Grid,
    config: &SearchConfig,
    mut on_settled: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(Coord),
{
    let mut search = AstarSearch::new(grid, config)?;
    for coord in search.by_ref() {
        on_settled(coord);
    }
    search.finish()
}
