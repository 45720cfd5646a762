use log::warn;
use std::iter;

use crate::coord::Coord;
use crate::error::SearchError;
use crate::grid::Grid;

/// Follows predecessor links from `end` back to the start, yielding `end` first. A healthy chain is
/// at most one cell per grid cell long, longer chains are cut off there.
pub fn trace_back(grid: &Grid, end: Coord) -> impl Iterator<Item = Coord> + '_ {
    iter::successors(Some(end), move |&coord| grid.cell_at(coord).predecessor).take(grid.len() + 1)
}

/// Reconstructs the start to end path found by the last run.
pub(crate) fn reconstruct_path(
    grid: &Grid,
    start: Coord,
    end: Coord,
) -> Result<Vec<Coord>, SearchError> {
    let mut path: Vec<Coord> = trace_back(grid, end).collect();
    if path.len() > grid.len() || path.last() != Some(&start) {
        warn!("Predecessor chain from {} does not lead back to {}", end, start);
        return Err(SearchError::BrokenPredecessorChain { end });
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(grid: &mut Grid, from: Coord, to: Coord) {
        grid.cell_at_mut(to).predecessor = Some(from);
    }

    #[test]
    fn single_cell_path() {
        let grid = Grid::new(1, 1);
        let c = Coord::new(0, 0);
        assert_eq!(reconstruct_path(&grid, c, c), Ok(vec![c]));
    }

    #[test]
    fn follows_links_in_reverse() {
        let mut grid = Grid::new(2, 2);
        let (a, b, d) = (Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1));
        link(&mut grid, a, b);
        link(&mut grid, b, d);
        assert_eq!(trace_back(&grid, d).collect::<Vec<_>>(), vec![d, b, a]);
        assert_eq!(reconstruct_path(&grid, a, d), Ok(vec![a, b, d]));
    }

    #[test]
    fn cycle_is_detected() {
        let mut grid = Grid::new(2, 2);
        let (a, b) = (Coord::new(0, 0), Coord::new(0, 1));
        link(&mut grid, a, b);
        link(&mut grid, b, a);
        assert_eq!(trace_back(&grid, b).count(), grid.len() + 1);
        assert_eq!(
            reconstruct_path(&grid, Coord::new(1, 1), b),
            Err(SearchError::BrokenPredecessorChain { end: b })
        );
    }

    #[test]
    fn detached_chain_is_detected() {
        let mut grid = Grid::new(2, 2);
        link(&mut grid, Coord::new(1, 0), Coord::new(1, 1));
        assert_eq!(
            reconstruct_path(&grid, Coord::new(0, 0), Coord::new(1, 1)),
            Err(SearchError::BrokenPredecessorChain {
                end: Coord::new(1, 1)
            })
        );
    }
}
