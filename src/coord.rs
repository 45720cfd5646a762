use core::fmt;
use serde::{Deserialize, Serialize};

/// Cost of a path in moves. Every orthogonal step costs exactly one.
pub type Cost = u32;

/// Sentinel for "not reached yet", standing in for an infinite distance or score.
pub(crate) const UNREACHED: Cost = Cost::MAX;

/// A cell address on the grid. Ordering is row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two
    /// coordinates. Admissible and consistent for unit-cost 4-directional movement, which makes it
    /// the heuristic of the search.
    pub fn manhattan_distance(&self, other: Coord) -> Cost {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as Cost
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
