//! Default value functions for serde deserialization.

use crate::coord::Coord;

pub fn rows() -> usize {
    20
}

pub fn cols() -> usize {
    20
}

/// Three horizontal barriers of five cells each.
pub fn obstacles() -> Vec<Coord> {
    let barriers = [(5, 5..=9), (10, 5..=9), (15, 10..=14)];
    barriers
        .into_iter()
        .flat_map(|(row, cols)| cols.map(move |col| Coord::new(row, col)))
        .collect()
}
