//! The open set of the search: an insertion-ordered set of coordinates with constant time
//! membership checks. Selecting the minimum stably sorts the members by score and takes the first,
//! so among equal scores the current order decides, and the order left behind by one selection
//! carries over to the next.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use crate::coord::{Coord, Cost};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    entries: FxIndexSet<Coord>,
}

impl Frontier {
    /// Adds `coord` at the back unless it is already present, in which case it keeps its place.
    pub fn push(&mut self, coord: Coord) -> bool {
        self.entries.insert(coord)
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.entries.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the member with the lowest score.
    pub fn pop_min<F>(&mut self, score: F) -> Option<Coord>
    where
        F: Fn(&Coord) -> Cost,
    {
        // sort_by is stable
        self.entries.sort_by(|a, b| score(a).cmp(&score(b)));
        self.entries.shift_remove_index(0)
    }
}
