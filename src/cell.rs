use crate::coord::{Coord, Cost, UNREACHED};

/// One grid cell. The obstacle/start/end flags are edited between runs, the remaining fields are
/// written by the search and only meaningful during or right after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) obstacle: bool,
    pub(crate) start: bool,
    pub(crate) end: bool,
    pub(crate) distance: Cost,
    pub(crate) predecessor: Option<Coord>,
    pub(crate) settled: bool,
    pub(crate) score: Cost,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            obstacle: false,
            start: false,
            end: false,
            distance: UNREACHED,
            predecessor: None,
            settled: false,
            score: UNREACHED,
        }
    }
}

impl Cell {
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }
    pub fn is_start(&self) -> bool {
        self.start
    }
    pub fn is_end(&self) -> bool {
        self.end
    }
    /// Best known distance from the start, [None] if the cell was not reached.
    pub fn distance(&self) -> Option<Cost> {
        (self.distance != UNREACHED).then_some(self.distance)
    }
    /// The cell this one was reached from on the best known path.
    pub fn predecessor(&self) -> Option<Coord> {
        self.predecessor
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    /// Distance plus the heuristic estimate to the goal, [None] if the cell was not reached.
    pub fn score(&self) -> Option<Cost> {
        (self.score != UNREACHED).then_some(self.score)
    }

    pub(crate) fn reset_search_state(&mut self) {
        self.distance = UNREACHED;
        self.predecessor = None;
        self.settled = false;
        self.score = UNREACHED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_flags() {
        let mut cell = Cell {
            obstacle: true,
            end: true,
            distance: 3,
            predecessor: Some(Coord::new(0, 1)),
            settled: true,
            score: 5,
            ..Cell::default()
        };
        cell.reset_search_state();
        assert!(cell.is_obstacle() && cell.is_end() && !cell.is_start());
        assert_eq!(cell.distance(), None);
        assert_eq!(cell.score(), None);
        assert_eq!(cell.predecessor(), None);
        assert!(!cell.is_settled());
    }
}
