use log::{debug, info, trace, warn};

use crate::config::SearchConfig;
use crate::coord::Coord;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::search::frontier::Frontier;
use crate::search::path::reconstruct_path;
use crate::search::SearchOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Reached,
    Exhausted,
    Halted(usize),
}

/// A single A* run over a borrowed [Grid], advanced one frontier pop at a time.
///
/// Iterating yields every settled cell in settle order, which is the visitation stream a renderer
/// animates. Iteration ends when the end cell is selected or the frontier runs dry;
/// [finish](Self::finish) then reports the outcome. Dropping the run early abandons it between two
/// iterations, the next run resets the grid's search state anyway.
#[derive(Debug)]
pub struct AstarSearch<'g> {
    grid: &'g mut Grid,
    start: Coord,
    end: Coord,
    frontier: Frontier,
    visited: Vec<Coord>,
    iterations: usize,
    max_iterations: Option<usize>,
    state: State,
}

impl<'g> AstarSearch<'g> {
    /// Prepares a run from the grid's designated start to its end. Fails with
    /// [SearchError::MissingEndpoints] before touching the grid if either is missing, and with
    /// [SearchError::NoPathFound] if either is an obstacle.
    pub fn new(grid: &'g mut Grid, config: &SearchConfig) -> Result<Self, SearchError> {
        let (start, end) = match (grid.start(), grid.end()) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(SearchError::MissingEndpoints),
        };
        debug!("Searching from {} to {}", start, end);

        if grid.cell_at(start).obstacle || grid.cell_at(end).obstacle {
            info!("Start {} or end {} is blocked", start, end);
            return Err(SearchError::NoPathFound);
        }
        if config.prune_unreachable && start != end {
            grid.update();
            if grid.unreachable(start, end) {
                info!("{} is not reachable from {}", end, start);
                return Err(SearchError::NoPathFound);
            }
        }

        grid.reset_search_state();
        let origin = grid.cell_at_mut(start);
        origin.distance = 0;
        origin.score = start.manhattan_distance(end);

        let mut frontier = Frontier::default();
        frontier.push(start);
        Ok(AstarSearch {
            grid,
            start,
            end,
            frontier,
            visited: Vec::new(),
            iterations: 0,
            max_iterations: config.max_iterations,
            state: State::Running,
        })
    }

    /// Cells settled so far, in order.
    pub fn visited(&self) -> &[Coord] {
        &self.visited
    }

    /// Number of discovered cells waiting to be selected.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether `coord` is currently in the open set.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.frontier.contains(&coord)
    }

    pub fn is_finished(&self) -> bool {
        self.state != State::Running
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Runs any remaining iterations and reports the path, or why there is none.
    pub fn finish(mut self) -> Result<SearchOutcome, SearchError> {
        self.by_ref().for_each(drop);
        match self.state {
            State::Reached => {
                let path = reconstruct_path(self.grid, self.start, self.end)?;
                info!(
                    "Found path of {} hops after settling {} cells",
                    path.len() - 1,
                    self.visited.len()
                );
                Ok(SearchOutcome {
                    path,
                    visited_order: self.visited,
                })
            }
            State::Halted(limit) => Err(SearchError::IterationLimit { limit }),
            State::Running | State::Exhausted => {
                info!(
                    "No path from {} to {} after settling {} cells",
                    self.start,
                    self.end,
                    self.visited.len()
                );
                Err(SearchError::NoPathFound)
            }
        }
    }

    /// Relaxes the free, unsettled neighbours of `current` and opens the improved ones.
    fn expand(&mut self, current: Coord) {
        let distance = self.grid.cell_at(current).distance + 1;
        for neighbor in self.grid.adjacent(current) {
            let cell = self.grid.cell_at_mut(neighbor);
            if cell.settled || cell.obstacle {
                continue;
            }
            if distance < cell.distance {
                cell.distance = distance;
                cell.predecessor = Some(current);
                cell.score = distance + neighbor.manhattan_distance(self.end);
                self.frontier.push(neighbor);
            }
        }
    }
}

impl Iterator for AstarSearch<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.state != State::Running {
            return None;
        }
        if self.frontier.is_empty() {
            self.state = State::Exhausted;
            return None;
        }
        if let Some(limit) = self.max_iterations {
            if self.iterations >= limit {
                warn!("Search halted after {} iterations", limit);
                self.state = State::Halted(limit);
                return None;
            }
        }
        let grid = &*self.grid;
        let Some(current) = self.frontier.pop_min(|c| grid.cell_at(*c).score) else {
            self.state = State::Exhausted;
            return None;
        };
        self.iterations += 1;
        if current == self.end {
            self.state = State::Reached;
            return None;
        }
        self.grid.cell_at_mut(current).settled = true;
        self.visited.push(current);
        trace!("Settled {}", current);
        self.expand(current);
        Some(current)
    }
}
