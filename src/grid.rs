use core::fmt;
use itertools::{iproduct, Itertools};
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::coord::Coord;
use crate::error::GridError;

/// Which flag a click paints onto a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Start,
    End,
    Obstacle,
}

/// [Grid] owns a fixed `rows x cols` matrix of [Cell] records in row-major order and tracks the
/// designated start and end. In addition it maintains connected components of free cells in a
/// [UnionFind] structure so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a grid where every cell is free, unflagged and unreached.
    pub fn new(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            start: None,
            end: None,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }
    pub fn start(&self) -> Option<Coord> {
        self.start
    }
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if self.in_bounds(coord) {
            Ok(self.ix(coord))
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
    fn ix(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.row * self.cols + coord.col
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, GridError> {
        self.index(coord).map(|ix| &self.cells[ix])
    }
    /// Unchecked access for coordinates produced by the grid itself.
    pub(crate) fn cell_at(&self, coord: Coord) -> &Cell {
        &self.cells[self.ix(coord)]
    }
    pub(crate) fn cell_at_mut(&mut self, coord: Coord) -> &mut Cell {
        let ix = self.ix(coord);
        &mut self.cells[ix]
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.rows, 0..self.cols).map(|(row, col)| Coord::new(row, col))
    }
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |c| self.cell_at(*c).obstacle)
    }

    /// Marks or unmarks a cell as an obstacle. Unblocking joins the cell with its free neighbours,
    /// blocking flags the components as dirty since a component may have been split.
    pub fn set_obstacle(&mut self, coord: Coord, blocked: bool) -> Result<(), GridError> {
        let ix = self.index(coord)?;
        if self.cells[ix].obstacle == blocked {
            return Ok(());
        }
        self.cells[ix].obstacle = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.adjacent(coord) {
                if !self.cell_at(n).obstacle {
                    let n_ix = self.ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        Ok(())
    }

    /// Flips the obstacle flag and returns the new value.
    pub fn toggle_obstacle(&mut self, coord: Coord) -> Result<bool, GridError> {
        let blocked = !self.cell(coord)?.obstacle;
        self.set_obstacle(coord, blocked)?;
        Ok(blocked)
    }

    /// Designates the start cell, clearing the previous one.
    pub fn set_start(&mut self, coord: Coord) -> Result<(), GridError> {
        let ix = self.index(coord)?;
        if let Some(old) = self.start.take() {
            self.cell_at_mut(old).start = false;
        }
        self.cells[ix].start = true;
        self.start = Some(coord);
        Ok(())
    }

    /// Designates the end cell, clearing the previous one.
    pub fn set_end(&mut self, coord: Coord) -> Result<(), GridError> {
        let ix = self.index(coord)?;
        if let Some(old) = self.end.take() {
            self.cell_at_mut(old).end = false;
        }
        self.cells[ix].end = true;
        self.end = Some(coord);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        if let Some(old) = self.start.take() {
            self.cell_at_mut(old).start = false;
        }
    }

    pub fn clear_end(&mut self) {
        if let Some(old) = self.end.take() {
            self.cell_at_mut(old).end = false;
        }
    }

    /// Returns every cell to its initial state: no obstacles, no start or end, unreached.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.start = None;
        self.end = None;
        self.generate_components();
    }

    /// Applies a click in the given mode: start and end are moved, obstacles are toggled.
    pub fn apply_edit(&mut self, mode: EditMode, coord: Coord) -> Result<(), GridError> {
        match mode {
            EditMode::Start => self.set_start(coord),
            EditMode::End => self.set_end(coord),
            EditMode::Obstacle => self.toggle_obstacle(coord).map(|_| ()),
        }
    }

    /// In-bounds orthogonal neighbours in the order up, down, left, right. The search relies on
    /// this order for reproducible tie-breaking.
    pub fn neighbors(&self, coord: Coord) -> Result<Vec<Coord>, GridError> {
        self.index(coord)?;
        Ok(self.adjacent(coord).collect())
    }

    pub(crate) fn adjacent(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = coord;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < self.rows).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < self.cols).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Restores distance, predecessor, settled and score of every cell. Flags are kept.
    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_search_state);
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: Coord) -> Result<usize, GridError> {
        self.index(coord).map(|ix| self.components.find(ix))
    }

    /// Checks if `a` and `b` are on the same connected component. Call [update](Self::update)
    /// first if obstacles were added since the components were last generated.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if `a` and `b` are not on the same connected component.
    pub fn unreachable(&self, a: Coord, b: Coord) -> bool {
        if self.in_bounds(a) && self.in_bounds(b) {
            !self.components.equiv(self.ix(a), self.ix(b))
        } else {
            true
        }
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for coord in self.coords() {
            if self.cell_at(coord).obstacle {
                continue;
            }
            let ix = self.ix(coord);
            // Linking down and right covers every edge once
            let forward = [
                Coord::new(coord.row + 1, coord.col),
                Coord::new(coord.row, coord.col + 1),
            ];
            for n in forward {
                if self.in_bounds(n) && !self.cell_at(n).obstacle {
                    let n_ix = self.ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Renders the grid as text with `path` cells marked `*` and `visited` cells marked `o`.
    /// Start (`S`), end (`E`) and obstacles (`#`) take precedence over both marks.
    pub fn render_overlay(&self, path: &[Coord], visited: &[Coord]) -> String {
        let mut canvas: Vec<char> = self
            .cells
            .iter()
            .map(|c| if c.obstacle { '#' } else { '.' })
            .collect();
        for (marks, symbol) in [(visited, 'o'), (path, '*')] {
            for &coord in marks.iter().filter(|c| self.in_bounds(**c)) {
                let ix = self.ix(coord);
                if !self.cells[ix].obstacle {
                    canvas[ix] = symbol;
                }
            }
        }
        for (coord, symbol) in [(self.start, 'S'), (self.end, 'E')] {
            if let Some(coord) = coord {
                let ix = self.ix(coord);
                canvas[ix] = symbol;
            }
        }
        canvas
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect::<String>())
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.render_overlay(&[], &[]))
    }
}
