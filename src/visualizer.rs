use log::debug;

use crate::config::{default_grid, Config};
use crate::coord::Coord;
use crate::error::{GridError, SearchError};
use crate::grid::{EditMode, Grid};
use crate::search::{run_search_with, AstarSearch, SearchOutcome};

/// Interactive board state: the grid being painted, the active [EditMode] and the configuration the
/// board is rebuilt from. Renderers drive it with clicks and read the grid back for display.
#[derive(Clone, Debug)]
pub struct Visualizer {
    config: Config,
    grid: Grid,
    mode: EditMode,
}

impl Default for Visualizer {
    fn default() -> Visualizer {
        Visualizer {
            config: Config::default(),
            grid: default_grid(),
            mode: EditMode::default(),
        }
    }
}

impl Visualizer {
    pub fn new(config: Config) -> Result<Visualizer, GridError> {
        let grid = config.grid.build()?;
        Ok(Visualizer {
            config,
            grid,
            mode: EditMode::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
    pub fn mode(&self) -> EditMode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// Paints `coord` according to the active mode.
    pub fn click(&mut self, coord: Coord) -> Result<(), GridError> {
        debug!("{:?} click at {}", self.mode, coord);
        self.grid.apply_edit(self.mode, coord)
    }

    /// Rebuilds the board from the configuration, dropping start, end and painted obstacles.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.grid = self.config.grid.build()?;
        Ok(())
    }

    /// Runs the search to completion with the configured options.
    pub fn run(&mut self) -> Result<SearchOutcome, SearchError> {
        run_search_with(&mut self.grid, &self.config.search, |_| {})
    }

    /// Starts a stepwise search so each settled cell can be rendered as it happens.
    pub fn search(&mut self) -> Result<AstarSearch<'_>, SearchError> {
        AstarSearch::new(&mut self.grid, &self.config.search)
    }
}
