//! Board and search configuration, loadable from TOML.
//!
//! ```toml
//! [grid]
//! rows = 10
//! cols = 12
//! obstacles = [{ row = 4, col = 2 }, { row = 4, col = 3 }]
//!
//! [search]
//! max_iterations = 500
//! prune_unreachable = true
//! ```

mod defaults;

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{ConfigError, GridError};
use crate::grid::Grid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Board dimensions and the obstacles placed whenever the board is (re)built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "defaults::rows")]
    pub rows: usize,

    #[serde(default = "defaults::cols")]
    pub cols: usize,

    #[serde(default = "defaults::obstacles")]
    pub obstacles: Vec<Coord>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
            obstacles: defaults::obstacles(),
        }
    }
}

impl GridConfig {
    /// A board of the given size without any obstacles.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            obstacles: Vec::new(),
        }
    }

    /// Creates the grid and places the configured obstacles with up-to-date components.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.rows, self.cols);
        for &coord in &self.obstacles {
            grid.set_obstacle(coord, true)?;
        }
        grid.update();
        Ok(grid)
    }
}

/// The built-in board. Its barriers always fit its size.
pub(crate) fn default_grid() -> Grid {
    let mut grid = Grid::new(defaults::rows(), defaults::cols());
    for coord in defaults::obstacles() {
        grid.cell_at_mut(coord).obstacle = true;
    }
    grid.generate_components();
    grid
}

/// Options for a single search run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop after this many frontier pops (None = unbounded)
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Fail immediately when start and end lie on different connected components instead of
    /// flooding the reachable area
    #[serde(default)]
    pub prune_unreachable: bool,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridConfig { rows, cols, .. } = self.grid;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {rows}x{cols}"
            )));
        }
        if let Some(coord) = self
            .grid
            .obstacles
            .iter()
            .find(|c| c.row >= rows || c.col >= cols)
        {
            return Err(GridError::OutOfBounds {
                coord: *coord,
                rows,
                cols,
            }
            .into());
        }
        if self.search.max_iterations == Some(0) {
            return Err(ConfigError::Invalid(
                "max_iterations must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board() {
        let config = Config::default();
        assert_eq!((config.grid.rows, config.grid.cols), (20, 20));
        assert_eq!(config.grid.obstacles.len(), 15);
        assert!(config.grid.obstacles.contains(&Coord::new(15, 14)));
        assert_eq!(config.search, SearchConfig::default());
        config.validate().unwrap();

        let grid = config.grid.build().unwrap();
        assert_eq!(grid.obstacles().count(), 15);
        assert!(!grid.components_dirty());
    }

    #[test]
    fn parse_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [grid]
            rows = 4
            obstacles = [{ row = 1, col = 2 }]

            [search]
            prune_unreachable = true
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.rows, 4);
        assert_eq!(config.grid.cols, 20);
        assert_eq!(config.grid.obstacles, vec![Coord::new(1, 2)]);
        assert!(config.search.prune_unreachable);
        assert_eq!(config.search.max_iterations, None);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn rejects_invalid_boards() {
        let zero = Config::from_toml_str("[grid]\nrows = 0");
        assert!(matches!(zero, Err(ConfigError::Invalid(_))));

        let outside =
            Config::from_toml_str("[grid]\nrows = 3\ncols = 3\nobstacles = [{ row = 3, col = 0 }]");
        assert!(matches!(
            outside,
            Err(ConfigError::Grid(GridError::OutOfBounds { .. }))
        ));

        let malformed = Config::from_toml_str("[grid]\nrows = \"many\"");
        assert!(matches!(malformed, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_grid_matches_default_config() {
        let built = GridConfig::default().build().unwrap();
        let grid = default_grid();
        assert_eq!(grid.obstacles().collect::<Vec<_>>(), built.obstacles().collect::<Vec<_>>());
        assert!(!grid.components_dirty());
        assert!(grid.unreachable(Coord::new(5, 4), Coord::new(5, 5)));
    }

    #[test]
    fn build_reports_bad_obstacle() {
        let mut grid_config = GridConfig::empty(2, 2);
        grid_config.obstacles.push(Coord::new(0, 7));
        assert!(grid_config.build().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Config::load("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
