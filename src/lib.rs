//! # grid_astar
//!
//! The pathfinding core of an interactive grid visualizer. Users paint a start, an end and
//! obstacles on a fixed-size [Grid], and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic finds a
//! shortest 4-directional path. Besides the path, the search reports the order in which cells were
//! settled, either collected in a [SearchOutcome], streamed through a callback
//! ([run_search_with]) or pulled one iteration at a time from an [AstarSearch] so a renderer can
//! animate the exploration.
//!
//! ```
//! use grid_astar::{run_search, Coord, Grid};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.set_start(Coord::new(0, 0)).unwrap();
//! grid.set_end(Coord::new(0, 4)).unwrap();
//! let outcome = run_search(&mut grid).unwrap();
//! assert_eq!(outcome.hops(), 4);
//! ```
//!
//! Connected components of free cells are maintained alongside the grid, which allows answering
//! reachability without searching and, when enabled in [SearchConfig], failing fast on
//! unreachable goals.
mod cell;
pub mod config;
mod coord;
pub mod error;
mod grid;
pub mod search;
mod visualizer;

pub use cell::Cell;
pub use config::{Config, GridConfig, SearchConfig};
pub use coord::{Coord, Cost};
pub use error::{ConfigError, GridError, SearchError};
pub use grid::{EditMode, Grid};
pub use search::{run_search, run_search_with, AstarSearch, SearchOutcome};
pub use visualizer::Visualizer;
