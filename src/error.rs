//! Error types for grid editing, searching and configuration.

use thiserror::Error;

use crate::coord::Coord;

/// Errors raised by grid mutations and queries. A failed call leaves the grid untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {coord} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}

/// Ways a search run can end without a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or end (or both) has not been designated. Nothing was modified.
    #[error("both a start and an end cell must be set before searching")]
    MissingEndpoints,

    /// Every route from start to end is blocked. An expected outcome, not a fault.
    #[error("no path found between start and end")]
    NoPathFound,

    #[error("search stopped after {limit} iterations")]
    IterationLimit { limit: usize },

    /// Predecessor links from the end did not lead back to the start within the grid size.
    #[error("predecessor chain from {end} is cyclic or detached from the start")]
    BrokenPredecessorChain { end: Coord },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
