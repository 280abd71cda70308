//! Connect 4 on grids of any size, against humans, random movers or a
//! lookahead AI
//!
//! The AI scores each column by searching a fixed number of plies ahead for
//! forced wins and forced losses, then picks among the best columns with a
//! configurable tie-break.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_lookahead::{grid::{Grid, Mark}, scorer::scores_for};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut grid = Grid::new(6, 7)?;
//! grid.add_checkers("102030")?;
//!
//! // X can complete four along the bottom row in column 4
//! let scores = scores_for(&mut grid, Mark::X, 1);
//! assert_eq!(scores[4], 100);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod grid;

pub mod win;

pub mod scorer;

pub mod tiebreak;

pub mod player;

pub mod game;

pub mod config;

pub mod series;

pub mod logging;


/// The number of checkers in a row needed to win
pub const CONNECT: usize = 4;

/// The default height of the grid in cells
pub const DEFAULT_HEIGHT: usize = 6;

/// The default width of the grid in cells
pub const DEFAULT_WIDTH: usize = 7;

// ensure that every direction can be won on the default grid
const_assert!(DEFAULT_HEIGHT >= CONNECT && DEFAULT_WIDTH >= CONNECT);

// grids are built and played on rayon's worker threads
assert_impl_all!(grid::Grid: Send, Sync, Clone);
