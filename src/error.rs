//! Errors raised by the grid, the agents and the game set-up

use crate::grid::Mark;

/// A violated precondition of the game core
///
/// These describe programming or configuration mistakes by a caller. Bad
/// input typed by a human player never surfaces as a `GameError`, the human
/// agent re-prompts instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' is not a valid checker, expected 'X' or 'O'")]
    InvalidMark(char),

    #[error("column {column} out of range, columns must be between 0 and {}", .width - 1)]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("a {height}x{width} grid has no cells, both dimensions must be positive")]
    InvalidDimensions { height: usize, width: usize },

    #[error("both players use checker {0}, need one X player and one O player")]
    DuplicateMarks(Mark),

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("could not parse '{0}' as a column number")]
    InvalidMoveString(char),
}
