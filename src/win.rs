//! Four-in-a-row detection over a [`Grid`](crate::grid::Grid)

use crate::grid::{Grid, Mark};
use crate::CONNECT;

impl Grid {
    /// Checks whether `mark` owns a full line of `CONNECT` cells in any
    /// direction
    pub fn is_win_for(&self, mark: Mark) -> bool {
        self.is_horizontal_win(mark)
            || self.is_vertical_win(mark)
            || self.is_down_diagonal_win(mark)
            || self.is_up_diagonal_win(mark)
    }

    pub fn is_horizontal_win(&self, mark: Mark) -> bool {
        let last_col = self.width().saturating_sub(CONNECT - 1);
        (0..self.height())
            .any(|row| (0..last_col).any(|col| self.line_owned_by(mark, row, col, 0, 1)))
    }

    pub fn is_vertical_win(&self, mark: Mark) -> bool {
        let last_row = self.height().saturating_sub(CONNECT - 1);
        (0..last_row)
            .any(|row| (0..self.width()).any(|col| self.line_owned_by(mark, row, col, 1, 0)))
    }

    /// Top-left to bottom-right
    pub fn is_down_diagonal_win(&self, mark: Mark) -> bool {
        let last_row = self.height().saturating_sub(CONNECT - 1);
        let last_col = self.width().saturating_sub(CONNECT - 1);
        (0..last_row).any(|row| (0..last_col).any(|col| self.line_owned_by(mark, row, col, 1, 1)))
    }

    /// Bottom-left to top-right
    pub fn is_up_diagonal_win(&self, mark: Mark) -> bool {
        let last_col = self.width().saturating_sub(CONNECT - 1);
        (CONNECT - 1..self.height())
            .any(|row| (0..last_col).any(|col| self.line_owned_by(mark, row, col, -1, 1)))
    }

    // the caller keeps every cell of the line inside the grid
    fn line_owned_by(&self, mark: Mark, row: usize, col: usize, d_row: isize, d_col: isize) -> bool {
        (0..CONNECT as isize).all(|i| {
            let r = (row as isize + i * d_row) as usize;
            let c = (col as isize + i * d_col) as usize;
            self.get(r, c) == Some(mark)
        })
    }
}
