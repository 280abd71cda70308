use std::fmt;

use crate::error::GameError;

/// One of the two checker identities
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, clap::ValueEnum)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            other => Err(GameError::InvalidMark(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A Connect 4 grid of arbitrary dimensions
///
/// # Layout
/// Cells are stored row by row, top-to-bottom, left-to-right. Row 0 is the
/// top of the grid and row `height - 1` the bottom, so checkers fall towards
/// larger row indices. Every column is a stack: its occupied cells always
/// form an unbroken run ending at the bottom row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<Mark>>,
}

impl Grid {
    /// Creates an empty grid, both dimensions must be positive
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![None; height * width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The checker at `(row, col)`, `None` for an empty cell
    ///
    /// # Panics
    /// If the position is outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside a {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Option<Mark>) {
        self.cells[row * self.width + col] = cell;
    }

    /// Drops a checker into `col` and returns the row it lands on
    ///
    /// # Panics
    /// The caller must gate every drop with [`can_add_to`]: dropping into a
    /// column outside the grid or into a full column panics. Use
    /// [`try_add_checker`] where the column is not trusted.
    ///
    /// [`can_add_to`]: #method.can_add_to
    /// [`try_add_checker`]: #method.try_add_checker
    pub fn add_checker(&mut self, mark: Mark, col: usize) -> usize {
        assert!(
            col < self.width,
            "column {} outside a grid of width {}",
            col,
            self.width
        );
        assert!(self.can_add_to(col), "column {} is full", col);

        // fall from the top until the bottom row or the first checker
        let mut row = 0;
        while self.get(row, col).is_none() && row < self.height - 1 {
            row += 1;
        }
        if self.get(row, col).is_some() {
            row -= 1;
        }
        self.set(row, col, Some(mark));
        row
    }

    /// Checked version of [`add_checker`](#method.add_checker)
    pub fn try_add_checker(&mut self, mark: Mark, col: usize) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }
        if !self.can_add_to(col) {
            return Err(GameError::ColumnFull(col));
        }
        Ok(self.add_checker(mark, col))
    }

    /// Removes the most recently added checker of `col`
    ///
    /// Returns the removed checker, or `None` if the column was already empty.
    ///
    /// # Panics
    /// If `col` is outside the grid
    pub fn remove_checker(&mut self, col: usize) -> Option<Mark> {
        assert!(
            col < self.width,
            "column {} outside a grid of width {}",
            col,
            self.width
        );
        let row = (0..self.height).find(|&row| self.get(row, col).is_some())?;
        let removed = self.get(row, col);
        self.set(row, col, None);
        removed
    }

    pub fn can_add_to(&self, col: usize) -> bool {
        col < self.width && self.get(0, col).is_none()
    }

    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| !self.can_add_to(col))
    }

    /// The columns that can currently take a checker, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width).filter(|&col| self.can_add_to(col)).collect()
    }

    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Plays a string of column digits, alternating checkers starting with X
    ///
    /// Digits naming a column outside the grid are skipped, but still pass the
    /// turn to the other checker.
    pub fn add_checkers<S: AsRef<str>>(&mut self, columns: S) -> Result<(), GameError> {
        let mut mark = Mark::X;
        for column_char in columns.as_ref().chars() {
            let col = column_char
                .to_digit(10)
                .ok_or(GameError::InvalidMoveString(column_char))? as usize;
            if col < self.width {
                self.try_add_checker(mark, col)?;
            }
            mark = mark.opponent();
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let c = self.get(row, col).map_or(' ', Mark::as_char);
                write!(f, "{}|", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(2 * self.width + 1))?;
        for col in 0..self.width {
            write!(f, " {}", col % 10)?;
        }
        Ok(())
    }
}
