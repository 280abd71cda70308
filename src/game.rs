//! Turn-taking between two players until a win or a full grid

use std::io::Write;

use anyhow::Result;

use crate::error::GameError;
use crate::grid::{Grid, Mark};
use crate::player::Player;

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// `mark` completed four in a row with its `moves`th move
    Win { mark: Mark, moves: usize },
    /// The grid filled up without a winner
    Tie,
}

/// Where a game shows its progress
pub trait GameView {
    fn show_grid(&mut self, grid: &Grid) -> Result<()>;
    fn announce(&mut self, message: &str) -> Result<()>;
}

/// Writes the text rendering of the grid and every announcement to `W`
pub struct TextView<W>(pub W);

impl<W: Write> GameView for TextView<W> {
    fn show_grid(&mut self, grid: &Grid) -> Result<()> {
        writeln!(self.0, "{}", grid)?;
        writeln!(self.0)?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        writeln!(self.0, "{}", message)?;
        Ok(())
    }
}

/// Shows nothing, for unattended games
pub struct QuietView;

impl GameView for QuietView {
    fn show_grid(&mut self, _grid: &Grid) -> Result<()> {
        Ok(())
    }

    fn announce(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Plays `p1` against `p2` on `grid`, `p1` moving first
///
/// The grid is played on as given, it is not reset first.
pub fn connect_four(
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    grid: &mut Grid,
    view: &mut dyn GameView,
) -> Result<Outcome> {
    if p1.mark() == p2.mark() {
        return Err(GameError::DuplicateMarks(p1.mark()).into());
    }

    view.announce("Welcome to Connect Four!")?;
    view.show_grid(grid)?;

    loop {
        if let Some(outcome) = process_move(p1, grid, view)? {
            return Ok(outcome);
        }
        if let Some(outcome) = process_move(p2, grid, view)? {
            return Ok(outcome);
        }
    }
}

/// Lets `player` take one turn, returning the outcome if the game is over
pub fn process_move(
    player: &mut dyn Player,
    grid: &mut Grid,
    view: &mut dyn GameView,
) -> Result<Option<Outcome>> {
    let mark = player.mark();
    view.announce(&format!("Player {}'s turn", mark))?;

    let column = player.next_move(grid)?;
    let row = grid.try_add_checker(mark, column)?;
    tracing::info!(%mark, column, row, moves = player.num_moves(), "checker dropped");
    view.show_grid(grid)?;

    if grid.is_win_for(mark) {
        let moves = player.num_moves();
        view.announce(&format!("{} wins in {} moves.", player, moves))?;
        view.announce("Congratulations!")?;
        tracing::info!(%mark, moves, "game won");
        return Ok(Some(Outcome::Win { mark, moves }));
    }
    if grid.is_full() {
        view.announce("It's a tie!")?;
        tracing::info!("game tied");
        return Ok(Some(Outcome::Tie));
    }
    Ok(None)
}
