//! The agents that choose moves: humans, random movers and the lookahead AI

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Grid, Mark};
use crate::scorer::Scorer;
use crate::tiebreak::TieBreak;

/// Anything that can take a turn in a game
pub trait Player: fmt::Display {
    /// The checker this player drops
    fn mark(&self) -> Mark;

    /// The number of moves this player has chosen so far
    fn num_moves(&self) -> usize;

    /// Chooses a column that can currently take a checker
    ///
    /// The grid is borrowed mutably so that search-based players can probe
    /// moves on it, but it is always left exactly as it was given.
    fn next_move(&mut self, grid: &mut Grid) -> Result<usize>;
}

/// A player typing column numbers into `input`
pub struct HumanPlayer<R, W> {
    mark: Mark,
    num_moves: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            num_moves: 0,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn num_moves(&self) -> usize {
        self.num_moves
    }

    fn next_move(&mut self, grid: &mut Grid) -> Result<usize> {
        self.num_moves += 1;
        loop {
            write!(self.output, "Enter a column: ")?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("input closed while waiting for {}'s move", self.mark));
            }

            // negative numbers parse fine and are rejected by the range check
            match buffer.trim().parse::<i64>() {
                Ok(column) if column >= 0 && grid.can_add_to(column as usize) => {
                    return Ok(column as usize)
                }
                _ => writeln!(self.output, "Try again!")?,
            }
        }
    }
}

impl<R, W> fmt::Display for HumanPlayer<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.mark)
    }
}

/// A player choosing uniformly among the open columns
pub struct RandomPlayer<R = StdRng> {
    mark: Mark,
    num_moves: usize,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(mark: Mark, rng: R) -> Self {
        Self {
            mark,
            num_moves: 0,
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn num_moves(&self) -> usize {
        self.num_moves
    }

    fn next_move(&mut self, grid: &mut Grid) -> Result<usize> {
        let column = *grid
            .legal_columns()
            .choose(&mut self.rng)
            .ok_or(GameError::NoLegalMoves)?;
        self.num_moves += 1;
        Ok(column)
    }
}

impl<R> fmt::Display for RandomPlayer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.mark)
    }
}

/// A computer player picking the best scored column with a fixed lookahead
///
/// See [`Scorer`] for how columns are scored.
pub struct AiPlayer<R = StdRng> {
    mark: Mark,
    num_moves: usize,
    tiebreak: TieBreak,
    lookahead: u32,
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    /// `rng` is only drawn from by the [`TieBreak::Random`] policy
    pub fn new(mark: Mark, tiebreak: TieBreak, lookahead: u32, rng: R) -> Self {
        Self {
            mark,
            num_moves: 0,
            tiebreak,
            lookahead,
            rng,
        }
    }

    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }

    pub fn lookahead(&self) -> u32 {
        self.lookahead
    }

    /// Scores every column of `grid` for this player
    pub fn scores_for(&self, grid: &mut Grid) -> Vec<i32> {
        Scorer::new(self.mark, self.lookahead).scores_for(grid)
    }

    /// Picks a column among the best of `scores` using this player's tie-break
    pub fn max_score_column(&mut self, scores: &[i32]) -> Option<usize> {
        self.tiebreak.pick(scores, &mut self.rng)
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn num_moves(&self) -> usize {
        self.num_moves
    }

    fn next_move(&mut self, grid: &mut Grid) -> Result<usize> {
        if grid.is_full() {
            return Err(GameError::NoLegalMoves.into());
        }

        let mut scorer = Scorer::new(self.mark, self.lookahead);
        let scores = scorer.scores_for(grid);
        let column = self
            .max_score_column(&scores)
            .ok_or(GameError::NoLegalMoves)?;
        tracing::debug!(
            mark = %self.mark,
            ?scores,
            column,
            nodes = scorer.node_count,
            "scored columns"
        );

        self.num_moves += 1;
        Ok(column)
    }
}

impl<R> fmt::Display for AiPlayer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} ({}, {})",
            self.mark, self.tiebreak, self.lookahead
        )
    }
}
