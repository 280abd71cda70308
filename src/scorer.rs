//! Depth-limited lookahead scoring of the columns of a grid

use crate::grid::{Grid, Mark};

/// The score of a column that cannot take a checker
pub const ILLEGAL: i32 = -1;
/// The score of a column that leads to a loss
pub const LOSS: i32 = 0;
/// The score of a column with no decisive outcome within the lookahead
pub const NEUTRAL: i32 = 50;
/// The score of a column that leads to a win
pub const WIN: i32 = 100;

/// Scores every column of a grid for one checker
///
/// # Notes
/// This is a forced-win/forced-loss detector rather than a full minimax
/// search. At each ply it only asks whether *any* reply of the opponent wins
/// for them, or whether *all* of their replies lose, and every other branch
/// collapses to [`NEUTRAL`]. A deeper lookahead only refines which columns are
/// [`WIN`] or [`LOSS`], it never ranks two neutral columns against each other.
///
/// # Column Scoring
/// For each column, in order of precedence:
/// - [`ILLEGAL`] if the column is full
/// - [`WIN`] if the scoring checker has already won the position
/// - [`LOSS`] if the opponent has already won the position
/// - [`NEUTRAL`] if the lookahead is exhausted
/// - otherwise the checker is dropped, the opponent's columns are scored with
///   one less ply of lookahead, and the column is [`LOSS`] if the opponent's
///   best reply is a [`WIN`], [`WIN`] if their best reply is a [`LOSS`] and
///   [`NEUTRAL`] in every other case
#[derive(Clone, Debug)]
pub struct Scorer {
    mark: Mark,
    lookahead: u32,

    /// The number of positions scored by this `Scorer` so far (for diagnostics only)
    pub node_count: usize,
}

impl Scorer {
    pub fn new(mark: Mark, lookahead: u32) -> Self {
        Self {
            mark,
            lookahead,
            node_count: 0,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn lookahead(&self) -> u32 {
        self.lookahead
    }

    /// Returns one score per column of `grid`
    ///
    /// The grid is used as scratch space for the search, every probing
    /// checker is removed again before this returns.
    pub fn scores_for(&mut self, grid: &mut Grid) -> Vec<i32> {
        self.node_count += 1;

        let opponent = self.mark.opponent();
        // both checks are independent of the column being scored
        let already_won = grid.is_win_for(self.mark);
        let already_lost = !already_won && grid.is_win_for(opponent);

        let mut scores = vec![ILLEGAL; grid.width()];
        for (column, score) in scores.iter_mut().enumerate() {
            if !grid.can_add_to(column) {
                continue;
            }
            *score = if already_won {
                WIN
            } else if already_lost {
                LOSS
            } else if self.lookahead == 0 {
                NEUTRAL
            } else {
                self.probe(grid, column)
            };
        }
        scores
    }

    // score `column` from the opponent's best reply after dropping into it
    fn probe(&mut self, grid: &mut Grid, column: usize) -> i32 {
        grid.add_checker(self.mark, column);

        let mut reply = Scorer::new(self.mark.opponent(), self.lookahead - 1);
        let best_reply = reply.scores_for(grid).into_iter().max().unwrap_or(ILLEGAL);
        self.node_count += reply.node_count;

        grid.remove_checker(column);

        match best_reply {
            WIN => LOSS,
            LOSS => WIN,
            // includes an opponent left with no legal column at all
            _ => NEUTRAL,
        }
    }
}

/// Scores every column of `grid` for `mark`, searching `lookahead` plies deep
///
/// See [`Scorer`] for the scoring rules.
pub fn scores_for(grid: &mut Grid, mark: Mark, lookahead: u32) -> Vec<i32> {
    Scorer::new(mark, lookahead).scores_for(grid)
}
