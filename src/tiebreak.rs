use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// How to choose between columns sharing the best score
#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum TieBreak {
    /// The lowest column index
    Left,
    /// The highest column index
    Right,
    /// A uniformly random column
    Random,
}

impl TieBreak {
    /// Returns the index of a maximal score, or `None` if `scores` is empty
    ///
    /// Only [`TieBreak::Random`] draws from `rng`.
    pub fn pick<R: Rng + ?Sized>(self, scores: &[i32], rng: &mut R) -> Option<usize> {
        let max_score = *scores.iter().max()?;
        let best: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == max_score)
            .map(|(column, _)| column)
            .collect();

        match self {
            TieBreak::Left => best.first().copied(),
            TieBreak::Right => best.last().copied(),
            TieBreak::Random => best.choose(rng).copied(),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TieBreak::Left => "LEFT",
            TieBreak::Right => "RIGHT",
            TieBreak::Random => "RANDOM",
        };
        write!(f, "{}", name)
    }
}
