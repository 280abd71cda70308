//! Many unattended games between computer players, played in parallel

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::config::{PlayerConfig, PlayerKind};
use crate::game::{connect_four, Outcome, QuietView};
use crate::grid::{Grid, Mark};

/// Totals over a finished series
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SeriesSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
    /// Checkers dropped over all games
    pub total_moves: usize,
}

impl SeriesSummary {
    fn record(&mut self, outcome: Outcome, moves: usize) {
        self.games += 1;
        self.total_moves += moves;
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x_wins += 1,
            Outcome::Win { mark: Mark::O, .. } => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn wins_for(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }
}

/// Plays `games` games of `first` against `second` on `height`x`width` grids
///
/// Game `i` seeds its players from `seed` and `i` alone, so a series is
/// reproducible whatever the thread scheduling.
pub fn run_series(
    first: &PlayerConfig,
    second: &PlayerConfig,
    height: usize,
    width: usize,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SeriesSummary> {
    PlayerConfig::validate_pair(first, second)?;
    if first.kind == PlayerKind::Human || second.kind == PlayerKind::Human {
        return Err(anyhow!("a series can only be played between computer players"));
    }
    // fail on bad dimensions before spawning any work
    Grid::new(height, width)?;

    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results: Vec<(Outcome, usize)> = (0..games)
        .into_par_iter()
        .map(|game| {
            let result = play_one(first, second, height, width, game_seed(seed, game));
            progress.inc(1);
            result
        })
        .collect::<Result<_>>()?;

    let mut summary = SeriesSummary::default();
    for (outcome, moves) in results {
        summary.record(outcome, moves);
    }

    progress.finish();
    tracing::info!(
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        ties = summary.ties,
        total_moves = summary.total_moves,
        "series complete"
    );
    Ok(summary)
}

fn game_seed(seed: u64, game: usize) -> u64 {
    seed.wrapping_add((game as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn play_one(
    first: &PlayerConfig,
    second: &PlayerConfig,
    height: usize,
    width: usize,
    seed: u64,
) -> Result<(Outcome, usize)> {
    let mut grid = Grid::new(height, width)?;
    let mut p1 = first.build(seed);
    let mut p2 = second.build(seed.wrapping_add(1));

    let outcome = connect_four(p1.as_mut(), p2.as_mut(), &mut grid, &mut QuietView)?;
    Ok((outcome, p1.num_moves() + p2.num_moves()))
}
