//! Player configurations and how they become players

use std::io::{stdin, stdout, BufReader};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::GameError;
use crate::grid::Mark;
use crate::player::{AiPlayer, HumanPlayer, Player, RandomPlayer};
use crate::tiebreak::TieBreak;

/// Lookaheads above this grow slow enough on a standard grid to be worth a warning
pub const SLOW_LOOKAHEAD: u32 = 5;

/// Who controls a player
#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on stdin
    Human,
    /// Uniformly random open columns
    Random,
    /// The lookahead AI
    Ai,
}

/// Everything needed to build one player
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PlayerConfig {
    pub mark: Mark,
    pub kind: PlayerKind,
    /// Only used by [`PlayerKind::Ai`]
    pub tiebreak: TieBreak,
    /// Only used by [`PlayerKind::Ai`]
    pub lookahead: u32,
}

impl PlayerConfig {
    /// Checks that two configurations can play each other
    pub fn validate_pair(first: &Self, second: &Self) -> Result<(), GameError> {
        if first.mark == second.mark {
            return Err(GameError::DuplicateMarks(first.mark));
        }
        for config in [first, second] {
            if config.kind == PlayerKind::Ai && config.lookahead > SLOW_LOOKAHEAD {
                tracing::warn!(
                    mark = %config.mark,
                    lookahead = config.lookahead,
                    "search time grows with width^(lookahead + 1), expect slow moves"
                );
            }
        }
        Ok(())
    }

    /// Builds the player, seeding any randomness it uses from `seed`
    ///
    /// Human players read from stdin and prompt on stdout.
    pub fn build(&self, seed: u64) -> Box<dyn Player> {
        match self.kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(
                self.mark,
                BufReader::new(stdin()),
                stdout(),
            )),
            PlayerKind::Random => Box::new(RandomPlayer::new(
                self.mark,
                StdRng::seed_from_u64(seed),
            )),
            PlayerKind::Ai => Box::new(AiPlayer::new(
                self.mark,
                self.tiebreak,
                self.lookahead,
                StdRng::seed_from_u64(seed),
            )),
        }
    }
}
