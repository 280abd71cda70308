use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::Level;

use std::io::stdout;

use connect4_lookahead::{
    config::{PlayerConfig, PlayerKind},
    game::{connect_four, GameView, Outcome, TextView},
    grid::{Grid, Mark},
    logging::init_logging,
    series::run_series,
    tiebreak::TieBreak,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

mod terminal;
use terminal::*;

/// Connect 4 between humans, random movers and a lookahead AI
#[derive(Debug, Parser)]
#[command(name = "connect4", author, version)]
struct Cli {
    /// Number of rows in the grid
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of columns in the grid
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Who plays the X checkers
    #[arg(long = "x", value_enum, ignore_case = true, default_value_t = PlayerKind::Human)]
    x_kind: PlayerKind,

    /// Who plays the O checkers
    #[arg(long = "o", value_enum, ignore_case = true, default_value_t = PlayerKind::Ai)]
    o_kind: PlayerKind,

    /// Tie-break of an AI playing X
    #[arg(long, value_enum, ignore_case = true, default_value_t = TieBreak::Random)]
    x_tiebreak: TieBreak,

    /// Tie-break of an AI playing O
    #[arg(long, value_enum, ignore_case = true, default_value_t = TieBreak::Random)]
    o_tiebreak: TieBreak,

    /// Plies searched by an AI playing X
    #[arg(long, default_value_t = 3)]
    x_lookahead: u32,

    /// Plies searched by an AI playing O
    #[arg(long, default_value_t = 3)]
    o_lookahead: u32,

    /// The checker that moves first
    #[arg(long, value_enum, ignore_case = true, default_value_t = Mark::X)]
    first: Mark,

    /// Seed for every random choice (random players and RANDOM tie-breaks)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Play this many unattended games between computer players and report the totals
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Draw the grid as plain text instead of coloured discs
    #[arg(long)]
    plain: bool,

    /// Log verbosity, overridden by RUST_LOG
    #[arg(long, value_name = "LEVEL", default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if cli.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let x = PlayerConfig {
        mark: Mark::X,
        kind: cli.x_kind,
        tiebreak: cli.x_tiebreak,
        lookahead: cli.x_lookahead,
    };
    let o = PlayerConfig {
        mark: Mark::O,
        kind: cli.o_kind,
        tiebreak: cli.o_tiebreak,
        lookahead: cli.o_lookahead,
    };
    let (first, second) = match cli.first {
        Mark::X => (x, o),
        Mark::O => (o, x),
    };
    PlayerConfig::validate_pair(&first, &second)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, height = cli.height, width = cli.width, "starting");

    // unattended series
    if cli.games > 1 {
        let summary = run_series(
            &first,
            &second,
            cli.height,
            cli.width,
            cli.games,
            seed,
            true,
        )?;
        println!(
            "Played {} games: X won {}, O won {}, {} tied ({:.1} moves per game)",
            summary.games,
            summary.x_wins,
            summary.o_wins,
            summary.ties,
            summary.total_moves as f64 / summary.games as f64
        );
        return Ok(());
    }

    if first.kind == PlayerKind::Human && second.kind == PlayerKind::Human {
        println!("Two human players, take turns at the keyboard\n");
    }

    let mut grid = Grid::new(cli.height, cli.width)?;
    let mut p1 = first.build(seed);
    let mut p2 = second.build(seed.wrapping_add(1));

    let mut view: Box<dyn GameView> = if cli.plain {
        Box::new(TextView(stdout()))
    } else {
        Box::new(TerminalView::new())
    };

    match connect_four(p1.as_mut(), p2.as_mut(), &mut grid, view.as_mut())? {
        Outcome::Win { mark, moves } => tracing::info!(%mark, moves, "finished"),
        Outcome::Tie => tracing::info!("finished in a tie"),
    }
    Ok(())
}
