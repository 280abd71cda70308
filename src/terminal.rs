use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Stdout, Write};

use connect4_lookahead::{
    game::GameView,
    grid::{Grid, Mark},
};

/// Draws the grid as coloured discs on a blue board
pub struct TerminalView {
    stdout: Stdout,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { stdout: stdout() }
    }
}

impl GameView for TerminalView {
    fn show_grid(&mut self, grid: &Grid) -> Result<()> {
        let labels: String = (0..grid.width()).map(|col| (col % 10).to_string()).collect();
        self.stdout
            .queue(PrintStyledContent(style(labels + "\n")))?;

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                self.stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match grid.get(row, col) {
                            Some(Mark::X) => Color::Red,
                            Some(Mark::O) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
            }
            self.stdout.queue(PrintStyledContent(style("\n")))?;
        }
        self.stdout.queue(PrintStyledContent(style("\n")))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        // name the colours next to the checkers they stand for
        let text = message
            .replacen("Player X", "Player X (red)", 1)
            .replacen("Player O", "Player O (yellow)", 1);
        writeln!(self.stdout, "{}", text)?;
        self.stdout.flush()?;
        Ok(())
    }
}
