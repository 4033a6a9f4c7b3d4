use crate::{Config, Grid, NiceInt, Renderer, Result, SpeedMode};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use std::io::Write;

/// Draws the board as coloured squares followed by a status line.
///
/// Lines end with `\r\n` since the terminal is in raw mode.
pub struct TerminalRenderer<W: Write> {
    out: W,
    speed: SpeedMode,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, speed: SpeedMode) -> Self {
        Self { out, speed }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn status_line(grid: &Grid, generation: u64) -> String {
        format!(
            "Generation: {} | Population: {}",
            NiceInt::from(generation),
            NiceInt::from_usize(grid.population())
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            MoveTo(0, 0),
            Clear(ClearType::All)
        )?;
        let mut line = String::new();
        for row in grid.interior_rows() {
            line.clear();
            for (i, &cell) in row.iter().enumerate() {
                if i != 0 {
                    line.push(' ');
                }
                line.push_str(if cell != 0 {
                    Config::ALIVE_GLYPH
                } else {
                    Config::DEAD_GLYPH
                });
            }
            line.push_str("\r\n");
            queue!(self.out, Print(&line))?;
        }
        let hint = match self.speed {
            SpeedMode::Step => "Press ENTER for the next generation, q to quit",
            _ => "Press q to quit",
        };
        queue!(
            self.out,
            Print(Self::status_line(grid, generation)),
            Print("\r\n"),
            Print(hint),
            Print("\r\n"),
            EndSynchronizedUpdate
        )?;
        self.out.flush()?;
        Ok(())
    }
}
