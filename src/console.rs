use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use tcars::{Status, World, chart::GenerationRow};

/// Writes generation rows, optionally coloured for a terminal
pub struct ConsoleRender<W: Write> {
    out: W,
    colored: bool,
}
impl<W: Write> ConsoleRender<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    fn color(status: Status) -> Color {
        match status {
            Status::Zero => Color::Reset,
            Status::One => Color::Cyan,
            Status::Two => Color::Yellow,
        }
    }

    pub fn render(&mut self, world: &World, status_sum: u32) -> io::Result<()> {
        if !self.colored {
            writeln!(self.out, "{}", GenerationRow::new(world, status_sum))?;
            return self.out.flush();
        }

        let mut last = None;
        for status in world.statuses() {
            if last != Some(status) {
                queue!(self.out, SetForegroundColor(Self::color(status)))?;
                last = Some(status);
            }
            queue!(self.out, Print(status.glyph()))?;
        }
        queue!(self.out, ResetColor, Print(format!(" {} \n", status_sum)))?;
        self.out.flush()
    }
}
