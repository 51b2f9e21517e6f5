use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use scene_loader::text::glyph_width;
use scene_loader::{Buffer, Cell, Rgb, Viewport};

/// Raw-mode alternate screen that writes only the cells a frame changed.
pub struct Terminal {
    stdout: io::Stdout,
    shown: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self {
            stdout,
            // Empty, so the first frame is written in full.
            shown: Buffer::new(0, 0, Rgb::default()),
        })
    }

    pub fn viewport(&self) -> io::Result<Viewport> {
        let (width, height) = terminal::size()?;
        Ok(Viewport::new(width, height))
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Show `frame`, keeping it as the base of the next diff.
    pub fn draw(&mut self, frame: Buffer) -> io::Result<()> {
        let resized =
            frame.width() != self.shown.width() || frame.height() != self.shown.height();
        if resized {
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut pen = Pen::default();
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        for (x, y, cell) in frame.changes_since(&self.shown) {
            if !cell.continuation {
                pen.write(&mut self.stdout, x, y, cell)?;
            }
        }
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.shown = frame;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Cursor position and attributes last sent, to skip redundant escapes.
#[derive(Default)]
struct Pen {
    next: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
    dim: bool,
}

impl Pen {
    fn write(&mut self, out: &mut impl Write, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.next != Some((x, y)) {
            queue!(out, cursor::MoveTo(x, y))?;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(rgb(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(rgb(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        if (self.bold, self.dim) != (cell.style.bold, cell.style.dim) {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            if cell.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            self.bold = cell.style.bold;
            self.dim = cell.style.dim;
        }

        write!(out, "{}", cell.glyph)?;
        self.next = Some((x + glyph_width(cell.glyph), y));
        Ok(())
    }
}

fn rgb(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
