//! Terminal setup, teardown and double-buffered drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use sliding_choices::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

/// Text attributes for [`Buffer::print`]. A `None` background keeps
/// whatever is already painted underneath.
#[derive(Debug, Clone, Copy)]
pub struct Pen {
    pub fg: Color,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Pen {
    pub fn new(fg: Color) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    pub fn bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.index(x, y)])
    }

    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// Paint the background of every cell in `rect`, blanking the text.
    pub fn fill(&mut self, rect: Rect, bg: Color) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Write `text` starting at (x, y), clipped to `max_width` cells and to
    /// the buffer. Returns the number of cells written.
    pub fn print(&mut self, x: u16, y: u16, text: &str, max_width: u16, pen: Pen) -> u16 {
        let mut written = 0;
        for ch in text.chars() {
            if written >= max_width {
                break;
            }
            let Some(cell) = self.get_mut(x.saturating_add(written), y) else {
                break;
            };
            cell.ch = ch;
            cell.fg = pen.fg;
            cell.bold = pen.bold;
            if let Some(bg) = pen.bg {
                cell.bg = bg;
            }
            written += 1;
        }
        written
    }

    /// Single-line border around `rect`.
    pub fn border(&mut self, rect: Rect, fg: Color) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (left, right) = (rect.x, rect.right() - 1);
        let (top, bottom) = (rect.y, rect.bottom() - 1);
        for x in left..=right {
            self.set_char(x, top, '─', fg);
            self.set_char(x, bottom, '─', fg);
        }
        for y in top..=bottom {
            self.set_char(left, y, '│', fg);
            self.set_char(right, y, '│', fg);
        }
        self.set_char(left, top, '╭', fg);
        self.set_char(right, top, '╮', fg);
        self.set_char(left, bottom, '╰', fg);
        self.set_char(right, bottom, '╯', fg);
    }

    fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Color) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width);
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

/// Owns the terminal while the app runs and restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default hook prints the panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Render a frame with `paint` and write only the cells that changed.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {}x{}", width, height);
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut last: Option<Cell> = None;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if last.is_none_or(|prev| prev.bold != cell.bold) {
                let attribute = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attribute))?;
            }
            if last.is_none_or(|prev| prev.fg != cell.fg) {
                queue!(self.stdout, SetForegroundColor(cell.fg))?;
            }
            if last.is_none_or(|prev| prev.bg != cell.bg) {
                queue!(self.stdout, SetBackgroundColor(cell.bg))?;
            }
            queue!(self.stdout, Print(cell.ch))?;

            cursor_at = Some((x + 1, y));
            last = Some(*cell);
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
