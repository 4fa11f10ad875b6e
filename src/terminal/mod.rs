//! Terminal access: geometry probing and inline line rendering.
//!
//! The menu does not own an alternate screen. It prints its option rows plus
//! one search row in place, and on every frame erases exactly the region it
//! drew before printing the next one. [`Console`] is the seam between the
//! loop and the terminal; [`AnsiConsole`] is the crossterm-backed
//! implementation, and the test suite substitutes a recording double.

pub mod input;

use std::io::{self, Write};

use crossterm::cursor::{MoveLeft, MoveTo, MoveToColumn, MoveToNextLine, MoveToPreviousLine};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};

use crate::error::MenuError;

/// Snapshot of the terminal dimensions, probed once per loop iteration and
/// compared against the previous snapshot to detect resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub lines: u16,
    pub columns: u16,
}

/// Everything the menu loop needs from the terminal.
pub trait Console {
    /// Current terminal geometry.
    fn size(&mut self) -> Result<Geometry, MenuError>;

    /// Print one frame: every option row followed by the search row. The
    /// cursor is left at the end of the search text.
    fn print_lines(&mut self, lines: &[String], search: &str) -> Result<(), MenuError>;

    /// Erase `count` rows starting at the cursor row and moving down, then
    /// put the cursor back on the first erased row.
    fn delete_lines(&mut self, count: u16) -> Result<(), MenuError>;

    /// Erase the whole drawn frame, search row included. `lines` is the
    /// geometry snapshot the frame was drawn under.
    fn delete_all_lines(&mut self, search: &str, lines: u16) -> Result<(), MenuError>;

    /// Wipe the screen and home the cursor. Used when a resize invalidates
    /// every coordinate the previous frame was drawn under.
    fn clear(&mut self) -> Result<(), MenuError>;

    /// Move the cursor `times` columns to the left.
    fn cursor_backwards(&mut self, times: u16) -> Result<(), MenuError>;
}

/// Crossterm-backed [`Console`] writing to any sink, stdout in production.
///
/// Commands are queued and flushed once per call so a frame reaches the
/// terminal as a single write.
pub struct AnsiConsole<W: Write> {
    out: W,
}

impl AnsiConsole<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> AnsiConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Console for AnsiConsole<W> {
    fn size(&mut self) -> Result<Geometry, MenuError> {
        let (columns, lines) = terminal::size().map_err(|source| MenuError::Geometry { source })?;
        Ok(Geometry { lines, columns })
    }

    fn print_lines(&mut self, lines: &[String], search: &str) -> Result<(), MenuError> {
        for line in lines {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        queue!(self.out, Print(search))?;
        self.out.flush()?;
        Ok(())
    }

    fn delete_lines(&mut self, count: u16) -> Result<(), MenuError> {
        if count == 0 {
            return Ok(());
        }
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for _ in 1..count {
            queue!(self.out, MoveToNextLine(1), Clear(ClearType::CurrentLine))?;
        }
        if count > 1 {
            queue!(self.out, MoveToPreviousLine(count - 1))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn delete_all_lines(&mut self, _search: &str, lines: u16) -> Result<(), MenuError> {
        // The cursor rests on the search row, the last row of the frame.
        // Clear it, then walk upwards clearing every row the frame could
        // occupy; the walk clamps at the top of the screen, which is where
        // the frame is anchored and where the next frame starts printing.
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for _ in 1..lines {
            queue!(self.out, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MenuError> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    fn cursor_backwards(&mut self, times: u16) -> Result<(), MenuError> {
        if times > 0 {
            queue!(self.out, MoveLeft(times))?;
            self.out.flush()?;
        }
        Ok(())
    }
}
