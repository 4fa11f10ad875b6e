//! Raw-mode key acquisition.
//!
//! The menu loop consumes a stream of discrete [`Key`] events. The live
//! implementation decodes crossterm key presses; tests substitute a scripted
//! source. Raw mode is entered by `init` and must be left again on every exit
//! path, which [`RawInput`] guarantees by restoring the terminal in its
//! destructor.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::MenuError;

/// A single decoded keystroke.
///
/// Named variants cover every key the menu reacts to; anything else the
/// terminal can produce is folded into [`Key::Other`] and ignored by the
/// dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Commits the current selection and ends the session.
    Confirm,
    ArrowUp,
    ArrowDown,
    /// Starts incremental search when none is active.
    Slash,
    Backspace,
    /// A decodable printable character (tab included).
    Char(char),
    /// Any key the menu does not react to.
    Other,
}

/// Whether a decoded character may be appended to the search buffer.
///
/// Control characters are not renderable on the search line; tab is the one
/// exception and gets a wider cursor offset when erased again.
#[must_use]
pub fn is_appendable(ch: char) -> bool {
    ch == '\t' || !ch.is_control()
}

/// Blocking source of key events, scoped by `init`/`deinit`.
pub trait EventSource {
    /// Switch the terminal into raw mode.
    fn init(&mut self) -> Result<(), MenuError>;

    /// Block until the next key event arrives. The only suspension point in
    /// the menu loop.
    fn readch(&mut self) -> Result<Key, MenuError>;

    /// Restore the terminal to cooked mode.
    fn deinit(&mut self) -> Result<(), MenuError>;
}

/// Live [`EventSource`] backed by crossterm's event stream.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn init(&mut self) -> Result<(), MenuError> {
        enable_raw_mode()?;
        Ok(())
    }

    fn readch(&mut self) -> Result<Key, MenuError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(decode(key.code));
                }
                // Repeats, releases, focus changes and resizes fall through;
                // the loop picks resizes up from the geometry probe instead.
                _ => {}
            }
        }
    }

    fn deinit(&mut self) -> Result<(), MenuError> {
        disable_raw_mode()?;
        Ok(())
    }
}

fn decode(code: KeyCode) -> Key {
    match code {
        KeyCode::Enter => Key::Confirm,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Char('\t'),
        KeyCode::Char('/') => Key::Slash,
        KeyCode::Char(ch) if is_appendable(ch) => Key::Char(ch),
        _ => Key::Other,
    }
}

/// Drop guard tying raw mode to a lexical scope.
///
/// Constructed right after `init` succeeds; whichever way the menu loop ends,
/// the destructor restores cooked mode. A deinit failure inside `drop` is
/// swallowed since there is no caller left to surface it to.
pub(crate) struct RawInput<'a, E: EventSource> {
    source: &'a mut E,
}

impl<'a, E: EventSource> RawInput<'a, E> {
    pub(crate) fn acquire(source: &'a mut E) -> Result<Self, MenuError> {
        source.init()?;
        Ok(Self { source })
    }

    pub(crate) fn readch(&mut self) -> Result<Key, MenuError> {
        self.source.readch()
    }
}

impl<E: EventSource> Drop for RawInput<'_, E> {
    fn drop(&mut self) {
        let _ = self.source.deinit();
    }
}
