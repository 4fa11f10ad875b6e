//! The embeddable selection menu.
//!
//! [`Menu`] is the public builder; a `show`/`run` call owns the terminal for
//! its duration, drives the event loop in [`runtime`] and returns what the
//! user picked. The submodules split the loop the same way the state it
//! manages splits: per-session state, key dispatch, pure frame derivation,
//! and the loop itself.

mod actions;
mod filter;
mod runtime;
mod state;

use crate::error::MenuError;
use crate::terminal::AnsiConsole;
use crate::terminal::input::CrosstermEvents;
use crate::theme::Theme;

/// Builder for one interactive selection menu.
///
/// ```no_run
/// use linepick::Menu;
///
/// let picked = Menu::new(["Alpha", "Beta", "Gamma"])
///     .with_default_index(1)
///     .show()?;
/// # Ok::<(), linepick::MenuError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    pub(crate) options: Vec<String>,
    pub(crate) default_index: usize,
    pub(crate) prechar: String,
    pub(crate) clear_on_exit: bool,
    pub(crate) theme: Theme,
}

impl Menu {
    /// Create a menu over the given option labels. Duplicates are allowed
    /// and matched by position.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default_index: 0,
            prechar: "> ".to_string(),
            clear_on_exit: true,
            theme: Theme::default(),
        }
    }

    /// Entry highlighted when the menu opens. Clamped into range at the
    /// start of every session.
    #[must_use]
    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    /// Prefix placed before every option row.
    #[must_use]
    pub fn with_prechar(mut self, prechar: impl Into<String>) -> Self {
        self.prechar = prechar.into();
        self
    }

    /// Whether the menu erases itself from the terminal after confirm.
    #[must_use]
    pub fn with_clear_on_exit(mut self, clear: bool) -> Self {
        self.clear_on_exit = clear;
        self
    }

    /// Highlight styling for the selected row.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the menu and return the confirmed index within the visible
    /// (filtered) list, or `None` when the filtered list was empty at
    /// confirm time.
    pub fn show(&self) -> Result<Option<usize>, MenuError> {
        Ok(self.run()?.index)
    }

    /// Show the menu and return the full outcome, label included. Callers
    /// that filtered need this: a filtered index alone cannot be mapped
    /// back to a label.
    pub fn run(&self) -> Result<MenuOutcome, MenuError> {
        let mut events = CrosstermEvents::new();
        let mut console = AnsiConsole::stdout();
        runtime::run(self, &mut events, &mut console)
    }
}

/// What a finished menu session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOutcome {
    /// Confirmed index within the visible list, `None` when it was empty.
    pub index: Option<usize>,
    /// Label of the confirmed entry.
    pub label: Option<String>,
    /// Search text (without the marker) active at confirm time.
    pub query: String,
}
