//! Inline terminal selection menu.
//!
//! `linepick` renders a list of options in place (no alternate screen),
//! lets the user move with the arrow keys, narrow the list with `/`-prefixed
//! incremental search, and commit with Enter. The root module re-exports the
//! types an embedder needs so nothing has to be dug out of the module tree.
//!
//! ```no_run
//! use linepick::Menu;
//!
//! let picked = Menu::new(["staging", "production"]).show()?;
//! # Ok::<(), linepick::MenuError>(())
//! ```

pub mod error;
pub mod menu;
pub mod terminal;
pub mod theme;

pub use error::MenuError;
pub use menu::{Menu, MenuOutcome};
pub use terminal::input::{CrosstermEvents, EventSource, Key, is_appendable};
pub use terminal::{AnsiConsole, Console, Geometry};
pub use theme::Theme;
