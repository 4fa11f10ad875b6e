use std::io;

use thiserror::Error;

/// Errors that can surface while a menu session is on screen.
///
/// Undecodable key input is not an error (it is ignored), and a terminal
/// resize is handled in the loop itself. Everything listed here aborts the
/// session after the terminal has been restored to cooked mode.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The terminal geometry could not be probed. Without a size there is no
    /// safe way to draw or erase the menu, so this always propagates.
    #[error("terminal geometry unavailable")]
    Geometry {
        #[source]
        source: io::Error,
    },

    /// Writing to the terminal or reading a key event failed.
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}
