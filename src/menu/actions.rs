//! Key dispatch: one keystroke in, one state transition out.

use crate::menu::state::Session;
use crate::terminal::input::{Key, is_appendable};

/// Columns the cursor walks back when a tab is erased from the search line;
/// matches the width the terminal rendered the tab with.
const TAB_ERASE_COLUMNS: u16 = 7;

/// Outcome of dispatching a single key against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// State may have changed; keep looping.
    Continue,
    /// The confirm key ended the session.
    Confirm,
    /// A search character was erased; the hardware cursor must move back by
    /// `cols` columns to stay aligned with the shortened search line.
    Erased { cols: u16 },
}

/// Interpret `key` against the current session state.
///
/// Selection clamping is deliberately not done here; the loop re-clamps
/// against the freshly filtered list after every dispatch.
pub(crate) fn apply(session: &mut Session, key: Key) -> Transition {
    match key {
        Key::Confirm => return Transition::Confirm,
        Key::ArrowUp => session.selected = session.selected.saturating_sub(1),
        Key::ArrowDown => session.selected = session.selected.saturating_add(1),
        Key::Slash if !session.searching() => session.search.push('/'),
        _ if session.searching() => match key {
            Key::Backspace => {
                // The buffer is non-empty while searching, so there is
                // always a character to pop; popping the marker itself
                // ends search mode.
                if let Some(removed) = session.search.pop() {
                    let cols = if removed == '\t' { TAB_ERASE_COLUMNS } else { 1 };
                    return Transition::Erased { cols };
                }
            }
            Key::Char(ch) if is_appendable(ch) => session.search.push(ch),
            _ => {}
        },
        _ => {}
    }
    Transition::Continue
}
