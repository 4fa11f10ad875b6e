//! Per-session mutable state.
//!
//! One [`Session`] is created at the start of every `show` call by copying
//! the configured default index into a fresh value, mutated in place through
//! the loop and discarded when the session ends. Nothing here is shared
//! between sessions.

use crate::terminal::Geometry;

#[derive(Debug)]
pub(crate) struct Session {
    /// Index into the currently visible (filtered) option list. Invariant:
    /// `selected < max(1, visible_len)`, restored by [`Session::clamp_to`]
    /// after every mutation.
    pub(crate) selected: usize,
    /// Empty when not searching; otherwise starts with the `/` marker
    /// followed by the typed pattern.
    pub(crate) search: String,
    /// Geometry the current frame was drawn under, refreshed every iteration
    /// to detect resizes.
    pub(crate) geometry: Geometry,
}

impl Session {
    pub(crate) fn new(default_index: usize, option_count: usize, geometry: Geometry) -> Self {
        let mut session = Self {
            selected: default_index,
            search: String::new(),
            geometry,
        };
        session.clamp_to(option_count);
        session
    }

    /// Search mode is active exactly while the buffer holds the marker.
    pub(crate) fn searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Clamp the selection into `[0, max(0, visible_len - 1)]`. Saturates,
    /// never wraps, and pins to zero when the visible list is empty.
    pub(crate) fn clamp_to(&mut self, visible_len: usize) {
        self.selected = self.selected.min(visible_len.saturating_sub(1));
    }
}
