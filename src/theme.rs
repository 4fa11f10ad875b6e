//! Highlight styling for the selected menu entry.
//!
//! A [`Theme`] is a pair of optional crossterm style tokens: a foreground
//! color and a text attribute. The formatter prepends the rendered tokens to
//! the selected row and terminates every row with an SGR reset, so a theme
//! never leaks past the line it styles.

use std::fmt::Write as _;

use crossterm::style::{SetAttribute, SetForegroundColor};
pub use crossterm::style::{Attribute, Color};

/// Color and style applied to the currently selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: Option<Color>,
    pub style: Option<Attribute>,
}

impl Theme {
    /// A theme that leaves the selected row unstyled.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            color: None,
            style: None,
        }
    }

    /// Render the SGR prefix that switches the terminal into this theme.
    ///
    /// Empty when both tokens are unset, which keeps plain themes free of
    /// stray escape sequences.
    #[must_use]
    pub fn highlight_prefix(&self) -> String {
        let mut prefix = String::new();
        if let Some(color) = self.color {
            let _ = write!(prefix, "{}", SetForegroundColor(color));
        }
        if let Some(style) = self.style {
            let _ = write!(prefix, "{}", SetAttribute(style));
        }
        prefix
    }

    /// The SGR reset appended to every formatted row.
    #[must_use]
    pub fn reset() -> String {
        SetAttribute(Attribute::Reset).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Underline the selection, keep the terminal's own foreground color.
        Self {
            color: None,
            style: Some(Attribute::Underlined),
        }
    }
}

const BUILTINS: &[(&str, Theme)] = &[
    ("default", Theme {
        color: None,
        style: Some(Attribute::Underlined),
    }),
    ("plain", Theme::plain()),
    ("cyan", Theme {
        color: Some(Color::Cyan),
        style: None,
    }),
    ("amber-bold", Theme {
        color: Some(Color::DarkYellow),
        style: Some(Attribute::Bold),
    }),
    ("green-reverse", Theme {
        color: Some(Color::Green),
        style: Some(Attribute::Reverse),
    }),
];

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, theme)| *theme)
}
