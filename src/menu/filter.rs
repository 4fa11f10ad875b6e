//! Pure derivation of the visible, display-ready option rows.
//!
//! Everything here is a function of explicit inputs (option list, search
//! buffer, selection index, geometry) with no side effects, so the menu loop
//! can recompute the frame from scratch on every iteration and the tests can
//! exercise filtering and formatting without a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// The user-typed search text: the buffer minus its leading `/` marker.
pub(crate) fn pattern(search: &str) -> &str {
    search.strip_prefix('/').unwrap_or(search)
}

/// Options currently eligible for display and selection.
///
/// An active search keeps the options whose text starts with the pattern,
/// matched literally and case-sensitively; metacharacters carry no meaning.
/// An empty buffer (not searching) and a bare `/` marker both keep the full
/// list.
pub(crate) fn visible<'a>(options: &'a [String], search: &str) -> Vec<&'a str> {
    let pattern = pattern(search);
    options
        .iter()
        .map(String::as_str)
        .filter(|option| option.starts_with(pattern))
        .collect()
}

/// Build the styled rows for one frame.
///
/// The row at `selected` within the filtered list gets the theme's highlight
/// prefix; every row is prefixed with `prechar`, truncated to the terminal
/// width and terminated with a style reset.
pub(crate) fn printable_lines(
    options: &[String],
    search: &str,
    selected: usize,
    columns: u16,
    prechar: &str,
    theme: &Theme,
) -> Vec<String> {
    let budget = (columns as usize).saturating_sub(prechar.width());
    let reset = Theme::reset();

    visible(options, search)
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let label = truncate(option, budget);
            if index == selected {
                format!("{prechar}{}{label}{reset}", theme.highlight_prefix())
            } else {
                format!("{prechar}{label}{reset}")
            }
        })
        .collect()
}

/// Longest prefix of `label` that fits into `budget` terminal columns.
fn truncate(label: &str, budget: usize) -> &str {
    let mut used = 0;
    for (offset, ch) in label.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > budget {
            return &label[..offset];
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["Alpha", "Beta", "Gamma"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_search_keeps_every_option() {
        assert_eq!(visible(&options(), ""), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn bare_marker_keeps_every_option() {
        assert_eq!(visible(&options(), "/"), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn search_filters_by_literal_prefix() {
        assert_eq!(visible(&options(), "/B"), vec!["Beta"]);
        assert_eq!(visible(&options(), "/Ga"), vec!["Gamma"]);
        assert!(visible(&options(), "/Z").is_empty());
    }

    #[test]
    fn filtering_is_case_sensitive() {
        assert!(visible(&options(), "/b").is_empty());
    }

    #[test]
    fn regex_metacharacters_have_no_special_effect() {
        let options: Vec<String> = ["C++", "C#", ".hidden"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(visible(&options, "/C+"), vec!["C++"]);
        assert_eq!(visible(&options, "/."), vec![".hidden"]);
        assert!(visible(&options, "/C.").is_empty());
    }

    #[test]
    fn duplicate_options_are_kept_by_position() {
        let options: Vec<String> = ["same", "same"].into_iter().map(String::from).collect();
        assert_eq!(visible(&options, ""), vec!["same", "same"]);
    }

    #[test]
    fn selected_row_is_highlighted_and_every_row_reset() {
        let lines = printable_lines(&options(), "", 1, 80, "> ", &Theme::default());
        assert_eq!(lines, vec![
            "> Alpha\u{1b}[0m".to_string(),
            "> \u{1b}[4mBeta\u{1b}[0m".to_string(),
            "> Gamma\u{1b}[0m".to_string(),
        ]);
    }

    #[test]
    fn plain_theme_rows_still_end_with_reset() {
        let lines = printable_lines(&options(), "", 0, 80, "> ", &Theme::plain());
        assert_eq!(lines[0], "> Alpha\u{1b}[0m");
    }

    #[test]
    fn highlight_follows_the_filtered_list_not_the_full_list() {
        let lines = printable_lines(&options(), "/G", 0, 80, "> ", &Theme::default());
        assert_eq!(lines, vec!["> \u{1b}[4mGamma\u{1b}[0m".to_string()]);
    }

    #[test]
    fn empty_filtered_list_formats_to_no_rows() {
        assert!(printable_lines(&options(), "/zzz", 0, 80, "> ", &Theme::default()).is_empty());
    }

    #[test]
    fn rows_are_truncated_to_the_terminal_width() {
        let lines = printable_lines(&options(), "", 2, 6, "> ", &Theme::plain());
        assert_eq!(lines[0], "> Alph\u{1b}[0m");
        assert_eq!(lines[2], "> Gamm\u{1b}[0m");
    }

    #[test]
    fn truncation_counts_display_width_not_bytes() {
        let options: Vec<String> = vec!["日本語メニュー".to_string()];
        let lines = printable_lines(&options, "", 0, 8, "> ", &Theme::plain());
        // Three double-width glyphs fill the six remaining columns.
        assert_eq!(lines[0], "> 日本語\u{1b}[0m");
    }
}
