//! The interactive read-evaluate-redraw loop.

use log::{debug, trace};

use crate::error::MenuError;
use crate::menu::actions::{self, Transition};
use crate::menu::state::Session;
use crate::menu::{Menu, MenuOutcome};
use crate::terminal::Console;
use crate::terminal::input::{EventSource, RawInput};

use super::filter;

/// Run the menu to completion against the given event source and console.
///
/// Raw mode is held for exactly the duration of this function: the
/// [`RawInput`] guard restores the terminal on every exit path, the error
/// ones included.
pub(crate) fn run<E, C>(menu: &Menu, events: &mut E, console: &mut C) -> Result<MenuOutcome, MenuError>
where
    E: EventSource,
    C: Console,
{
    let mut input = RawInput::acquire(events)?;
    let mut session = Session::new(menu.default_index, menu.options.len(), console.size()?);

    console.print_lines(&frame(menu, &session), &session.search)?;

    loop {
        // Probe before blocking so a resize that happened while we were
        // waiting never gets erased with stale counts.
        let geometry = console.size()?;
        if geometry != session.geometry {
            debug!(
                "terminal resized to {}x{}, redrawing",
                geometry.columns, geometry.lines
            );
            session.geometry = geometry;
            console.clear()?;
            console.print_lines(&frame(menu, &session), &session.search)?;
        }

        let key = input.readch()?;
        trace!("key event: {key:?}");
        match actions::apply(&mut session, key) {
            Transition::Confirm => break,
            Transition::Erased { cols } => console.cursor_backwards(cols)?,
            Transition::Continue => {}
        }

        let visible_len = filter::visible(&menu.options, &session.search).len();
        session.clamp_to(visible_len);

        console.delete_all_lines(&session.search, session.geometry.lines)?;
        console.print_lines(&frame(menu, &session), &session.search)?;
    }

    if menu.clear_on_exit {
        console.delete_all_lines(&session.search, session.geometry.lines)?;
    } else {
        let below = session
            .geometry
            .lines
            .saturating_sub(menu.options.len() as u16)
            .saturating_sub(1);
        console.delete_lines(below)?;
    }
    drop(input);

    let visible = filter::visible(&menu.options, &session.search);
    let label = visible
        .get(session.selected)
        .map(|option| (*option).to_string());
    let index = if visible.is_empty() {
        None
    } else {
        Some(session.selected)
    };
    debug!("menu confirmed: index {index:?}");

    Ok(MenuOutcome {
        index,
        label,
        query: filter::pattern(&session.search).to_string(),
    })
}

fn frame(menu: &Menu, session: &Session) -> Vec<String> {
    filter::printable_lines(
        &menu.options,
        &session.search,
        session.selected,
        session.geometry.columns,
        &menu.prechar,
        &menu.theme,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;
    use crate::terminal::Geometry;
    use crate::terminal::input::Key;
    use crate::theme::Theme;

    struct ScriptedEvents {
        keys: VecDeque<Key>,
        inits: usize,
        deinits: usize,
        fail_reads: bool,
    }

    impl ScriptedEvents {
        fn new(keys: impl IntoIterator<Item = Key>) -> Self {
            Self {
                keys: keys.into_iter().collect(),
                inits: 0,
                deinits: 0,
                fail_reads: false,
            }
        }

        fn failing() -> Self {
            let mut events = Self::new([]);
            events.fail_reads = true;
            events
        }
    }

    impl EventSource for ScriptedEvents {
        fn init(&mut self) -> Result<(), MenuError> {
            self.inits += 1;
            Ok(())
        }

        fn readch(&mut self) -> Result<Key, MenuError> {
            if self.fail_reads {
                return Err(MenuError::Io(io::Error::other("event source failed")));
            }
            self.keys.pop_front().ok_or_else(|| {
                MenuError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                ))
            })
        }

        fn deinit(&mut self) -> Result<(), MenuError> {
            self.deinits += 1;
            Ok(())
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        PrintLines { lines: Vec<String>, search: String },
        DeleteLines(u16),
        DeleteAllLines { lines: u16 },
        Clear,
        CursorBackwards(u16),
    }

    struct TestConsole {
        sizes: Vec<Geometry>,
        calls: Vec<Call>,
    }

    impl TestConsole {
        fn new() -> Self {
            Self::with_sizes([Geometry {
                lines: 24,
                columns: 80,
            }])
        }

        /// Sizes are consumed one probe at a time; the last one repeats.
        fn with_sizes(sizes: impl IntoIterator<Item = Geometry>) -> Self {
            Self {
                sizes: sizes.into_iter().collect(),
                calls: Vec::new(),
            }
        }
    }

    impl Console for TestConsole {
        fn size(&mut self) -> Result<Geometry, MenuError> {
            if self.sizes.len() > 1 {
                Ok(self.sizes.remove(0))
            } else {
                Ok(self.sizes[0])
            }
        }

        fn print_lines(&mut self, lines: &[String], search: &str) -> Result<(), MenuError> {
            self.calls.push(Call::PrintLines {
                lines: lines.to_vec(),
                search: search.to_string(),
            });
            Ok(())
        }

        fn delete_lines(&mut self, count: u16) -> Result<(), MenuError> {
            self.calls.push(Call::DeleteLines(count));
            Ok(())
        }

        fn delete_all_lines(&mut self, _search: &str, lines: u16) -> Result<(), MenuError> {
            self.calls.push(Call::DeleteAllLines { lines });
            Ok(())
        }

        fn clear(&mut self) -> Result<(), MenuError> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn cursor_backwards(&mut self, times: u16) -> Result<(), MenuError> {
            self.calls.push(Call::CursorBackwards(times));
            Ok(())
        }
    }

    fn menu() -> Menu {
        Menu::new(["Alpha", "Beta", "Gamma"]).with_theme(Theme::plain())
    }

    fn show(menu: &Menu, keys: impl IntoIterator<Item = Key>) -> (MenuOutcome, TestConsole) {
        let mut events = ScriptedEvents::new(keys);
        let mut console = TestConsole::new();
        let outcome = run(menu, &mut events, &mut console).expect("menu run");
        assert_eq!(events.inits, 1);
        assert_eq!(events.deinits, 1);
        (outcome, console)
    }

    #[test]
    fn two_arrow_downs_select_the_third_option() {
        let (outcome, _) = show(&menu(), [Key::ArrowDown, Key::ArrowDown, Key::Confirm]);
        assert_eq!(outcome.index, Some(2));
        assert_eq!(outcome.label.as_deref(), Some("Gamma"));
        assert_eq!(outcome.query, "");
    }

    #[test]
    fn down_then_up_returns_to_the_default() {
        let menu = menu().with_default_index(1);
        let (outcome, _) = show(&menu, [Key::ArrowDown, Key::ArrowUp, Key::Confirm]);
        assert_eq!(outcome.index, Some(1));
    }

    #[test]
    fn selection_saturates_at_both_ends() {
        let (outcome, _) = show(&menu(), [Key::ArrowUp, Key::ArrowUp, Key::Confirm]);
        assert_eq!(outcome.index, Some(0));

        let downs = [
            Key::ArrowDown,
            Key::ArrowDown,
            Key::ArrowDown,
            Key::ArrowDown,
            Key::ArrowDown,
            Key::Confirm,
        ];
        let (outcome, _) = show(&menu(), downs);
        assert_eq!(outcome.index, Some(2));
    }

    #[test]
    fn searching_narrows_selection_to_the_filtered_list() {
        let (outcome, console) = show(&menu(), [Key::Slash, Key::Char('B'), Key::Confirm]);
        assert_eq!(outcome.index, Some(0));
        assert_eq!(outcome.label.as_deref(), Some("Beta"));
        assert_eq!(outcome.query, "B");

        let last_frame = console
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::PrintLines { lines, .. } => Some(lines.clone()),
                _ => None,
            })
            .expect("at least one frame");
        assert_eq!(last_frame, vec!["> Beta\u{1b}[0m".to_string()]);
    }

    #[test]
    fn confirm_on_an_empty_filtered_list_selects_nothing() {
        let (outcome, _) = show(&menu(), [Key::Slash, Key::Char('Z'), Key::Confirm]);
        assert_eq!(outcome.index, None);
        assert_eq!(outcome.label, None);
        assert_eq!(outcome.query, "Z");
    }

    #[test]
    fn erasing_the_marker_restores_the_full_list() {
        let (outcome, console) = show(&menu(), [
            Key::Slash,
            Key::Char('B'),
            Key::Backspace,
            Key::Backspace,
            Key::Confirm,
        ]);
        assert_eq!(outcome.index, Some(0));
        assert_eq!(outcome.query, "");

        let last_frame = console
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::PrintLines { lines, .. } => Some(lines.len()),
                _ => None,
            })
            .expect("at least one frame");
        assert_eq!(last_frame, 3, "unfiltered list should be back on screen");
    }

    #[test]
    fn backspace_walks_the_cursor_back() {
        let (_, console) = show(&menu(), [
            Key::Slash,
            Key::Char('q'),
            Key::Backspace,
            Key::Confirm,
        ]);
        assert!(console.calls.contains(&Call::CursorBackwards(1)));
    }

    #[test]
    fn empty_option_list_renders_and_selects_nothing() {
        let menu = Menu::new(Vec::<String>::new());
        let (outcome, console) = show(&menu, [Key::Confirm]);
        assert_eq!(outcome.index, None);
        assert!(matches!(
            console.calls.first(),
            Some(Call::PrintLines { lines, .. }) if lines.is_empty()
        ));
    }

    #[test]
    fn clear_on_exit_erases_the_whole_frame() {
        let (_, console) = show(&menu(), [Key::Confirm]);
        assert_eq!(console.calls.last(), Some(&Call::DeleteAllLines {
            lines: 24
        }));
    }

    #[test]
    fn keep_menu_erases_only_the_rows_below_the_options() {
        let menu = menu().with_clear_on_exit(false);
        let (_, console) = show(&menu, [Key::Confirm]);
        // 24 terminal rows, 3 options, one search row.
        assert_eq!(console.calls.last(), Some(&Call::DeleteLines(20)));
    }

    #[test]
    fn resize_between_polls_redraws_with_fresh_geometry() {
        let before = Geometry {
            lines: 24,
            columns: 80,
        };
        let after = Geometry {
            lines: 10,
            columns: 40,
        };
        let mut events = ScriptedEvents::new([Key::ArrowDown, Key::Confirm]);
        let mut console = TestConsole::with_sizes([before, after]);
        run(&menu(), &mut events, &mut console).expect("menu run");

        assert!(
            console.calls.contains(&Call::Clear),
            "resize should clear the screen before redrawing"
        );
        let erase_counts: Vec<u16> = console
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::DeleteAllLines { lines } => Some(*lines),
                _ => None,
            })
            .collect();
        assert!(!erase_counts.is_empty());
        assert!(
            erase_counts.iter().all(|lines| *lines == after.lines),
            "every erase after the resize must use the new geometry: {erase_counts:?}"
        );
    }

    #[test]
    fn a_failing_event_source_still_restores_the_terminal() {
        let mut events = ScriptedEvents::failing();
        let mut console = TestConsole::new();
        let result = run(&menu(), &mut events, &mut console);
        assert!(result.is_err());
        assert_eq!(events.inits, 1);
        assert_eq!(events.deinits, 1, "raw mode must be released on error");
    }
}
