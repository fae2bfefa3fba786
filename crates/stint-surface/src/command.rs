//! Input command mapping
//!
//! The display has exactly two inputs: toggle the timers and quit.
//! Everything else the terminal reports is ignored.

use crossterm::event::{Event, KeyCode, KeyEventKind};

/// A display input command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start or stop the visible timers (Space)
    ToggleTimer,
    /// Tear the display down (Escape)
    Quit,
}

/// Translate a terminal event into a command
///
/// Only key presses fire; releases and repeats are dropped (some
/// terminals report them with the keyboard enhancement flags on).
pub fn map_event(event: &Event) -> Option<Command> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(Command::ToggleTimer),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_space_toggles() {
        assert_eq!(
            map_event(&press(KeyCode::Char(' '))),
            Some(Command::ToggleTimer)
        );
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(map_event(&press(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_event(&press(KeyCode::Char('q'))), None);
        assert_eq!(map_event(&press(KeyCode::Enter)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key)), None);
    }
}
