use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Terminal input events, before the session interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Submit,
    Escape,
    CursorUp,
    CursorDown,
    ForceQuit, // Ctrl+C, quits from any screen
    Resize,
}

impl TuiEvent {
    /// Session actions this event stands for. Pastes expand to one `Char`
    /// per character; resizes only need a redraw.
    pub fn into_actions(self) -> Vec<Action> {
        match self {
            TuiEvent::InputChar(c) => vec![Action::Char(c)],
            TuiEvent::Paste(text) => text
                .chars()
                .filter(|c| !c.is_control())
                .map(Action::Char)
                .collect(),
            TuiEvent::Backspace => vec![Action::Backspace],
            TuiEvent::Submit => vec![Action::Confirm],
            TuiEvent::Escape => vec![Action::Cancel],
            TuiEvent::CursorUp => vec![Action::Up],
            TuiEvent::CursorDown => vec![Action::Down],
            TuiEvent::ForceQuit => vec![Action::Quit],
            TuiEvent::Resize => Vec::new(),
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            translate_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            translate_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('q'))
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('Q'))
        );
    }

    #[test]
    fn test_other_control_chords_ignored() {
        assert_eq!(translate_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate_key(key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_key(release), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate_key(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::CursorUp));
        assert_eq!(translate_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Escape));
        assert_eq!(translate_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_paste_expands_to_chars() {
        let actions = TuiEvent::Paste("12 3\n".to_string()).into_actions();
        assert_eq!(
            actions,
            vec![Action::Char('1'), Action::Char('2'), Action::Char(' '), Action::Char('3')]
        );
    }

    #[test]
    fn test_resize_has_no_action() {
        assert!(TuiEvent::Resize.into_actions().is_empty());
        assert_eq!(TuiEvent::ForceQuit.into_actions(), vec![Action::Quit]);
    }
}
