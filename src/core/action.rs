//! # Actions
//!
//! Every key press the session cares about becomes an `Action`.
//! User presses Enter? That's `Action::Confirm`.
//! A dispatched command finishes? That's `Action::Completed(text)`.
//!
//! The `update()` function takes the current session and an action, mutates
//! the session, and returns an `Effect` telling the event loop what I/O to
//! perform. No side effects here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! Keys are interpreted per screen: `q` quits from the menu but is just a
//! letter while collecting input.

use log::debug;

use crate::core::state::{ActionKind, Screen, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Char(char),
    Backspace,
    /// Enter.
    Confirm,
    /// Escape.
    Cancel,
    /// Ctrl+C, honored on every screen.
    Quit,
    /// Outcome of a dispatched action, folded back in by the event loop.
    Completed(String),
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Run `kind` with the collected `input` and feed the outcome back as
    /// `Action::Completed`.
    Dispatch { kind: ActionKind, input: String },
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    if action == Action::Quit {
        return Effect::Quit;
    }
    if let Action::Completed(text) = action {
        session.last_result = Some(text);
        session.screen = Screen::ResultDisplay;
        return Effect::None;
    }

    match session.screen {
        Screen::Menu => update_menu(session, action),
        Screen::InputCollection => update_input(session, action),
        Screen::ResultDisplay => update_result(session, action),
    }
}

fn update_menu(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Up | Action::Char('k') => {
            session.cursor = session.cursor.saturating_sub(1);
            Effect::None
        }
        Action::Down | Action::Char('j') => {
            let last = session.menu_items().len() - 1;
            session.cursor = (session.cursor + 1).min(last);
            Effect::None
        }
        Action::Char('q') => Effect::Quit,
        Action::Confirm | Action::Char(' ') => select(session),
        _ => Effect::None,
    }
}

fn select(session: &mut Session) -> Effect {
    let kind = session.current_item().kind;
    debug!("Selected {:?}", kind);
    if kind == ActionKind::Quit {
        return Effect::Quit;
    }

    session.selected = Some(kind);
    if kind.requires_input() {
        session.input.clear();
        session.screen = Screen::InputCollection;
        Effect::None
    } else {
        Effect::Dispatch {
            kind,
            input: String::new(),
        }
    }
}

fn update_input(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Char(c) => {
            session.input.push(c);
            Effect::None
        }
        Action::Backspace => {
            session.input.pop();
            Effect::None
        }
        Action::Cancel => {
            session.input.clear();
            session.screen = Screen::Menu;
            Effect::None
        }
        Action::Confirm => match session.selected {
            Some(kind) => Effect::Dispatch {
                kind,
                input: session.input.clone(),
            },
            None => {
                session.screen = Screen::Menu;
                Effect::None
            }
        },
        _ => Effect::None,
    }
}

fn update_result(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Confirm | Action::Cancel | Action::Char(' ') => {
            session.last_result = None;
            session.screen = Screen::Menu;
            Effect::None
        }
        _ => Effect::None,
    }
}
