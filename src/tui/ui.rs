//! Rendering. Nothing here mutates the session or talks to the provider,
//! so any of it can be called as often as the loop likes.

use std::fmt::Write;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{Screen, Session};
use crate::tui::component::Component;
use crate::tui::components::{MenuView, PromptView, ResultView, TitleBar};

const MENU_HINT: &str = "Press q to quit, arrow keys to navigate, enter to select.";
const INPUT_HINT: &str = "Press Enter to execute, Esc to cancel, Ctrl+C to quit.";
const RESULT_HINT: &str = "Press Enter or Space to continue, Ctrl+C to quit.";

pub fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Menu => MENU_HINT,
        Screen::InputCollection => INPUT_HINT,
        Screen::ResultDisplay => RESULT_HINT,
    }
}

fn section(session: &Session) -> &'static str {
    match (session.screen, session.selected) {
        (Screen::Menu, _) => "Menu",
        (Screen::ResultDisplay, _) => "Result",
        (Screen::InputCollection, Some(kind)) => kind.label(),
        (Screen::InputCollection, None) => "Input",
    }
}

/// Plain-text view of the session, one screen's worth.
pub fn render_text(session: &Session) -> String {
    let mut out = String::from("Desktop Automation CLI\n\n");
    match session.screen {
        Screen::Menu => {
            for (i, item) in session.menu_items().iter().enumerate() {
                let marker = if i == session.cursor { ">" } else { " " };
                let _ = writeln!(out, "{marker} {}", item.label);
            }
        }
        Screen::InputCollection => {
            if let Some(kind) = session.selected {
                let _ = writeln!(out, "Selected: {}\n", kind.label());
                let _ = writeln!(out, "{}", kind.prompt());
            }
            let _ = writeln!(out, "> {}", session.input);
        }
        Screen::ResultDisplay => {
            let _ = writeln!(
                out,
                "Result:\n\n{}",
                session.last_result.as_deref().unwrap_or("")
            );
        }
    }
    let _ = writeln!(out, "\n{}", hint(session.screen));
    out
}

/// Draw the session. `progress` is the dots emitted so far by a smooth move
/// still in flight; `None` when nothing is running.
pub fn draw_ui(frame: &mut Frame, session: &Session, progress: Option<&str>) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _gap, main_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(section(session)).render(frame, title_area);

    match session.screen {
        // Argument-less actions run from the menu; the hint line shows activity
        Screen::Menu => {
            MenuView::new(session.menu_items(), session.cursor).render(frame, main_area);
        }
        Screen::InputCollection => {
            let kind = session.selected;
            PromptView {
                label: kind.map(|k| k.label()).unwrap_or(""),
                prompt: kind.map(|k| k.prompt()).unwrap_or(""),
                input: &session.input,
                progress,
            }
            .render(frame, main_area);
        }
        Screen::ResultDisplay => {
            ResultView {
                text: session.last_result.as_deref().unwrap_or(""),
            }
            .render(frame, main_area);
        }
    }

    let hint_text = match progress {
        Some(_) => "Working...",
        None => hint(session.screen),
    };
    frame.render_widget(
        Span::styled(hint_text, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}
