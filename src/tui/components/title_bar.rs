//! # TitleBar Component
//!
//! Single top line: application name plus the view the session is in,
//! e.g. `Desktop Automation | Move Mouse`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    /// Current view (e.g. "Menu", "Type Text", "Result")
    pub section: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(section: &'a str) -> Self {
        Self { section }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Desktop Automation",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.section)),
        ]);
        frame.render_widget(line, area);
    }
}
