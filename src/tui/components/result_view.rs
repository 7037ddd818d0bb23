use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Outcome of the last dispatched action. Errors render red, warnings
/// yellow, everything else green.
pub struct ResultView<'a> {
    pub text: &'a str,
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw("Result:"),
            Line::raw(""),
            Line::styled(self.text, result_style(self.text)),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().padding(Padding::horizontal(1)))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn result_style(text: &str) -> Style {
    if text.starts_with("Error:") {
        Style::default().fg(Color::Red)
    } else if text.starts_with("Warning:") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    }
}
