use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;

/// Input collection view: which action was picked, what to type, and the
/// live buffer. While a smooth move runs, `progress` holds the dots emitted
/// so far.
pub struct PromptView<'a> {
    pub label: &'a str,
    pub prompt: &'a str,
    pub input: &'a str,
    pub progress: Option<&'a str>,
}

impl Component for PromptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // "> " prefix + padding on both sides + room for the cursor cell
        let room = usize::from(area.width.saturating_sub(5));

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(self.label, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::raw(""),
            Line::raw(self.prompt),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Yellow)),
                Span::raw(visible_tail(self.input, room)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
        ];

        if let Some(dots) = self.progress {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!("Working{dots}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(paragraph, area);
    }
}

/// The longest suffix of `input` that fits in `width` terminal cells, so the
/// end of a long buffer (where the user is typing) stays visible.
fn visible_tail(input: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in input.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &input[idx + c.len_utf8()..];
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::render_to_string;

    #[test]
    fn test_visible_tail_fits() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("", 0), "");
    }

    #[test]
    fn test_visible_tail_counts_wide_chars() {
        // Each CJK char is two cells wide
        assert_eq!(visible_tail("日本語", 4), "本語");
        assert_eq!(visible_tail("日本語", 5), "本語");
    }

    #[test]
    fn test_prompt_shows_label_and_buffer() {
        let mut view = PromptView {
            label: "Move Mouse",
            prompt: "Enter X Y coordinates (e.g., 100 200):",
            input: "960 54",
            progress: None,
        };
        let text = render_to_string(60, 8, &mut view);
        assert!(text.contains("Selected: Move Mouse"));
        assert!(text.contains("Enter X Y coordinates"));
        assert!(text.contains("> 960 54"));
        assert!(!text.contains("Working"));
    }

    #[test]
    fn test_prompt_shows_progress() {
        let mut view = PromptView {
            label: "Smooth Move Mouse",
            prompt: "",
            input: "1 1",
            progress: Some("..."),
        };
        let text = render_to_string(60, 8, &mut view);
        assert!(text.contains("Working..."));
    }
}
