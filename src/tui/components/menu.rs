use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};

use crate::core::state::MenuItem;
use crate::tui::component::Component;

/// The action list. The row under the cursor gets a `>` marker.
pub struct MenuView<'a> {
    items: &'a [MenuItem],
    list_state: ListState,
}

impl<'a> MenuView<'a> {
    pub fn new(items: &'a [MenuItem], cursor: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(cursor));
        Self { items, list_state }
    }
}

impl Component for MenuView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.label))
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_symbol("> ")
            .highlight_spacing(ratatui::widgets::HighlightSpacing::Always)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
