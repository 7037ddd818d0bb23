//! # TUI Components
//!
//! One component per region of the screen.
//!
//! - `TitleBar`: Top line with the app name and current view
//! - `MenuView`: Selectable action list with the cursor marker
//! - `PromptView`: Selected action, its prompt, the live input line and
//!   smooth-move progress
//! - `ResultView`: Outcome of the last action, colored by kind
//!
//! All are stateless: props are borrowed from the `Session` (and the TUI's
//! progress string) for one frame and dropped afterwards.

mod menu;
mod prompt;
mod result_view;
mod title_bar;

pub use menu::MenuView;
pub use prompt::PromptView;
pub use result_view::ResultView;
pub use title_bar::TitleBar;

/// Shared test helper: render into a `TestBackend` and flatten the buffer.
#[cfg(test)]
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    component: &mut dyn crate::tui::component::Component,
) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
