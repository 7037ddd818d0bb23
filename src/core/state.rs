//! # Session State
//!
//! Everything the interactive session remembers between key presses.
//! This module contains domain data only - no terminal types. Presentation
//! state (progress dots during a smooth move) lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── screen: Screen               // Menu / InputCollection / ResultDisplay
//! ├── menu_items: Vec<MenuItem>    // fixed after construction
//! ├── cursor: usize                // always < menu_items.len()
//! ├── input: String                // only grows in InputCollection
//! ├── last_result: Option<String>  // set when entering ResultDisplay
//! └── selected: Option<ActionKind> // item chosen when leaving Menu
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

/// Which view the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    InputCollection,
    ResultDisplay,
}

/// What a menu entry does when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    MoveMouse,
    SmoothMove,
    ClickMouse,
    TypeText,
    CursorPosition,
    ScreenSize,
    Quit,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::MoveMouse => "Move Mouse",
            ActionKind::SmoothMove => "Smooth Move Mouse",
            ActionKind::ClickMouse => "Click Mouse",
            ActionKind::TypeText => "Type Text",
            ActionKind::CursorPosition => "Get Mouse Position",
            ActionKind::ScreenSize => "Get Screen Size",
            ActionKind::Quit => "Quit",
        }
    }

    /// Whether the session must collect text before dispatching this action.
    pub fn requires_input(self) -> bool {
        matches!(
            self,
            ActionKind::MoveMouse
                | ActionKind::SmoothMove
                | ActionKind::ClickMouse
                | ActionKind::TypeText
        )
    }

    /// Prompt shown above the input line. Empty for argument-less actions.
    pub fn prompt(self) -> &'static str {
        match self {
            ActionKind::MoveMouse | ActionKind::SmoothMove | ActionKind::ClickMouse => {
                "Enter X Y coordinates (e.g., 100 200):"
            }
            ActionKind::TypeText => "Enter text to type:",
            ActionKind::CursorPosition | ActionKind::ScreenSize | ActionKind::Quit => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub kind: ActionKind,
}

impl From<ActionKind> for MenuItem {
    fn from(kind: ActionKind) -> Self {
        Self {
            label: kind.label(),
            kind,
        }
    }
}

/// The menu every session starts with, in display order.
pub fn default_menu() -> Vec<MenuItem> {
    [
        ActionKind::MoveMouse,
        ActionKind::SmoothMove,
        ActionKind::ClickMouse,
        ActionKind::TypeText,
        ActionKind::CursorPosition,
        ActionKind::ScreenSize,
        ActionKind::Quit,
    ]
    .into_iter()
    .map(MenuItem::from)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
    menu_items: Vec<MenuItem>,
    pub cursor: usize,
    pub input: String,
    pub last_result: Option<String>,
    pub selected: Option<ActionKind>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            menu_items: default_menu(),
            cursor: 0,
            input: String::new(),
            last_result: None,
            selected: None,
        }
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    /// The item under the menu cursor.
    pub fn current_item(&self) -> MenuItem {
        self.menu_items[self.cursor]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
