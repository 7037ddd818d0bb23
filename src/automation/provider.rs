use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use clap::ValueEnum;

/// Errors surfaced by an automation backend.
///
/// The session never retries or reinterprets these; they are shown to the
/// user as-is (interactive mode) or end the process (one-shot mode).
#[derive(Debug)]
pub enum ProviderError {
    /// The input backend refused or failed the operation (e.g. missing
    /// accessibility permission, no display connection).
    Backend(String),
    /// Screen capture or saving the captured image failed.
    Capture(String),
    /// The blocking worker running the operation panicked or was cancelled.
    Task(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Backend(msg) => write!(f, "automation backend error: {msg}"),
            ProviderError::Capture(msg) => write!(f, "screen capture failed: {msg}"),
            ProviderError::Task(msg) => write!(f, "automation task failed: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn label(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }
}

/// OS-level mouse, keyboard and screen primitives.
///
/// Coordinates are absolute pixels from the top-left corner of the main
/// display. Implementations do no validation of their own; callers check
/// bounds first (see `core::validate`).
#[async_trait]
pub trait AutomationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Jump the pointer to `(x, y)`.
    async fn move_to(&self, x: i32, y: i32) -> Result<(), ProviderError>;

    /// Animate the pointer to `(x, y)` over roughly `duration`.
    async fn smooth_move(&self, x: i32, y: i32, duration: Duration) -> Result<(), ProviderError>;

    async fn click(
        &self,
        x: i32,
        y: i32,
        button: MouseButton,
        double: bool,
    ) -> Result<(), ProviderError>;

    async fn type_text(&self, text: &str) -> Result<(), ProviderError>;

    /// Type `text` one character at a time, pausing `delay` after each.
    async fn type_text_with_delay(&self, text: &str, delay: Duration) -> Result<(), ProviderError>;

    async fn cursor_position(&self) -> Result<(i32, i32), ProviderError>;

    async fn screen_size(&self) -> Result<(i32, i32), ProviderError>;

    /// Capture the main display to a PNG and return where it was written.
    async fn capture_screen(&self) -> Result<PathBuf, ProviderError>;
}
