//! # Action Dispatcher
//!
//! Turns a menu selection plus the collected input into exactly one provider
//! call and a line of text describing what happened.
//!
//! ```text
//! (ActionKind, input) ─parse─→ ActionRequest ─execute─→ Result<String, DispatchError>
//!                                                          │
//!                               dispatch() flattens errors into "Error: …"
//! ```
//!
//! The interactive session uses [`Dispatcher::dispatch`], which never fails:
//! parse, validation and provider errors all become result text. One-shot
//! commands build an [`ActionRequest`] directly and call
//! [`Dispatcher::execute`] so errors can end the process.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::automation::{AutomationProvider, MouseButton, ProviderError};
use crate::core::config::ResolvedConfig;
use crate::core::progress::ProgressReporter;
use crate::core::state::ActionKind;
use crate::core::validate::{CoordinateError, validate};

pub const DEFAULT_TOLERANCE_PX: i32 = 2;
pub const DEFAULT_SMOOTH_DURATION: Duration = Duration::from_secs(1);

const COORDINATE_HINT: &str = "enter X Y coordinates (e.g., 100 200)";

#[derive(Debug)]
pub enum DispatchError {
    /// Collected input could not be turned into arguments.
    Parse(String),
    Validation(CoordinateError),
    Provider(ProviderError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Parse(msg) => write!(f, "{msg}"),
            DispatchError::Validation(e) => write!(f, "{e}"),
            DispatchError::Provider(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<CoordinateError> for DispatchError {
    fn from(e: CoordinateError) -> Self {
        DispatchError::Validation(e)
    }
}

impl From<ProviderError> for DispatchError {
    fn from(e: ProviderError) -> Self {
        DispatchError::Provider(e)
    }
}

/// A fully parsed action, ready for the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    Move { x: i32, y: i32 },
    SmoothMove { x: i32, y: i32, duration: Duration },
    Click { x: i32, y: i32, button: MouseButton, double: bool },
    Type { text: String, delay: Duration },
    CursorPosition,
    ScreenSize,
}

impl ActionRequest {
    /// Build a request from a menu selection and the raw input buffer.
    pub fn parse(
        kind: ActionKind,
        input: &str,
        settings: &DispatchSettings,
    ) -> Result<Self, DispatchError> {
        match kind {
            ActionKind::MoveMouse => {
                let (x, y) = parse_coordinate_pair(input)?;
                Ok(ActionRequest::Move { x, y })
            }
            ActionKind::SmoothMove => {
                let (x, y) = parse_coordinate_pair(input)?;
                Ok(ActionRequest::SmoothMove {
                    x,
                    y,
                    duration: settings.smooth_duration,
                })
            }
            ActionKind::ClickMouse => {
                let (x, y) = parse_coordinate_pair(input)?;
                Ok(ActionRequest::Click {
                    x,
                    y,
                    button: MouseButton::Left,
                    double: false,
                })
            }
            ActionKind::TypeText => Self::type_text(input, settings.type_delay),
            ActionKind::CursorPosition => Ok(ActionRequest::CursorPosition),
            ActionKind::ScreenSize => Ok(ActionRequest::ScreenSize),
            ActionKind::Quit => Err(DispatchError::Parse(
                "quit is not a dispatchable action".to_string(),
            )),
        }
    }

    /// Rejects text that is empty or only whitespace. The text itself is
    /// typed verbatim.
    pub fn type_text(text: &str, delay: Duration) -> Result<Self, DispatchError> {
        if text.trim().is_empty() {
            return Err(DispatchError::Parse(
                "text cannot be empty or contain only whitespace".to_string(),
            ));
        }
        Ok(ActionRequest::Type {
            text: text.to_string(),
            delay,
        })
    }
}

/// Split `input` on whitespace into exactly two integers.
pub fn parse_coordinate_pair(input: &str) -> Result<(i32, i32), DispatchError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => parse_coordinates(x, y),
        _ => Err(DispatchError::Parse(COORDINATE_HINT.to_string())),
    }
}

pub fn parse_coordinates(x: &str, y: &str) -> Result<(i32, i32), DispatchError> {
    Ok((parse_axis("x", x)?, parse_axis("y", y)?))
}

fn parse_axis(axis: &str, token: &str) -> Result<i32, DispatchError> {
    token.trim().parse().map_err(|_| {
        DispatchError::Parse(format!(
            "invalid {axis} coordinate '{token}': must be a valid integer"
        ))
    })
}

/// Knobs the interactive session applies to every dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchSettings {
    pub smooth_duration: Duration,
    pub type_delay: Duration,
    pub tolerance_px: i32,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            smooth_duration: DEFAULT_SMOOTH_DURATION,
            type_delay: Duration::ZERO,
            tolerance_px: DEFAULT_TOLERANCE_PX,
        }
    }
}

impl From<&ResolvedConfig> for DispatchSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            smooth_duration: config.smooth_duration,
            type_delay: config.type_delay,
            tolerance_px: config.tolerance_px,
        }
    }
}

pub struct Dispatcher {
    provider: Arc<dyn AutomationProvider>,
    settings: DispatchSettings,
    reporter: ProgressReporter,
}

impl Dispatcher {
    pub fn new(
        provider: Arc<dyn AutomationProvider>,
        settings: DispatchSettings,
        reporter: ProgressReporter,
    ) -> Self {
        Self {
            provider,
            settings,
            reporter,
        }
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Run `kind` with `input` and describe the outcome. Never fails: errors
    /// come back as text starting with `Error:`.
    pub async fn dispatch(&self, kind: ActionKind, input: &str) -> String {
        info!("Dispatching {:?} via {}", kind, self.provider.name());
        let outcome = match ActionRequest::parse(kind, input, &self.settings) {
            Ok(request) => self.execute(request).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!("{:?} failed: {}", kind, e);
                format!("Error: {e}")
            }
        }
    }

    pub async fn execute(&self, request: ActionRequest) -> Result<String, DispatchError> {
        match request {
            ActionRequest::Move { x, y } => self.move_pointer(x, y, None).await,
            ActionRequest::SmoothMove { x, y, duration } => {
                self.move_pointer(x, y, Some(duration)).await
            }
            ActionRequest::Click {
                x,
                y,
                button,
                double,
            } => {
                self.check_bounds(x, y).await?;
                self.provider.click(x, y, button, double).await?;
                Ok(describe_click(x, y, button, double))
            }
            ActionRequest::Type { text, delay } => {
                if delay.is_zero() {
                    self.provider.type_text(&text).await?;
                } else {
                    self.provider.type_text_with_delay(&text, delay).await?;
                }
                let count = text.chars().count();
                let plural = if count == 1 { "" } else { "s" };
                Ok(format!("Typed {count} character{plural}"))
            }
            ActionRequest::CursorPosition => {
                let (x, y) = self.provider.cursor_position().await?;
                Ok(format!("Mouse position: ({x}, {y})"))
            }
            ActionRequest::ScreenSize => {
                let (w, h) = self.provider.screen_size().await?;
                Ok(format!("Screen size: {w}x{h}"))
            }
        }
    }

    async fn check_bounds(&self, x: i32, y: i32) -> Result<(), DispatchError> {
        let (width, height) = self.provider.screen_size().await?;
        validate(x, y, width, height)?;
        Ok(())
    }

    /// Instant move when `smooth` is `None`, animated with progress ticks
    /// otherwise. Both finish by checking where the pointer actually landed.
    async fn move_pointer(
        &self,
        x: i32,
        y: i32,
        smooth: Option<Duration>,
    ) -> Result<String, DispatchError> {
        self.check_bounds(x, y).await?;

        if self.provider.cursor_position().await? == (x, y) {
            return Ok(format!("Already at target position ({x}, {y})"));
        }

        match smooth {
            Some(duration) => {
                self.reporter
                    .track(self.provider.smooth_move(x, y, duration))
                    .await?
            }
            None => self.provider.move_to(x, y).await?,
        }

        let (fx, fy) = self.provider.cursor_position().await?;
        let tolerance = self.settings.tolerance_px;
        if (fx - x).abs() <= tolerance && (fy - y).abs() <= tolerance {
            let how = if smooth.is_some() { " smoothly" } else { "" };
            Ok(format!("Moved mouse{how} to ({x}, {y})"))
        } else {
            Ok(format!(
                "Warning: position may not be exact (target: ({x}, {y}), actual: ({fx}, {fy}))"
            ))
        }
    }
}

fn describe_click(x: i32, y: i32, button: MouseButton, double: bool) -> String {
    let verb = if double { "Double-clicked" } else { "Clicked" };
    match button {
        MouseButton::Left => format!("{verb} at ({x}, {y})"),
        other => format!("{verb} {} button at ({x}, {y})", other.label()),
    }
}
