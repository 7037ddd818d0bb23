//! # One-shot Commands
//!
//! `deskpilot click 100 200`, `deskpilot move --smooth 800 600`, ... Each
//! runs a single action outside the interactive session and either prints
//! what happened or returns an error for `main` to report.
//!
//! Commands share the dispatcher, validator and provider with the session,
//! but not its state machine.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Subcommand;
use log::info;

use crate::automation::{AutomationProvider, MouseButton, ProviderError};
use crate::core::config::{ConfigError, ResolvedConfig};
use crate::core::dispatch::{
    ActionRequest, DispatchError, DispatchSettings, Dispatcher, parse_coordinates,
};
use crate::core::progress::ProgressReporter;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive menu (default)
    Tui,
    /// Click at a screen coordinate
    Click {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
        /// Mouse button to press
        #[arg(long, value_enum, default_value_t)]
        button: MouseButton,
        /// Click twice
        #[arg(long)]
        double: bool,
    },
    /// Move the cursor to a screen coordinate without clicking
    Move {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
        /// Animate the movement
        #[arg(long)]
        smooth: bool,
        /// Animation length in seconds (with --smooth)
        #[arg(long)]
        duration: Option<f64>,
    },
    /// Type text at the current keyboard focus
    Type {
        text: String,
        /// Pause after each character, in milliseconds
        #[arg(long)]
        delay: Option<u64>,
    },
    /// Capture the screen to a PNG and print its path
    Screenshot,
    /// Print the current cursor position
    Position,
    /// Print the main display size
    ScreenSize,
}

#[derive(Debug)]
pub enum CommandError {
    Dispatch(DispatchError),
    Provider(ProviderError),
    Config(ConfigError),
    InvalidArgument(String),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Dispatch(e) => write!(f, "{e}"),
            CommandError::Provider(e) => write!(f, "{e}"),
            CommandError::Config(e) => write!(f, "{e}"),
            CommandError::InvalidArgument(msg) => write!(f, "{msg}"),
            CommandError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<DispatchError> for CommandError {
    fn from(e: DispatchError) -> Self {
        CommandError::Dispatch(e)
    }
}

impl From<ProviderError> for CommandError {
    fn from(e: ProviderError) -> Self {
        CommandError::Provider(e)
    }
}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        CommandError::Config(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}

/// Build the request a command stands for. `None` for commands that are not
/// dispatcher actions (`tui`, `screenshot`).
pub fn to_request(
    command: &Command,
    config: &ResolvedConfig,
) -> Result<Option<ActionRequest>, CommandError> {
    let request = match command {
        Command::Tui | Command::Screenshot => return Ok(None),
        Command::Click {
            x,
            y,
            button,
            double,
        } => {
            let (x, y) = parse_coordinates(x, y)?;
            ActionRequest::Click {
                x,
                y,
                button: *button,
                double: *double,
            }
        }
        Command::Move {
            x,
            y,
            smooth,
            duration,
        } => {
            let (x, y) = parse_coordinates(x, y)?;
            if *smooth {
                let duration = match duration {
                    Some(secs) => Duration::try_from_secs_f64(*secs).map_err(|_| {
                        CommandError::InvalidArgument(format!(
                            "invalid duration '{secs}': must be a non-negative number of seconds"
                        ))
                    })?,
                    None => config.smooth_duration,
                };
                ActionRequest::SmoothMove { x, y, duration }
            } else {
                ActionRequest::Move { x, y }
            }
        }
        Command::Type { text, delay } => {
            let delay = delay.map(Duration::from_millis).unwrap_or(config.type_delay);
            ActionRequest::type_text(text, delay)?
        }
        Command::Position => ActionRequest::CursorPosition,
        Command::ScreenSize => ActionRequest::ScreenSize,
    };
    Ok(Some(request))
}

/// Run a one-shot command, printing its outcome to stdout.
pub async fn run(
    command: Command,
    config: &ResolvedConfig,
    provider: Arc<dyn AutomationProvider>,
) -> Result<(), CommandError> {
    info!("Running command {:?}", command);

    if let Command::Screenshot = command {
        let path = provider.capture_screen().await?;
        println!("{}", path.display());
        return Ok(());
    }

    let Some(request) = to_request(&command, config)? else {
        return Ok(());
    };

    let smooth = matches!(request, ActionRequest::SmoothMove { .. });
    if let ActionRequest::SmoothMove { duration, .. } = &request {
        print!("Moving smoothly over {:.1} seconds", duration.as_secs_f64());
        io::stdout().flush()?;
    }

    let reporter = ProgressReporter::new(config.progress_interval, || {
        print!(".");
        let _ = io::stdout().flush();
    });
    let dispatcher = Dispatcher::new(provider, DispatchSettings::from(config), reporter);

    let outcome = dispatcher.execute(request).await;
    if smooth {
        println!();
    }
    println!("{}", outcome?);
    Ok(())
}
