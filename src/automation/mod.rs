//! # Automation Providers
//!
//! The boundary between deskpilot and the operating system. Everything that
//! physically moves the pointer, synthesizes key presses or reads the screen
//! sits behind [`AutomationProvider`]; the rest of the crate only talks to
//! the trait.

pub mod desktop;
pub mod provider;

pub use desktop::DesktopProvider;
pub use provider::{AutomationProvider, MouseButton, ProviderError};
