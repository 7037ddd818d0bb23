//! deskpilot library exports for testing

pub mod automation;
pub mod commands;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
