//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::automation::{AutomationProvider, MouseButton, ProviderError};
use crate::core::dispatch::{DispatchSettings, Dispatcher};
use crate::core::progress::ProgressReporter;

#[derive(Default)]
struct MockState {
    screen: (i32, i32),
    position: (i32, i32),
    /// Offset applied to every move, to simulate imprecise landings.
    drift: (i32, i32),
    failure: Option<String>,
    calls: Vec<String>,
    queries: usize,
    typed: String,
}

/// An in-memory provider that records what it was asked to do.
///
/// Action calls (moves, clicks, typing) are logged in `calls()`; position and
/// screen-size reads only bump `queries()`. Smooth moves sleep on the tokio
/// clock for their full duration, so paused-time tests can count ticks.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    pub fn new(width: i32, height: i32) -> Self {
        let provider = Self::default();
        provider.state.lock().unwrap().screen = (width, height);
        provider
    }

    pub fn set_position(&self, x: i32, y: i32) {
        self.state.lock().unwrap().position = (x, y);
    }

    pub fn set_drift(&self, dx: i32, dy: i32) {
        self.state.lock().unwrap().drift = (dx, dy);
    }

    /// Make every subsequent call fail with a backend error.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    pub fn position(&self) -> (i32, i32) {
        self.state.lock().unwrap().position
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn queries(&self) -> usize {
        self.state.lock().unwrap().queries
    }

    pub fn typed(&self) -> String {
        self.state.lock().unwrap().typed.clone()
    }

    fn check(&self) -> Result<(), ProviderError> {
        match &self.state.lock().unwrap().failure {
            Some(msg) => Err(ProviderError::Backend(msg.clone())),
            None => Ok(()),
        }
    }

    fn record_move(&self, call: String, x: i32, y: i32) {
        let mut state = self.state.lock().unwrap();
        state.position = (x + state.drift.0, y + state.drift.1);
        state.calls.push(call);
    }
}

#[async_trait]
impl AutomationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn move_to(&self, x: i32, y: i32) -> Result<(), ProviderError> {
        self.check()?;
        self.record_move(format!("move {x} {y}"), x, y);
        Ok(())
    }

    async fn smooth_move(&self, x: i32, y: i32, duration: Duration) -> Result<(), ProviderError> {
        self.check()?;
        tokio::time::sleep(duration).await;
        self.record_move(
            format!("smooth_move {x} {y} {}ms", duration.as_millis()),
            x,
            y,
        );
        Ok(())
    }

    async fn click(
        &self,
        x: i32,
        y: i32,
        button: MouseButton,
        double: bool,
    ) -> Result<(), ProviderError> {
        self.check()?;
        let verb = if double { "double-click" } else { "click" };
        self.record_move(format!("{verb} {x} {y} {}", button.label()), x, y);
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<(), ProviderError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.typed.push_str(text);
        state.calls.push(format!("type {text}"));
        Ok(())
    }

    async fn type_text_with_delay(&self, text: &str, delay: Duration) -> Result<(), ProviderError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.typed.push_str(text);
        state
            .calls
            .push(format!("type_with_delay {text} {}ms", delay.as_millis()));
        Ok(())
    }

    async fn cursor_position(&self) -> Result<(i32, i32), ProviderError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.queries += 1;
        Ok(state.position)
    }

    async fn screen_size(&self) -> Result<(i32, i32), ProviderError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.queries += 1;
        Ok(state.screen)
    }

    async fn capture_screen(&self) -> Result<PathBuf, ProviderError> {
        self.check()?;
        self.state.lock().unwrap().calls.push("capture".to_string());
        Ok(std::env::temp_dir().join("screenshot_test.png"))
    }
}

/// A dispatcher over `provider` with default settings and a silent reporter.
pub fn test_dispatcher(provider: MockProvider) -> Dispatcher {
    Dispatcher::new(
        Arc::new(provider),
        DispatchSettings::default(),
        ProgressReporter::silent(),
    )
}
