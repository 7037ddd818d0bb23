//! # Desktop Provider
//!
//! The real backend: enigo for pointer and keyboard synthesis, xcap for
//! capturing the primary monitor.
//!
//! enigo's calls block the calling thread (and smooth moves / delayed typing
//! sleep between steps), so every operation runs on tokio's blocking pool.
//! A fresh `Enigo` handle is opened per operation; the provider itself holds
//! no OS resources and is trivially `Send + Sync`.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use enigo::{Enigo, KeyboardControllable, MouseControllable};
use log::debug;
use xcap::Monitor;

use super::provider::{AutomationProvider, MouseButton, ProviderError};

/// Pause between intermediate pointer positions during a smooth move.
const SMOOTH_STEP: Duration = Duration::from_millis(10);

#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopProvider;

impl DesktopProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Run a blocking enigo operation on the blocking pool.
async fn blocking<T, F>(op: F) -> Result<T, ProviderError>
where
    T: Send + 'static,
    F: FnOnce(&mut Enigo) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut enigo = Enigo::new();
        op(&mut enigo)
    })
    .await
    .map_err(|e| ProviderError::Task(e.to_string()))
}

fn to_enigo(button: MouseButton) -> enigo::MouseButton {
    match button {
        MouseButton::Left => enigo::MouseButton::Left,
        MouseButton::Right => enigo::MouseButton::Right,
        MouseButton::Middle => enigo::MouseButton::Middle,
    }
}

/// Ease-in-out cubic: slow start, fast middle, slow finish.
fn ease(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Intermediate pointer positions from `from` to `to`, ending exactly on `to`.
fn interpolate(from: (i32, i32), to: (i32, i32), steps: u32) -> Vec<(i32, i32)> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| {
            let t = ease(f64::from(i) / f64::from(steps));
            let x = f64::from(from.0) + f64::from(to.0 - from.0) * t;
            let y = f64::from(from.1) + f64::from(to.1 - from.1) * t;
            (x.round() as i32, y.round() as i32)
        })
        .collect()
}

#[async_trait]
impl AutomationProvider for DesktopProvider {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn move_to(&self, x: i32, y: i32) -> Result<(), ProviderError> {
        blocking(move |enigo| enigo.mouse_move_to(x, y)).await
    }

    async fn smooth_move(&self, x: i32, y: i32, duration: Duration) -> Result<(), ProviderError> {
        let steps = (duration.as_millis() / SMOOTH_STEP.as_millis()).max(1) as u32;
        blocking(move |enigo| {
            let start = enigo.mouse_location();
            debug!("Smooth move {:?} -> ({x}, {y}) in {steps} steps", start);
            for (px, py) in interpolate(start, (x, y), steps) {
                enigo.mouse_move_to(px, py);
                thread::sleep(SMOOTH_STEP);
            }
        })
        .await
    }

    async fn click(
        &self,
        x: i32,
        y: i32,
        button: MouseButton,
        double: bool,
    ) -> Result<(), ProviderError> {
        blocking(move |enigo| {
            enigo.mouse_move_to(x, y);
            enigo.mouse_click(to_enigo(button));
            if double {
                enigo.mouse_click(to_enigo(button));
            }
        })
        .await
    }

    async fn type_text(&self, text: &str) -> Result<(), ProviderError> {
        let text = text.to_string();
        blocking(move |enigo| enigo.key_sequence(&text)).await
    }

    async fn type_text_with_delay(&self, text: &str, delay: Duration) -> Result<(), ProviderError> {
        let text = text.to_string();
        blocking(move |enigo| {
            let mut buf = [0u8; 4];
            for c in text.chars() {
                enigo.key_sequence(c.encode_utf8(&mut buf));
                thread::sleep(delay);
            }
        })
        .await
    }

    async fn cursor_position(&self) -> Result<(i32, i32), ProviderError> {
        blocking(|enigo| enigo.mouse_location()).await
    }

    async fn screen_size(&self) -> Result<(i32, i32), ProviderError> {
        blocking(|enigo| enigo.main_display_size()).await
    }

    async fn capture_screen(&self) -> Result<PathBuf, ProviderError> {
        tokio::task::spawn_blocking(capture_primary_monitor)
            .await
            .map_err(|e| ProviderError::Task(e.to_string()))?
    }
}

fn capture_primary_monitor() -> Result<PathBuf, ProviderError> {
    let monitors = Monitor::all().map_err(|e| ProviderError::Capture(e.to_string()))?;
    let monitor = monitors
        .into_iter()
        .find(|m| m.is_primary())
        .ok_or_else(|| ProviderError::Capture("no primary monitor found".to_string()))?;

    let image = monitor
        .capture_image()
        .map_err(|e| ProviderError::Capture(e.to_string()))?;

    let filename = format!("screenshot_{}.png", Local::now().format("%Y%m%d_%H%M%S"));
    let path = std::env::temp_dir().join(filename);
    image.save(&path).map_err(|e| {
        ProviderError::Capture(format!(
            "failed to save screenshot to {}: {e}",
            path.display()
        ))
    })?;

    debug!("Screenshot written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_ends_on_target() {
        let path = interpolate((0, 0), (300, -40), 25);
        assert_eq!(path.len(), 25);
        assert_eq!(path.last(), Some(&(300, -40)));
    }

    #[test]
    fn test_interpolate_zero_steps_jumps() {
        assert_eq!(interpolate((5, 5), (10, 20), 0), vec![(10, 20)]);
    }

    #[test]
    fn test_interpolate_is_monotonic() {
        let path = interpolate((100, 900), (800, 100), 50);
        for pair in path.windows(2) {
            assert!(pair[1].0 >= pair[0].0);
            assert!(pair[1].1 <= pair[0].1);
        }
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert!((ease(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_button_mapping() {
        assert!(matches!(to_enigo(MouseButton::Right), enigo::MouseButton::Right));
        assert_eq!(MouseButton::default(), MouseButton::Left);
    }
}
