//! # Progress Reporter
//!
//! Emits a tick at a fixed interval while a long-running provider call is in
//! flight (the smooth move). The ticker is a separate tokio task; the call
//! itself runs on the caller's task.
//!
//! ```text
//! track(work)
//!   ├─ spawn ticker ── tick ── tick ── tick ──┐ stop ─→ exits
//!   ├─ work.await ───────────────────────────┘
//!   ├─ send stop
//!   └─ await ticker, then return work's output
//! ```
//!
//! `track` only returns after the ticker has exited, so no tick can land
//! after the caller sees the result. The reporter never touches session
//! state; what a tick means is up to the callback (print a dot, nudge the
//! event loop to redraw).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone)]
pub struct ProgressReporter {
    interval: Duration,
    on_tick: Arc<dyn Fn() + Send + Sync>,
}

impl ProgressReporter {
    pub fn new(interval: Duration, on_tick: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            on_tick: Arc::new(on_tick),
        }
    }

    /// A reporter whose ticks go nowhere.
    pub fn silent() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, || {})
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drive `work` to completion, ticking every interval until it finishes.
    pub async fn track<F: Future>(&self, work: F) -> F::Output {
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let ticker = tokio::spawn(tick_until(stop_rx, self.interval, self.on_tick.clone()));

        let output = work.await;

        // Receiver only goes away if the ticker already exited.
        let _ = stop_tx.send(());
        match ticker.await {
            Ok(ticks) => debug!("Progress reporter stopped after {ticks} ticks"),
            Err(e) => warn!("Progress ticker ended abnormally: {}", e),
        }
        output
    }
}

async fn tick_until(
    mut stop: oneshot::Receiver<()>,
    period: Duration,
    on_tick: Arc<dyn Fn() + Send + Sync>,
) -> usize {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = 0;
    loop {
        tokio::select! {
            biased;
            _ = &mut stop => return ticks,
            _ = interval.tick() => {
                on_tick();
                ticks += 1;
            }
        }
    }
}
