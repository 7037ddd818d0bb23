//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, translates crossterm
//! events into `core::action::Action` values, runs the reducer and performs
//! the effects it asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop is the session's only writer. Each iteration draws (if
//! something changed), waits up to 250ms for input, then drains every
//! pending event through `update()` before drawing again.
//!
//! ## Dispatch and Progress
//!
//! `Effect::Dispatch` runs on the loop's thread, parked in
//! `block_in_place` while the dispatch future is driven to completion.
//! Ticks from the progress reporter arrive over a channel and are drawn as
//! dots under the prompt; they are presentation state only and never reach
//! the `Session`. The dispatch future resolves only after the reporter has
//! stopped, and only then is the result folded in as `Action::Completed`.

mod component;
mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::automation::AutomationProvider;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dispatch::{DispatchSettings, Dispatcher};
use crate::core::progress::ProgressReporter;
use crate::core::state::{ActionKind, Session};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Run the interactive session until the user quits.
///
/// Must be called from within a multi-threaded tokio runtime.
pub fn run(config: &ResolvedConfig, provider: Arc<dyn AutomationProvider>) -> io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    let reporter = ProgressReporter::new(config.progress_interval, move || {
        // Loop gone means the session is ending; nothing left to draw
        let _ = tick_tx.send(());
    });
    let dispatcher = Dispatcher::new(provider, DispatchSettings::from(config), reporter);
    let mut session = Session::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();
    info!("Interactive session started");

    let result = event_loop(&mut terminal, &mut session, &dispatcher, &mut tick_rx);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Interactive session ended");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    dispatcher: &Dispatcher,
    ticks: &mut mpsc::UnboundedReceiver<()>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, session, None))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            needs_redraw = true;
            for action in event.into_actions() {
                match update(session, action) {
                    Effect::None => {}
                    Effect::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Effect::Dispatch { kind, input } => {
                        let outcome = dispatch_with_progress(
                            terminal, session, dispatcher, ticks, kind, &input,
                        )?;
                        update(session, Action::Completed(outcome));
                    }
                }
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Drive one dispatch to completion, redrawing on every progress tick.
fn dispatch_with_progress(
    terminal: &mut DefaultTerminal,
    session: &Session,
    dispatcher: &Dispatcher,
    ticks: &mut mpsc::UnboundedReceiver<()>,
    kind: ActionKind,
    input: &str,
) -> io::Result<String> {
    // Stale ticks from an earlier dispatch must not show up as progress here
    while ticks.try_recv().is_ok() {}

    let handle = tokio::runtime::Handle::current();
    tokio::task::block_in_place(|| {
        handle.block_on(async {
            let mut progress = String::new();
            terminal.draw(|f| ui::draw_ui(f, session, Some(&progress)))?;

            let work = dispatcher.dispatch(kind, input);
            tokio::pin!(work);
            loop {
                tokio::select! {
                    outcome = &mut work => {
                        debug!("{:?} finished after {} progress ticks", kind, progress.len());
                        return Ok::<_, io::Error>(outcome);
                    }
                    Some(()) = ticks.recv() => {
                        progress.push('.');
                        terminal.draw(|f| ui::draw_ui(f, session, Some(&progress)))?;
                    }
                }
            }
        })
    })
}
