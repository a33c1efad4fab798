//! Terminal Blockfall runner (default binary).
//!
//! Single-threaded loop: crossterm input, a virtual-time gravity scheduler
//! and the framebuffer renderer. Every key press is applied to the session
//! immediately, one action per event.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::config::RunConfig;
use tui_blockfall::core::{RenderSink, Session, Snapshot, TickOutcome, TickScheduler};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{GameView, TerminalSink};
use tui_blockfall::types::IDLE_POLL_MS;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    config.init_logging()?;
    tracing::info!(seed = config.seed, "starting");

    let mut sink = TerminalSink::new(GameView::default());
    sink.enter()?;

    let result = run(&mut sink, &config);

    // Always try to restore terminal state.
    let _ = sink.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "runner failed");
    }
    result
}

fn run(sink: &mut TerminalSink, config: &RunConfig) -> Result<()> {
    let mut session = Session::new(config.seed);
    let mut timer = TickScheduler::new();
    timer.schedule(session.start());

    let mut snapshot = Snapshot::default();
    let mut presented: Option<u64> = None;
    let mut last = Instant::now();
    let mut carry = Duration::ZERO;

    loop {
        if presented != Some(session.revision()) {
            session.snapshot_into(&mut snapshot);
            sink.present(&snapshot)?;
            presented = Some(session.revision());
        }

        let timeout = timer.remaining_ms().unwrap_or(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(u64::from(timeout)))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!(
                            games = session.games(),
                            lines = session.lines(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    sink.invalidate();
                    presented = None;
                }
                _ => {}
            }
        }

        // Whole milliseconds go to the scheduler; the remainder carries over.
        let now = Instant::now();
        carry += now - last;
        last = now;
        let elapsed_ms = carry.as_millis().min(u128::from(u32::MAX)) as u32;
        carry -= Duration::from_millis(u64::from(elapsed_ms));

        if let Some(token) = timer.advance(elapsed_ms) {
            if let TickOutcome::Locked(event) = session.on_tick(token) {
                if event.restarted {
                    tracing::info!(game = session.games(), "new game");
                }
            }
        }
        if !timer.is_pending() {
            if let Some(request) = session.pending_tick() {
                timer.schedule(request);
            }
        }
    }
}
