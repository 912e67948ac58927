//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: installs the panic hook, owns the terminal and the sink
//! - `run_loop`: drains delivery results, renders, polls the keyboard

use std::sync::Arc;

use medsched_app::{process_message, AppState, AppointmentSink, Message};
use medsched_core::prelude::*;
use tokio::sync::{mpsc, Mutex};

use super::{event, render, terminal};

/// Run the appointment form until the user quits or an appointment is
/// delivered (when `state.exit_after_submit` is set).
///
/// Returns the final state so the caller can report what was scheduled.
pub async fn run<S>(mut state: AppState, sink: S) -> Result<AppState>
where
    S: AppointmentSink + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting form with {} doctor(s)",
        state.form.roster().len()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::terminal(e.to_string()))?;

    // Delivery tasks report back through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let sink = Arc::new(Mutex::new(sink));

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, sink);

    ratatui::restore();

    result.map(|()| state)
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    sink: Arc<Mutex<S>>,
) -> Result<()>
where
    S: AppointmentSink + 'static,
{
    while !state.should_quit() {
        // Process results from delivery tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &sink);
        }

        if state.should_quit() {
            break;
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &sink);
        }
    }

    debug!("Event loop finished after {} delivery(ies)", state.submitted.len());
    Ok(())
}
