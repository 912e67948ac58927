//! Headless mode runner - command loop without TUI
//!
//! Commands are applied through the same `update()` the TUI uses. Delivery
//! is awaited inline so every command's events are written before the next
//! command is read.

use std::io::Write;

use chrono::{NaiveDate, NaiveTime};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use medsched_app::{update, AppState, AppointmentSink, Message, UpdateAction};
use medsched_core::prelude::*;

use super::{HeadlessCommand, HeadlessEvent};
use crate::startup::{self, StartupOptions};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Run in headless mode - read commands from stdin, write events to stdout
pub async fn run_headless(options: &StartupOptions) -> Result<()> {
    medsched_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("medsched starting in HEADLESS mode");
    info!("Config dir: {}", options.config_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let mut stdout = std::io::stdout();
    let state = startup::build_state(options).map_err(|e| startup_failed(&mut stdout, e))?;

    let input = BufReader::new(tokio::io::stdin());

    let state = match &options.output {
        Some(path) => {
            let mut sink = open_output(path, &mut stdout).await?;
            run_session(state, input, &mut stdout, &mut sink).await?
        }
        None => {
            let mut sink = medsched_app::MemorySink::new();
            run_session(state, input, &mut stdout, &mut sink).await?
        }
    };

    info!(
        "medsched headless mode exiting after {} appointment(s)",
        state.submitted.len()
    );
    Ok(())
}

/// Report an error that stops the session before any command is read
fn startup_failed<W: Write>(out: &mut W, e: Error) -> Error {
    error!("Startup failed: {}", e);
    HeadlessEvent::error(e.to_string(), true).emit_to(out);
    e
}

async fn open_output<W: Write>(
    path: &std::path::Path,
    out: &mut W,
) -> Result<medsched_app::JsonLinesSink<tokio::fs::File>> {
    medsched_app::JsonLinesSink::append_file(path)
        .await
        .map_err(|e| startup_failed(out, e))
}

/// Apply every command from `input`, writing events to `out`, until EOF or
/// a `quit` command. Returns the final state.
pub async fn run_session<R, W, S>(
    mut state: AppState,
    input: R,
    out: &mut W,
    sink: &mut S,
) -> Result<AppState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: AppointmentSink,
{
    HeadlessEvent::ready(&state.form).emit_to(out);

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<HeadlessCommand>(trimmed) {
            Ok(command) => apply_command(&mut state, command, out, sink).await,
            Err(e) => {
                warn!("Invalid headless command {:?}: {}", trimmed, e);
                HeadlessEvent::error(format!("Invalid command: {}", e), false).emit_to(out);
            }
        }

        if state.should_quit() {
            info!("Quit requested");
            break;
        }
    }

    Ok(state)
}

async fn apply_command<W, S>(
    state: &mut AppState,
    command: HeadlessCommand,
    out: &mut W,
    sink: &mut S,
) where
    W: Write,
    S: AppointmentSink,
{
    match command {
        HeadlessCommand::SelectDoctor { doctor_id } => {
            if !doctor_id.is_empty() && !state.form.roster().contains(&doctor_id) {
                HeadlessEvent::error(format!("Unknown doctor id '{}'", doctor_id), false)
                    .emit_to(out);
                return;
            }
            dispatch(state, Message::SelectDoctor(doctor_id));
            HeadlessEvent::updated(&state.form).emit_to(out);
        }

        HeadlessCommand::PickDate { date } => {
            match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
                Ok(date) => {
                    dispatch(state, Message::PickDate(date.and_time(NaiveTime::MIN)));
                    HeadlessEvent::updated(&state.form).emit_to(out);
                }
                Err(e) => {
                    HeadlessEvent::error(format!("Invalid date '{}': {}", date, e), false)
                        .emit_to(out);
                }
            }
        }

        HeadlessCommand::PickTime { time } => {
            match NaiveTime::parse_from_str(&time, TIME_FORMAT) {
                Ok(time) => {
                    let picked = state.form.date().date().and_time(time);
                    dispatch(state, Message::PickTime(picked));
                    HeadlessEvent::updated(&state.form).emit_to(out);
                }
                Err(e) => {
                    HeadlessEvent::error(format!("Invalid time '{}': {}", time, e), false)
                        .emit_to(out);
                }
            }
        }

        HeadlessCommand::SetNotes { notes } => {
            dispatch(state, Message::SetNotes(notes));
            HeadlessEvent::updated(&state.form).emit_to(out);
        }

        HeadlessCommand::SetLoading { loading } => {
            dispatch(state, Message::SetLoading(loading));
            HeadlessEvent::updated(&state.form).emit_to(out);
        }

        HeadlessCommand::Submit => submit(state, out, sink).await,

        HeadlessCommand::State => HeadlessEvent::updated(&state.form).emit_to(out),

        HeadlessCommand::Quit => {
            dispatch(state, Message::Quit);
        }
    }
}

/// Submit the form and deliver the appointment before returning
async fn submit<W, S>(state: &mut AppState, out: &mut W, sink: &mut S)
where
    W: Write,
    S: AppointmentSink,
{
    let was_loading = state.form.is_loading();

    match dispatch(state, Message::Submit) {
        Some(UpdateAction::DeliverAppointment { request }) => {
            dispatch(state, Message::SetLoading(true));
            match sink.deliver(&request).await {
                Ok(()) => {
                    dispatch(state, Message::DeliveryCompleted(request.clone()));
                    HeadlessEvent::submitted(request).emit_to(out);
                }
                Err(e) => {
                    if e.is_recoverable() {
                        warn!("Delivery failed: {}", e);
                    } else {
                        error!("Delivery failed: {}", e);
                    }
                    dispatch(state, Message::DeliveryFailed(e.to_string()));
                    HeadlessEvent::error(e.to_string(), e.is_fatal()).emit_to(out);
                }
            }
        }
        None if was_loading => HeadlessEvent::submit_ignored("loading").emit_to(out),
        None => HeadlessEvent::validation_failed(state.form.errors().clone()).emit_to(out),
    }
}

/// Run `message` and its follow-ups through `update()`, returning the
/// action it asked for, if any
fn dispatch(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut action = None;
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        if result.action.is_some() {
            action = result.action;
        }
        next = result.message;
    }
    action
}
