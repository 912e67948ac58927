//! Headless mode - NDJSON commands in, NDJSON events out
//!
//! Drives the appointment form without a terminal UI. Each line on stdin is
//! one JSON command; each line on stdout is one JSON event. This makes the
//! form scriptable and lets integration tests exercise it end to end.
//!
//! # Commands
//!
//! ```json
//! {"cmd":"select_doctor","doctor_id":"d1"}
//! {"cmd":"pick_date","date":"2026-10-20"}
//! {"cmd":"pick_time","time":"10:00"}
//! {"cmd":"set_notes","notes":"Chest pain"}
//! {"cmd":"submit"}
//! ```
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","doctors":[{"id":"d1","name":"Ana","specialty":"Cardio"}],"draft":{...},"timestamp":1704700001000}
//! {"event":"submitted","appointment":{"doctorId":"d1","date":"2026-10-20T10:00:00","notes":""},"timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use medsched_app::AppointmentForm;
use medsched_core::{AppointmentDraft, AppointmentRequest, Doctor, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::error;

pub use runner::{run_headless, run_session};

/// Commands accepted on stdin, one JSON object per line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Choose a doctor by id; an empty id clears the selection
    SelectDoctor { doctor_id: String },

    /// Replace the calendar date, keeping the time of day (`YYYY-MM-DD`)
    PickDate { date: String },

    /// Replace hour and minute, keeping the date (`HH:MM`)
    PickTime { time: String },

    SetNotes { notes: String },

    SetLoading { loading: bool },

    Submit,

    /// Report the current draft without changing it
    State,

    Quit,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Form constructed and waiting for commands
    Ready {
        doctors: Vec<Doctor>,
        draft: AppointmentDraft,
        timestamp: i64,
    },

    /// Draft after a command was applied
    Updated {
        draft: AppointmentDraft,
        is_loading: bool,
        timestamp: i64,
    },

    /// Submit attempted with an invalid draft
    ValidationFailed {
        errors: ValidationErrors,
        timestamp: i64,
    },

    /// Submit attempted while loading
    SubmitIgnored { reason: String, timestamp: i64 },

    /// Appointment validated and delivered
    Submitted {
        appointment: AppointmentRequest,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.emit_to(&mut stdout);
    }

    /// Write this event as one NDJSON line and flush
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(form: &AppointmentForm) -> Self {
        Self::Ready {
            doctors: form.roster().doctors().to_vec(),
            draft: form.draft().clone(),
            timestamp: Self::now(),
        }
    }

    pub fn updated(form: &AppointmentForm) -> Self {
        Self::Updated {
            draft: form.draft().clone(),
            is_loading: form.is_loading(),
            timestamp: Self::now(),
        }
    }

    pub fn validation_failed(errors: ValidationErrors) -> Self {
        Self::ValidationFailed {
            errors,
            timestamp: Self::now(),
        }
    }

    pub fn submit_ignored(reason: &str) -> Self {
        Self::SubmitIgnored {
            reason: reason.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn submitted(appointment: AppointmentRequest) -> Self {
        Self::Submitted {
            appointment,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
