//! medsched-app - Form state, submission flow and configuration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! appointment form: [`AppState`] is the model, [`Message`] the events and
//! [`handler::update`] the only place state changes. It also owns the
//! configuration files, the submission coordinator and the sinks that
//! receive submitted appointments.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod sink;
pub mod state;
pub mod submit;

// Re-export primary types
pub use actions::{handle_action, process_message};
pub use form::{AppointmentForm, DatePickerState, FormField, PickerVisibility, TimePickerState};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use sink::{AppointmentSink, JsonLinesSink, LocalAppointmentSink, MemorySink};
pub use state::{AppPhase, AppState, StatusKind, StatusMessage, UiMode};
pub use submit::{submit_with, OnSubmit, SubmitOutcome};
