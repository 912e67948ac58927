//! Form handlers: doctor selection, picker modals and submission

use medsched_core::AppointmentRequest;
use tracing::{debug, info, warn};

use crate::form::FormField;
use crate::state::{AppState, StatusMessage};
use crate::submit::{submit_with, SubmitOutcome};

use super::{UpdateAction, UpdateResult};

pub fn handle_select_doctor(state: &mut AppState, id: String) -> UpdateResult {
    if !id.is_empty() && !state.form.roster().contains(&id) {
        warn!("Ignoring unknown doctor id '{}'", id);
        state.set_status(StatusMessage::error(format!("Unknown doctor '{}'", id)));
        return UpdateResult::none();
    }
    state.form.set_doctor_id(id);
    UpdateResult::none()
}

pub fn handle_doctor_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    state.form.move_doctor_cursor(delta);
    UpdateResult::none()
}

/// Select the highlighted doctor and move on to the date
pub fn handle_confirm_doctor(state: &mut AppState) -> UpdateResult {
    state.form.select_doctor_at_cursor();
    if !state.form.doctor_id().is_empty() {
        state.form.focus = FormField::Date;
    }
    UpdateResult::none()
}

/// Only one picker is shown at a time
pub fn handle_open_date_picker(state: &mut AppState) -> UpdateResult {
    state.form.set_time_picker_open(false);
    state.form.set_date_picker_open(true);
    UpdateResult::none()
}

pub fn handle_open_time_picker(state: &mut AppState) -> UpdateResult {
    state.form.set_date_picker_open(false);
    state.form.set_time_picker_open(true);
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let policy = state.validation_policy();
    let mut pending = None;

    let outcome = submit_with(
        &mut state.form,
        &*state.clock,
        &policy,
        &mut |request: AppointmentRequest| pending = Some(request),
    );

    match outcome {
        SubmitOutcome::Disabled => {
            debug!("Submit pressed while loading");
        }
        SubmitOutcome::Rejected(errors) => {
            if let Some((field, _)) = errors.iter().next() {
                state.form.focus = FormField::from(field);
            }
            let noun = if errors.len() == 1 { "field" } else { "fields" };
            state.set_status(StatusMessage::error(format!(
                "{} {} need attention",
                errors.len(),
                noun
            )));
        }
        SubmitOutcome::Submitted(_) => {
            state.set_status(StatusMessage::info("Scheduling..."));
        }
    }

    match pending {
        Some(request) => UpdateResult::action(UpdateAction::DeliverAppointment { request }),
        None => UpdateResult::none(),
    }
}

pub fn handle_delivery_completed(state: &mut AppState, request: AppointmentRequest) -> UpdateResult {
    state.form.set_loading(false);
    info!("Appointment delivered for doctor '{}'", request.doctor_id);

    let label = state
        .form
        .roster()
        .find(&request.doctor_id)
        .map(|doctor| doctor.label())
        .unwrap_or_else(|| request.doctor_id.clone());
    state.set_status(StatusMessage::success(format!(
        "Scheduled with {} on {}",
        label,
        request.date.format("%Y-%m-%d %H:%M")
    )));
    state.submitted.push(request);

    if state.exit_after_submit {
        state.confirm_quit();
    } else {
        let now = state.now();
        state.form.reset(now);
    }
    UpdateResult::none()
}

/// The draft is kept so the user can retry
pub fn handle_delivery_failed(state: &mut AppState, reason: String) -> UpdateResult {
    state.form.set_loading(false);
    warn!("Appointment delivery failed: {}", reason);
    state.set_status(StatusMessage::error(format!(
        "Could not schedule appointment: {}",
        reason
    )));
    UpdateResult::none()
}
