//! State transitions for every [`Message`]

use crate::message::Message;
use crate::state::AppState;

use super::{form, keys::handle_key, UpdateResult};

/// Apply `message` to `state`. Delivery is never performed here; it comes
/// back as [`super::UpdateAction::DeliverAppointment`].
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Nothing animates yet
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Focus and fields
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.focus = state.form.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.form.focus = state.form.focus.prev();
            UpdateResult::none()
        }

        Message::SelectDoctor(id) => form::handle_select_doctor(state, id),
        Message::DoctorCursorUp => form::handle_doctor_cursor(state, -1),
        Message::DoctorCursorDown => form::handle_doctor_cursor(state, 1),
        Message::ConfirmDoctor => form::handle_confirm_doctor(state),

        Message::SetNotes(notes) => {
            state.form.set_notes(notes);
            UpdateResult::none()
        }
        Message::NotesInput(c) => {
            state.form.push_note_char(c);
            UpdateResult::none()
        }
        Message::NotesBackspace => {
            state.form.pop_note_char();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pickers
        // ─────────────────────────────────────────────────────────
        Message::OpenDatePicker => form::handle_open_date_picker(state),
        Message::CloseDatePicker => {
            state.form.set_date_picker_open(false);
            UpdateResult::none()
        }
        Message::DatePickerMoveDays(days) => {
            state.form.date_picker_mut().move_days(days);
            UpdateResult::none()
        }
        Message::DatePickerMoveWeeks(weeks) => {
            state.form.date_picker_mut().move_weeks(weeks);
            UpdateResult::none()
        }
        Message::DatePickerMoveMonths(months) => {
            state.form.date_picker_mut().move_months(months);
            UpdateResult::none()
        }
        Message::DatePickerToday => {
            let today = state.now().date();
            state.form.date_picker_mut().jump_to(today);
            UpdateResult::none()
        }
        Message::ConfirmDatePicker => {
            state.form.confirm_date_picker();
            UpdateResult::none()
        }
        Message::PickDate(picked) => {
            state.form.apply_date_pick(picked);
            UpdateResult::none()
        }

        Message::OpenTimePicker => form::handle_open_time_picker(state),
        Message::CloseTimePicker => {
            state.form.set_time_picker_open(false);
            UpdateResult::none()
        }
        Message::TimePickerMoveHours(hours) => {
            state.form.time_picker_mut().move_hours(hours);
            UpdateResult::none()
        }
        Message::TimePickerMoveMinutes(steps) => {
            state.form.time_picker_mut().move_minutes(steps);
            UpdateResult::none()
        }
        Message::ConfirmTimePicker => {
            state.form.confirm_time_picker();
            UpdateResult::none()
        }
        Message::PickTime(picked) => {
            state.form.apply_time_pick(picked);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::SetLoading(loading) => {
            state.form.set_loading(loading);
            UpdateResult::none()
        }
        Message::Submit => form::handle_submit(state),
        Message::DeliveryCompleted(request) => form::handle_delivery_completed(state, request),
        Message::DeliveryFailed(reason) => form::handle_delivery_failed(state, reason),
    }
}
