//! Everything that can happen to the form

use chrono::NaiveDateTime;
use medsched_core::AppointmentRequest;

use crate::input_key::InputKey;

/// Input to [`crate::update`]. Keys are translated into the more specific
/// variants by the key handler; headless commands map onto them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press, not yet interpreted
    Key(InputKey),

    Tick,

    /// Esc on the form; asks first when the draft has unsaved edits
    RequestQuit,

    /// Ctrl+C
    Quit,

    ConfirmQuit,

    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Doctor selection
    // ─────────────────────────────────────────────────────────
    /// Select a doctor by id (empty string clears the selection)
    SelectDoctor(String),
    DoctorCursorUp,
    DoctorCursorDown,
    /// Select the highlighted option of the doctor list
    ConfirmDoctor,

    // ─────────────────────────────────────────────────────────
    // Notes
    // ─────────────────────────────────────────────────────────
    SetNotes(String),
    NotesInput(char),
    NotesBackspace,

    // ─────────────────────────────────────────────────────────
    // Date picker
    // ─────────────────────────────────────────────────────────
    OpenDatePicker,
    CloseDatePicker,
    /// Move the date candidate by a number of days
    DatePickerMoveDays(i64),
    DatePickerMoveWeeks(i64),
    /// Move the date candidate by a number of months
    DatePickerMoveMonths(i32),
    DatePickerToday,
    ConfirmDatePicker,
    /// A picked timestamp; only its calendar date is used
    PickDate(NaiveDateTime),

    // ─────────────────────────────────────────────────────────
    // Time picker
    // ─────────────────────────────────────────────────────────
    OpenTimePicker,
    CloseTimePicker,
    TimePickerMoveHours(i64),
    /// Move the minute by a number of steps
    TimePickerMoveMinutes(i64),
    ConfirmTimePicker,
    /// A picked timestamp; only its hour and minute are used
    PickTime(NaiveDateTime),

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// External loading flag (set by the caller while it is busy)
    SetLoading(bool),
    Submit,
    /// The sink accepted the appointment
    DeliveryCompleted(AppointmentRequest),
    /// The sink failed to take the appointment
    DeliveryFailed(String),
}
