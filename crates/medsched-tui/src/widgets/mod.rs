//! Custom widgets for the appointment form

mod appointment_form;
mod confirm_quit;
mod date_picker;
mod doctor_list;
pub mod modal_overlay;
mod time_picker;

pub use appointment_form::AppointmentFormView;
pub use confirm_quit::ConfirmQuitDialog;
pub use date_picker::DatePickerModal;
pub use doctor_list::DoctorList;
pub use time_picker::TimePickerModal;

use ratatui::text::{Line, Span};

use crate::theme::styles;

/// A row of `key description` hints
pub(crate) fn key_hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, (key, description)) in pairs.iter().enumerate() {
        let gap = if i + 1 < pairs.len() { "  " } else { "" };
        spans.push(Span::styled(key.to_string(), styles::KEY_HINT));
        spans.push(Span::styled(format!(" {}{}", description, gap), styles::MUTED));
    }
    Line::from(spans)
}
