//! Screen layout definitions for the TUI
//!
//! The form is a single centered card: header, doctor list, date and time
//! side by side, notes, the submit button, then status and key hints.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the form card grows on large terminals
pub const MAX_FORM_WIDTH: u16 = 72;

/// Screen areas for the form
#[derive(Debug, Clone, Copy)]
pub struct FormAreas {
    pub header: Rect,
    pub doctor: Rect,
    pub date: Rect,
    pub time: Rect,
    pub notes: Rect,
    pub submit: Rect,
    pub status: Rect,
    pub hints: Rect,
}

/// Create the form layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `doctor_options` - Number of rows the doctor list wants (sentinel included)
pub fn create(area: Rect, doctor_options: usize) -> FormAreas {
    let width = area.width.min(MAX_FORM_WIDTH);
    let card = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    // Doctor list: options + 2 border rows, between 3 and 10 rows
    let doctor_height = (doctor_options as u16).saturating_add(2).clamp(3, 10);

    let chunks = Layout::vertical([
        Constraint::Length(1),             // Header
        Constraint::Length(doctor_height), // Doctor list
        Constraint::Length(3),             // Date + time
        Constraint::Min(3),                // Notes
        Constraint::Length(3),             // Submit
        Constraint::Length(1),             // Status
        Constraint::Length(1),             // Key hints
    ])
    .split(card);

    let date_time =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(chunks[2]);

    FormAreas {
        header: chunks[0],
        doctor: chunks[1],
        date: date_time[0],
        time: date_time[1],
        notes: chunks[3],
        submit: chunks[4],
        status: chunks[5],
        hints: chunks[6],
    }
}
