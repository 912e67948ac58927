//! Main render/view function (View in TEA pattern)


use medsched_app::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Draws the form card, then at most one overlay on top of it: the quit
/// dialog wins over an open picker.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    frame.render_widget(widgets::AppointmentFormView::new(state), area);

    let form = &state.form;
    match state.ui_mode {
        UiMode::ConfirmQuit => {
            frame.render_widget(widgets::ConfirmQuitDialog::new(), area);
        }
        UiMode::Form if form.pickers().date_open => {
            frame.render_widget(widgets::DatePickerModal::new(form.date_picker()), area);
        }
        UiMode::Form if form.pickers().time_open => {
            frame.render_widget(widgets::TimePickerModal::new(form.time_picker()), area);
        }
        UiMode::Form => {}
    }
}
