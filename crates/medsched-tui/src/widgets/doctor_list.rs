//! Doctor selection list
//!
//! Shows the "Select a doctor" sentinel followed by every roster entry.
//! The highlighted row follows the cursor; the selected doctor is marked.

use medsched_app::AppointmentForm;
use medsched_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles::{self, FieldState};

pub struct DoctorList<'a> {
    form: &'a AppointmentForm,
    focused: bool,
}

impl<'a> DoctorList<'a> {
    pub fn new(form: &'a AppointmentForm) -> Self {
        Self {
            form,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible row so the cursor stays on screen
    fn scroll_offset(&self, visible: usize) -> usize {
        let cursor = self.form.doctor_cursor();
        if visible == 0 || cursor < visible {
            0
        } else {
            cursor + 1 - visible
        }
    }
}

impl Widget for DoctorList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let error = self.form.errors().get(Field::DoctorId);
        let mut block =
            styles::field_block(" Doctor ", FieldState::new(self.focused, error.is_some()));
        if let Some(message) = error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", message),
                styles::ERROR,
            )));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let options = self.form.doctor_options();
        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        let selected = self.form.doctor_id();

        let lines: Vec<Line> = options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, option)| {
                let is_cursor = index == self.form.doctor_cursor();
                let is_selected = !option.is_sentinel() && option.id == selected;
                let marker = if is_selected { "● " } else { "  " };

                let style = if is_cursor && self.focused {
                    styles::HIGHLIGHT
                } else if option.is_sentinel() {
                    styles::MUTED
                } else if is_selected {
                    styles::ACCENT_BOLD
                } else {
                    styles::TEXT
                };
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(option.label.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
