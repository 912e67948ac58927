//! The appointment form card: doctor list, date, time, notes and submit.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use medsched_app::{AppState, FormField};
use medsched_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{key_hints, DoctorList};
use crate::layout;
use crate::theme::styles::{self, FieldState};

pub struct AppointmentFormView<'a> {
    state: &'a AppState,
}

impl<'a> AppointmentFormView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn is_focused(&self, field: FormField) -> bool {
        let form = &self.state.form;
        form.focus == field && !form.pickers().any_open()
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Schedule an appointment", styles::ACCENT_BOLD)];
        if self.state.form.is_loading() {
            spans.push(Span::styled("  saving…", styles::MUTED));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_value_field(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        field: FormField,
        value: String,
        error: Option<&str>,
    ) {
        let focused = self.is_focused(field);
        let mut block = styles::field_block(title, FieldState::new(focused, error.is_some()));
        if let Some(message) = error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", message),
                styles::ERROR,
            )));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let style = if focused {
            styles::TEXT.add_modifier(Modifier::BOLD)
        } else {
            styles::TEXT
        };
        Paragraph::new(Line::from(Span::styled(value, style))).render(inner, buf);
    }

    fn render_notes(&self, area: Rect, buf: &mut Buffer) {
        let form = &self.state.form;
        let focused = self.is_focused(FormField::Notes);
        let counter = format!(
            " {}/{} ",
            form.notes().chars().count(),
            form.max_notes_len()
        );
        let block = styles::field_block(" Notes (optional) ", FieldState::new(focused, false))
            .title_bottom(Line::from(Span::styled(counter, styles::MUTED)).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        if form.notes().is_empty() && !focused {
            spans.push(Span::styled("Anything the doctor should know", styles::MUTED));
        } else {
            spans.push(Span::styled(form.notes(), styles::TEXT));
        }
        if focused {
            spans.push(Span::styled("_", styles::ACCENT));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_submit(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.is_focused(FormField::Submit);
        let block = styles::button_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let (label, style) = if self.state.form.is_loading() {
            (" Scheduling… ", styles::MUTED)
        } else if focused {
            (" Schedule ", styles::HIGHLIGHT)
        } else {
            (" Schedule ", styles::ACCENT_BOLD)
        };
        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        if let Some(status) = &self.state.status {
            let text = truncate_to_width(&status.text, area.width as usize);
            Paragraph::new(Line::from(Span::styled(text, styles::status(status.kind))))
                .render(area, buf);
        }
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        let hints = key_hints(&[
            ("Tab", "next"),
            ("Enter", "choose"),
            ("Ctrl+S", "schedule"),
            ("Esc", "quit"),
        ]);
        Paragraph::new(hints).render(area, buf);
    }
}

impl Widget for AppointmentFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = &self.state.form;
        let areas = layout::create(area, form.roster().len() + 1);
        let ui = &self.state.settings.ui;

        self.render_header(areas.header, buf);

        DoctorList::new(form)
            .focused(self.is_focused(FormField::Doctor))
            .render(areas.doctor, buf);

        self.render_value_field(
            areas.date,
            buf,
            " Date ",
            FormField::Date,
            format_or_default(form.date(), &ui.date_format, "%Y-%m-%d"),
            form.errors().get(Field::Date),
        );
        self.render_value_field(
            areas.time,
            buf,
            " Time ",
            FormField::Time,
            format_or_default(form.date(), &ui.time_format, "%H:%M"),
            None,
        );

        self.render_notes(areas.notes, buf);
        self.render_submit(areas.submit, buf);
        self.render_status(areas.status, buf);
        self.render_hints(areas.hints, buf);
    }
}

/// Format with a user-supplied chrono pattern, falling back when it is invalid
fn format_or_default(value: NaiveDateTime, pattern: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", value.format(pattern)).is_ok() {
        return out;
    }
    value.format(fallback).to_string()
}

/// Cut `text` to `width` terminal columns, marking the cut with an ellipsis
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
