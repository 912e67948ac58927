//! Date picker modal - a month calendar around the candidate date

use chrono::Datelike;
use medsched_app::DatePickerState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{key_hints, modal_overlay};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 34;
const MODAL_HEIGHT: u16 = 13;
const WEEKDAYS: &str = "Mo Tu We Th Fr Sa Su";

pub struct DatePickerModal<'a> {
    picker: &'a DatePickerState,
}

impl<'a> DatePickerModal<'a> {
    pub fn new(picker: &'a DatePickerState) -> Self {
        Self { picker }
    }

    fn week_line(&self, week: &[Option<u32>; 7]) -> Line<'static> {
        let selected = self.picker.selected_date().day();
        let mut spans = Vec::with_capacity(14);
        for (i, cell) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match cell {
                Some(day) if *day == selected => {
                    spans.push(Span::styled(format!("{:>2}", day), styles::HIGHLIGHT));
                }
                Some(day) if i >= 5 => {
                    spans.push(Span::styled(format!("{:>2}", day), styles::TEXT_DIM));
                }
                Some(day) => {
                    spans.push(Span::styled(format!("{:>2}", day), styles::TEXT));
                }
                None => spans.push(Span::raw("  ")),
            }
        }
        Line::from(spans)
    }
}

impl Widget for DatePickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let block = styles::modal_block(" Pick a date ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let date = self.picker.selected_date();
        let mut lines = vec![
            Line::from(Span::styled(
                date.format("%B %Y").to_string(),
                styles::ACCENT_BOLD,
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                WEEKDAYS,
                styles::MUTED.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        ];
        for week in self.picker.month_grid() {
            lines.push(self.week_line(&week).alignment(Alignment::Center));
        }
        // Pad so the hints sit at the bottom regardless of week count
        while lines.len() < 8 {
            lines.push(Line::default());
        }
        lines.push(
            key_hints(&[("←→", "day"), ("↑↓", "week"), ("PgUp/Dn", "month")])
                .alignment(Alignment::Center),
        );
        lines.push(
            key_hints(&[("t", "today"), ("Enter", "pick"), ("Esc", "cancel")])
                .alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn buffer_contains(buf: &Buffer, text: &str) -> bool {
        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        content.contains(text)
    }

    fn picker() -> DatePickerState {
        DatePickerState::new(
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_renders_month_title_and_days() {
        let picker = picker();
        let area = Rect::new(0, 0, 50, 20);
        let mut buf = Buffer::empty(area);

        DatePickerModal::new(&picker).render(area, &mut buf);

        assert!(buffer_contains(&buf, "October 2026"));
        assert!(buffer_contains(&buf, WEEKDAYS));
        assert!(buffer_contains(&buf, "31"));
    }

    #[test]
    fn test_selected_day_is_highlighted() {
        let picker = picker();
        let area = Rect::new(0, 0, 50, 20);
        let mut buf = Buffer::empty(area);

        DatePickerModal::new(&picker).render(area, &mut buf);

        let highlighted: String = buf
            .content
            .iter()
            .filter(|cell| cell.bg == crate::theme::palette::ACCENT)
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(highlighted, "19");
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let picker = picker();
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        DatePickerModal::new(&picker).render(area, &mut buf);
    }
}
