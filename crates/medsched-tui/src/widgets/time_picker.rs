//! Time picker modal - hour and stepped minute

use medsched_app::TimePickerState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{key_hints, modal_overlay};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 30;
const MODAL_HEIGHT: u16 = 8;

pub struct TimePickerModal<'a> {
    picker: &'a TimePickerState,
}

impl<'a> TimePickerModal<'a> {
    pub fn new(picker: &'a TimePickerState) -> Self {
        Self { picker }
    }
}

impl Widget for TimePickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let block = styles::modal_block(" Pick a time ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let step = format!("{} min", self.picker.minute_step());
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(format!(" {:02} ", self.picker.hour()), styles::HIGHLIGHT),
                Span::styled(" : ", styles::ACCENT_BOLD),
                Span::styled(format!(" {:02} ", self.picker.minute()), styles::HIGHLIGHT),
            ])
            .alignment(Alignment::Center),
            Line::default(),
            key_hints(&[("↑↓", "hour"), ("←→", step.as_str())]).alignment(Alignment::Center),
            key_hints(&[("Enter", "pick"), ("Esc", "cancel")]).alignment(Alignment::Center),
        ];

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

    #[test]
    fn test_renders_zero_padded_time() {
        let picker = TimePickerState::new(
            NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
            15,
        );
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        TimePickerModal::new(&picker).render(area, &mut buf);

        assert!(buffer_contains(&buf, " 09 "));
        assert!(buffer_contains(&buf, " 05 "));
        assert!(buffer_contains(&buf, "15 min"));
        assert!(buffer_contains(&buf, "Pick a time"));
    }
}
