//! Quit confirmation dialog, shown when leaving with unsaved edits

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{key_hints, modal_overlay};
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 6;

#[derive(Default)]
pub struct ConfirmQuitDialog;

impl ConfirmQuitDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for ConfirmQuitDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);

        let block = styles::modal_block(" Quit ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Discard this appointment?",
                styles::TEXT,
            ))
            .alignment(Alignment::Center),
            Line::default(),
            key_hints(&[("y", "discard"), ("n", "keep editing")]).alignment(Alignment::Center),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_question_and_choices() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        ConfirmQuitDialog::new().render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Discard this appointment?"));
        assert!(content.contains("keep editing"));
    }
}
