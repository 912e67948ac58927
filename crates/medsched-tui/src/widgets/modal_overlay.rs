//! Backdrop for the picker modals and the quit dialog.
//!
//! [`prepare_modal`] greys out the form, casts a one-cell shadow and clears
//! the rectangle the modal will draw into.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// A `width` x `height` rect centred in `area`, shrunk to fit if needed.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use medsched_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    modal
}

/// Grey out everything under the modal, keeping the symbols
fn dim(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    buf.set_style(area, Style::new().fg(palette::TEXT_MUTED).bg(palette::DEEPEST_BG));
}

/// Shadow strips one cell right of and one cell below `modal`
fn shadow_strips(modal: Rect) -> [Rect; 2] {
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);
    [right, bottom]
}

fn cast_shadow(buf: &mut Buffer, modal: Rect) {
    let style = Style::new().fg(palette::SHADOW).bg(palette::SHADOW);
    for strip in shadow_strips(modal) {
        for position in strip.intersection(buf.area).positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ').set_style(style);
            }
        }
    }
}

/// Dim `area`, then shadow and clear a centred `width` x `height` modal.
/// Returns the modal rect.
pub fn prepare_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    dim(buf, area);
    let modal = centered_rect(width, height, area);
    cast_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
