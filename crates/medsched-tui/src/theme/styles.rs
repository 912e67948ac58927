//! Named styles and block builders for the form.
//!
//! Widgets pick a style by role (text, hint, highlight) rather than by
//! colour, so the palette can change in one place.

use medsched_app::StatusKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

pub const TEXT: Style = Style::new().fg(palette::TEXT_PRIMARY);
pub const TEXT_DIM: Style = Style::new().fg(palette::TEXT_SECONDARY);
/// Placeholders, separators, hint descriptions
pub const MUTED: Style = Style::new().fg(palette::TEXT_MUTED);

pub const ACCENT: Style = Style::new().fg(palette::ACCENT);
pub const ACCENT_BOLD: Style = ACCENT.add_modifier(Modifier::BOLD);

pub const ERROR: Style = Style::new().fg(palette::STATUS_RED);
pub const KEY_HINT: Style = Style::new().fg(palette::STATUS_YELLOW);

/// Cursor row / selected cell: dark text on the accent colour
pub const HIGHLIGHT: Style = Style::new()
    .fg(palette::CONTRAST_FG)
    .bg(palette::ACCENT)
    .add_modifier(Modifier::BOLD);

/// Colour of the status line for each kind of feedback
pub fn status(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => TEXT_DIM,
        StatusKind::Success => Style::new()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        StatusKind::Error => ERROR.add_modifier(Modifier::BOLD),
    }
}

/// How a bordered field should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Idle,
    Focused,
    /// Has a validation message; wins over focus
    Invalid,
}

impl FieldState {
    pub fn new(focused: bool, invalid: bool) -> Self {
        match (focused, invalid) {
            (_, true) => FieldState::Invalid,
            (true, false) => FieldState::Focused,
            (false, false) => FieldState::Idle,
        }
    }

    fn border(self) -> Style {
        let color = match self {
            FieldState::Idle => palette::BORDER_DIM,
            FieldState::Focused => palette::BORDER_ACTIVE,
            FieldState::Invalid => palette::STATUS_RED,
        };
        Style::new().fg(color)
    }
}

fn rounded() -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Titled field frame
pub fn field_block(title: &str, state: FieldState) -> Block<'_> {
    rounded().title(title).border_style(state.border())
}

/// Untitled frame around the submit button
pub fn button_block(focused: bool) -> Block<'static> {
    rounded().border_style(FieldState::new(focused, false).border())
}

/// Opaque frame for the picker modals and the quit dialog
pub fn modal_block(title: &str) -> Block<'_> {
    rounded()
        .title(title)
        .border_style(FieldState::Focused.border())
        .style(Style::new().bg(palette::POPUP_BG))
}
