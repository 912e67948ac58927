//! Key event handlers for different UI modes

use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Form => {
            let pickers = state.form.pickers();
            if pickers.date_open {
                handle_key_date_picker(key)
            } else if pickers.time_open {
                handle_key_time_picker(key)
            } else {
                handle_key_form(state, key)
            }
        }
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_date_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::DatePickerMoveDays(-1)),
        InputKey::Right | InputKey::Char('l') => Some(Message::DatePickerMoveDays(1)),
        InputKey::Up | InputKey::Char('k') => Some(Message::DatePickerMoveWeeks(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::DatePickerMoveWeeks(1)),
        InputKey::PageUp => Some(Message::DatePickerMoveMonths(-1)),
        InputKey::PageDown => Some(Message::DatePickerMoveMonths(1)),
        InputKey::Char('t') => Some(Message::DatePickerToday),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ConfirmDatePicker),
        InputKey::Esc => Some(Message::CloseDatePicker),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_time_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::TimePickerMoveHours(1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::TimePickerMoveHours(-1)),
        InputKey::Right | InputKey::Char('l') => Some(Message::TimePickerMoveMinutes(1)),
        InputKey::Left | InputKey::Char('h') => Some(Message::TimePickerMoveMinutes(-1)),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ConfirmTimePicker),
        InputKey::Esc => Some(Message::CloseTimePicker),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that work regardless of focus
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('s') => return Some(Message::Submit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::Esc => return Some(Message::RequestQuit),
        _ => {}
    }

    match state.form.focus {
        FormField::Doctor => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::DoctorCursorUp),
            InputKey::Down | InputKey::Char('j') => Some(Message::DoctorCursorDown),
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ConfirmDoctor),
            InputKey::Char('q') => Some(Message::RequestQuit),
            _ => None,
        },
        FormField::Date => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::OpenDatePicker),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            InputKey::Char('q') => Some(Message::RequestQuit),
            _ => None,
        },
        FormField::Time => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::OpenTimePicker),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            InputKey::Char('q') => Some(Message::RequestQuit),
            _ => None,
        },
        // Every printable key is text here, including 'q'
        FormField::Notes => match key {
            InputKey::Char(c) => Some(Message::NotesInput(c)),
            InputKey::Backspace => Some(Message::NotesBackspace),
            InputKey::Enter | InputKey::Down => Some(Message::FocusNext),
            InputKey::Up => Some(Message::FocusPrev),
            _ => None,
        },
        FormField::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            InputKey::Char('q') => Some(Message::RequestQuit),
            _ => None,
        },
    }
}
