//! Application state (Model in TEA pattern)

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use medsched_core::{AppointmentRequest, Clock, SystemClock, ValidationPolicy};

use crate::config::Settings;
use crate::form::AppointmentForm;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// The appointment form (pickers are modals on top of it)
    #[default]
    Form,

    /// Quit confirmation (draft has unsaved edits)
    ConfirmQuit,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Editing,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    pub phase: AppPhase,

    pub form: AppointmentForm,

    /// Application settings from config file
    pub settings: Settings,

    /// Source of "now" for validation and resets
    pub clock: Arc<dyn Clock + Send + Sync>,

    pub status: Option<StatusMessage>,

    /// Appointments the sink has accepted, oldest first
    pub submitted: Vec<AppointmentRequest>,

    /// Quit once the first appointment is delivered (TUI);
    /// otherwise the form resets for the next one (headless)
    pub exit_after_submit: bool,
}

impl AppState {
    pub fn new(form: AppointmentForm, settings: Settings) -> Self {
        Self::with_clock(form, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(
        form: AppointmentForm,
        settings: Settings,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            form,
            settings,
            clock,
            status: None,
            submitted: Vec::new(),
            exit_after_submit: false,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        self.settings.validation_policy()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Quit, asking first when an edited draft would be lost
    pub fn request_quit(&mut self) {
        if self.settings.ui.confirm_quit && self.form.is_dirty() {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Form;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("ui_mode", &self.ui_mode)
            .field("phase", &self.phase)
            .field("form", &self.form)
            .field("status", &self.status)
            .field("submitted", &self.submitted.len())
            .finish_non_exhaustive()
    }
}
