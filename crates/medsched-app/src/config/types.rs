//! Configuration types for medsched
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `FormSettings` - Validation and input limits
//! - `UiSettings` - Display formats and quit behaviour

use medsched_core::ValidationPolicy;
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Validation policy derived from `[form]`
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy::with_lead_minutes(self.form.min_lead_minutes)
    }
}

/// Form behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Minutes an appointment must lie beyond "now" (0 = strictly after now)
    #[serde(default)]
    pub min_lead_minutes: u32,

    /// Minute increment of the time picker
    #[serde(default = "default_minute_step")]
    pub minute_step: u32,

    /// Maximum number of characters accepted in the notes field
    #[serde(default = "default_max_notes_len")]
    pub max_notes_len: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            min_lead_minutes: 0,
            minute_step: default_minute_step(),
            max_notes_len: default_max_notes_len(),
        }
    }
}

fn default_minute_step() -> u32 {
    5
}

fn default_max_notes_len() -> usize {
    500
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// chrono format string for the date field
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// chrono format string for the time field
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Ask before discarding an edited draft
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            confirm_quit: true,
        }
    }
}

fn default_date_format() -> String {
    "%a %d %b %Y".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_true() -> bool {
    true
}
