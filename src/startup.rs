//! Startup - build the initial [`AppState`] from files on disk

use std::path::PathBuf;
use std::sync::Arc;

use medsched_app::config::{self, DOCTORS_FILENAME};
use medsched_app::{AppState, AppointmentForm};
use medsched_core::prelude::*;
use medsched_core::{Clock, SystemClock};

/// Where configuration, roster and initial values come from
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub config_dir: PathBuf,
    /// Roster file; `<config_dir>/doctors.toml` when unset
    pub doctors: Option<PathBuf>,
    /// JSON appointment to pre-fill the form with
    pub edit: Option<PathBuf>,
    /// Append delivered appointments here as JSON lines
    pub output: Option<PathBuf>,
}

impl StartupOptions {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            doctors: None,
            edit: None,
            output: None,
        }
    }

    pub fn doctors_path(&self) -> PathBuf {
        self.doctors
            .clone()
            .unwrap_or_else(|| self.config_dir.join(DOCTORS_FILENAME))
    }
}

/// Load settings, roster and initial values using the system clock
pub fn build_state(options: &StartupOptions) -> Result<AppState> {
    build_state_with_clock(options, Arc::new(SystemClock))
}

/// Settings fall back to defaults; a missing or malformed roster or edit
/// file is an error.
pub fn build_state_with_clock(
    options: &StartupOptions,
    clock: Arc<dyn Clock + Send + Sync>,
) -> Result<AppState> {
    let settings = config::load_settings(&options.config_dir);

    let doctors_path = options.doctors_path();
    let roster = config::load_roster(&doctors_path)
        .with_context(|| format!("Loading doctor roster from {}", doctors_path.display()))?;
    info!("Loaded {} doctor(s)", roster.len());

    let initial = match &options.edit {
        Some(path) => {
            let request = config::load_initial_values(path)
                .context("Loading appointment to edit")?;
            info!("Editing appointment for doctor '{}'", request.doctor_id);
            Some(request)
        }
        None => None,
    };

    if let Some(request) = &initial {
        if !request.doctor_id.is_empty() && !roster.contains(&request.doctor_id) {
            warn!(
                "Initial doctor '{}' is not in the roster; it will fail validation",
                request.doctor_id
            );
        }
    }

    let form = AppointmentForm::with_settings(roster, initial, clock.now(), &settings.form);
    Ok(AppState::with_clock(form, settings, clock))
}
