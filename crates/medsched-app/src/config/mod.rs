//! Configuration file parsing for medsched
//!
//! Supports (all under the config directory, `.medsched/` by default):
//! - `config.toml` - Form and UI settings
//! - `doctors.toml` - The doctor roster offered by the form
//!
//! Plus an optional JSON file holding initial values for edit mode.

pub mod initial;
pub mod roster;
pub mod settings;
pub mod types;

pub use initial::load_initial_values;
pub use roster::{load_roster, DoctorsFile, DOCTORS_FILENAME};
pub use settings::{
    default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME, DEFAULT_CONFIG_DIR,
};
pub use types::*;
