//! Settings parser for `config.toml`

use super::roster::DOCTORS_FILENAME;
use super::types::Settings;
use medsched_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_CONFIG_DIR: &str = ".medsched";

const DEFAULT_CONFIG_CONTENT: &str = r#"# medsched configuration

[form]
min_lead_minutes = 0    # 0 = the appointment only has to be after "now"
minute_step = 5         # time picker increment
max_notes_len = 500

[ui]
date_format = "%a %d %b %Y"
time_format = "%H:%M"
confirm_quit = true     # Ask before discarding an edited draft
"#;

const DEFAULT_DOCTORS_CONTENT: &str = r#"# Doctors offered by the appointment form.
# Each id must be unique and non-empty.

[[doctors]]
id = "d1"
name = "Ana Souza"
specialty = "Cardiology"

[[doctors]]
id = "d2"
name = "Bruno Lima"
specialty = "Dermatology"
"#;

/// Config directory used when none is given on the command line.
///
/// A `.medsched/` directory in the working directory wins; otherwise the
/// per-user config location (`~/.config/medsched` on Linux) is used.
pub fn default_config_dir() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_DIR);
    if local.is_dir() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("medsched"))
        .unwrap_or(local)
}

/// Load settings from `<config_dir>/config.toml`.
///
/// A missing, unreadable or invalid file yields the defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory with a commented `config.toml` and a sample
/// `doctors.toml`. Existing files are left untouched.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", config_dir, e)))?;
    }

    for (name, content) in [
        (CONFIG_FILENAME, DEFAULT_CONFIG_CONTENT),
        (DOCTORS_FILENAME, DEFAULT_DOCTORS_CONTENT),
    ] {
        let path = config_dir.join(name);
        if !path.exists() {
            std::fs::write(&path, content)?;
            info!("Created {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_roster;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[form]
min_lead_minutes = 30
minute_step = 15

[ui]
confirm_quit = false
"#;
        std::fs::write(temp.path().join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.form.min_lead_minutes, 30);
        assert_eq!(settings.form.minute_step, 15);
        assert!(!settings.ui.confirm_quit);
        assert_eq!(settings.ui.time_format, "%H:%M");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[form\nminute_step = ").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_creates_loadable_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(DEFAULT_CONFIG_DIR);

        init_config_dir(&dir).unwrap();

        assert!(dir.join(CONFIG_FILENAME).exists());
        assert_eq!(load_settings(&dir), Settings::default());

        let roster = load_roster(&dir.join(DOCTORS_FILENAME)).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_files() {
        let temp = tempdir().unwrap();
        let custom = "[form]\nminute_step = 1\n";
        std::fs::write(temp.path().join(CONFIG_FILENAME), custom).unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(content, custom);
    }
    #[test]
    fn test_default_config_dir_falls_back_to_user_config() {
        // Tests run from the crate directory, which has no `.medsched/`
        assert!(!Path::new(DEFAULT_CONFIG_DIR).is_dir());

        let expected = dirs::config_dir()
            .map(|dir| dir.join("medsched"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
        assert_eq!(default_config_dir(), expected);
    }
}
