//! Doctor roster loader (`doctors.toml`)

use std::path::Path;

use medsched_core::prelude::*;
use medsched_core::{Doctor, DoctorRoster};
use serde::{Deserialize, Serialize};

pub const DOCTORS_FILENAME: &str = "doctors.toml";

/// On-disk shape of `doctors.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DoctorsFile {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// Load and check the doctor roster.
///
/// Unlike settings, a broken roster is not replaced by defaults: the form
/// cannot be offered without knowing who can be booked.
pub fn load_roster(path: &Path) -> Result<DoctorRoster> {
    if !path.exists() {
        return Err(Error::missing_file(path));
    }

    let content = std::fs::read_to_string(path)?;
    let file: DoctorsFile = toml::from_str(&content)?;
    let roster = DoctorRoster::new(file.doctors)?;

    if roster.is_empty() {
        warn!("Doctor roster {:?} is empty", path);
    } else {
        debug!("Loaded {} doctors from {:?}", roster.len(), path);
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_roster_in_file_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DOCTORS_FILENAME);
        std::fs::write(
            &path,
            r#"
[[doctors]]
id = "d2"
name = "Bruno"
specialty = "Dermatology"

[[doctors]]
id = "d1"
name = "Ana"
specialty = "Cardio"
"#,
        )
        .unwrap();

        let roster = load_roster(&path).unwrap();
        let ids: Vec<&str> = roster.doctors().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d2", "d1"]);
    }

    #[test]
    fn test_load_roster_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_roster(&temp.path().join(DOCTORS_FILENAME)).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_roster_duplicate_ids() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DOCTORS_FILENAME);
        std::fs::write(
            &path,
            r#"
[[doctors]]
id = "d1"
name = "Ana"
specialty = "Cardio"

[[doctors]]
id = "d1"
name = "Clone"
specialty = "Cardio"
"#,
        )
        .unwrap();

        let err = load_roster(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidRoster { .. }));
    }

    #[test]
    fn test_load_roster_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DOCTORS_FILENAME);
        std::fs::write(&path, "[[doctors]\nid = ").unwrap();

        let err = load_roster(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_roster_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DOCTORS_FILENAME);
        std::fs::write(&path, "").unwrap();

        let roster = load_roster(&path).unwrap();
        assert!(roster.is_empty());
    }
}
