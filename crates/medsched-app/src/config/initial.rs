//! Initial values for edit mode

use std::path::Path;

use medsched_core::prelude::*;
use medsched_core::AppointmentRequest;

/// Read a JSON `{ doctorId, date, notes }` file used to pre-populate the form.
pub fn load_initial_values(path: &Path) -> Result<AppointmentRequest> {
    let content = std::fs::read_to_string(path)?;
    let values: AppointmentRequest = serde_json::from_str(&content)
        .map_err(|e| Error::invalid_initial_values(path, e.to_string()))?;
    debug!(
        "Loaded initial values from {:?} (doctor '{}')",
        path, values.doctor_id
    );
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_load_initial_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("edit.json");
        std::fs::write(
            &path,
            r#"{"doctorId":"d1","date":"2026-11-02T14:30:00","notes":"bring results"}"#,
        )
        .unwrap();

        let values = load_initial_values(&path).unwrap();
        assert_eq!(values.doctor_id, "d1");
        assert_eq!(
            values.date,
            NaiveDate::from_ymd_opt(2026, 11, 2)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
        assert_eq!(values.notes, "bring results");
    }

    #[test]
    fn test_load_initial_values_malformed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("edit.json");
        std::fs::write(&path, r#"{"doctorId":"d1","date":"tomorrow"}"#).unwrap();

        let err = load_initial_values(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidInitialValues { .. }));
    }

    #[test]
    fn test_load_initial_values_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_initial_values(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
