//! Domain types for the appointment form

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label shown for the leading "nothing selected" option
pub const NO_DOCTOR_LABEL: &str = "Select a doctor";

/// A doctor that can be chosen for an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier, never empty
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Display label for pickers: `"Name - Specialty"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }
}

/// One entry of the doctor picker, including the leading sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorOption {
    /// Empty for the "nothing selected" sentinel
    pub id: String,
    pub label: String,
}

impl DoctorOption {
    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty()
    }
}

/// The fixed, ordered doctor list supplied when a form is built.
///
/// Identifiers are unique and non-empty; the empty string is reserved
/// for the "nothing selected" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorRoster {
    doctors: Vec<Doctor>,
}

impl DoctorRoster {
    pub fn new(doctors: Vec<Doctor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if doctor.id.trim().is_empty() {
                return Err(Error::invalid_roster(format!(
                    "doctor '{}' has an empty id",
                    doctor.name
                )));
            }
            if !seen.insert(doctor.id.as_str()) {
                return Err(Error::invalid_roster(format!(
                    "duplicate doctor id '{}'",
                    doctor.id
                )));
            }
        }
        Ok(Self { doctors })
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Picker options: the sentinel followed by every doctor in roster order
    pub fn options(&self) -> Vec<DoctorOption> {
        std::iter::once(DoctorOption {
            id: String::new(),
            label: NO_DOCTOR_LABEL.to_string(),
        })
        .chain(self.doctors.iter().map(|d| DoctorOption {
            id: d.id.clone(),
            label: d.label(),
        }))
        .collect()
    }

    /// Index into [`Self::options`] for a doctor id (0 = sentinel)
    pub fn option_index(&self, id: &str) -> usize {
        self.doctors
            .iter()
            .position(|d| d.id == id)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

/// The plain record handed to the submission handler.
///
/// Also used as the "initial values" shape for edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub notes: String,
}

/// The in-progress appointment owned by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    /// Empty means no doctor selected
    pub doctor_id: String,
    /// Single combined date + time-of-day value
    pub date: NaiveDateTime,
    pub notes: String,
}

impl AppointmentDraft {
    /// New-appointment defaults: no doctor, the given timestamp, no notes
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            doctor_id: String::new(),
            date: now,
            notes: String::new(),
        }
    }

    /// Draft for edit mode, or defaults when no initial values are given
    pub fn from_initial(initial: Option<AppointmentRequest>, now: NaiveDateTime) -> Self {
        match initial {
            Some(values) => Self {
                doctor_id: values.doctor_id,
                date: values.date,
                notes: values.notes,
            },
            None => Self::new(now),
        }
    }

    pub fn has_doctor(&self) -> bool {
        !self.doctor_id.is_empty()
    }

    /// Compose the submitted record from the current draft
    pub fn to_request(&self) -> AppointmentRequest {
        AppointmentRequest {
            doctor_id: self.doctor_id.clone(),
            date: self.date,
            notes: self.notes.clone(),
        }
    }
}
