//! Field validation for appointment drafts
//!
//! A validation pass looks at a draft and the current instant and returns
//! a brand-new field → message mapping. Nothing is merged with earlier
//! passes: a field that is now valid simply has no entry.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::types::AppointmentDraft;

pub const DOCTOR_REQUIRED_MESSAGE: &str = "Please select a doctor";
pub const DATE_IN_PAST_MESSAGE: &str = "Appointment date must be in the future";

/// A validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "doctorId")]
    DoctorId,
    #[serde(rename = "date")]
    Date,
}

impl Field {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::DoctorId => "doctorId",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one validation pass. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// How far in the future an appointment must be.
///
/// The default is a zero lead: the appointment only has to be strictly
/// after the moment of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_lead: TimeDelta,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_lead: TimeDelta::zero(),
        }
    }
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn with_lead_minutes(minutes: u32) -> Self {
        Self {
            min_lead: TimeDelta::minutes(i64::from(minutes)),
        }
    }

    /// Earliest instant (exclusive) an appointment may be booked for
    pub fn earliest(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_add_signed(self.min_lead)
            .unwrap_or(NaiveDateTime::MAX)
    }

    fn date_message(&self) -> String {
        let minutes = self.min_lead.num_minutes();
        if minutes <= 0 {
            DATE_IN_PAST_MESSAGE.to_string()
        } else {
            format!("Appointment must be at least {} minutes from now", minutes)
        }
    }
}

/// Run one validation pass over `draft` as of `now`.
///
/// Notes are never validated.
pub fn validate(
    draft: &AppointmentDraft,
    now: NaiveDateTime,
    policy: &ValidationPolicy,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.doctor_id.is_empty() {
        errors.insert(Field::DoctorId, DOCTOR_REQUIRED_MESSAGE);
    }

    if draft.date <= policy.earliest(now) {
        errors.insert(Field::Date, policy.date_message());
    }

    tracing::trace!(error_count = errors.len(), "validation pass");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn draft(doctor_id: &str, date: NaiveDateTime) -> AppointmentDraft {
        AppointmentDraft {
            doctor_id: doctor_id.to_string(),
            date,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_doctor_reports_doctor_error() {
        let errors = validate(
            &draft("", now() + TimeDelta::days(1)),
            now(),
            &ValidationPolicy::strict(),
        );
        assert_eq!(errors.get(Field::DoctorId), Some(DOCTOR_REQUIRED_MESSAGE));
        assert!(!errors.contains(Field::Date));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_date_equal_to_now_is_rejected() {
        let errors = validate(&draft("d1", now()), now(), &ValidationPolicy::strict());
        assert_eq!(errors.get(Field::Date), Some(DATE_IN_PAST_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_date_in_past_is_rejected() {
        let errors = validate(
            &draft("d1", now() - TimeDelta::minutes(1)),
            now(),
            &ValidationPolicy::strict(),
        );
        assert!(errors.contains(Field::Date));
    }

    #[test]
    fn test_one_nanosecond_after_now_is_valid() {
        let errors = validate(
            &draft("d1", now() + TimeDelta::nanoseconds(1)),
            now(),
            &ValidationPolicy::strict(),
        );
        assert!(errors.is_valid());
    }

    #[test]
    fn test_both_errors_reported_together() {
        let errors = validate(&draft("", now()), now(), &ValidationPolicy::strict());
        assert_eq!(errors.len(), 2);
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::DoctorId, Field::Date]);
    }

    #[test]
    fn test_notes_are_not_validated() {
        let mut d = draft("d1", now() + TimeDelta::hours(1));
        d.notes = "x".repeat(10_000);
        assert!(validate(&d, now(), &ValidationPolicy::strict()).is_valid());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let d = draft("", now());
        let policy = ValidationPolicy::strict();
        let first = validate(&d, now(), &policy);
        let second = validate(&d, now(), &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lead_time_policy() {
        let policy = ValidationPolicy::with_lead_minutes(30);
        let too_soon = validate(&draft("d1", now() + TimeDelta::minutes(30)), now(), &policy);
        assert_eq!(
            too_soon.get(Field::Date),
            Some("Appointment must be at least 30 minutes from now")
        );

        let ok = validate(&draft("d1", now() + TimeDelta::minutes(31)), now(), &policy);
        assert!(ok.is_valid());
    }

    #[test]
    fn test_errors_serialize_as_field_map() {
        let errors = validate(&draft("", now()), now(), &ValidationPolicy::strict());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["doctorId"], DOCTOR_REQUIRED_MESSAGE);
        assert_eq!(json["date"], DATE_IN_PAST_MESSAGE);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::DoctorId.to_string(), "doctorId");
        assert_eq!(Field::Date.as_str(), "date");
    }
}
