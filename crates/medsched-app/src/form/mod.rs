//! Appointment form state
//!
//! [`AppointmentForm`] owns the draft, the error map from the last submit
//! attempt, the picker visibility flags and the loading flag. Everything
//! else in here (focus, doctor cursor, picker candidates) is presentation
//! state for the TUI and never reaches the submitted record.

pub mod picker;

pub use picker::{DatePickerState, TimePickerState};

use chrono::NaiveDateTime;
use medsched_core::{
    merge_date_part, merge_time_part, validate, AppointmentDraft, AppointmentRequest,
    DoctorOption, DoctorRoster, Field, ValidationErrors, ValidationPolicy,
};

use crate::config::FormSettings;

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Doctor,
    Date,
    Time,
    Notes,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Doctor => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Notes,
            FormField::Notes => FormField::Submit,
            FormField::Submit => FormField::Doctor,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Doctor => FormField::Submit,
            FormField::Date => FormField::Doctor,
            FormField::Time => FormField::Date,
            FormField::Notes => FormField::Time,
            FormField::Submit => FormField::Notes,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Doctor => "Doctor",
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::Notes => "Notes",
            FormField::Submit => "Schedule",
        }
    }
}

impl From<Field> for FormField {
    fn from(field: Field) -> Self {
        match field {
            Field::DoctorId => FormField::Doctor,
            Field::Date => FormField::Date,
        }
    }
}

/// Which picker modal is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerVisibility {
    pub date_open: bool,
    pub time_open: bool,
}

impl PickerVisibility {
    pub fn any_open(&self) -> bool {
        self.date_open || self.time_open
    }
}

/// The appointment form
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    roster: DoctorRoster,
    draft: AppointmentDraft,
    /// Draft as first mounted, for dirty tracking
    initial: AppointmentDraft,
    errors: ValidationErrors,
    pickers: PickerVisibility,
    is_loading: bool,

    pub focus: FormField,
    doctor_cursor: usize,
    date_picker: DatePickerState,
    time_picker: TimePickerState,
    max_notes_len: usize,
}

impl AppointmentForm {
    /// Mount the form over `roster`, in edit mode when `initial` is given.
    pub fn new(
        roster: DoctorRoster,
        initial: Option<AppointmentRequest>,
        now: NaiveDateTime,
    ) -> Self {
        Self::with_settings(roster, initial, now, &FormSettings::default())
    }

    pub fn with_settings(
        roster: DoctorRoster,
        initial: Option<AppointmentRequest>,
        now: NaiveDateTime,
        settings: &FormSettings,
    ) -> Self {
        let draft = AppointmentDraft::from_initial(initial, now);
        let doctor_cursor = roster.option_index(&draft.doctor_id);
        Self {
            date_picker: DatePickerState::new(draft.date),
            time_picker: TimePickerState::new(draft.date, settings.minute_step),
            initial: draft.clone(),
            draft,
            roster,
            errors: ValidationErrors::new(),
            pickers: PickerVisibility::default(),
            is_loading: false,
            focus: FormField::default(),
            doctor_cursor,
            max_notes_len: settings.max_notes_len,
        }
    }

    /// Builder for the optional external loading input
    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Getters
    // ─────────────────────────────────────────────────────────

    pub fn roster(&self) -> &DoctorRoster {
        &self.roster
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn doctor_id(&self) -> &str {
        &self.draft.doctor_id
    }

    pub fn date(&self) -> NaiveDateTime {
        self.draft.date
    }

    pub fn notes(&self) -> &str {
        &self.draft.notes
    }

    pub fn pickers(&self) -> PickerVisibility {
        self.pickers
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    pub fn doctor_options(&self) -> Vec<DoctorOption> {
        self.roster.options()
    }

    pub fn doctor_cursor(&self) -> usize {
        self.doctor_cursor
    }

    pub fn date_picker(&self) -> &DatePickerState {
        &self.date_picker
    }

    pub fn time_picker(&self) -> &TimePickerState {
        &self.time_picker
    }

    pub fn max_notes_len(&self) -> usize {
        self.max_notes_len
    }

    // ─────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────

    pub fn set_doctor_id(&mut self, doctor_id: impl Into<String>) {
        self.draft.doctor_id = doctor_id.into();
        self.doctor_cursor = self.roster.option_index(&self.draft.doctor_id);
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.draft.date = date;
    }

    /// Replace the notes as given. The length limit only applies to typing.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Opening the date picker seeds its candidate from the current draft
    pub fn set_date_picker_open(&mut self, open: bool) {
        if open && !self.pickers.date_open {
            self.date_picker.seed(self.draft.date);
        }
        self.pickers.date_open = open;
    }

    pub fn set_time_picker_open(&mut self, open: bool) {
        if open && !self.pickers.time_open {
            self.time_picker.seed(self.draft.date);
        }
        self.pickers.time_open = open;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    // ─────────────────────────────────────────────────────────
    // Picker results
    // ─────────────────────────────────────────────────────────

    /// Take year/month/day from `picked`; the time of day is untouched.
    pub fn apply_date_pick(&mut self, picked: NaiveDateTime) {
        self.set_date(merge_date_part(self.draft.date, picked));
        self.set_date_picker_open(false);
    }

    /// Take hour/minute from `picked`; the calendar date is untouched.
    pub fn apply_time_pick(&mut self, picked: NaiveDateTime) {
        self.set_date(merge_time_part(self.draft.date, picked));
        self.set_time_picker_open(false);
    }

    pub fn date_picker_mut(&mut self) -> &mut DatePickerState {
        &mut self.date_picker
    }

    pub fn time_picker_mut(&mut self) -> &mut TimePickerState {
        &mut self.time_picker
    }

    pub fn confirm_date_picker(&mut self) {
        let picked = self.date_picker.candidate();
        self.apply_date_pick(picked);
    }

    pub fn confirm_time_picker(&mut self) {
        let picked = self.time_picker.candidate();
        self.apply_time_pick(picked);
    }

    // ─────────────────────────────────────────────────────────
    // Doctor list and notes editing
    // ─────────────────────────────────────────────────────────

    /// Move the highlighted option, clamped to the option list (sentinel included)
    pub fn move_doctor_cursor(&mut self, delta: isize) {
        let last = self.roster.len();
        self.doctor_cursor = self.doctor_cursor.saturating_add_signed(delta).min(last);
    }

    /// Select the highlighted option; the sentinel clears the selection
    pub fn select_doctor_at_cursor(&mut self) {
        let id = self
            .doctor_options()
            .get(self.doctor_cursor)
            .map(|option| option.id.clone())
            .unwrap_or_default();
        self.set_doctor_id(id);
    }

    /// Append one character; ignored at the length limit
    pub fn push_note_char(&mut self, c: char) {
        if self.draft.notes.chars().count() < self.max_notes_len {
            self.draft.notes.push(c);
        }
    }

    pub fn pop_note_char(&mut self) {
        self.draft.notes.pop();
    }

    // ─────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────

    /// Run one validation pass and store the result. Returns `true` when valid.
    pub fn validate(&mut self, now: NaiveDateTime, policy: &ValidationPolicy) -> bool {
        self.errors = validate(&self.draft, now, policy);
        self.errors.is_valid()
    }

    /// Discard the draft and start a new appointment
    pub fn reset(&mut self, now: NaiveDateTime) {
        self.draft = AppointmentDraft::new(now);
        self.initial = self.draft.clone();
        self.errors = ValidationErrors::new();
        self.pickers = PickerVisibility::default();
        self.focus = FormField::default();
        self.doctor_cursor = 0;
        self.date_picker.seed(now);
        self.time_picker.seed(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use medsched_core::Doctor;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn now() -> NaiveDateTime {
        at(2026, 10, 19, 9, 0)
    }

    fn roster() -> DoctorRoster {
        DoctorRoster::new(vec![
            Doctor::new("d1", "Ana", "Cardio"),
            Doctor::new("d2", "Bruno", "Dermatology"),
        ])
        .unwrap()
    }

    fn form() -> AppointmentForm {
        AppointmentForm::new(roster(), None, now())
    }

    #[test]
    fn test_new_form_defaults() {
        let form = form();
        assert_eq!(form.doctor_id(), "");
        assert_eq!(form.date(), now());
        assert_eq!(form.notes(), "");
        assert_eq!(form.pickers(), PickerVisibility::default());
        assert!(!form.is_loading());
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
        assert_eq!(form.doctor_cursor(), 0);
    }

    #[test]
    fn test_edit_mode_uses_initial_values() {
        let initial = AppointmentRequest {
            doctor_id: "d2".to_string(),
            date: at(2026, 11, 2, 14, 30),
            notes: "follow-up".to_string(),
        };
        let form = AppointmentForm::new(roster(), Some(initial), now());

        assert_eq!(form.doctor_id(), "d2");
        assert_eq!(form.date(), at(2026, 11, 2, 14, 30));
        assert_eq!(form.notes(), "follow-up");
        assert_eq!(form.doctor_cursor(), 2);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_setters_only_mutate_state() {
        let mut form = form();
        form.set_doctor_id("d1");
        form.set_date(at(2026, 10, 20, 10, 0));
        form.set_notes("hello");

        assert_eq!(form.doctor_id(), "d1");
        assert_eq!(form.doctor_cursor(), 1);
        assert_eq!(form.date(), at(2026, 10, 20, 10, 0));
        assert_eq!(form.notes(), "hello");
        assert!(form.errors().is_empty());
        assert!(form.is_dirty());
    }

    #[test]
    fn test_apply_date_pick_keeps_time_exactly() {
        let mut form = form();
        let base = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_nano_opt(15, 42, 17, 123_456_789)
            .unwrap();
        form.set_date(base);
        form.set_date_picker_open(true);

        form.apply_date_pick(at(2027, 1, 5, 3, 3));

        let date = form.date();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2027, 1, 5).unwrap());
        assert_eq!(date.time(), base.time());
        assert!(!form.pickers().date_open);
    }

    #[test]
    fn test_apply_time_pick_keeps_date() {
        let mut form = form();
        form.set_date(at(2026, 12, 24, 9, 0));
        form.set_time_picker_open(true);

        form.apply_time_pick(at(2020, 1, 1, 18, 30));

        assert_eq!(form.date(), at(2026, 12, 24, 18, 30));
        assert!(!form.pickers().time_open);
    }

    #[test]
    fn test_date_picker_confirm_uses_candidate() {
        let mut form = form();
        form.set_date(at(2026, 10, 19, 10, 0));
        form.set_date_picker_open(true);
        form.date_picker_mut().move_days(1);

        form.confirm_date_picker();

        assert_eq!(form.date(), at(2026, 10, 20, 10, 0));
    }

    #[test]
    fn test_time_picker_confirm_uses_candidate() {
        let mut form = form();
        form.set_date(at(2026, 10, 20, 10, 0));
        form.set_time_picker_open(true);
        form.time_picker_mut().move_hours(1);
        form.time_picker_mut().move_minutes(3);

        form.confirm_time_picker();

        assert_eq!(form.date(), at(2026, 10, 20, 11, 15));
    }

    #[test]
    fn test_opening_picker_seeds_candidate() {
        let mut form = form();
        form.set_date(at(2026, 11, 1, 8, 0));
        form.set_date_picker_open(true);
        form.set_time_picker_open(true);

        assert_eq!(form.date_picker().candidate(), at(2026, 11, 1, 8, 0));
        assert_eq!(form.time_picker().candidate(), at(2026, 11, 1, 8, 0));
    }

    #[test]
    fn test_doctor_cursor_clamps_and_selects() {
        let mut form = form();
        form.move_doctor_cursor(-1);
        assert_eq!(form.doctor_cursor(), 0);

        form.move_doctor_cursor(5);
        assert_eq!(form.doctor_cursor(), 2);
        form.select_doctor_at_cursor();
        assert_eq!(form.doctor_id(), "d2");

        form.move_doctor_cursor(-2);
        form.select_doctor_at_cursor();
        assert_eq!(form.doctor_id(), "");
    }

    #[test]
    fn test_notes_respect_limit() {
        let settings = FormSettings {
            max_notes_len: 3,
            ..FormSettings::default()
        };
        let mut form = AppointmentForm::with_settings(roster(), None, now(), &settings);

        for c in "abcd".chars() {
            form.push_note_char(c);
        }
        assert_eq!(form.notes(), "abc");

        form.pop_note_char();
        assert_eq!(form.notes(), "ab");

        form.set_notes("éééé");
        assert_eq!(form.notes(), "éééé");

        // Typing stays blocked while over the limit
        form.push_note_char('x');
        assert_eq!(form.notes(), "éééé");
    }

    #[test]
    fn test_validate_stores_errors() {
        let mut form = form();
        assert!(!form.validate(now(), &ValidationPolicy::strict()));
        assert!(form.errors().contains(Field::DoctorId));
        assert!(form.errors().contains(Field::Date));

        form.set_doctor_id("d1");
        form.set_date(now().with_hour(10).unwrap());
        assert!(form.validate(now(), &ValidationPolicy::strict()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut form = form();
        form.set_doctor_id("d1");
        form.set_notes("x");
        form.focus = FormField::Notes;
        form.validate(now(), &ValidationPolicy::strict());

        let later = at(2026, 10, 19, 12, 0);
        form.reset(later);

        assert_eq!(form.doctor_id(), "");
        assert_eq!(form.date(), later);
        assert_eq!(form.notes(), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.focus, FormField::Doctor);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_focus_cycle() {
        let mut field = FormField::Doctor;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Doctor);
        assert_eq!(FormField::Doctor.prev(), FormField::Submit);
        assert_eq!(FormField::from(Field::Date), FormField::Date);
    }
}
