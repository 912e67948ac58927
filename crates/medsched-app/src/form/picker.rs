//! Working state of the date and time picker modals
//!
//! Both pickers hold a full candidate timestamp and hand it back whole on
//! confirm. Keeping only "their" dimension is the form's job
//! (see [`AppointmentForm::apply_date_pick`](super::AppointmentForm::apply_date_pick)).

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use medsched_core::datetime::{
    days_in_month, first_of_month, shift_days, shift_months, shift_time_of_day,
};

/// Calendar picker: moves a candidate by days, weeks and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerState {
    candidate: NaiveDateTime,
}

impl DatePickerState {
    pub fn new(value: NaiveDateTime) -> Self {
        Self { candidate: value }
    }

    pub fn candidate(&self) -> NaiveDateTime {
        self.candidate
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.candidate.date()
    }

    /// Restart from `value` (called when the modal opens)
    pub fn seed(&mut self, value: NaiveDateTime) {
        self.candidate = value;
    }

    pub fn move_days(&mut self, days: i64) {
        self.candidate = shift_days(self.candidate, days);
    }

    pub fn move_weeks(&mut self, weeks: i64) {
        self.move_days(weeks.saturating_mul(7));
    }

    /// Month steps clamp the day (Jan 31 + 1 month = Feb 28/29)
    pub fn move_months(&mut self, months: i32) {
        self.candidate = shift_months(self.candidate, months);
    }

    /// Jump to `today`, keeping the candidate's time of day
    pub fn jump_to(&mut self, today: NaiveDate) {
        self.candidate = today.and_time(self.candidate.time());
    }

    /// Day-of-month cells of the candidate's month, Monday-first, one row
    /// per week. Cells outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<u32>; 7]> {
        let first = first_of_month(self.selected_date());
        let offset = first.weekday().num_days_from_monday() as usize;
        let days = days_in_month(first) as usize;

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        for cell in 0..offset + days {
            if cell >= offset {
                week[cell % 7] = Some((cell - offset + 1) as u32);
            }
            if cell % 7 == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

/// Clock-face picker: hours and stepped minutes, wrapping within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePickerState {
    candidate: NaiveDateTime,
    minute_step: u32,
}

impl TimePickerState {
    pub fn new(value: NaiveDateTime, minute_step: u32) -> Self {
        Self {
            candidate: value,
            minute_step: minute_step.max(1),
        }
    }

    pub fn candidate(&self) -> NaiveDateTime {
        self.candidate
    }

    pub fn hour(&self) -> u32 {
        self.candidate.hour()
    }

    pub fn minute(&self) -> u32 {
        self.candidate.minute()
    }

    pub fn minute_step(&self) -> u32 {
        self.minute_step
    }

    pub fn seed(&mut self, value: NaiveDateTime) {
        self.candidate = value;
    }

    pub fn move_hours(&mut self, hours: i64) {
        self.candidate = shift_time_of_day(self.candidate, hours.saturating_mul(60));
    }

    pub fn move_minutes(&mut self, steps: i64) {
        let minutes = steps.saturating_mul(i64::from(self.minute_step));
        self.candidate = shift_time_of_day(self.candidate, minutes);
    }
}
