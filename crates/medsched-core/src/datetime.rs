//! Date/time composition helpers
//!
//! The date picker and the time picker each hand back a full timestamp,
//! but each one only means to change its own dimension. These helpers
//! splice that dimension into the existing value and leave the rest alone.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Replace year/month/day of `base` with those of `date_part`.
///
/// The time of day of `base` is kept exactly (including seconds and
/// sub-second precision).
pub fn merge_date_part(base: NaiveDateTime, date_part: NaiveDateTime) -> NaiveDateTime {
    date_part.date().and_time(base.time())
}

/// Replace hour/minute of `base` with those of `time_part`.
///
/// The calendar date of `base` is kept exactly; seconds and sub-second
/// precision also come from `base`.
pub fn merge_time_part(base: NaiveDateTime, time_part: NaiveDateTime) -> NaiveDateTime {
    let (hour, minute) = (time_part.hour(), time_part.minute());
    let time = NaiveTime::from_hms_nano_opt(hour, minute, base.second(), base.nanosecond())
        // Leap-second nanos are only representable at :59
        .or_else(|| NaiveTime::from_hms_opt(hour, minute, base.second()))
        .unwrap_or_else(|| time_part.time());
    base.date().and_time(time)
}

/// Move a date by whole months, clamping the day to the target month's end.
pub fn shift_months(value: NaiveDateTime, months: i32) -> NaiveDateTime {
    let shifted = if months >= 0 {
        value.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        value.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(value)
}

/// Move a date by whole days, saturating at chrono's representable range.
pub fn shift_days(value: NaiveDateTime, days: i64) -> NaiveDateTime {
    TimeDelta::try_days(days)
        .and_then(|delta| value.checked_add_signed(delta))
        .unwrap_or(value)
}

/// Move the time of day by `minutes`, wrapping within the same calendar day.
pub fn shift_time_of_day(value: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    const MINUTES_PER_DAY: i64 = 24 * 60;
    let current = i64::from(value.hour()) * 60 + i64::from(value.minute());
    let wrapped = (current + minutes).rem_euclid(MINUTES_PER_DAY);
    let hour = (wrapped / 60) as u32;
    let minute = (wrapped % 60) as u32;
    value
        .with_hour(hour)
        .and_then(|v| v.with_minute(minute))
        .unwrap_or(value)
}

/// Round the minute down to a multiple of `step` (step 0 or 1 is a no-op)
pub fn floor_to_step(value: NaiveDateTime, step: u32) -> NaiveDateTime {
    if step <= 1 {
        return value;
    }
    let minute = value.minute() - value.minute() % step;
    value.with_minute(minute).unwrap_or(value)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_merge_date_part_keeps_time_of_day() {
        let base = at(2026, 10, 19, 10, 45, 12);
        let picked = at(2026, 12, 24, 3, 7, 59);

        let merged = merge_date_part(base, picked);

        assert_eq!(merged.date(), picked.date());
        assert_eq!(merged.time(), base.time());
    }

    #[test]
    fn test_merge_date_part_keeps_subsecond_precision() {
        let base = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_nano_opt(8, 15, 30, 123_456_789)
            .unwrap();
        let picked = at(2027, 1, 1, 0, 0, 0);

        let merged = merge_date_part(base, picked);

        assert_eq!(merged.time(), base.time());
        assert_eq!(merged.nanosecond(), 123_456_789);
    }

    #[test]
    fn test_merge_time_part_keeps_date() {
        let base = at(2026, 10, 19, 10, 45, 12);
        let picked = at(1999, 1, 1, 16, 30, 0);

        let merged = merge_time_part(base, picked);

        assert_eq!(merged.date(), base.date());
        assert_eq!(merged.hour(), 16);
        assert_eq!(merged.minute(), 30);
        assert_eq!(merged.second(), 12);
    }

    #[test]
    fn test_merge_time_part_with_leap_second_base() {
        let base = NaiveDate::from_ymd_opt(2026, 6, 30)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap();
        let picked = at(2026, 1, 1, 9, 0, 0);

        let merged = merge_time_part(base, picked);

        assert_eq!(merged.date(), base.date());
        assert_eq!((merged.hour(), merged.minute()), (9, 0));
    }

    #[test]
    fn test_merges_are_independent() {
        let base = at(2026, 10, 19, 10, 0, 0);
        let with_date = merge_date_part(base, at(2026, 11, 5, 22, 22, 0));
        let with_both = merge_time_part(with_date, at(2000, 2, 2, 14, 15, 0));

        assert_eq!(with_both, at(2026, 11, 5, 14, 15, 0));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        let jan31 = at(2026, 1, 31, 9, 0, 0);
        assert_eq!(shift_months(jan31, 1), at(2026, 2, 28, 9, 0, 0));
        assert_eq!(shift_months(jan31, -2), at(2025, 11, 30, 9, 0, 0));
    }

    #[test]
    fn test_shift_days_crosses_month() {
        let value = at(2026, 10, 31, 9, 0, 0);
        assert_eq!(shift_days(value, 1), at(2026, 11, 1, 9, 0, 0));
        assert_eq!(shift_days(value, -31), at(2026, 9, 30, 9, 0, 0));
    }

    #[test]
    fn test_shift_time_of_day_wraps_without_changing_date() {
        let value = at(2026, 10, 19, 23, 55, 0);
        let shifted = shift_time_of_day(value, 10);
        assert_eq!(shifted, at(2026, 10, 19, 0, 5, 0));

        let back = shift_time_of_day(at(2026, 10, 19, 0, 0, 0), -60);
        assert_eq!(back, at(2026, 10, 19, 23, 0, 0));
    }

    #[test]
    fn test_floor_to_step() {
        let value = at(2026, 10, 19, 9, 37, 0);
        assert_eq!(floor_to_step(value, 5).minute(), 35);
        assert_eq!(floor_to_step(value, 15).minute(), 30);
        assert_eq!(floor_to_step(value, 0), value);
    }

    #[test]
    fn test_days_in_month() {
        let feb_leap = NaiveDate::from_ymd_opt(2028, 2, 10).unwrap();
        let feb = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let oct = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(days_in_month(feb_leap), 29);
        assert_eq!(days_in_month(feb), 28);
        assert_eq!(days_in_month(oct), 31);
        assert_eq!(first_of_month(oct).day(), 1);
    }
}
