//! Week-number arithmetic.
//!
//! Week `N` of a year starts on the Monday given by the `%W` convention
//! applied to `N - 1`: week 1 is the Monday on or before January 1st,
//! week 2 the first Monday of the year, and so on. When January 1st is
//! itself a Monday, weeks 1 and 2 start on the same day.
//! For years starting Tuesday to Thursday this agrees with ISO-8601.

use crate::errors::{AppError, AppResult};
use crate::models::week_report::DAYS_IN_WEEK;
use chrono::{Datelike, Days, Duration, NaiveDate};

pub const MIN_WEEK: u32 = 1;
pub const MAX_WEEK: u32 = 54;

/// Monday starting week `week` of `year`. The result can fall in the
/// previous year (week 1) or the next one (late weeks).
pub fn first_day_of_week(year: i32, week: u32) -> AppResult<NaiveDate> {
    if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
        return Err(AppError::InvalidWeek { year, week });
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(AppError::InvalidWeek { year, week })?;
    let first_weekday = jan1.weekday().num_days_from_monday() as i64;
    let week0_len = (7 - first_weekday) % 7;
    let w = (week - 1) as i64;

    // 1-based day of the year, possibly <= 0 or past December 31st
    let julian = if w == 0 {
        1 - first_weekday
    } else {
        1 + week0_len + 7 * (w - 1)
    };

    jan1.checked_add_signed(Duration::days(julian - 1))
        .ok_or(AppError::InvalidWeek { year, week })
}

/// First and last day (Monday, Sunday) of the week.
pub fn date_range_from_week(year: i32, week: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = first_day_of_week(year, week)?;
    let last = first
        .checked_add_days(Days::new(DAYS_IN_WEEK as u64 - 1))
        .ok_or(AppError::InvalidWeek { year, week })?;
    Ok((first, last))
}

/// The seven consecutive days starting at `first_day`.
pub fn days_in_week(first_day: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
    let mut days = [first_day; DAYS_IN_WEEK];
    for (i, d) in days.iter_mut().enumerate() {
        *d = first_day + Duration::days(i as i64);
    }
    days
}

/// `(year, week)` the "this week" shortcut resolves to for `date`:
/// its ISO week number within its ISO year.
///
/// Fed to [`first_day_of_week`], that number lands on the week before
/// `date` in years whose 1 January falls on Friday to Monday.
pub fn week_of(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// `(year, week)` for the week before the one containing `date`.
pub fn previous_week_of(date: NaiveDate) -> (i32, u32) {
    week_of(date - Duration::days(DAYS_IN_WEEK as i64))
}
