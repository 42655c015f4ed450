//! age.rs
//!
//! The computation kernel: pure functions turning a birth instant and a
//! "now" instant into an age breakdown and a countdown to the next
//! birthday. No state, no side effects; every call is independent and
//! deterministic for the same pair of instants.
//!
//! Two deliberate behavioral notes, both documented on the functions:
//!   • the age breakdown re-anchors the elapsed span at the Unix epoch
//!     instead of doing a true calendar diff from the birth date
//!   • a Feb 29 birthday rolls over to Mar 1 in non-leap years

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::Serialize;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// The one domain error: the birth instant is strictly after "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("birth date is in the future")]
    FutureDate,
}

/// Elapsed age decomposed into calendar-unit fields.
///
/// `total_elapsed_ms` is always exactly `now − birth`. The six decomposed
/// fields are a function of that span alone: the span is re-anchored at
/// 1970-01-01T00:00:00 and the calendar fields are read off the resulting
/// date-time. This is NOT a true "years since birth" calendar difference
/// (leap-year lengths are folded in relative to the epoch, not the birth
/// date), but it is reproducible and matches the shipped behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub total_elapsed_ms: i64,
}

/// Time remaining until the next anniversary of the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownBreakdown {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Computes the elapsed age between `birth` and `now`.
///
/// Fails with [`AgeError::FutureDate`] when `birth` is strictly after
/// `now`; this is the only validation rule in the system.
pub fn compute_age(birth: NaiveDateTime, now: NaiveDateTime) -> Result<AgeBreakdown, AgeError> {
    if birth > now {
        return Err(AgeError::FutureDate);
    }

    let total_elapsed_ms = now.signed_duration_since(birth).num_milliseconds();

    // Reinterpret the span as a date-time anchored at the Unix epoch and
    // read the calendar fields (year 1970 == zero years elapsed).
    let anchored = NaiveDateTime::UNIX_EPOCH + TimeDelta::milliseconds(total_elapsed_ms);

    Ok(AgeBreakdown {
        years: (anchored.year() - 1970) as u32,
        months: anchored.month0(),
        days: anchored.day() - 1,
        hours: anchored.hour(),
        minutes: anchored.minute(),
        seconds: anchored.second(),
        total_elapsed_ms,
    })
}

/// Computes the time remaining until the next occurrence of `birth`'s
/// month/day, evaluated against `now`'s local calendar.
///
/// The target is local midnight of the anniversary. An anniversary at or
/// before `now` (equality counts as passed) pushes the target year forward
/// by one, so a birthday at this exact midnight yields a full year of
/// countdown. No precondition on `birth` vs `now` ordering.
pub fn compute_countdown(birth: NaiveDate, now: NaiveDateTime) -> CountdownBreakdown {
    let mut target = anniversary_on(now.year(), birth);
    if target <= now {
        target = anniversary_on(now.year() + 1, birth);
    }

    let diff_ms = target.signed_duration_since(now).num_milliseconds();

    CountdownBreakdown {
        days: diff_ms / MS_PER_DAY,
        hours: ((diff_ms % MS_PER_DAY) / MS_PER_HOUR) as u32,
        minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
        seconds: ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
    }
}

/// Local midnight of `birth`'s anniversary in `year`.
///
/// The only month/day combination that can be invalid for some years is
/// Feb 29; it rolls over to Mar 1, matching calendar-overflow semantics.
fn anniversary_on(year: i32, birth: NaiveDate) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("Mar 1 is a valid date in every year")
        .and_time(chrono::NaiveTime::MIN)
}
