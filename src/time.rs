//! Calendar arithmetic for the solar ephemeris.
//!
//! Julian day and century calculations follow Meeus, "Astronomical Algorithms",
//! 2nd edition, chapter 7. The proleptic Gregorian calendar is assumed for all
//! dates, which matches the calendar `chrono` uses.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Calculates the Julian Day for a Gregorian calendar date and a time of day.
///
/// January and February are treated as months 13 and 14 of the previous year.
///
/// # Arguments
/// * `year` - Year (astronomical numbering, may be zero or negative)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `hours` - Fractional hours since 0h UTC
///
/// # Example
/// ```
/// # use prayer_times::time::julian_day;
/// assert_eq!(julian_day(2010, 1, 2, 0.0), 2_455_198.5);
/// assert_eq!(julian_day(2000, 1, 1, 12.0), 2_451_545.0);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month > 2 {
        (f64::from(year), f64::from(month))
    } else {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    };

    let d = f64::from(day) + hours / 24.0;

    // Gregorian correction
    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5
}

/// Julian Day at 0h UTC of the given date.
#[must_use]
pub fn julian_day_for_date(date: NaiveDate) -> f64 {
    julian_day(date.year(), date.month(), date.day(), 0.0)
}

/// Julian Day of a UTC instant, including the fractional day.
#[must_use]
pub fn julian_day_for_datetime(datetime: &DateTime<Utc>) -> f64 {
    let hours = f64::from(datetime.hour())
        + f64::from(datetime.minute()) / 60.0
        + f64::from(datetime.second()) / 3600.0;
    julian_day(datetime.year(), datetime.month(), datetime.day(), hours)
}

/// Julian centuries elapsed since J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days elapsed since the most recent winter solstice of the hemisphere.
///
/// The northern hemisphere counts from December 21, the southern hemisphere
/// from June 21. The result lies in `[0, days in year)`.
///
/// # Example
/// ```
/// # use prayer_times::time::days_since_solstice;
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
/// assert_eq!(days_since_solstice(35.0, date), 11);
/// assert_eq!(days_since_solstice(-35.0, date), 194);
/// ```
#[must_use]
pub fn days_since_solstice(latitude: f64, date: NaiveDate) -> u32 {
    let year = date.year();
    let day_of_year = date.ordinal();
    let days_in_year = days_in_year(year);

    if latitude >= 0.0 {
        let days = day_of_year + 10;
        if days >= days_in_year {
            days - days_in_year
        } else {
            days
        }
    } else {
        let southern_offset = if is_leap_year(year) { 173 } else { 172 };
        if day_of_year >= southern_offset {
            day_of_year - southern_offset
        } else {
            day_of_year + days_in_year - southern_offset
        }
    }
}

/// Rounds an instant to the nearest whole minute.
///
/// Sub-second precision is dropped first; 30 seconds or more round up.
#[must_use]
pub fn rounded_minute(datetime: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = datetime
        .with_nanosecond(0)
        .and_then(|dt| dt.with_second(0))
        .unwrap_or(datetime);

    if datetime.second() >= 30 {
        truncated
            .checked_add_signed(TimeDelta::minutes(1))
            .unwrap_or(truncated)
    } else {
        truncated
    }
}
