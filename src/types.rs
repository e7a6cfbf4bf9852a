//! Core data types shared by the solver and the prayer time orchestrator.

use crate::error::check_coordinates;
use crate::math::floor;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use core::fmt;
use core::str::FromStr;

/// A validated geographic location.
///
/// Latitude is positive north of the equator, longitude positive east of Greenwich.
///
/// # Example
/// ```
/// # use prayer_times::Coordinates;
/// let raleigh = Coordinates::new(35.7750, -78.6336).unwrap();
/// assert_eq!(raleigh.latitude(), 35.7750);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedCoordinates"))]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates coordinates from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or NaN values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees (-90 to +90).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to +180).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCoordinates {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(value: UncheckedCoordinates) -> Result<Self> {
        Self::new(value.latitude, value.longitude)
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Values represent hours since 0h UTC of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use prayer_times::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// let before_midnight_prev = HoursUtc::from_hours(-0.5); // 23:30 previous day
/// # assert_eq!(after_midnight.day_and_hours().0, 1);
/// # assert_eq!(before_midnight_prev.day_and_hours().0, -1);
/// # assert_eq!(morning.hours(), 6.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use prayer_times::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Converts to a UTC instant on (or around) `date`, truncated to whole seconds.
    ///
    /// Returns `None` for non-finite hours or instants outside chrono's range.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::HoursUtc;
    /// # use chrono::{NaiveDate, TimeZone, Utc};
    /// let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
    /// let sunset = HoursUtc::from_hours(24.5).to_datetime(date).unwrap();
    /// assert_eq!(sunset, Utc.with_ymd_and_hms(2015, 7, 13, 0, 30, 0).unwrap());
    ///
    /// assert!(HoursUtc::from_hours(f64::NAN).to_datetime(date).is_none());
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn to_datetime(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }

        let (day_offset, hours) = self.day_and_hours();
        let day = date.checked_add_signed(TimeDelta::try_days(i64::from(day_offset))?)?;

        // hours lies in [0, 24), so the floored second count fits a day
        let seconds = floor(hours * 3600.0).clamp(0.0, 86_399.0) as u32;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;

        Some(day.and_time(time).and_utc())
    }
}

/// The six daily events computed for each date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Prayer {
    /// Dawn prayer, at the start of morning twilight
    Fajr,
    /// Sunrise (not a prayer, ends the Fajr window)
    Sunrise,
    /// Midday prayer, just after solar transit
    Dhuhr,
    /// Afternoon prayer, determined by shadow length
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer, at the end of evening twilight
    Isha,
}

impl Prayer {
    /// All events in chronological order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Lowercase name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|prayer| prayer.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::unknown_name("prayer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_coordinates_validation() {
        let c = Coordinates::new(35.7750, -78.6336).unwrap();
        assert_eq!(c.latitude(), 35.7750);
        assert_eq!(c.longitude(), -78.6336);

        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());

        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(Error::invalid_latitude(90.5))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5),
            Err(Error::invalid_longitude(-180.5))
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_day_and_hours() {
        assert_eq!(HoursUtc::from_hours(6.5).day_and_hours(), (0, 6.5));
        assert_eq!(HoursUtc::from_hours(24.0).day_and_hours(), (1, 0.0));

        let (offset, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
        assert_eq!(offset, -1);
        assert!((hours - 23.5).abs() < 1e-10);

        let (offset, hours) = HoursUtc::from_hours(49.25).day_and_hours();
        assert_eq!(offset, 2);
        assert!((hours - 1.25).abs() < 1e-10);
    }

    #[test]
    fn test_to_datetime() {
        let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();

        let t = HoursUtc::from_hours(10.0 + 8.0 / 60.0 + 30.5 / 3600.0);
        assert_eq!(
            t.to_datetime(date),
            Some(Utc.with_ymd_and_hms(2015, 7, 12, 10, 8, 30).unwrap())
        );

        // previous day
        assert_eq!(
            HoursUtc::from_hours(-1.5).to_datetime(date),
            Some(Utc.with_ymd_and_hms(2015, 7, 11, 22, 30, 0).unwrap())
        );

        // next day
        assert_eq!(
            HoursUtc::from_hours(25.0 + 2.0 / 60.0).to_datetime(date),
            Some(Utc.with_ymd_and_hms(2015, 7, 13, 1, 2, 0).unwrap())
        );

        assert_eq!(HoursUtc::from_hours(f64::NAN).to_datetime(date), None);
        assert_eq!(HoursUtc::from_hours(f64::INFINITY).to_datetime(date), None);
        assert_eq!(
            HoursUtc::from_hours(-f64::INFINITY).to_datetime(date),
            None
        );
    }

    #[test]
    fn test_to_datetime_at_range_edge() {
        assert_eq!(HoursUtc::from_hours(30.0).to_datetime(NaiveDate::MAX), None);
        assert_eq!(HoursUtc::from_hours(-3.0).to_datetime(NaiveDate::MIN), None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_prayer_names() {
        let names: Vec<&str> = Prayer::ALL.iter().map(Prayer::name).collect();
        assert_eq!(
            names,
            ["fajr", "sunrise", "dhuhr", "asr", "maghrib", "isha"]
        );

        for prayer in Prayer::ALL {
            assert_eq!(prayer.to_string().parse::<Prayer>(), Ok(prayer));
        }
        assert_eq!("Maghrib".parse::<Prayer>(), Ok(Prayer::Maghrib));
        assert_eq!(
            "midnight".parse::<Prayer>(),
            Err(Error::unknown_name("prayer"))
        );
    }

    #[test]
    fn test_prayer_order() {
        assert!(Prayer::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
