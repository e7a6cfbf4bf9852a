//! Daily prayer times for one location and date.
//!
//! Sunrise, Dhuhr, Asr and Maghrib come straight from the solar events. Fajr
//! and Isha come from twilight angles but are bounded by a safe value derived
//! from the length of the night, so that high latitudes and short summer
//! nights still yield usable times.

use crate::math::{ceil, floor};
use crate::method::CalculationMethod;
use crate::parameters::CalculationParameters;
use crate::solar::SolarTime;
use crate::time::{days_since_solstice, rounded_minute};
use crate::types::{Coordinates, HoursUtc, Prayer};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use tracing::debug;

/// Latitude from which the Moonsighting Committee switches from the seasonal
/// tables to one seventh of the night.
const MOONSIGHTING_SEVENTH_LATITUDE: f64 = 55.0;

/// Prayer times for one date, as UTC instants rounded to the minute.
///
/// # Example
/// ```
/// # use prayer_times::{CalculationMethod, Coordinates, Madhab, PrayerTimes};
/// # use chrono::{NaiveDate, TimeZone, Utc};
/// let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
/// let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
/// let params = CalculationMethod::NorthAmerica
///     .parameters()
///     .with_madhab(Madhab::Hanafi);
///
/// let times = PrayerTimes::new(coordinates, date, &params).unwrap();
/// assert_eq!(times.fajr(), Utc.with_ymd_and_hms(2015, 7, 12, 8, 42, 0).unwrap());
/// assert_eq!(times.isha(), Utc.with_ymd_and_hms(2015, 7, 13, 1, 57, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedPrayerTimes"))]
pub struct PrayerTimes {
    date: NaiveDate,
    fajr: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    dhuhr: DateTime<Utc>,
    asr: DateTime<Utc>,
    maghrib: DateTime<Utc>,
    isha: DateTime<Utc>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedPrayerTimes {
    date: NaiveDate,
    fajr: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    dhuhr: DateTime<Utc>,
    asr: DateTime<Utc>,
    maghrib: DateTime<Utc>,
    isha: DateTime<Utc>,
}

// Order is not checked: user adjustments may legitimately reorder the times.
#[cfg(feature = "serde")]
impl TryFrom<UncheckedPrayerTimes> for PrayerTimes {
    type Error = Error;

    fn try_from(value: UncheckedPrayerTimes) -> Result<Self> {
        use chrono::Timelike;

        let times = [
            value.fajr,
            value.sunrise,
            value.dhuhr,
            value.asr,
            value.maghrib,
            value.isha,
        ];
        if times
            .iter()
            .any(|time| time.second() != 0 || time.nanosecond() != 0)
        {
            return Err(Error::invalid_datetime(
                "prayer time is not rounded to the minute",
            ));
        }

        Ok(Self {
            date: value.date,
            fajr: value.fajr,
            sunrise: value.sunrise,
            dhuhr: value.dhuhr,
            asr: value.asr,
            maghrib: value.maghrib,
            isha: value.isha,
        })
    }
}

impl PrayerTimes {
    /// Computes the prayer times for `date` at `coordinates`.
    ///
    /// # Errors
    /// - `UndefinedSolution` when sunrise, Dhuhr, Asr or Maghrib cannot be
    ///   resolved (polar day or polar night).
    /// - `InvalidDateTime` when the date sits at the edge of chrono's range.
    ///
    /// Fajr and Isha never fail on angle grounds; they fall back to their
    /// safe values.
    pub fn new(
        coordinates: Coordinates,
        date: NaiveDate,
        parameters: &CalculationParameters,
    ) -> Result<Self> {
        let solar_time = SolarTime::new(date, coordinates)?;
        let resolve = |hours: Option<HoursUtc>, prayer: Prayer| {
            hours.and_then(|h| h.to_datetime(date)).ok_or_else(|| {
                debug!(%prayer, %date, latitude = coordinates.latitude(), "event undefined");
                Error::undefined_solution(prayer)
            })
        };

        let sunrise = resolve(solar_time.sunrise(), Prayer::Sunrise)?;
        let dhuhr = resolve(Some(solar_time.transit()), Prayer::Dhuhr)?;
        let asr = resolve(
            solar_time.afternoon_shadow_time(parameters.madhab.shadow_length().ratio()),
            Prayer::Asr,
        )?;
        let maghrib = resolve(solar_time.sunset(), Prayer::Maghrib)?;

        let night = checked_add(sunrise, TimeDelta::days(1))? - maghrib;
        let night_seconds = night.num_seconds() as f64;
        let portions = parameters.night_portions();
        let seasonal = parameters.method == CalculationMethod::MoonsightingCommittee
            && coordinates.latitude() < MOONSIGHTING_SEVENTH_LATITUDE;
        let seventh = parameters.method == CalculationMethod::MoonsightingCommittee
            && !seasonal;

        let fajr_safe = if seasonal {
            season_adjusted_morning_twilight(coordinates.latitude(), date, sunrise)?
        } else if seventh {
            checked_add(sunrise, TimeDelta::seconds(-((night_seconds / 7.0) as i64)))?
        } else {
            checked_add(
                sunrise,
                TimeDelta::seconds(-((portions.fajr * night_seconds) as i64)),
            )?
        };
        let fajr = match solar_time
            .hour_angle(-parameters.fajr_angle, false)
            .and_then(|h| h.to_datetime(date))
        {
            Some(fajr) if fajr >= fajr_safe => fajr,
            computed => {
                debug!(
                    prayer = %Prayer::Fajr,
                    rule = %parameters.high_latitude_rule,
                    method = %parameters.method,
                    undefined = computed.is_none(),
                    "using safe value"
                );
                fajr_safe
            }
        };

        let isha = if parameters.isha_interval > 0 {
            checked_add(
                maghrib,
                TimeDelta::minutes(i64::from(parameters.isha_interval)),
            )?
        } else {
            let isha_safe = if seasonal {
                season_adjusted_evening_twilight(coordinates.latitude(), date, maghrib)?
            } else if seventh {
                checked_add(maghrib, TimeDelta::seconds((night_seconds / 7.0) as i64))?
            } else {
                checked_add(
                    maghrib,
                    TimeDelta::seconds((portions.isha * night_seconds) as i64),
                )?
            };
            match solar_time
                .hour_angle(-parameters.isha_angle, true)
                .and_then(|h| h.to_datetime(date))
            {
                Some(isha) if isha <= isha_safe => isha,
                computed => {
                    debug!(
                        prayer = %Prayer::Isha,
                        rule = %parameters.high_latitude_rule,
                        method = %parameters.method,
                        undefined = computed.is_none(),
                        "using safe value"
                    );
                    isha_safe
                }
            }
        };

        let method_adjustments = parameters.method.method_adjustments();
        let finalize = |time: DateTime<Utc>, prayer: Prayer| -> Result<DateTime<Utc>> {
            let offset = parameters
                .adjustments
                .for_prayer(prayer)
                .checked_add(method_adjustments.for_prayer(prayer))
                .and_then(TimeDelta::try_minutes)
                .ok_or(Error::invalid_datetime("adjustment out of range"))?;
            checked_add(time, offset).map(rounded_minute)
        };

        Ok(Self {
            date,
            fajr: finalize(fajr, Prayer::Fajr)?,
            sunrise: finalize(sunrise, Prayer::Sunrise)?,
            dhuhr: finalize(dhuhr, Prayer::Dhuhr)?,
            asr: finalize(asr, Prayer::Asr)?,
            maghrib: finalize(maghrib, Prayer::Maghrib)?,
            isha: finalize(isha, Prayer::Isha)?,
        })
    }

    /// The date the times were computed for.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Fajr (dawn).
    #[must_use]
    pub const fn fajr(&self) -> DateTime<Utc> {
        self.fajr
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    /// Dhuhr (midday).
    #[must_use]
    pub const fn dhuhr(&self) -> DateTime<Utc> {
        self.dhuhr
    }

    /// Asr (afternoon).
    #[must_use]
    pub const fn asr(&self) -> DateTime<Utc> {
        self.asr
    }

    /// Maghrib (sunset).
    #[must_use]
    pub const fn maghrib(&self) -> DateTime<Utc> {
        self.maghrib
    }

    /// Isha (night).
    #[must_use]
    pub const fn isha(&self) -> DateTime<Utc> {
        self.isha
    }

    /// Time of one prayer.
    #[must_use]
    pub const fn time_for_prayer(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The latest prayer that has started at `at`, or `None` before Fajr.
    #[must_use]
    pub fn current_prayer(&self, at: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL
            .into_iter()
            .rev()
            .find(|&prayer| self.time_for_prayer(prayer) <= at)
    }

    /// The first prayer still to come after `at`, or `None` after Isha.
    #[must_use]
    pub fn next_prayer(&self, at: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL
            .into_iter()
            .find(|&prayer| self.time_for_prayer(prayer) > at)
    }

    /// Iterates over the six times in chronological order of the prayers.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(|prayer| (prayer, self.time_for_prayer(prayer)))
    }
}

/// Computes prayer times for `days` consecutive dates starting at `start`.
///
/// Each item is an independent computation, so a polar date yields an error
/// without affecting its neighbours.
///
/// # Example
/// ```
/// # use prayer_times::{prayer_times_for_days, CalculationMethod, Coordinates};
/// # use chrono::NaiveDate;
/// let makkah = Coordinates::new(21.4225, 39.8262).unwrap();
/// let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
/// let params = CalculationMethod::UmmAlQura.parameters();
///
/// let month: Vec<_> = prayer_times_for_days(makkah, start, 31, &params)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(month.len(), 31);
/// assert_eq!(month[30].date(), NaiveDate::from_ymd_opt(2016, 1, 31).unwrap());
/// ```
pub fn prayer_times_for_days(
    coordinates: Coordinates,
    start: NaiveDate,
    days: u32,
    parameters: &CalculationParameters,
) -> impl Iterator<Item = Result<PrayerTimes>> + '_ {
    start
        .iter_days()
        .take(days as usize)
        .map(move |date| PrayerTimes::new(coordinates, date, parameters))
}

/// Earliest acceptable Fajr under the Moonsighting Committee seasonal table.
///
/// Subtracts a latitude- and season-dependent number of minutes (floored)
/// from `sunrise`.
///
/// # Errors
/// Returns `InvalidDateTime` if the result leaves chrono's range.
pub fn season_adjusted_morning_twilight(
    latitude: f64,
    date: NaiveDate,
    sunrise: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let abs_latitude = latitude.abs();
    let adjustment = seasonal_adjustment(
        [
            75.0 + 28.65 / 55.0 * abs_latitude,
            75.0 + 19.44 / 55.0 * abs_latitude,
            75.0 + 32.74 / 55.0 * abs_latitude,
            75.0 + 48.10 / 55.0 * abs_latitude,
        ],
        days_since_solstice(latitude, date),
    );
    checked_add(
        sunrise,
        TimeDelta::minutes(-(floor(adjustment) as i64)),
    )
}

/// Latest acceptable Isha under the Moonsighting Committee seasonal table.
///
/// Adds a latitude- and season-dependent number of minutes (rounded up) to
/// `sunset`.
///
/// # Errors
/// Returns `InvalidDateTime` if the result leaves chrono's range.
pub fn season_adjusted_evening_twilight(
    latitude: f64,
    date: NaiveDate,
    sunset: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let abs_latitude = latitude.abs();
    let adjustment = seasonal_adjustment(
        [
            75.0 + 25.60 / 55.0 * abs_latitude,
            75.0 + 2.050 / 55.0 * abs_latitude,
            75.0 - 9.210 / 55.0 * abs_latitude,
            75.0 + 6.140 / 55.0 * abs_latitude,
        ],
        days_since_solstice(latitude, date),
    );
    checked_add(
        sunset,
        TimeDelta::minutes(ceil(adjustment) as i64),
    )
}

/// Piecewise linear interpolation through the four seasonal anchors at 0, 91,
/// 137 and 183 days after the winter solstice (solstice, equinox, 46 days past
/// the equinox, summer solstice), mirrored for the second half of the year.
fn seasonal_adjustment([a, b, c, d]: [f64; 4], days: u32) -> f64 {
    let dyy = f64::from(days);
    match days {
        0..91 => a + (b - a) / 91.0 * dyy,
        91..137 => b + (c - b) / 46.0 * (dyy - 91.0),
        137..183 => c + (d - c) / 46.0 * (dyy - 137.0),
        183..229 => d + (c - d) / 46.0 * (dyy - 183.0),
        229..275 => c + (b - c) / 46.0 * (dyy - 229.0),
        _ => b + (a - b) / 91.0 * (dyy - 275.0),
    }
}

fn checked_add(time: DateTime<Utc>, delta: TimeDelta) -> Result<DateTime<Utc>> {
    time.checked_add_signed(delta)
        .ok_or(Error::invalid_datetime("time out of range"))
}
