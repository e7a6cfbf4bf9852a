//! Daily solar coordinates and the solar events derived from them.

use crate::astronomy::{
    self, AlphaDelta, apparent_obliquity_of_the_ecliptic, apparent_solar_longitude,
    ascending_lunar_node_longitude, mean_lunar_longitude, mean_obliquity_of_the_ecliptic,
    mean_sidereal_time, mean_solar_longitude, nutation_in_longitude, nutation_in_obliquity,
};
use crate::math::{
    asin, atan, atan2, cos, cos_deg, degrees_to_radians, radians_to_degrees, sin, tan,
    unwind_angle_360,
};
use crate::time::{julian_century, julian_day_for_date};
use crate::types::{Coordinates, HoursUtc};
use crate::{Error, Result};
use chrono::NaiveDate;

/// Altitude of the sun's upper limb at sunrise and sunset, -50 arc-minutes
/// (refraction plus semi-diameter).
pub const SUNRISE_SUNSET_ALTITUDE: f64 = -50.0 / 60.0;

/// Apparent equatorial position of the sun at one instant.
///
/// # Example
/// ```
/// # use prayer_times::SolarCoordinates;
/// let solar = SolarCoordinates::new(2_448_908.5); // 1992-10-13 0h TD
/// assert!((solar.declination() - -7.78507).abs() < 1e-4);
/// assert!((solar.right_ascension() - 198.38083).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    declination: f64,
    right_ascension: f64,
    apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    /// Computes the apparent solar coordinates for a Julian Day.
    #[must_use]
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = degrees_to_radians(apparent_solar_longitude(t, l0));

        let theta0 = mean_sidereal_time(t);
        let delta_psi = nutation_in_longitude(l0, lp, omega);
        let delta_epsilon = nutation_in_obliquity(l0, lp, omega);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_apparent = degrees_to_radians(apparent_obliquity_of_the_ecliptic(t, epsilon0));

        // Meeus p165
        let declination = radians_to_degrees(asin(sin(epsilon_apparent) * sin(lambda)));
        let right_ascension = unwind_angle_360(radians_to_degrees(atan2(
            cos(epsilon_apparent) * sin(lambda),
            cos(lambda),
        )));

        // Meeus p88
        let apparent_sidereal_time = theta0 + delta_psi * cos_deg(epsilon0 + delta_epsilon);

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }

    /// Declination of the sun in degrees (δ).
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Right ascension of the sun in degrees, [0, 360) (α).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Apparent sidereal time at Greenwich in degrees (θ0).
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.apparent_sidereal_time
    }

    const fn alpha_delta(&self) -> AlphaDelta {
        AlphaDelta {
            alpha: self.right_ascension,
            delta: self.declination,
        }
    }
}

/// Solar events for one date and observer.
///
/// Holds the solar coordinates of the previous, current and next day at 0h UTC
/// and resolves transit, sunrise and sunset at construction. Further altitudes
/// are resolved on demand with [`SolarTime::hour_angle`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTime {
    coordinates: Coordinates,
    solar: SolarCoordinates,
    alpha_deltas: [AlphaDelta; 3],
    approximate_transit: f64,
    transit: HoursUtc,
    sunrise: Option<HoursUtc>,
    sunset: Option<HoursUtc>,
}

impl SolarTime {
    /// Computes the solar events for `date` at `coordinates`.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` when `date` has no previous or next day in
    /// chrono's calendar range.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::{Coordinates, SolarTime};
    /// # use chrono::NaiveDate;
    /// let london = Coordinates::new(51.507194, -0.116711).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2016, 5, 1).unwrap();
    /// let solar_time = SolarTime::new(date, london).unwrap();
    /// assert!((solar_time.transit().hours() - 11.9586).abs() < 1e-3);
    /// ```
    pub fn new(date: NaiveDate, coordinates: Coordinates) -> Result<Self> {
        let previous_date = date
            .pred_opt()
            .ok_or(Error::invalid_datetime("date has no previous day"))?;
        let next_date = date
            .succ_opt()
            .ok_or(Error::invalid_datetime("date has no next day"))?;

        let previous = SolarCoordinates::new(julian_day_for_date(previous_date));
        let solar = SolarCoordinates::new(julian_day_for_date(date));
        let next = SolarCoordinates::new(julian_day_for_date(next_date));
        let alpha_deltas = [
            previous.alpha_delta(),
            solar.alpha_delta(),
            next.alpha_delta(),
        ];

        let m0 = astronomy::approximate_transit(
            coordinates.longitude(),
            solar.apparent_sidereal_time,
            solar.right_ascension,
        );
        let transit = HoursUtc::from_hours(astronomy::corrected_transit(
            m0,
            coordinates.longitude(),
            solar.apparent_sidereal_time,
            &alpha_deltas,
        ));

        let mut solar_time = Self {
            coordinates,
            solar,
            alpha_deltas,
            approximate_transit: m0,
            transit,
            sunrise: None,
            sunset: None,
        };
        solar_time.sunrise = solar_time.hour_angle(SUNRISE_SUNSET_ALTITUDE, false);
        solar_time.sunset = solar_time.hour_angle(SUNRISE_SUNSET_ALTITUDE, true);

        Ok(solar_time)
    }

    /// Time at which the sun reaches `angle` degrees of altitude, before or after transit.
    ///
    /// Returns `None` if the sun never reaches that altitude on this date.
    #[must_use]
    pub fn hour_angle(&self, angle: f64, after_transit: bool) -> Option<HoursUtc> {
        astronomy::corrected_hour_angle(
            self.approximate_transit,
            angle,
            self.coordinates,
            after_transit,
            self.solar.apparent_sidereal_time,
            &self.alpha_deltas,
        )
        .map(HoursUtc::from_hours)
    }

    /// Time after transit at which an object's shadow reaches
    /// `shadow_length` times its height plus its noon shadow.
    #[must_use]
    pub fn afternoon_shadow_time(&self, shadow_length: f64) -> Option<HoursUtc> {
        let tangent = (self.coordinates.latitude() - self.solar.declination).abs();
        let inverse = shadow_length + tan(degrees_to_radians(tangent));
        let angle = radians_to_degrees(atan(1.0 / inverse));
        self.hour_angle(angle, true)
    }

    /// Solar transit (solar noon).
    #[must_use]
    pub const fn transit(&self) -> HoursUtc {
        self.transit
    }

    /// Sunrise, or `None` during polar day or night.
    #[must_use]
    pub const fn sunrise(&self) -> Option<HoursUtc> {
        self.sunrise
    }

    /// Sunset, or `None` during polar day or night.
    #[must_use]
    pub const fn sunset(&self) -> Option<HoursUtc> {
        self.sunset
    }

    /// Solar coordinates at 0h UTC of the date.
    #[must_use]
    pub const fn solar_coordinates(&self) -> &SolarCoordinates {
        &self.solar
    }

    /// Approximate transit as a fraction of the day.
    #[must_use]
    pub const fn approximate_transit(&self) -> f64 {
        self.approximate_transit
    }

    /// The observer location.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
