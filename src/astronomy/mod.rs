//! Low-precision solar ephemeris and the rise/set/transit solver.
//!
//! Ephemeris functions take the Julian century T since J2000.0 and return
//! angles in degrees. The solver follows Meeus, "Astronomical Algorithms",
//! 2nd edition, chapter 15: an approximate transit from one day's ephemeris
//! refined with quadratic interpolation across the previous, current and next
//! day.
//!
//! Reference: Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    acos, asin, cos_deg, degrees_to_radians, mul_add, polynomial, radians_to_degrees, sin,
    sin_deg, unwind_angle_180, unwind_angle_360,
};
use crate::types::Coordinates;
use tracing::trace;

pub mod coefficients;
use coefficients::{
    APPARENT_NODE, ASCENDING_LUNAR_NODE, EQUATION_OF_CENTER, MEAN_LUNAR_LONGITUDE,
    MEAN_OBLIQUITY, MEAN_SIDEREAL_TIME, MEAN_SOLAR_ANOMALY, MEAN_SOLAR_LONGITUDE,
    NUTATION_IN_LONGITUDE, NUTATION_IN_OBLIQUITY, SIDEREAL_RATE,
};

/// Julian Day Number for J2000.0 epoch
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Arc-seconds per degree
const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Right ascension (α) and declination (δ) of the sun for one day, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaDelta {
    /// Right ascension in degrees [0, 360)
    pub alpha: f64,
    /// Declination in degrees
    pub delta: f64,
}

/// Geometric mean longitude of the sun (L0), unwound to [0, 360).
#[must_use]
pub fn mean_solar_longitude(t: f64) -> f64 {
    unwind_angle_360(polynomial(MEAN_SOLAR_LONGITUDE, t))
}

/// Mean longitude of the moon (L'), unwound to [0, 360).
#[must_use]
pub fn mean_lunar_longitude(t: f64) -> f64 {
    unwind_angle_360(polynomial(MEAN_LUNAR_LONGITUDE, t))
}

/// Longitude of the ascending node of the moon's mean orbit (Ω), unwound to [0, 360).
#[must_use]
pub fn ascending_lunar_node_longitude(t: f64) -> f64 {
    unwind_angle_360(polynomial(ASCENDING_LUNAR_NODE, t))
}

/// Mean anomaly of the sun (M), unwound to [0, 360).
#[must_use]
pub fn mean_solar_anomaly(t: f64) -> f64 {
    unwind_angle_360(polynomial(MEAN_SOLAR_ANOMALY, t))
}

/// Equation of the center of the sun (C) for mean anomaly `m` in degrees.
#[must_use]
pub fn solar_equation_of_the_center(t: f64, m: f64) -> f64 {
    let m_rad = degrees_to_radians(m);
    EQUATION_OF_CENTER
        .iter()
        .zip([1.0, 2.0, 3.0])
        .map(|(coeffs, harmonic)| polynomial(coeffs, t) * sin(harmonic * m_rad))
        .sum()
}

/// Apparent longitude of the sun (λ), corrected for nutation and aberration.
///
/// `l0` is the mean solar longitude for the same `t`.
#[must_use]
pub fn apparent_solar_longitude(t: f64, l0: f64) -> f64 {
    let longitude = l0 + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = polynomial(APPARENT_NODE, t);
    unwind_angle_360(longitude - 0.00569 - 0.00478 * sin_deg(omega))
}

/// Mean obliquity of the ecliptic (ε0).
#[must_use]
pub fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    polynomial(MEAN_OBLIQUITY, t)
}

/// Apparent obliquity of the ecliptic (ε), for use with the apparent solar position.
#[must_use]
pub fn apparent_obliquity_of_the_ecliptic(t: f64, mean_obliquity: f64) -> f64 {
    let omega = polynomial(APPARENT_NODE, t);
    mul_add(0.00256, cos_deg(omega), mean_obliquity)
}

/// Mean sidereal time at Greenwich (θ0), unwound to [0, 360).
///
/// Anchored at JD = 36525 T + 2451545.
#[must_use]
pub fn mean_sidereal_time(t: f64) -> f64 {
    let julian_day = t * DAYS_PER_CENTURY + J2000_JDN;
    let [theta_epoch, rate, t2, t3] = MEAN_SIDEREAL_TIME;
    let theta = theta_epoch + rate * (julian_day - J2000_JDN) + t2 * t * t + t3 * t * t * t;
    unwind_angle_360(theta)
}

fn nutation_arguments(l0: f64, lp: f64, omega: f64) -> [f64; 4] {
    [omega, 2.0 * l0, 2.0 * lp, 2.0 * omega]
}

/// Nutation in longitude (Δψ) in degrees.
#[must_use]
pub fn nutation_in_longitude(l0: f64, lp: f64, omega: f64) -> f64 {
    let sum: f64 = NUTATION_IN_LONGITUDE
        .iter()
        .zip(nutation_arguments(l0, lp, omega))
        .map(|(coeff, argument)| coeff * sin_deg(argument))
        .sum();
    sum / ARCSECONDS_PER_DEGREE
}

/// Nutation in obliquity (Δε) in degrees.
#[must_use]
pub fn nutation_in_obliquity(l0: f64, lp: f64, omega: f64) -> f64 {
    let sum: f64 = NUTATION_IN_OBLIQUITY
        .iter()
        .zip(nutation_arguments(l0, lp, omega))
        .map(|(coeff, argument)| coeff * cos_deg(argument))
        .sum();
    sum / ARCSECONDS_PER_DEGREE
}

/// Altitude of a celestial body in degrees (Meeus p93).
///
/// # Arguments
/// * `observer_latitude` - φ in degrees
/// * `declination` - δ in degrees
/// * `local_hour_angle` - H in degrees
#[must_use]
pub fn altitude_of_celestial_body(
    observer_latitude: f64,
    declination: f64,
    local_hour_angle: f64,
) -> f64 {
    let term1 = sin_deg(observer_latitude) * sin_deg(declination);
    let term2 = cos_deg(observer_latitude) * cos_deg(declination) * cos_deg(local_hour_angle);
    radians_to_degrees(asin(term1 + term2))
}

/// Approximate transit (m0) as a fraction of the day in [0, 1) (Meeus p102).
///
/// Longitude is positive east; the solver works with the west-positive
/// convention internally.
#[must_use]
pub fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let lw = -longitude;
    crate::math::normalize_with_bound((right_ascension + lw - sidereal_time) / 360.0, 1.0)
}

/// Transit time in hours since 0h UTC, refined with the interpolated right ascension.
///
/// `alpha_deltas` holds the previous, current and next day's coordinates.
/// The correction is applied only when the hour angle discrepancy lies in
/// [-180, 180]; otherwise the approximate transit is kept.
#[must_use]
pub fn corrected_transit(
    m0: f64,
    longitude: f64,
    sidereal_time: f64,
    alpha_deltas: &[AlphaDelta; 3],
) -> f64 {
    let lw = -longitude;
    let [previous, current, next] = alpha_deltas;

    let theta = unwind_angle_360(mul_add(SIDEREAL_RATE, m0, sidereal_time));
    let alpha = unwind_angle_360(interpolate_angles(
        current.alpha,
        previous.alpha,
        next.alpha,
        m0,
    ));
    let h = theta - lw - alpha;

    let dm = if (-180.0..=180.0).contains(&h) {
        h / -360.0
    } else {
        0.0
    };
    (m0 + dm) * 24.0
}

/// Time in hours since 0h UTC at which the sun reaches altitude `h0`.
///
/// Returns `None` when the sun never reaches `h0` on this date (polar day or
/// night for that altitude). Otherwise one Newton-Raphson correction is
/// applied using the altitude at the interpolated position (Meeus p103).
///
/// # Arguments
/// * `m0` - Approximate transit as a day fraction
/// * `h0` - Target altitude in degrees (negative below the horizon)
/// * `coordinates` - Observer location
/// * `after_transit` - `true` for the evening event, `false` for the morning one
/// * `sidereal_time` - Apparent sidereal time at 0h UTC in degrees
/// * `alpha_deltas` - Previous, current and next day's coordinates
#[must_use]
pub fn corrected_hour_angle(
    m0: f64,
    h0: f64,
    coordinates: Coordinates,
    after_transit: bool,
    sidereal_time: f64,
    alpha_deltas: &[AlphaDelta; 3],
) -> Option<f64> {
    let latitude = coordinates.latitude();
    let lw = -coordinates.longitude();
    let [previous, current, next] = alpha_deltas;

    let term1 = sin_deg(h0) - sin_deg(latitude) * sin_deg(current.delta);
    let term2 = cos_deg(latitude) * cos_deg(current.delta);
    let cos_h0 = term1 / term2;
    if !(-1.0..=1.0).contains(&cos_h0) {
        trace!(
            altitude = h0,
            latitude,
            declination = current.delta,
            "sun does not reach altitude"
        );
        return None;
    }

    let hour_angle = radians_to_degrees(acos(cos_h0));
    let m = if after_transit {
        m0 + hour_angle / 360.0
    } else {
        m0 - hour_angle / 360.0
    };

    let theta = unwind_angle_360(mul_add(SIDEREAL_RATE, m, sidereal_time));
    let alpha = unwind_angle_360(interpolate_angles(
        current.alpha,
        previous.alpha,
        next.alpha,
        m,
    ));
    let delta = interpolate(current.delta, previous.delta, next.delta, m);
    // local hour angle, west of the meridian is positive
    let h = unwind_angle_180(theta - lw - alpha);
    let altitude = altitude_of_celestial_body(latitude, delta, h);

    let dm = (altitude - h0) / (360.0 * cos_deg(delta) * cos_deg(latitude) * sin_deg(h));
    Some((m + dm) * 24.0)
}

/// Quadratic interpolation between three tabulated values (Meeus p24).
///
/// `y2` is the central value, `y1` the previous and `y3` the next; `n` is the
/// interpolation factor measured from `y2`.
#[must_use]
pub fn interpolate(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n / 2.0) * mul_add(n, c, a + b)
}

/// Quadratic interpolation for angles, unwinding the differences across 0°/360°.
#[must_use]
pub fn interpolate_angles(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = unwind_angle_360(y2 - y1);
    let b = unwind_angle_360(y3 - y2);
    let c = b - a;
    y2 + (n / 2.0) * mul_add(n, c, a + b)
}
