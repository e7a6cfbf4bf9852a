//! Polynomial and periodic-term coefficients for the low-precision solar ephemeris.
//!
//! Values are from Meeus, "Astronomical Algorithms", 2nd edition, chapters 12,
//! 22 and 25. Polynomial coefficients are ordered [a₀, a₁, a₂, ...] in powers of
//! the Julian century T.

#![allow(clippy::unreadable_literal)]

/// Geometric mean longitude of the sun, L0 (p163).
pub const MEAN_SOLAR_LONGITUDE: &[f64] = &[280.4664567, 36000.76983, 0.0003032];

/// Mean longitude of the moon, L' (p144).
pub const MEAN_LUNAR_LONGITUDE: &[f64] = &[218.3165, 481267.8813];

/// Longitude of the ascending node of the moon's mean orbit, Ω (p144).
pub const ASCENDING_LUNAR_NODE: &[f64] = &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0];

/// Mean anomaly of the sun, M (p163).
pub const MEAN_SOLAR_ANOMALY: &[f64] = &[357.52911, 35999.05029, -0.0001537];

/// Equation of the center, C (p164), one coefficient polynomial per harmonic of M.
pub const EQUATION_OF_CENTER: [&[f64]; 3] = [
    &[1.914602, -0.004817, -0.000014],
    &[0.019993, -0.000101],
    &[0.000289],
];

/// Mean obliquity of the ecliptic, ε0 (p147).
pub const MEAN_OBLIQUITY: &[f64] = &[23.439291, -0.013004167, -0.0000001639, 0.0000005036];

/// Mean sidereal time at Greenwich: [θ at J2000.0, rate per day, T², T³] (p88).
pub const MEAN_SIDEREAL_TIME: [f64; 4] = [
    280.46061837,
    360.98564736629,
    0.000387933,
    -1.0 / 38710000.0,
];

/// Simplified Ω used by the apparent longitude and obliquity corrections (p164-165).
pub const APPARENT_NODE: &[f64] = &[125.04, -1934.136];

/// Nutation in longitude periodic terms in arc-seconds, applied to
/// sin(Ω), sin(2L0), sin(2L'), sin(2Ω) (p144).
pub const NUTATION_IN_LONGITUDE: [f64; 4] = [-17.20, -1.32, -0.23, 0.21];

/// Nutation in obliquity periodic terms in arc-seconds, applied to
/// cos(Ω), cos(2L0), cos(2L'), cos(2Ω) (p144).
pub const NUTATION_IN_OBLIQUITY: [f64; 4] = [9.20, 0.57, 0.10, -0.09];

/// Sidereal rate in degrees per day used when advancing θ0 by a day fraction (p102).
pub const SIDEREAL_RATE: f64 = 360.985647;
