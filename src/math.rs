//! Mathematical utilities for the solar ephemeris and the prayer time solver.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps `value` into `[0, max)` for positive `max` (or `(max, 0]` for negative `max`).
pub fn normalize_with_bound(value: f64, max: f64) -> f64 {
    value - max * floor(value / max)
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn unwind_angle_360(degrees: f64) -> f64 {
    normalize_with_bound(degrees, 360.0)
}

/// Normalizes an angle in degrees to the range (-180, 180].
pub fn unwind_angle_180(degrees: f64) -> f64 {
    let angle = unwind_angle_360(degrees);
    if angle > 180.0 { angle - 360.0 } else { angle }
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = mul_add(result, x, coeff);
    }
    result
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_with_bound() {
        assert_eq!(normalize_with_bound(2.0, -5.0), -3.0);
        assert_eq!(normalize_with_bound(-4.0, -5.0), -4.0);
        assert_eq!(normalize_with_bound(-6.0, -5.0), -1.0);
        assert_eq!(normalize_with_bound(-1.0, 24.0), 23.0);
        assert_eq!(normalize_with_bound(1.0, 24.0), 1.0);
        assert_eq!(normalize_with_bound(49.0, 24.0), 1.0);
        assert_eq!(normalize_with_bound(361.0, 360.0), 1.0);
        assert_eq!(normalize_with_bound(360.0, 360.0), 0.0);
        assert_eq!(normalize_with_bound(259.0, 360.0), 259.0);
        assert_eq!(normalize_with_bound(2592.0, 360.0), 72.0);
    }

    #[test]
    fn test_unwind_angle_360() {
        assert_eq!(unwind_angle_360(-45.0), 315.0);
        assert_eq!(unwind_angle_360(361.0), 1.0);
        assert_eq!(unwind_angle_360(360.0), 0.0);
        assert_eq!(unwind_angle_360(259.0), 259.0);
        assert_eq!(unwind_angle_360(2592.0), 72.0);
        assert_eq!(unwind_angle_360(-720.0), 0.0);

        for angle in [-1e4, -543.21, -0.5, 0.0, 12.5, 359.999, 720.0, 12_345.6] {
            let unwound = unwind_angle_360(angle);
            assert!((0.0..360.0).contains(&unwound), "{angle} -> {unwound}");
        }
    }

    #[test]
    fn test_unwind_angle_180() {
        assert_eq!(unwind_angle_180(360.0), 0.0);
        assert_eq!(unwind_angle_180(361.0), 1.0);
        assert_eq!(unwind_angle_180(1.0), 1.0);
        assert_eq!(unwind_angle_180(-1.0), -1.0);
        assert_eq!(unwind_angle_180(-181.0), 179.0);
        assert_eq!(unwind_angle_180(180.0), 180.0);
        assert_eq!(unwind_angle_180(359.0), -1.0);
        assert_eq!(unwind_angle_180(-359.0), 1.0);
        assert_eq!(unwind_angle_180(1261.0), -179.0);
        assert!((unwind_angle_180(-360.1) - -0.1).abs() < EPSILON);

        // both representations name the same direction
        for angle in [-725.5, -181.0, -0.25, 90.0, 179.5, 270.0, 1261.0] {
            let a = unwind_angle_180(angle);
            assert!(a > -180.0 && a <= 180.0);
            assert!((unwind_angle_360(a) - unwind_angle_360(angle)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 5.0), 0.0);
        assert_eq!(polynomial(&[3.0], 5.0), 3.0);
        assert_eq!(polynomial(&[2.0, 3.0], 4.0), 14.0);
        assert!((polynomial(&[1.0, 2.0, 3.0], 2.0) - 17.0).abs() < EPSILON);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!(sin_deg(0.0).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(0.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!((tan(degrees_to_radians(45.0)) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(ceil(2.1), 3.0);
        assert_eq!(ceil(-2.1), -2.0);
    }
}
