//! # Prayer Times
//!
//! Islamic prayer times (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha) for any
//! location and date, computed from a low-precision solar ephemeris.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The pipeline follows Meeus, "Astronomical Algorithms": Julian day and
//! century, apparent solar coordinates with nutation, sidereal time, and a
//! transit/hour-angle solver interpolating across three days. On top of that
//! sit the calculation policies used by Islamic authorities: twilight angles,
//! the Asr shadow rule, and safeguards for Fajr and Isha when twilight never
//! ends or the night is very short.
//!
//! ## Features
//!
//! - Pure function of (date, coordinates, parameters); no clocks, no I/O
//! - Eight calculation method presets plus fully custom parameters
//! - `Option`/`Result` for unreachable altitudes instead of NaN sentinels
//! - `no_std` support with `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for coordinates, policy types and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default
//! prayer-times = "0.1"
//!
//! # no_std
//! prayer-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use prayer_times::{CalculationMethod, Coordinates, Madhab, PrayerTimes};
//! use chrono::NaiveDate;
//!
//! let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
//! let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
//! let params = CalculationMethod::NorthAmerica
//!     .parameters()
//!     .with_madhab(Madhab::Hanafi);
//!
//! let times = PrayerTimes::new(coordinates, date, &params).unwrap();
//! for (prayer, time) in times.iter() {
//!     println!("{prayer}: {time}");
//! }
//! ```
//!
//! All times are UTC and rounded to the minute; convert with `chrono` or
//! `chrono-tz` for display.
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - Moonsighting Committee Worldwide, seasonal Fajr and Isha tables.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]
// Exact comparisons of tabulated constants in tests
#![cfg_attr(test, allow(clippy::float_cmp))]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::method::CalculationMethod;
pub use crate::parameters::{
    CalculationParameters, HighLatitudeRule, Madhab, NightPortions, PrayerAdjustments,
    ShadowLength,
};
pub use crate::prayer_times::{
    PrayerTimes, prayer_times_for_days, season_adjusted_evening_twilight,
    season_adjusted_morning_twilight,
};
pub use crate::solar::{SolarCoordinates, SolarTime};
pub use crate::types::{Coordinates, HoursUtc, Prayer};

// Core modules
pub mod error;
pub mod types;

// Astronomy
pub mod astronomy;
pub mod solar;

// Policy and orchestration
pub mod method;
pub mod parameters;
pub mod prayer_times;

// Internal modules
mod math;

// Public modules
pub mod time;
