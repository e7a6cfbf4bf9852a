//! Calculation policy: twilight angles, juristic school, high latitude handling
//! and per-prayer minute adjustments.

use crate::method::CalculationMethod;
use crate::types::Prayer;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Shadow length multiplier that defines the start of Asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShadowLength {
    /// Shadow equals the object's height plus its noon shadow
    Single,
    /// Shadow equals twice the object's height plus its noon shadow
    Double,
}

impl ShadowLength {
    /// Multiplier applied to the object's height.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::Double => 2.0,
        }
    }
}

/// Juristic school used for the Asr calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Madhab {
    /// Shafi, Maliki and Hanbali schools (single shadow length)
    #[default]
    Shafi,
    /// Hanafi school (double shadow length)
    Hanafi,
}

impl Madhab {
    /// Shadow length that starts Asr under this school.
    #[must_use]
    pub const fn shadow_length(&self) -> ShadowLength {
        match self {
            Self::Shafi => ShadowLength::Single,
            Self::Hanafi => ShadowLength::Double,
        }
    }

    /// Snake case name of the school.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shafi => "shafi",
            Self::Hanafi => "hanafi",
        }
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Madhab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Shafi, Self::Hanafi]
            .into_iter()
            .find(|madhab| madhab.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::unknown_name("madhab"))
    }
}

/// Rule bounding Fajr and Isha when twilight angles give unreliable or no
/// solutions, typically at high latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HighLatitudeRule {
    /// Fajr no earlier than the middle of the night, Isha no later
    #[default]
    MiddleOfTheNight,
    /// Fajr no earlier than the last seventh of the night, Isha no later than the first
    SeventhOfTheNight,
    /// Night portion proportional to the twilight angle (angle / 60)
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Snake case name of the rule.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MiddleOfTheNight => "middle_of_the_night",
            Self::SeventhOfTheNight => "seventh_of_the_night",
            Self::TwilightAngle => "twilight_angle",
        }
    }
}

impl fmt::Display for HighLatitudeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HighLatitudeRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            Self::MiddleOfTheNight,
            Self::SeventhOfTheNight,
            Self::TwilightAngle,
        ]
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(s.trim()))
        .ok_or(Error::unknown_name("high latitude rule"))
    }
}

/// Minute offsets added to each computed time before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrayerAdjustments {
    /// Minutes added to Fajr
    pub fajr: i64,
    /// Minutes added to sunrise
    pub sunrise: i64,
    /// Minutes added to Dhuhr
    pub dhuhr: i64,
    /// Minutes added to Asr
    pub asr: i64,
    /// Minutes added to Maghrib
    pub maghrib: i64,
    /// Minutes added to Isha
    pub isha: i64,
}

impl PrayerAdjustments {
    /// The same offset for every prayer.
    #[must_use]
    pub const fn uniform(minutes: i64) -> Self {
        Self {
            fajr: minutes,
            sunrise: minutes,
            dhuhr: minutes,
            asr: minutes,
            maghrib: minutes,
            isha: minutes,
        }
    }

    /// Offset in minutes for one prayer.
    #[must_use]
    pub const fn for_prayer(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// Fractions of the night used to bound Fajr and Isha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightPortions {
    /// Portion of the night before sunrise that bounds Fajr
    pub fajr: f64,
    /// Portion of the night after sunset that bounds Isha
    pub isha: f64,
}

/// Complete configuration for one prayer time computation.
///
/// Built from a [`CalculationMethod`] preset and adjusted through the public
/// fields or the `with_*` methods. Each computation reads the parameters it is
/// given; later changes do not affect earlier results.
///
/// # Example
/// ```
/// # use prayer_times::{CalculationMethod, HighLatitudeRule, Madhab, PrayerAdjustments};
/// let params = CalculationMethod::NorthAmerica
///     .parameters()
///     .with_madhab(Madhab::Hanafi)
///     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight)
///     .with_adjustments(PrayerAdjustments { fajr: 2, ..Default::default() });
///
/// assert_eq!(params.fajr_angle, 15.0);
/// assert_eq!(params.adjustments.fajr, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationParameters {
    /// Preset the parameters came from; drives method-specific offsets and safeguards
    pub method: CalculationMethod,
    /// Sun depression angle for Fajr in degrees
    pub fajr_angle: f64,
    /// Sun depression angle for Isha in degrees
    pub isha_angle: f64,
    /// Minutes after Maghrib for Isha; 0 means use `isha_angle`
    pub isha_interval: u32,
    /// Juristic school for Asr
    pub madhab: Madhab,
    /// Safeguard for Fajr and Isha at high latitudes
    pub high_latitude_rule: HighLatitudeRule,
    /// User offsets in minutes
    pub adjustments: PrayerAdjustments,
}

impl CalculationParameters {
    /// Custom parameters from twilight angles, tagged as [`CalculationMethod::Other`].
    #[must_use]
    pub fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            method: CalculationMethod::Other,
            fajr_angle,
            isha_angle,
            isha_interval: 0,
            madhab: Madhab::default(),
            high_latitude_rule: HighLatitudeRule::default(),
            adjustments: PrayerAdjustments::default(),
        }
    }

    /// Sets the juristic school.
    #[must_use]
    pub const fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    /// Sets the high latitude rule.
    #[must_use]
    pub const fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Sets the per-prayer minute adjustments.
    #[must_use]
    pub const fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Uses a fixed interval after Maghrib for Isha instead of the angle.
    #[must_use]
    pub const fn with_isha_interval(mut self, minutes: u32) -> Self {
        self.isha_interval = minutes;
        self
    }

    /// Night fractions that bound Fajr and Isha under the high latitude rule.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::{CalculationMethod, HighLatitudeRule};
    /// let params = CalculationMethod::MuslimWorldLeague
    ///     .parameters()
    ///     .with_high_latitude_rule(HighLatitudeRule::TwilightAngle);
    /// let portions = params.night_portions();
    /// assert!((portions.fajr - 0.3).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn night_portions(&self) -> NightPortions {
        match self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => NightPortions {
                fajr: 1.0 / 2.0,
                isha: 1.0 / 2.0,
            },
            HighLatitudeRule::SeventhOfTheNight => NightPortions {
                fajr: 1.0 / 7.0,
                isha: 1.0 / 7.0,
            },
            HighLatitudeRule::TwilightAngle => NightPortions {
                fajr: self.fajr_angle / 60.0,
                isha: self.isha_angle / 60.0,
            },
        }
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        CalculationMethod::default().parameters()
    }
}
