//! How the high latitude rules bound Fajr and Isha when twilight never ends.

use chrono::NaiveDate;
use prayer_times::{
    CalculationMethod, Coordinates, HighLatitudeRule, PrayerTimes, SolarTime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let london = Coordinates::new(51.5074, -0.1278)?;
    let solstice = NaiveDate::from_ymd_opt(2016, 6, 21).ok_or("invalid date")?;

    let solar_time = SolarTime::new(solstice, london)?;
    println!("London, June solstice 2016 (UTC)");
    println!(
        "  Sun reaches -18° before sunrise: {}",
        solar_time.hour_angle(-18.0, false).is_some()
    );
    println!();

    for rule in [
        HighLatitudeRule::MiddleOfTheNight,
        HighLatitudeRule::SeventhOfTheNight,
        HighLatitudeRule::TwilightAngle,
    ] {
        let params = CalculationMethod::MuslimWorldLeague
            .parameters()
            .with_high_latitude_rule(rule);
        let times = PrayerTimes::new(london, solstice, &params)?;
        println!(
            "  {:<22} Fajr {}  Isha {}",
            rule.name(),
            times.fajr().format("%m-%d %H:%M"),
            times.isha().format("%m-%d %H:%M")
        );
    }

    let committee = CalculationMethod::MoonsightingCommittee.parameters();
    let times = PrayerTimes::new(london, solstice, &committee)?;
    println!(
        "  {:<22} Fajr {}  Isha {}",
        "moonsighting_committee",
        times.fajr().format("%m-%d %H:%M"),
        times.isha().format("%m-%d %H:%M")
    );
    println!();

    // polar day: sunrise itself is undefined
    let tromso = Coordinates::new(69.6492, 18.9553)?;
    match PrayerTimes::new(tromso, solstice, &committee) {
        Ok(times) => println!("Tromsø: sunrise {}", times.sunrise()),
        Err(e) => println!("Tromsø: {e}"),
    }

    Ok(())
}
