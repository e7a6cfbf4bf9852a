//! Prayer schedule for a week in several cities, shown in local time.

use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;
use prayer_times::{CalculationMethod, Coordinates, Madhab, PrayerTimes, prayer_times_for_days};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
    method: CalculationMethod,
    madhab: Madhab,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Makkah, Saudi Arabia",
            latitude: 21.4225,
            longitude: 39.8262,
            timezone: chrono_tz::Asia::Riyadh,
            method: CalculationMethod::UmmAlQura,
            madhab: Madhab::Shafi,
        },
        City {
            name: "Cairo, Egypt",
            latitude: 30.0444,
            longitude: 31.2357,
            timezone: chrono_tz::Africa::Cairo,
            method: CalculationMethod::Egyptian,
            madhab: Madhab::Shafi,
        },
        City {
            name: "Karachi, Pakistan",
            latitude: 24.8607,
            longitude: 67.0011,
            timezone: chrono_tz::Asia::Karachi,
            method: CalculationMethod::Karachi,
            madhab: Madhab::Hanafi,
        },
        City {
            name: "Raleigh, North Carolina",
            latitude: 35.7750,
            longitude: -78.6336,
            timezone: chrono_tz::America::New_York,
            method: CalculationMethod::NorthAmerica,
            madhab: Madhab::Hanafi,
        },
        City {
            name: "Jakarta, Indonesia",
            latitude: -6.2088,
            longitude: 106.8456,
            timezone: chrono_tz::Asia::Jakarta,
            method: CalculationMethod::MuslimWorldLeague,
            madhab: Madhab::Shafi,
        },
    ];

    let start = NaiveDate::from_ymd_opt(2024, 3, 11).ok_or("invalid start date")?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.4}°, {:.4}° | Method: {} | Madhab: {}",
            city.latitude, city.longitude, city.method, city.madhab
        );
        println!();

        let coordinates = Coordinates::new(city.latitude, city.longitude)?;
        let params = city.method.parameters().with_madhab(city.madhab);

        println!(
            "{:<12} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "Date", "Fajr", "Rise", "Dhuhr", "Asr", "Magh", "Isha"
        );
        for times in prayer_times_for_days(coordinates, start, 7, &params) {
            print_row(&times?, city.timezone);
        }
        println!();
    }

    next_prayer_example(&cities[0])?;

    Ok(())
}

fn print_row(times: &PrayerTimes, timezone: Tz) {
    let local: Vec<String> = times
        .iter()
        .map(|(_, time)| time.with_timezone(&timezone).format("%H:%M").to_string())
        .collect();
    println!(
        "{:<12} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        times.date().to_string(),
        local[0],
        local[1],
        local[2],
        local[3],
        local[4],
        local[5]
    );
}

fn next_prayer_example(city: &City) -> Result<(), Box<dyn std::error::Error>> {
    let coordinates = Coordinates::new(city.latitude, city.longitude)?;
    let date = NaiveDate::from_ymd_opt(2024, 3, 11).ok_or("invalid date")?;
    let times = PrayerTimes::new(coordinates, date, &city.method.parameters())?;

    // half an hour after Dhuhr
    let now = times.dhuhr() + TimeDelta::minutes(30);
    println!("=== Current and next prayer in {} ===", city.name);
    println!(
        "At {}: current {:?}, next {:?}",
        now.with_timezone(&city.timezone).format("%H:%M"),
        times.current_prayer(now),
        times.next_prayer(now)
    );

    Ok(())
}
