//! End-to-end prayer time checks for mid-latitude locations.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use prayer_times::{
    CalculationMethod, CalculationParameters, Coordinates, Error, Madhab, Prayer,
    PrayerAdjustments, PrayerTimes, prayer_times_for_days,
};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn raleigh() -> Coordinates {
    Coordinates::new(35.7750, -78.6336).unwrap()
}

fn local_hhmm(time: DateTime<Utc>) -> String {
    time.with_timezone(&New_York).format("%H:%M").to_string()
}

#[test]
fn test_north_america_hanafi_local_display() {
    let params = CalculationMethod::NorthAmerica
        .parameters()
        .with_madhab(Madhab::Hanafi);
    let times = PrayerTimes::new(raleigh(), date(2015, 7, 12), &params).unwrap();

    let local: Vec<String> = times.iter().map(|(_, time)| local_hhmm(time)).collect();
    assert_eq!(local, ["04:42", "06:08", "13:21", "18:22", "20:32", "21:57"]);

    // all six fall on the same local date even though Maghrib and Isha are on the next UTC day
    for (prayer, time) in times.iter() {
        assert_eq!(
            time.with_timezone(&New_York).date_naive(),
            date(2015, 7, 12),
            "{prayer}"
        );
    }
}

#[test]
fn test_muslim_world_league_winter() {
    let params = CalculationMethod::MuslimWorldLeague.parameters();
    let times = PrayerTimes::new(raleigh(), date(2015, 12, 1), &params).unwrap();

    assert_eq!(times.fajr(), utc(2015, 12, 1, 10, 35));
    assert_eq!(times.sunrise(), utc(2015, 12, 1, 12, 6));
    assert_eq!(times.dhuhr(), utc(2015, 12, 1, 17, 5));
    assert_eq!(times.asr(), utc(2015, 12, 1, 19, 42));
    assert_eq!(times.maghrib(), utc(2015, 12, 1, 22, 1));
    assert_eq!(times.isha(), utc(2015, 12, 1, 23, 26));

    let local: Vec<String> = times.iter().map(|(_, time)| local_hhmm(time)).collect();
    assert_eq!(local, ["05:35", "07:06", "12:05", "14:42", "17:01", "18:26"]);
}

#[test]
fn test_uniform_adjustment_shifts_every_time() {
    let base = CalculationMethod::MuslimWorldLeague.parameters();
    let adjusted = base
        .clone()
        .with_adjustments(PrayerAdjustments::uniform(10));

    let plain = PrayerTimes::new(raleigh(), date(2015, 12, 1), &base).unwrap();
    let shifted = PrayerTimes::new(raleigh(), date(2015, 12, 1), &adjusted).unwrap();

    assert_eq!(shifted.fajr(), utc(2015, 12, 1, 10, 45));
    assert_eq!(shifted.sunrise(), utc(2015, 12, 1, 12, 16));
    assert_eq!(shifted.dhuhr(), utc(2015, 12, 1, 17, 15));
    assert_eq!(shifted.asr(), utc(2015, 12, 1, 19, 52));
    assert_eq!(shifted.maghrib(), utc(2015, 12, 1, 22, 11));
    assert_eq!(shifted.isha(), utc(2015, 12, 1, 23, 36));

    for prayer in Prayer::ALL {
        assert_eq!(
            shifted.time_for_prayer(prayer) - plain.time_for_prayer(prayer),
            TimeDelta::minutes(10)
        );
    }
}

#[test]
fn test_individual_adjustments_are_independent() {
    let params = CalculationMethod::MuslimWorldLeague
        .parameters()
        .with_adjustments(PrayerAdjustments {
            asr: -3,
            isha: 7,
            ..Default::default()
        });
    let plain = PrayerTimes::new(
        raleigh(),
        date(2015, 12, 1),
        &CalculationMethod::MuslimWorldLeague.parameters(),
    )
    .unwrap();
    let times = PrayerTimes::new(raleigh(), date(2015, 12, 1), &params).unwrap();

    assert_eq!(times.asr() - plain.asr(), TimeDelta::minutes(-3));
    assert_eq!(times.isha() - plain.isha(), TimeDelta::minutes(7));
    assert_eq!(times.fajr(), plain.fajr());
    assert_eq!(times.dhuhr(), plain.dhuhr());
    assert_eq!(times.maghrib(), plain.maghrib());
}

#[test]
fn test_moonsighting_committee_raleigh() {
    let params = CalculationMethod::MoonsightingCommittee.parameters();
    let times = PrayerTimes::new(raleigh(), date(2016, 1, 31), &params).unwrap();

    assert_eq!(times.fajr(), utc(2016, 1, 31, 10, 48));
    assert_eq!(times.sunrise(), utc(2016, 1, 31, 12, 16));
    assert_eq!(times.dhuhr(), utc(2016, 1, 31, 17, 33));
    assert_eq!(times.asr(), utc(2016, 1, 31, 20, 20));
    assert_eq!(times.maghrib(), utc(2016, 1, 31, 22, 43));
    assert_eq!(times.isha(), utc(2016, 2, 1, 0, 5));
}

#[test]
fn test_method_offsets() {
    // Karachi and Moonsighting Committee share angles; only the fixed offsets differ
    let karachi = PrayerTimes::new(
        raleigh(),
        date(2016, 1, 31),
        &CalculationMethod::Karachi.parameters(),
    )
    .unwrap();
    let committee = PrayerTimes::new(
        raleigh(),
        date(2016, 1, 31),
        &CalculationMethod::MoonsightingCommittee.parameters(),
    )
    .unwrap();

    assert_eq!(committee.dhuhr() - karachi.dhuhr(), TimeDelta::minutes(4));
    assert_eq!(committee.maghrib() - karachi.maghrib(), TimeDelta::minutes(3));
    assert_eq!(committee.sunrise(), karachi.sunrise());
    assert_eq!(committee.asr(), karachi.asr());
}

#[test]
fn test_hanafi_asr_is_later() {
    let shafi = CalculationMethod::NorthAmerica.parameters();
    let hanafi = shafi.clone().with_madhab(Madhab::Hanafi);

    let early = PrayerTimes::new(raleigh(), date(2015, 7, 12), &shafi).unwrap();
    let late = PrayerTimes::new(raleigh(), date(2015, 7, 12), &hanafi).unwrap();

    assert!(late.asr() > early.asr());
    assert_eq!(late.dhuhr(), early.dhuhr());
    assert_eq!(late.maghrib(), early.maghrib());
}

#[test]
fn test_parameters_mutation_between_runs() {
    let mut params = CalculationParameters::new(15.0, 15.0);
    let first = PrayerTimes::new(raleigh(), date(2015, 7, 12), &params).unwrap();

    params.fajr_angle = 18.0;
    params.isha_angle = 18.0;
    let second = PrayerTimes::new(raleigh(), date(2015, 7, 12), &params).unwrap();

    assert!(second.fajr() < first.fajr());
    assert!(second.isha() > first.isha());
    // first result is unaffected by the later mutation
    assert_eq!(first.fajr(), utc(2015, 7, 12, 8, 42));
}

#[test]
fn test_fixed_interval_methods() {
    let makkah = Coordinates::new(21.4225, 39.8262).unwrap();
    for method in [CalculationMethod::UmmAlQura, CalculationMethod::Gulf] {
        let times = PrayerTimes::new(makkah, date(2016, 9, 15), &method.parameters()).unwrap();
        assert_eq!(times.isha() - times.maghrib(), TimeDelta::minutes(90), "{method}");
    }
}

#[test]
fn test_invalid_coordinates_are_rejected() {
    assert_eq!(
        Coordinates::new(100.0, 0.0),
        Err(Error::InvalidLatitude { value: 100.0 })
    );
    assert_eq!(
        Coordinates::new(0.0, 200.0),
        Err(Error::InvalidLongitude { value: 200.0 })
    );
}

#[test]
fn test_batch_over_a_month() {
    let params = CalculationMethod::NorthAmerica.parameters();
    let days: Vec<PrayerTimes> = prayer_times_for_days(raleigh(), date(2016, 2, 1), 29, &params)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(days.len(), 29);
    assert_eq!(days[0].date(), date(2016, 2, 1));
    assert_eq!(days[28].date(), date(2016, 2, 29));
    // days lengthen through February
    assert!(days[28].maghrib() - days[28].sunrise() > days[0].maghrib() - days[0].sunrise());
}

#[test]
fn test_current_and_next_prayer_across_the_day() {
    let params = CalculationMethod::MuslimWorldLeague.parameters();
    let times = PrayerTimes::new(raleigh(), date(2015, 12, 1), &params).unwrap();

    for (prayer, time) in times.iter() {
        assert_eq!(times.current_prayer(time), Some(prayer));
        assert_eq!(
            times.current_prayer(time - TimeDelta::seconds(1)),
            Prayer::ALL
                .into_iter()
                .take_while(|&p| p != prayer)
                .last()
        );
        assert_eq!(times.next_prayer(time - TimeDelta::seconds(1)), Some(prayer));
    }
    assert_eq!(times.next_prayer(times.isha()), None);
}
