//! Date, timestamp and interval generators.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use loader_core::GeneratedValue;
use rand::Rng;

/// Format used for timestamps without a time zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate a random date in the given range (inclusive).
pub fn generate_date_range<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> GeneratedValue {
    let days = (end - start).num_days();
    if days <= 0 {
        return GeneratedValue::Date(start);
    }

    let offset = rng.random_range(0..=days);
    GeneratedValue::Date(start + Duration::days(offset))
}

/// Generate a random timestamp with a sub-second part.
///
/// The whole-second part is uniform over `[start, end)`. With
/// `with_time_zone` the result is a UTC instant; otherwise it is a string in
/// [`TIMESTAMP_FORMAT`] with the zone stripped.
pub fn generate_timestamp_range<R: Rng>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
    with_time_zone: bool,
) -> GeneratedValue {
    let span = (end - start).num_seconds();
    let seconds = if span > 0 { rng.random_range(0..span) } else { 0 };
    let nanos = rng.random_range(0..1_000_000_000);
    let ts = start + Duration::seconds(seconds) + Duration::nanoseconds(nanos);

    if with_time_zone {
        GeneratedValue::DateTime(ts.and_utc())
    } else {
        GeneratedValue::String(ts.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Generate a human-readable interval of `min_hours..=max_hours` hours plus
/// random minutes and seconds.
pub fn generate_interval<R: Rng>(rng: &mut R, min_hours: u32, max_hours: u32) -> GeneratedValue {
    let hours = if min_hours >= max_hours {
        min_hours
    } else {
        rng.random_range(min_hours..=max_hours)
    };
    let minutes = rng.random_range(0..60);
    let seconds = rng.random_range(0..60);

    GeneratedValue::String(format!("{hours} hours {minutes} minutes {seconds} seconds"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_date_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2000, 1, 1);
        let end = date(2023, 12, 31);

        for _ in 0..1000 {
            if let GeneratedValue::Date(d) = generate_date_range(&mut rng, start, end) {
                assert!(d >= start && d <= end);
            } else {
                panic!("Expected Date value");
            }
        }
    }

    #[test]
    fn test_generate_timestamp_zoned() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let end = date(2023, 12, 31).and_hms_opt(23, 59, 59).unwrap();

        for _ in 0..1000 {
            if let GeneratedValue::DateTime(dt) = generate_timestamp_range(&mut rng, start, end, true) {
                assert!(dt.year() >= 2000 && dt.year() <= 2023);
            } else {
                panic!("Expected DateTime value");
            }
        }
    }

    #[test]
    fn test_generate_timestamp_formatted() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let end = date(2023, 12, 31).and_hms_opt(23, 59, 59).unwrap();

        if let GeneratedValue::String(s) = generate_timestamp_range(&mut rng, start, end, false) {
            let parsed = NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).unwrap();
            assert!(parsed >= start && parsed <= end);
            assert_eq!(s.len(), 19);
        } else {
            panic!("Expected String value");
        }
    }

    #[test]
    fn test_generate_interval() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_interval(&mut rng, 0, 100);
            let s = value.as_str().unwrap();
            let parts: Vec<&str> = s.split(' ').collect();
            assert_eq!(parts.len(), 6);
            assert_eq!(parts[1], "hours");
            assert_eq!(parts[3], "minutes");
            assert_eq!(parts[5], "seconds");
            assert!(parts[0].parse::<u32>().unwrap() <= 100);
            assert!(parts[2].parse::<u32>().unwrap() < 60);
            assert!(parts[4].parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_date_range(&mut rng1, date(2020, 1, 1), date(2024, 12, 31)),
            generate_date_range(&mut rng2, date(2020, 1, 1), date(2024, 12, 31))
        );
    }
}
