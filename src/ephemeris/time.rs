//! Conversions between wall-clock UTC timestamps and toolkit epochs

use anise::prelude::Epoch;
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::error::EphemerisError;

/// Convert a UTC timestamp to a toolkit epoch
pub fn to_epoch(at: DateTime<Utc>) -> Epoch {
    // chrono folds a leap second into the nanosecond field; it is clamped to
    // the last nanosecond of the preceding second
    let nanos = at.nanosecond().min(999_999_999);

    Epoch::from_gregorian_utc(
        at.year(),
        at.month() as u8,
        at.day() as u8,
        at.hour() as u8,
        at.minute() as u8,
        at.second() as u8,
        nanos,
    )
}

/// Convert a toolkit epoch back to a UTC timestamp
///
/// Fails only for dates outside chrono's representable range.
pub fn from_epoch(epoch: Epoch) -> Result<DateTime<Utc>, EphemerisError> {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();

    let whole = Utc
        .with_ymd_and_hms(
            year,
            month as u32,
            day as u32,
            hour as u32,
            minute as u32,
            second as u32,
        )
        .single()
        .ok_or_else(|| EphemerisError::TimeConversion(format!("{} is not a valid UTC time", epoch)))?;

    Ok(whole + Duration::nanoseconds(nanos as i64))
}

/// Usable time range of an ephemeris
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Sample instants across a range: `start + offset`, then every `step`,
/// strictly before `end`. Sampling stops early if an instant would overflow
/// the representable range.
///
/// The offset keeps the first sample off the coverage boundary, where
/// queries can land a hair outside the segment.
pub fn sample_times(range: &TimeRange, offset: Duration, step: Duration) -> Vec<DateTime<Utc>> {
    if step <= Duration::zero() {
        return Vec::new();
    }

    let mut times = Vec::new();
    let mut next = range.start.checked_add_signed(offset);
    while let Some(at) = next {
        if at >= range.end {
            break;
        }
        times.push(at);
        next = at.checked_add_signed(step);
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_epoch_round_trip_keeps_subseconds() {
        let at = utc(2022, 11, 21, 12, 44, 7) + Duration::milliseconds(250);
        let back = from_epoch(to_epoch(at)).unwrap();
        assert_eq!(back, at);
    }

    #[test]
    fn test_leap_second_clamps_to_preceding_second() {
        // 2016-12-31T23:59:60.5 UTC
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap()
            .and_utc();

        let back = from_epoch(to_epoch(leap)).unwrap();
        assert_eq!(back, utc(2016, 12, 31, 23, 59, 59) + Duration::nanoseconds(999_999_999));
    }

    #[test]
    fn test_j2000_ephemeris_time() {
        // J2000 TDB is 2000-01-01T11:58:55.816 UTC
        let at = utc(2000, 1, 1, 11, 58, 55) + Duration::milliseconds(816);
        let et = to_epoch(at).to_et_seconds();
        assert!(et.abs() < 1e-2, "et = {et}");
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = TimeRange::new(utc(2022, 11, 16, 8, 0, 0), utc(2022, 12, 11, 17, 0, 0));
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(range.contains(utc(2022, 11, 30, 0, 0, 0)));
        assert!(!range.contains(utc(2022, 12, 12, 0, 0, 0)));
        assert!(!range.contains(utc(2022, 11, 16, 7, 59, 59)));
        assert_eq!(range.duration(), Duration::hours(25 * 24 + 9));
    }

    #[test]
    fn test_sample_times_hourly() {
        let range = TimeRange::new(utc(2022, 11, 16, 8, 0, 0), utc(2022, 11, 16, 11, 0, 0));
        let times = sample_times(&range, Duration::seconds(1), Duration::hours(1));

        assert_eq!(
            times,
            vec![
                utc(2022, 11, 16, 8, 0, 1),
                utc(2022, 11, 16, 9, 0, 1),
                utc(2022, 11, 16, 10, 0, 1),
            ]
        );
    }

    #[test]
    fn test_sample_times_excludes_end() {
        let range = TimeRange::new(utc(2022, 11, 16, 8, 0, 0), utc(2022, 11, 16, 10, 0, 0));
        let times = sample_times(&range, Duration::zero(), Duration::hours(1));
        assert_eq!(times.len(), 2);
        assert!(times.iter().all(|t| *t < range.end));
    }

    #[test]
    fn test_sample_times_degenerate() {
        let at = utc(2022, 11, 16, 8, 0, 0);
        let empty = TimeRange::new(at, at);
        assert!(sample_times(&empty, Duration::seconds(1), Duration::hours(1)).is_empty());

        let range = TimeRange::new(at, at + Duration::days(1));
        assert!(sample_times(&range, Duration::zero(), Duration::zero()).is_empty());
    }

    #[test]
    fn test_sample_times_stops_on_overflow() {
        let at = utc(2022, 11, 16, 8, 0, 0);
        let range = TimeRange::new(at, DateTime::<Utc>::MAX_UTC);

        let far = Duration::try_seconds(9_000_000_000_000_000).unwrap();
        assert!(sample_times(&range, far, Duration::hours(1)).is_empty());

        let times = sample_times(&range, Duration::zero(), Duration::MAX);
        assert_eq!(times, vec![at]);
    }
}
