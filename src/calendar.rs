//! Calendar day identity
//!
//! A day is identified by its year and its ordinal day of the year (1 = Jan 1st).
//! The ordinal is computed from elapsed milliseconds since local midnight of
//! Dec 31 of the previous year with a fixed 86,400,000 ms day, so around DST
//! transitions the result can be off by one near midnight.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone};
use std::fmt;
use std::str::FromStr;

/// Fixed day length used for the day-of-year ordinal
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Shift applied to the ordinal in legacy `day-<n>-<year>` keys
pub const HYPHEN_KEY_OFFSET: u32 = 9;

/// Ordinal day of the year for `now` in its own time zone
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use progle::calendar::day_of_year;
///
/// let jan_first = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
/// assert_eq!(day_of_year(&jan_first), 1);
///
/// let feb_second = Utc.with_ymd_and_hms(2026, 2, 2, 23, 59, 59).unwrap();
/// assert_eq!(day_of_year(&feb_second), 33);
/// ```
#[must_use]
pub fn day_of_year<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    let local = now.naive_local();
    let Some(start) = NaiveDate::from_ymd_opt(local.year() - 1, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return local.ordinal();
    };

    // Elapsed real time, so a DST shift moves the boundary by an hour
    let elapsed_ms = match now.timezone().from_local_datetime(&start).earliest() {
        Some(start) => now.clone().signed_duration_since(start).num_milliseconds(),
        None => (local - start).num_milliseconds(),
    };

    u32::try_from(elapsed_ms.div_euclid(MS_PER_DAY)).unwrap_or(0)
}

/// Wall-clock time left until the next local midnight, when the word changes
#[must_use]
pub fn until_next_day<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeDelta {
    let local = now.naive_local();
    local
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(TimeDelta::zero(), |midnight| midnight - local)
}

/// Identity of one calendar day
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    year: i32,
    ordinal: u32,
}

impl DayKey {
    #[must_use]
    pub const fn new(year: i32, ordinal: u32) -> Self {
        Self { year, ordinal }
    }

    /// Day key for `now`, using the fixed-length day ordinal
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::new(now.naive_local().year(), day_of_year(now))
    }

    #[inline]
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Day of the year, 1 = Jan 1st
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self.ordinal
    }

    /// Continuous day number, consecutive across year boundaries
    #[must_use]
    pub fn epoch_day(self) -> i64 {
        NaiveDate::from_ymd_opt(self.year, 1, 1).map_or_else(
            || i64::from(self.year) * 366,
            |jan_first| i64::from(jan_first.num_days_from_ce()),
        ) + i64::from(self.ordinal)
            - 1
    }

    /// True when `next` is the calendar day right after `self`
    #[must_use]
    pub fn is_followed_by(self, next: Self) -> bool {
        next.epoch_day() - self.epoch_day() == 1
    }

    /// Parse a stored key, accepting the legacy forms
    ///
    /// - `day_<year>_<ordinal>`: canonical
    /// - `day_<ordinal>`: no year, attributed to `default_year`
    /// - `day-<n>-<year>`: `n` is the ordinal shifted by `HYPHEN_KEY_OFFSET`
    ///
    /// # Examples
    /// ```
    /// use progle::calendar::DayKey;
    ///
    /// assert_eq!(DayKey::parse("day_2026_42", 2000), Some(DayKey::new(2026, 42)));
    /// assert_eq!(DayKey::parse("day_42", 2026), Some(DayKey::new(2026, 42)));
    /// assert_eq!(DayKey::parse("day-51-2025", 2026), Some(DayKey::new(2025, 42)));
    /// assert_eq!(DayKey::parse("day-42", 2026), None);
    /// ```
    #[must_use]
    pub fn parse(key: &str, default_year: i32) -> Option<Self> {
        if let Some(rest) = key.strip_prefix("day-") {
            let (shifted, year) = rest.split_once('-')?;
            let ordinal = shifted
                .parse::<u32>()
                .ok()?
                .checked_sub(HYPHEN_KEY_OFFSET)
                .filter(|&o| o > 0)?;
            return Some(Self::new(year.parse().ok()?, ordinal));
        }

        let rest = key.strip_prefix("day_")?;
        match rest.split_once('_') {
            Some((year, ordinal)) => Some(Self::new(year.parse().ok()?, ordinal.parse().ok()?)),
            None => Some(Self::new(default_year, rest.parse().ok()?)),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day_{}_{}", self.year, self.ordinal)
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("day_")
            .and_then(|rest| rest.split_once('_'))
            .and_then(|(year, ordinal)| Some(Self::new(year.parse().ok()?, ordinal.parse().ok()?)))
            .ok_or_else(|| format!("Invalid day key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn until_next_day_counts_to_local_midnight() {
        let evening = Utc.with_ymd_and_hms(2026, 3, 4, 22, 30, 0).unwrap();
        assert_eq!(until_next_day(&evening), TimeDelta::minutes(90));

        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let local_morning = offset.with_ymd_and_hms(2026, 12, 31, 6, 0, 0).unwrap();
        assert_eq!(until_next_day(&local_morning), TimeDelta::hours(18));
    }

    #[test]
    fn day_of_year_first_and_last_day() {
        let jan_first = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(day_of_year(&jan_first), 1);

        let dec_last = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(day_of_year(&dec_last), 365);

        let leap_last = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(day_of_year(&leap_last), 366);
    }

    #[test]
    fn day_of_year_uses_local_date() {
        // 23:30 UTC on Jan 1st is already Jan 2nd at UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 1, 1, 23, 30, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(day_of_year(&now), 2);
    }

    #[test]
    fn day_of_year_is_stable_within_a_day() {
        let morning = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2026, 10, 15, 23, 59, 59).unwrap();
        assert_eq!(day_of_year(&morning), day_of_year(&evening));
        assert_eq!(day_of_year(&morning), 288);
    }

    #[test]
    fn key_display_and_parse() {
        let key = DayKey::new(2026, 288);
        assert_eq!(key.to_string(), "day_2026_288");
        assert_eq!("day_2026_288".parse::<DayKey>(), Ok(key));
        assert!("day_288".parse::<DayKey>().is_err());
        assert!("week_2026_1".parse::<DayKey>().is_err());
    }

    #[test]
    fn parse_accepts_hyphen_keys() {
        assert_eq!(DayKey::parse("day-10-2025", 2026), Some(DayKey::new(2025, 1)));
        assert_eq!(DayKey::parse("day-375-2024", 2026), Some(DayKey::new(2024, 366)));
        assert_eq!(DayKey::parse("day-9-2025", 2026), None);
        assert_eq!(DayKey::parse("day-x-2025", 2026), None);
        assert_eq!(DayKey::parse("day-20-", 2026), None);
        assert!("day-20-2025".parse::<DayKey>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(DayKey::parse("day_", 2026), None);
        assert_eq!(DayKey::parse("day_x_1", 2026), None);
        assert_eq!(DayKey::parse("day_2026_", 2026), None);
    }

    #[test]
    fn keys_order_numerically() {
        let mut keys = vec![
            DayKey::new(2026, 10),
            DayKey::new(2025, 300),
            DayKey::new(2026, 9),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                DayKey::new(2025, 300),
                DayKey::new(2026, 9),
                DayKey::new(2026, 10)
            ]
        );
    }

    #[test]
    fn consecutive_days_across_year_boundary() {
        assert!(DayKey::new(2025, 365).is_followed_by(DayKey::new(2026, 1)));
        assert!(DayKey::new(2024, 366).is_followed_by(DayKey::new(2025, 1)));
        assert!(DayKey::new(2026, 9).is_followed_by(DayKey::new(2026, 10)));
        assert!(!DayKey::new(2026, 9).is_followed_by(DayKey::new(2026, 11)));
        assert!(!DayKey::new(2026, 10).is_followed_by(DayKey::new(2026, 9)));
    }
}
