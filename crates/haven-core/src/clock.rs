//! Wall-clock and calendar-day resolution.
//!
//! Timestamps are always stored in UTC. The calendar day a timestamp belongs
//! to is resolved per timestamp through the clock, so the daily chat quota
//! and the mood check-in gate agree on where midnight falls even across
//! DST transitions.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

/// Source of "now" and of the user's calendar day boundaries.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The user's local calendar day for the given instant.
    fn day_of(&self, instant: &DateTime<Utc>) -> NaiveDate;

    /// The user's local calendar day right now.
    fn today(&self) -> NaiveDate {
        self.day_of(&self.now())
    }
}

/// Clock backed by the system time and the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn day_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

/// Clock pinned to a fixed instant and UTC offset.
///
/// Used by tests and by tooling that replays data for a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Creates a clock at `now` in UTC.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    /// Sets the local offset used to derive calendar days.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a copy of this clock moved to another instant.
    pub fn at(&self, now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: self.offset,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn day_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_uses_offset_for_day() {
        // 2024-03-10 20:00 UTC is already 2024-03-11 in UTC+05:30
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();
        let utc_clock = FixedClock::new(instant);
        let ist_clock =
            FixedClock::new(instant).with_offset(FixedOffset::east_opt(5 * 3600 + 1800).unwrap());

        assert_eq!(utc_clock.today(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(ist_clock.today(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_at_keeps_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant).with_offset(FixedOffset::west_opt(8 * 3600).unwrap());
        let later = clock.at(Utc.with_ymd_and_hms(2024, 1, 2, 7, 59, 0).unwrap());
        // 07:59 UTC on Jan 2 is still Jan 1 at UTC-8
        assert_eq!(later.today(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
