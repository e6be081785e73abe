use chrono::{NaiveDateTime, TimeDelta};
use std::fmt;

/// Which bucket a duration unit word falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// h, hr, hrs, hour, hours
    Hour,
    /// m, min, mins, minute, minutes
    Minute,
    /// s, sec, secs, second, seconds
    Second,
}

const HOUR_UNITS: &[&str] = &["h", "hr", "hrs", "hour", "hours"];

const MINUTE_UNITS: &[&str] = &["m", "min", "mins", "minute", "minutes"];

const SECOND_UNITS: &[&str] = &["s", "sec", "secs", "second", "seconds"];

impl UnitCategory {
    /// Classify a unit word (case-insensitive)
    pub fn from_unit(unit: &str) -> Option<UnitCategory> {
        let unit_lower = unit.to_lowercase();
        if HOUR_UNITS.contains(&unit_lower.as_str()) {
            Some(UnitCategory::Hour)
        } else if MINUTE_UNITS.contains(&unit_lower.as_str()) {
            Some(UnitCategory::Minute)
        } else if SECOND_UNITS.contains(&unit_lower.as_str()) {
            Some(UnitCategory::Second)
        } else {
            None
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            UnitCategory::Hour => 3600,
            UnitCategory::Minute => 60,
            UnitCategory::Second => 1,
        }
    }
}

/// A parsed countdown target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpec {
    /// A wall-clock instant, already rolled forward if it was in the past
    Absolute(NaiveDateTime),
    /// Seconds from the moment the countdown starts
    Relative(u64),
}

impl TimeSpec {
    /// Fix the deadline for a countdown that starts at `now`
    pub fn end_instant(&self, now: NaiveDateTime) -> NaiveDateTime {
        match *self {
            TimeSpec::Absolute(at) => at,
            TimeSpec::Relative(secs) => {
                let secs = i64::try_from(secs).unwrap_or(i64::MAX);
                let delta = TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX);
                now.checked_add_signed(delta).unwrap_or(NaiveDateTime::MAX)
            }
        }
    }
}

/// Time left on the clock, split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    /// Whole seconds between `now` and `end`, or None once the deadline is reached
    pub fn until(end: NaiveDateTime, now: NaiveDateTime) -> Option<RemainingTime> {
        if now >= end {
            return None;
        }
        let total = u64::try_from((end - now).num_seconds()).unwrap_or(0);
        Some(RemainingTime::from_seconds(total))
    }

    pub fn from_seconds(total: u64) -> RemainingTime {
        RemainingTime {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_unit_category_hours() {
        assert_eq!(UnitCategory::from_unit("h"), Some(UnitCategory::Hour));
        assert_eq!(UnitCategory::from_unit("hrs"), Some(UnitCategory::Hour));
        assert_eq!(UnitCategory::from_unit("HOURS"), Some(UnitCategory::Hour));
    }

    #[test]
    fn test_unit_category_minutes_and_seconds() {
        assert_eq!(UnitCategory::from_unit("min"), Some(UnitCategory::Minute));
        assert_eq!(UnitCategory::from_unit("Minutes"), Some(UnitCategory::Minute));
        assert_eq!(UnitCategory::from_unit("s"), Some(UnitCategory::Second));
        assert_eq!(UnitCategory::from_unit("secs"), Some(UnitCategory::Second));
    }

    #[test]
    fn test_unit_category_unknown() {
        assert_eq!(UnitCategory::from_unit("days"), None);
        assert_eq!(UnitCategory::from_unit(""), None);
    }

    #[test]
    fn test_end_instant_relative() {
        let spec = TimeSpec::Relative(90);
        assert_eq!(spec.end_instant(at(10, 0, 0)), at(10, 1, 30));
    }

    #[test]
    fn test_end_instant_absolute_ignores_now() {
        let spec = TimeSpec::Absolute(at(15, 23, 0));
        assert_eq!(spec.end_instant(at(10, 0, 0)), at(15, 23, 0));
    }

    #[test]
    fn test_end_instant_huge_duration_saturates() {
        let spec = TimeSpec::Relative(u64::MAX);
        assert_eq!(spec.end_instant(at(10, 0, 0)), NaiveDateTime::MAX);
    }

    #[test]
    fn test_remaining_until() {
        let left = RemainingTime::until(at(11, 2, 3), at(10, 0, 0)).unwrap();
        assert_eq!(left.to_string(), "01:02:03");
    }

    #[test]
    fn test_remaining_until_expired() {
        assert_eq!(RemainingTime::until(at(10, 0, 0), at(10, 0, 0)), None);
        assert_eq!(RemainingTime::until(at(10, 0, 0), at(10, 0, 1)), None);
    }

    #[test]
    fn test_remaining_hours_not_clamped() {
        let left = RemainingTime::from_seconds(123 * 3600 + 5);
        assert_eq!(left.to_string(), "123:00:05");
    }
}
