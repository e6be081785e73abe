// Parsing of countdown time expressions: clock times and relative durations

use crate::dateparse::DateParser;
use crate::types::{TimeSpec, UnitCategory};
use chrono::{NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not find a time in '{0}'")]
    Unrecognized(String),
    #[error("'{0}' is not a valid time of day")]
    InvalidTime(String),
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
}

// ASCII digits only: other Unicode decimal digits are not amounts.
// Every unit alternative here must be known to `UnitCategory::from_unit`.
static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(hours?|hrs?|minutes?|mins?|seconds?|secs?|h|m|s)").unwrap()
});

/// Parse a time expression. Anything containing a colon is a clock time,
/// everything else is a relative duration.
pub fn parse_time_spec(
    input: &str,
    parser: &dyn DateParser,
    now: NaiveDateTime,
) -> Result<TimeSpec, ParseError> {
    if input.contains(':') {
        parse_absolute(input, parser, now).map(TimeSpec::Absolute)
    } else {
        Ok(TimeSpec::Relative(parse_duration(input)))
    }
}

/// Resolve a clock time to its next occurrence: times already behind `now`
/// move forward one day
pub fn parse_absolute(
    input: &str,
    parser: &dyn DateParser,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ParseError> {
    let target = parser.parse(input, now)?;
    if target < now {
        Ok(target + TimeDelta::days(1))
    } else {
        Ok(target)
    }
}

/// Sum every `<amount><unit>` pair in the input, in seconds.
///
/// Text that doesn't match is ignored, so input with no units gives 0.
pub fn parse_duration(input: &str) -> u64 {
    let mut total: u64 = 0;

    for caps in DURATION_REGEX.captures_iter(input) {
        // Case folding also lets lookalikes such as 'ſ' (long s) through
        let Some(unit) = UnitCategory::from_unit(&caps[2]) else {
            continue;
        };
        // ASCII digits can only fail to parse by overflowing, which saturates
        let amount = caps[1].parse::<u64>().unwrap_or(u64::MAX);
        total = total.saturating_add(amount.saturating_mul(unit.seconds()));
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Always answers with the same instant
    struct FixedParser(Option<NaiveDateTime>);

    impl DateParser for FixedParser {
        fn parse(&self, text: &str, _now: NaiveDateTime) -> Result<NaiveDateTime, ParseError> {
            self.0.ok_or_else(|| ParseError::Unrecognized(text.to_string()))
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_duration_combined() {
        assert_eq!(parse_duration("1h 2m 30s"), 3750);
    }

    #[test]
    fn test_parse_duration_single() {
        assert_eq!(parse_duration("10s"), 10);
        assert_eq!(parse_duration("5 minutes"), 300);
        assert_eq!(parse_duration("2 hrs"), 7200);
    }

    #[test]
    fn test_parse_duration_no_units() {
        assert_eq!(parse_duration("no numbers here"), 0);
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("42"), 0);
    }

    #[test]
    fn test_parse_duration_case_insensitive() {
        assert_eq!(parse_duration("1H 1Min 1SEC"), 3661);
    }

    #[test]
    fn test_parse_duration_ignores_noise() {
        assert_eq!(parse_duration("about 2h, then 15m more"), 8100);
    }

    #[test]
    fn test_parse_duration_repeated_units_add_up() {
        assert_eq!(parse_duration("1m 1m 1m"), 180);
    }

    #[test]
    fn test_parse_duration_saturates() {
        assert_eq!(parse_duration("99999999999999999999999h"), u64::MAX);
    }

    #[test]
    fn test_parse_duration_ignores_non_ascii_digits() {
        assert_eq!(parse_duration("\u{0665}m"), 0);
        assert_eq!(parse_duration("\u{0665}m 10s"), 10);
        assert_eq!(parse_duration("\u{FF15}m"), 0);
    }

    #[test]
    fn test_parse_duration_skips_case_folded_lookalikes() {
        assert_eq!(parse_duration("2\u{017F}"), 0);
        assert_eq!(parse_duration("2\u{017F} 3s"), 3);
    }

    #[test]
    fn test_parse_duration_every_unit_word_counts() {
        let units = [
            ("h", 3600),
            ("hr", 3600),
            ("hrs", 3600),
            ("hour", 3600),
            ("hours", 3600),
            ("m", 60),
            ("min", 60),
            ("mins", 60),
            ("minute", 60),
            ("minutes", 60),
            ("s", 1),
            ("sec", 1),
            ("secs", 1),
            ("second", 1),
            ("seconds", 1),
        ];
        for (unit, secs) in units {
            assert_eq!(parse_duration(&format!("2{}", unit)), 2 * secs, "unit {}", unit);
        }
    }

    #[test]
    fn test_parse_absolute_future_used_as_is() {
        let parser = FixedParser(Some(at(15, 0)));
        assert_eq!(parse_absolute("15:00", &parser, at(10, 0)).unwrap(), at(15, 0));
    }

    #[test]
    fn test_parse_absolute_past_rolls_forward_one_day() {
        let parser = FixedParser(Some(at(9, 0)));
        let target = parse_absolute("9:00", &parser, at(10, 0)).unwrap();
        assert_eq!(target - at(9, 0), TimeDelta::hours(24));
    }

    #[test]
    fn test_parse_absolute_now_is_not_past() {
        let parser = FixedParser(Some(at(10, 0)));
        assert_eq!(parse_absolute("10:00", &parser, at(10, 0)).unwrap(), at(10, 0));
    }

    #[test]
    fn test_parse_time_spec_dispatch() {
        let parser = FixedParser(Some(at(15, 0)));
        assert_eq!(
            parse_time_spec("3:00pm", &parser, at(10, 0)),
            Ok(TimeSpec::Absolute(at(15, 0)))
        );
        assert_eq!(
            parse_time_spec("1h 30m", &parser, at(10, 0)),
            Ok(TimeSpec::Relative(5400))
        );
    }

    #[test]
    fn test_parse_time_spec_propagates_parser_failure() {
        let parser = FixedParser(None);
        assert!(matches!(
            parse_time_spec("not: a time", &parser, at(10, 0)),
            Err(ParseError::Unrecognized(_))
        ));
    }
}
