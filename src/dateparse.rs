// Fuzzy wall-clock parsing for absolute countdown targets

use crate::timespec::ParseError;
use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// Turns free text into a point in time
pub trait DateParser {
    /// Parse `text` relative to `now`, which supplies any missing date parts
    fn parse(&self, text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ParseError>;
}

// Digit classes are ASCII-only; other Unicode digits never form a time or date
static CLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?\s*(am|pm|a\.m\.|p\.m\.)?").unwrap()
});

static ISO_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\b").unwrap());

static US_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\b").unwrap());

const MONTH_NAME: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?";

/// "Dec 31", "March 5th, 2025"; a day directly followed by ':' is an hour
static MONTH_DAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b{}\s+([0-9]{{1,2}})(?:st|nd|rd|th)?(?:[,\s]+([0-9]{{4}})\b|[,\s]|$)",
        MONTH_NAME
    ))
    .unwrap()
});

/// "31 Dec", "5th of March 2025"; a day directly after ':' is a minute
static DAY_MONTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:^|[^0-9:])([0-9]{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?{}(?:,?\s+([0-9]{{4}})\b)?",
        MONTH_NAME
    ))
    .unwrap()
});

static MONTH_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b{}", MONTH_NAME)).unwrap());

/// Finds a clock time (and optionally a date) anywhere in the text, ignoring
/// the words around it
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyDateParser;

impl DateParser for FuzzyDateParser {
    fn parse(&self, text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ParseError> {
        let time = find_time(text)?;
        let date = find_date(text, now)?.unwrap_or_else(|| now.date());
        Ok(date.and_time(time))
    }
}

fn find_time(text: &str) -> Result<NaiveTime, ParseError> {
    let caps = CLOCK_REGEX
        .captures(text)
        .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;

    let invalid = || ParseError::InvalidTime(caps[0].trim().to_string());
    let field = |i: usize| -> Result<u32, ParseError> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().map_err(|_| invalid()),
            None => Ok(0),
        }
    };

    let mut hour = field(1)?;
    let minute = field(2)?;
    let second = field(3)?;

    if let Some(meridiem) = caps.get(4) {
        if hour == 0 || hour > 12 {
            return Err(invalid());
        }
        let pm = meridiem.as_str().to_ascii_lowercase().starts_with('p');
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// Look for a calendar date. A month name that can't be tied to a day is an
/// error rather than something to skip, so the deadline never silently
/// falls back to today.
fn find_date(text: &str, now: NaiveDateTime) -> Result<Option<NaiveDate>, ParseError> {
    if let Some(caps) = ISO_DATE_REGEX.captures(text) {
        let matched = &caps[0];
        let year = number(&caps[1], matched)?;
        let month = number(&caps[2], matched)?;
        return build_date(matched, year, month, &caps[3]).map(Some);
    }

    if let Some(caps) = US_DATE_REGEX.captures(text) {
        let matched = &caps[0];
        let year = number(&caps[3], matched)?;
        let month = number(&caps[1], matched)?;
        return build_date(matched, year, month, &caps[2]).map(Some);
    }

    let named = MONTH_DAY_REGEX
        .captures(text)
        .map(|caps| (caps, 1, 2))
        .or_else(|| DAY_MONTH_REGEX.captures(text).map(|caps| (caps, 2, 1)));

    if let Some((caps, month_at, day_at)) = named {
        let matched = caps[0].trim_matches(|c: char| !c.is_alphanumeric());
        let month = month_number(&caps[month_at])
            .ok_or_else(|| ParseError::InvalidDate(matched.to_string()))?;
        let year = match caps.get(3) {
            Some(y) => number(y.as_str(), matched)?,
            None => now.year(),
        };
        return build_date(matched, year, month, &caps[day_at]).map(Some);
    }

    if let Some(caps) = MONTH_WORD_REGEX.captures(text) {
        return Err(ParseError::InvalidDate(caps[0].to_string()));
    }

    Ok(None)
}

fn month_number(name: &str) -> Option<u32> {
    let short: String = name.to_lowercase().chars().take(3).collect();
    short.parse::<Month>().ok().map(|m| m.number_from_month())
}

fn number<T: FromStr>(digits: &str, matched: &str) -> Result<T, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidDate(matched.to_string()))
}

fn build_date(matched: &str, year: i32, month: u32, day: &str) -> Result<NaiveDate, ParseError> {
    let day = number(day, matched)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseError::InvalidDate(matched.to_string()))
}
