//! Day labels ("Segunda 20/05") and meal times ("10h30") as published by the restaurant.
//!
//! Both are parsed by trying an ordered list of candidate formats and keeping the first
//! one that matches.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use regex::Regex;

use super::Error;
use crate::config::tagged;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado", "Domingo",
];

#[derive(Clone, Copy)]
pub struct TimeFormat {
    pub name: &'static str,
    parse: fn(&str) -> Option<NaiveTime>,
}

impl TimeFormat {
    pub fn parse(&self, token: &str) -> Option<NaiveTime> {
        (self.parse)(token)
    }
}

#[derive(Clone, Copy)]
pub struct DateFormat {
    pub name: &'static str,
    parse: fn(&str, i32) -> Option<NaiveDate>,
}

impl DateFormat {
    pub fn parse(&self, label: &str, year: i32) -> Option<NaiveDate> {
        (self.parse)(label, year)
    }
}

/// Tried in order, short form first.
pub const TIME_FORMATS: &[TimeFormat] = &[
    TimeFormat {
        name: "H'h'",
        parse: short_time,
    },
    TimeFormat {
        name: "H'h'mm",
        parse: full_time,
    },
];

/// Tried in order, short form first.
pub const DATE_FORMATS: &[DateFormat] = &[
    DateFormat {
        name: "dd/MM",
        parse: short_date,
    },
    DateFormat {
        name: "EEEE, dd/MM",
        parse: full_date,
    },
];

fn short_time(token: &str) -> Option<NaiveTime> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})\s*h$").expect("regex should be valid"));
    let caps = RE.captures(token)?;
    NaiveTime::from_hms_opt(caps[1].parse().ok()?, 0, 0)
}

fn full_time(token: &str) -> Option<NaiveTime> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^(\d{1,2})\s*h\s*(\d{2})$").expect("regex should be valid")
    });
    let caps = RE.captures(token)?;
    NaiveTime::from_hms_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, 0)
}

fn short_date(label: &str, year: i32) -> Option<NaiveDate> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("regex should be valid"));
    let caps = RE.captures(label)?;
    NaiveDate::from_ymd_opt(year, caps[2].parse().ok()?, caps[1].parse().ok()?)
}

fn full_date(label: &str, year: i32) -> Option<NaiveDate> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^\p{L}+(?:-feira)?,?\s*(\d{1,2}/\d{1,2})$").expect("regex should be valid")
    });
    let caps = RE.captures(label)?;
    short_date(&caps[1], year)
}

/// Parses a meal time token and places it on the day starting at `day_start`.
pub fn parse_meal_time(
    token: &str,
    day_start: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>, Error> {
    let token = token.trim();
    let time = TIME_FORMATS
        .iter()
        .find_map(|format| format.parse(token))
        .ok_or_else(|| {
            let tried: Vec<&str> = TIME_FORMATS.iter().map(|format| format.name).collect();
            Error::time_parsing_error(&format!("{token:?} matches none of {tried:?}"))
        })?;
    Ok(day_start
        + Duration::hours(i64::from(time.hour()))
        + Duration::minutes(i64::from(time.minute())))
}

/// Parses a date label into local midnight of that day in `tz`.
pub fn parse_operation_date(
    label: &str,
    year: i32,
    tz: Tz,
) -> Result<DateTime<FixedOffset>, Error> {
    let label = label.trim();
    let date = DATE_FORMATS
        .iter()
        .find_map(|format| format.parse(label, year))
        .ok_or_else(|| {
            let tried: Vec<&str> = DATE_FORMATS.iter().map(|format| format.name).collect();
            Error::date_parsing_error(&format!("{label:?} matches none of {tried:?}"))
        })?;
    local_midnight(date, tz)
}

fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<FixedOffset>, Error> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::date_parsing_error("midnight is not a valid time"))?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            Error::date_parsing_error(&format!("{date} has no midnight in {}", tz.name()))
        })
}

/// A day label split into its weekday name and date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub weekday: Option<String>,
    pub date: String,
}

/// Separates the weekday from the date in a section's day label.
///
/// The page usually puts a space between them, but not always ("Terça21/05"), so when
/// there is only one token this falls back to looking for a known weekday name inside it.
pub fn split_weekday(label: &str) -> DayLabel {
    let label = label.trim();
    let mut tokens = label.split_whitespace();
    if let (Some(weekday), Some(date)) = (tokens.next(), tokens.next()) {
        return DayLabel {
            weekday: Some(weekday.to_string()),
            date: date.to_string(),
        };
    }

    if let Some(weekday) = WEEKDAY_NAMES.iter().find(|name| label.contains(*name)) {
        let date = label.replacen(weekday, "", 1);
        return DayLabel {
            weekday: Some((*weekday).to_string()),
            date: date
                .trim_matches(|c: char| c.is_whitespace() || c == ',')
                .to_string(),
        };
    }

    log::warn!(
        "{}",
        tagged(format_args!("Could not parse week day from {label:?}, using it as the date"))
    );
    DayLabel {
        weekday: None,
        date: label.to_string(),
    }
}

/// Resolves a full day label ("Segunda 20/05") to local midnight of that day.
pub fn parse_day_label(label: &str, year: i32, tz: Tz) -> Result<DateTime<FixedOffset>, Error> {
    let day_label = split_weekday(label);
    log::trace!("{label:?} -> weekday {:?}, date {:?}", day_label.weekday, day_label.date);
    parse_operation_date(&day_label.date, year, tz)
        // the full format still knows what to do with labels the split mangled
        .or_else(|e| parse_operation_date(label, year, tz).map_err(|_| e))
}
