//! Start-time resolution and lenient ISO 8601 date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::activity::{ActivityRecord, first_with_content, has_content};

/// Entry-level start-time keys, in priority order.
const START_TIME_KEYS: &[&str] = &["startTime", "startTimestamp", "startTimeLocal"];

/// Character position from which a `-` is read as a UTC offset sign rather
/// than a date separator (`YYYY-MM-DDTHH:MM:SS` is 19 characters).
const OFFSET_SEARCH_START: usize = 19;

/// Offset-carrying formats RFC 3339 rejects: minute precision, space
/// separator, and the compact basic form.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Naive formats accepted after the offset-carrying ones.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp: {0}")]
pub struct DateParseError(pub String);

/// Parses the calendar date out of an ISO 8601 timestamp.
///
/// The strict parse runs first. If it fails, a trailing UTC offset is cut off
/// and the strict parse is retried. The date is the one local to the
/// timestamp's own offset.
pub fn parse_date(timestamp: &str) -> Result<NaiveDate, DateParseError> {
    parse_strict(timestamp)
        .or_else(|| parse_strict(strip_offset(timestamp)))
        .ok_or_else(|| DateParseError(timestamp.to_string()))
}

fn parse_strict(s: &str) -> Option<NaiveDate> {
    let strategies: [fn(&str) -> Option<NaiveDate>; 4] =
        [parse_rfc3339, parse_with_offset, parse_naive, parse_bare_date];
    strategies.iter().find_map(|strategy| strategy(s))
}

fn parse_rfc3339(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn parse_with_offset(s: &str) -> Option<NaiveDate> {
    // `Z` is spelled out so every format only has to match a numeric offset.
    let normalized = match s.strip_suffix(['Z', 'z']) {
        Some(core) => format!("{core}+00:00"),
        None => s.to_string(),
    };
    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|dt| dt.date_naive())
}

fn parse_naive(s: &str) -> Option<NaiveDate> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.date())
}

fn parse_bare_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Cuts a trailing UTC offset off a timestamp.
///
/// Everything from the first `+` is dropped. Without a `+`, a `-` at or after
/// [`OFFSET_SEARCH_START`] marks a negative offset and the string is cut at
/// its last `-`.
fn strip_offset(s: &str) -> &str {
    if let Some((core, _)) = s.split_once('+') {
        return core;
    }
    let negative_offset = s
        .char_indices()
        .nth(OFFSET_SEARCH_START)
        .is_some_and(|(idx, _)| s[idx..].contains('-'));
    if negative_offset {
        s.rsplit_once('-').map_or(s, |(core, _)| core)
    } else {
        s
    }
}

/// Finds the raw start time for an activity.
///
/// Entry-level keys win; the activity's own `start.timestamp` is the fallback.
pub fn start_time<'a>(
    entry: &'a Map<String, Value>,
    record: &'a ActivityRecord,
) -> Option<&'a Value> {
    first_with_content(entry, START_TIME_KEYS).or_else(|| {
        record
            .get("start")
            .and_then(Value::as_object)
            .and_then(|start| start.get("timestamp"))
            .filter(|value| has_content(value))
    })
}

/// Resolves the calendar day an activity starts on.
///
/// Returns `Ok(None)` when there is no start time at all, and an error when
/// one exists but cannot be read as a date.
pub fn resolve_day(
    entry: &Map<String, Value>,
    record: &ActivityRecord,
) -> Result<Option<NaiveDate>, DateParseError> {
    match start_time(entry, record) {
        None => Ok(None),
        Some(Value::String(timestamp)) => parse_date(timestamp).map(Some),
        Some(other) => Err(DateParseError(other.to_string())),
    }
}
