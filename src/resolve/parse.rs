//! Typed value parsing for raw option strings.
//!
//! Every parser treats absent, empty, and whitespace-only input as
//! [`ResolveError::MissingValue`] and malformed input as
//! [`ResolveError::InvalidFormat`]. With `ignore_failures` set, a failure is
//! logged at debug level and the parser returns its documented fallback.

use crate::error::ResolveError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use tracing::debug;
use url::{Position, Url};

/// Separators used by [`parse_list`] when the caller passes none.
pub const DEFAULT_LIST_SEPARATORS: &[&str] = &["|"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
];

/// Returns the trimmed input or `MissingValue`.
fn require<'a>(raw: Option<&'a str>, expected: &'static str) -> Result<&'a str, ResolveError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ResolveError::MissingValue(format!("{} value", expected))),
    }
}

/// Swallow `result`'s failure when `ignore_failures` is set.
fn absorb<T>(
    result: Result<T, ResolveError>,
    ignore_failures: bool,
    fallback: impl FnOnce() -> T,
) -> Result<T, ResolveError> {
    match result {
        Ok(value) => Ok(value),
        Err(err) if ignore_failures => {
            debug!(error = %err, "ignoring parse failure");
            Ok(fallback())
        }
        Err(err) => Err(err),
    }
}

fn parse_number<T: FromStr>(
    raw: Option<&str>,
    expected: &'static str,
    ignore_failures: bool,
) -> Result<Option<T>, ResolveError> {
    let parsed = require(raw, expected).and_then(|value| {
        value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ResolveError::InvalidFormat {
                expected,
                value: value.to_string(),
            })
    });
    absorb(parsed, ignore_failures, || None)
}

/// Parse a 32-bit integer. Ignored failures yield `None`.
pub fn parse_int(raw: Option<&str>, ignore_failures: bool) -> Result<Option<i32>, ResolveError> {
    parse_number(raw, "integer", ignore_failures)
}

/// Parse a 64-bit integer. Ignored failures yield `None`.
pub fn parse_long(raw: Option<&str>, ignore_failures: bool) -> Result<Option<i64>, ResolveError> {
    parse_number(raw, "long integer", ignore_failures)
}

/// Parse a finite decimal number. Ignored failures yield `None`.
pub fn parse_decimal(
    raw: Option<&str>,
    ignore_failures: bool,
) -> Result<Option<f64>, ResolveError> {
    let parsed = parse_number::<f64>(raw, "decimal", false).and_then(|value| match value {
        Some(number) if !number.is_finite() => Err(ResolveError::InvalidFormat {
            expected: "decimal",
            value: raw.unwrap_or_default().trim().to_string(),
        }),
        other => Ok(other),
    });
    absorb(parsed, ignore_failures, || None)
}

/// Parse a local date and time. Ignored failures yield the current local time.
///
/// Accepts RFC 3339, ISO-style `YYYY-MM-DD[ T]HH:MM[:SS[.f]]`, US-style
/// `MM/DD/YYYY HH:MM[:SS] [AM|PM]`, and bare dates (midnight).
pub fn parse_date_time(
    raw: Option<&str>,
    ignore_failures: bool,
) -> Result<NaiveDateTime, ResolveError> {
    let parsed = require(raw, "date/time").and_then(|value| {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(dt.with_timezone(&Local).naive_local());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .or_else(|| parse_naive_date(value).map(|d| d.and_time(NaiveTime::MIN)))
            .ok_or_else(|| ResolveError::InvalidFormat {
                expected: "date/time",
                value: value.to_string(),
            })
    });
    absorb(parsed, ignore_failures, || Local::now().naive_local())
}

/// Parse a time of day. Ignored failures yield the current local time of day.
pub fn parse_time(raw: Option<&str>, ignore_failures: bool) -> Result<NaiveTime, ResolveError> {
    let parsed = require(raw, "time").and_then(|value| {
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
            .ok_or_else(|| ResolveError::InvalidFormat {
                expected: "time",
                value: value.to_string(),
            })
    });
    absorb(parsed, ignore_failures, || Local::now().time())
}

/// Parse a calendar date.
///
/// Ignored failures yield today's date, or `None` when `return_null` is set.
pub fn parse_date(
    raw: Option<&str>,
    ignore_failures: bool,
    return_null: bool,
) -> Result<Option<NaiveDate>, ResolveError> {
    let parsed = require(raw, "date").and_then(|value| {
        parse_naive_date(value)
            .map(Some)
            .ok_or_else(|| ResolveError::InvalidFormat {
                expected: "date",
                value: value.to_string(),
            })
    });
    absorb(parsed, ignore_failures, || {
        if return_null {
            None
        } else {
            Some(Local::now().date_naive())
        }
    })
}

fn parse_naive_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Parse `true`/`false` (case-insensitive). Anything else yields `default`.
pub fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

/// Validate a string value.
///
/// A whitespace-only value is returned untouched when `accept_empty` is set.
/// Ignored failures yield an empty string.
pub fn parse_string(
    raw: Option<&str>,
    accept_empty: bool,
    ignore_failures: bool,
) -> Result<String, ResolveError> {
    let parsed = match raw {
        None => Err(ResolveError::MissingValue("string value".to_string())),
        Some(value) if value.trim().is_empty() && !accept_empty => Err(
            ResolveError::MissingValue("string value".to_string()),
        ),
        Some(value) => Ok(value.to_string()),
    };
    absorb(parsed, ignore_failures, String::new)
}

/// Split a delimited value into trimmed, non-empty entries.
///
/// An empty `separators` slice falls back to [`DEFAULT_LIST_SEPARATORS`].
/// Ignored failures yield `None`.
pub fn parse_list(
    raw: Option<&str>,
    separators: &[&str],
    ignore_failures: bool,
) -> Result<Option<Vec<String>>, ResolveError> {
    let separators: Vec<&str> = if separators.iter().any(|s| !s.is_empty()) {
        separators.iter().copied().filter(|s| !s.is_empty()).collect()
    } else {
        DEFAULT_LIST_SEPARATORS.to_vec()
    };

    let parsed = require(raw, "list").map(|value| {
        let mut parts = vec![value.to_string()];
        for separator in &separators {
            parts = parts
                .iter()
                .flat_map(|part| part.split(separator).map(str::to_string))
                .collect();
        }
        Some(
            parts
                .into_iter()
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        )
    });
    absorb(parsed, ignore_failures, || None)
}

/// Normalise an absolute URI.
///
/// The scheme and authority are re-serialised in canonical form; the path,
/// query and fragment are kept exactly as given. On a format failure with `ignore_failures` set, the original text is
/// returned unchanged; otherwise the error carries `source_tag`.
pub fn parse_uri(
    raw: Option<&str>,
    source_tag: &str,
    ignore_failures: bool,
) -> Result<Option<String>, ResolveError> {
    let value = match require(raw, "URI") {
        Ok(value) => value,
        Err(err) => return absorb(Err(err), ignore_failures, || None),
    };

    match Url::parse(value) {
        Ok(url) => Ok(Some(canonical_uri(&url, value))),
        Err(source) if ignore_failures => {
            debug!(source_tag, error = %source, "keeping unparsed URI");
            Ok(raw.map(str::to_string))
        }
        Err(source) => Err(ResolveError::UriFormatInvalid {
            source_tag: source_tag.to_string(),
            value: value.to_string(),
            source,
        }),
    }
}

/// `url`'s scheme and authority followed by `original`'s untouched tail.
fn canonical_uri(url: &Url, original: &str) -> String {
    let after_scheme = original
        .find(':')
        .map_or(original, |i| &original[i + 1..]);
    let tail = match after_scheme.strip_prefix("//") {
        Some(authority_and_rest) => authority_and_rest
            .find(|c| matches!(c, '/' | '?' | '#'))
            .map_or("", |i| &authority_and_rest[i..]),
        None => after_scheme,
    };
    if tail.is_empty() {
        return url.to_string();
    }
    format!("{}{}", &url[..Position::AfterPort], tail)
}
