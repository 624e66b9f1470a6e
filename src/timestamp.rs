//! ISO-8601 timestamp helpers (jiff).
//!
//! Timestamps are civil date-times with no offset; inputs carrying an
//! offset, `Z` or a `[zone]` annotation are rejected. Rendering matches
//! Python's `datetime.isoformat()`: microseconds are printed as six digits
//! and only when non-zero.

use jiff::Span;
use jiff::civil::{Date, DateTime, Time};

use crate::error::GenError;

/// Parse an ISO-8601 date-time. A bare date means midnight.
pub fn parse_iso(input: &str) -> Result<DateTime, GenError> {
    // jiff's civil parser accepts and drops offsets and zone annotations.
    if has_offset(input) {
        return Err(GenError::UnsupportedOffset {
            input: input.to_string(),
        });
    }
    match input.parse::<DateTime>() {
        Ok(dt) => Ok(dt),
        Err(err) => input
            .parse::<Date>()
            .map(|d| d.to_datetime(Time::midnight()))
            .map_err(|_| GenError::InvalidTimestamp {
                input: input.to_string(),
                source: err,
            }),
    }
}

/// True if anything past the date part looks like an offset or zone.
/// The time of day itself never contains `+`, `-`, `Z` or `[`.
fn has_offset(input: &str) -> bool {
    input
        .get(10..)
        .is_some_and(|tail| tail.contains(['+', '-', 'Z', 'z', '[']))
}

/// Render `dt` as `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
pub fn format_iso(dt: DateTime) -> String {
    let mut s = dt.strftime("%Y-%m-%dT%H:%M:%S").to_string();
    // Sub-microsecond digits are truncated.
    let micros = dt.subsec_nanosecond() / 1_000;
    if micros != 0 {
        s.push_str(&format!(".{micros:06}"));
    }
    s
}

/// `base` shifted by `days` whole days, as an ISO-8601 string.
pub fn shift_days(base: &str, days: i64) -> Result<String, GenError> {
    let dt = parse_iso(base)?;
    let span = Span::new()
        .try_days(days)
        .map_err(|source| out_of_range(base, days, "days", source))?;
    let shifted = dt
        .checked_add(span)
        .map_err(|source| out_of_range(base, days, "days", source))?;
    Ok(format_iso(shifted))
}

/// `base` shifted by `secs` seconds, as an ISO-8601 string.
pub fn shift_seconds(base: &str, secs: i64) -> Result<String, GenError> {
    let dt = parse_iso(base)?;
    let span = Span::new()
        .try_seconds(secs)
        .map_err(|source| out_of_range(base, secs, "seconds", source))?;
    let shifted = dt
        .checked_add(span)
        .map_err(|source| out_of_range(base, secs, "seconds", source))?;
    Ok(format_iso(shifted))
}

fn out_of_range(input: &str, offset: i64, unit: &'static str, source: jiff::Error) -> GenError {
    GenError::OutOfRange {
        input: input.to_string(),
        offset,
        unit,
        source,
    }
}
