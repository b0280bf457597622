//! Parsing of client-supplied points in time.
//!
//! Accepted: RFC 3339 date-times, ISO 8601 date-times without an offset
//! (read as UTC) and bare calendar dates (UTC midnight). Results are always
//! normalised to UTC and truncated to whole seconds, the precision at which
//! due dates are stored and compared.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

pub fn parse_instant(raw: &str) -> Option<OffsetDateTime> {
    parse_any(raw).map(truncate)
}

/// Current time at storage precision.
pub fn now() -> OffsetDateTime {
    truncate(OffsetDateTime::now_utc())
}

fn truncate(dt: OffsetDateTime) -> OffsetDateTime {
    dt.to_offset(UtcOffset::UTC)
        .replace_nanosecond(0)
        .unwrap_or(dt)
}

fn parse_any(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }

    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    if let Ok(dt) = PrimitiveDateTime::parse(raw, naive) {
        return Some(dt.assume_utc());
    }

    let calendar = format_description!("[year]-[month]-[day]");
    Date::parse(raw, calendar)
        .ok()
        .map(|d| d.midnight().assume_utc())
}
