//! Access-rule timestamp parsing.
//!
//! Accepts the extended ISO-8601 forms course authors write in `allowAccess`
//! rules. Values with an offset are normalised to UTC; values without one
//! are compared as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an access-rule date, or `None` if it is not a recognised timestamp.
#[must_use]
pub fn parse_access_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    parse_with_minutes(value)
        .or_else(|| with_zero_minutes(value).and_then(|expanded| parse_with_minutes(&expanded)))
}

fn parse_with_minutes(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.naive_utc());
        }
    }

    // `Z` is UTC, which is already how naive values are compared.
    let naive = value.strip_suffix('Z').unwrap_or(value);
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Rewrite an hours-only time (`YYYY-MM-DDTHH`, optionally followed by `Z`
/// or an offset) as `YYYY-MM-DDTHH:00`. chrono cannot parse a time without
/// minutes.
fn with_zero_minutes(value: &str) -> Option<String> {
    let (date, rest) = value.split_at_checked(10)?;
    let time = rest.strip_prefix('T').or_else(|| rest.strip_prefix(' '))?;
    let separator = &rest[..1];
    let hour = time.get(..2)?;
    if !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let zone = &time[2..];
    let is_zone = zone.is_empty() || zone == "Z" || zone.starts_with(['+', '-']);
    is_zone.then(|| format!("{date}{separator}{hour}:00{zone}"))
}
