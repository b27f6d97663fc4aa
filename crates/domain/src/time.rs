//! Time and timestamp helpers.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// UTC timestamp used for `updated_at` and cache-busting.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp in local time as `DD/MM/YYYY HH:MM:SS`, the format
/// the panels use for "last updated" labels.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    format_in(ts, &Local)
}

/// Render a timestamp as `DD/MM/YYYY HH:MM:SS` in the given time zone.
#[must_use]
pub fn format_in<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}
