//! Commit message normalisation and stamping

use chrono::{DateTime, TimeZone};

/// Timestamp layout appended to commit messages (`yyyy-MM-dd HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator placed between the original message and the timestamp
pub const STAMP_SEPARATOR: &str = " @";

/// Normalise raw `git log --pretty=%B` output
///
/// Line breaks (`\r\n`, `\r` or `\n`) become `\n`, then ASCII control
/// characters and spaces are trimmed from both ends. Other Unicode
/// whitespace such as U+3000 is part of the message and kept.
pub fn normalize_output(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_matches(is_trimmable)
        .to_string()
}

fn is_trimmable(c: char) -> bool {
    c <= ' '
}

/// Format an instant as `yyyy-MM-dd HH:mm:ss` in its own timezone
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build `<original> @<timestamp>`
///
/// `original` is used as given; callers pass the normalised message.
pub fn stamp(original: &str, timestamp: &str) -> String {
    format!("{original}{STAMP_SEPARATOR}{timestamp}")
}
