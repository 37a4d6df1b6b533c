// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for exercise date parsing and formatting.
//!
//! Exercise dates are stored and returned as human-readable strings like
//! `"Sun Jan 15 2023"` (weekday, month, zero-padded day, year). Log range
//! filters reconstruct calendar dates by parsing those stored strings.

use chrono::NaiveDate;

/// Storage format for exercise dates.
const STORED_FORMAT: &str = "%a %b %d %Y";

/// Format a calendar date as the stored date string.
pub fn format_date(date: NaiveDate) -> String {
    date.format(STORED_FORMAT).to_string()
}

/// Parse a stored date string back into a calendar date.
pub fn parse_stored(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, STORED_FORMAT).ok()
}

/// Parse a client-supplied date.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 date-times.
pub fn parse_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Current calendar date (UTC).
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
