use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{Error, Result};

/// A half-open `[start, end)` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    /// First day after the window.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window covering `start..=last` (inclusive on both calendar days).
    pub fn inclusive(start: NaiveDate, last: NaiveDate) -> Self {
        DateWindow {
            start,
            end: next_day(last),
        }
    }

    /// Window covering the calendar month that contains `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = month_start(date);
        DateWindow {
            start,
            end: start + Months::new(1),
        }
    }

    /// Window covering a single calendar day.
    pub fn day(date: NaiveDate) -> Self {
        DateWindow::inclusive(date, date)
    }

    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        moment >= self.start_datetime() && moment < self.end_datetime()
    }
}

/// Today's date in the server's local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// The `count` most recent calendar months ending with the month of `today`,
/// oldest first.
pub fn trailing_months(today: NaiveDate, count: u32) -> Vec<DateWindow> {
    let current = month_start(today);
    (0..count)
        .rev()
        .map(|back| DateWindow::month_of(current - Months::new(back)))
        .collect()
}

/// The `count` most recent days ending with `today`, oldest first.
pub fn trailing_days(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    if count == 0 {
        return Vec::new();
    }
    let first = today - chrono::Duration::days(i64::from(count) - 1);
    get_days_between(first, today)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Short month label used by the monthly summary chart ("Jan").
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Short day label used by the spending trend chart ("May 3").
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Parses a client supplied date or timestamp into a naive local datetime.
///
/// Accepts RFC 3339 timestamps (converted to local time), naive ISO
/// timestamps and plain `YYYY-MM-DD` dates (midnight).
pub fn parse_datetime_input(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("Date cannot be empty"));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| Error::invalid_input(format!("Invalid date: {trimmed}")))?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Parses a client supplied value into a calendar date, dropping any time part.
pub fn parse_date_input(raw: &str) -> Result<NaiveDate> {
    parse_datetime_input(raw).map(|dt| dt.date())
}
