//! Calendar-date helpers: parsing, day/month arithmetic and period expansion.
//!
//! All functions work on `NaiveDate` (proleptic Gregorian, no time zone).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Current local date. Only the CLI boundary calls this.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Years whose `%Y-%m-%d` text sorts correctly as stored.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// True when `d` has a four-digit year, so its text form keeps date order.
pub fn is_storable(d: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&d.year())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(|d| is_storable(*d))
}

/// Parse `YYYY-MM-DD`, failing with `InvalidDate`.
pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// `start + n` days with ordinary calendar carry.
pub fn add_days(start: NaiveDate, n: u64) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(n))
}

/// Advance `start` by `n` months using day-overflow semantics.
///
/// The month (and year) is advanced first, then the starting day-of-month is
/// counted forward from the 1st of the target month. A day that does not
/// exist in the target month spills into the following one:
/// 2024-01-31 + 1 month = 2024-03-02, 2023-01-31 + 1 month = 2023-03-03.
pub fn add_months_overflowing(start: NaiveDate, n: u32) -> Option<NaiveDate> {
    let month0 = start.month0() as i64 + n as i64;
    let year = start.year() as i64 + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;

    let year = i32::try_from(year).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(start.day0() as u64))
}

/// First and last day of the month containing `d`.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let last = days_in_month(year, month)?;
    Some((
        NaiveDate::from_ymd_opt(year, month, 1)?,
        NaiveDate::from_ymd_opt(year, month, last)?,
    ))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match month_bounds(year, month) {
        Some((first, last)) => first.iter_days().take_while(|d| *d <= last).collect(),
        None => Vec::new(),
    }
}

fn bad_period(msg: &str, raw: &str) -> AppError {
    AppError::InvalidDate(format!("{msg}: {raw}"))
}

fn parse_year(s: &str, raw: &str) -> AppResult<i32> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_period("invalid year", raw));
    }
    s.parse().map_err(|_| bad_period("invalid year", raw))
}

/// First and last day covered by a single period token.
///
/// Accepts `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn token_bounds(raw: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match raw.len() {
        4 => {
            let y = parse_year(raw, raw)?;
            let (first, _) = month_bounds(y, 1).ok_or_else(|| bad_period("invalid year", raw))?;
            let (_, last) = month_bounds(y, 12).ok_or_else(|| bad_period("invalid year", raw))?;
            Ok((first, last))
        }
        7 => {
            let (ys, ms) = raw
                .split_once('-')
                .ok_or_else(|| bad_period("invalid month", raw))?;
            let y = parse_year(ys, raw)?;
            let m: u32 = ms.parse().map_err(|_| bad_period("invalid month", raw))?;
            month_bounds(y, m).ok_or_else(|| bad_period("invalid month", raw))
        }
        10 => {
            let d = parse_date(raw).ok_or_else(|| bad_period("invalid date", raw))?;
            Ok((d, d))
        }
        _ => Err(bad_period("unsupported period format", raw)),
    }
}

/// Parse a period expression into its first and last day.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// Both sides of an interval must have the same shape.
pub fn parse_period(raw: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let raw = raw.trim();
    let Some((start_raw, end_raw)) = raw.split_once(':') else {
        return token_bounds(raw);
    };

    let start = start_raw.trim();
    let end = end_raw.trim();
    if start.len() != end.len() {
        return Err(bad_period("start and end must have the same format", raw));
    }

    let (first, _) = token_bounds(start)?;
    let (_, last) = token_bounds(end)?;
    if first > last {
        return Err(bad_period("range start is after range end", raw));
    }
    Ok((first, last))
}

/// Resolve the `--period` argument shared by list-like commands.
///
/// `None` → the current month, `"all"` → `None` bounds (everything).
pub fn resolve_period(
    period: Option<&str>,
    today: NaiveDate,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => {
            let (first, last) = month_bounds(today.year(), today.month())
                .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;
            Ok(Some((first, last)))
        }
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_period(p).map(Some),
    }
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let d = parse_date(&format!("{}-01", s.trim()))
        .ok_or_else(|| AppError::InvalidDate(format!("Invalid month: {}", s)))?;
    Ok((d.year(), d.month()))
}

/// Weeks of a month as rows of 7 cells; `None` pads days outside the month.
pub fn month_grid(year: i32, month: u32, week_start: Weekday) -> Vec<[Option<NaiveDate>; 7]> {
    let days = all_days_of_month(year, month);
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let offset = (7 + first.weekday().num_days_from_monday() as usize
        - week_start.num_days_from_monday() as usize)
        % 7;

    let mut rows = Vec::new();
    let mut row: [Option<NaiveDate>; 7] = [None; 7];
    let mut col = offset;

    for d in days {
        row[col] = Some(d);
        col += 1;
        if col == 7 {
            rows.push(row);
            row = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        rows.push(row);
    }

    rows
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn weekday_short(d: Weekday) -> &'static str {
    match d {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
