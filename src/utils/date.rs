use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Expands a period string (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) into the
/// first and last calendar day it covers.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        let days = all_days_of_month(dm.year(), dm.month());
        return Ok((*days.first().unwrap(), *days.last().unwrap()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        let days = all_days_of_year(year);
        return Ok((*days.first().unwrap(), *days.last().unwrap()));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

/// Bounds for an explicit from/to pair of period strings.
pub fn range_bounds(start: &str, end: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (s, _) = period_bounds(start)?;
    let (_, e) = period_bounds(end)?;

    if s > e {
        return Err(AppError::InvalidRange(format!(
            "Range start {} is after end {}",
            s, e
        )));
    }

    Ok((s, e))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}
