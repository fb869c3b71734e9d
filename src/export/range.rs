use crate::errors::{AppError, AppResult};
use crate::utils::date::{period_bounds, range_bounds};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".to_string(),
            ));
        }

        range_bounds(start, end)
    } else {
        period_bounds(r.trim())
    }
}
