//! Portfolio view analytics.
//!
//! Views are archived per UTC day. Days without a row had no views, so the
//! series handed to clients is zero-filled to a fixed window.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const DEFAULT_WINDOW_DAYS: i64 = 30;
pub const MAX_WINDOW_DAYS: i64 = 365;

/// One point of the daily view series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyViews {
    pub day: NaiveDate,
    pub views: i64,
}

/// Clamp a requested window to `[1, MAX_WINDOW_DAYS]`.
pub fn clamp_window(days: Option<i64>) -> i64 {
    days.unwrap_or(DEFAULT_WINDOW_DAYS).clamp(1, MAX_WINDOW_DAYS)
}

/// First day included in a window of `days` ending on `today`.
pub fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days - 1)
}

/// Build a gap-free, oldest-first series of `days` entries ending on `today`.
///
/// Rows outside the window are ignored.
pub fn build_daily_series(
    today: NaiveDate,
    days: i64,
    rows: &[(NaiveDate, i64)],
) -> Vec<DailyViews> {
    let by_day: HashMap<NaiveDate, i64> = rows.iter().copied().collect();
    let start = window_start(today, days);

    (0..days)
        .map(|offset| {
            let day = start + Duration::days(offset);
            DailyViews {
                day,
                views: by_day.get(&day).copied().unwrap_or(0),
            }
        })
        .collect()
}
