// Date utility functions
// Day bounds, Monday-start weeks, month grids and view-sized navigation steps

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::ui::ViewType;

/// Number of cells in a month grid (six weeks).
pub const MONTH_GRID_DAYS: usize = 42;

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last representable instant of the day on the millisecond grid.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Inclusive overlap with a day: `start <= dayEnd && end >= dayStart`.
pub fn touches_day(start: NaiveDateTime, end: NaiveDateTime, date: NaiveDate) -> bool {
    start <= end_of_day(date) && end >= start_of_day(date)
}

/// Offset of `date` from the Monday that starts its week (Sunday is 6).
pub fn monday_offset(date: NaiveDate) -> i64 {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    if weekday == 0 {
        6
    } else {
        weekday - 1
    }
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(monday_offset(date))
}

/// The seven days of the Monday-start week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start(date);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// The 42 days shown for the month of `date`, starting on the Monday on or
/// before the first of the month.
pub fn month_grid_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    week_start(first).iter_days().take(MONTH_GRID_DAYS).collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `hour + minute / 60`; seconds are ignored.
pub fn fractional_hour(instant: NaiveDateTime) -> f64 {
    instant.hour() as f64 + instant.minute() as f64 / 60.0
}

/// 24-hour `HH:MM`.
pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// Week column header, e.g. `Mon, 06/23/2025`.
pub fn format_week_day(date: NaiveDate) -> String {
    date.format("%a, %m/%d/%Y").to_string()
}

/// Day view title, e.g. `Monday, June 23, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{}, {} {}, {}", date.format("%A"), date.format("%B"), date.day(), date.year())
}

/// Label for an hour marker; the closing `24` marker has none.
pub fn hour_marker_label(hour: u32) -> Option<String> {
    (hour < 24).then(|| format!("{:02}:00", hour))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

/// Move the displayed date by one view-sized step.
pub fn step_date(current: NaiveDate, view: ViewType, direction: NavigationDirection) -> NaiveDate {
    let sign = match direction {
        NavigationDirection::Previous => -1,
        NavigationDirection::Next => 1,
    };
    match view {
        ViewType::Day => current + Duration::days(sign as i64),
        ViewType::Week => current + Duration::weeks(sign as i64),
        ViewType::Month => shift_month_preserving_day(current, sign),
    }
}

pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day()).unwrap_or(current)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let max_day = last_day_of_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, desired_day.min(max_day))
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_of_next.pred_opt().map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_of_day_is_last_millisecond() {
        let end = end_of_day(date(2025, 6, 24));
        assert_eq!(end.time(), NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
    }

    #[test]
    fn test_monday_offset_sunday_maps_to_six() {
        // June 29, 2025 is a Sunday
        assert_eq!(monday_offset(date(2025, 6, 29)), 6);
        assert_eq!(monday_offset(date(2025, 6, 23)), 0);
        assert_eq!(monday_offset(date(2025, 6, 25)), 2);
    }

    #[test]
    fn test_week_start_is_monday() {
        for day in 20..=30 {
            let start = week_start(date(2025, 6, day));
            assert_eq!(start.weekday(), chrono::Weekday::Mon);
            assert!(date(2025, 6, day) - start < Duration::days(7));
        }
        assert_eq!(week_start(date(2025, 6, 29)), date(2025, 6, 23));
        assert_eq!(week_start(date(2025, 6, 30)), date(2025, 6, 30));
    }

    #[test]
    fn test_week_dates_from_sunday() {
        let week = week_dates(date(2025, 6, 29));
        assert_eq!(week[0], date(2025, 6, 23));
        assert_eq!(week[6], date(2025, 6, 29));
    }

    #[test]
    fn test_month_grid_backfills_to_monday() {
        // June 1, 2025 is a Sunday
        let grid = month_grid_dates(date(2025, 6, 15));
        assert_eq!(grid.len(), MONTH_GRID_DAYS);
        assert_eq!(grid[0], date(2025, 5, 26));
        assert_eq!(grid[6], date(2025, 6, 1));
        assert_eq!(grid[41], date(2025, 7, 6));
    }

    #[test]
    fn test_touches_day_is_inclusive() {
        let d = date(2025, 6, 25);
        let midnight = start_of_day(d);
        let before = midnight - Duration::hours(3);
        assert!(touches_day(before, midnight, d));
        assert!(!touches_day(before, midnight - Duration::milliseconds(1), d));
    }

    #[test]
    fn test_labels() {
        assert_eq!(format_week_day(date(2025, 6, 23)), "Mon, 06/23/2025");
        assert_eq!(format_long_date(date(2025, 6, 3)), "Tuesday, June 3, 2025");
        assert_eq!(hour_marker_label(6).as_deref(), Some("06:00"));
        assert_eq!(hour_marker_label(24), None);
    }

    #[test]
    fn test_step_date_per_view() {
        let d = date(2025, 6, 23);
        assert_eq!(step_date(d, ViewType::Day, NavigationDirection::Next), date(2025, 6, 24));
        assert_eq!(step_date(d, ViewType::Week, NavigationDirection::Previous), date(2025, 6, 16));
        assert_eq!(step_date(d, ViewType::Month, NavigationDirection::Next), date(2025, 7, 23));
    }

    #[test]
    fn test_month_step_clamps_day() {
        assert_eq!(shift_month_preserving_day(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month_preserving_day(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month_preserving_day(date(2025, 12, 15), 1), date(2026, 1, 15));
    }
}
