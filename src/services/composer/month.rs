use chrono::{Datelike, NaiveDate};

use crate::models::appointment::Appointment;
use crate::utils::date::{month_grid_dates, touches_day};

pub const MAX_TYPE_BADGES: usize = 3;
pub const MAX_SUMMARIES: usize = 2;
const UNTYPED_LABEL: &str = "Other";

/// Count of one appointment type on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBadge {
    pub appointment_type: String,
    pub count: usize,
    /// Display tag of the first appointment of this type.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub appointment_count: usize,
    pub badges: Vec<TypeBadge>,
    /// Distinct types beyond the visible badges.
    pub hidden_types: usize,
    /// `facility (provider)` for the first few appointments.
    pub summaries: Vec<String>,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<MonthCell>,
}

/// Aggregate the 42-day grid around the month of `date`. Appointments are
/// counted per type rather than laid out.
pub fn compose_month(appointments: &[Appointment], date: NaiveDate, today: NaiveDate) -> MonthGrid {
    let cells = month_grid_dates(date)
        .into_iter()
        .map(|cell_date| compose_cell(appointments, cell_date, date, today))
        .collect();

    MonthGrid {
        year: date.year(),
        month: date.month(),
        cells,
    }
}

fn compose_cell(
    appointments: &[Appointment],
    date: NaiveDate,
    shown: NaiveDate,
    today: NaiveDate,
) -> MonthCell {
    let on_day: Vec<&Appointment> = appointments
        .iter()
        .filter(|apt| touches_day(apt.start, apt.end.max(apt.start), date))
        .collect();

    let mut badges: Vec<TypeBadge> = Vec::new();
    for apt in &on_day {
        let key = if apt.appointment_type.is_empty() {
            UNTYPED_LABEL
        } else {
            apt.appointment_type.as_str()
        };
        match badges.iter_mut().find(|b| b.appointment_type == key) {
            Some(badge) => badge.count += 1,
            None => badges.push(TypeBadge {
                appointment_type: key.to_string(),
                count: 1,
                color: apt.color.clone(),
            }),
        }
    }

    let hidden_types = badges.len().saturating_sub(MAX_TYPE_BADGES);
    badges.truncate(MAX_TYPE_BADGES);

    MonthCell {
        date,
        day_number: date.day(),
        is_current_month: date.year() == shown.year() && date.month() == shown.month(),
        is_today: date == today,
        appointment_count: on_day.len(),
        badges,
        hidden_types,
        summaries: on_day
            .iter()
            .take(MAX_SUMMARIES)
            .map(|apt| format!("{} ({})", apt.facility, apt.provider))
            .collect(),
        has_more: on_day.len() > MAX_SUMMARIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn apt(
        id: &str,
        kind: &str,
        color: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Appointment {
        Appointment::builder()
            .id(id)
            .title(id)
            .provider(format!("Provider {}", id))
            .facility("Kappu Hospital")
            .appointment_type(kind)
            .color(color)
            .start(start)
            .end(end)
            .build_unchecked()
    }

    fn cell_for(grid: &MonthGrid, day: u32) -> &MonthCell {
        let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        grid.cells.iter().find(|c| c.date == date).unwrap()
    }

    #[test]
    fn test_grid_flags() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 23).unwrap();
        let grid = compose_month(&[], today, today);

        assert_eq!((grid.year, grid.month), (2025, 6));
        assert_eq!(grid.cells.len(), 42);
        assert!(!grid.cells[0].is_current_month);
        assert_eq!(grid.cells[0].day_number, 26);
        assert!(cell_for(&grid, 23).is_today);
        assert_eq!(grid.cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_badges_count_by_type_in_first_seen_order() {
        let appointments = vec![
            apt("1", "Atish", "#111111", at(24, 8), at(24, 9)),
            apt("2", "", "#222222", at(24, 9), at(24, 10)),
            apt("3", "Atish", "#333333", at(24, 10), at(24, 11)),
            apt("4", "Paras", "#444444", at(24, 11), at(24, 12)),
            apt("5", "Kappu", "#555555", at(24, 12), at(24, 13)),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let grid = compose_month(&appointments, date, date);
        let cell = cell_for(&grid, 24);

        assert_eq!(
            cell.badges,
            vec![
                TypeBadge {
                    appointment_type: "Atish".into(),
                    count: 2,
                    color: "#111111".into(),
                },
                TypeBadge {
                    appointment_type: "Other".into(),
                    count: 1,
                    color: "#222222".into(),
                },
                TypeBadge {
                    appointment_type: "Paras".into(),
                    count: 1,
                    color: "#444444".into(),
                },
            ]
        );
        assert_eq!(cell.hidden_types, 1);
        assert_eq!(
            cell.summaries,
            vec!["Kappu Hospital (Provider 1)", "Kappu Hospital (Provider 2)"]
        );
        assert!(cell.has_more);
        assert_eq!(cell.appointment_count, 5);
    }

    #[test]
    fn test_multi_day_counts_on_each_day() {
        let appointments = vec![apt("1", "Atish", "#111111", at(24, 14), at(26, 10))];
        let date = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        let grid = compose_month(&appointments, date, date);

        for day in 24..=26 {
            assert_eq!(cell_for(&grid, day).appointment_count, 1);
        }
        assert_eq!(cell_for(&grid, 27).appointment_count, 0);
        assert!(!cell_for(&grid, 24).has_more);
    }
}
