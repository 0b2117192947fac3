//! Month grids for the search bar's date picker.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub previous_month: NaiveDate,
    pub next_month: NaiveDate,
    pub weekdays: [&'static str; 7],
    pub days: Vec<CalendarDay>,
}

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `date`'s month.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// `Jan 5, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `January 2025`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Build the grid for the month containing `anchor`.
///
/// Leading cells from the previous month pad the first week so day 1 sits in
/// its weekday column (Sunday first); they are always disabled. Days before
/// `min_date`, or before `today` when no minimum is given, are disabled.
pub fn month_grid(
    anchor: NaiveDate,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
    selected: Option<NaiveDate>,
) -> CalendarMonth {
    let first = first_of_month(anchor);
    let next_month = shift_month(first, 1);
    let floor = min_date.unwrap_or(today);

    let leading = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);
    let mut days: Vec<CalendarDay> = grid_start
        .iter_days()
        .take_while(|d| *d < first)
        .map(|date| CalendarDay {
            date,
            is_current_month: false,
            is_today: false,
            is_selected: false,
            is_disabled: true,
        })
        .collect();

    days.extend(first.iter_days().take_while(|d| *d < next_month).map(|date| CalendarDay {
        date,
        is_current_month: true,
        is_today: date == today,
        is_selected: selected == Some(date),
        is_disabled: date < floor,
    }));

    CalendarMonth {
        label: month_label(first),
        year: first.year(),
        month: first.month(),
        previous_month: shift_month(first, -1),
        next_month,
        weekdays: WEEKDAYS,
        days,
    }
}
