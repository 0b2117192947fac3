//! Date picker endpoint.

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::{success, ApiResult, QueryParams};
use crate::calendar::{month_grid, CalendarMonth};
use crate::errors::AppError;
use crate::models::empty_string_as_none;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    /// `YYYY-MM`; defaults to the month of `minDate`, then today.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub selected: Option<NaiveDate>,
}

pub fn parse_month(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid month {:?}, expected YYYY-MM", raw)))
}

/// GET /api/calendar - Month grid for the search bar's date picker.
pub async fn get_calendar(QueryParams(query): QueryParams<CalendarQuery>) -> ApiResult<CalendarMonth> {
    let today = Local::now().date_naive();
    let anchor = match query.month.as_deref() {
        Some(raw) => parse_month(raw)?,
        None => query.min_date.unwrap_or(today),
    };

    success(month_grid(anchor, today, query.min_date, query.selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(matches!(parse_month("2025-13"), Err(AppError::BadRequest(_))));
        assert!(parse_month("March").is_err());
    }
}
