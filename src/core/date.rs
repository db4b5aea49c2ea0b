use crate::utils::error::ParseError;
use chrono::{Datelike, NaiveDate};

/// Builds the date and reads it back; any difference in the triple is a rejection.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    let invalid = ParseError::InvalidDate { year, month, day };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid.clone())?;

    if date.year() == year && date.month() == month && date.day() == day {
        Ok(date)
    } else {
        Err(invalid)
    }
}
