use crate::domain::model::{Gender, PersonalNumber};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const SWEDISH_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "mars",
    "april",
    "maj",
    "juni",
    "juli",
    "augusti",
    "september",
    "oktober",
    "november",
    "december",
];

/// What a caller shows for an accepted number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDetails {
    pub personal_number: String,
    pub birth_date: String,
    pub age: i32,
    pub gender: Gender,
}

impl PersonDetails {
    pub fn from_record(record: &PersonalNumber, today: NaiveDate) -> Self {
        Self {
            personal_number: format_as_typed(&record.normalized),
            birth_date: format_birth_date(record.birth_date),
            age: age_on(record.birth_date, today),
            gender: record.gender,
        }
    }
}

/// Completed years on `today`. Birth dates after `today` give zero or less.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Long Swedish date, e.g. `18 december 1981`.
pub fn format_birth_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        SWEDISH_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Reformats partial input the way a text field would while typing:
/// digits only, with a `-` before the last four once the date part is complete.
pub fn format_as_typed(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 8 {
        return digits;
    }

    let split = if digits.len() <= 10 { 6 } else { 8 };
    format!("{}-{}", &digits[..split], &digits[split..])
}
