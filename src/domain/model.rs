use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Even digit is female, odd is male.
    pub fn from_serial_digit(digit: u32) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberForm {
    /// `YYMMDD-NNNC`
    Short,
    /// `YYYYMMDD-NNNC`
    Long,
}

/// Positional fields of a normalized number, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    pub form: NumberForm,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub serial: String,
    pub check_digit: u32,
    /// `[yy, yy, mm, mm, dd, dd, s1, s2, s3]`
    pub checksum_digits: [u32; 9],
}

/// A personal number that passed date and checksum validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalNumber {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub normalized: String,
    pub form: NumberForm,
}

/// One raw value read from a batch input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// 1-based line (or CSV row) number.
    pub line: usize,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub line: usize,
    pub input: String,
    pub valid: bool,
    pub normalized: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub outcomes: Vec<ValidationOutcome>,
    pub csv_output: String,
    pub json_output: String,
}

impl ValidationReport {
    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes.len() - self.valid_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub output_path: String,
}
