use crate::core::normalize::LONG_LEN;
use crate::domain::model::{NumberForm, ParsedFields};
use crate::utils::error::ParseError;
use chrono::{Datelike, NaiveDate};

/// Years after the current two-digit year still read as this century.
pub const FORWARD_TOLERANCE: i32 = 2;

/// Splits normalized digits into date, serial and check digit.
///
/// `raw` is only consulted for the `+` century marker, `today` only for
/// century inference of the short form.
pub fn extract(normalized: &str, raw: &str, today: NaiveDate) -> Result<ParsedFields, ParseError> {
    let (form, year, rest) = if normalized.len() == LONG_LEN {
        let year = parse_segment(normalized, 0..4)? as i32;
        (NumberForm::Long, year, &normalized[4..])
    } else {
        let two_digit_year = parse_segment(normalized, 0..2)? as i32;
        let year = infer_year(two_digit_year, raw.contains('+'), today);
        (NumberForm::Short, year, &normalized[2..])
    };

    let month = parse_segment(rest, 0..2)?;
    let day = parse_segment(rest, 2..4)?;
    let serial = segment(rest, 4..7)?.to_string();
    let check_digit = parse_segment(rest, 7..8)?;

    // yy mm dd nnn, the two-digit year taken as written
    let start = normalized.len() - 10;
    let checksum_digits = digits_of(&normalized[start..start + 9])?;

    Ok(ParsedFields {
        form,
        year,
        month,
        day,
        serial,
        check_digit,
        checksum_digits,
    })
}

/// Resolves the century of a two-digit year relative to `today`.
pub fn infer_year(two_digit_year: i32, century_marker: bool, today: NaiveDate) -> i32 {
    let current_year = today.year();
    let current_century = current_year.div_euclid(100) * 100;
    let two_digit_current_year = current_year.rem_euclid(100);

    if century_marker || two_digit_year > two_digit_current_year + FORWARD_TOLERANCE {
        current_century - 100 + two_digit_year
    } else {
        current_century + two_digit_year
    }
}

fn segment(digits: &str, range: std::ops::Range<usize>) -> Result<&str, ParseError> {
    digits.get(range).ok_or(ParseError::Format {
        digits: digits.len(),
    })
}

fn parse_segment(digits: &str, range: std::ops::Range<usize>) -> Result<u32, ParseError> {
    segment(digits, range)?
        .parse::<u32>()
        .map_err(|_| ParseError::Format {
            digits: digits.len(),
        })
}

fn digits_of(s: &str) -> Result<[u32; 9], ParseError> {
    let mut out = [0u32; 9];
    let mut chars = s.chars();
    for slot in out.iter_mut() {
        *slot = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(ParseError::Format { digits: s.len() })?;
    }
    Ok(out)
}
