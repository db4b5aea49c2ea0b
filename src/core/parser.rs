use crate::core::{checksum, date, fields, normalize};
use crate::domain::model::{Gender, PersonalNumber};
use crate::domain::ports::Clock;
use crate::utils::error::ParseError;
use chrono::NaiveDate;

/// Parses and validates a personal number as of `today`.
///
/// Stages run in order and the first failure is returned:
/// digit count, calendar date, check digit. `today` drives the century of
/// the 10-digit form and nothing else, so the result is a pure function of
/// `(raw, today)`.
pub fn parse_and_validate(raw: &str, today: NaiveDate) -> Result<PersonalNumber, ParseError> {
    let result = run_stages(raw, today);
    if let Err(e) = &result {
        tracing::debug!(kind = e.kind(), "Rejected personal number: {}", e);
    }
    result
}

pub fn parse_with_clock<K: Clock + ?Sized>(raw: &str, clock: &K) -> Result<PersonalNumber, ParseError> {
    parse_and_validate(raw, clock.today())
}

fn run_stages(raw: &str, today: NaiveDate) -> Result<PersonalNumber, ParseError> {
    let normalized = normalize::normalize(raw)?;
    let fields = fields::extract(&normalized, raw, today)?;

    let birth_date = date::validate_date(fields.year, fields.month, fields.day)?;

    let expected = checksum::check_digit(&fields.checksum_digits);
    if expected != fields.check_digit {
        return Err(ParseError::Checksum {
            expected,
            found: fields.check_digit,
        });
    }

    let gender_digit = fields
        .serial
        .chars()
        .nth(2)
        .and_then(|c| c.to_digit(10))
        .ok_or(ParseError::Format {
            digits: normalized.len(),
        })?;

    Ok(PersonalNumber {
        birth_date,
        gender: Gender::from_serial_digit(gender_digit),
        normalized,
        form: fields.form,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NumberForm;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct PinnedClock(NaiveDate);

    impl Clock for PinnedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    #[test]
    fn short_form_example_is_valid() {
        let parsed = parse_and_validate("811218-9876", today()).unwrap();
        assert_eq!(parsed.birth_date, ymd(1981, 12, 18));
        assert_eq!(parsed.gender, Gender::Male);
        assert_eq!(parsed.normalized, "8112189876");
        assert_eq!(parsed.form, NumberForm::Short);
    }

    #[test]
    fn long_form_matches_short_form() {
        let long = parse_and_validate("19811218-9876", today()).unwrap();
        assert_eq!(long.birth_date, ymd(1981, 12, 18));
        assert_eq!(long.gender, Gender::Male);
        assert_eq!(long.form, NumberForm::Long);
    }

    #[test]
    fn even_serial_digit_is_female() {
        let parsed = parse_and_validate("850709-9805", today()).unwrap();
        assert_eq!(parsed.birth_date, ymd(1985, 7, 9));
        assert_eq!(parsed.gender, Gender::Female);
    }

    #[test]
    fn gender_follows_third_serial_digit() {
        // serial 980
        let female = parse_and_validate("19850709-9805", today()).unwrap();
        assert_eq!(female.gender, Gender::Female);

        // serial 121
        let male = parse_and_validate("20121212-1212", today()).unwrap();
        assert_eq!(male.gender, Gender::Male);
    }

    #[test]
    fn mutated_check_digit_fails_checksum() {
        assert_eq!(
            parse_and_validate("811218-9875", today()),
            Err(ParseError::Checksum {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn date_is_checked_before_checksum() {
        assert!(matches!(
            parse_and_validate("811318-9876", today()),
            Err(ParseError::InvalidDate { month: 13, .. })
        ));
        assert!(matches!(
            parse_and_validate("20230229-1234", today()),
            Err(ParseError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn wrong_digit_count_is_format_error() {
        assert_eq!(
            parse_and_validate("12345", today()),
            Err(ParseError::Format { digits: 5 })
        );
        assert_eq!(
            parse_and_validate("abc-def", today()),
            Err(ParseError::Format { digits: 0 })
        );
    }

    #[test]
    fn plus_marker_moves_century() {
        let parsed = parse_and_validate("121212+1212", today()).unwrap();
        assert_eq!(parsed.birth_date, ymd(1912, 12, 12));

        let without = parse_and_validate("121212-1212", today()).unwrap();
        assert_eq!(without.birth_date, ymd(2012, 12, 12));
    }

    #[test]
    fn clock_supplies_today() {
        let clock = PinnedClock(ymd(2009, 1, 1));
        // 12 > 9 + 2, so the previous century
        let parsed = parse_with_clock("121212-1212", &clock).unwrap();
        assert_eq!(parsed.birth_date, ymd(1912, 12, 12));
    }

    #[test]
    fn same_input_same_result() {
        let first = parse_and_validate("811218-9876", today());
        let second = parse_and_validate("811218-9876", today());
        assert_eq!(first, second);
    }
}
