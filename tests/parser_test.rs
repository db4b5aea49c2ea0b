use chrono::{Datelike, NaiveDate};
use personnummer_check::core::checksum::check_digit;
use personnummer_check::{parse_and_validate, Gender, NumberForm, ParseError};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn digits(s: &str) -> Vec<u32> {
    s.chars().map(|c| c.to_digit(10).unwrap()).collect()
}

/// Builds `YYYYMMDD-NNNC` with a correct check digit.
fn long_number(year: i32, month: u32, day: u32, serial: u32) -> String {
    let body = format!("{:02}{:02}{:02}{:03}", year % 100, month, day, serial);
    let d = digits(&body);
    let nine: [u32; 9] = d.try_into().unwrap();
    format!(
        "{:04}{:02}{:02}-{:03}{}",
        year,
        month,
        day,
        serial,
        check_digit(&nine)
    )
}

fn short_number(yy: u32, month: u32, day: u32, serial: u32, separator: char) -> String {
    let body = format!("{:02}{:02}{:02}{:03}", yy, month, day, serial);
    let nine: [u32; 9] = digits(&body).try_into().unwrap();
    format!(
        "{:02}{:02}{:02}{}{:03}{}",
        yy,
        month,
        day,
        separator,
        serial,
        check_digit(&nine)
    )
}

#[test]
fn published_example_is_valid() {
    let parsed = parse_and_validate("811218-9876", today()).unwrap();
    assert_eq!(parsed.birth_date, NaiveDate::from_ymd_opt(1981, 12, 18).unwrap());
    assert_eq!(parsed.gender, Gender::Male);
    assert_eq!(parsed.form, NumberForm::Short);
}

#[test]
fn published_example_with_wrong_check_digit() {
    let err = parse_and_validate("811218-9877", today()).unwrap_err();
    assert!(matches!(err, ParseError::Checksum { expected: 6, found: 7 }));
    assert_eq!(err.to_string(), "Invalid personal number (checksum failed)");
}

#[test]
fn known_invalid_dates() {
    for raw in ["19811318-9876", "19811232-9876", "20230229-1234", "19810230-1234"] {
        let err = parse_and_validate(raw, today()).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidDate { .. }),
            "{} gave {:?}",
            raw,
            err
        );
        assert_eq!(err.to_string(), "Invalid date in personal number");
    }
}

#[test]
fn leap_day_long_form() {
    let raw = long_number(2024, 2, 29, 123);
    let parsed = parse_and_validate(&raw, today()).unwrap();
    assert_eq!(parsed.birth_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn century_examples() {
    let eighty_five = short_number(85, 1, 1, 101, '-');
    assert_eq!(parse_and_validate(&eighty_five, today()).unwrap().birth_date.year(), 1985);

    let ten = short_number(10, 1, 1, 101, '-');
    assert_eq!(parse_and_validate(&ten, today()).unwrap().birth_date.year(), 2010);

    let ten_plus = short_number(10, 1, 1, 101, '+');
    assert_eq!(parse_and_validate(&ten_plus, today()).unwrap().birth_date.year(), 1910);
}

#[test]
fn noise_around_digits_is_ignored() {
    let parsed = parse_and_validate("  pnr 811218 - 9876 ", today()).unwrap();
    assert_eq!(parsed.normalized, "8112189876");
}

proptest! {
    #[test]
    fn valid_long_numbers_round_trip(
        year in 1900i32..=2099,
        month in 1u32..=12,
        day in 1u32..=31,
        serial in 0u32..1000,
    ) {
        prop_assume!(NaiveDate::from_ymd_opt(year, month, day).is_some());

        let raw = long_number(year, month, day, serial);
        let parsed = parse_and_validate(&raw, today()).unwrap();

        prop_assert_eq!(parsed.birth_date, NaiveDate::from_ymd_opt(year, month, day).unwrap());
        let expected = if serial % 2 == 0 { Gender::Female } else { Gender::Male };
        prop_assert_eq!(parsed.gender, expected);
        prop_assert_eq!(parsed.form, NumberForm::Long);
    }

    #[test]
    fn wrong_digit_count_is_format_error(
        body in "[0-9]{0,20}",
        noise in "[ a-z+-]{0,3}",
    ) {
        prop_assume!(body.len() != 10 && body.len() != 12);

        let raw = format!("{}{}", noise, body);
        prop_assert_eq!(
            parse_and_validate(&raw, today()),
            Err(ParseError::Format { digits: body.len() })
        );
    }

    #[test]
    fn impossible_month_is_invalid_date(
        year in 1900i32..=2099,
        month in 13u32..=99,
        day in 1u32..=28,
        tail in "[0-9]{4}",
    ) {
        let raw = format!("{:04}{:02}{:02}-{}", year, month, day, tail);
        let result = parse_and_validate(&raw, today());
        prop_assert!(
            matches!(result, Err(ParseError::InvalidDate { .. })),
            "unexpected {:?}",
            result
        );
    }

    #[test]
    fn mutated_check_digit_is_checksum_error(
        year in 1900i32..=2099,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 0u32..1000,
        shift in 1u32..10,
    ) {
        let valid = long_number(year, month, day, serial);
        let correct = valid.chars().last().unwrap().to_digit(10).unwrap();
        let wrong = (correct + shift) % 10;
        let raw = format!("{}{}", &valid[..valid.len() - 1], wrong);

        prop_assert_eq!(
            parse_and_validate(&raw, today()),
            Err(ParseError::Checksum { expected: correct, found: wrong })
        );
    }

    #[test]
    fn short_form_century_follows_tolerance(yy in 0u32..100, serial in 0u32..1000) {
        let raw = short_number(yy, 1, 1, serial, '-');
        let year = parse_and_validate(&raw, today()).unwrap().birth_date.year();

        let expected = if yy <= 26 { 2000 + yy as i32 } else { 1900 + yy as i32 };
        prop_assert_eq!(year, expected);
    }

    #[test]
    fn parsing_is_repeatable(raw in "[0-9+ -]{0,16}") {
        prop_assert_eq!(parse_and_validate(&raw, today()), parse_and_validate(&raw, today()));
    }
}
