//! Tests for the Jalali date-time text parser.

use shamsi::parser::{parse, parse_with_options};
use shamsi::{
    parse_jalali_datetime, parse_jalali_datetime_default, ConvertError, ErrorKind, Field,
    LocalDateTime, ParseError, ParseOptions,
};

#[test]
fn test_parse_date_and_time() {
    let dt = parse("1403/01/01 14:30").unwrap();
    let expected = LocalDateTime::from_jalali(1403, 1, 1, 14, 30).unwrap();
    assert_eq!(dt, expected);
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 14, 30));
}

#[test]
fn test_parse_date_only_is_midnight() {
    let dt = parse("1403/01/01").unwrap();
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 0, 0));
}

#[test]
fn test_parse_persian_digits() {
    assert_eq!(parse("۱۴۰۳/۰۱/۰۱").unwrap(), parse("1403/01/01").unwrap());
}

#[test]
fn test_parse_arabic_indic_digits() {
    assert_eq!(
        parse("١٤٠٣/٠١/٠١ ١٤:٣٠").unwrap(),
        parse("1403/01/01 14:30").unwrap()
    );
}

#[test]
fn test_parse_dash_separators() {
    assert_eq!(parse("1403-01-01").unwrap(), parse("1403/01/01").unwrap());
    // Separators may be mixed
    assert_eq!(parse("1403-01/01").unwrap(), parse("1403/01/01").unwrap());
}

#[test]
fn test_parse_single_digit_fields() {
    let dt = parse("1403/1/1 9:5").unwrap();
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 9, 5));
}

#[test]
fn test_parse_hour_only() {
    let dt = parse("1403/01/01 14").unwrap();
    assert_eq!((dt.hour(), dt.minute()), (14, 0));
}

#[test]
fn test_parse_surrounding_whitespace() {
    let dt = parse("  1403/01/01   08:15 \t").unwrap();
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 8, 15));
}

#[test]
fn test_parse_arabic_comma_as_space() {
    let dt = parse("1403/01/01،14:30").unwrap();
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 14, 30));
    let dt = parse("1403/01/01٫ 14:30").unwrap();
    assert_eq!(dt.as_tuple(), (2024, 3, 20, 14, 30));
}

#[test]
fn test_parse_three_digit_year() {
    let dt = parse("999/01/01").unwrap();
    assert_eq!(dt.date().as_tuple(), (1620, 3, 20));
}

#[test]
fn test_parse_leap_day() {
    assert_eq!(parse("1399/12/30").unwrap().date().as_tuple(), (2021, 3, 20));
    let err = parse("1400/12/30").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CalendarInvalid);
}

#[test]
fn test_reject_month_13() {
    assert_eq!(
        parse("1403/13/01"),
        Err(ParseError::Invalid(ConvertError::FieldOutOfRange {
            field: Field::Month,
            value: 13
        }))
    );
}

#[test]
fn test_reject_day_32() {
    let err = parse("1403/01/32").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldOutOfRange);
}

#[test]
fn test_reject_hour_24() {
    assert_eq!(
        parse("1403/01/01 24:00"),
        Err(ParseError::Invalid(ConvertError::FieldOutOfRange {
            field: Field::Hour,
            value: 24
        }))
    );
}

#[test]
fn test_reject_minute_60() {
    assert_eq!(
        parse("1403/01/01 12:60"),
        Err(ParseError::Invalid(ConvertError::FieldOutOfRange {
            field: Field::Minute,
            value: 60
        }))
    );
}

#[test]
fn test_time_checked_before_calendar() {
    // The date is also invalid, but the hour is reported first
    let err = parse("1400/12/30 25:00").unwrap_err();
    assert_eq!(
        err,
        ParseError::Invalid(ConvertError::FieldOutOfRange {
            field: Field::Hour,
            value: 25
        })
    );
}

#[test]
fn test_reject_incomplete() {
    assert_eq!(parse("1403/1"), Err(ParseError::UnexpectedEnd { position: 6 }));
    assert_eq!(parse("1403").unwrap_err().kind(), ErrorKind::MalformedInput);
    assert_eq!(parse("1403/01/").unwrap_err().kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_reject_empty() {
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(parse("   "), Err(ParseError::Empty));
}

#[test]
fn test_reject_bad_separator() {
    assert_eq!(
        parse("1403.01.01"),
        Err(ParseError::UnexpectedChar {
            position: 4,
            found: '.'
        })
    );
    assert_eq!(
        parse("1403 01 01"),
        Err(ParseError::UnexpectedToken {
            position: 4,
            found: ' '
        })
    );
}

#[test]
fn test_reject_digit_counts() {
    assert_eq!(
        parse("03/01/01"),
        Err(ParseError::DigitCount {
            field: Field::Year,
            position: 0,
            min: 3,
            max: 4,
            found: 2
        })
    );
    assert_eq!(parse("14030/01/01").unwrap_err().kind(), ErrorKind::MalformedInput);
    assert_eq!(parse("1403/001/01").unwrap_err().kind(), ErrorKind::MalformedInput);
    assert_eq!(parse("1403/01/01 014:00").unwrap_err().kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_reject_trailing_garbage() {
    assert!(parse("1403/01/01 14:30:00").is_err());
    assert!(parse("1403/01/01 14:30 pm").is_err());
    assert!(parse("1403/01/01x").is_err());
}

#[test]
fn test_reject_year_beyond_table() {
    let err = parse("3178/01/01").unwrap_err();
    assert_eq!(
        err,
        ParseError::Invalid(ConvertError::FieldOutOfRange {
            field: Field::Year,
            value: 3178
        })
    );
}

#[test]
fn test_digits_not_normalized_when_disabled() {
    let opts = ParseOptions {
        normalize_digits: false,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options("۱۴۰۳/۰۱/۰۱", &opts),
        Err(ParseError::UnexpectedChar {
            position: 0,
            found: '۱'
        })
    );
    assert!(parse_with_options("1403/01/01", &opts).is_ok());
}

#[test]
fn test_date_only_options() {
    let opts = ParseOptions::date_only();
    assert!(parse_with_options("1403/01/01", &opts).is_ok());
    assert!(parse_with_options("1403/01/01 ", &opts).is_ok());
    assert_eq!(
        parse_with_options("1403/01/01 14:30", &opts)
            .unwrap_err()
            .kind(),
        ErrorKind::MalformedInput
    );
}

#[test]
fn test_crate_root_convenience() {
    let opts = ParseOptions::default();
    assert_eq!(
        parse_jalali_datetime("1403/01/01 14:30", &opts).unwrap(),
        parse_jalali_datetime_default("1403/01/01 14:30").unwrap()
    );
}

#[test]
fn test_failure_is_recoverable_as_option() {
    let inputs = ["", "1403/1", "1403/13/01", "1403/01/32", "1403/01/01 24:00", "abc"];
    for input in inputs {
        assert!(parse(input).ok().is_none(), "{:?} should not parse", input);
    }
}

#[test]
fn test_error_positions_index_original_text() {
    let input = "۱۴۰۳/۰۱/۰۱x";
    let err = parse(input).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            position: 18,
            found: 'x'
        }
    );
    let ParseError::UnexpectedChar { position, found } = err else {
        unreachable!()
    };
    assert!(input[position..].starts_with(found));
}

#[test]
fn test_digit_count_position_with_persian_digits() {
    let input = "۱۴۰۳/۰۰۱/۰۱";
    match parse(input).unwrap_err() {
        ParseError::DigitCount {
            field,
            position,
            found,
            ..
        } => {
            assert_eq!((field, position, found), (Field::Month, 9, 3));
            assert!(input[position..].starts_with('۰'));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unexpected_token_position_with_persian_digits() {
    let input = "۱۴۰۳ /۰۱/۰۱";
    match parse(input).unwrap_err() {
        ParseError::UnexpectedToken { position, found } => {
            assert_eq!((position, found), (8, ' '));
            assert!(input[position..].starts_with(found));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_leading_byte_order_mark_ignored() {
    assert_eq!(parse("\u{FEFF}1403/01/01").unwrap(), parse("1403/01/01").unwrap());
    assert_eq!(
        parse("1403/01/01\u{FEFF}14:30").unwrap().as_tuple(),
        (2024, 3, 20, 14, 30)
    );
}
