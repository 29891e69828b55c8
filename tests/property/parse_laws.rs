//! Typed parser laws

use console_template::error::FailureKind;
use chrono::{NaiveDate, NaiveTime};
use console_template::resolve::{
    parse_bool, parse_date, parse_date_time, parse_decimal, parse_int, parse_list, parse_long,
    parse_time, DEFAULT_LIST_SEPARATORS,
};
use proptest::prelude::*;

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn time_of_day() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

fn is_integer_grammar(s: &str) -> bool {
    let t = s.trim();
    let digits = t.strip_prefix(['+', '-']).unwrap_or(t);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

proptest! {
    #[test]
    fn test_int_round_trips_through_display(n in any::<i32>()) {
        prop_assert_eq!(parse_int(Some(&n.to_string()), false).unwrap(), Some(n));
    }

    #[test]
    fn test_long_round_trips_through_display(n in any::<i64>()) {
        prop_assert_eq!(parse_long(Some(&n.to_string()), false).unwrap(), Some(n));
    }

    #[test]
    fn test_non_integer_text_is_invalid_format(s in "[a-zA-Z.,_ ]{0,3}[a-zA-Z.,_][a-zA-Z0-9.,_ ]{0,6}") {
        prop_assume!(!s.trim().is_empty());
        prop_assume!(!is_integer_grammar(&s));
        let err = parse_int(Some(&s), false).unwrap_err();
        prop_assert_eq!(err.kind(), FailureKind::InvalidFormat);
    }

    #[test]
    fn test_whitespace_never_propagates_when_ignored(s in "[ \t]{0,8}") {
        prop_assert_eq!(parse_int(Some(&s), true).unwrap(), None);
        prop_assert_eq!(parse_list(Some(&s), DEFAULT_LIST_SEPARATORS, true).unwrap(), None);
        prop_assert!(parse_bool(Some(&s), true));
        prop_assert!(!parse_bool(Some(&s), false));
    }

    #[test]
    fn test_list_entries_are_trimmed_and_non_empty(items in prop::collection::vec("[ a-z0-9]{0,6}", 1..6)) {
        let raw = items.join("|");
        let expected: Vec<String> = items
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        match parse_list(Some(&raw), DEFAULT_LIST_SEPARATORS, true).unwrap() {
            Some(parsed) => prop_assert_eq!(parsed, expected),
            None => prop_assert!(expected.is_empty() || raw.trim().is_empty()),
        }
    }

    #[test]
    fn test_decimal_round_trips_through_display(n in -1.0e12f64..1.0e12) {
        prop_assert_eq!(parse_decimal(Some(&n.to_string()), false).unwrap(), Some(n));
    }

    #[test]
    fn test_date_round_trips_through_rendering(date in calendar_date()) {
        for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
            let rendered = date.format(fmt).to_string();
            prop_assert_eq!(parse_date(Some(&rendered), false, true).unwrap(), Some(date));
        }
    }

    #[test]
    fn test_time_round_trips_through_rendering(time in time_of_day()) {
        for fmt in ["%H:%M:%S", "%I:%M:%S %p"] {
            let rendered = time.format(fmt).to_string();
            prop_assert_eq!(parse_time(Some(&rendered), false).unwrap(), time);
        }
    }

    #[test]
    fn test_date_time_round_trips_through_rendering(date in calendar_date(), time in time_of_day()) {
        let expected = date.and_time(time);
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"] {
            let rendered = expected.format(fmt).to_string();
            prop_assert_eq!(parse_date_time(Some(&rendered), false).unwrap(), expected);
        }
    }

    #[test]
    fn test_non_grammar_text_is_invalid_format_for_every_kind(s in "[a-zA-Z]{1,8}") {
        prop_assert_eq!(parse_decimal(Some(&s), false).unwrap_err().kind(), FailureKind::InvalidFormat);
        prop_assert_eq!(parse_date(Some(&s), false, true).unwrap_err().kind(), FailureKind::InvalidFormat);
        prop_assert_eq!(parse_time(Some(&s), false).unwrap_err().kind(), FailureKind::InvalidFormat);
        prop_assert_eq!(parse_date_time(Some(&s), false).unwrap_err().kind(), FailureKind::InvalidFormat);
    }

    #[test]
    fn test_non_grammar_text_never_propagates_when_ignored(s in "[a-zA-Z]{1,8}") {
        prop_assert_eq!(parse_decimal(Some(&s), true).unwrap(), None);
        prop_assert_eq!(parse_date(Some(&s), true, true).unwrap(), None);
        prop_assert!(parse_date(Some(&s), true, false).unwrap().is_some());
        prop_assert!(parse_time(Some(&s), true).is_ok());
        prop_assert!(parse_date_time(Some(&s), true).is_ok());
    }
}
