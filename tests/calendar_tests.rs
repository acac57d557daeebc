use chrono::{DateTime, Duration, TimeZone, Utc};

use reltime::format::{CalendarDiff, Unit, parse_date};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

// --- CalendarDiff ---

#[test]
fn test_same_instant_is_zero() {
    let t = utc(2024, 6, 15, 12, 0, 0);
    let diff = CalendarDiff::between(t, t);
    assert!(diff.is_zero());
    assert!(!diff.invert);
}

#[test]
fn test_whole_months_ignore_month_length() {
    let diff = CalendarDiff::between(utc(2023, 1, 15, 10, 0, 0), utc(2024, 3, 15, 10, 0, 0));
    assert_eq!(diff.years, 1);
    assert_eq!(diff.months, 2);
    assert_eq!(diff.days, 0);
    assert_eq!(diff.hours, 0);
}

#[test]
fn test_month_end_clamps_in_leap_year() {
    let diff = CalendarDiff::between(utc(2024, 1, 31, 0, 0, 0), utc(2024, 3, 1, 0, 0, 0));
    assert_eq!(diff.months, 1);
    assert_eq!(diff.days, 1);
}

#[test]
fn test_month_end_to_shorter_month_is_days() {
    let diff = CalendarDiff::between(utc(2024, 3, 31, 0, 0, 0), utc(2024, 4, 30, 0, 0, 0));
    assert_eq!(diff.months, 0);
    assert_eq!(diff.days, 30);
}

#[test]
fn test_day_borrow_uses_earlier_month_length() {
    let diff = CalendarDiff::between(utc(2023, 2, 20, 0, 0, 0), utc(2023, 3, 5, 0, 0, 0));
    assert_eq!(diff.months, 0);
    assert_eq!(diff.days, 13);
}

#[test]
fn test_borrow_across_year_end() {
    let diff = CalendarDiff::between(utc(2023, 12, 31, 23, 59, 59), utc(2024, 1, 1, 0, 0, 0));
    assert_eq!(
        diff,
        CalendarDiff {
            seconds: 1,
            ..CalendarDiff::default()
        }
    );
}

#[test]
fn test_time_of_day_borrows_from_month() {
    let diff = CalendarDiff::between(utc(2024, 1, 1, 10, 0, 0), utc(2024, 2, 1, 9, 0, 0));
    assert_eq!(diff.months, 0);
    assert_eq!(diff.days, 30);
    assert_eq!(diff.hours, 23);
}

#[test]
fn test_all_fields() {
    let diff = CalendarDiff::between(utc(2020, 2, 10, 8, 30, 15), utc(2023, 5, 12, 9, 45, 20));
    assert_eq!(
        diff,
        CalendarDiff {
            years: 3,
            months: 3,
            days: 2,
            hours: 1,
            minutes: 15,
            seconds: 5,
            invert: false,
        }
    );
}

#[test]
fn test_inverted_diff_has_same_magnitudes() {
    let earlier = utc(2024, 6, 12, 8, 0, 0);
    let later = utc(2024, 6, 15, 12, 0, 0);
    let forward = CalendarDiff::between(earlier, later);
    let backward = CalendarDiff::between(later, earlier);
    assert!(!forward.invert);
    assert!(backward.invert);
    assert_eq!(forward.days, backward.days);
    assert_eq!(forward.hours, backward.hours);
    assert_eq!(backward.days, 3);
    assert_eq!(backward.hours, 4);
}

#[test]
fn test_sub_second_truncated() {
    let t = utc(2024, 6, 15, 12, 0, 0);
    let diff = CalendarDiff::between(t - Duration::milliseconds(1500), t);
    assert_eq!(diff.seconds, 1);
    assert!(!diff.is_zero());
}

#[test]
fn test_get_matches_fields() {
    let diff = CalendarDiff::between(utc(2020, 2, 10, 8, 30, 15), utc(2023, 5, 12, 9, 45, 20));
    let values: Vec<u64> = Unit::ALL.iter().map(|&u| diff.get(u)).collect();
    assert_eq!(values, vec![3, 3, 2, 1, 15, 5]);
}

#[test]
fn test_unit_table_order_and_names() {
    let names: Vec<&str> = Unit::ALL.iter().map(|u| u.name()).collect();
    assert_eq!(
        names,
        vec!["years", "months", "days", "hours", "minutes", "seconds"]
    );
}

// --- parse_date ---

fn now() -> DateTime<Utc> {
    utc(2024, 6, 15, 12, 0, 0)
}

#[test]
fn test_parse_rfc3339_with_offset() {
    let t = parse_date("2024-06-15T14:00:00+02:00", now()).unwrap();
    assert_eq!(t, utc(2024, 6, 15, 12, 0, 0));
}

#[test]
fn test_parse_rfc2822() {
    let t = parse_date("Sat, 15 Jun 2024 12:00:00 +0000", now()).unwrap();
    assert_eq!(t, utc(2024, 6, 15, 12, 0, 0));
}

#[test]
fn test_parse_naive_forms_as_utc() {
    let expected = utc(2024, 6, 15, 12, 30, 0);
    assert_eq!(parse_date("2024-06-15 12:30:00", now()).unwrap(), expected);
    assert_eq!(parse_date("2024-06-15T12:30:00", now()).unwrap(), expected);
    assert_eq!(parse_date("2024-06-15 12:30", now()).unwrap(), expected);
}

#[test]
fn test_parse_date_only_is_midnight() {
    let t = parse_date("2024-06-15", now()).unwrap();
    assert_eq!(t, utc(2024, 6, 15, 0, 0, 0));
}

#[test]
fn test_parse_trims_whitespace() {
    let t = parse_date("  2024-06-15 \n", now()).unwrap();
    assert_eq!(t, utc(2024, 6, 15, 0, 0, 0));
}

#[test]
fn test_parse_unix_timestamp() {
    assert_eq!(parse_date("@0", now()).unwrap(), utc(1970, 1, 1, 0, 0, 0));
    assert_eq!(
        parse_date("@1718452800", now()).unwrap(),
        utc(2024, 6, 15, 12, 0, 0)
    );
}

#[test]
fn test_parse_now() {
    assert_eq!(parse_date("now", now()).unwrap(), now());
    assert_eq!(parse_date("NOW", now()).unwrap(), now());
}

#[test]
fn test_parse_blank_is_now() {
    assert_eq!(parse_date("", now()).unwrap(), now());
    assert_eq!(parse_date("   ", now()).unwrap(), now());
}

#[test]
fn test_parse_garbage_fails() {
    assert!(parse_date("not a date", now()).is_err());
    assert!(parse_date("@abc", now()).is_err());
}

#[test]
fn test_parse_out_of_range_fails() {
    assert!(parse_date("2024-13-01", now()).is_err());
    assert!(parse_date("2024-02-30 10:00:00", now()).is_err());
}
