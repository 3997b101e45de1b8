use chrono::{Datelike, Duration, Local, NaiveDate};
use finvani::utils::datetime::{format_published_date, format_published_date_from, parse_published_date};

const RAW: &str = "2025-03-03 12:00:00";

fn published_local_date() -> NaiveDate {
    parse_published_date(RAW)
        .expect("plain format parses")
        .with_timezone(&Local)
        .date_naive()
}

#[test]
fn test_parses_backend_formats() {
    let rfc2822 = parse_published_date("Mon, 03 Mar 2025 08:00:00 GMT").expect("rfc2822");
    assert_eq!(rfc2822.day(), 3);

    let rfc3339 = parse_published_date("2025-03-03T08:00:00+05:30").expect("rfc3339");
    assert_eq!(rfc3339.offset().local_minus_utc(), 5 * 3600 + 1800);

    let plain = parse_published_date(" 2025-03-03 08:00:00 ").expect("plain");
    assert_eq!(plain.offset().local_minus_utc(), 0);

    assert!(parse_published_date("last Tuesday").is_none());
    assert!(parse_published_date("").is_none());
}

#[test]
fn test_relative_formatting() {
    let published = published_local_date();

    assert!(format_published_date_from(RAW, published).starts_with("today "));
    assert_eq!(format_published_date_from(RAW, published + Duration::days(1)), "yesterday");
    assert_eq!(format_published_date_from(RAW, published + Duration::days(4)), "4 days ago");

    let older = format_published_date_from(RAW, published + Duration::days(30));
    assert!(older.contains("Mar 2025"));
}

#[test]
fn test_unparseable_is_verbatim() {
    assert_eq!(format_published_date("sometime in spring"), "sometime in spring");
}
