use chrono::{Timelike, Utc};
use formq::engine::datetime::{DatetimeParser, format_system_datetime};

#[test]
fn now_is_close_to_the_system_clock() {
    let parser = DatetimeParser::new();
    let before = Utc::now().naive_utc();
    let parsed = parser.parse(Some("now")).expect("now input");
    let after = Utc::now().naive_utc();

    assert!(parsed >= before - chrono::Duration::seconds(1));
    assert!(parsed <= after + chrono::Duration::seconds(1));
    assert_eq!(parsed.nanosecond(), 0);
}

#[test]
fn absent_input_is_close_to_the_system_clock() {
    let parser = DatetimeParser::new();
    let before = Utc::now().naive_utc();
    let parsed = parser.parse(None).expect("absent input");
    let after = Utc::now().naive_utc();

    assert!(parsed >= before - chrono::Duration::seconds(1));
    assert!(parsed <= after + chrono::Duration::seconds(1));
}

#[test]
fn time_only_input_lands_on_todays_date() {
    let parser = DatetimeParser::new();
    let before = Utc::now().date_naive();
    let parsed = parser.parse(Some("14:30")).expect("time input");
    let after = Utc::now().date_naive();

    // Either side of a midnight rollover is acceptable.
    assert!(parsed.date() == before || parsed.date() == after);
    assert_eq!(parsed.time().hour(), 14);
    assert_eq!(parsed.time().minute(), 30);
    assert_eq!(parsed.time().second(), 0);
}

#[test]
fn representative_lenient_inputs_normalize_to_canonical_form() {
    let parser = DatetimeParser::new();
    for input in [
        "2020-03-04 14:30",
        "03/04/2020 14:30",
        "14:30 03/04/2020",
        "20200304 14:30",
        "4. 3. 2020 14:30",
        "02:30 PM 03/04/2020",
        "03/04/2020 14:30:59",
    ] {
        let parsed = parser.parse(Some(input)).expect(input);
        assert_eq!(format_system_datetime(&parsed), "2020-03-04 14:30", "{input}");
    }
}

#[test]
fn ambiguous_day_month_input_prefers_month_first() {
    // 03/04 fits both %m/%d and %d/%m; candidate order decides.
    let parser = DatetimeParser::new();
    let parsed = parser.parse(Some("03/04/2020 00:00")).expect("ambiguous date");
    assert_eq!(format_system_datetime(&parsed), "2020-03-04 00:00");
}

#[test]
fn day_first_input_falls_through_to_the_day_month_layout() {
    // 25 is no month, so %m/%d/%Y fails and %d/%m/%Y picks it up.
    let parser = DatetimeParser::new();
    let parsed = parser.parse(Some("25/12/2020 14:30")).expect("day first");
    assert_eq!(format_system_datetime(&parsed), "2020-12-25 14:30");
}

#[test]
fn garbage_input_is_rejected() {
    let parser = DatetimeParser::new();
    for input in ["not-a-date", "2020-03-04", "03/04/2020", "14h30", ""] {
        assert!(parser.parse(Some(input)).is_err(), "{input}");
    }
}
