use chrono::{Days, NaiveDate};
use geddate::{Context, EventDate, Month};
use proptest::prelude::*;

const CASES: u32 = 256;

fn ctx() -> Context {
    Context::on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn date(text: &str) -> EventDate {
    EventDate::with_context(text, None, &ctx())
}

fn arb_month() -> impl Strategy<Value = Month> {
    (1u32..=12).prop_map(|n| Month::from_number(n).unwrap())
}

/// `(year, month, day)` with a day that exists in every month.
fn arb_full_date() -> impl Strategy<Value = (u32, Month, u32)> {
    (100u32..=2000, arb_month(), 1u32..=28)
}

fn arb_modifier() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("abt "),
        Just("Cal "),
        Just("EST "),
        Just("bef "),
        Just("aft "),
        Just("from "),
        Just("to "),
        Just("int "),
        Just("bef abt "),
        Just("circa "),
        Just("vers "),
    ]
}

/// Single dates in assorted spellings and precisions.
fn arb_single_date() -> impl Strategy<Value = String> {
    (arb_modifier(), arb_full_date(), 0u8..3).prop_map(|(modifier, (year, month, day), precision)| match precision {
        0 => format!("{modifier}{day} {} {year}", month.abbrev().to_uppercase()),
        1 => format!("{modifier}{} {year}", month.abbrev().to_lowercase()),
        _ => format!("{modifier}{year}"),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn format_date_is_a_fixed_point(text in arb_single_date()) {
        let first = date(&text);
        prop_assume!(first.edit_ok());
        let canonical = first.format_date().to_string();
        let second = date(&canonical);
        prop_assert!(second.edit_ok(), "'{}' rejected on reparse: {:?}", canonical, second.error_message());
        prop_assert_eq!(second.format_date(), canonical.as_str());
        prop_assert_eq!(second.date_sort_key(), first.date_sort_key());
    }

    #[test]
    fn full_dates_have_one_year((year, month, day) in arb_full_date()) {
        let d = date(&format!("{day} {month} {year}"));
        prop_assert!(d.edit_ok());
        let year = year as i32;
        prop_assert_eq!(d.earliest_year(), Some(year));
        prop_assert_eq!(d.latest_year(), Some(year));
        prop_assert_eq!(d.effective_year(), Some(year));
        prop_assert!(d.min_day() <= d.max_day());
    }

    #[test]
    fn between_ranges_span_their_years(y1 in 100i32..=2000, span in 1i32..=200) {
        let y2 = y1 + span;
        let d = date(&format!("bet {y1} and {y2}"));
        prop_assert!(d.edit_ok(), "{:?}", d.error_message());
        prop_assert_eq!(d.earliest_year(), Some(y1));
        prop_assert_eq!(d.latest_year(), Some(y2));
        prop_assert!(d.min_day() < d.max_day());
    }

    #[test]
    fn open_bounds_have_no_year((year, month, day) in arb_full_date()) {
        for prefix in ["bef", "Bef", "to", "TO"] {
            let d = date(&format!("{prefix} {day} {month} {year}"));
            prop_assert_eq!(d.earliest_year(), None, "earliest for '{}'", prefix);
        }
        prop_assert_eq!(date(&format!("aft {day} {month} {year}")).latest_year(), None);
        prop_assert_eq!(date(&format!("from {day} {month} {year}")).latest_year(), None);
    }

    #[test]
    fn sort_key_follows_calendar_order(a in arb_full_date(), b in arb_full_date()) {
        let key = |(year, month, day): (u32, Month, u32)| date(&format!("{day} {month} {year}")).date_sort_key();
        let order = |(year, month, day): (u32, Month, u32)| (year, month, day);
        prop_assert_eq!(key(a).cmp(&key(b)), order(a).cmp(&order(b)));
    }

    #[test]
    fn sort_key_of_months_follows_calendar_order(year in 100u32..=2000, m1 in arb_month(), m2 in arb_month()) {
        prop_assume!(m1 < m2);
        let (first, second) = (format!("{m1} {year}"), format!("{m2} {year}"));
        prop_assert!(date(&first).date_sort_key() < date(&second).date_sort_key());
    }
}

#[test]
fn tomorrow_in_reference_zone_is_in_the_future() {
    // Retry when the reference zone crosses midnight between reading the
    // clock here and inside validation.
    for _ in 0..3 {
        let today = Context::now().today;
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();
        let text = tomorrow.format("%-d %b %Y").to_string();

        let future = EventDate::new(&text, None);
        let current = EventDate::new(&today.format("%-d %b %Y").to_string(), None);
        let (future_error, current_ok) = (future.error_message(), current.edit_ok());
        if Context::now().today != today {
            continue;
        }

        assert_eq!(future_error.as_deref(), Some("Future date"));
        assert_eq!(future.format_date(), text);
        assert!(current_ok, "{:?}", current.error_message());
        return;
    }
    panic!("reference date kept changing");
}

#[test]
fn discrete_event_types_read_from_to_as_between() {
    let d = EventDate::with_context("From 1850 to 1860", Some("Death"), &ctx());
    assert_eq!(d.format_date(), "Bet 1850 and 1860");
    assert_eq!(d.earliest_year(), Some(1850));
    assert_eq!(d.latest_year(), Some(1860));
    assert!(geddate::is_discrete("Marriage"));
    assert!(!geddate::is_discrete("marriage"));
}
