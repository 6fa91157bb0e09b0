use crate::{Context, EventDate};

fn date(input: &str) -> EventDate {
    EventDate::with_context(input, None, &Context::default())
}

#[test]
fn accepted_dates_matching() {
    // (input, canonical form, earliest year, latest year, sort key)
    let cases: Vec<(&str, &str, Option<i32>, Option<i32>, i32)> = vec![
        ("15 Jan 1850", "15 Jan 1850", Some(1850), Some(1850), 18500115),
        ("1850", "1850", Some(1850), Some(1850), 18500000),
        ("  jan   1850 ", "Jan 1850", Some(1850), Some(1850), 18500100),
        ("Abt 1850", "Abt 1850", Some(1850), Some(1850), 18500000),
        ("bet 1850 and 1855", "Bet 1850 and 1855", Some(1850), Some(1855), 18510000),
        ("from 1850 to 1860", "From 1850 to 1860", Some(1850), Some(1860), 18510000),
        ("1850 to 1860", "From 1850 to 1860", Some(1850), Some(1860), 18510000),
        ("to 1860", "To 1860", None, Some(1860), 18590000),
        ("bef 1 jan 1850", "Bef 1 Jan 1850", None, Some(1850), 18491231),
        ("bef abt 1850", "Bef abt 1850", None, Some(1850), 18490000),
        ("aft 1900", "Aft 1900", Some(1900), None, 19010000),
        ("Int 1850", "Int 1850", Some(1850), Some(1850), 18500000),
        ("Bet 10 and 15 Oct 1823", "Bet 10 Oct 1823 and 15 Oct 1823", Some(1823), Some(1823), 18231011),
        ("bet jan and mar 1850", "Bet Jan 1850 and Mar 1850", Some(1850), Some(1850), 18500200),
        ("10 Feb 1750/51", "10 Feb 1750/51", Some(1751), Some(1751), 17510210),
        ("1699/00", "1699/00", Some(1700), Some(1700), 17000000),
        ("100 b.c.", "100 BC", Some(-100), Some(-100), -1000000),
        // Rewritten numeric and dashed forms.
        ("1850-01-15", "15 Jan 1850", Some(1850), Some(1850), 18500115),
        ("25/12/1850", "25 Dec 1850", Some(1850), Some(1850), 18501225),
        ("15-Jan-1850", "15 Jan 1850", Some(1850), Some(1850), 18500115),
        ("1850-1855", "From 1850 to 1855", Some(1850), Some(1855), 18510000),
        // Other languages.
        ("vers 1750", "Abt 1750", Some(1750), Some(1750), 17500000),
        ("Vóór 12 maart 1790", "Bef 12 Mar 1790", None, Some(1790), 17900311),
        ("ca 3 août 1801", "Est 3 Aug 1801", Some(1801), Some(1801), 18010803),
        // Preserved text.
        ("15th oct 1850 ?", "15 Oct 1850 (?)", Some(1850), Some(1850), 18501015),
        ("Abt 1850 (in infancy)", "Abt 1850 (in infancy)", Some(1850), Some(1850), 18500000),
        ("12 Feb 1690[/91?]", "12 Feb 1690/91 (12 Feb 1690[/91?])", Some(1691), Some(1691), 16910212),
        ("unknown", "", None, None, 0),
        ("Died young", "(young)", None, None, 0),
        ("", "", None, None, 0),
    ];

    for (input, formatted, earliest, latest, key) in cases {
        let d = date(input);
        assert!(d.edit_ok(), "'{input}' rejected: {:?}", d.error_message());
        assert_eq!(d.format_date(), formatted, "format_date for '{input}'");
        assert_eq!(d.earliest_year(), earliest, "earliest_year for '{input}'");
        assert_eq!(d.latest_year(), latest, "latest_year for '{input}'");
        assert_eq!(d.date_sort_key(), key, "date_sort_key for '{input}'");
    }
}

#[test]
fn rejected_dates_matching() {
    // (input, error message, best-effort earliest year)
    let cases: Vec<(&str, &str, Option<i32>)> = vec![
        ("30 Feb 1900", "Invalid day for Feb", Some(1900)),
        ("31 Sep 1900", "Invalid day for Sep", Some(1900)),
        ("1/2/1900", "Ambiguous date", Some(1900)),
        ("WFT Est. 1820-1850", "WFT estimates not accepted", None),
        ("wft 1850", "WFT estimates not accepted", Some(1850)),
        ("1750/53", "Invalid split year", Some(1750)),
        ("1850/51", "Split year not valid for this year", Some(1850)),
        ("10 Apr 1750/51", "Split year valid only for Jan-Mar", Some(1751)),
        ("/51", "Incomplete split year", Some(51)),
        ("300000/01", "Split year not valid for this year", None),
        ("3000000000/01", "Split year not valid for this year", None),
        ("3 5 1850", "Too many numbers (days/years)", Some(1850)),
        ("jan feb 1850", "Too many months", Some(1850)),
        ("from 1850 to 1860 to 1870", "Too many parts", None),
        ("bet 1850 to 1860", "Invalid combination of modifiers", Some(1850)),
        ("abt est 1850", "Invalid combination of modifiers", Some(1850)),
        ("abt bef 1850", "Modifier order not supported", Some(1850)),
        ("bet 1850", "Incorrect usage of bet/and", Some(1850)),
        ("abt 1850 xyz", "Unrecognized text", None),
        ("jan", "Incomplete date", None),
        ("bet 1855 and 1850", "Invalid date range", Some(1855)),
        ("16 Jun 2024", "Future date", Some(2024)),
        ("45 jan 1850", "Invalid day number", Some(1850)),
        ("6000", "Invalid year number", None),
        ("bet 20 and 15 oct 1823", "Missing month", Some(1823)),
        ("15/jan 1850", "Invalid date format", Some(1850)),
    ];

    for (input, message, earliest) in cases {
        let d = date(input);
        assert!(!d.edit_ok(), "'{input}' unexpectedly accepted as '{}'", d.format_date());
        assert_eq!(d.error_message().as_deref(), Some(message), "error for '{input}'");
        assert_eq!(d.format_date(), input, "failed dates echo their input ('{input}')");
        assert_eq!(d.earliest_year(), earliest, "earliest_year for '{input}'");
        // Derived values stay defined for whatever the partial parse kept.
        let _ = (d.date_sort_key(), d.min_day(), d.max_day(), d.iso_date());
    }
}

#[test]
fn significant_reformat_cases() {
    let cases = [
        ("1850-01-15", true),
        ("25/12/1850", true),
        ("1850-1855", true),
        ("12 Feb 1690[/91?]", true),
        ("Bet 10 and 15 Oct 1823", true),
        ("1850 to 1860", true),
        ("15-Jan-1850", false),
        ("abt 1850", false),
    ];
    for (input, expected) in cases {
        assert_eq!(date(input).significant_reformat(), expected, "significant_reformat for '{input}'");
    }
}

#[test]
fn derived_values_for_a_full_date() {
    let d = date("15 Jan 1850");
    assert_eq!(d.effective_year(), Some(1850));
    assert_eq!(d.effective_start_year(), Some(1850));
    assert_eq!(d.year_only().as_deref(), Some("1850"));
    assert_eq!(d.year_range().as_deref(), Some("1850"));
    assert_eq!(d.date_string_key(), "18500115");
    assert_eq!(d.iso_date(), "1850-01-15");
    assert!(d.min_day() <= d.max_day());
}

#[test]
fn canonical_output_is_a_fixed_point() {
    let inputs = [
        "abt 15 jan 1850",
        "Bet 10 and 15 Oct 1823",
        "12 Feb 1690[/91?]",
        "1850-1855",
        "vers 1750 (twin)",
        "15th oct 1850 ?",
        "100 b.c.",
    ];
    for input in inputs {
        let once = date(input).format_date().to_string();
        assert_eq!(date(&once).format_date(), once, "reparsing '{once}' (from '{input}')");
    }
}
