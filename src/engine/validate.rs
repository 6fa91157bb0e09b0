//! Validation and canonical formatting ("edit").
//!
//! Runs over a successfully classified [`ParsedDate`]. Checks run in a fixed
//! order and the first failure wins:
//!
//! ```text
//! pairing ─▶ per sub-date (start, end) ─▶ range order ─▶ future dates
//!            · year present, day needs month
//!            · day fits the month
//!            · split year only Jan-Mar
//!            · supplemental modifier combinations
//! ```
//!
//! The formatted text is built while the sub-dates are checked, so a success
//! hands back the canonical string directly.

use crate::date_parts::{Modifier, ParsedDate, SubDate};
use crate::error::{DateError, Result};
use chrono::{Datelike, NaiveDate};

/// Modifiers as they are displayed once range pairing has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pairing {
    pub start: Option<Modifier>,
    pub end: Option<Modifier>,
    /// A `to` with nothing before it renders as `To`.
    pub lone_to: bool,
}

impl Pairing {
    /// Resolve display modifiers. Discrete events cannot span time, so a
    /// `From ... to` pair is read as `Bet ... and`.
    pub fn resolve(parsed: &ParsedDate, discrete: bool) -> Self {
        let (mut start, mut end) = (parsed.start.modifier, parsed.end.modifier);
        if discrete && start == Some(Modifier::From) && end == Some(Modifier::To) {
            start = Some(Modifier::Between);
            end = Some(Modifier::And);
        }
        let lone_to = !parsed.is_range() && end == Some(Modifier::To);
        Pairing { start, end, lone_to }
    }

    pub fn end_label(&self) -> Option<&'static str> {
        match self.end? {
            Modifier::To if self.lone_to => Some("To"),
            m => Some(m.canonical()),
        }
    }

    pub fn start_label(&self) -> Option<&'static str> {
        self.start.map(Modifier::canonical)
    }
}

/// Validate `parsed` and render its canonical form.
///
/// `today` is the reference date for the future-date check.
pub(crate) fn edit(parsed: &ParsedDate, discrete: bool, today: NaiveDate) -> Result<String> {
    check_pairing(parsed)?;
    let pairing = Pairing::resolve(parsed, discrete);

    let mut pieces: Vec<String> = Vec::with_capacity(2);
    for (sub, label) in [(&parsed.start, pairing.start_label()), (&parsed.end, pairing.end_label())] {
        if sub.is_populated() {
            check_sub_date(sub)?;
            pieces.push(format_sub_date(sub, label));
        }
    }

    check_range_order(parsed)?;
    check_not_future(parsed, today)?;

    if let Some(text) = &parsed.text {
        pieces.push(text.clone());
    }
    let formatted = pieces.join(" ");
    tracing::debug!(formatted, "date validated");
    Ok(formatted)
}

/// Two sub-dates must be `Bet ... and` or `From ... to`; `Bet` and `and`
/// never stand alone.
fn check_pairing(parsed: &ParsedDate) -> Result<()> {
    if parsed.is_range() {
        return match (parsed.start.modifier, parsed.end.modifier) {
            (Some(Modifier::Between), Some(Modifier::And)) | (Some(Modifier::From), Some(Modifier::To)) => Ok(()),
            _ => Err(DateError::InvalidCombinationOfModifiers),
        };
    }
    match parsed.end.modifier {
        Some(Modifier::Between | Modifier::And) => Err(DateError::IncorrectBetAndUsage),
        _ => Ok(()),
    }
}

fn check_sub_date(sub: &SubDate) -> Result<()> {
    if sub.year.is_none() || (sub.day.is_some() && sub.month.is_none()) {
        return Err(DateError::IncompleteDate);
    }
    if let (Some(day), Some(month)) = (sub.day, sub.month) {
        if day > month.max_day() {
            return Err(DateError::InvalidDayForMonth(month));
        }
    }
    if sub.is_split_year() && sub.month.is_some_and(|m| !m.allows_split_year()) {
        return Err(DateError::SplitYearWrongMonth);
    }
    check_supplemental(sub)
}

/// A supplemental modifier must be Abt/Cal/Est and may not follow one of
/// those. `Abt bef` is reported as an order problem since `Bef abt` is fine.
fn check_supplemental(sub: &SubDate) -> Result<()> {
    let Some(supplemental) = sub.supplemental else { return Ok(()) };
    let after_supplemental_kind = sub.modifier.is_some_and(Modifier::is_supplemental_kind);
    match (supplemental.is_supplemental_kind(), after_supplemental_kind) {
        (false, true) => Err(DateError::ModifierOrderNotSupported),
        (false, false) | (true, true) => Err(DateError::InvalidCombinationOfModifiers),
        (true, false) => Ok(()),
    }
}

fn format_sub_date(sub: &SubDate, modifier: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(6);
    if let Some(modifier) = modifier {
        parts.push(modifier.to_string());
    }
    if let Some(supplemental) = sub.supplemental {
        parts.push(supplemental.canonical().to_lowercase());
    }
    if let Some(day) = sub.day {
        parts.push(day.to_string());
    }
    if let Some(month) = sub.month {
        parts.push(month.to_string());
    }
    if let Some(year) = &sub.year {
        parts.push(year.clone());
    }
    if let Some(era) = sub.era {
        parts.push(era.to_string());
    }
    parts.join(" ")
}

/// The start may not be later than the end at the precision both share.
/// Equal years need both months, equal months need both days.
fn check_range_order(parsed: &ParsedDate) -> Result<()> {
    let (start, end) = (&parsed.start, &parsed.end);
    let (Some(start_year), Some(end_year)) = (start.effective_year, end.effective_year) else {
        return Ok(());
    };
    let invalid = start_year > end_year
        || (start_year == end_year
            && match (start.month, end.month) {
                (Some(start_month), Some(end_month)) => {
                    start_month > end_month
                        || (start_month == end_month
                            && match (start.day, end.day) {
                                (Some(start_day), Some(end_day)) => start_day > end_day,
                                _ => true,
                            })
                }
                _ => true,
            });
    if invalid { Err(DateError::InvalidDateRange) } else { Ok(()) }
}

fn check_not_future(parsed: &ParsedDate, today: NaiveDate) -> Result<()> {
    for sub in [&parsed.end, &parsed.start] {
        let Some(year) = sub.effective_year else { continue };
        let month = sub.month.map(|m| m.number());
        let future = year > today.year()
            || (year == today.year() && month.is_some_and(|m| m > today.month()))
            || (year == today.year()
                && month == Some(today.month())
                && sub.day.is_some_and(|d| d > today.day()));
        if future {
            return Err(DateError::FutureDate);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{classify::classify, lexer::lex};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn run(date: &str, discrete: bool) -> Result<String> {
        let parsed = classify(&lex(date), ParsedDate::default(), None).map_err(|r| r.error)?;
        edit(&parsed, discrete, today())
    }

    fn ok(date: &str) -> String {
        run(date, false).unwrap_or_else(|err| panic!("{date}: {err}"))
    }

    fn err(date: &str) -> DateError {
        run(date, false).unwrap_err()
    }

    #[test]
    fn formats_canonical_spelling() {
        assert_eq!(ok("abt 15 jan 1850"), "Abt 15 Jan 1850");
        assert_eq!(ok("bet 1850 and 1855"), "Bet 1850 and 1855");
        assert_eq!(ok("from 1850 to 1860"), "From 1850 to 1860");
        assert_eq!(ok("bef abt 1850"), "Bef abt 1850");
        assert_eq!(ok("100 bc"), "100 BC");
        assert_eq!(ok("10 feb 1750/51"), "10 Feb 1750/51");
        assert_eq!(ok(""), "");
    }

    #[test]
    fn lone_to_is_capitalised() {
        assert_eq!(ok("to 1860"), "To 1860");
    }

    #[test]
    fn discrete_events_turn_from_to_into_bet_and() {
        assert_eq!(run("from 1850 to 1860", true).unwrap(), "Bet 1850 and 1860");
        assert_eq!(run("from 1850", true).unwrap(), "From 1850");
    }

    #[test]
    fn pairing_errors() {
        assert_eq!(err("bet 1850 to 1860"), DateError::InvalidCombinationOfModifiers);
        assert_eq!(err("abt 1850 and 1860"), DateError::InvalidCombinationOfModifiers);
        assert_eq!(err("bet 1850"), DateError::IncorrectBetAndUsage);
        assert_eq!(err("and 1850"), DateError::IncorrectBetAndUsage);
    }

    #[test]
    fn sub_date_errors() {
        assert_eq!(err("abt"), DateError::IncompleteDate);
        assert_eq!(err("jan"), DateError::IncompleteDate);
        assert_eq!(err("30 feb 1900"), DateError::InvalidDayForMonth(crate::date_parts::Month::Feb));
        assert_eq!(err("31 apr 1900"), DateError::InvalidDayForMonth(crate::date_parts::Month::Apr));
        assert_eq!(ok("29 feb 1900"), "29 Feb 1900");
        assert_eq!(err("10 apr 1750/51"), DateError::SplitYearWrongMonth);
    }

    #[test]
    fn supplemental_rules() {
        assert_eq!(err("abt bef 1850"), DateError::ModifierOrderNotSupported);
        assert_eq!(err("abt est 1850"), DateError::InvalidCombinationOfModifiers);
        assert_eq!(err("bef aft 1850"), DateError::InvalidCombinationOfModifiers);
    }

    #[test]
    fn range_order() {
        assert_eq!(err("bet 1855 and 1850"), DateError::InvalidDateRange);
        assert_eq!(err("bet 1850 and 1850"), DateError::InvalidDateRange);
        assert_eq!(err("bet mar 1850 and jan 1850"), DateError::InvalidDateRange);
        assert_eq!(err("bet oct 1850 and oct 1850"), DateError::InvalidDateRange);
        assert_eq!(ok("bet 15 oct 1850 and 15 oct 1850"), "Bet 15 Oct 1850 and 15 Oct 1850");
        assert_eq!(ok("bet jan 1850 and mar 1850"), "Bet Jan 1850 and Mar 1850");
        assert_eq!(ok("bet 100 bc and 50 bc"), "Bet 100 BC and 50 BC");
    }

    #[test]
    fn future_dates() {
        assert_eq!(ok("15 jun 2024"), "15 Jun 2024");
        assert_eq!(err("16 jun 2024"), DateError::FutureDate);
        assert_eq!(err("jul 2024"), DateError::FutureDate);
        assert_eq!(err("2025"), DateError::FutureDate);
        assert_eq!(ok("2024"), "2024");
    }
}
