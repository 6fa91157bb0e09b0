//! Right-to-left field classification.
//!
//! GEDCOM modifiers are prefixes, so the last sub-date of a range is complete
//! before its modifier is seen. Fields are therefore read from the end:
//!
//! ```text
//!   bet   10   and   15   oct   1823
//!    │     │    │     │    │     └─ end.year      (first number seen is the year)
//!    │     │    │     │    └─────── end.month
//!    │     │    │     └──────────── end.day
//!    │     │    └────────────────── end.modifier  -> move to start
//!    │     └─────────────────────── start.day     (year + month borrowed from end)
//!    └───────────────────────────── start.modifier
//! ```
//!
//! A modifier closes the sub-date it precedes; a modifier directly left of
//! another modifier is that sub-date's supplemental modifier instead.
//!
//! The numeric heuristics (zero as the tail of a split year, day-or-year,
//! borrowing from the end of a range) are irregular on purpose; the tests
//! pin each branch.

use super::lexer::Field;
use crate::date_parts::{Era, Modifier, ParsedDate, Reformat, SubDate};
use crate::error::{DateError, Rejected};
use crate::rules::vocab;

/// Highest number accepted as a year.
const MAX_YEAR: u32 = 5000;

/// Years where double dating (`1699/00`) was in use somewhere.
const SPLIT_YEARS: std::ops::RangeInclusive<u32> = 1000..=1752;

/// A number this close to the end year of a range is read as a start year
/// rather than a day lacking its month.
const YEAR_RANGE_SPAN: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    End,
    Start,
}

impl Slot {
    fn next(self) -> Option<Slot> {
        match self {
            Slot::End => Some(Slot::Start),
            Slot::Start => None,
        }
    }
}

/// Classify `fields` into a [`ParsedDate`] seeded with `seed` (note and flags
/// from normalization). `original` is prepended as a note on success.
pub(crate) fn classify(fields: &[Field<'_>], seed: ParsedDate, original: Option<&str>) -> Result<ParsedDate, Rejected> {
    let mut classifier = Classifier { parsed: seed, slot: Some(Slot::End), split_pending: false, zero_pending: false };
    match classifier.run(fields, original) {
        Ok(()) => Ok(classifier.parsed),
        Err(error) => {
            tracing::debug!(%error, partial = ?classifier.parsed, "classification failed");
            Err(Rejected::new(error, classifier.parsed))
        }
    }
}

struct Classifier {
    parsed: ParsedDate,
    /// Sub-date receiving fields; `None` once both have been closed.
    slot: Option<Slot>,
    /// A `/` was read; the next field is the first part of a split year.
    split_pending: bool,
    /// A `0` was read before any year; it can only be a split-year tail.
    zero_pending: bool,
}

impl Classifier {
    fn sub(&mut self, slot: Slot) -> &mut SubDate {
        match slot {
            Slot::End => &mut self.parsed.end,
            Slot::Start => &mut self.parsed.start,
        }
    }

    fn run(&mut self, fields: &[Field<'_>], original: Option<&str>) -> Result<(), DateError> {
        for idx in (0..fields.len()).rev() {
            let Some(slot) = self.slot else { break };
            let prev = idx.checked_sub(1).map(|p| fields[p]);
            self.field(slot, fields[idx], prev, idx > 0)?;
        }
        self.finish(original)
    }

    fn field(&mut self, slot: Slot, field: Field<'_>, prev: Option<Field<'_>>, more: bool) -> Result<(), DateError> {
        match field {
            Field::Slash => self.slash(slot),
            _ if self.split_pending => match field {
                Field::Number(digits) => {
                    self.split_year(slot, digits)?;
                    self.split_pending = false;
                    Ok(())
                }
                _ => Err(DateError::IncompleteSplitYear),
            },
            Field::Word(word) if vocab::is_bc(word) => {
                self.sub(slot).era = Some(Era::Bc);
                Ok(())
            }
            Field::Number(digits) => self.number(slot, digits, prev),
            Field::Word(word) => self.word(slot, word, prev, more),
        }
    }

    fn slash(&mut self, slot: Slot) -> Result<(), DateError> {
        let zero_pending = self.zero_pending;
        let sub = self.sub(slot);
        if sub.year.is_none() && !zero_pending {
            return Err(DateError::IncompleteSplitYear);
        }
        // A second "/" or one after a day/month reads as "or", not a split year.
        if sub.is_split_year() || sub.month.is_some() || sub.day.is_some() {
            return Err(DateError::InvalidDateFormat);
        }
        if zero_pending {
            sub.year = Some("0".to_string());
            self.zero_pending = false;
        }
        self.split_pending = true;
        Ok(())
    }

    /// `digits` is the first part of a split year whose tail is the slot's year.
    fn split_year(&mut self, slot: Slot, digits: &str) -> Result<(), DateError> {
        let first = parse_number(digits);
        let sub = self.sub(slot);
        let tail = sub.year.clone().unwrap_or_default();

        let outcome = if !SPLIT_YEARS.contains(&first) {
            Err(DateError::SplitYearOutOfRange)
        } else if split_year_matches(first, &tail) {
            Ok(())
        } else {
            Err(DateError::InvalidSplitYear)
        };

        match outcome {
            Ok(()) => {
                sub.year = Some(format!("{first}/{:02}", (first % 100 + 1) % 100));
                sub.effective_year = Some(first as i32 + 1);
                Ok(())
            }
            Err(error) => {
                // The first part is the best year there is for year-only
                // queries, as long as it could be a year at all.
                if (1..=MAX_YEAR).contains(&first) {
                    set_year(sub, first);
                } else {
                    sub.year = None;
                    sub.effective_year = None;
                }
                Err(error)
            }
        }
    }

    fn number(&mut self, slot: Slot, digits: &str, prev: Option<Field<'_>>) -> Result<(), DateError> {
        let num = parse_number(digits);
        let sub = self.sub(slot);

        if num == 0 && sub.year.is_none() {
            self.zero_pending = true;
            return Ok(());
        }

        if !is_day(num) {
            if sub.year.is_some() {
                return Err(DateError::InvalidDayNumber);
            }
            if !(1..=MAX_YEAR).contains(&num) {
                return Err(DateError::InvalidYearNumber);
            }
            set_year(sub, num);
            return Ok(());
        }

        // Could be a day or a year.
        if sub.month.is_some() || sub.year.is_some() {
            if sub.day.is_some() {
                return Err(DateError::TooManyNumbers);
            }
            sub.day = Some(num);
            return Ok(());
        }

        // In "Bet 10 and 15 Oct 1823" the start takes month and year from the
        // end, unless this number is the tail of a split year.
        let after_slash = matches!(prev, Some(Field::Slash));
        let end_has_full_year = self.parsed.end.year.as_ref().is_some_and(|y| y.len() > 3);
        if slot == Slot::Start && !after_slash && end_has_full_year {
            let end = &self.parsed.end;
            if end.day.is_some_and(|day| num < day) {
                let (year, effective_year, month) = (end.year.clone(), end.effective_year, end.month);
                let start = &mut self.parsed.start;
                start.year = year;
                start.effective_year = effective_year;
                start.month = month;
                start.day = Some(num);
                self.parsed.reformat |= Reformat::BORROWED_DAY;
                tracing::debug!(day = num, "start of range borrows month and year from its end");
                return Ok(());
            }
            let end_year = i64::from(end.effective_year.unwrap_or_default());
            if end_year - i64::from(num) >= YEAR_RANGE_SPAN {
                return Err(DateError::MissingMonth);
            }
        }

        set_year(self.sub(slot), num);
        Ok(())
    }

    fn word(&mut self, slot: Slot, word: &str, prev: Option<Field<'_>>, more: bool) -> Result<(), DateError> {
        if let Some(month) = vocab::month(word) {
            let sub = self.sub(slot);
            if sub.month.is_some() {
                return Err(DateError::TooManyMonths);
            }
            sub.month = Some(month);
            return Ok(());
        }

        if let Some(modifier) = vocab::modifier(word) {
            let prev_is_modifier = prev.and_then(|f| f.as_word()).and_then(vocab::modifier).is_some();
            if prev_is_modifier {
                self.sub(slot).supplemental = Some(modifier);
                return Ok(());
            }
            self.sub(slot).modifier = Some(modifier);
            self.slot = slot.next();
            if self.slot.is_none() && more {
                return Err(DateError::TooManyParts);
            }
            return Ok(());
        }

        match word {
            "?" => {
                self.parsed.prepend_text("(?)");
                Ok(())
            }
            _ if vocab::is_ordinal_suffix(word) => Ok(()),
            _ if word.contains("wft") => Err(DateError::WftNotAccepted),
            _ => {
                tracing::debug!(word, "unrecognized field");
                Err(DateError::UnrecognizedText)
            }
        }
    }

    fn finish(&mut self, original: Option<&str>) -> Result<(), DateError> {
        if self.split_pending {
            return Err(DateError::IncompleteSplitYear);
        }

        let parsed = &mut self.parsed;

        // Both modifiers read: "Bet Jan and Mar 1850" gives the start its year.
        if self.slot.is_none() {
            let borrow_year = parsed.start.year.is_none()
                && parsed.end.year.is_some()
                && matches!((parsed.start.month, parsed.end.month), (Some(start), Some(end)) if start < end);
            if borrow_year {
                parsed.start.year = parsed.end.year.clone();
                parsed.start.effective_year = parsed.end.effective_year;
                parsed.reformat |= Reformat::BORROWED_YEAR;
            }
        }

        if let Some(original) = original {
            parsed.prepend_text(&format!("({original})"));
        }

        if parsed.start.year.is_some() && parsed.start.modifier.is_none() && parsed.end.modifier == Some(Modifier::To) {
            parsed.start.modifier = Some(Modifier::From);
            parsed.reformat |= Reformat::IMPLIED_FROM;
        }

        for sub in [&mut parsed.end, &mut parsed.start] {
            if sub.is_bc() {
                sub.effective_year = sub.effective_year.map(|y| -y);
            }
        }
        Ok(())
    }
}

fn set_year(sub: &mut SubDate, num: u32) {
    sub.year = Some(num.to_string());
    sub.effective_year = Some(num as i32);
}

/// Numeric value of a digit run; overlong runs saturate and fail later checks.
fn parse_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn is_day(num: u32) -> bool {
    (1..=31).contains(&num)
}

/// The tail replaces the last digits of `first`; that must give the next
/// year, or a 9 rolling over to 0 (`1699/00`, `1709/0`).
fn split_year_matches(first: u32, tail: &str) -> bool {
    let first_text = first.to_string();
    if tail.is_empty() || tail.len() > first_text.len() {
        return false;
    }
    let rebuilt = format!("{}{tail}", &first_text[..first_text.len() - tail.len()]);
    rebuilt.parse::<u32>().is_ok_and(|year| year == first + 1) || (first_text.ends_with('9') && tail.ends_with('0'))
}
