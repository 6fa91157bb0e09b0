//! Pre-normalization and embedded-date rewriting.
//!
//! Turns raw input into the folded, canonicalised text the lexer expects:
//!
//! ```text
//! raw ── strip trailing "(note)" ── fold case/space ── phrase? ──▶ empty date
//!                                                     │
//!        wft est? ──▶ WftNotAccepted ◀─────────────────┤
//!                                                     v
//!        yyyy-mm-dd ─▶ dd-mm-yyyy ─▶ dd-Mon-yyyy      (embedded dates)
//!                                                     v
//!        [/dd?] ─▶ dash ranges ─▶ b.c.                (cleanup)
//!                                                     v
//!                                               lexer input
//! ```
//!
//! Each embedded-date pass looks at no more than two matches and splices the
//! replacements back right-to-left so earlier byte offsets stay valid.

use crate::date_parts::{Month, ParsedDate, Reformat};
use crate::error::{DateError, Rejected};
use crate::rules::phrases;
use regex::{Captures, Regex};

/// Output of pre-normalization.
#[derive(Debug, Clone, Default)]
pub(crate) struct Normalized {
    /// Folded, rewritten date text; `None` when the whole input was a phrase
    /// such as `unknown`.
    pub date: Option<String>,
    /// Input without its trailing note, as typed (trimmed).
    pub bare: String,
    /// Preserved text collected so far.
    pub note: Option<String>,
    pub reformat: Reformat,
    /// Keep `bare` as a parenthetical note after classification.
    pub keep_original: bool,
}

impl Normalized {
    /// Seed for the classifier carrying the note and flags gathered here.
    pub fn seed(&self) -> ParsedDate {
        ParsedDate { text: self.note.clone(), reformat: self.reformat, ..ParsedDate::default() }
    }
}

/// Run every pre-normalization step over `input`.
pub(crate) fn normalize(input: &str) -> Result<Normalized, Rejected> {
    let mut out = Normalized::default();

    // A trailing "(...)" is free text, kept apart from the date.
    match input.split_once('(') {
        Some((date, rest)) if input.trim_end().ends_with(')') => {
            out.note = Some(format!("({}", rest.trim()));
            out.bare = date.trim().to_string();
        }
        _ => out.bare = input.trim().to_string(),
    }

    let folded = fold(&out.bare);

    if let Some(note) = phrases::lookup(&folded) {
        if let Some(note) = note {
            out.note = Some(match out.note.take() {
                Some(existing) => format!("{note} {existing}"),
                None => note.to_string(),
            });
        }
        tracing::debug!(input, "whole-string phrase, no date");
        return Ok(out);
    }

    if folded.contains("wft est") {
        return Err(Rejected::new(DateError::WftNotAccepted, out.seed()));
    }

    let date = rewrite_iso_dates(&folded, &mut out.reformat);
    let date = match rewrite_numeric_dates(&date, &mut out.reformat) {
        Ok(date) => date,
        Err(error) => {
            let mut partial = out.seed();
            if let DateError::AmbiguousDate { year } = &error {
                partial.end.effective_year = year.parse().ok();
                partial.end.year = Some(year.clone());
            }
            return Err(Rejected::new(error, partial));
        }
    };
    let date = rewrite_dashed_months(&date);

    let date = drop_split_year_uncertainty(&date, &mut out);
    let date = rewrite_dash_range(&date, &mut out.reformat);
    let date = rewrite_dotted_era(&date, &mut out.reformat);

    tracing::debug!(input, normalized = %date, reformat = ?out.reformat, "normalized");
    out.date = Some(date);
    Ok(out)
}

/// Lower-case, trim and collapse whitespace runs.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_num_month(n: u32) -> bool {
    (1..=12).contains(&n)
}

fn is_day(n: u32) -> bool {
    (1..=31).contains(&n)
}

fn num(text: &str) -> u32 {
    text.parse().unwrap_or(u32::MAX)
}

/// `dd mon yyyy`, folded like the rest of the text.
fn gedcom(day: &str, month: u32, year: &str) -> Option<String> {
    Month::from_number(month).map(|m| format!("{day} {} {year}", m.abbrev().to_lowercase()))
}

/// Replace up to two matches of `re`, last match first. `rewrite` returns
/// `Ok(None)` to leave a match as it is.
fn splice_matches<F>(text: &str, re: &Regex, mut rewrite: F) -> Result<String, DateError>
where
    F: FnMut(&Captures<'_>) -> Result<Option<String>, DateError>,
{
    let mut edits = Vec::with_capacity(2);
    for caps in re.captures_iter(text).take(2) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(replacement) = rewrite(&caps)? {
            edits.push((whole.start(), whole.end(), replacement));
        }
    }

    let mut out = text.to_string();
    for (start, end, replacement) in edits.into_iter().rev() {
        out.replace_range(start..end, &replacement);
    }
    Ok(out)
}

/// `yyyy-mm-dd` (any of `-./` as separator). The middle group is read as the
/// month when it can be; otherwise `yyyy-dd-mm` is tried.
fn rewrite_iso_dates(date: &str, reformat: &mut Reformat) -> String {
    let re = regex!(r"([0-9]{3,4})[-./]([0-9]{1,2})[-./]([0-9]{1,2})");
    let rewritten = splice_matches(date, re, |caps| {
        let (year, middle, last) = (&caps[1], &caps[2], &caps[3]);
        let replacement = if is_num_month(num(middle)) {
            gedcom(last, num(middle), year)
        } else if is_num_month(num(last)) && is_day(num(middle)) {
            gedcom(middle, num(last), year)
        } else {
            None
        };
        if let Some(text) = &replacement {
            tracing::debug!(from = &caps[0], to = %text, "rewrote year-first numeric date");
            *reformat |= Reformat::ISO_NUMERIC;
        }
        Ok(replacement)
    });
    rewritten.unwrap_or_else(|_| date.to_string())
}

/// `dd-mm-yyyy` or `mm-dd-yyyy`. Only rewritten when the order is unambiguous.
fn rewrite_numeric_dates(date: &str, reformat: &mut Reformat) -> Result<String, DateError> {
    let re = regex!(r"([0-9]{1,2})[-./]([0-9]{1,2})[-./]([0-9]{3,4})");
    splice_matches(date, re, |caps| {
        let (first, second, year) = (&caps[1], &caps[2], &caps[3]);
        let (a, b) = (num(first), num(second));
        let replacement = if !is_num_month(a) && is_num_month(b) {
            gedcom(first, b, year)
        } else if !is_num_month(b) && is_num_month(a) {
            gedcom(second, a, year)
        } else if a == b && is_num_month(a) {
            gedcom(second, a, year)
        } else {
            tracing::debug!(date = &caps[0], "day and month order is ambiguous");
            return Err(DateError::AmbiguousDate { year: year.to_string() });
        };
        *reformat |= Reformat::DAY_MONTH_NUMERIC;
        Ok(replacement)
    })
}

/// `dd-Mon-yyyy` becomes `dd Mon yyyy`. Needs all three parts so other dashes
/// are left for the range rewrite.
fn rewrite_dashed_months(date: &str) -> String {
    let re = regex!(r"[0-9]{1,2}-\p{L}+-[0-9]{3,4}");
    splice_matches(date, re, |caps| Ok(Some(caps[0].replace('-', " ")))).unwrap_or_else(|_| date.to_string())
}

/// `[/1?]` or `[/91?]`: the uncertainty is dropped from the date and the
/// original input is kept as a note instead.
fn drop_split_year_uncertainty(date: &str, out: &mut Normalized) -> String {
    let re = regex!(r"\[/[0-9]{1,2}\?\]");
    if !re.is_match(date) {
        return date.to_string();
    }
    out.keep_original = true;
    out.reformat |= Reformat::UNCERTAIN_SPLIT_YEAR;
    re.replace_all(date, |caps: &Captures<'_>| caps[0].replace('?', "")).into_owned()
}

/// `1850-1855` is a range: `bet ... and ...` if the text already says
/// between, otherwise `from ... to ...`.
fn rewrite_dash_range(date: &str, reformat: &mut Reformat) -> String {
    if !date.contains('-') {
        return date.to_string();
    }
    *reformat |= Reformat::DASH_RANGE;
    if ["bet", "btw", "between"].iter().any(|w| date.contains(w)) {
        return date.replace('-', " and ");
    }
    let date = date.replace('-', " to ");
    if date.contains("from") || date.contains("frm") { date } else { format!("from {date}") }
}

/// `b.c.` anywhere but the very start is the era; at the start it may be
/// "before circa".
fn rewrite_dotted_era(date: &str, reformat: &mut Reformat) -> String {
    if !date.contains("b.c.") {
        return date.to_string();
    }
    *reformat |= Reformat::DOTTED_ERA;
    let split = date.chars().next().map_or(0, char::len_utf8);
    let (head, rest) = date.split_at(split);
    format!("{head}{}", rest.replace("b.c.", "bc"))
}
