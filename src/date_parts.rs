use std::fmt;

/// Calendar month, rendered as its canonical GEDCOM abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// Cumulative days before each month, ignoring leap years. Index 0 is unused
/// and index 13 is the length of the year.
const MONTH_OFFSETS: [i32; 14] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month for a 1-based number.
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Longest day accepted for the month. February always allows the 29th.
    pub fn max_day(self) -> u32 {
        match self {
            Month::Feb => 29,
            Month::Apr | Month::Jun | Month::Sep | Month::Nov => 30,
            _ => 31,
        }
    }

    /// Days of the (non-leap) year before the first of this month.
    pub fn day_offset(self) -> i32 {
        MONTH_OFFSETS[self.number() as usize]
    }

    /// Days of the (non-leap) year up to and including the last of this month.
    pub fn end_offset(self) -> i32 {
        MONTH_OFFSETS[self.number() as usize + 1]
    }

    /// Whether a split (double-dated) year may be written with this month.
    pub fn allows_split_year(self) -> bool {
        matches!(self, Month::Jan | Month::Feb | Month::Mar)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Date modifiers, one canonical spelling per concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    About,
    Calculated,
    Estimated,
    Before,
    After,
    From,
    To,
    Between,
    And,
    Interpreted,
}

impl Modifier {
    /// Canonical spelling. `to` and `and` stay lower-case because they sit in
    /// the middle of a range.
    pub fn canonical(self) -> &'static str {
        match self {
            Modifier::About => "Abt",
            Modifier::Calculated => "Cal",
            Modifier::Estimated => "Est",
            Modifier::Before => "Bef",
            Modifier::After => "Aft",
            Modifier::From => "From",
            Modifier::To => "to",
            Modifier::Between => "Bet",
            Modifier::And => "and",
            Modifier::Interpreted => "Int",
        }
    }

    /// Only these may follow another modifier (e.g. `Bef abt 1850`).
    pub fn is_supplemental_kind(self) -> bool {
        matches!(self, Modifier::About | Modifier::Calculated | Modifier::Estimated)
    }

    /// The date gives no lower bound.
    pub fn opens_lower_bound(self) -> bool {
        matches!(self, Modifier::Before | Modifier::To)
    }

    /// The date gives no upper bound (when it is the last sub-date).
    pub fn opens_upper_bound(self) -> bool {
        matches!(self, Modifier::After | Modifier::From)
    }

    /// Sort keys are pushed one unit later for these.
    pub fn shifts_later(self) -> bool {
        matches!(self, Modifier::After | Modifier::Between | Modifier::From)
    }

    /// About/Estimated widen the fuzzy day bounds. Calculated does not.
    pub fn is_approximate(self) -> bool {
        matches!(self, Modifier::About | Modifier::Estimated)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Bc,
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::Bc => f.write_str("BC"),
        }
    }
}

/// One sub-date: a single date, or one end of a range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubDate {
    pub modifier: Option<Modifier>,
    /// Second modifier following the first (`Bef abt 1850`), shown lower-case.
    pub supplemental: Option<Modifier>,
    pub day: Option<u32>,
    pub month: Option<Month>,
    /// Year as written after normalization, e.g. `1850` or `1699/00`.
    pub year: Option<String>,
    /// Resolved year: split years count as the later year, BC is negative.
    pub effective_year: Option<i32>,
    pub era: Option<Era>,
}

impl SubDate {
    /// Whether anything that needs a year to make sense is set.
    pub fn is_populated(&self) -> bool {
        self.modifier.is_some() || self.year.is_some() || self.month.is_some() || self.day.is_some() || self.era.is_some()
    }

    pub fn is_split_year(&self) -> bool {
        self.year.as_deref().is_some_and(|y| y.contains('/'))
    }

    pub fn is_bc(&self) -> bool {
        self.era == Some(Era::Bc)
    }

    /// The year as written, with its era suffix.
    pub fn year_with_era(&self) -> Option<String> {
        let year = self.year.as_ref()?;
        Some(match self.era {
            Some(era) => format!("{year} {era}"),
            None => year.clone(),
        })
    }
}

bitflags::bitflags! {
    /// Rewrites that change the input enough that a person should review the result.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Reformat: u16 {
        /// `yyyy-mm-dd` became `dd Mon yyyy`.
        const ISO_NUMERIC          = 1 << 0;
        /// `dd-mm-yyyy` / `mm-dd-yyyy` resolved to `dd Mon yyyy`.
        const DAY_MONTH_NUMERIC    = 1 << 1;
        /// `[/dd?]` uncertainty dropped, original kept as a note.
        const UNCERTAIN_SPLIT_YEAR = 1 << 2;
        /// A dash became `to` or `and`.
        const DASH_RANGE           = 1 << 3;
        /// `b.c.` was read as `bc`.
        const DOTTED_ERA           = 1 << 4;
        /// The start of a range took its year and month from the end.
        const BORROWED_DAY         = 1 << 5;
        /// The start of a range took its year from the end.
        const BORROWED_YEAR        = 1 << 6;
        /// `From` was added in front of an unopened `to`.
        const IMPLIED_FROM         = 1 << 7;
    }
}

/// Classified date: a single date lives in `end`; a range fills `start` as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDate {
    pub end: SubDate,
    pub start: SubDate,
    /// Preserved free text such as `(in infancy)` or `(?)`.
    pub text: Option<String>,
    pub reformat: Reformat,
}

impl ParsedDate {
    pub fn is_range(&self) -> bool {
        self.start.modifier.is_some() || self.start.year.is_some()
    }

    /// The sub-date that begins the date: `start` for ranges, otherwise `end`.
    /// `None` when neither carries a year.
    pub(crate) fn leading(&self) -> Option<&SubDate> {
        if self.start.effective_year.is_some() {
            Some(&self.start)
        } else if self.end.effective_year.is_some() {
            Some(&self.end)
        } else {
            None
        }
    }

    /// Prepend a note to the preserved text.
    pub(crate) fn prepend_text(&mut self, note: &str) {
        self.text = Some(match self.text.take() {
            Some(existing) => format!("{note} {existing}"),
            None => note.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_round_trip() {
        for (idx, month) in Month::ALL.iter().enumerate() {
            assert_eq!(Month::from_number(idx as u32 + 1), Some(*month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn month_offsets_ignore_leap_years() {
        assert_eq!(Month::Jan.day_offset(), 0);
        assert_eq!(Month::Mar.day_offset(), 59);
        assert_eq!(Month::Dec.end_offset(), 365);
        assert_eq!(Month::Feb.max_day(), 29);
        assert_eq!(Month::Sep.max_day(), 30);
    }

    #[test]
    fn prepend_text_keeps_existing_note() {
        let mut parsed = ParsedDate { text: Some("(note)".to_string()), ..Default::default() };
        parsed.prepend_text("(?)");
        assert_eq!(parsed.text.as_deref(), Some("(?) (note)"));
    }
}
