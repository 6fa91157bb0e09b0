//! Derived values: year bounds, sort keys, ISO text and fuzzy day numbers.
//!
//! Everything here reads the classified slots directly, so it works on the
//! partial result of a rejected parse as well. Day arithmetic is approximate
//! on purpose: no leap years, no calendar switch.

use super::validate::Pairing;
use crate::date_parts::{Modifier, Month, ParsedDate, SubDate};

/// Days subtracted for `Bef` and added for `Aft`.
const OPEN_BOUND_DAYS: i32 = 3650;

/// Widening applied to About/Estimated dates, by known precision.
const FUZZ_DAY: i32 = 10;
const FUZZ_MONTH: i32 = 91;
const FUZZ_YEAR: i32 = 365;

impl ParsedDate {
    /// Earliest year the date could mean; `None` when it has no lower bound.
    pub fn earliest_year(&self) -> Option<i32> {
        [&self.start, &self.end]
            .into_iter()
            .filter(|sub| !sub.modifier.is_some_and(Modifier::opens_lower_bound))
            .find_map(|sub| sub.effective_year)
    }

    /// Latest year the date could mean; `None` when it has no upper bound.
    pub fn latest_year(&self) -> Option<i32> {
        if self.end.modifier.is_some_and(Modifier::opens_upper_bound) {
            return None;
        }
        self.end.effective_year
    }

    /// `yyyymmdd` as an integer with `00` for missing parts, shifted one unit
    /// by the modifier. Ranges use their start. `0` without a year.
    pub fn date_sort_key(&self) -> i32 {
        let Some(sub) = self.leading() else { return 0 };
        let Some(year) = sub.effective_year else { return 0 };
        let key = sort_key(year, sub.month.map_or(0, Month::number), sub.day.unwrap_or(0));

        let Some(modifier) = sub.modifier else { return key };
        let earlier = modifier.opens_lower_bound();
        let later = modifier.shifts_later();

        match (sub.month, sub.day) {
            (Some(m), Some(day)) => {
                if earlier {
                    if day == 1 {
                        match m.number().checked_sub(1).and_then(Month::from_number) {
                            Some(prev) => sort_key(year, prev.number(), prev.max_day()),
                            None => sort_key(year.saturating_sub(1), 12, 31),
                        }
                    } else {
                        key.saturating_sub(1)
                    }
                } else if later {
                    // A 31st rolls over in any month.
                    if day == 31 || day == m.max_day() {
                        match Month::from_number(m.number() + 1) {
                            Some(next) => sort_key(year, next.number(), 1),
                            None => sort_key(year.saturating_add(1), 1, 1),
                        }
                    } else {
                        key.saturating_add(1)
                    }
                } else {
                    key
                }
            }
            (Some(m), None) => {
                if earlier {
                    if m.number() == 1 { sort_key(year.saturating_sub(1), 12, 0) } else { key.saturating_sub(100) }
                } else if later {
                    if m.number() == 12 { sort_key(year.saturating_add(1), 1, 0) } else { key.saturating_add(100) }
                } else {
                    key
                }
            }
            _ if earlier => key.saturating_sub(10_000),
            _ if later => key.saturating_add(10_000),
            _ => key,
        }
    }

    /// Zero-padded `yyyy[mm[dd]]` of the start (or only) date, unshifted.
    /// Empty for BC dates and dates without a year.
    pub fn date_string_key(&self) -> String {
        let Some(sub) = self.leading() else { return String::new() };
        let Some(year) = sub.effective_year else { return String::new() };
        if sub.is_bc() {
            return String::new();
        }
        let mut key = format!("{year:04}");
        if let Some(month) = sub.month {
            key.push_str(&format!("{:02}", month.number()));
        }
        if let Some(day) = sub.day {
            key.push_str(&format!("{day:02}"));
        }
        key
    }

    /// The string key as `yyyy[-mm[-dd]]`.
    pub fn iso_date(&self) -> String {
        let key = self.date_string_key();
        if key.len() < 4 {
            return key;
        }
        let mut iso = key[..4].to_string();
        if key.len() >= 6 {
            iso.push('-');
            iso.push_str(&key[4..6]);
        }
        if key.len() == 8 {
            iso.push('-');
            iso.push_str(&key[6..8]);
        }
        iso
    }

    /// Lowest plausible day number of the start (or only) date.
    pub fn min_day(&self) -> i32 {
        let Some(sub) = self.leading() else { return 0 };
        let Some(year) = sub.effective_year else { return 0 };
        let days = year.saturating_mul(365).saturating_add(match (sub.month, sub.day) {
            (Some(month), Some(day)) => month.day_offset() + day as i32,
            (Some(month), None) => month.day_offset() + 1,
            (None, _) => 1,
        });
        match sub.modifier {
            Some(Modifier::Before) => days.saturating_sub(OPEN_BOUND_DAYS),
            Some(m) if m.is_approximate() => days.saturating_sub(fuzz(sub)),
            _ => days,
        }
    }

    /// Highest plausible day number of the end date.
    pub fn max_day(&self) -> i32 {
        let sub = &self.end;
        let Some(year) = sub.effective_year else { return 0 };
        let days = year.saturating_mul(365).saturating_add(match (sub.month, sub.day) {
            (Some(month), Some(day)) => month.day_offset() + day as i32,
            (Some(month), None) => month.end_offset(),
            (None, _) => 365,
        });
        match sub.modifier {
            Some(Modifier::After) => days.saturating_add(OPEN_BOUND_DAYS),
            Some(m) if m.is_approximate() => days.saturating_add(fuzz(sub)),
            _ => days,
        }
    }

    /// End year as written (split form kept), with ` BC` when set.
    pub fn year_only(&self) -> Option<String> {
        self.end.year_with_era()
    }

    pub fn effective_year(&self) -> Option<i32> {
        self.end.effective_year
    }

    /// Start year of a range, or the only year.
    pub fn effective_start_year(&self) -> Option<i32> {
        self.start.effective_year.or(self.end.effective_year)
    }

    /// Years only, with modifiers: `Bet 1850 & 1855`, `Abt 1850`. A range
    /// inside one year collapses to that year.
    pub fn year_range(&self, discrete: bool) -> Option<String> {
        let end_year = self.end.year.as_ref()?;
        if self.start.year.as_ref() == Some(end_year) && self.start.era == self.end.era {
            return self.end.year_with_era();
        }

        let pairing = Pairing::resolve(self, discrete);
        let mut parts: Vec<String> = Vec::with_capacity(8);
        push_years(&mut parts, &self.start, pairing.start_label());
        let end_label = match pairing.end {
            Some(Modifier::And) => Some("&"),
            _ => pairing.end_label(),
        };
        push_years(&mut parts, &self.end, end_label);
        Some(parts.join(" "))
    }
}

/// `yyyymmdd` as one integer, saturating for years no calendar reaches.
fn sort_key(year: i32, month: u32, day: u32) -> i32 {
    year.saturating_mul(10_000).saturating_add((month * 100 + day) as i32)
}

fn fuzz(sub: &SubDate) -> i32 {
    match (sub.month, sub.day) {
        (_, Some(_)) => FUZZ_DAY,
        (Some(_), None) => FUZZ_MONTH,
        (None, None) => FUZZ_YEAR,
    }
}

fn push_years(parts: &mut Vec<String>, sub: &SubDate, label: Option<&str>) {
    parts.extend(label.map(str::to_string));
    parts.extend(sub.supplemental.map(|m| m.canonical().to_lowercase()));
    parts.extend(sub.year_with_era());
}
