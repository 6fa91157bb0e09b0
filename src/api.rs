use crate::date_parts::ParsedDate;
use crate::engine::{self, ParseRun, validate};
use crate::error::{DateError, Rejected};
use crate::rules::events;
use chrono::{NaiveDate, Utc};
use once_cell::sync::OnceCell;
use std::time::{Duration, Instant};

/// Zone whose calendar decides what "today" is. It is among the first to
/// start a new day, so a date that is today anywhere is never in the future.
pub const REFERENCE_TZ: chrono_tz::Tz = chrono_tz::Pacific::Auckland;

/// Validation context.
///
/// Holds the reference date for the future-date check. Validation reads it
/// each time an [`EventDate`] is edited, so a long-running process sees the
/// calendar move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The current date in [`REFERENCE_TZ`].
    pub today: NaiveDate,
}

impl Context {
    /// Context for the current date in [`REFERENCE_TZ`].
    pub fn now() -> Self {
        Self { today: Utc::now().with_timezone(&REFERENCE_TZ).date_naive() }
    }

    /// Context pinned to `today`.
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // Fixed so unit tests never depend on the clock.
            Self { today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default() }
        } else {
            Self::now()
        }
    }
}

/// One genealogical event date.
///
/// Parsing happens in [`EventDate::new`]; validation and formatting run on
/// the first query that needs them and are cached for the life of the value.
/// Year, key and day-number queries work off the parsed parts and stay
/// available when validation fails.
///
/// # Example
/// ```
/// use geddate::EventDate;
///
/// let date = EventDate::new("abt 15 jan 1850", None);
/// assert_eq!(date.format_date(), "Abt 15 Jan 1850");
/// assert_eq!(date.earliest_year(), Some(1850));
/// assert_eq!(date.date_sort_key(), 18500115);
/// ```
#[derive(Debug)]
pub struct EventDate {
    original: String,
    discrete: bool,
    /// Injected reference date; `None` reads the clock at validation time.
    today: Option<NaiveDate>,
    parsed: Result<ParsedDate, Rejected>,
    edited: OnceCell<Result<String, DateError>>,
}

impl EventDate {
    /// Parse `text`. `event_type` marks instant-only events (births, deaths,
    /// marriages, ...) whose `From ... to` ranges are read as `Bet ... and`.
    pub fn new(text: &str, event_type: Option<&str>) -> Self {
        Self::build(text, event_type, None)
    }

    /// Like [`EventDate::new`] with an explicit reference date.
    pub fn with_context(text: &str, event_type: Option<&str>, context: &Context) -> Self {
        Self::build(text, event_type, Some(context.today))
    }

    fn build(text: &str, event_type: Option<&str>, today: Option<NaiveDate>) -> Self {
        let discrete = event_type.is_some_and(events::is_discrete);
        Self { original: text.to_string(), discrete, today, parsed: engine::parse(text), edited: OnceCell::new() }
    }

    fn edit(&self) -> &Result<String, DateError> {
        self.edited.get_or_init(|| match &self.parsed {
            Ok(parsed) => {
                let today = self.today.unwrap_or_else(|| Context::now().today);
                validate::edit(parsed, self.discrete, today)
            }
            Err(rejected) => Err(rejected.error.clone()),
        })
    }

    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Canonical form, or the original text when the date is invalid.
    pub fn format_date(&self) -> &str {
        match self.edit() {
            Ok(formatted) => formatted,
            Err(_) => &self.original,
        }
    }

    pub fn edit_ok(&self) -> bool {
        self.edit().is_ok()
    }

    pub fn error(&self) -> Option<&DateError> {
        self.edit().as_ref().err()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Whether the input was rewritten enough that a person should check it.
    pub fn significant_reformat(&self) -> bool {
        !self.parts().reformat.is_empty()
    }

    /// Whether the event type is instant-only.
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    /// Parsed component parts, partial when parsing failed.
    pub fn parts(&self) -> &ParsedDate {
        match &self.parsed {
            Ok(parsed) => parsed,
            Err(rejected) => &rejected.partial,
        }
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.parts().earliest_year()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.parts().latest_year()
    }

    pub fn year_only(&self) -> Option<String> {
        self.parts().year_only()
    }

    pub fn year_range(&self) -> Option<String> {
        self.parts().year_range(self.discrete)
    }

    /// Year used for comparison: split years count as the later year, BC is
    /// negative. Use [`EventDate::year_only`] for the year as written.
    pub fn effective_year(&self) -> Option<i32> {
        self.parts().effective_year()
    }

    /// Like [`EventDate::effective_year`], for the start of a range.
    pub fn effective_start_year(&self) -> Option<i32> {
        self.parts().effective_start_year()
    }

    pub fn date_sort_key(&self) -> i32 {
        self.parts().date_sort_key()
    }

    pub fn date_string_key(&self) -> String {
        self.parts().date_string_key()
    }

    pub fn iso_date(&self) -> String {
        self.parts().iso_date()
    }

    pub fn min_day(&self) -> i32 {
        self.parts().min_day()
    }

    pub fn max_day(&self) -> i32 {
        self.parts().max_day()
    }

    /// Re-run the pipeline with tracing and timings. Validation is timed
    /// separately and does not touch the cached result.
    pub fn explain(&self) -> Explanation {
        let run = engine::parse_with_metrics(&self.original);
        let validate_start = Instant::now();
        let edited = match &run.parsed {
            Ok(parsed) => {
                let today = self.today.unwrap_or_else(|| Context::now().today);
                validate::edit(parsed, self.discrete, today)
            }
            Err(rejected) => Err(rejected.error.clone()),
        };
        let validate = validate_start.elapsed();
        Explanation { run, edited, validate }
    }
}

/// Result of [`EventDate::explain`].
#[derive(Debug, Clone)]
pub struct Explanation {
    pub run: ParseRun,
    /// Canonical text or the error, as [`EventDate::format_date`] would see it.
    pub edited: Result<String, DateError>,
    pub validate: Duration,
}

impl Explanation {
    /// Parse stages plus validation.
    pub fn total(&self) -> Duration {
        self.run.metrics.total + self.validate
    }
}
