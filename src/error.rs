//! Error types for date parsing and validation.

use crate::date_parts::{Month, ParsedDate};
use thiserror::Error;

/// Why a date was rejected. Display strings are the user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Numeric day/month order could not be decided. The year is still known.
    #[error("Ambiguous date")]
    AmbiguousDate { year: String },

    #[error("WFT estimates not accepted")]
    WftNotAccepted,

    #[error("Incomplete split year")]
    IncompleteSplitYear,

    #[error("Invalid split year")]
    InvalidSplitYear,

    #[error("Split year not valid for this year")]
    SplitYearOutOfRange,

    #[error("Split year valid only for Jan-Mar")]
    SplitYearWrongMonth,

    #[error("Too many numbers (days/years)")]
    TooManyNumbers,

    #[error("Too many months")]
    TooManyMonths,

    #[error("Too many parts")]
    TooManyParts,

    #[error("Invalid combination of modifiers")]
    InvalidCombinationOfModifiers,

    #[error("Modifier order not supported")]
    ModifierOrderNotSupported,

    #[error("Incorrect usage of bet/and")]
    IncorrectBetAndUsage,

    #[error("Unrecognized text")]
    UnrecognizedText,

    #[error("Incomplete date")]
    IncompleteDate,

    #[error("Invalid day for {0}")]
    InvalidDayForMonth(Month),

    #[error("Invalid date range")]
    InvalidDateRange,

    #[error("Future date")]
    FutureDate,

    #[error("Invalid day number")]
    InvalidDayNumber,

    #[error("Invalid year number")]
    InvalidYearNumber,

    #[error("Missing month")]
    MissingMonth,

    #[error("Invalid date format")]
    InvalidDateFormat,
}

/// A parse failure together with whatever was classified before it.
///
/// Year queries keep working off `partial` (for example the recovered year of
/// an ambiguous numeric date).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct Rejected {
    pub error: DateError,
    pub partial: ParsedDate,
}

impl Rejected {
    pub(crate) fn new(error: DateError, partial: ParsedDate) -> Self {
        Self { error, partial }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(DateError::InvalidDayForMonth(Month::Feb).to_string(), "Invalid day for Feb");
        assert_eq!(DateError::AmbiguousDate { year: "1900".into() }.to_string(), "Ambiguous date");
        assert_eq!(DateError::TooManyNumbers.to_string(), "Too many numbers (days/years)");
    }

    #[test]
    fn rejected_displays_inner_error() {
        let rejected = Rejected::new(DateError::UnrecognizedText, ParsedDate::default());
        assert_eq!(rejected.to_string(), "Unrecognized text");
    }
}
