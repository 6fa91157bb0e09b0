//! Parser, validator and sort-key engine for genealogical event dates.
//!
//! Accepts GEDCOM-style dates as people actually type them (`Abt 1850`,
//! `Bet 10 and 15 Oct 1823`, `1699/00`, `15-03-1850`, `vers 1750`, ...) in
//! several languages, and turns each into canonical text plus values that
//! sort and compare.
//!
//! Start with [`EventDate`]; [`parse`] exposes the parse stage alone.

#[macro_use]
mod macros;
mod api;
mod date_parts;
mod engine;
mod error;
mod rules;

pub use api::{Context, EventDate, Explanation, REFERENCE_TZ};
pub use date_parts::{Era, Modifier, Month, ParsedDate, Reformat, SubDate};
pub use engine::{ParseRun, StageMetrics, Trace, parse, parse_with_metrics};
pub use error::{DateError, Rejected, Result};
pub use rules::events::{DISCRETE_EVENT_TYPES, is_discrete};
