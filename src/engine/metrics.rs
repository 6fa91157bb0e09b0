//! Stage timings and intermediate results of one parse.
//!
//! Collected only by [`super::parse_with_metrics`]; the plain
//! [`super::parse`] path discards them. Used by the CLI report and for
//! looking at what the normalizer and lexer actually produced.

use crate::date_parts::ParsedDate;
use crate::error::Rejected;
use std::time::Duration;

/// Elapsed time per pipeline stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct StageMetrics {
    pub normalize: Duration,
    pub lex: Duration,
    pub classify: Duration,
    /// Whole parse, stages plus glue.
    pub total: Duration,
}

/// What the early stages turned the input into.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    /// Folded and rewritten text handed to the lexer. `None` when the input
    /// was a no-date phrase or normalization failed.
    pub normalized: Option<String>,
    /// Lexed fields, left to right.
    pub fields: Vec<String>,
}

/// Parse output bundled with its trace and timings.
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub parsed: Result<ParsedDate, Rejected>,
    pub trace: Trace,
    pub metrics: StageMetrics,
}
