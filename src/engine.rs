//! Date parsing engine.
//!
//! One input string goes through a strictly forward pipeline; no stage
//! touches the output of an earlier one:
//!
//! ```text
//! input ── normalize ──────────── (normalize.rs)
//!            - trailing note, phrases, wft
//!            - embedded numeric / dashed dates
//!            │
//!            v
//!          lex ────────────────── (lexer.rs)
//!            - digits | "/" | letters
//!            │
//!            v
//!          classify ───────────── (classify.rs)
//!            - right to left into end / start
//!            │
//!            v
//!        ParsedDate ── edit ───── (validate.rs, run lazily by EventDate)
//!            │
//!            └──── derived values (derive.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: case folding, free-text notes and rewriting of
//!   `yyyy-mm-dd`, `dd-mm-yyyy` and `dd-Mon-yyyy` into `dd mon yyyy`.
//! - `lexer.rs`: splits the normalized text into fields.
//! - `classify.rs`: assigns fields to modifier, day, month, year and era
//!   slots of the two sub-dates.
//! - `validate.rs`: consistency checks and canonical formatting.
//! - `derive.rs`: sort keys, year bounds and fuzzy day numbers.
//! - `metrics.rs`: optional timing and trace data for a run.
//!
//! ## Debugging
//!
//! Every stage logs through `tracing`; run the CLI with `GEDDATE_DEBUG=1`
//! (or `GEDDATE_LOG=geddate=trace`) to see rewrites and classified fields.

#[path = "engine/classify.rs"]
pub(crate) mod classify;
#[path = "engine/derive.rs"]
mod derive;
#[path = "engine/lexer.rs"]
pub(crate) mod lexer;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
pub(crate) mod normalize;
#[path = "engine/validate.rs"]
pub(crate) mod validate;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use metrics::{ParseRun, StageMetrics, Trace};

use crate::date_parts::ParsedDate;
use crate::error::Rejected;
use std::time::Instant;

/// Parse `input` into its component parts without validating them.
///
/// Rejections carry whatever was classified before the failure, so year
/// queries on `partial` still work.
///
/// # Example
/// ```
/// let parsed = geddate::parse("Bet 10 and 15 Oct 1823").unwrap();
/// assert_eq!(parsed.start.day, Some(10));
/// assert_eq!(parsed.date_sort_key(), 18231011);
/// ```
pub fn parse(input: &str) -> Result<ParsedDate, Rejected> {
    parse_with_metrics(input).parsed
}

/// Like [`parse`], also returning the normalized text, lexed fields and
/// per-stage timings.
pub fn parse_with_metrics(input: &str) -> ParseRun {
    let total_start = Instant::now();
    let mut trace = Trace::default();
    let mut metrics = StageMetrics::default();

    let normalize_start = Instant::now();
    let normalized = normalize::normalize(input);
    metrics.normalize = normalize_start.elapsed();

    let parsed = normalized.and_then(|normalized| {
        let seed = normalized.seed();
        let Some(date) = normalized.date.as_deref() else { return Ok(seed) };
        trace.normalized = Some(date.to_string());

        let lex_start = Instant::now();
        let fields = lexer::lex(date);
        metrics.lex = lex_start.elapsed();
        trace.fields = fields.iter().map(|f| f.to_string()).collect();

        let original = normalized.keep_original.then_some(normalized.bare.as_str());
        let classify_start = Instant::now();
        let parsed = classify::classify(&fields, seed, original);
        metrics.classify = classify_start.elapsed();
        parsed
    });

    metrics.total = total_start.elapsed();
    ParseRun { parsed, trace, metrics }
}
