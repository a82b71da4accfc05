//! Sanitizer and input grammar for 12-hour time literals.
//!
//! A literal is an hour (`1`-`12`, single digits optionally zero-padded),
//! optionally followed by two minute digits (`00`-`59`) that may be introduced
//! by a `:` or `.` separator, optionally followed by a period token. Matching
//! is case-insensitive and runs on the input with all whitespace removed, so
//! `"7"`, `"1234"`, `"12.14"`, `"7:05 p.m."` and `"09 AM"` are all literals.
//!
//! Non-string input is coerced through its [`Display`](std::fmt::Display)
//! rendering first, which is what lets the number `1234` read as 12:34.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::period::{Period, PERIOD_PATTERN};

static LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(10|11|12|0?[1-9])(?:[:.]?([0-5][0-9]))?({PERIOD_PATTERN})?$"
    ))
    .expect("literal grammar is a valid regex")
});

/// The tokens extracted from a literal that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLiteral {
    /// Hour on the 12-hour wheel, 1-12.
    pub hours: u32,
    /// Minutes, 0 when the literal carried none.
    pub minutes: u32,
    pub period: Period,
}

/// Render `input` as text and strip every whitespace character.
pub fn sanitize<T: Display + ?Sized>(input: &T) -> String {
    input
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Match `input` against the literal grammar.
///
/// Returns `None` when the sanitized input is not a literal; this is an
/// ordinary outcome, not an error.
///
/// ```
/// use ampm_time::literal::parse_literal;
/// use ampm_time::Period;
///
/// let lit = parse_literal(&1234).unwrap();
/// assert_eq!((lit.hours, lit.minutes, lit.period), (12, 34, Period::Unknown));
///
/// let lit = parse_literal("7:05 p.m.").unwrap();
/// assert_eq!((lit.hours, lit.minutes, lit.period), (7, 5, Period::Pm));
///
/// assert!(parse_literal("13:00").is_none());
/// ```
pub fn parse_literal<T: Display + ?Sized>(input: &T) -> Option<TimeLiteral> {
    let sanitized = sanitize(input);
    let Some(caps) = LITERAL_RE.captures(&sanitized) else {
        debug!(input = %sanitized, "time literal did not match grammar");
        return None;
    };

    let hours = caps.get(1)?.as_str().parse().ok()?;
    let minutes = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let period = caps
        .get(3)
        .map_or(Period::Unknown, |p| Period::from_token(p.as_str()));

    Some(TimeLiteral {
        hours,
        minutes,
        period,
    })
}

/// Whether `input` is a literal, without building a [`Time`](crate::Time).
pub fn is_valid_literal<T: Display + ?Sized>(input: &T) -> bool {
    LITERAL_RE.is_match(&sanitize(input))
}

// ── Tests ───────────────────────────────────────────────────────────────────
