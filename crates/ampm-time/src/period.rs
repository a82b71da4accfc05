//! The AM/PM designator of a 12-hour clock time.
//!
//! A period token is a single `a` or `p`, optionally followed by `.`, then an
//! optional `m` with its own optional `.`. Matching is case-insensitive, so
//! `a`, `PM`, `a.m.` and `P.M` are all accepted.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::literal::sanitize;

/// Period token grammar, shared with the literal and format grammars.
pub(crate) const PERIOD_PATTERN: &str = r"[aApP]\.?(?:[mM]\.?)?";

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{PERIOD_PATTERN}$")).expect("period grammar is a valid regex")
});

/// Which half of the day a [`Time`](crate::Time) falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Am,
    Pm,
    /// The source text carried no period token.
    #[default]
    Unknown,
}

impl Period {
    /// Resolve a period token, yielding [`Period::Unknown`] when it does not
    /// match the period grammar.
    ///
    /// ```
    /// use ampm_time::Period;
    ///
    /// assert_eq!(Period::from_token("P.M."), Period::Pm);
    /// assert_eq!(Period::from_token("a"), Period::Am);
    /// assert_eq!(Period::from_token("noon"), Period::Unknown);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let token = sanitize(token);
        if !PERIOD_RE.is_match(&token) {
            return Period::Unknown;
        }
        match token.as_bytes().first() {
            Some(b'a' | b'A') => Period::Am,
            Some(b'p' | b'P') => Period::Pm,
            _ => Period::Unknown,
        }
    }

    /// The period a 0-23 hour belongs to.
    pub fn from_resolved_hour(hour: u32) -> Self {
        if hour > 11 {
            Period::Pm
        } else {
            Period::Am
        }
    }

    /// Whether a 0-23 hour is consistent with this period. Unknown admits any hour.
    pub fn admits(self, hour: u32) -> bool {
        match self {
            Period::Am => hour < 12,
            Period::Pm => hour >= 12,
            Period::Unknown => true,
        }
    }

    /// Lowercase abbreviation, or `None` when the period is unknown.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Period::Am => Some("am"),
            Period::Pm => Some("pm"),
            Period::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        self != Period::Unknown
    }
}

impl FromStr for Period {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Period::from_token(s) {
            Period::Unknown => Err(TimeError::InvalidPeriod(format!("'{s}'"))),
            period => Ok(period),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_accepts_all_styles() {
        for token in ["a", "A", "am", "AM", "a.", "a.m", "a.m.", "A.M.", "aM"] {
            assert_eq!(Period::from_token(token), Period::Am, "token {token:?}");
        }
        for token in ["p", "P", "pm", "PM", "p.m.", "P.M"] {
            assert_eq!(Period::from_token(token), Period::Pm, "token {token:?}");
        }
    }

    #[test]
    fn test_from_token_ignores_whitespace() {
        assert_eq!(Period::from_token(" p m "), Period::Pm);
    }

    #[test]
    fn test_from_token_rejects_garbage() {
        for token in ["", "m", "x", "amx", "a..m", "pmm", "noon"] {
            assert_eq!(Period::from_token(token), Period::Unknown, "token {token:?}");
        }
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("am".parse::<Period>().unwrap(), Period::Am);
        assert!(matches!(
            "later".parse::<Period>(),
            Err(TimeError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_from_resolved_hour() {
        assert_eq!(Period::from_resolved_hour(0), Period::Am);
        assert_eq!(Period::from_resolved_hour(11), Period::Am);
        assert_eq!(Period::from_resolved_hour(12), Period::Pm);
        assert_eq!(Period::from_resolved_hour(23), Period::Pm);
    }

    #[test]
    fn test_admits() {
        assert!(Period::Am.admits(0));
        assert!(!Period::Am.admits(12));
        assert!(Period::Pm.admits(12));
        assert!(!Period::Pm.admits(11));
        assert!(Period::Unknown.admits(5));
        assert!(Period::Unknown.admits(17));
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::Am.to_string(), "am");
        assert_eq!(Period::Pm.to_string(), "pm");
        assert_eq!(Period::Unknown.to_string(), "");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Period::Pm).unwrap(), "\"pm\"");
        let unknown: Period = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(unknown, Period::Unknown);
    }
}
