//! Format patterns and rendering.
//!
//! A pattern is an hour token (`h` or `hh`), an optional separator (`:` or
//! `.`), an optional minutes token (`mm`), an optional single space and an
//! optional period token. The period token is never matched against anything;
//! its casing and punctuation select the style of the rendered period.
//!
//! | pattern      | 1:55 pm      | 1:00 (no period) |
//! |--------------|--------------|------------------|
//! | `h:mm am`    | `1:55 pm`    | `1:00`           |
//! | `hh:mm`      | `01:55`      | `01:00`          |
//! | `h`          | `1`          | `1`              |
//! | `h.`         | `1.55`       | `1`              |
//! | `hpm`        | `1pm`        | `1`              |
//! | `h:mm a`     | `1:55 p`     | `1:00`           |
//! | `h.mm A`     | `1.55 P`     | `1.00`           |
//! | `hh:mm a.m.` | `01:55 p.m.` | `01:00`          |
//! | `h:mma`      | `1:55p`      | `1:00`           |

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::TimeError;
use crate::period::{Period, PERIOD_PATTERN};

/// Pattern used when none is given, and the canonical form checked by
/// [`Time::is_valid`](crate::Time::is_valid).
pub const DEFAULT_FORMAT: &str = "h:mm am";

static FORMAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^([hH]{{1,2}})([:.])?([mM]{{2}})?( ?)({PERIOD_PATTERN})?$"
    ))
    .expect("format grammar is a valid regex")
});

/// Options threaded through [`Time::format_with_options`](crate::Time::format_with_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Pattern used when the caller supplies none (or an empty one).
    pub default_pattern: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            default_pattern: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// The structural tokens of a format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    /// `hh` rather than `h`.
    pub padded_hours: bool,
    /// Character placed between hours and minutes.
    pub separator: Option<char>,
    /// Whether `mm` was present.
    pub minutes: bool,
    /// Whether a space precedes the period token.
    pub period_space: bool,
    /// The period token exactly as written in the pattern.
    pub period: Option<String>,
}

impl TimeFormat {
    /// Decompose `pattern` into its tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidFormat`] if the pattern does not match the
    /// format grammar.
    pub fn parse(pattern: &str) -> Result<Self, TimeError> {
        let Some(caps) = FORMAT_RE.captures(pattern) else {
            debug!(pattern, "format pattern rejected");
            return Err(TimeError::InvalidFormat(pattern.to_string()));
        };

        Ok(Self {
            padded_hours: caps.get(1).is_some_and(|m| m.len() == 2),
            separator: caps.get(2).and_then(|m| m.as_str().chars().next()),
            minutes: caps.get(3).is_some(),
            period_space: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
            period: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Render already-validated time fields.
    ///
    /// Minutes appear when the pattern has `mm`, or when it has a separator
    /// and the minutes are non-zero. The period appears only when both the
    /// pattern asks for one and the period is known.
    pub fn render(&self, hours: u32, minutes: u32, period: Period) -> String {
        let mut out = if self.padded_hours {
            format!("{hours:02}")
        } else {
            hours.to_string()
        };

        let show_minutes = self.minutes || (self.separator.is_some() && minutes != 0);
        if show_minutes {
            if let Some(sep) = self.separator {
                out.push(sep);
            }
            out.push_str(&format!("{minutes:02}"));
        }

        if let (Some(token), Some(text)) = (&self.period, period.as_str()) {
            if self.period_space {
                out.push(' ');
            }
            out.push_str(&styled_period(token, text));
        }

        out
    }
}

/// Copy the style of the pattern's period token onto `text` (`"am"`/`"pm"`).
///
/// The first letter comes from `text`, uppercased when the token's first
/// letter is uppercase; the rest of the token is copied verbatim.
fn styled_period(token: &str, text: &str) -> String {
    let mut token_chars = token.chars();
    let first_token = token_chars.next();
    let first = text.chars().next().unwrap_or_default();

    let mut out = String::with_capacity(token.len());
    match first_token {
        Some(c) if c.is_uppercase() => out.push(first.to_ascii_uppercase()),
        _ => out.push(first),
    }
    out.push_str(token_chars.as_str());
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pattern: &str, hours: u32, minutes: u32, period: Period) -> String {
        TimeFormat::parse(pattern)
            .unwrap()
            .render(hours, minutes, period)
    }

    // ── parse ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_default_format() {
        let f = TimeFormat::parse(DEFAULT_FORMAT).unwrap();
        assert!(!f.padded_hours);
        assert_eq!(f.separator, Some(':'));
        assert!(f.minutes);
        assert!(f.period_space);
        assert_eq!(f.period.as_deref(), Some("am"));
    }

    #[test]
    fn test_parse_minimal_format() {
        let f = TimeFormat::parse("h").unwrap();
        assert_eq!(
            f,
            TimeFormat {
                padded_hours: false,
                separator: None,
                minutes: false,
                period_space: false,
                period: None,
            }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_for_tokens() {
        let f = TimeFormat::parse("HH.MM A.M.").unwrap();
        assert!(f.padded_hours);
        assert_eq!(f.separator, Some('.'));
        assert!(f.minutes);
        assert_eq!(f.period.as_deref(), Some("A.M."));
    }

    #[test]
    fn test_parse_rejects_minutes_before_hours() {
        assert!(matches!(
            TimeFormat::parse("mm:h"),
            Err(TimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_characters() {
        for pattern in ["h:mm amx", "h:mm!", "hhh", "h:m", "h  am", "h-mm", ""] {
            assert!(TimeFormat::parse(pattern).is_err(), "pattern {pattern:?}");
        }
    }

    // ── render ──────────────────────────────────────────────────────────

    #[test]
    fn test_render_default() {
        assert_eq!(render(DEFAULT_FORMAT, 12, 0, Period::Am), "12:00 am");
        assert_eq!(render(DEFAULT_FORMAT, 1, 55, Period::Pm), "1:55 pm");
    }

    #[test]
    fn test_render_padded_hours() {
        assert_eq!(render("hh:mm", 1, 0, Period::Unknown), "01:00");
        assert_eq!(render("hh:mm", 11, 0, Period::Unknown), "11:00");
    }

    #[test]
    fn test_render_bare_hour_hides_minutes() {
        assert_eq!(render("h", 1, 55, Period::Pm), "1");
    }

    #[test]
    fn test_render_separator_reveals_nonzero_minutes() {
        assert_eq!(render("h:", 1, 55, Period::Unknown), "1:55");
        assert_eq!(render("h.", 1, 55, Period::Unknown), "1.55");
        assert_eq!(render("h:", 1, 0, Period::Unknown), "1");
    }

    #[test]
    fn test_render_minutes_token_without_separator() {
        assert_eq!(render("hmm", 12, 34, Period::Unknown), "1234");
    }

    #[test]
    fn test_render_period_styles() {
        assert_eq!(render("hpm", 1, 0, Period::Am), "1am");
        assert_eq!(render("h:mm a", 1, 55, Period::Pm), "1:55 p");
        assert_eq!(render("h.mm am", 1, 55, Period::Pm), "1.55 pm");
        assert_eq!(render("h.mm A", 1, 55, Period::Pm), "1.55 P");
        assert_eq!(render("hh:mm a.m.", 1, 55, Period::Am), "01:55 a.m.");
        assert_eq!(render("hh:mm A.M.", 1, 55, Period::Pm), "01:55 P.M.");
        assert_eq!(render("h:mma", 1, 55, Period::Pm), "1:55p");
    }

    #[test]
    fn test_render_unknown_period_drops_period_and_space() {
        assert_eq!(render("h:mm am", 1, 55, Period::Unknown), "1:55");
        assert_eq!(render("h am", 7, 0, Period::Unknown), "7");
    }

    #[test]
    fn test_render_space_without_period_token() {
        assert_eq!(render("h:mm ", 7, 5, Period::Pm), "7:05");
    }

    #[test]
    fn test_format_options_default() {
        assert_eq!(FormatOptions::default().default_pattern, "h:mm am");
    }
}
