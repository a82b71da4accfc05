//! The 12-hour clock time value.
//!
//! A [`Time`] holds an hour, minutes and a [`Period`]. Fields can be set to
//! anything; validity is a derived query ([`Time::is_valid`]) that renders the
//! value as a canonical literal and re-matches it against the input grammar.
//! Construction never fails: input that is not a literal yields an invalid
//! value whose fields are all empty.
//!
//! Everything that needs the current time has a variant taking an explicit
//! "now" (`Time::at`, `Time::next_occurrence_after`) so callers can pin the
//! clock in tests; the convenience forms read [`chrono::Local`].

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TimeError;
use crate::format::{FormatOptions, TimeFormat, DEFAULT_FORMAT};
use crate::literal::{is_valid_literal, parse_literal};
use crate::period::Period;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day on the 12-hour wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    hours: Option<u32>,
    minutes: Option<u32>,
    period: Period,
}

// ── Construction ────────────────────────────────────────────────────────────

impl Time {
    /// The current local wall-clock time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// The time of day of `now`, with the period always resolved.
    ///
    /// ```
    /// use ampm_time::{Period, Time};
    /// use chrono::NaiveTime;
    ///
    /// let t = Time::at(&NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    /// assert_eq!((t.hours(), t.minutes(), t.period()), (Some(12), Some(5), Period::Am));
    /// ```
    pub fn at<T: Timelike>(now: &T) -> Self {
        let hour = now.hour();
        Self {
            hours: Some(wheel_hour(hour)),
            minutes: Some(now.minute()),
            period: Period::from_resolved_hour(hour),
        }
    }

    /// Parse a literal. Strings and numbers are both accepted (`"7:30pm"`,
    /// `1234`); anything else produces an invalid time rather than an error.
    ///
    /// ```
    /// use ampm_time::{Period, Time};
    ///
    /// let t = Time::parse(1234);
    /// assert_eq!((t.hours(), t.minutes(), t.period()), (Some(12), Some(34), Period::Unknown));
    ///
    /// assert!(!Time::parse("25:00").is_valid());
    /// ```
    pub fn parse<T: fmt::Display>(input: T) -> Self {
        match parse_literal(&input) {
            Some(lit) => Self {
                hours: Some(lit.hours),
                minutes: Some(lit.minutes),
                period: lit.period,
            },
            None => Self {
                hours: None,
                minutes: None,
                period: Period::Unknown,
            },
        }
    }

    /// Build a time from raw fields without checking them.
    pub fn from_parts(hours: u32, minutes: u32, period: Period) -> Self {
        Self {
            hours: Some(hours),
            minutes: Some(minutes),
            period,
        }
    }

    /// Whether `input` is a literal, without constructing a value.
    pub fn is_valid_input<T: fmt::Display>(input: T) -> bool {
        is_valid_literal(&input)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::now()
    }
}

impl FromStr for Time {
    type Err = TimeError;

    /// Strict parsing: unlike [`Time::parse`], input that is not a literal is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = Time::parse(s);
        if time.is_valid() {
            Ok(time)
        } else {
            Err(TimeError::InvalidTime)
        }
    }
}

impl From<u32> for Time {
    fn from(n: u32) -> Self {
        Time::parse(n)
    }
}

impl From<&str> for Time {
    fn from(s: &str) -> Self {
        Time::parse(s)
    }
}

// ── Fields ──────────────────────────────────────────────────────────────────

impl Time {
    /// Hour on the 12-hour wheel, `None` if the source text was not a literal.
    pub fn hours(&self) -> Option<u32> {
        self.hours
    }

    /// Set the hour. Out-of-range values are stored as-is and make the time invalid.
    pub fn set_hours(&mut self, hours: u32) {
        self.hours = Some(hours);
    }

    pub fn minutes(&self) -> Option<u32> {
        self.minutes
    }

    /// Set the minutes. Out-of-range values are stored as-is and make the time invalid.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = Some(minutes);
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Set the period from a token such as `"pm"` or `"A.M."`; anything that is
    /// not a period token clears it to [`Period::Unknown`].
    pub fn set_period_token(&mut self, token: &str) {
        self.period = Period::from_token(token);
    }

    /// Re-render with the canonical format and re-match the literal grammar.
    pub fn is_valid(&self) -> bool {
        self.canonical_literal()
            .is_some_and(|literal| is_valid_literal(&literal))
    }

    /// The 0-23 hour, treating an unknown period as AM. `None` when invalid.
    ///
    /// ```
    /// use ampm_time::Time;
    ///
    /// assert_eq!(Time::parse("8:30 pm").resolved_hour(), Some(20));
    /// assert_eq!(Time::parse("12 am").resolved_hour(), Some(0));
    /// assert_eq!(Time::parse("12 pm").resolved_hour(), Some(12));
    /// ```
    pub fn resolved_hour(&self) -> Option<u32> {
        if !self.is_valid() {
            return None;
        }
        let hours = self.hours? % 12;
        Some(match self.period {
            Period::Pm => hours + 12,
            Period::Am | Period::Unknown => hours,
        })
    }

    /// Both fields rendered through [`DEFAULT_FORMAT`], without the validity check.
    fn canonical_literal(&self) -> Option<String> {
        let (hours, minutes) = (self.hours?, self.minutes?);
        let format = TimeFormat::parse(DEFAULT_FORMAT).ok()?;
        Some(format.render(hours, minutes, self.period))
    }
}

// ── Formatting ──────────────────────────────────────────────────────────────

impl Time {
    /// Render with `pattern`; an empty pattern means [`DEFAULT_FORMAT`].
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidTime`] if the value is invalid (checked first), or
    /// [`TimeError::InvalidFormat`] if the pattern is not a format pattern.
    ///
    /// ```
    /// use ampm_time::Time;
    ///
    /// assert_eq!(Time::parse("1:55pm").format("hh.mm A").unwrap(), "01.55 P");
    /// assert_eq!(Time::parse("1:55").format("h:mm am").unwrap(), "1:55");
    /// ```
    pub fn format(&self, pattern: &str) -> Result<String, TimeError> {
        self.format_with_options(Some(pattern), &FormatOptions::default())
    }

    /// Render with `pattern`, falling back to the options' default pattern
    /// when it is absent or empty.
    pub fn format_with_options(
        &self,
        pattern: Option<&str>,
        options: &FormatOptions,
    ) -> Result<String, TimeError> {
        let pattern = pattern
            .filter(|p| !p.is_empty())
            .unwrap_or(options.default_pattern.as_str());

        if !self.is_valid() {
            return Err(TimeError::InvalidTime);
        }
        let (Some(hours), Some(minutes)) = (self.hours, self.minutes) else {
            return Err(TimeError::InvalidTime);
        };
        let format = TimeFormat::parse(pattern)?;
        Ok(format.render(hours, minutes, self.period))
    }

    /// The canonical literal, e.g. `"7:05 pm"`.
    pub fn to_literal(&self) -> Result<String, TimeError> {
        self.format(DEFAULT_FORMAT)
    }
}

impl fmt::Display for Time {
    /// Default format, or the error's sentinel text (`invalid time`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format_with_options(None, &FormatOptions::default()) {
            Ok(text) => f.write_str(&text),
            Err(e) => write!(f, "{e}"),
        }
    }
}

// ── shift ───────────────────────────────────────────────────────────────────

impl Time {
    /// Move the time by an hour and minute offset within the same day.
    ///
    /// Offsets are combined as total minutes, so minute offsets carry into
    /// (or borrow from) the hour in either direction. A known period is
    /// re-derived from the result; an unknown period is computed as AM and
    /// stays unknown.
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidTime`] if the value is invalid, or
    /// [`TimeError::ShiftOutOfRange`] if the result falls outside 00:00-23:59.
    /// The value is untouched on error.
    ///
    /// ```
    /// use ampm_time::Time;
    ///
    /// let mut t = Time::parse("11:35 am");
    /// t.shift(2, 15).unwrap();
    /// assert_eq!(t.to_string(), "1:50 pm");
    /// t.shift(-4, -10).unwrap();
    /// assert_eq!(t.to_string(), "9:40 am");
    /// ```
    pub fn shift(&mut self, hours: i32, minutes: i32) -> Result<(), TimeError> {
        let resolved = self.resolved_hour().ok_or(TimeError::InvalidTime)?;
        let current_minutes = self.minutes.ok_or(TimeError::InvalidTime)?;

        let total = i64::from(resolved) * 60
            + i64::from(current_minutes)
            + i64::from(hours) * 60
            + i64::from(minutes);
        if !(0..MINUTES_PER_DAY).contains(&total) {
            debug!(hours, minutes, total, "shift rejected: result leaves the day");
            return Err(TimeError::ShiftOutOfRange { hours, minutes });
        }

        // Both fit in u32: total is in [0, 1440).
        let new_hour = (total / 60) as u32;
        let new_minutes = (total % 60) as u32;

        self.hours = Some(wheel_hour(new_hour));
        self.minutes = Some(new_minutes);
        if self.period.is_known() {
            self.period = Period::from_resolved_hour(new_hour);
        }
        Ok(())
    }
}

// ── next_occurrence ─────────────────────────────────────────────────────────

impl Time {
    /// The next local timestamp strictly after the current time that shows this time.
    pub fn next_occurrence(&self) -> Result<NaiveDateTime, TimeError> {
        self.next_occurrence_after(Local::now().naive_local())
    }

    /// The earliest timestamp strictly after `now` whose time of day is this
    /// time, in this time's period when it has one.
    ///
    /// ```
    /// use ampm_time::Time;
    /// use chrono::NaiveDate;
    ///
    /// // 3:15 pm, Aug 10
    /// let now = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap().and_hms_opt(15, 15, 30).unwrap();
    ///
    /// let next = Time::parse("2").next_occurrence_after(now).unwrap();
    /// assert_eq!(next.to_string(), "2026-08-11 02:00:00");
    ///
    /// let next = Time::parse(415).next_occurrence_after(now).unwrap();
    /// assert_eq!(next.to_string(), "2026-08-10 16:15:00");
    /// ```
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidTime`] if the value is invalid, and
    /// [`TimeError::Overflow`] at the edge of chrono's calendar range.
    pub fn next_occurrence_after(&self, now: NaiveDateTime) -> Result<NaiveDateTime, TimeError> {
        let hour = self.resolved_hour().ok_or(TimeError::InvalidTime)?;
        let minutes = self.minutes.ok_or(TimeError::InvalidTime)?;
        let half_day = Duration::hours(12);

        let mut candidate = now
            .date()
            .and_hms_opt(hour, minutes, 0)
            .ok_or(TimeError::InvalidTime)?;

        // Candidate starts on now's date, so at most two steps pass now.
        while candidate <= now {
            candidate = candidate
                .checked_add_signed(half_day)
                .ok_or(TimeError::Overflow)?;
            trace!(%candidate, "rolled candidate forward 12 hours");
        }

        if !self.period.admits(candidate.hour()) {
            candidate = candidate
                .checked_add_signed(half_day)
                .ok_or(TimeError::Overflow)?;
            trace!(%candidate, period = %self.period, "corrected candidate period");
        }
        if !self.period.admits(candidate.hour()) {
            return Err(TimeError::ProjectionInvariant);
        }

        Ok(candidate)
    }
}

/// Map a 0-23 hour onto the 12-hour wheel (0 and 12 become 12).
fn wheel_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
