//! # ampm-time
//!
//! 12-hour clock times read from loosely formatted input.
//!
//! A [`Time`] is parsed from text or numbers (`"7"`, `1234`, `"12.14"`,
//! `"7:05 p.m."`), rendered back through a small pattern language
//! (`"h:mm am"`, `"hh.mm A.M."`), shifted by hour/minute offsets, and projected
//! onto the next calendar timestamp that shows it.
//!
//! ## Modules
//!
//! - [`literal`] — Whitespace sanitizer and the input grammar
//! - [`period`] — AM/PM designator and its token grammar
//! - [`format`] — Format patterns and the renderer
//! - [`time`] — The time value: validity, shifting, next occurrence
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use ampm_time::Time;
//!
//! let mut t = Time::parse("11:35 am");
//! assert!(t.is_valid());
//! t.shift(2, 15).unwrap();
//! assert_eq!(t.format("hh:mm A.M.").unwrap(), "01:50 P.M.");
//! ```

pub mod error;
pub mod format;
pub mod literal;
pub mod period;
pub mod time;

pub use error::TimeError;
pub use format::{FormatOptions, TimeFormat, DEFAULT_FORMAT};
pub use literal::{is_valid_literal, parse_literal, sanitize, TimeLiteral};
pub use period::Period;
pub use time::Time;
