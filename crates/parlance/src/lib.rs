#![forbid(unsafe_code)]

//! Speakable and displayable numbers, fractions, and clock times.
//!
//! Parlance turns numeric values into natural-language strings for a
//! text-to-speech voice or a screen, in English and French:
//!
//! - [`pronounce_number`] spells out integers and decimals on the short or
//!   long scale, optionally in scientific notation.
//! - [`nice_number`] approximates a value by a mixed fraction ("4 and a
//!   half", "4 1/2").
//! - [`nice_time`] reads a clock time ("five thirty", "six heures moins le
//!   quart").
//!
//! # How it fits together
//!
//! Each language is a zero-sized [`LanguageFormatter`]. Shared steps (sign,
//! scientific notation, scale ceiling, spoken decimals) live in one
//! skeleton; each language supplies its word tables and irregular grammar.
//! [`Speaker`] binds a validated [`FormatConfig`] to a formatter.
//!
//! # Failure Modes
//!
//! Formatting never fails. Magnitudes past the largest named scale are
//! spoken as "infinity", NaN as "not a number", and values no denominator
//! fits are written with three decimals. Each degradation emits a
//! `tracing` event. Only constructors and loaders return errors:
//! [`ClockTime::new`], [`Lang::from_str`](std::str::FromStr::from_str),
//! and the [`FormatConfig`] loaders.
//!
//! # Example
//!
//! ```
//! use parlance::{Lang, PronounceOptions, pronounce_number};
//!
//! assert_eq!(
//!     pronounce_number(1984, Lang::English, PronounceOptions::default()),
//!     "nineteen eighty four"
//! );
//! assert_eq!(
//!     pronounce_number(80, Lang::French, PronounceOptions::default()),
//!     "quatre-vingts"
//! );
//! ```

pub mod config;
pub mod fraction;
pub mod lang;
pub mod number;
pub mod scale;
pub mod speaker;
pub mod time;

pub(crate) mod pronounce;

use chrono::Timelike;

pub use config::{ConfigError, FormatConfig};
pub use fraction::{DEFAULT_DENOMINATORS, MixedFraction, convert_to_mixed_fraction};
pub use lang::{English, French, LanguageFormatter, formatter};
pub use number::{Number, PronounceOptions, Scientific};
pub use parlance_i18n::{I18nError, Lang, PluralCategory, PluralForms, PluralRule};
pub use speaker::Speaker;
pub use time::{ClockError, ClockTime, Meridiem, TimeOptions};

/// Format `value` as a mixed fraction in `lang`.
///
/// An empty `denominators` slice means [`DEFAULT_DENOMINATORS`].
#[must_use]
pub fn nice_number(value: f64, lang: Lang, speech: bool, denominators: &[u32]) -> String {
    formatter(lang).nice_number(value, speech, denominators)
}

/// Spell out `value` in `lang`.
#[must_use]
pub fn pronounce_number(value: impl Into<Number>, lang: Lang, options: PronounceOptions) -> String {
    formatter(lang).pronounce_number(value.into(), options)
}

/// Format the hour and minute of `time` in `lang`.
#[must_use]
pub fn nice_time(time: &impl Timelike, lang: Lang, options: TimeOptions) -> String {
    formatter(lang).nice_time(ClockTime::from_timelike(time), options)
}
