#![forbid(unsafe_code)]

//! Per-language verbalizers behind one capability set.
//!
//! Each supported language is a zero-sized type implementing
//! [`LanguageFormatter`]. Word tables are `static` data in the language's
//! module; grammar that the shared skeleton cannot express (year reading,
//! base-20 tens, idiomatic minutes) lives in that module as well.
//!
//! # Invariants
//!
//! 1. Every method is total: no input makes a formatter panic or fail.
//! 2. Formatters hold no state, so `&'static dyn LanguageFormatter` is
//!    safe to share across threads.

pub mod en;
pub mod fr;

use parlance_i18n::{Lang, PluralForms};
use tracing::warn;

use crate::number::{Number, PronounceOptions};
use crate::time::{ClockTime, TimeOptions};

pub use en::English;
pub use fr::French;

/// The number, fraction and clock verbalizer of one language.
pub trait LanguageFormatter: Send + Sync {
    /// The language this formatter speaks.
    fn lang(&self) -> Lang;

    /// Format `value` as a mixed fraction over `denominators`.
    ///
    /// With `speech`, the fraction is spelled out ("4 and a half");
    /// otherwise it is written with a slash ("4 1/2"). Values that no
    /// denominator fits are written with three decimals.
    fn nice_number(&self, value: f64, speech: bool, denominators: &[u32]) -> String;

    /// Spell out `number` as words.
    fn pronounce_number(&self, number: Number, options: PronounceOptions) -> String;

    /// Format a clock time for speech or display.
    fn nice_time(&self, time: ClockTime, options: TimeOptions) -> String;
}

/// The formatter for `lang`.
#[must_use]
pub fn formatter(lang: Lang) -> &'static dyn LanguageFormatter {
    match lang {
        Lang::English => &English,
        Lang::French => &French,
    }
}

/// Fraction word for `denominator` from a table indexed from 2.
pub(crate) fn fraction_for(table: &[PluralForms], denominator: u32) -> Option<PluralForms> {
    let forms = usize::try_from(denominator)
        .ok()
        .and_then(|d| d.checked_sub(2))
        .and_then(|i| table.get(i))
        .copied();
    if forms.is_none() {
        warn!(denominator, "no fraction word for denominator, using decimal fallback");
    }
    forms
}

/// `value` rounded to three decimals, written with the language's
/// decimal separator and, when `grouped`, its digit-group separator.
pub(crate) fn decimal_fallback(value: f64, lang: Lang, grouped: bool) -> String {
    let scaled = value * 1000.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        value
    };
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut out = if grouped {
        group_digits(int_part, lang.group_separator())
    } else {
        int_part.to_string()
    };
    if let Some(frac) = frac_part {
        out.push(lang.decimal_separator());
        out.push_str(frac);
    }
    out
}

/// Insert `separator` between groups of three digits, keeping a leading
/// sign in place.
pub(crate) fn group_digits(digits: &str, separator: char) -> String {
    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
