#![forbid(unsafe_code)]

//! Language-independent skeleton of number pronunciation.
//!
//! [`pronounce`] owns the steps every language shares: NaN handling,
//! scientific notation, the sign word, the scale ceiling, and the spoken
//! decimal digits. The integer part below the ceiling is delegated to the
//! language through [`NumberWords::whole`], which is where grammar such as
//! English year reading or French base-20 tens lives.
//!
//! # Failure Modes
//!
//! Nothing here fails. Unrepresentable input degrades to a word:
//!
//! - NaN → [`NumberWords::NOT_A_NUMBER`]
//! - magnitude ≥ the active scale ceiling, or ±∞ → [`NumberWords::INFINITY`]

use tracing::warn;

use crate::number::{Number, PronounceOptions, Scientific};
use crate::scale::ScaleTable;

/// Words and grammar hooks a language supplies to [`pronounce`].
pub(crate) trait NumberWords {
    /// Sign word for ordinary negative numbers.
    const MINUS: &'static str;
    /// Sign word inside scientific notation.
    const NEGATIVE: &'static str;
    /// Word between the integer part and the spoken decimals.
    const DECIMAL_MARKER: &'static str;
    /// Joins mantissa and exponent in scientific notation.
    const TIMES_TEN_TO_THE: &'static str;
    const INFINITY: &'static str;
    const NOT_A_NUMBER: &'static str;

    /// Name of a single decimal digit.
    fn digit(&self, d: u8) -> &'static str;

    /// Scale table for the requested convention.
    fn scale(&self, short_scale: bool) -> &'static ScaleTable;

    /// Words for an integer strictly below the scale ceiling.
    fn whole(&self, n: u128, integer_input: bool, short_scale: bool) -> String;
}

/// Pronounce `number` with the grammar of `words`.
pub(crate) fn pronounce<W: NumberWords>(words: &W, number: Number, options: PronounceOptions) -> String {
    if number.is_nan() {
        warn!("cannot pronounce NaN");
        return W::NOT_A_NUMBER.to_string();
    }

    if options.scientific
        && let Some(sci) = Scientific::of(number.to_f64())
        && sci.exponent != 0
    {
        return pronounce_scientific(words, sci, options);
    }

    let mut out = String::new();
    if number.is_negative() {
        out.push_str(if options.scientific {
            W::NEGATIVE
        } else {
            W::MINUS
        });
        out.push(' ');
    }

    let table = words.scale(options.short_scale);
    let magnitude = match number.magnitude() {
        Some(m) if m.whole < table.ceiling() => m,
        _ => {
            warn!(
                value = %number,
                ceiling_exponent = table.ceiling_exponent(),
                "number exceeds the largest named scale, degrading to infinity"
            );
            out.push_str(W::INFINITY);
            return out;
        }
    };

    out.push_str(&words.whole(
        magnitude.whole,
        magnitude.integer_input,
        options.short_scale,
    ));

    // Digits are read left to right until the budget runs out or a zero
    // digit is reached; the marker is spoken for any fractional part.
    if options.places > 0 && !magnitude.fraction.is_empty() {
        out.push(' ');
        out.push_str(W::DECIMAL_MARKER);
        for d in magnitude
            .fraction
            .iter()
            .copied()
            .take(options.places)
            .take_while(|&d| d != 0)
        {
            out.push(' ');
            out.push_str(words.digit(d));
        }
    }
    out
}

fn pronounce_scientific<W: NumberWords>(words: &W, sci: Scientific, options: PronounceOptions) -> String {
    let plain = options.scientific(false);
    let mut out = String::new();
    if sci.mantissa < 0.0 {
        out.push_str(W::NEGATIVE);
        out.push(' ');
    }
    out.push_str(&pronounce(words, Number::Decimal(sci.mantissa.abs()), plain));
    out.push(' ');
    out.push_str(W::TIMES_TEN_TO_THE);
    out.push(' ');
    if sci.exponent < 0 {
        out.push_str(W::NEGATIVE);
        out.push(' ');
    }
    out.push_str(&pronounce(
        words,
        Number::Integer(i128::from(sci.exponent.unsigned_abs())),
        plain,
    ));
    out
}
