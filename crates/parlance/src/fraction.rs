#![forbid(unsafe_code)]

//! Mixed-fraction approximation of real numbers.
//!
//! [`convert_to_mixed_fraction`] finds the first allowed denominator `d`
//! for which the fractional part of the input is within
//! [`FRACTION_TOLERANCE`] of some `n / d`. Denominators are tried in the
//! order given, so callers control the preference (smaller denominators
//! first reads more naturally).
//!
//! # Invariants
//!
//! 1. `numerator < denominator` for every returned fraction.
//! 2. `denominator` is one of the allowed denominators.
//! 3. `negative` is false when the fraction is exactly zero.

use core::fmt;

/// Denominators used when the caller supplies none: `1..=20`.
pub const DEFAULT_DENOMINATORS: [u32; 20] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
];

/// Maximum distance between `fraction × denominator` and an integer for
/// the approximation to be accepted.
pub const FRACTION_TOLERANCE: f64 = 0.01;

/// A signed mixed fraction `±(whole + numerator / denominator)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    pub negative: bool,
    pub whole: u64,
    pub numerator: u32,
    pub denominator: u32,
}

impl MixedFraction {
    /// True when there is no fractional part.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.numerator == 0
    }

    /// The whole part as digits, with a leading `-` for negative values.
    #[must_use]
    pub fn whole_text(&self) -> String {
        if self.negative {
            format!("-{}", self.whole)
        } else {
            self.whole.to_string()
        }
    }

    /// The value as an `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.whole as f64 + f64::from(self.numerator) / f64::from(self.denominator);
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for MixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole_text())
        } else {
            write!(
                f,
                "{} {}/{}",
                self.whole_text(),
                self.numerator,
                self.denominator
            )
        }
    }
}

/// Approximate `value` by a mixed fraction over the allowed denominators.
///
/// An empty `denominators` slice means [`DEFAULT_DENOMINATORS`]; zero
/// denominators are skipped. Returns `None` for non-finite input, for
/// magnitudes beyond `u64`, and when no denominator fits.
#[must_use]
pub fn convert_to_mixed_fraction(value: f64, denominators: &[u32]) -> Option<MixedFraction> {
    if !value.is_finite() || value.abs() >= u64::MAX as f64 {
        return None;
    }
    let magnitude = value.abs();
    let mut whole = magnitude.trunc() as u64;
    let fraction = magnitude - magnitude.trunc();

    if fraction == 0.0 {
        return Some(MixedFraction {
            negative: value < 0.0 && whole > 0,
            whole,
            numerator: 0,
            denominator: 1,
        });
    }

    let denominators = if denominators.is_empty() {
        &DEFAULT_DENOMINATORS[..]
    } else {
        denominators
    };

    let (numerator, denominator) = denominators
        .iter()
        .copied()
        .filter(|&den| den > 0)
        .find_map(|den| {
            let scaled = fraction * f64::from(den);
            let rounded = scaled.round();
            ((scaled - rounded).abs() < FRACTION_TOLERANCE).then_some((rounded as u32, den))
        })?;

    // A fractional part within tolerance of 1 carries into the whole.
    let numerator = if numerator >= denominator {
        whole += 1;
        0
    } else {
        numerator
    };

    Some(MixedFraction {
        negative: value < 0.0 && (whole > 0 || numerator > 0),
        whole,
        numerator,
        denominator,
    })
}
