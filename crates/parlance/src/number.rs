#![forbid(unsafe_code)]

//! Numeric input model for the pronouncers.
//!
//! [`Number`] keeps integers and decimals apart because some grammar rules
//! (English year-style reading of `1984`) apply to integer inputs only,
//! while `1984.0` is read as a plain quantity.
//!
//! [`PronounceOptions`] is the request tuple consumed by one
//! pronunciation call; [`Scientific`] is the normalized `d.dddddd × 10^e`
//! decomposition used by scientific mode.

use core::fmt;

/// A number to verbalize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact integer.
    Integer(i128),
    /// A binary floating-point value.
    Decimal(f64),
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Self::Integer(i128::from(value))
            }
        })*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Decimal(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(x) => write!(f, "{x}"),
        }
    }
}

/// Absolute value of a finite [`Number`], split for verbalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Magnitude {
    /// Integer part.
    pub whole: u128,
    /// Decimal digits after the point, without trailing zeros.
    pub fraction: Vec<u8>,
    /// The input was an [`Number::Integer`].
    pub integer_input: bool,
}

impl Number {
    /// True for values strictly below zero (`-0.0` is not negative).
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Decimal(x) => x < 0.0,
        }
    }

    /// True for NaN decimals.
    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Self::Decimal(x) if x.is_nan())
    }

    /// True when the value has no fractional part.
    #[must_use]
    pub fn is_integral(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Decimal(x) => x.is_finite() && x.fract() == 0.0,
        }
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Decimal(x) => x,
        }
    }

    /// Split the absolute value into integer part and decimal digits.
    ///
    /// Returns `None` for non-finite decimals and for decimals whose
    /// integer part does not fit in `u128`.
    pub(crate) fn magnitude(self) -> Option<Magnitude> {
        match self {
            Self::Integer(n) => Some(Magnitude {
                whole: n.unsigned_abs(),
                fraction: Vec::new(),
                integer_input: true,
            }),
            Self::Decimal(x) => {
                let abs = x.abs();
                if !abs.is_finite() || abs >= u128::MAX as f64 {
                    return None;
                }
                Some(Magnitude {
                    whole: abs.trunc() as u128,
                    fraction: fraction_digits(abs),
                    integer_input: false,
                })
            }
        }
    }
}

/// Decimal digits of `abs` after the point, from its shortest round-trip
/// representation.
fn fraction_digits(abs: f64) -> Vec<u8> {
    let text = abs.to_string();
    let Some((_, digits)) = text.split_once('.') else {
        return Vec::new();
    };
    let mut out: Vec<u8> = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    while out.last() == Some(&0) {
        out.pop();
    }
    out
}

/// Inputs to one pronunciation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounceOptions {
    /// Maximum number of decimal digits to speak.
    pub places: usize,
    /// Short scale (billion = 10^9) or long scale (billion = 10^12).
    pub short_scale: bool,
    /// Speak as `mantissa times ten to the power of exponent`.
    pub scientific: bool,
}

impl Default for PronounceOptions {
    fn default() -> Self {
        Self {
            places: 2,
            short_scale: true,
            scientific: false,
        }
    }
}

impl PronounceOptions {
    /// Defaults: two places, short scale, no scientific notation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal-places budget.
    #[must_use]
    pub fn places(mut self, places: usize) -> Self {
        self.places = places;
        self
    }

    /// Choose between short and long scale naming.
    #[must_use]
    pub fn short_scale(mut self, enabled: bool) -> Self {
        self.short_scale = enabled;
        self
    }

    /// Enable or disable scientific notation.
    #[must_use]
    pub fn scientific(mut self, enabled: bool) -> Self {
        self.scientific = enabled;
        self
    }
}

/// Normalized scientific decomposition `mantissa × 10^exponent`.
///
/// The mantissa is rounded to six decimals, so `|mantissa|` lies in
/// `[1, 10)` for every nonzero finite input and is `0` for zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific {
    pub mantissa: f64,
    pub exponent: i32,
}

impl Scientific {
    /// Decompose a finite value. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn of(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = format!("{value:.6e}");
        let (mantissa, exponent) = text.split_once('e')?;
        Some(Self {
            mantissa: mantissa.parse().ok()?,
            exponent: exponent.parse().ok()?,
        })
    }

    /// `mantissa × 10^exponent` as an `f64`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.mantissa * 10f64.powi(self.exponent)
    }
}
