#![forbid(unsafe_code)]

//! English verbalizer.
//!
//! Grammar beyond the shared skeleton:
//!
//! - "and" between hundreds and the rest ("one hundred and five").
//! - Groups joined with ", " ("one million, two hundred thousand").
//! - Four-digit integers from 1010 to 1999 read as years
//!   ("nineteen eighty four", "eleven hundred", "nineteen oh five").
//! - Long scale renders each million-group with short-scale words and
//!   names it from the long table ("one thousand million").

use parlance_i18n::{Lang, PluralForms};
use tracing::debug;

use super::{LanguageFormatter, decimal_fallback, fraction_for};
use crate::fraction::convert_to_mixed_fraction;
use crate::number::{Number, PronounceOptions};
use crate::pronounce::{NumberWords, pronounce};
use crate::scale::{ScaleTable, join_groups};
use crate::time::{ClockTime, Meridiem, TimeOptions};

const DIGITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Index `k` names `10 × k`; index 0 and 1 are unused by compound tens.
const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub(crate) static SHORT_SCALE: ScaleTable = ScaleTable::new(&[
    (2, "hundred"),
    (3, "thousand"),
    (6, "million"),
    (9, "billion"),
    (12, "trillion"),
    (15, "quadrillion"),
    (18, "quintillion"),
    (21, "sextillion"),
    (24, "septillion"),
    (27, "octillion"),
    (30, "nonillion"),
    (33, "decillion"),
    (36, "undecillion"),
]);

pub(crate) static LONG_SCALE: ScaleTable = ScaleTable::new(&[
    (2, "hundred"),
    (3, "thousand"),
    (6, "million"),
    (12, "billion"),
    (18, "trillion"),
    (24, "quadrillion"),
    (30, "quintillion"),
    (36, "sextillion"),
]);

/// Fraction words for denominators 2..=20.
const FRACTIONS: [PluralForms; 19] = [
    PluralForms::new("half", "halves"),
    PluralForms::new("third", "thirds"),
    PluralForms::new("fourth", "fourths"),
    PluralForms::new("fifth", "fifths"),
    PluralForms::new("sixth", "sixths"),
    PluralForms::new("seventh", "sevenths"),
    PluralForms::new("eighth", "eighths"),
    PluralForms::new("ninth", "ninths"),
    PluralForms::new("tenth", "tenths"),
    PluralForms::new("eleventh", "elevenths"),
    PluralForms::new("twelfth", "twelfths"),
    PluralForms::new("thirteenth", "thirteenths"),
    PluralForms::new("fourteenth", "fourteenths"),
    PluralForms::new("fifteenth", "fifteenths"),
    PluralForms::new("sixteenth", "sixteenths"),
    PluralForms::new("seventeenth", "seventeenths"),
    PluralForms::new("eighteenth", "eighteenths"),
    PluralForms::new("nineteenth", "nineteenths"),
    PluralForms::new("twentieth", "twentieths"),
];

/// English number and time verbalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl English {
    fn say(&self, n: u32) -> String {
        pronounce(self, Number::from(n), PronounceOptions::default())
    }

    /// Name of `n` when the tables hold it directly.
    fn direct_name(n: u128, table: &ScaleTable) -> Option<String> {
        if n < 20 {
            return Some(DIGITS[n as usize].to_string());
        }
        if n < 100 {
            return (n % 10 == 0).then(|| TENS[(n / 10) as usize].to_string());
        }
        table.exact_power(n).map(|name| format!("one {name}"))
    }

    /// Two-pair reading of four-digit integers, or `None` when the
    /// number is not year-shaped.
    ///
    /// Not year-shaped: outside `1000..=9999`, a zero second and third
    /// digit (`1000`, `1005`), or a first pair of 20 and above.
    fn year_style(n: u128) -> Option<String> {
        if !(1000..=9999).contains(&n) {
            return None;
        }
        let first = (n / 100) as usize;
        let second = (n % 100) as usize;
        if (n / 10) % 100 == 0 || first >= 20 {
            debug!(n = %n, "not year-shaped, using general decomposition");
            return None;
        }
        let tail = match second {
            0 => "hundred".to_string(),
            1..=9 => format!("oh {}", DIGITS[second]),
            10..=19 => DIGITS[second].to_string(),
            _ => below_hundred(second),
        };
        Some(format!("{} {tail}", DIGITS[first]))
    }

    fn short_scale(n: u128) -> String {
        join_groups(n, 1000, ", ", |index, group| {
            let mut words = below_thousand(group as usize);
            if index > 0
                && let Some(name) = SHORT_SCALE.name(index)
            {
                words.push(' ');
                words.push_str(name);
            }
            words
        })
    }

    fn long_scale(n: u128) -> String {
        join_groups(n, 1_000_000, ", ", |index, group| {
            let words = Self::direct_name(group, &SHORT_SCALE)
                .unwrap_or_else(|| Self::short_scale(group));
            if index == 0 {
                return words;
            }
            // Slot 1 of the long table is the thousand already used inside
            // the group, so group k takes slot k + 1.
            let mut words = words.replace(',', "");
            if let Some(name) = LONG_SCALE.name(index + 1) {
                words.push(' ');
                words.push_str(name);
            }
            words
        })
    }

    fn speak_24_hour(&self, time: ClockTime) -> String {
        let mut speak = self.two_digit_field(time.hour());
        speak.push(' ');
        if time.minute() == 0 {
            speak.push_str("hundred");
        } else {
            speak.push_str(&self.two_digit_field(time.minute()));
        }
        speak
    }

    /// "zero eight" for single digits, one number otherwise.
    fn two_digit_field(&self, value: u32) -> String {
        if value < 10 {
            format!("{} {}", self.say(0), self.say(value))
        } else {
            self.say(value)
        }
    }

    fn speak_12_hour(&self, time: ClockTime, use_ampm: bool) -> String {
        if time == ClockTime::MIDNIGHT {
            return "midnight".to_string();
        }
        if time == ClockTime::NOON {
            return "noon".to_string();
        }

        let mut speak = self.say(time.hour12());
        match time.minute() {
            0 if !use_ampm => return format!("{speak} o'clock"),
            0 => {}
            minute => {
                if minute < 10 {
                    speak.push_str(" oh");
                }
                speak.push(' ');
                speak.push_str(&self.say(minute));
            }
        }

        if use_ampm {
            speak.push_str(match time.meridiem() {
                Meridiem::Am => " a.m.",
                Meridiem::Pm => " p.m.",
            });
        }
        speak
    }
}

/// 0..=99 with compound tens ("forty two").
fn below_hundred(n: usize) -> String {
    if n < 20 {
        return DIGITS[n].to_string();
    }
    let (tens, ones) = (n / 10, n % 10);
    if ones == 0 {
        TENS[tens].to_string()
    } else {
        format!("{} {}", TENS[tens], DIGITS[ones])
    }
}

/// 0..=999 with "and" after the hundreds.
fn below_thousand(n: usize) -> String {
    if n < 100 {
        return below_hundred(n);
    }
    let (hundreds, rest) = (n / 100, n % 100);
    if rest == 0 {
        format!("{} hundred", DIGITS[hundreds])
    } else {
        format!("{} hundred and {}", DIGITS[hundreds], below_hundred(rest))
    }
}

impl NumberWords for English {
    const MINUS: &'static str = "minus";
    const NEGATIVE: &'static str = "negative";
    const DECIMAL_MARKER: &'static str = "point";
    const TIMES_TEN_TO_THE: &'static str = "times ten to the power of";
    const INFINITY: &'static str = "infinity";
    const NOT_A_NUMBER: &'static str = "not a number";

    fn digit(&self, d: u8) -> &'static str {
        DIGITS[usize::from(d % 10)]
    }

    fn scale(&self, short_scale: bool) -> &'static ScaleTable {
        if short_scale { &SHORT_SCALE } else { &LONG_SCALE }
    }

    fn whole(&self, n: u128, integer_input: bool, short_scale: bool) -> String {
        if integer_input
            && let Some(words) = Self::year_style(n)
        {
            return words;
        }
        if let Some(words) = Self::direct_name(n, self.scale(short_scale)) {
            return words;
        }
        if short_scale {
            Self::short_scale(n)
        } else {
            Self::long_scale(n)
        }
    }
}

impl LanguageFormatter for English {
    fn lang(&self) -> Lang {
        Lang::English
    }

    fn nice_number(&self, value: f64, speech: bool, denominators: &[u32]) -> String {
        let Some(frac) = convert_to_mixed_fraction(value, denominators) else {
            debug!(value, "no fraction fits, using decimal fallback");
            return decimal_fallback(value, Lang::English, false);
        };
        if !speech {
            return frac.to_string();
        }
        if frac.is_whole() {
            return frac.whole_text();
        }
        let Some(forms) = fraction_for(&FRACTIONS, frac.denominator) else {
            return decimal_fallback(value, Lang::English, false);
        };

        let one = frac.numerator == 1;
        let word = forms.for_count(&Lang::English.plural_rule(), i64::from(frac.numerator));
        if frac.whole == 0 {
            let sign = if frac.negative { "minus " } else { "" };
            if one {
                format!("{sign}a {word}")
            } else {
                format!("{sign}{} {word}", frac.numerator)
            }
        } else if one {
            format!("{} and a {word}", frac.whole_text())
        } else {
            format!("{} and {} {word}", frac.whole_text(), frac.numerator)
        }
    }

    fn pronounce_number(&self, number: Number, options: PronounceOptions) -> String {
        pronounce(self, number, options)
    }

    fn nice_time(&self, time: ClockTime, options: TimeOptions) -> String {
        if !options.speech {
            return time.display(options.use_24_hour, options.use_ampm);
        }
        if options.use_24_hour {
            self.speak_24_hour(time)
        } else {
            self.speak_12_hour(time, options.use_ampm)
        }
    }
}
