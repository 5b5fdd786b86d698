#![forbid(unsafe_code)]

//! French verbalizer.
//!
//! Grammar beyond the shared skeleton:
//!
//! - Compound tens are hyphenated, with "-et-un" from 21 to 61 and
//!   "soixante-et-onze"; 70-99 count on the base-20 pattern.
//! - "quatre-vingts" and "cents" take their plural only when nothing
//!   follows them and the group is not multiplied by "mille".
//! - "mille" is invariable and never preceded by "un"; the nouns from
//!   "million" up take a plural "s".
//! - The long scale names every other thousand-power with "-illiard"
//!   ("milliard" = 10^9).
//! - Hours are feminine ("une heure", "vingt-et-une heures"); the 12-hour
//!   clock counts minutes 35 to 55 down to the next hour.

use parlance_i18n::{Lang, PluralForms};
use tracing::debug;

use super::{LanguageFormatter, decimal_fallback, fraction_for, group_digits};
use crate::fraction::convert_to_mixed_fraction;
use crate::number::{Number, PronounceOptions};
use crate::pronounce::{NumberWords, pronounce};
use crate::scale::{ScaleTable, join_groups};
use crate::time::{ClockTime, TimeOptions};

const DIGITS: [&str; 20] = [
    "zéro",
    "un",
    "deux",
    "trois",
    "quatre",
    "cinq",
    "six",
    "sept",
    "huit",
    "neuf",
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];

/// Tens with their own word; 70, 80 and 90 are built from these.
const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

pub(crate) static SHORT_SCALE: ScaleTable = ScaleTable::new(&[
    (2, "cent"),
    (3, "mille"),
    (6, "million"),
    (9, "billion"),
    (12, "trillion"),
    (15, "quadrillion"),
    (18, "quintillion"),
    (21, "sextillion"),
    (24, "septillion"),
    (27, "octillion"),
    (30, "nonillion"),
    (33, "décillion"),
    (36, "undécillion"),
]);

pub(crate) static LONG_SCALE: ScaleTable = ScaleTable::new(&[
    (2, "cent"),
    (3, "mille"),
    (6, "million"),
    (9, "milliard"),
    (12, "billion"),
    (15, "billiard"),
    (18, "trillion"),
    (21, "trilliard"),
    (24, "quadrillion"),
    (27, "quadrilliard"),
    (30, "quintillion"),
    (33, "quintilliard"),
    (36, "sextillion"),
]);

/// Fraction words for denominators 2..=20.
const FRACTIONS: [PluralForms; 19] = [
    PluralForms::new("demi", "demis"),
    PluralForms::invariable("tiers"),
    PluralForms::new("quart", "quarts"),
    PluralForms::new("cinquième", "cinquièmes"),
    PluralForms::new("sixième", "sixièmes"),
    PluralForms::new("septième", "septièmes"),
    PluralForms::new("huitième", "huitièmes"),
    PluralForms::new("neuvième", "neuvièmes"),
    PluralForms::new("dixième", "dixièmes"),
    PluralForms::new("onzième", "onzièmes"),
    PluralForms::new("douzième", "douzièmes"),
    PluralForms::new("treizième", "treizièmes"),
    PluralForms::new("quatorzième", "quatorzièmes"),
    PluralForms::new("quinzième", "quinzièmes"),
    PluralForms::new("seizième", "seizièmes"),
    PluralForms::new("dix-septième", "dix-septièmes"),
    PluralForms::new("dix-huitième", "dix-huitièmes"),
    PluralForms::new("dix-neuvième", "dix-neuvièmes"),
    PluralForms::new("vingtième", "vingtièmes"),
];

/// French number and time verbalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl French {
    fn say(&self, n: impl Into<Number>) -> String {
        pronounce(self, n.into(), PronounceOptions::default())
    }

    /// Feminine form, for counting hours: "une", "vingt-et-une".
    fn say_feminine(&self, n: u32) -> String {
        let words = self.say(n);
        match words.strip_suffix("un") {
            Some(stem) => format!("{stem}une"),
            None => words,
        }
    }

    fn decompose(n: u128, table: &ScaleTable) -> String {
        join_groups(n, 1000, " ", |index, group| {
            let group = group as usize;
            match index {
                0 => below_thousand(group, true),
                1 if group == 1 => "mille".to_string(),
                1 => format!("{} mille", below_thousand(group, false)),
                _ => {
                    let mut words = below_thousand(group, true);
                    if let Some(name) = table.name(index) {
                        words.push(' ');
                        words.push_str(name);
                        if group > 1 {
                            words.push('s');
                        }
                    }
                    words
                }
            }
        })
    }

    fn speak_24_hour(&self, time: ClockTime) -> String {
        let mut speak = match time.hour() {
            0 => "minuit".to_string(),
            12 => "midi".to_string(),
            1 => "une heure".to_string(),
            hour => format!("{} heures", self.say_feminine(hour)),
        };
        if time.minute() != 0 {
            speak.push(' ');
            speak.push_str(&self.say(time.minute()));
        }
        speak
    }

    fn speak_12_hour(&self, time: ClockTime, use_ampm: bool) -> String {
        // Minutes 35..=55 in steps of five count down to the next hour.
        let (hour, minute) = match time.minute() {
            m @ (35 | 40 | 45 | 50 | 55) => ((time.hour() + 1) % 24, m as i32 - 60),
            m => (time.hour(), m as i32),
        };

        let mut speak = match hour {
            0 => "minuit".to_string(),
            12 => "midi".to_string(),
            1 | 13 => "une heure".to_string(),
            h if h < 13 => format!("{} heures", self.say(h)),
            h => format!("{} heures", self.say(h - 12)),
        };

        match minute {
            0 => {}
            15 => speak.push_str(" et quart"),
            30 => speak.push_str(" et demi"),
            -15 => speak.push_str(" moins le quart"),
            m => {
                speak.push(' ');
                speak.push_str(&self.say(m));
            }
        }

        if use_ampm {
            if hour > 17 {
                speak.push_str(" du soir");
            } else if hour > 12 {
                speak.push_str(" de l'après-midi");
            } else if hour > 0 && hour < 12 {
                speak.push_str(" du matin");
            }
        }
        speak
    }
}

/// 0..=99. `plural` allows "quatre-vingts" when 80 ends the number.
fn below_hundred(n: usize, plural: bool) -> String {
    if n < 20 {
        return DIGITS[n].to_string();
    }
    let (tens, ones) = (n / 10, n % 10);
    match tens {
        2..=6 => match ones {
            0 => TENS[tens].to_string(),
            1 => format!("{}-et-un", TENS[tens]),
            _ => format!("{}-{}", TENS[tens], DIGITS[ones]),
        },
        7 if ones == 1 => "soixante-et-onze".to_string(),
        7 => format!("soixante-{}", DIGITS[10 + ones]),
        8 if ones == 0 && plural => "quatre-vingts".to_string(),
        8 if ones == 0 => "quatre-vingt".to_string(),
        8 => format!("quatre-vingt-{}", DIGITS[ones]),
        _ => format!("quatre-vingt-{}", DIGITS[10 + ones]),
    }
}

/// 0..=999. `plural` allows "cents" and "quatre-vingts" in final position.
fn below_thousand(n: usize, plural: bool) -> String {
    if n < 100 {
        return below_hundred(n, plural);
    }
    let (hundreds, rest) = (n / 100, n % 100);
    let mut words = if hundreds == 1 {
        "cent".to_string()
    } else {
        format!("{} cent", DIGITS[hundreds])
    };
    if rest == 0 {
        if hundreds > 1 && plural {
            words.push('s');
        }
    } else {
        words.push(' ');
        words.push_str(&below_hundred(rest, plural));
    }
    words
}

impl NumberWords for French {
    const MINUS: &'static str = "moins";
    const NEGATIVE: &'static str = "moins";
    const DECIMAL_MARKER: &'static str = "virgule";
    const TIMES_TEN_TO_THE: &'static str = "fois dix puissance";
    const INFINITY: &'static str = "infini";
    const NOT_A_NUMBER: &'static str = "pas un nombre";

    fn digit(&self, d: u8) -> &'static str {
        DIGITS[usize::from(d % 10)]
    }

    fn scale(&self, short_scale: bool) -> &'static ScaleTable {
        if short_scale { &SHORT_SCALE } else { &LONG_SCALE }
    }

    fn whole(&self, n: u128, _integer_input: bool, short_scale: bool) -> String {
        if n == 0 {
            return DIGITS[0].to_string();
        }
        Self::decompose(n, self.scale(short_scale))
    }
}

impl LanguageFormatter for French {
    fn lang(&self) -> Lang {
        Lang::French
    }

    fn nice_number(&self, value: f64, speech: bool, denominators: &[u32]) -> String {
        let Some(frac) = convert_to_mixed_fraction(value, denominators) else {
            debug!(value, "no fraction fits, using decimal fallback");
            return decimal_fallback(value, Lang::French, !speech);
        };
        if frac.is_whole() {
            let whole = frac.whole_text();
            return if speech {
                whole
            } else {
                group_digits(&whole, Lang::French.group_separator())
            };
        }
        if !speech {
            return frac.to_string();
        }
        let Some(forms) = fraction_for(&FRACTIONS, frac.denominator) else {
            return decimal_fallback(value, Lang::French, false);
        };

        let one = frac.numerator == 1;
        let word = forms.for_count(&Lang::French.plural_rule(), i64::from(frac.numerator));
        if frac.whole == 0 {
            let sign = if frac.negative { "moins " } else { "" };
            if one {
                format!("{sign}un {word}")
            } else {
                format!("{sign}{} {word}", frac.numerator)
            }
        } else if one && frac.denominator == 2 {
            format!("{} et {word}", frac.whole_text())
        } else {
            format!("{} et {} {word}", frac.whole_text(), frac.numerator)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction::DEFAULT_DENOMINATORS;

    fn say(n: impl Into<Number>) -> String {
        French.pronounce_number(n.into(), PronounceOptions::default())
    }

    fn say_with(n: impl Into<Number>, options: PronounceOptions) -> String {
        French.pronounce_number(n.into(), options)
    }

    fn at(hour: u32, minute: u32, options: TimeOptions) -> String {
        French.nice_time(ClockTime::new(hour, minute).unwrap(), options)
    }

    // ==========================================================
    // Below one hundred
    // ==========================================================

    #[test]
    fn digits_match_table() {
        for (n, name) in DIGITS.iter().enumerate() {
            assert_eq!(say(n as i32), *name);
        }
    }

    #[test]
    fn compound_tens() {
        assert_eq!(say(20), "vingt");
        assert_eq!(say(21), "vingt-et-un");
        assert_eq!(say(22), "vingt-deux");
        assert_eq!(say(61), "soixante-et-un");
        assert_eq!(say(69), "soixante-neuf");
    }

    #[test]
    fn base_twenty() {
        assert_eq!(say(70), "soixante-dix");
        assert_eq!(say(71), "soixante-et-onze");
        assert_eq!(say(72), "soixante-douze");
        assert_eq!(say(77), "soixante-dix-sept");
        assert_eq!(say(80), "quatre-vingts");
        assert_eq!(say(81), "quatre-vingt-un");
        assert_eq!(say(90), "quatre-vingt-dix");
        assert_eq!(say(91), "quatre-vingt-onze");
        assert_eq!(say(99), "quatre-vingt-dix-neuf");
    }

    // ==========================================================
    // Hundreds, mille, scale nouns
    // ==========================================================

    #[test]
    fn hundreds_agreement() {
        assert_eq!(say(100), "cent");
        assert_eq!(say(101), "cent un");
        assert_eq!(say(200), "deux cents");
        assert_eq!(say(201), "deux cent un");
        assert_eq!(say(280), "deux cent quatre-vingts");
    }

    #[test]
    fn mille_is_invariable() {
        assert_eq!(say(1000), "mille");
        assert_eq!(say(1001), "mille un");
        assert_eq!(say(2000), "deux mille");
        assert_eq!(say(1984), "mille neuf cent quatre-vingt-quatre");
        assert_eq!(say(80_000), "quatre-vingt mille");
        assert_eq!(say(200_000), "deux cent mille");
    }

    #[test]
    fn scale_nouns_take_plural() {
        assert_eq!(say(1_000_000), "un million");
        assert_eq!(say(2_000_000), "deux millions");
        assert_eq!(say(200_000_000), "deux cents millions");
        assert_eq!(
            say(1_200_000),
            "un million deux cent mille"
        );
        assert_eq!(say(1_000_000_000), "un billion");
    }

    #[test]
    fn long_scale_milliards() {
        let long = PronounceOptions::default().short_scale(false);
        assert_eq!(say_with(1_000_000_000, long), "un milliard");
        assert_eq!(say_with(3_000_000_000i64, long), "trois milliards");
        assert_eq!(say_with(1_000_000_000_000i64, long), "un billion");
        assert_eq!(
            say_with(2_500_000_000i64, long),
            "deux milliards cinq cents millions"
        );
    }

    #[test]
    fn infinity_at_ceiling() {
        let ceiling = 10i128.pow(36);
        assert_eq!(say(ceiling), "infini");
        assert_eq!(
            say_with(ceiling, PronounceOptions::default().short_scale(false)),
            "infini"
        );
        assert_eq!(say(-1e40), "moins infini");
        for table in [&SHORT_SCALE, &LONG_SCALE] {
            assert_eq!(table.ceiling_exponent(), 36);
        }
    }

    // ==========================================================
    // Decimals, sign, scientific
    // ==========================================================

    #[test]
    fn decimals() {
        assert_eq!(say(5.2), "cinq virgule deux");
        assert_eq!(say(0.5), "zéro virgule cinq");
        assert_eq!(say(-2.5), "moins deux virgule cinq");
        assert_eq!(say(3.14159), "trois virgule un quatre");
    }

    #[test]
    fn decimals_stop_at_zero_digit() {
        assert_eq!(say(1.05), "un virgule");
        assert_eq!(say(2.05), "deux virgule");
        assert_eq!(say(2.001), "deux virgule");
        assert_eq!(
            say_with(2.105, PronounceOptions::default().places(3)),
            "deux virgule un"
        );
    }

    #[test]
    fn scientific() {
        let sci = PronounceOptions::default().scientific(true);
        assert_eq!(
            say_with(1500, sci),
            "un virgule cinq fois dix puissance trois"
        );
        assert_eq!(
            say_with(-0.0025, sci),
            "moins deux virgule cinq fois dix puissance moins trois"
        );
    }

    #[test]
    fn not_a_number() {
        assert_eq!(say(f64::NAN), "pas un nombre");
    }

    // ==========================================================
    // nice_number
    // ==========================================================

    #[test]
    fn nice_number_speech() {
        let d = &DEFAULT_DENOMINATORS;
        assert_eq!(French.nice_number(4.5, true, d), "4 et demi");
        assert_eq!(French.nice_number(2.75, true, d), "2 et 3 quarts");
        assert_eq!(French.nice_number(1.25, true, d), "1 et 1 quart");
        assert_eq!(French.nice_number(1.3333, true, d), "1 et 1 tiers");
        assert_eq!(French.nice_number(0.5, true, d), "un demi");
        assert_eq!(French.nice_number(0.6666, true, d), "2 tiers");
        assert_eq!(French.nice_number(-0.5, true, d), "moins un demi");
        assert_eq!(French.nice_number(1234.0, true, d), "1234");
    }

    #[test]
    fn nice_number_display() {
        let d = &DEFAULT_DENOMINATORS;
        assert_eq!(French.nice_number(4.5, false, d), "4 1/2");
        assert_eq!(French.nice_number(1234.0, false, d), "1 234");
        assert_eq!(French.nice_number(-1_234_567.0, false, d), "-1 234 567");
    }

    #[test]
    fn nice_number_fallback_uses_comma() {
        assert_eq!(French.nice_number(5.123_456, true, &[2, 4]), "5,123");
        assert_eq!(French.nice_number(5.123_456, false, &[2, 4]), "5,123");
        assert_eq!(French.nice_number(1234.5678, false, &[2]), "1 234,568");
    }

    // ==========================================================
    // nice_time
    // ==========================================================

    #[test]
    fn twenty_four_hour_speech() {
        let opts = TimeOptions::default().use_24_hour(true);
        assert_eq!(at(0, 0, opts), "minuit");
        assert_eq!(at(12, 0, opts), "midi");
        assert_eq!(at(1, 0, opts), "une heure");
        assert_eq!(at(13, 30, opts), "treize heures trente");
        assert_eq!(at(21, 0, opts), "vingt-et-une heures");
        assert_eq!(at(21, 5, opts), "vingt-et-une heures cinq");
        assert_eq!(at(8, 1, opts), "huit heures un");
    }

    #[test]
    fn twelve_hour_idioms() {
        let opts = TimeOptions::default();
        assert_eq!(at(5, 0, opts), "cinq heures");
        assert_eq!(at(5, 15, opts), "cinq heures et quart");
        assert_eq!(at(5, 30, opts), "cinq heures et demi");
        assert_eq!(at(5, 35, opts), "six heures moins vingt-cinq");
        assert_eq!(at(5, 45, opts), "six heures moins le quart");
        assert_eq!(at(5, 50, opts), "six heures moins dix");
        assert_eq!(at(14, 10, opts), "deux heures dix");
        assert_eq!(at(13, 0, opts), "une heure");
        assert_eq!(at(12, 40, opts), "une heure moins vingt");
        assert_eq!(at(0, 45, opts), "une heure moins le quart");
    }

    #[test]
    fn twelve_hour_rolls_over_to_midnight_and_noon() {
        let opts = TimeOptions::default();
        assert_eq!(at(11, 45, opts), "midi moins le quart");
        assert_eq!(at(23, 45, opts), "minuit moins le quart");
        assert_eq!(at(23, 55, opts), "minuit moins cinq");
    }

    #[test]
    fn twelve_hour_ampm_buckets() {
        let opts = TimeOptions::default().use_ampm(true);
        assert_eq!(at(8, 0, opts), "huit heures du matin");
        assert_eq!(at(15, 0, opts), "trois heures de l'après-midi");
        assert_eq!(at(20, 30, opts), "huit heures et demi du soir");
        assert_eq!(at(17, 45, opts), "six heures moins le quart du soir");
        assert_eq!(at(0, 0, opts), "minuit");
        assert_eq!(at(12, 0, opts), "midi");
    }

    #[test]
    fn display_matches_numeric_clock() {
        assert_eq!(at(5, 6, TimeOptions::display()), "5:06");
        assert_eq!(at(17, 6, TimeOptions::display().use_24_hour(true)), "17:06");
    }
}
