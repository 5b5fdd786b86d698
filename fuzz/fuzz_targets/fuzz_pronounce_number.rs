#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parlance::{ClockTime, Lang, Number, PronounceOptions, TimeOptions, formatter};

#[derive(Debug, Arbitrary)]
enum Input {
    Integer(i128),
    Decimal(f64),
}

#[derive(Debug, Arbitrary)]
struct Case {
    input: Input,
    french: bool,
    places: u8,
    short_scale: bool,
    scientific: bool,
    speech: bool,
    denominators: Vec<u32>,
    hour: u8,
    minute: u8,
    use_24_hour: bool,
    use_ampm: bool,
}

fuzz_target!(|case: Case| {
    if case.denominators.len() > 64 {
        return;
    }
    let lang = if case.french { Lang::French } else { Lang::English };
    let f = formatter(lang);

    let number = match case.input {
        Input::Integer(n) => Number::from(n),
        Input::Decimal(x) => Number::from(x),
    };
    let options = PronounceOptions::default()
        .places(usize::from(case.places % 32))
        .short_scale(case.short_scale)
        .scientific(case.scientific);

    // Pronunciation is total and never empty.
    let words = f.pronounce_number(number, options);
    assert!(!words.is_empty());

    // Negating a finite nonzero integer only adds the sign word.
    if let Input::Integer(n) = case.input
        && n > 0
        && !case.scientific
    {
        let negative = f.pronounce_number(Number::from(-n), options);
        assert!(negative.ends_with(words.as_str()), "{negative} / {words}");
    }

    // nice_number is total for any denominators, including 0 and > 20.
    let x = number.to_f64();
    let text = f.nice_number(x, case.speech, &case.denominators);
    assert!(!text.is_empty());

    // Every valid clock time formats.
    if let Ok(time) = ClockTime::new(u32::from(case.hour), u32::from(case.minute)) {
        let opts = TimeOptions::new()
            .speech(case.speech)
            .use_24_hour(case.use_24_hour)
            .use_ampm(case.use_ampm);
        assert!(!f.nice_time(time, opts).is_empty());
    }
});
