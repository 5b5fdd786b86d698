#![no_main]

use libfuzzer_sys::fuzz_target;
use parlance::{FormatConfig, Speaker};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // Loaders return errors, never panic.
    for loaded in [
        FormatConfig::from_toml_str(text),
        FormatConfig::from_json_str(text),
    ] {
        let Ok(config) = loaded else {
            continue;
        };
        // A config that validates must build a speaker.
        let valid = config.validate().is_empty();
        assert_eq!(Speaker::new(config).is_ok(), valid);
    }
});
