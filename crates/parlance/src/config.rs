#![forbid(unsafe_code)]

//! Formatting preferences as data.
//!
//! [`FormatConfig`] gathers every knob of the three formatting operations
//! (language, decimal places, scale convention, scientific mode, allowed
//! denominators, clock style) so an application can load them once from
//! TOML or JSON instead of threading flags through each call.
//!
//! # Loading
//!
//! ```toml
//! # parlance.toml
//! lang = "fr"
//! places = 3
//! short_scale = false
//! denominators = [2, 3, 4]
//! use_24_hour = true
//! ```
//!
//! ```rust,ignore
//! let config = FormatConfig::from_toml_file("parlance.toml")?;
//! let config = FormatConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Every field has a default matching the per-call defaults, so
//! `FormatConfig::default()` behaves like calling the free functions with
//! [`PronounceOptions::default`] and [`TimeOptions::default`].

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parlance_i18n::Lang;

use crate::fraction::DEFAULT_DENOMINATORS;
use crate::number::PronounceOptions;
use crate::time::TimeOptions;

/// Largest accepted `places`; shortest round-trip decimals of an `f64`
/// never carry more significant digits than this.
pub const MAX_PLACES: usize = 20;

/// Largest denominator with a fraction word in every language.
pub const MAX_DENOMINATOR: u32 = 20;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors from loading or validating a [`FormatConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Formatting preferences for one [`Speaker`](crate::Speaker).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FormatConfig {
    /// Output language.
    pub lang: Lang,

    /// Maximum decimal digits spoken by `pronounce_number`.
    pub places: usize,

    /// Short scale (billion = 10^9) or long scale (billion = 10^12).
    pub short_scale: bool,

    /// Pronounce numbers in scientific notation.
    pub scientific: bool,

    /// Denominators tried by `nice_number`, in order of preference.
    pub denominators: Vec<u32>,

    /// 24-hour clock for `nice_time`.
    pub use_24_hour: bool,

    /// AM/PM marker on the 12-hour clock.
    pub use_ampm: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let pronounce = PronounceOptions::default();
        let time = TimeOptions::default();
        Self {
            lang: Lang::default(),
            places: pronounce.places,
            short_scale: pronounce.short_scale,
            scientific: pronounce.scientific,
            denominators: DEFAULT_DENOMINATORS.to_vec(),
            use_24_hour: time.use_24_hour,
            use_ampm: time.use_ampm,
        }
    }
}

impl FormatConfig {
    /// Default preferences for `lang`.
    #[must_use]
    pub fn for_lang(lang: Lang) -> Self {
        Self {
            lang,
            ..Self::default()
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every field is within its accepted range.
    ///
    /// Returns a list of problems. An empty list means the config is
    /// valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.places > MAX_PLACES {
            errors.push(format!(
                "places must be <= {MAX_PLACES}, got {}",
                self.places
            ));
        }

        if self.denominators.is_empty() {
            errors.push("denominators must not be empty".into());
        }

        for &den in &self.denominators {
            if den == 0 || den > MAX_DENOMINATOR {
                errors.push(format!(
                    "denominators must be in 1..={MAX_DENOMINATOR}, got {den}"
                ));
            }
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The pronunciation options these preferences describe.
    #[must_use]
    pub fn pronounce_options(&self) -> PronounceOptions {
        PronounceOptions::default()
            .places(self.places)
            .short_scale(self.short_scale)
            .scientific(self.scientific)
    }

    /// The clock options these preferences describe, for speech or display.
    #[must_use]
    pub fn time_options(&self, speech: bool) -> TimeOptions {
        TimeOptions::new()
            .speech(speech)
            .use_24_hour(self.use_24_hour)
            .use_ampm(self.use_ampm)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
