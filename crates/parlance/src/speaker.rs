#![forbid(unsafe_code)]

//! A validated [`FormatConfig`] bound to its language's formatter.

use chrono::Timelike;
use tracing::debug;

use crate::config::{self, FormatConfig};
use crate::lang::{LanguageFormatter, formatter};
use crate::number::Number;
use crate::time::ClockTime;

/// Formats numbers and times with one fixed set of preferences.
#[derive(Clone)]
pub struct Speaker {
    config: FormatConfig,
    formatter: &'static dyn LanguageFormatter,
}

impl std::fmt::Debug for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speaker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Speaker {
    /// Validate `config` and select its formatter.
    pub fn new(config: FormatConfig) -> config::Result<Self> {
        let config = config.validated()?;
        debug!(lang = %config.lang, "speaker ready");
        Ok(Self {
            formatter: formatter(config.lang),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Mixed fraction over the configured denominators.
    #[must_use]
    pub fn nice_number(&self, value: f64, speech: bool) -> String {
        self.formatter
            .nice_number(value, speech, &self.config.denominators)
    }

    #[must_use]
    pub fn pronounce_number(&self, number: impl Into<Number>) -> String {
        self.formatter
            .pronounce_number(number.into(), self.config.pronounce_options())
    }

    /// Clock time on the configured dial.
    #[must_use]
    pub fn nice_time<T: Timelike>(&self, time: &T, speech: bool) -> String {
        self.formatter.nice_time(
            ClockTime::from_timelike(time),
            self.config.time_options(speech),
        )
    }
}
