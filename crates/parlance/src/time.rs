#![forbid(unsafe_code)]

//! Clock times and their numeric display.
//!
//! [`ClockTime`] carries only the hour and minute that the time
//! verbalizers consume. It is built from any [`chrono::Timelike`] value or
//! through the validating [`ClockTime::new`].

use chrono::Timelike;
use thiserror::Error;

/// Errors produced when building a [`ClockTime`] from raw fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("hour out of range: {hour} (expected 0..=23)")]
    HourOutOfRange { hour: u32 },

    #[error("minute out of range: {minute} (expected 0..=59)")]
    MinuteOutOfRange { minute: u32 },
}

/// Half of the day in 12-hour notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Uppercase display marker (`"AM"` / `"PM"`).
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// An hour and minute of the local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };
    pub const NOON: Self = Self {
        hour: 12,
        minute: 0,
    };

    /// Build a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockError> {
        if hour > 23 {
            return Err(ClockError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange { minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Take the hour and minute of a chrono time or datetime.
    #[must_use]
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        // chrono keeps minute() below 60 even on leap seconds.
        Self {
            hour: time.hour().min(23) as u8,
            minute: time.minute().min(59) as u8,
        }
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour as u32
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute as u32
    }

    /// Hour on a 12-hour dial: 0 and 12 both read as 12.
    #[must_use]
    pub const fn hour12(self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h as u32,
        }
    }

    #[must_use]
    pub const fn meridiem(self) -> Meridiem {
        if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Numeric display string.
    ///
    /// 24-hour: `"HH:MM"`. 12-hour: `"h:MM"`, or `"h:MM AM"` with
    /// `use_ampm`; the hour never has a leading zero.
    #[must_use]
    pub fn display(self, use_24_hour: bool, use_ampm: bool) -> String {
        if use_24_hour {
            format!("{:02}:{:02}", self.hour, self.minute)
        } else if use_ampm {
            format!(
                "{}:{:02} {}",
                self.hour12(),
                self.minute,
                self.meridiem().marker()
            )
        } else {
            format!("{}:{:02}", self.hour12(), self.minute)
        }
    }
}

/// Flags for one time-formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOptions {
    /// Words for speech (true) or digits for display (false).
    pub speech: bool,
    /// 24-hour clock instead of 12-hour.
    pub use_24_hour: bool,
    /// Append the AM/PM marker in 12-hour mode.
    pub use_ampm: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            speech: true,
            use_24_hour: false,
            use_ampm: false,
        }
    }
}

impl TimeOptions {
    /// Defaults: speech, 12-hour, no AM/PM.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display digits instead of words.
    #[must_use]
    pub fn display() -> Self {
        Self {
            speech: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn speech(mut self, enabled: bool) -> Self {
        self.speech = enabled;
        self
    }

    #[must_use]
    pub fn use_24_hour(mut self, enabled: bool) -> Self {
        self.use_24_hour = enabled;
        self
    }

    #[must_use]
    pub fn use_ampm(mut self, enabled: bool) -> Self {
        self.use_ampm = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn new_validates_ranges() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(
            ClockTime::new(24, 0),
            Err(ClockError::HourOutOfRange { hour: 24 })
        );
        assert_eq!(
            ClockTime::new(5, 60),
            Err(ClockError::MinuteOutOfRange { minute: 60 })
        );
    }

    #[test]
    fn error_messages() {
        let err = ClockTime::new(31, 0).unwrap_err();
        assert_eq!(err.to_string(), "hour out of range: 31 (expected 0..=23)");
    }

    #[test]
    fn from_chrono() {
        let t = NaiveTime::from_hms_opt(13, 22, 45).unwrap();
        let clock = ClockTime::from_timelike(&t);
        assert_eq!((clock.hour(), clock.minute()), (13, 22));
    }

    #[test]
    fn twelve_hour_dial() {
        assert_eq!(ClockTime::MIDNIGHT.hour12(), 12);
        assert_eq!(ClockTime::NOON.hour12(), 12);
        assert_eq!(ClockTime::new(13, 0).unwrap().hour12(), 1);
        assert_eq!(ClockTime::new(11, 0).unwrap().hour12(), 11);
    }

    #[test]
    fn meridiem_boundaries() {
        assert_eq!(ClockTime::new(11, 59).unwrap().meridiem(), Meridiem::Am);
        assert_eq!(ClockTime::NOON.meridiem(), Meridiem::Pm);
        assert_eq!(ClockTime::MIDNIGHT.meridiem(), Meridiem::Am);
    }

    #[test]
    fn display_strings() {
        let t = ClockTime::new(5, 6).unwrap();
        assert_eq!(t.display(true, false), "05:06");
        assert_eq!(t.display(false, false), "5:06");
        assert_eq!(t.display(false, true), "5:06 AM");

        let t = ClockTime::new(22, 30).unwrap();
        assert_eq!(t.display(true, true), "22:30");
        assert_eq!(t.display(false, false), "10:30");
        assert_eq!(t.display(false, true), "10:30 PM");

        assert_eq!(ClockTime::MIDNIGHT.display(false, true), "12:00 AM");
    }

    #[test]
    fn options_builder() {
        let opts = TimeOptions::new().use_24_hour(true).use_ampm(true);
        assert!(opts.speech && opts.use_24_hour && opts.use_ampm);
        assert!(!TimeOptions::display().speech);
    }
}
