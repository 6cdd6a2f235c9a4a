use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};

/// A time of the day with a precision of one minute.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// First minute of the day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a new time of the day, this may return `None` if input values
    /// are out of range.
    ///
    /// ```
    /// use place_hours_syntax::ClockTime;
    ///
    /// assert!(ClockTime::new(23, 59).is_some());
    /// assert!(ClockTime::new(24, 0).is_none()); // hours are out of bound
    /// assert!(ClockTime::new(12, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Parse the compact `HHmm` notation used by periods.
    ///
    /// ```
    /// use place_hours_syntax::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse("0930").unwrap(), ClockTime::new(9, 30).unwrap());
    /// assert!(ClockTime::parse("930").is_err());
    /// assert!(ClockTime::parse("25:00").is_err());
    /// assert!(ClockTime::parse("2500").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(raw.to_string());
        let digits = raw.as_bytes();

        if digits.len() != 4 || !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = 10 * (digits[0] - b'0') + (digits[1] - b'0');
        let minute = 10 * (digits[2] - b'0') + (digits[3] - b'0');
        Self::new(hour, minute).ok_or_else(invalid)
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<ClockTime> for NaiveTime {
    #[inline]
    fn from(time: ClockTime) -> NaiveTime {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0)
            .expect("invalid ClockTime")
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds are truncated.
    #[inline]
    fn from(time: NaiveTime) -> ClockTime {
        Self {
            hour: time.hour().try_into().expect("invalid NaiveTime"),
            minute: time.minute().try_into().expect("invalid NaiveTime"),
        }
    }
}
