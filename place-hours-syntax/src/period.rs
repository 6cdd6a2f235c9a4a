use std::fmt::Display;

use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock_time::ClockTime;
use crate::error::{Error, Result};
use crate::week::WeekStart;

// --
// -- DayTime
// --

/// A weekday paired with a time of the day.
///
/// This is a point of a recurring week rather than of the calendar: it only
/// becomes a concrete instant once anchored on a date falling on `day`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayTime {
    pub day: Weekday,
    pub time: ClockTime,
}

impl DayTime {
    pub fn new(day: Weekday, time: ClockTime) -> Self {
        Self { day, time }
    }
}

impl Display for DayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

// --
// -- RawDayTime
// --

/// One end of a period, as it is served by the API: a day index and a
/// `HHmm` string.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RawDayTime {
    pub day: u8,
    pub time: String,
}

impl RawDayTime {
    pub fn new(day: u8, time: impl Into<String>) -> Self {
        Self { day, time: time.into() }
    }

    /// Validate both fields, reading the day index with given convention.
    ///
    /// ```
    /// use place_hours_syntax::{ClockTime, RawDayTime, WeekStart, Weekday};
    ///
    /// let parsed = RawDayTime::new(5, "2200").parse(WeekStart::Sunday).unwrap();
    /// assert_eq!(parsed.day, Weekday::Fri);
    /// assert_eq!(parsed.time, ClockTime::new(22, 0).unwrap());
    ///
    /// assert!(RawDayTime::new(7, "2200").parse(WeekStart::Sunday).is_err());
    /// ```
    pub fn parse(&self, week_start: WeekStart) -> Result<DayTime> {
        let day = week_start
            .weekday(self.day)
            .ok_or(Error::InvalidDay(self.day))?;

        let time = ClockTime::parse(&self.time)?;
        Ok(DayTime { day, time })
    }
}

// --
// -- RawPeriod
// --

/// A recurring period as it is served by the API.
///
/// The `close` end is only omitted by the always open sentinel, see
/// [`RawPeriod::is_always_open`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RawPeriod {
    pub open: RawDayTime,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub close: Option<RawDayTime>,
}

impl RawPeriod {
    pub fn new(open: RawDayTime, close: Option<RawDayTime>) -> Self {
        Self { open, close }
    }

    /// The sentinel used by the API for places that never close.
    pub fn always_open() -> Self {
        Self { open: RawDayTime::new(0, "0000"), close: None }
    }

    /// Check if this period is the always open sentinel: opening on day 0 at
    /// `0000` and never closing.
    ///
    /// ```
    /// use place_hours_syntax::{RawDayTime, RawPeriod};
    ///
    /// assert!(RawPeriod::always_open().is_always_open());
    /// assert!(!RawPeriod::new(RawDayTime::new(1, "0000"), None).is_always_open());
    /// ```
    pub fn is_always_open(&self) -> bool {
        self.open.day == 0 && self.open.time == "0000" && self.close.is_none()
    }
}

// --
// -- WeeklyPeriod
// --

/// A validated period.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeeklyPeriod {
    /// The place never closes, this is not an actual interval.
    AlwaysOpen,
    /// Open from `open` to the next occurrence of `close`.
    Interval { open: DayTime, close: DayTime },
}

impl WeeklyPeriod {
    /// Validate a raw period.
    ///
    /// ```
    /// use place_hours_syntax::{RawDayTime, RawPeriod, WeekStart, WeeklyPeriod};
    ///
    /// let sentinel = WeeklyPeriod::from_raw(&RawPeriod::always_open(), WeekStart::Sunday);
    /// assert_eq!(sentinel, Ok(WeeklyPeriod::AlwaysOpen));
    ///
    /// let never_closes = RawPeriod::new(RawDayTime::new(3, "1000"), None);
    /// assert!(WeeklyPeriod::from_raw(&never_closes, WeekStart::Sunday).is_err());
    /// ```
    pub fn from_raw(raw: &RawPeriod, week_start: WeekStart) -> Result<Self> {
        if raw.is_always_open() {
            return Ok(Self::AlwaysOpen);
        }

        let open = raw.open.parse(week_start)?;

        let close = match &raw.close {
            Some(close) => close.parse(week_start)?,
            None => return Err(Error::MissingClose(open)),
        };

        Ok(Self::Interval { open, close })
    }

    pub fn is_always_open(&self) -> bool {
        matches!(self, Self::AlwaysOpen)
    }
}

impl Display for WeeklyPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlwaysOpen => write!(f, "always open"),
            Self::Interval { open, close } => write!(f, "{open} - {close}"),
        }
    }
}
