#![doc = include_str!("../README.md")]

pub mod clock_time;
pub mod error;
pub mod period;
pub mod week;

#[cfg(test)]
mod tests;

pub use chrono::Weekday;
pub use clock_time::ClockTime;
pub use error::{Error, Result};
pub use period::{DayTime, RawDayTime, RawPeriod, WeeklyPeriod};
pub use week::WeekStart;
