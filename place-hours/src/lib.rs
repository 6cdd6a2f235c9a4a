#![doc = include_str!("../../README.md")]

pub mod context;
pub mod error;
pub mod localization;
pub mod place;
pub mod presentation;
pub mod schedule;
pub mod verdict;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::Context;
pub use crate::error::{Error, Result};
pub use crate::localization::{Localize, NoLocation, TzLocation};
pub use crate::place::{evaluate_places, Place, PlaceOpeningHours, PlaceStatus};
pub use crate::presentation::{humanize, Description, DisplayOptions, Language, TimeFormat};
pub use crate::schedule::{normalize, DayHours, NormalizedSchedule};
pub use crate::verdict::{evaluate, evaluate_on, BoundaryKind, Verdict};

pub use place_hours_syntax::{
    ClockTime, DayTime, RawDayTime, RawPeriod, WeekStart, WeeklyPeriod, Weekday,
};
