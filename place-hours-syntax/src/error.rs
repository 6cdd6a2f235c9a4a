use std::fmt;

use crate::period::DayTime;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    InvalidTime(String),
    InvalidDay(u8),
    MissingClose(DayTime),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTime(raw) => write!(f, "invalid time `{raw}`: expected 4 digits `HHmm`"),
            Self::InvalidDay(day) => write!(f, "invalid day index {day}: expected 0 to 6"),
            Self::MissingClose(open) => write!(f, "period opening on {open} never closes"),
        }
    }
}

impl std::error::Error for Error {}
