use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons for the hours of a place not to be available.
///
/// Both are local to a single place: they are recovered from by displaying
/// the place as not available, see [`crate::PlaceStatus`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// A raw period could not be turned into instants.
    MalformedSchedule(place_hours_syntax::Error),
    /// The schedule is valid but no weekday has any listed hours.
    NoScheduleForWeek,
}

impl From<place_hours_syntax::Error> for Error {
    fn from(err: place_hours_syntax::Error) -> Self {
        Self::MalformedSchedule(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSchedule(err) => write!(f, "malformed schedule: {err}"),
            Self::NoScheduleForWeek => write!(f, "no opening hours listed for any day of the week"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedSchedule(err) => Some(err),
            Self::NoScheduleForWeek => None,
        }
    }
}
