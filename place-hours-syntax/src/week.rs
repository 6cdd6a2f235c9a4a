use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convention used to number days of the week from 0 to 6.
///
/// Place APIs count from Sunday, which is the default.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The day numbered 0 in this convention.
    pub fn first_day(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Resolve a day index, return `None` if it is not in `0..7`.
    ///
    /// ```
    /// use place_hours_syntax::{WeekStart, Weekday};
    ///
    /// assert_eq!(WeekStart::Sunday.weekday(0), Some(Weekday::Sun));
    /// assert_eq!(WeekStart::Sunday.weekday(6), Some(Weekday::Sat));
    /// assert_eq!(WeekStart::Monday.weekday(6), Some(Weekday::Sun));
    /// assert_eq!(WeekStart::Monday.weekday(7), None);
    /// ```
    pub fn weekday(self, index: u8) -> Option<Weekday> {
        if index > 6 {
            return None;
        }

        let first = self.first_day().num_days_from_monday() as u8;
        Weekday::try_from((first + index) % 7).ok()
    }

    /// Index of a day in this convention.
    ///
    /// ```
    /// use place_hours_syntax::{WeekStart, Weekday};
    ///
    /// assert_eq!(WeekStart::Sunday.index(Weekday::Mon), 1);
    /// assert_eq!(WeekStart::Monday.index(Weekday::Sun), 6);
    /// ```
    pub fn index(self, day: Weekday) -> u8 {
        let first = self.first_day().num_days_from_monday();
        ((day.num_days_from_monday() + 7 - first) % 7) as u8
    }

    /// Days of a full week, in this convention's order.
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        (0..7).filter_map(move |index| self.weekday(index))
    }
}
