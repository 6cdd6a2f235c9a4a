use chrono::{Days, NaiveDate, NaiveDateTime, Weekday};

use place_hours_syntax::{DayTime, RawPeriod, WeekStart, WeeklyPeriod};

use crate::error::Result;

/// The hours of a single day: the place opens at `open` and closes at the
/// next occurrence of `close`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayHours {
    pub open: DayTime,
    pub close: DayTime,
}

impl DayHours {
    pub fn new(open: DayTime, close: DayTime) -> Self {
        Self { open, close }
    }

    /// Number of days between the opening and the closing day.
    ///
    /// A period closing on the day it opens at an earlier time is an
    /// overnight period and closes on the next day.
    ///
    /// ```
    /// use place_hours::{ClockTime, DayHours, DayTime, Weekday};
    ///
    /// let at = |day, hour| DayTime::new(day, ClockTime::new(hour, 0).unwrap());
    ///
    /// assert_eq!(DayHours::new(at(Weekday::Mon, 9), at(Weekday::Mon, 17)).days_open(), 0);
    /// assert_eq!(DayHours::new(at(Weekday::Fri, 22), at(Weekday::Sat, 2)).days_open(), 1);
    /// assert_eq!(DayHours::new(at(Weekday::Sat, 22), at(Weekday::Sun, 2)).days_open(), 1);
    /// assert_eq!(DayHours::new(at(Weekday::Mon, 22), at(Weekday::Mon, 2)).days_open(), 1);
    /// ```
    pub fn days_open(&self) -> u64 {
        let days = (7 + self.close.day.num_days_from_monday()
            - self.open.day.num_days_from_monday())
            % 7;

        if days == 0 && self.close.time <= self.open.time {
            1
        } else {
            days.into()
        }
    }

    /// Anchor these hours on a date, which is expected to fall on the opening
    /// weekday. Return `None` if the result can't be represented.
    pub fn resolve(&self, open_date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let open = open_date.and_time(self.open.time.into());

        let close = open_date
            .checked_add_days(Days::new(self.days_open()))?
            .and_time(self.close.time.into());

        Some((open, close))
    }
}

/// Opening hours of a place for each day of the week.
///
/// There is at most one entry per day, keyed by the day the hours open on.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct NormalizedSchedule {
    /// Indexed by the number of days from monday.
    days: [Option<DayHours>; 7],
}

impl NormalizedSchedule {
    /// Create an empty schedule, which never opens.
    ///
    /// ```
    /// use place_hours::NormalizedSchedule;
    ///
    /// assert!(NormalizedSchedule::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from validated periods.
    ///
    /// The always open sentinel is not an interval and is skipped, when
    /// several periods open on the same day the last one wins.
    pub fn from_periods(periods: impl IntoIterator<Item = WeeklyPeriod>) -> Self {
        let mut schedule = Self::new();

        for period in periods {
            if let WeeklyPeriod::Interval { open, close } = period {
                let _replaced = schedule.insert(DayHours::new(open, close));

                #[cfg(feature = "log")]
                if let Some(prev) = _replaced {
                    log::warn!(
                        "Several periods open on {}: {} - {} replaces {} - {}",
                        open.day,
                        open,
                        close,
                        prev.open,
                        prev.close,
                    );
                }
            }
        }

        schedule
    }

    /// Check if no day has any hours.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    /// Get the hours opening on a given day.
    pub fn get(&self, day: Weekday) -> Option<&DayHours> {
        self.days[day.num_days_from_monday() as usize].as_ref()
    }

    /// Set the hours of their opening day and return the hours they replace.
    pub fn insert(&mut self, hours: DayHours) -> Option<DayHours> {
        self.days[hours.open.day.num_days_from_monday() as usize].replace(hours)
    }

    /// Iterate over days that have hours, in the order of given convention.
    ///
    /// ```
    /// use place_hours::{normalize, RawDayTime, RawPeriod, WeekStart, Weekday};
    ///
    /// let periods = [
    ///     RawPeriod::new(RawDayTime::new(0, "1000"), Some(RawDayTime::new(0, "1400"))),
    ///     RawPeriod::new(RawDayTime::new(1, "0900"), Some(RawDayTime::new(1, "1700"))),
    /// ];
    ///
    /// let schedule = normalize(&periods, WeekStart::Sunday).unwrap();
    /// let days: Vec<_> = schedule.iter(WeekStart::Monday).map(|(day, _)| day).collect();
    /// assert_eq!(days, [Weekday::Mon, Weekday::Sun]);
    /// ```
    pub fn iter(&self, week_start: WeekStart) -> impl Iterator<Item = (Weekday, &DayHours)> {
        week_start
            .days()
            .filter_map(|day| Some((day, self.get(day)?)))
    }
}

/// Validate raw periods and gather them into a per-day schedule.
///
/// Day indices of `periods` are read with `week_start` convention. Any
/// malformed period fails the whole schedule.
///
/// ```
/// use place_hours::{normalize, Error, RawDayTime, RawPeriod, WeekStart, Weekday};
///
/// let periods = [RawPeriod::new(RawDayTime::new(1, "0900"), Some(RawDayTime::new(1, "1700")))];
/// let schedule = normalize(&periods, WeekStart::Sunday).unwrap();
/// assert!(schedule.get(Weekday::Mon).is_some());
///
/// let periods = [RawPeriod::new(RawDayTime::new(1, "9:00"), Some(RawDayTime::new(1, "1700")))];
/// assert!(matches!(normalize(&periods, WeekStart::Sunday), Err(Error::MalformedSchedule(_))));
/// ```
pub fn normalize(periods: &[RawPeriod], week_start: WeekStart) -> Result<NormalizedSchedule> {
    let periods = periods
        .iter()
        .map(|raw| WeeklyPeriod::from_raw(raw, week_start))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    #[cfg(feature = "log")]
    log::debug!("Normalizing {} periods", periods.len());

    Ok(NormalizedSchedule::from_periods(periods))
}
