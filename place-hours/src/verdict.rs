use std::ops::Sub;

use chrono::{Datelike, Days, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::{Error, Result};
use crate::presentation::{humanize, Description, DisplayOptions};
use crate::schedule::NormalizedSchedule;

/// Which kind of change the boundary of a [`Verdict`] is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoundaryKind {
    ClosingTime,
    OpeningTime,
}

/// Whether a place is open at some instant, and until when.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verdict<D = NaiveDateTime> {
    /// The place never closes.
    AlwaysOpen,
    /// The place is open and closes at `closes_at`.
    Open { closes_at: D },
    /// The place is closed and opens at `opens_at`.
    Closed { opens_at: D },
}

impl<D> Verdict<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed { .. })
    }

    /// The next instant the state of the place changes, if any.
    pub fn boundary(&self) -> Option<&D> {
        match self {
            Self::AlwaysOpen => None,
            Self::Open { closes_at } => Some(closes_at),
            Self::Closed { opens_at } => Some(opens_at),
        }
    }

    pub fn boundary_kind(&self) -> Option<BoundaryKind> {
        match self {
            Self::AlwaysOpen => None,
            Self::Open { .. } => Some(BoundaryKind::ClosingTime),
            Self::Closed { .. } => Some(BoundaryKind::OpeningTime),
        }
    }

    /// Convert the boundary of this verdict.
    ///
    /// ```
    /// use chrono::{FixedOffset, NaiveDate, TimeZone};
    /// use place_hours::Verdict;
    ///
    /// let closes_at = NaiveDate::from_ymd_opt(2024, 6, 3)
    ///     .unwrap()
    ///     .and_hms_opt(17, 0, 0)
    ///     .unwrap();
    ///
    /// let offset = FixedOffset::east_opt(7200).unwrap();
    /// let local = Verdict::Open { closes_at }
    ///     .map(|dt| offset.from_local_datetime(&dt).single().unwrap());
    /// assert_eq!(local.boundary().unwrap().naive_local(), closes_at);
    /// ```
    pub fn map<E>(self, func: impl FnOnce(D) -> E) -> Verdict<E> {
        match self {
            Self::AlwaysOpen => Verdict::AlwaysOpen,
            Self::Open { closes_at } => Verdict::Open { closes_at: func(closes_at) },
            Self::Closed { opens_at } => Verdict::Closed { opens_at: func(opens_at) },
        }
    }
}

impl<D> Verdict<D>
where
    D: Clone + Timelike + Sub<D, Output = Duration>,
{
    /// Time left before the boundary, which is never negative.
    pub fn time_until(&self, now: &D) -> Option<Duration> {
        let boundary = self.boundary()?.clone();
        Some(std::cmp::max(boundary - now.clone(), Duration::zero()))
    }

    /// Describe this verdict as configured by the host: either as the time
    /// left before the boundary or as the clock time of the boundary.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use place_hours::{Description, DisplayOptions, TimeFormat, Verdict};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let now = day.and_hms_opt(14, 0, 0).unwrap();
    /// let verdict = Verdict::Open { closes_at: day.and_hms_opt(17, 0, 0).unwrap() };
    ///
    /// let options = DisplayOptions::default();
    /// assert_eq!(verdict.describe(&now, &options), Description::ClosesIn("3 hours".into()));
    ///
    /// let options = DisplayOptions { show_time_until: false, ..Default::default() };
    /// assert_eq!(verdict.describe(&now, &options), Description::ClosesAt("17:00".into()));
    ///
    /// let options = DisplayOptions { time_format: TimeFormat::Hour12, ..options };
    /// assert_eq!(verdict.describe(&now, &options), Description::ClosesAt("5:00 PM".into()));
    /// ```
    pub fn describe(&self, now: &D, options: &DisplayOptions) -> Description {
        let Some(boundary) = self.boundary() else {
            return Description::AlwaysOpen;
        };

        let text = {
            if options.show_time_until {
                let left = self.time_until(now).unwrap_or_else(Duration::zero);
                humanize(left, options.language)
            } else {
                let time = NaiveTime::from_hms_opt(boundary.hour(), boundary.minute(), 0)
                    .unwrap_or(NaiveTime::MIN);

                options.time_format.format(time)
            }
        };

        match (self.boundary_kind(), options.show_time_until) {
            (Some(BoundaryKind::ClosingTime), true) => Description::ClosesIn(text),
            (Some(BoundaryKind::ClosingTime), false) => Description::ClosesAt(text),
            (_, true) => Description::OpensIn(text),
            (_, false) => Description::OpensAt(text),
        }
    }
}

/// Evaluate a schedule at a given local time, see [`evaluate_on`].
///
/// ```
/// use chrono::NaiveDate;
/// use place_hours::{evaluate, normalize, RawDayTime, RawPeriod, Verdict, WeekStart};
///
/// let periods = [RawPeriod::new(RawDayTime::new(5, "2200"), Some(RawDayTime::new(6, "0200")))];
/// let schedule = normalize(&periods, WeekStart::Sunday).unwrap();
///
/// // 2024-06-08 is a saturday
/// let day = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
///
/// assert_eq!(
///     evaluate(&schedule, false, day.and_hms_opt(1, 0, 0).unwrap()),
///     Ok(Verdict::Open { closes_at: day.and_hms_opt(2, 0, 0).unwrap() }),
/// );
/// ```
pub fn evaluate(
    schedule: &NormalizedSchedule,
    always_open: bool,
    now: NaiveDateTime,
) -> Result<Verdict> {
    evaluate_on(schedule, always_open, now, now.weekday())
}

/// Evaluate a schedule at local time `now`, which falls on `today`.
///
/// Checks are performed in the following order:
///
///  1. a place that is always open never has a boundary ;
///  2. the hours that opened yesterday may still be running after midnight ;
///  3. today's hours may be running or open later today ;
///  4. otherwise the place opens on the next day with any hours, which may be
///     the same weekday of next week.
///
/// A place that opened at `open` and closes at `close` is open strictly
/// between these two instants.
pub fn evaluate_on(
    schedule: &NormalizedSchedule,
    always_open: bool,
    now: NaiveDateTime,
    today: Weekday,
) -> Result<Verdict> {
    let verdict = evaluate_rules(schedule, always_open, now, today)?;

    #[cfg(feature = "log")]
    log::debug!("Evaluated {verdict:?} on {today} at {now}");

    Ok(verdict)
}

fn evaluate_rules(
    schedule: &NormalizedSchedule,
    always_open: bool,
    now: NaiveDateTime,
    today: Weekday,
) -> Result<Verdict> {
    if always_open {
        return Ok(Verdict::AlwaysOpen);
    }

    let date = now.date();
    let is_running = |(open, close): (NaiveDateTime, NaiveDateTime)| open < now && now < close;

    // Yesterday's hours that didn't end before midnight
    let from_yesterday = schedule
        .get(today.pred())
        .zip(date.checked_sub_days(Days::new(1)))
        .and_then(|(hours, yesterday)| hours.resolve(yesterday))
        .filter(|&range| is_running(range));

    if let Some((_, close)) = from_yesterday {
        return Ok(Verdict::Open { closes_at: close });
    }

    if let Some((open, close)) = schedule.get(today).and_then(|hours| hours.resolve(date)) {
        if now <= open {
            return Ok(Verdict::Closed { opens_at: open });
        }

        if is_running((open, close)) {
            return Ok(Verdict::Open { closes_at: close });
        }
    }

    // Walk through the following week, including next occurrence of today
    let mut day = today;

    for offset in 1..=7 {
        day = day.succ();

        let next_open = schedule
            .get(day)
            .zip(date.checked_add_days(Days::new(offset)))
            .and_then(|(hours, date)| hours.resolve(date));

        if let Some((open, _)) = next_open {
            return Ok(Verdict::Closed { opens_at: open });
        }
    }

    Err(Error::NoScheduleForWeek)
}
