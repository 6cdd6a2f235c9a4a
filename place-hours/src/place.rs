use chrono::{FixedOffset, NaiveDateTime, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use place_hours_syntax::RawPeriod;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::localization::{Localize, TzLocation};
use crate::presentation::{Description, DisplayOptions};
use crate::schedule::{normalize, NormalizedSchedule};
use crate::verdict::{evaluate, Verdict};

/// The opening hours section of a place.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PlaceOpeningHours {
    #[cfg_attr(feature = "serde", serde(default))]
    pub periods: Vec<RawPeriod>,
}

/// A place as returned by a place details request, restricted to the fields
/// relevant to opening hours.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Place {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub place_id: Option<String>,
    /// Offset of the local time of the place to UTC, in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub utc_offset: Option<i32>,
    /// Places with no listed hours don't have this section at all.
    #[cfg_attr(feature = "serde", serde(default))]
    pub opening_hours: Option<PlaceOpeningHours>,
}

impl Place {
    /// Create a place with a list of periods.
    pub fn new(name: impl Into<String>, periods: Vec<RawPeriod>) -> Self {
        Self {
            name: name.into(),
            opening_hours: Some(PlaceOpeningHours { periods }),
            ..Default::default()
        }
    }

    /// Raw periods of this place, if it has listed hours.
    pub fn periods(&self) -> Option<&[RawPeriod]> {
        self.opening_hours.as_ref().map(|oh| oh.periods.as_slice())
    }

    /// Check if the first period is the always open sentinel.
    ///
    /// ```
    /// use place_hours::{Place, RawPeriod};
    ///
    /// assert!(Place::new("Kiosk", vec![RawPeriod::always_open()]).is_always_open());
    /// assert!(!Place::new("Kiosk", Vec::new()).is_always_open());
    /// ```
    pub fn is_always_open(&self) -> bool {
        self.periods()
            .and_then(<[_]>::first)
            .is_some_and(RawPeriod::is_always_open)
    }

    /// The location to evaluate this place with, if its offset is known.
    pub fn location(&self) -> Option<TzLocation<FixedOffset>> {
        TzLocation::from_utc_offset_minutes(self.utc_offset?)
    }

    /// The fixed offset of this place's local time, if it is known.
    pub fn timezone(&self) -> Option<FixedOffset> {
        self.location().map(|loc| *loc.get_timezone())
    }

    /// Normalize the periods of this place, `None` if it has no listed hours.
    pub fn schedule<L>(&self, ctx: &Context<L>) -> Option<Result<NormalizedSchedule>> {
        Some(normalize(self.periods()?, ctx.week_start))
    }

    /// Evaluate this place at a given time.
    ///
    /// Failures are contained to this place, which is then reported as not
    /// available.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use place_hours::{Context, Place, RawDayTime, RawPeriod};
    ///
    /// let place = Place::new(
    ///     "Bakery",
    ///     vec![RawPeriod::new(RawDayTime::new(1, "0700"), Some(RawDayTime::new(1, "1300")))],
    /// );
    ///
    /// // 2024-06-03 is a monday
    /// let now = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(8, 0, 0).unwrap();
    /// assert!(place.status(now, &Context::default()).is_open());
    /// ```
    pub fn status<L: Localize>(
        &self,
        now: L::DateTime,
        ctx: &Context<L>,
    ) -> PlaceStatus<L::DateTime> {
        let Some(result) = self.naive_status(ctx.locale.naive(now), ctx) else {
            return PlaceStatus::NotAvailable(None);
        };

        match result {
            Ok(verdict) => PlaceStatus::Available(verdict.map(|dt| ctx.locale.datetime(dt))),
            Err(err) => {
                #[cfg(feature = "log")]
                log::warn!("Hours of {} are not available: {err}", self.name);

                PlaceStatus::NotAvailable(Some(err))
            }
        }
    }

    fn naive_status<L>(&self, now: NaiveDateTime, ctx: &Context<L>) -> Option<Result<Verdict>> {
        if self.is_always_open() {
            return Some(Ok(Verdict::AlwaysOpen));
        }

        let result = self
            .schedule(ctx)?
            .and_then(|schedule| evaluate(&schedule, false, now));

        Some(result)
    }
}

/// The outcome of the evaluation of a single place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceStatus<D = NaiveDateTime> {
    Available(Verdict<D>),
    /// The hours couldn't be evaluated, the error is `None` when the place
    /// doesn't list any hours.
    NotAvailable(Option<Error>),
}

impl<D> PlaceStatus<D> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Available(verdict) if verdict.is_open())
    }

    pub fn verdict(&self) -> Option<&Verdict<D>> {
        match self {
            Self::Available(verdict) => Some(verdict),
            Self::NotAvailable(_) => None,
        }
    }
}

impl<D> PlaceStatus<D>
where
    D: Clone + Timelike + std::ops::Sub<D, Output = chrono::Duration>,
{
    /// Describe this status, see [`Verdict::describe`].
    pub fn describe(&self, now: &D, options: &DisplayOptions) -> Description {
        match self {
            Self::Available(verdict) => verdict.describe(now, options),
            Self::NotAvailable(_) => Description::NotAvailable,
        }
    }
}

/// Evaluate a batch of places at the same time, a place failing doesn't
/// affect the others.
pub fn evaluate_places<'p, L: Localize>(
    places: impl IntoIterator<Item = &'p Place>,
    now: L::DateTime,
    ctx: &Context<L>,
) -> Vec<PlaceStatus<L::DateTime>> {
    places
        .into_iter()
        .map(|place| place.status(now.clone(), ctx))
        .collect()
}
