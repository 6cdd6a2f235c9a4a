use place_hours_syntax::WeekStart;

use crate::localization::{Localize, NoLocation};

/// All the context that can alter how the periods of a place are read and
/// evaluated.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    /// How times given by the caller relate to the local time of the place.
    pub locale: L,
    /// Convention used to number the days of raw periods.
    pub week_start: WeekStart,
}

impl<L> Context<L> {
    /// Attach a new locale component to this context.
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use place_hours::{Context, TzLocation};
    ///
    /// let offset = FixedOffset::east_opt(3600).unwrap();
    /// let ctx = Context::default().with_locale(TzLocation::new(offset));
    /// assert_eq!(ctx.locale.get_timezone(), &offset);
    /// ```
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { locale, week_start: self.week_start }
    }

    /// Change the convention used to number the days of raw periods.
    pub fn with_week_start(self, week_start: WeekStart) -> Self {
        Self { week_start, ..self }
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self { locale: NoLocation, week_start: WeekStart::default() }
    }
}
