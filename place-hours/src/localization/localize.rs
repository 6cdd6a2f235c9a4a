use std::fmt::Debug;

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, TimeZone};

/// Specifies how dates should be localized while evaluating opening hours.
///
/// Schedules are always evaluated in the local time of the place, this trait
/// converts the caller's notion of time to and from a local naive datetime.
pub trait Localize: Clone + Debug {
    /// The type for localized date & time.
    type DateTime: Clone + Debug;

    /// Convert a localized datetime to the local naive datetime of the place.
    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime;

    /// Localize a naive datetime expressed in the local time of the place.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime;
}

// --
// -- NoLocation
// --

/// Time is already expressed in the local time of the place.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }
}

// --
// -- TzLocation
// --

/// The place is in a given timezone.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> TzLocation<Tz> {
    /// Create a new location context which only contains timezone
    /// information.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Get the timezone for this location.
    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

impl TzLocation<FixedOffset> {
    /// Create a location from an offset to UTC in minutes, as found in the
    /// `utc_offset` field of a place.
    ///
    /// ```
    /// use place_hours::TzLocation;
    ///
    /// assert!(TzLocation::from_utc_offset_minutes(120).is_some());
    /// assert!(TzLocation::from_utc_offset_minutes(24 * 60).is_none());
    /// ```
    pub fn from_utc_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::new)
    }
}

#[cfg(feature = "tz")]
impl TzLocation<chrono_tz::Tz> {
    /// Create a location from an IANA timezone name.
    ///
    /// ```
    /// use place_hours::TzLocation;
    ///
    /// assert!(TzLocation::from_name("Europe/Stockholm").is_some());
    /// assert!(TzLocation::from_name("Middle/Earth").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok().map(Self::new)
    }
}

impl<Tz> Localize for TzLocation<Tz>
where
    Tz: TimeZone + Debug,
    Tz::Offset: Debug,
{
    type DateTime = DateTime<Tz>;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt.with_timezone(&self.tz).naive_local()
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        localize_next_valid(naive, &self.tz)
    }
}

/// Localize input datetime to its next valid occurrence: skipped local times
/// are pushed forward and ambiguous ones resolve to the earliest.
fn localize_next_valid<Tz: TimeZone + Debug>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    let mut curr = naive;

    loop {
        match tz.from_local_datetime(&curr) {
            LocalResult::Single(res) => {
                #[cfg(feature = "log")]
                if curr != naive {
                    log::warn!("Skipped invalid local times from {naive} to {curr} in {tz:?}");
                }

                return res;
            }
            LocalResult::Ambiguous(res, _other) => {
                #[cfg(feature = "log")]
                log::warn!(
                    "Ambiguous local time {curr} in {tz:?}: using {res:?} rather than {_other:?}"
                );

                return res;
            }
            LocalResult::None => curr += Duration::minutes(1),
        }
    }
}
