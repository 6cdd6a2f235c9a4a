use chrono::{FixedOffset, TimeZone, Utc};
use chrono_tz::Europe::Stockholm;
use chrono_tz::UTC;

use crate::{
    datetime, periods, Context, Description, DisplayOptions, Localize, Place, PlaceStatus,
    TzLocation, Verdict,
};

#[test]
fn no_location_is_identity() {
    let ctx = Context::default();
    let dt = datetime!("2024-06-03 12:00");
    assert_eq!(ctx.locale.naive(dt), dt);
    assert_eq!(ctx.locale.datetime(dt), dt);
}

#[test]
fn fixed_offset() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let ctx = Context::default().with_locale(TzLocation::new(offset));
    let place = Place::new("Museum", periods! { (1, "0900") => (1, "1700") });

    // 06:30 UTC is 08:30 in the place
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 6, 30, 0).unwrap().with_timezone(&offset);
    let status = place.status(now, &ctx);

    assert_eq!(
        status,
        PlaceStatus::Available(Verdict::Closed { opens_at: datetime!("2024-06-03 09:00", offset) }),
    );

    assert_eq!(
        status.describe(&now, &DisplayOptions::default()),
        Description::OpensIn("30 minutes".into()),
    );
}

#[test]
fn input_in_another_timezone() {
    let ctx = Context::default().with_locale(TzLocation::new(Stockholm));
    let place = Place::new("Museum", periods! { (1, "0900") => (1, "1700") });

    // 16:30 UTC is 18:30 in Stockholm during summer
    let now = datetime!("2024-06-03 16:30", UTC);
    let status = place.status(now, &ctx);

    assert!(!status.is_open());
    assert_eq!(
        status.verdict().and_then(Verdict::boundary).map(|dt| dt.with_timezone(&Utc)),
        Some(Utc.with_ymd_and_hms(2024, 6, 10, 7, 0, 0).unwrap()),
    );
}

#[test]
fn opening_skipped_by_dst() {
    let ctx = Context::default().with_locale(TzLocation::new(Stockholm));
    let place = Place::new("Brunch", periods! { (0, "0230") => (0, "1200") });

    // Clocks jump from 02:00 to 03:00 on this sunday
    let status = place.status(datetime!("2024-03-31 01:00", Stockholm), &ctx);

    assert_eq!(
        status,
        PlaceStatus::Available(Verdict::Closed {
            opens_at: datetime!("2024-03-31 03:00", Stockholm)
        }),
    );
}

#[test]
fn closing_repeated_by_dst() {
    let ctx = Context::default().with_locale(TzLocation::new(Stockholm));
    let place = Place::new("Club", periods! { (6, "2200") => (0, "0230") });

    // Clocks go back from 03:00 to 02:00 on this sunday, the first 02:30 wins
    let status = place.status(datetime!("2024-10-26 23:00", Stockholm), &ctx);
    let closes_at = status.verdict().and_then(Verdict::boundary).map(|dt| dt.with_timezone(&Utc));

    assert!(status.is_open());
    assert_eq!(closes_at, Some(Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap()));
}

#[cfg(feature = "tz")]
#[test]
fn location_from_name() {
    let location = TzLocation::from_name("Europe/Stockholm").unwrap();
    assert_eq!(location.get_timezone(), &Stockholm);
}
