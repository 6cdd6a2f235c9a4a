use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike};

use std::fmt::Debug;

use crate::{evaluate, normalize, RawDayTime, RawPeriod, Verdict, WeekStart};

#[derive(Arbitrary, Clone, Debug)]
pub struct RawPoint {
    pub day: u8,
    pub time: u16,
}

impl RawPoint {
    fn to_raw(&self) -> RawDayTime {
        // Mostly valid inputs with a few out of range ones
        RawDayTime::new(self.day % 8, format!("{:04}", self.time % 2500))
    }
}

#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub monday_first: bool,
    pub always_open: bool,
    pub periods: Vec<(RawPoint, Option<RawPoint>)>,
}

impl Data {
    fn raw_periods(&self) -> Vec<RawPeriod> {
        self.periods
            .iter()
            .map(|(open, close)| {
                RawPeriod::new(open.to_raw(), close.as_ref().map(RawPoint::to_raw))
            })
            .collect()
    }

    fn week_start(&self) -> WeekStart {
        if self.monday_first {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        }
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("week_start", &self.week_start());
        debug.field("always_open", &self.always_open);
        debug.field("periods", &self.raw_periods());
        debug.finish()
    }
}

/// Check that evaluation is consistent, return `false` if the input is not
/// relevant.
pub fn run_fuzz_place(data: Data) -> bool {
    let Some(now) = DateTime::from_timestamp(data.date_secs, 0).map(|dt| dt.naive_utc()) else {
        return false;
    };

    if !(1900..10_000).contains(&now.year()) {
        return false;
    }

    let periods = data.raw_periods();

    let Ok(schedule) = normalize(&periods, data.week_start()) else {
        return false;
    };

    assert_eq!(normalize(&periods, data.week_start()).as_ref(), Ok(&schedule));

    match evaluate(&schedule, data.always_open, now) {
        Ok(Verdict::AlwaysOpen) => assert!(data.always_open),
        Ok(Verdict::Open { closes_at }) => assert!(closes_at > now),
        Ok(Verdict::Closed { opens_at }) => {
            assert!(opens_at >= now);
            assert!(opens_at - now <= chrono::Duration::days(8));
        }
        Err(_) => assert!(schedule.is_empty()),
    }

    true
}
