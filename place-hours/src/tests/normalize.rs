use chrono::Weekday;

use place_hours_syntax::Error as SyntaxError;

use crate::error::Error;
use crate::{normalize, periods, schedule, ClockTime, DayHours, DayTime, WeekStart};

fn at(day: Weekday, hour: u8, minute: u8) -> DayTime {
    DayTime::new(day, ClockTime::new(hour, minute).unwrap())
}

#[test]
fn keyed_by_opening_day() -> Result<(), Error> {
    let schedule = schedule! {
        (1, "0900") => (1, "1700");
        (5, "2200") => (6, "0200");
    }?;

    assert_eq!(
        schedule.get(Weekday::Mon),
        Some(&DayHours::new(at(Weekday::Mon, 9, 0), at(Weekday::Mon, 17, 0))),
    );

    assert_eq!(
        schedule.get(Weekday::Fri),
        Some(&DayHours::new(at(Weekday::Fri, 22, 0), at(Weekday::Sat, 2, 0))),
    );

    for day in [Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Sat, Weekday::Sun] {
        assert_eq!(schedule.get(day), None);
    }

    Ok(())
}

#[test]
fn last_period_of_a_day_wins() -> Result<(), Error> {
    let schedule = schedule! {
        (2, "0800") => (2, "1200");
        (2, "1400") => (2, "1900");
    }?;

    assert_eq!(
        schedule.get(Weekday::Tue),
        Some(&DayHours::new(at(Weekday::Tue, 14, 0), at(Weekday::Tue, 19, 0))),
    );

    Ok(())
}

#[test]
fn idempotent() -> Result<(), Error> {
    let periods = periods! {
        (0, "1000") => (0, "1600");
        (3, "0730") => (3, "2000");
        (6, "2100") => (0, "0200");
    };

    assert_eq!(
        normalize(&periods, WeekStart::Sunday)?,
        normalize(&periods, WeekStart::Sunday)?,
    );

    Ok(())
}

#[test]
fn sentinel_is_not_an_interval() -> Result<(), Error> {
    let schedule = schedule! { (0, "0000") }?;
    assert!(schedule.is_empty());
    Ok(())
}

#[test]
fn monday_first_convention() -> Result<(), Error> {
    let periods = periods! { (0, "0900") => (0, "1700") };
    let schedule = normalize(&periods, WeekStart::Monday)?;
    assert!(schedule.get(Weekday::Mon).is_some());
    assert!(schedule.get(Weekday::Sun).is_none());
    Ok(())
}

#[test]
fn malformed_time_fails_whole_schedule() {
    for bad_time in ["25:00", "930", "2400", ""] {
        let result = schedule! {
            (1, "0900") => (1, "1700");
            (2, bad_time) => (2, "1700");
        };

        assert_eq!(
            result,
            Err(Error::MalformedSchedule(SyntaxError::InvalidTime(bad_time.to_string()))),
        );
    }
}

#[test]
fn malformed_day_or_missing_close() {
    assert_eq!(
        schedule! { (7, "0900") => (1, "1700") },
        Err(Error::MalformedSchedule(SyntaxError::InvalidDay(7))),
    );

    assert_eq!(
        schedule! { (3, "0900") },
        Err(Error::MalformedSchedule(SyntaxError::MissingClose(at(
            Weekday::Wed,
            9,
            0
        )))),
    );
}

#[test]
fn iterate_in_week_order() -> Result<(), Error> {
    let schedule = schedule! {
        (6, "1000") => (6, "1400");
        (0, "1000") => (0, "1400");
        (3, "1000") => (3, "1400");
    }?;

    let sunday_first: Vec<_> = schedule.iter(WeekStart::Sunday).map(|(day, _)| day).collect();
    assert_eq!(sunday_first, [Weekday::Sun, Weekday::Wed, Weekday::Sat]);

    let monday_first: Vec<_> = schedule.iter(WeekStart::Monday).map(|(day, _)| day).collect();
    assert_eq!(monday_first, [Weekday::Wed, Weekday::Sat, Weekday::Sun]);
    Ok(())
}
