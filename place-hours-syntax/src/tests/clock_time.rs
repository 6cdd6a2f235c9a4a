use chrono::NaiveTime;

use crate::{ClockTime, Error};

#[test]
fn parse_valid_times() {
    assert_eq!(ClockTime::parse("0000"), Ok(ClockTime::MIDNIGHT));
    assert_eq!(ClockTime::parse("0905"), Ok(ClockTime::new(9, 5).unwrap()));
    assert_eq!(ClockTime::parse("2359"), Ok(ClockTime::new(23, 59).unwrap()));
}

#[test]
fn parse_rejects_malformed_times() {
    for raw in ["", "930", "09300", "25:00", "2400", "1260", "9h30", " 930", "-930", "٠٩٣٠"] {
        assert_eq!(
            ClockTime::parse(raw),
            Err(Error::InvalidTime(raw.to_string())),
            "`{raw}` should be rejected",
        );
    }
}

#[test]
fn ordering_follows_the_day() {
    let morning: ClockTime = "0859".parse().unwrap();
    let noon: ClockTime = "1200".parse().unwrap();
    let evening: ClockTime = "1901".parse().unwrap();
    assert!(morning < noon && noon < evening);
}

#[test]
fn naive_time_conversion() {
    let time = ClockTime::new(17, 45).unwrap();
    let naive: NaiveTime = time.into();
    assert_eq!(naive, NaiveTime::from_hms_opt(17, 45, 0).unwrap());

    let truncated = ClockTime::from(NaiveTime::from_hms_opt(8, 30, 59).unwrap());
    assert_eq!(truncated, ClockTime::new(8, 30).unwrap());
}

#[test]
fn display() {
    assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
    assert_eq!(format!("{:?}", ClockTime::MIDNIGHT), "00:00");
}
