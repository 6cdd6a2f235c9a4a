mod localization;
mod normalize;


#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&$crate::datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

/// Build a list of raw periods, written `(day, "HHmm") => (day, "HHmm")`
/// where the closing end is optional.
#[macro_export]
macro_rules! periods {
    (
        $( ( $day1: expr, $time1: expr ) $( => ( $day2: expr, $time2: expr ) )? );*
        $( ; )?
    ) => {{
        #[allow(unused_imports)]
        use $crate::{RawDayTime, RawPeriod};

        let periods: Vec<RawPeriod> = vec![
            $(
                RawPeriod::new(
                    RawDayTime::new($day1, $time1),
                    None $( .or(Some(RawDayTime::new($day2, $time2))) )?,
                )
            ),*
        ];

        periods
    }};
}

/// Normalize a list of periods numbered from sunday.
#[macro_export]
macro_rules! schedule {
    ( $( $tt: tt )* ) => {{
        $crate::normalize(&$crate::periods!( $( $tt )* ), $crate::WeekStart::Sunday)
    }};
}
