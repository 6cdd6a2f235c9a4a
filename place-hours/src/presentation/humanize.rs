use chrono::Duration;

use crate::presentation::Language;

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 60.0 * SECS_PER_MINUTE;
const SECS_PER_DAY: f64 = 24.0 * SECS_PER_HOUR;
const DAYS_PER_YEAR: f64 = 146_097.0 / 400.0;
const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

/// A rough approximation of a duration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Approx {
    Seconds,
    Minute,
    Minutes(u64),
    Hour,
    Hours(u64),
    Day,
    Days(u64),
    Month,
    Months(u64),
    Year,
    Years(u64),
}

impl Approx {
    /// Pick the largest unit that reads naturally, each unit is rounded to
    /// the nearest integer independently.
    fn new(duration: Duration) -> Self {
        let secs = duration.num_milliseconds().unsigned_abs() as f64 / 1000.0;
        let round = |value: f64| value.round() as u64;

        let seconds = round(secs);
        let minutes = round(secs / SECS_PER_MINUTE);
        let hours = round(secs / SECS_PER_HOUR);
        let days = round(secs / SECS_PER_DAY);
        let months = round(secs / SECS_PER_DAY / DAYS_PER_MONTH);
        let years = round(secs / SECS_PER_DAY / DAYS_PER_YEAR);

        if seconds < 45 {
            Self::Seconds
        } else if minutes <= 1 {
            Self::Minute
        } else if minutes < 45 {
            Self::Minutes(minutes)
        } else if hours <= 1 {
            Self::Hour
        } else if hours < 22 {
            Self::Hours(hours)
        } else if days <= 1 {
            Self::Day
        } else if days < 26 {
            Self::Days(days)
        } else if months <= 1 {
            Self::Month
        } else if months < 11 {
            Self::Months(months)
        } else if years <= 1 {
            Self::Year
        } else {
            Self::Years(years)
        }
    }
}

/// Describe a duration in words, the sign of the duration is ignored.
///
/// ```
/// use chrono::Duration;
/// use place_hours::{humanize, Language};
///
/// assert_eq!(humanize(Duration::seconds(20), Language::English), "a few seconds");
/// assert_eq!(humanize(Duration::minutes(44), Language::English), "44 minutes");
/// assert_eq!(humanize(Duration::minutes(45), Language::English), "an hour");
/// assert_eq!(humanize(Duration::hours(-3), Language::Swedish), "3 timmar");
/// assert_eq!(humanize(Duration::hours(30), Language::Spanish), "un día");
/// ```
pub fn humanize(duration: Duration, language: Language) -> String {
    let approx = Approx::new(duration);

    let (single, plural) = match language {
        Language::English => english(approx),
        Language::Swedish => swedish(approx),
        Language::Spanish => spanish(approx),
    };

    match approx {
        Approx::Minutes(n)
        | Approx::Hours(n)
        | Approx::Days(n)
        | Approx::Months(n)
        | Approx::Years(n) => format!("{n} {plural}"),
        _ => single.to_string(),
    }
}

fn english(approx: Approx) -> (&'static str, &'static str) {
    match approx {
        Approx::Seconds => ("a few seconds", ""),
        Approx::Minute | Approx::Minutes(_) => ("a minute", "minutes"),
        Approx::Hour | Approx::Hours(_) => ("an hour", "hours"),
        Approx::Day | Approx::Days(_) => ("a day", "days"),
        Approx::Month | Approx::Months(_) => ("a month", "months"),
        Approx::Year | Approx::Years(_) => ("a year", "years"),
    }
}

fn swedish(approx: Approx) -> (&'static str, &'static str) {
    match approx {
        Approx::Seconds => ("några sekunder", ""),
        Approx::Minute | Approx::Minutes(_) => ("en minut", "minuter"),
        Approx::Hour | Approx::Hours(_) => ("en timme", "timmar"),
        Approx::Day | Approx::Days(_) => ("en dag", "dagar"),
        Approx::Month | Approx::Months(_) => ("en månad", "månader"),
        Approx::Year | Approx::Years(_) => ("ett år", "år"),
    }
}

fn spanish(approx: Approx) -> (&'static str, &'static str) {
    match approx {
        Approx::Seconds => ("unos segundos", ""),
        Approx::Minute | Approx::Minutes(_) => ("un minuto", "minutos"),
        Approx::Hour | Approx::Hours(_) => ("una hora", "horas"),
        Approx::Day | Approx::Days(_) => ("un día", "días"),
        Approx::Month | Approx::Months(_) => ("un mes", "meses"),
        Approx::Year | Approx::Years(_) => ("un año", "años"),
    }
}

#[cfg(test)]
mod test {
    use super::Approx;
    use chrono::Duration;

    #[test]
    fn thresholds() {
        assert_eq!(Approx::new(Duration::zero()), Approx::Seconds);
        assert_eq!(Approx::new(Duration::seconds(44)), Approx::Seconds);
        assert_eq!(Approx::new(Duration::seconds(45)), Approx::Minute);
        assert_eq!(Approx::new(Duration::seconds(89)), Approx::Minute);
        assert_eq!(Approx::new(Duration::seconds(90)), Approx::Minutes(2));
        assert_eq!(Approx::new(Duration::minutes(89)), Approx::Hour);
        assert_eq!(Approx::new(Duration::minutes(90)), Approx::Hours(2));
        assert_eq!(Approx::new(Duration::hours(21)), Approx::Hours(21));
        assert_eq!(Approx::new(Duration::hours(22)), Approx::Day);
        assert_eq!(Approx::new(Duration::hours(36)), Approx::Days(2));
        assert_eq!(Approx::new(Duration::days(6)), Approx::Days(6));
        assert_eq!(Approx::new(Duration::days(26)), Approx::Month);
        assert_eq!(Approx::new(Duration::days(100)), Approx::Months(3));
        assert_eq!(Approx::new(Duration::days(400)), Approx::Year);
        assert_eq!(Approx::new(Duration::days(1000)), Approx::Years(3));
    }

    #[test]
    fn ignores_sign() {
        assert_eq!(Approx::new(Duration::hours(-5)), Approx::Hours(5));
    }
}
