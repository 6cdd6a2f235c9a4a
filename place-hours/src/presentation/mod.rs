//! Turn verdicts into text for the host to display.
pub(crate) mod humanize;

use std::fmt::{Display, Write};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::presentation::humanize::humanize;

// --
// -- Language
// --

/// Language used to humanize durations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Language {
    #[default]
    English,
    Swedish,
    Spanish,
}

impl Language {
    /// Pick a language from a language code, region subtags are ignored and
    /// unsupported languages fall back to English.
    ///
    /// ```
    /// use place_hours::Language;
    ///
    /// assert_eq!(Language::from_code("sv"), Language::Swedish);
    /// assert_eq!(Language::from_code("es-AR"), Language::Spanish);
    /// assert_eq!(Language::from_code("fr"), Language::English);
    /// ```
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or_default();

        match primary.to_ascii_lowercase().as_str() {
            "sv" => Self::Swedish,
            "es" => Self::Spanish,
            _ => Self::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swedish => "sv",
            Self::Spanish => "es",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

// --
// -- TimeFormat
// --

/// A time format string that was rejected.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct InvalidTimeFormat(pub String);

impl Display for InvalidTimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid time format `{}`", self.0)
    }
}

impl std::error::Error for InvalidTimeFormat {}

/// A validated strftime pattern, see [`chrono::format::strftime`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct StrftimePattern(String);

impl StrftimePattern {
    pub fn new(pattern: &str) -> Result<Self, InvalidTimeFormat> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(InvalidTimeFormat(pattern.to_string()));
        }

        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How clock times are displayed.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeFormat"))]
pub enum TimeFormat {
    /// `5:30 PM`
    Hour12,
    /// `17:30`
    #[default]
    Hour24,
    /// Any strftime pattern.
    Pattern(StrftimePattern),
}

impl TimeFormat {
    /// Format a time of the day.
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use place_hours::TimeFormat;
    ///
    /// let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
    /// assert_eq!(TimeFormat::Hour24.format(time), "09:05");
    /// assert_eq!(TimeFormat::Hour12.format(time), "9:05 AM");
    /// assert_eq!("%Hh%M".parse::<TimeFormat>().unwrap().format(time), "09h05");
    /// ```
    pub fn format(&self, time: NaiveTime) -> String {
        let pattern = match self {
            Self::Hour12 => "%-I:%M %p",
            Self::Hour24 => "%H:%M",
            Self::Pattern(pattern) => pattern.as_str(),
        };

        let mut res = String::new();

        // Patterns may still refer to date fields, which a time can't provide
        if write!(res, "{}", time.format(pattern)).is_err() {
            return Self::Hour24.format(time);
        }

        res
    }
}

impl FromStr for TimeFormat {
    type Err = InvalidTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12" => Ok(Self::Hour12),
            "24" => Ok(Self::Hour24),
            _ => StrftimePattern::new(s).map(Self::Pattern),
        }
    }
}

/// Host configurations either give a number of hours or a pattern.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeFormat {
    Hours(u8),
    Pattern(String),
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeFormat> for TimeFormat {
    type Error = InvalidTimeFormat;

    fn try_from(raw: RawTimeFormat) -> Result<Self, Self::Error> {
        match raw {
            RawTimeFormat::Hours(12) => Ok(Self::Hour12),
            RawTimeFormat::Hours(24) => Ok(Self::Hour24),
            RawTimeFormat::Hours(hours) => Err(InvalidTimeFormat(hours.to_string())),
            RawTimeFormat::Pattern(pattern) => pattern.parse(),
        }
    }
}

// --
// -- DisplayOptions
// --

/// Presentation settings of the host.
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use place_hours::{DisplayOptions, Language, TimeFormat};
///
/// let options: DisplayOptions =
///     serde_json::from_str(r#"{ "showTimeUntil": false, "timeFormat": 12, "language": "sv" }"#)
///         .unwrap();
///
/// assert!(!options.show_time_until);
/// assert_eq!(options.time_format, TimeFormat::Hour12);
/// assert_eq!(options.language, Language::Swedish);
/// # }
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DisplayOptions {
    /// Show the time left before the next change rather than its clock time.
    pub show_time_until: bool,
    pub time_format: TimeFormat,
    pub language: Language,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_time_until: true,
            time_format: TimeFormat::default(),
            language: Language::default(),
        }
    }
}

// --
// -- Description
// --

/// What to display for a place.
///
/// Texts are already formatted with the configured language and time format,
/// hosts usually embed them in their own translated labels. The `Display`
/// implementation uses English labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Description {
    AlwaysOpen,
    ClosesIn(String),
    OpensIn(String),
    ClosesAt(String),
    OpensAt(String),
    NotAvailable,
}

impl Description {
    /// Check if this describes an open place, `None` if the hours are not
    /// available.
    pub fn is_open(&self) -> Option<bool> {
        match self {
            Self::AlwaysOpen | Self::ClosesIn(_) | Self::ClosesAt(_) => Some(true),
            Self::OpensIn(_) | Self::OpensAt(_) => Some(false),
            Self::NotAvailable => None,
        }
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlwaysOpen => write!(f, "Always open"),
            Self::ClosesIn(text) => write!(f, "Open, closes in {text}"),
            Self::OpensIn(text) => write!(f, "Closed, opens in {text}"),
            Self::ClosesAt(text) => write!(f, "Open, closes {text}"),
            Self::OpensAt(text) => write!(f, "Closed, opens {text}"),
            Self::NotAvailable => write!(f, "Not available"),
        }
    }
}
