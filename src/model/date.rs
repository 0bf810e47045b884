use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text used for a task with no due date, both on screen and on disk.
pub const NO_DATE_TOKEN: &str = "None";

/// Error returned when due-date text is not `day/month/year` or the no-date token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected day/month/year, found {found} part(s) in {text:?}")]
    WrongPartCount { text: String, found: usize },
    #[error("{part:?} is not a whole number in {text:?}")]
    NotANumber { text: String, part: String },
}

/// A calendar date, or the explicit absence of one.
///
/// Construction does not check the calendar: `31/4/2021` parses fine and
/// only [`Date::is_valid`] reports it as wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Date {
    NoDate,
    Calendar { day: i32, month: i32, year: i32 },
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Date::Calendar { day, month, year }
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        Date::new(now.day() as i32, now.month() as i32, now.year())
    }

    /// Parse `day/month/year` or the no-date token.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        if text == NO_DATE_TOKEN {
            return Ok(Date::NoDate);
        }
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != 3 {
            return Err(FormatError::WrongPartCount {
                text: text.to_string(),
                found: parts.len(),
            });
        }
        let mut numbers = [0i32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| FormatError::NotANumber {
                text: text.to_string(),
                part: part.to_string(),
            })?;
        }
        let [day, month, year] = numbers;
        Ok(Date::new(day, month, year))
    }

    /// Inverse of [`Date::parse`]; no zero padding.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// True for a set date that exists in the Gregorian calendar.
    pub fn is_valid(&self) -> bool {
        match *self {
            Date::NoDate => false,
            Date::Calendar { day, month, year } => {
                year >= 0
                    && (1..=12).contains(&month)
                    && day >= 1
                    && day <= days_in_month(month, year)
            }
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for a month out of range.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl Ord for Date {
    /// No-date sorts first; set dates compare year, then month, then day.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Date::NoDate, Date::NoDate) => Ordering::Equal,
            (Date::NoDate, Date::Calendar { .. }) => Ordering::Less,
            (Date::Calendar { .. }, Date::NoDate) => Ordering::Greater,
            (
                Date::Calendar { day, month, year },
                Date::Calendar {
                    day: other_day,
                    month: other_month,
                    year: other_year,
                },
            ) => year
                .cmp(other_year)
                .then(month.cmp(other_month))
                .then(day.cmp(other_day)),
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Date::NoDate => write!(f, "{}", NO_DATE_TOKEN),
            Date::Calendar { day, month, year } => write!(f, "{}/{}/{}", day, month, year),
        }
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text).map_err(serde::de::Error::custom)
    }
}
