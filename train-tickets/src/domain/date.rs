//! Travel date parsing.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when a travel date cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel date {input:?}: expected YYYY-MM-DD")]
pub struct InvalidDate {
    input: String,
}

/// A validated travel date.
///
/// Accepts `YYYY-M-D` with or without zero padding, and always renders
/// zero-padded, which is what the ticketing API requires.
///
/// # Examples
///
/// ```
/// use train_tickets::domain::TravelDate;
///
/// let date = TravelDate::parse("2016-1-5").unwrap();
/// assert_eq!(date.to_string(), "2016-01-05");
///
/// assert!(TravelDate::parse("2016-02-30").is_err());
/// assert!(TravelDate::parse("tomorrow").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a `YYYY-MM-DD` date, tolerating single-digit month and day.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate {
            input: s.to_string(),
        };

        let mut parts = s.trim().split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(TravelDate)
            .ok_or_else(invalid)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TravelDate {
    fn from(date: NaiveDate) -> Self {
        TravelDate(date)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
