//! Dates attached to file entries.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Label shown for a date string that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Short month names of the en-IE medium date form ("Sept", not "Sep").
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// The `added` date of a file.
///
/// Keeps the raw string from the dataset so an unparseable value never
/// fails the load; it simply presents as [`INVALID_DATE`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddedDate {
    raw: String,
    date: Option<NaiveDate>,
}

impl AddedDate {
    /// Parse an ISO-8601 date (`2017-01-06`) or RFC 3339 timestamp.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            });
        Self {
            raw: raw.to_string(),
            date,
        }
    }

    /// The string exactly as it appeared in the dataset.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, if valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_valid(&self) -> bool {
        self.date.is_some()
    }

    /// Long-form presentation: day without padding, short month, full year
    /// (e.g. "6 Jan 2017", "5 Sept 2017").
    pub fn format_long(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{} {} {}",
                date.day(),
                MONTHS[date.month0() as usize],
                date.year()
            ),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl fmt::Display for AddedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_long())
    }
}

impl From<&str> for AddedDate {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<'de> Deserialize<'de> for AddedDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long() {
        assert_eq!(AddedDate::parse("2017-01-06").format_long(), "6 Jan 2017");
        assert_eq!(AddedDate::parse("2017-12-25").format_long(), "25 Dec 2017");
        assert_eq!(AddedDate::parse("2024-02-29").format_long(), "29 Feb 2024");
        assert_eq!(AddedDate::parse("2017-09-05").format_long(), "5 Sept 2017");
        assert_eq!(AddedDate::parse("0987-06-01").format_long(), "1 Jun 987");
    }

    #[test]
    fn test_rfc3339_reduced_to_date() {
        let added = AddedDate::parse("2017-04-30T10:15:00Z");
        assert_eq!(added.date(), NaiveDate::from_ymd_opt(2017, 4, 30));
        assert_eq!(added.format_long(), "30 Apr 2017");
    }

    #[test]
    fn test_invalid_dates() {
        for raw in ["", "yesterday", "2017-13-01", "2023-02-29", "06/01/2017"] {
            let added = AddedDate::parse(raw);
            assert!(!added.is_valid(), "{raw:?} should not parse");
            assert_eq!(added.format_long(), INVALID_DATE);
            assert_eq!(added.raw(), raw);
        }
    }

    #[test]
    fn test_display_matches_format_long() {
        let added = AddedDate::from("2019-03-01");
        assert_eq!(added.to_string(), "1 Mar 2019");
    }

    #[test]
    fn test_deserialize_keeps_raw_string() {
        let added: AddedDate = serde_json::from_str("\"not a date\"").unwrap();
        assert_eq!(added.raw(), "not a date");
        assert!(!added.is_valid());
    }
}
