//! Start/end date validation for the corrections fetch
//!
//! The record API takes its date window as `MM-DD-YYYY` strings; inputs
//! arrive as whatever the operator typed. Validation failures are values,
//! never panics.

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

/// Input formats accepted from the command line, tried in order
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Date format the record API expects
const WIRE_FORMAT: &str = "%m-%d-%Y";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("start and end dates are both required")]
    Missing,

    #[error("unparseable date: {0}")]
    Unparseable(String),

    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// A validated date window, start <= end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validate a raw start/end pair
    ///
    /// Fails when either input is absent or blank, fails to parse as a
    /// calendar date, or the window is inverted.
    pub fn validate(start: Option<&str>, end: Option<&str>) -> Result<Self, DateRangeError> {
        let (Some(start_raw), Some(end_raw)) = (non_blank(start), non_blank(end)) else {
            return Err(DateRangeError::Missing);
        };

        let start = parse_date(start_raw)?;
        let end = parse_date(end_raw)?;

        // NaiveDate displays as ISO-8601
        debug!("start: {start}");
        debug!("end: {end}");

        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }

        Ok(Self { start, end })
    }

    /// Wire-format start date, zero-padded `MM-DD-YYYY`
    pub fn wire_start(&self) -> String {
        self.start.format(WIRE_FORMAT).to_string()
    }

    /// Wire-format end date, zero-padded `MM-DD-YYYY`
    pub fn wire_end(&self) -> String {
        self.end.format(WIRE_FORMAT).to_string()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .ok_or_else(|| DateRangeError::Unparseable(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_zero_padded() {
        let range = DateRange::validate(Some("2024-1-5"), Some("2024-2-1")).unwrap();

        assert_eq!(range.wire_start(), "01-05-2024");
        assert_eq!(range.wire_end(), "02-01-2024");
    }

    #[test]
    fn test_slash_format_accepted() {
        let range = DateRange::validate(Some("1/5/2024"), Some("12/31/2024")).unwrap();

        assert_eq!(range.wire_start(), "01-05-2024");
        assert_eq!(range.wire_end(), "12-31-2024");
    }

    #[test]
    fn test_single_day_window_is_valid() {
        assert!(DateRange::validate(Some("2024-01-15"), Some("2024-01-15")).is_ok());
    }

    #[test]
    fn test_inverted_window_fails() {
        let error = DateRange::validate(Some("2024-02-01"), Some("2024-01-05")).unwrap_err();
        assert!(matches!(error, DateRangeError::Inverted { .. }));
    }

    #[test]
    fn test_missing_or_blank_inputs_fail() {
        assert_eq!(
            DateRange::validate(None, Some("2024-01-05")),
            Err(DateRangeError::Missing)
        );
        assert_eq!(
            DateRange::validate(Some("2024-01-05"), None),
            Err(DateRangeError::Missing)
        );
        assert_eq!(
            DateRange::validate(Some("  "), Some("2024-01-05")),
            Err(DateRangeError::Missing)
        );
    }

    #[test]
    fn test_unparseable_input_fails() {
        let error = DateRange::validate(Some("not-a-date"), Some("2024-01-05")).unwrap_err();
        assert_eq!(error, DateRangeError::Unparseable("not-a-date".to_string()));
    }

    #[test]
    fn test_out_of_range_calendar_date_fails() {
        let error = DateRange::validate(Some("2024-13-40"), Some("2024-12-31")).unwrap_err();
        assert!(matches!(error, DateRangeError::Unparseable(_)));
    }
}
