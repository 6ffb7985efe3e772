//! Input validation for the entry form.

use chrono::NaiveDate;

use crate::error::{RecorderError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true iff `s` is a real calendar date written exactly as
/// `YYYY-MM-DD`.
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields and signed or wider years, so the shape is
/// checked before handing the string to the parser.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let invalid = || RecorderError::InvalidDate {
        input: s.to_string(),
    };

    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a temperature in degrees Celsius.
///
/// Surrounding whitespace is ignored. Any finite float is accepted; there is
/// no unit or range check.
pub fn parse_temperature(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecorderError::InvalidTemperature {
            input: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("2024-01-01"));
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date("1999-12-31"));
        assert!(is_valid_date("0001-01-01"));
    }

    #[test]
    fn test_impossible_calendar_dates() {
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-01-32"));
        assert!(!is_valid_date("2024-01-00"));
        assert!(!is_valid_date("2023-02-29"));
    }

    #[test]
    fn test_wrong_shapes() {
        assert!(!is_valid_date("2024/01/01"));
        assert!(!is_valid_date("24-01-01"));
        assert!(!is_valid_date("2024-1-01"));
        assert!(!is_valid_date("2024-01-1"));
        assert!(!is_valid_date("2024-ab-01"));
        assert!(!is_valid_date(" 2024-01-01"));
        assert!(!is_valid_date("+2024-01-01"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_parse_date_reports_input() {
        match parse_date("yesterday") {
            Err(RecorderError::InvalidDate { input }) => assert_eq!(input, "yesterday"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_temperature_accepts_any_finite_number() {
        assert_eq!(parse_temperature("21").unwrap(), 21.0);
        assert_eq!(parse_temperature("-4.5").unwrap(), -4.5);
        assert_eq!(parse_temperature("+3.").unwrap(), 3.0);
        assert_eq!(parse_temperature(" 12.25 ").unwrap(), 12.25);
        assert_eq!(parse_temperature("1e3").unwrap(), 1000.0);
        assert_eq!(parse_temperature("99999").unwrap(), 99999.0);
    }

    #[test]
    fn test_parse_temperature_rejects_garbage() {
        assert!(parse_temperature("").is_err());
        assert!(parse_temperature("warm").is_err());
        assert!(parse_temperature("21C").is_err());
        assert!(parse_temperature("nan").is_err());
        assert!(parse_temperature("inf").is_err());
    }
}
