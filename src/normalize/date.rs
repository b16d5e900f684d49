//! Date Normalization
//!
//! Internal representation is epoch milliseconds. Inputs arrive as
//! integer timestamps, decimal-digit strings, RFC 3339 strings or bare
//! `YYYY-MM-DD` dates (taken as midnight UTC).

use crate::error::{CoreError, CoreResult};
use crate::types::raw::RawField;
use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};

/// Sentinel shown when a timestamp cannot be parsed or formatted
pub const INVALID_DATE: &str = "Invalid date";

/// Parse a raw ledger field into epoch milliseconds
pub fn parse_timestamp(raw: &RawField) -> CoreResult<i64> {
    match raw {
        RawField::Int(value) => Ok(*value),
        RawField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(CoreError::InvalidDate {
                    reason: "empty timestamp".to_string(),
                });
            }
            if let Ok(millis) = trimmed.parse::<i64>() {
                return Ok(millis);
            }
            if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
                return Ok(parsed.timestamp_millis());
            }
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                // midnight UTC; hms (0,0,0) is always representable
                if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                    return Ok(midnight.and_utc().timestamp_millis());
                }
            }
            Err(CoreError::InvalidDate {
                reason: format!("unparseable timestamp {trimmed:?}"),
            })
        }
    }
}

/// Format an epoch-millisecond timestamp as `dd/mm/yyyy`.
///
/// Fail-soft: out-of-range timestamps render as `"Invalid date"`.
pub fn format_date(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms) {
        LocalResult::Single(dt) => dt.format("%d/%m/%Y").to_string(),
        _ => INVALID_DATE.to_string(),
    }
}

/// Truncate a timestamp to the preceding UTC midnight.
///
/// Day-granular comparison is a presentation choice; callers that want it
/// truncate `now` before selection rather than this layer doing so.
pub fn truncate_to_day(timestamp_ms: i64) -> i64 {
    timestamp_ms - timestamp_ms.rem_euclid(crate::countdown::MS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_millis() {
        assert_eq!(parse_timestamp(&RawField::Int(1_700_000_000_000)).unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn test_parse_digit_string() {
        assert_eq!(
            parse_timestamp(&RawField::from("1700000000000")).unwrap(),
            1_700_000_000_000
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let millis = parse_timestamp(&RawField::from("2024-01-01T00:00:00Z")).unwrap();
        assert_eq!(millis, 1_704_067_200_000);
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        let millis = parse_timestamp(&RawField::from("2024-01-01")).unwrap();
        assert_eq!(millis, 1_704_067_200_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "soon", "01/02/2024", "2024-13-45"] {
            assert!(
                matches!(
                    parse_timestamp(&RawField::from(bad)),
                    Err(CoreError::InvalidDate { .. })
                ),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_string() {
        assert!(parse_timestamp(&RawField::from("99999999999999999999999")).is_err());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(1_704_067_200_000), "01/01/2024");
    }

    #[test]
    fn test_format_date_sentinel_out_of_range() {
        assert_eq!(format_date(i64::MAX), INVALID_DATE);
    }

    #[test]
    fn test_truncate_to_day() {
        // 2024-01-01T13:45:00Z -> 2024-01-01T00:00:00Z
        let afternoon = 1_704_067_200_000 + 13 * 3_600_000 + 45 * 60_000;
        assert_eq!(truncate_to_day(afternoon), 1_704_067_200_000);
        assert_eq!(truncate_to_day(1_704_067_200_000), 1_704_067_200_000);
    }

    #[test]
    fn test_truncate_to_day_negative_timestamp() {
        // pre-epoch instants still truncate to the preceding midnight
        let t = -1;
        assert_eq!(truncate_to_day(t), -crate::countdown::MS_PER_DAY);
    }
}
