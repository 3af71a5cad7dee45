//! Purchase date parsing
//!
//! Requests carry `dataCompra` as a bare string with no format tag, so the
//! accepted format is picked per endpoint:
//!
//! - [`DatePolicy::DateOnly`]: `yyyy-MM-dd` only (create).
//! - [`DatePolicy::DateOrTimestamp`]: strings longer than 10 characters are
//!   parsed as RFC 3339, everything else as `yyyy-MM-dd` (update). There is
//!   no fallback between the two branches.
//!
//! Date-only values are stored as midnight UTC.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use super::ValidationError;

/// `yyyy-MM-dd`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a `yyyy-MM-dd` string; anything longer is treated as a timestamp.
const DATE_LEN: usize = 10;

const FIELD: &str = "dataCompra";

/// Which formats a purchase date may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    DateOnly,
    DateOrTimestamp,
}

impl DatePolicy {
    fn expected(self) -> &'static str {
        match self {
            Self::DateOnly => "yyyy-MM-dd",
            Self::DateOrTimestamp => "yyyy-MM-dd or yyyy-MM-ddTHH:MM:SSZ",
        }
    }
}

/// Parse a purchase date according to `policy`.
///
/// # Example
/// ```
/// use imoveis_server::models::{parse_purchase_date, DatePolicy};
///
/// assert!(parse_purchase_date("2024-03-15", DatePolicy::DateOnly).is_ok());
/// assert!(parse_purchase_date("2024-03-15T10:30:00Z", DatePolicy::DateOnly).is_err());
/// assert!(parse_purchase_date("2024-03-15T10:30:00Z", DatePolicy::DateOrTimestamp).is_ok());
/// ```
pub fn parse_purchase_date(raw: &str, policy: DatePolicy) -> Result<DateTime<Utc>, ValidationError> {
    let parsed = match policy {
        DatePolicy::DateOrTimestamp if raw.len() > DATE_LEN => parse_timestamp(raw),
        _ => parse_date(raw),
    };

    parsed.map_err(|reason| ValidationError::InvalidDate {
        field: FIELD,
        expected: policy.expected(),
        reason,
    })
}

/// Render a stored purchase date the way responses carry it.
pub fn format_purchase_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Strict `yyyy-MM-dd`: exactly ten characters, zero-padded, no sign.
fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| e.to_string())?;
    if raw.len() != DATE_LEN || date.format(DATE_FORMAT).to_string() != raw {
        return Err(format!("'{}' is not zero-padded yyyy-MM-dd", raw));
    }
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// RFC 3339 with an uppercase `T` separator and uppercase `Z` zone.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if raw.as_bytes().get(DATE_LEN) != Some(&b'T') {
        return Err(format!("expected 'T' after the date in '{}'", raw));
    }
    if raw.bytes().any(|b| b.is_ascii_lowercase()) {
        return Err(format!("'{}' must use uppercase 'T' and 'Z'", raw));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_only_accepts_short_format() {
        let date = parse_purchase_date("2024-03-15", DatePolicy::DateOnly).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn date_only_rejects_garbage() {
        let err = parse_purchase_date("not-a-date", DatePolicy::DateOnly).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidDate {
                expected: "yyyy-MM-dd",
                ..
            }
        ));
    }

    #[test]
    fn date_only_rejects_timestamp() {
        assert!(parse_purchase_date("2024-03-15T10:30:00Z", DatePolicy::DateOnly).is_err());
    }

    #[test]
    fn long_strings_use_rfc3339() {
        let date =
            parse_purchase_date("2024-03-15T10:30:00-03:00", DatePolicy::DateOrTimestamp).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 15, 13, 30, 0).unwrap());
    }

    #[test]
    fn ten_chars_use_short_format() {
        let date = parse_purchase_date("2024-03-15", DatePolicy::DateOrTimestamp).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn nine_chars_use_short_format() {
        // Unpadded month: a valid calendar date, but not yyyy-MM-dd
        let err = parse_purchase_date("2024-3-15", DatePolicy::DateOrTimestamp).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
        assert!(parse_purchase_date("2024/3/15", DatePolicy::DateOrTimestamp).is_err());
    }

    #[test]
    fn unpadded_and_signed_dates_are_rejected() {
        for raw in ["2024-3-15", "2024-3-5", "2024-03-5", "+2024-03-15", "24-03-15"] {
            assert!(
                parse_purchase_date(raw, DatePolicy::DateOnly).is_err(),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn timestamp_only_valid_as_rfc3339_takes_long_branch() {
        let date = parse_purchase_date("2024-03-15T23:59:59Z", DatePolicy::DateOrTimestamp).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap());
        // Same string under the short-only policy never reaches RFC 3339
        assert!(parse_purchase_date("2024-03-15T23:59:59Z", DatePolicy::DateOnly).is_err());
    }

    #[test]
    fn malformed_long_string_is_rejected() {
        // A valid date with trailing text must not fall back to the short format
        for raw in ["2024-03-15 ", "2024-03-15x", "2024-03-15T"] {
            assert!(
                parse_purchase_date(raw, DatePolicy::DateOrTimestamp).is_err(),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rfc3339_separators_are_strict() {
        for raw in [
            "2024-03-15 10:30:00Z",
            "2024-03-15t10:30:00Z",
            "2024-03-15T10:30:00z",
        ] {
            assert!(
                parse_purchase_date(raw, DatePolicy::DateOrTimestamp).is_err(),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn formats_as_utc_seconds() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(format_purchase_date(&date), "2024-03-15T00:00:00Z");
    }
}
