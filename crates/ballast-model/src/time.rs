// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Duration parsing and formatting.
//!
//! Durations appear on the command line and in track listings either as a
//! plain number of seconds (`"247"`) or as colon-separated sexagesimal
//! fields (`"4:07"`, `"1:02:45"`). Internally everything is a number of
//! seconds; this module converts in both directions.

/// Error produced when a duration token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse '{token}' as a duration")]
pub struct ParseDurationError {
    /// The token that failed to parse.
    pub token: String,
}

/// Parses a duration given as plain seconds or as colon-separated fields.
///
/// Each colon multiplies the accumulated value by 60, so `"1:30"` is 90
/// seconds and `"1:00:00"` is 3600. Empty fields and non-digit characters
/// are rejected.
///
/// # Examples
///
/// ```rust
/// # use ballast_model::time::parse_duration;
///
/// assert_eq!(parse_duration("90").unwrap(), 90);
/// assert_eq!(parse_duration("1:30").unwrap(), 90);
/// assert_eq!(parse_duration("1:02:45").unwrap(), 3765);
/// ```
pub fn parse_duration(token: &str) -> Result<u64, ParseDurationError> {
    let err = || ParseDurationError {
        token: token.to_string(),
    };

    if token.is_empty() {
        return Err(err());
    }

    let mut seconds: u64 = 0;
    for field in token.split(':') {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let value: u64 = field.parse().map_err(|_| err())?;
        seconds = seconds
            .checked_mul(60)
            .and_then(|s| s.checked_add(value))
            .ok_or_else(err)?;
    }

    Ok(seconds)
}

/// Formats a number of seconds as `hh:mm:ss`.
///
/// Hours are not padded beyond two digits, so very long totals stay readable.
///
/// # Examples
///
/// ```rust
/// # use ballast_model::time::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(3765), "01:02:45");
/// ```
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        assert_eq!(parse_duration("0").unwrap(), 0);
        assert_eq!(parse_duration("247").unwrap(), 247);
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_duration("4:07").unwrap(), 247);
        assert_eq!(parse_duration("19:40").unwrap(), 1180);
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(parse_duration("1:00:00").unwrap(), 3600);
        assert_eq!(parse_duration("1:02:45").unwrap(), 3765);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("1:").is_err());
        assert!(parse_duration(":30").is_err());
        assert!(parse_duration("-5").is_err());
        assert!(parse_duration("1.5").is_err());
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(60), "00:01:00");
        assert_eq!(format_hms(3765), "01:02:45");
        assert_eq!(format_hms(86400), "24:00:00");
    }

    #[test]
    fn test_round_trip() {
        for seconds in [0u64, 1, 59, 60, 61, 3599, 3600, 7325] {
            assert_eq!(parse_duration(&format_hms(seconds)).unwrap(), seconds);
        }
    }
}
