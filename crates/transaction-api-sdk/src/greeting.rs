//! The static payload returned by `/transaction`

use chrono::NaiveDateTime;
use serde::Serialize;

/// Version label reported in every greeting
pub const SOFTWARE_VERSION: &str = "GREEN";

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a wall-clock time the way greetings and request logs show it
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Body of the embedded HTTP response.
///
/// Field order is part of the wire format: `hello`, `message`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub hello: String,
    pub message: String,
    pub timestamp: String,
}

impl Greeting {
    /// Build the greeting stamped with `time`
    pub fn at(time: &NaiveDateTime) -> Self {
        Self {
            hello: "world".to_string(),
            message: format!("Software version: {}", SOFTWARE_VERSION),
            timestamp: format_timestamp(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 1))
            .unwrap()
    }

    #[test]
    fn test_timestamp_is_zero_padded() {
        assert_eq!(format_timestamp(&sample_time()), "2024-03-07 09:05:01");
    }

    #[test]
    fn test_greeting_json_matches_wire_format() {
        let json = serde_json::to_string(&Greeting::at(&sample_time())).unwrap();
        assert_eq!(
            json,
            r#"{"hello":"world","message":"Software version: GREEN","timestamp":"2024-03-07 09:05:01"}"#
        );
    }
}
