use chrono::{DateTime, SecondsFormat, Timelike, Utc};

use crate::{CustomValue, Value};

pub type Date = DateTime<Utc>;

impl CustomValue for DateTime<Utc> {
    fn type_name(&self) -> &str {
        super::DATE
    }

    /// Dates serialize themselves as ISO-8601 text.
    fn to_json(&self) -> Option<Value> {
        Some(Value::String(format_iso(self)))
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, widened to nine fraction digits when the
/// date carries sub-millisecond precision.
pub fn format_iso(date: &Date) -> String {
    let precision = if date.nanosecond() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::Nanos
    };
    date.to_rfc3339_opts(precision, true)
}

pub fn parse_iso(text: &str) -> Result<Date, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|date| date.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> Date {
        Utc.timestamp_millis_opt(0).unwrap()
    }

    #[test]
    fn epoch_formats_with_millis_and_zulu() {
        let epoch = epoch();
        assert_eq!(format_iso(&epoch), "1970-01-01T00:00:00.000Z");
        assert_eq!(epoch.to_json(), Some(Value::from("1970-01-01T00:00:00.000Z")));
    }

    #[test]
    fn sub_millisecond_dates_keep_every_digit() {
        let date = Utc.timestamp_nanos(1_700_000_000_123_456_789);
        assert_eq!(format_iso(&date), "2023-11-14T22:13:20.123456789Z");
        assert_eq!(parse_iso(&format_iso(&date)).unwrap(), date);
        let micros = Utc.timestamp_nanos(1_000);
        assert_eq!(format_iso(&micros), "1970-01-01T00:00:00.000001000Z");
    }

    #[test]
    fn parse_accepts_offsets() {
        let parsed = parse_iso("1970-01-01T01:00:00.000+01:00").unwrap();
        assert_eq!(parsed, epoch());
        assert!(parse_iso("yesterday").is_err());
    }
}
