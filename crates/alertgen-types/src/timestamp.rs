//! Wire format for alert timestamps.
//!
//! Timestamps are UTC with whole-second precision and are written as
//! `YYYY-MM-DD HH:MM:SS` in both the JSON API and the CSV export. The
//! functions here plug into `#[serde(with = ...)]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// `strftime` pattern shared by every serialized timestamp.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp in the wire format.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

/// Parse a wire-format timestamp as UTC.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, FORMAT).map(|naive| naive.and_utc())
}

/// Serialize a timestamp in the wire format.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(FORMAT))
}

/// Deserialize a wire-format timestamp.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Same format for optional timestamps. `None` is `null` in JSON and an
/// empty field in CSV; an empty string reads back as `None`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an optional timestamp.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        ts: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.collect_str(&ts.format(super::FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .filter(|raw| !raw.is_empty())
            .map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn format_is_second_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single();
        assert_eq!(ts.map(|t| format(&t)).as_deref(), Some("2024-03-09 07:05:01"));
    }

    #[test]
    fn parse_inverts_format() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).single();
        let parsed = ts.map(|t| parse(&format(&t)));
        assert_eq!(parsed.and_then(Result::ok), ts);
    }

    #[test]
    fn rejects_iso_t_separator() {
        assert!(parse("2025-01-01T00:00:00").is_err());
    }
}
