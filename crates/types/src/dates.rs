//! Flexible date parsing for the MOT history wire format.
//!
//! The API emits date-bearing fields in four lexical forms: a bare year, a
//! calendar date, a local date-time, and a UTC date-time with millisecond
//! precision. Everything is normalized to a single [`DateTime<Utc>`];
//! anything outside the four forms is a hard failure carrying the offending
//! text verbatim. There is no lenient parsing and no timezone inference.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::HistoryError;

/// Parse one of the four accepted date forms, selected by string length
/// (and a trailing `Z` for the long form).
///
/// | length | form                       | example                    |
/// |--------|----------------------------|----------------------------|
/// | 4      | year                       | `2021`                     |
/// | 10     | calendar date              | `2021-03-04`               |
/// | 19     | local date-time, taken UTC | `2021-03-04T10:15:00`      |
/// | 24     | UTC date-time, `Z` suffix  | `2021-03-04T10:15:00.000Z` |
///
/// # Errors
///
/// Returns [`HistoryError::DateFormat`] with the input text for any other
/// length or any text that does not parse in its selected form.
pub fn parse_flexible(text: &str) -> Result<DateTime<Utc>, HistoryError> {
    let fail = || HistoryError::DateFormat(text.to_string());
    match text.len() {
        4 => {
            let year: i32 = text.parse().map_err(|_| fail())?;
            Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .ok_or_else(fail)
        }
        10 => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| fail()),
        19 => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
            .map(|dt| dt.and_utc())
            .map_err(|_| fail()),
        24 if text.ends_with('Z') => {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.3fZ")
                .map(|dt| dt.and_utc())
                .map_err(|_| fail())
        }
        _ => Err(fail()),
    }
}

/// Render a normalized date back onto the wire (RFC 3339 UTC, millisecond
/// precision). Parsing the output again yields the same instant.
#[must_use]
pub fn to_wire(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for required date fields: `#[serde(with = "dates::flexible")]`.
pub mod flexible {
    use super::{DateTime, Utc, parse_flexible, to_wire};
    use serde::{Deserialize as _, Deserializer, Serializer, de};

    /// # Errors
    ///
    /// Fails when the text is not one of the four accepted date forms.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_flexible(&text).map_err(de::Error::custom)
    }

    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_wire(date))
    }
}

/// Serde adapter for nullable date fields:
/// `#[serde(default, with = "dates::flexible_opt")]`. A `null` or absent
/// value is an explicit "no value", never an error.
pub mod flexible_opt {
    use super::{DateTime, Utc, parse_flexible, to_wire};
    use serde::{Deserialize as _, Deserializer, Serializer, de};

    /// # Errors
    ///
    /// Fails when a present, non-null value is not one of the four accepted
    /// date forms.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        text.map(|t| parse_flexible(&t).map_err(de::Error::custom))
            .transpose()
    }

    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&to_wire(d)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike as _;

    #[test]
    fn test_parse_year() {
        let dt = parse_flexible("2021").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_calendar_date() {
        let dt = parse_flexible("2021-03-04").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 3, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_local_datetime() {
        let dt = parse_flexible("2021-03-04T10:15:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 3, 4, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_utc_datetime_with_millis() {
        let dt = parse_flexible("2021-03-04T10:15:30.250Z").unwrap();
        assert_eq!(dt.nanosecond(), 250_000_000);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_fifth_form_fails_verbatim() {
        for bad in ["04/03/2021", "2021-3-4", "2021-03-04T10:15", "21", ""] {
            let err = parse_flexible(bad).unwrap_err();
            match err {
                HistoryError::DateFormat(text) => assert_eq!(text, bad),
                other => panic!("expected DateFormat, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_24_chars_without_z_suffix_fails() {
        // right length, wrong trailing character
        let err = parse_flexible("2021-03-04T10:15:30.250X").unwrap_err();
        assert!(matches!(err, HistoryError::DateFormat(_)));
    }

    #[test]
    fn test_invalid_calendar_date_fails() {
        assert!(parse_flexible("2021-13-40").is_err());
    }

    #[test]
    fn test_round_trip_preserves_instant() {
        for text in [
            "2021",
            "2021-03-04",
            "2021-03-04T10:15:30",
            "2021-03-04T10:15:30.250Z",
        ] {
            let first = parse_flexible(text).unwrap();
            let again = parse_flexible(&to_wire(&first)).unwrap();
            assert_eq!(first, again, "round trip changed instant for {text}");
        }
    }

    #[test]
    fn test_serde_adapter_null_is_none() {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(default, with = "flexible_opt")]
            date: Option<DateTime<Utc>>,
        }

        let p: Probe = serde_json::from_str("{\"date\":null}").unwrap();
        assert!(p.date.is_none());
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert!(p.date.is_none());
        let p: Probe = serde_json::from_str("{\"date\":\"2022-03-04\"}").unwrap();
        assert!(p.date.is_some());
    }
}
