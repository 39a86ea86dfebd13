use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for date fields. The remote API exchanges dates as plain
/// `YYYY-MM-DD` strings; this format is part of the API contract and
/// must not change.
const FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

// Responses sometimes carry a full timestamp for date fields, so accept
// RFC 3339 as a fallback and keep the date part.
fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|ts| ts.date_naive()))
}

/// Same wire format for `Option<NaiveDate>` fields. `None` serializes
/// as `null` and `null` or a missing key parses back to `None`.
pub mod option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{FORMAT, parse};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::date_string")]
        date: NaiveDate,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct OptWrapper {
        #[serde(with = "crate::date_string::option", default)]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_serializes_date_only() {
        let wrapper = Wrapper {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"date":"2026-01-15"}"#);
    }

    #[test]
    fn test_parses_date_only() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"date":"2026-01-15"}"#).unwrap();
        assert_eq!(wrapper.date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_parses_rfc3339_timestamp() {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"date":"2026-01-15T09:00:00.000Z"}"#).unwrap();
        assert_eq!(wrapper.date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"date":"next tuesday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_date_null_and_missing() {
        let wrapper: OptWrapper = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(wrapper.date, None);

        let wrapper: OptWrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(wrapper.date, None);

        let json = serde_json::to_string(&OptWrapper { date: None }).unwrap();
        assert_eq!(json, r#"{"date":null}"#);
    }
}
