//! Timestamp codec shared by every model.
//!
//! Values are written as RFC 3339. On read, a naive ISO 8601 datetime without
//! an offset (`2024-01-15T10:30:00.123456`) is also accepted and taken as UTC,
//! since that is what the remote endpoints emit.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NAIVE_FORMAT_SPACE: &str = "%Y-%m-%d %H:%M:%S%.f";

#[track_caller]
pub fn parse(value: &str) -> CoreResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, NAIVE_FORMAT_SPACE))
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidTimestamp {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| serde::de::Error::custom(e.user_message()))
}

/// Same codec for optional fields; `null` and a missing field both read as `None`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => super::serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(text) if !text.is_empty() => super::parse(&text)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(e.user_message())),
            _ => Ok(None),
        }
    }
}

/// Calendar dates (`YYYY-MM-DD`), where an empty string reads as `None`.
pub mod date_option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(text) if !text.is_empty() => {
                // Tolerate a trailing time part.
                let date_part = text.get(..10).unwrap_or(&text);
                NaiveDate::parse_from_str(date_part, DATE_FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
