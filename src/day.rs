use serde::Deserialize;
use time::{format_description::well_known::Iso8601, Date, OffsetDateTime};

use crate::errors::AppError;

/// `?date=YYYY-MM-DD`, shared by every per-day listing.
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

impl DayQuery {
    pub fn resolve(&self, today: Date) -> Result<Date, AppError> {
        resolve_day(self.date.as_deref(), today)
    }
}

/// Calendar day of `now` in UTC; entries are keyed by it.
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Resolves the optional `?date=YYYY-MM-DD` query parameter, falling back to `today`.
pub fn resolve_day(raw: Option<&str>, today: Date) -> Result<Date, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(today),
        Some(s) => Date::parse(s, &Iso8601::DATE)
            .map_err(|_| AppError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))),
    }
}

/// Serde adapter writing a `Date` as `YYYY-MM-DD`.
pub mod day_key {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use time::{format_description::well_known::Iso8601, Date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(&Iso8601::DATE).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, &Iso8601::DATE).map_err(de::Error::custom)
    }
}
