use crate::types::errors::DateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Date layout Koinly expects in its universal CSV import.
pub const KOINLY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Epoch values above this are treated as milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: u64 = 100_000_000_000;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y, %H:%M",
    "%m/%d/%Y %H:%M",
];

/// A UTC instant taken from a wallet export.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[cfg(test)]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    fn from_epoch(value: &str, epoch: i64) -> Result<Self, DateError> {
        let instant = if epoch.unsigned_abs() > EPOCH_MILLIS_THRESHOLD {
            DateTime::from_timestamp_millis(epoch)
        } else {
            DateTime::from_timestamp(epoch, 0)
        };

        instant.map(Timestamp).ok_or_else(|| DateError::OutOfRange(value.to_string()))
    }
}

impl Display for Timestamp {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.format(KOINLY_DATE_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = DateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(DateError::Empty);
        }

        if let Ok(epoch) = value.parse::<i64>() {
            return Timestamp::from_epoch(value, epoch);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            return Ok(Timestamp(instant.with_timezone(&Utc)));
        }

        let naive = value.strip_suffix("UTC").map(str::trim_end).unwrap_or(value);

        for format in NAIVE_FORMATS {
            if let Ok(instant) = NaiveDateTime::parse_from_str(naive, format) {
                return Ok(Timestamp(instant.and_utc()));
            }
        }

        NaiveDate::parse_from_str(naive, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|instant| Timestamp(instant.and_utc()))
            .ok_or_else(|| DateError::Unrecognised(value.to_string()))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
