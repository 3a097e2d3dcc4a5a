//! Client-supplied timestamps.
//!
//! Editor plugins send ISO-8601 strings that may or may not carry a UTC
//! offset. [`ClientTimestamp`] keeps that distinction so the service can
//! decide how to normalize it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Epoch values whose magnitude exceeds this are milliseconds, not seconds.
const EPOCH_MILLIS_THRESHOLD: f64 = 2e10;

/// An instant as sent by a client, with or without offset information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTimestamp {
    /// No offset was given.
    Naive(NaiveDateTime),
    /// An offset was given (`Z` counts as `+00:00`).
    Offset(DateTime<FixedOffset>),
}

impl ClientTimestamp {
    /// Build from a Unix epoch number, which is always UTC.
    ///
    /// Values with a magnitude above 2e10 are read as milliseconds, so both
    /// `1710072000` and `1710072000000` mean 2024-03-10T12:00:00Z.
    pub fn from_unix_number(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let seconds = if value.abs() > EPOCH_MILLIS_THRESHOLD {
            value / 1000.0
        } else {
            value
        };
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round() as u32;
        DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
            .map(|dt| Self::Offset(dt.fixed_offset()))
    }
}

impl FromStr for ClientTimestamp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Offset(dt));
        }
        for fmt in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Ok(Self::Offset(dt));
            }
        }
        // A trailing Z with a shape RFC 3339 rejects (e.g. minute precision).
        if let Some(rest) = s.strip_suffix(['Z', 'z']) {
            if let Ok(Self::Naive(naive)) = rest.parse::<ClientTimestamp>() {
                return Ok(Self::Offset(naive.and_utc().fixed_offset()));
            }
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self::Naive(naive));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Naive(date.and_time(NaiveTime::MIN)));
        }

        Err(AppError::validation(format!(
            "Invalid timestamp '{s}': expected an ISO-8601 datetime"
        )))
    }
}

impl fmt::Display for ClientTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(n) => write!(f, "{}", n.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Offset(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl Serialize for ClientTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ClientTimestampVisitor;

impl Visitor<'_> for ClientTimestampVisitor {
    type Value = ClientTimestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 datetime string or a Unix epoch number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(|e: AppError| E::custom(e.message))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        ClientTimestamp::from_unix_number(v)
            .ok_or_else(|| E::custom(format!("timestamp {v} is out of range")))
    }
}

impl<'de> Deserialize<'de> for ClientTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClientTimestampVisitor)
    }
}
