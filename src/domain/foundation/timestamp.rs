//! Timestamp value object for the moment a ranking was computed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Milliseconds elapsed from `earlier` to this timestamp, floored at zero.
    pub fn millis_since(&self, earlier: &Timestamp) -> u64 {
        let millis = self.0.signed_duration_since(earlier.0).num_milliseconds();
        u64::try_from(millis).unwrap_or(0)
    }

    /// RFC 3339 rendering with second precision, e.g. `2024-01-15T10:30:00Z`.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
