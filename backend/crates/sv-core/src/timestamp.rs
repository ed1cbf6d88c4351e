//! Timestamps are persisted with millisecond precision, so in-memory values
//! are truncated the same way to compare equal after a round trip.

use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to milliseconds
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
