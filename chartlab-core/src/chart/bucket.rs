//! Temporal bucketing — truncating bar end-times to a chart axis resolution.
//!
//! Granularity is always an explicit parameter. Bars spaced closer than one
//! minute apart lose resolution under minute bucketing, so the caller must
//! pick the resolution matching its bar spacing.

use chrono::{DateTime, SubsecRound, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Time-axis resolution for bucketed chart output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Minute,
    Second,
}

/// Truncate `ts` downward to the start of the enclosing minute or second.
///
/// Pure and total: any valid timestamp maps to exactly one bucket.
pub fn bucket(ts: DateTime<Utc>, granularity: Granularity) -> DateTime<Utc> {
    let truncated = ts.trunc_subsecs(0);
    match granularity {
        Granularity::Second => truncated,
        Granularity::Minute => truncated.with_second(0).unwrap_or(truncated),
    }
}
