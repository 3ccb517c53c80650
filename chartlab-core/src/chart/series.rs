//! Indicator series builder — bucketed, deduplicated line data.
//!
//! Duplicate buckets are resolved by an explicit [`CollisionPolicy`]:
//! keep the first value seen for a bucket, or keep the last.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::{bucket, Granularity};
use crate::domain::BarSeries;
use crate::indicators::Indicator;

/// One chart point per distinct time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub bucket: DateTime<Utc>,
    pub value: f64,
}

/// Named line series, ready for a renderer's dataset collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// Rule for two source values mapping to the same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// First value for a bucket wins; later values are silently discarded.
    Skip,
    /// Last value for a bucket wins.
    Overwrite,
}

/// Build a bucketed line series from an indicator evaluated over every bar.
///
/// Bars whose evaluated value is non-finite (warmup, insufficient history)
/// contribute no point and leave collision bookkeeping untouched. Output
/// points are ascending by bucket, one per distinct bucket. The series name
/// is the indicator name.
pub fn build_series(
    series: &BarSeries,
    indicator: &dyn Indicator,
    granularity: Granularity,
    policy: CollisionPolicy,
) -> ChartSeries {
    let values = indicator.compute(series.bars());

    let mut by_bucket: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
    for (bar, value) in series.iter().zip(values) {
        if !value.is_finite() {
            continue;
        }
        let key = bucket(bar.end_time, granularity);
        match policy {
            CollisionPolicy::Skip => {
                by_bucket.entry(key).or_insert(value);
            }
            CollisionPolicy::Overwrite => {
                by_bucket.insert(key, value);
            }
        }
    }

    ChartSeries {
        name: indicator.name().to_string(),
        points: by_bucket
            .into_iter()
            .map(|(bucket, value)| ChartPoint { bucket, value })
            .collect(),
    }
}
