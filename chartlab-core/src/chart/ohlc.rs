//! OHLC dataset builder — one candlestick record per bar, unbucketed.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::BarSeries;

/// Candlestick record for the renderer, at epoch-second time resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Build the OHLC dataset for a bar series.
///
/// One record per bar, in input order, fields copied verbatim. No bucketing
/// and no deduplication — bars that would share a timestamp after external
/// truncation still produce one record each. Empty series builds an empty
/// dataset.
pub fn build_ohlc(series: &BarSeries) -> Vec<OhlcRecord> {
    series
        .iter()
        .map(|bar| OhlcRecord {
            time: bar.end_time.trunc_subsecs(0),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        })
        .collect()
}
