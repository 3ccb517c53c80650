//! Signal marker builder — timed buy/sell annotations from a trading record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::{bucket, Granularity};
use crate::domain::{BarSeries, TradingRecord};

/// Marker direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Buy,
    Sell,
}

impl MarkerKind {
    /// Canonical single-letter chart label.
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Buy => "B",
            MarkerKind::Sell => "S",
        }
    }
}

/// Timed buy/sell annotation positioned on the chart's time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub time: DateTime<Utc>,
    pub kind: MarkerKind,
    pub label: String,
}

impl Marker {
    fn at(time: DateTime<Utc>, kind: MarkerKind) -> Self {
        Self {
            time,
            kind,
            label: kind.label().to_string(),
        }
    }
}

/// Build buy/sell markers for every trade in the record.
///
/// Per trade, in record order: a `Buy` marker at the bucketed entry-bar
/// end-time, then a `Sell` marker at the bucketed exit-bar end-time. A trade
/// whose entry or exit index is out of bounds contributes no markers and does
/// not affect the rest of the build. Markers are never deduplicated — two
/// trades on the same bucket produce two independent markers.
pub fn build_markers(
    series: &BarSeries,
    record: &TradingRecord,
    granularity: Granularity,
) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(record.trade_count() * 2);
    for trade in record.iter() {
        let (Some(entry), Some(exit)) = (series.get(trade.entry_bar), series.get(trade.exit_bar))
        else {
            continue;
        };
        markers.push(Marker::at(
            bucket(entry.end_time, granularity),
            MarkerKind::Buy,
        ));
        markers.push(Marker::at(
            bucket(exit.end_time, granularity),
            MarkerKind::Sell,
        ));
    }
    markers
}
