//! Bar and BarSeries — the market data fed into the chart pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar covering one fixed interval, identified by its period end-time.
///
/// Bars arrive from the backtesting collaborator and are never mutated by
/// the chart builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub end_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, high >= open, high >= close, etc.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

/// Named, chronologically ordered sequence of bars.
///
/// Invariant (owned upstream): `end_time` is strictly increasing, and index
/// `i` refers to the same bar for the lifetime of a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSeries {
    name: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, bars: Vec<Bar>) -> Self {
        let series = Self {
            name: name.into(),
            bars,
        };
        debug_assert!(series.is_chronological());
        series
    }

    /// Series name, used for dataset naming on the chart.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at position `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// True if end-times are strictly increasing.
    pub fn is_chronological(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].end_time < w[1].end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_bar() -> Bar {
        Bar {
            end_time: Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 30).unwrap(),
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
            volume: 50_000.0,
        }
    }

    #[test]
    fn bar_is_sane() {
        assert!(sample_bar().is_sane());
    }

    #[test]
    fn bar_detects_void() {
        let mut bar = sample_bar();
        bar.close = f64::NAN;
        assert!(bar.is_void());
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_detects_insane_high_low() {
        let mut bar = sample_bar();
        bar.high = 97.0; // below low
        assert!(!bar.is_sane());
    }

    #[test]
    fn bar_serialization_roundtrip() {
        let bar = sample_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let deser: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar.end_time, deser.end_time);
        assert_eq!(bar.close, deser.close);
        assert_eq!(bar.volume, deser.volume);
    }

    #[test]
    fn series_indexing_and_bounds() {
        let mut second = sample_bar();
        second.end_time = Utc.with_ymd_and_hms(2024, 1, 2, 10, 1, 30).unwrap();
        let series = BarSeries::new("BTC", vec![sample_bar(), second]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.name(), "BTC");
        assert!(series.get(1).is_some());
        assert!(series.get(2).is_none());
    }

    #[test]
    fn series_chronology_check() {
        let bar = sample_bar();
        let series = BarSeries {
            name: "BTC".into(),
            bars: vec![bar.clone(), bar],
        };
        assert!(!series.is_chronological());
    }

    #[test]
    fn empty_series_is_valid() {
        let series = BarSeries::new("EMPTY", vec![]);
        assert!(series.is_empty());
        assert!(series.is_chronological());
    }
}
