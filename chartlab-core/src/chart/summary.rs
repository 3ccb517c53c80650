//! Summary formatter — the short annotation shown in a chart title.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::TradingRecord;

/// Trade count and performance annotation for a chart title.
///
/// The profit metric comes from the strategy engine and is inserted verbatim;
/// this type never computes performance itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSummary {
    pub title: String,
    pub trade_count: usize,
    pub total_profit: f64,
}

impl ChartSummary {
    pub fn new(title: impl Into<String>, record: &TradingRecord, total_profit: f64) -> Self {
        Self {
            title: title.into(),
            trade_count: record.trade_count(),
            total_profit,
        }
    }
}

impl fmt::Display for ChartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, trades count: {} p = {}",
            self.title, self.trade_count, self.total_profit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trade;

    #[test]
    fn summary_formats_count_and_profit() {
        let record = TradingRecord::new(vec![Trade::new(0, 1), Trade::new(2, 3)]);
        let summary = ChartSummary::new("BTC price", &record, 1.5);
        assert_eq!(summary.to_string(), "BTC price, trades count: 2 p = 1.5");
    }

    #[test]
    fn summary_with_empty_record() {
        let summary = ChartSummary::new("BTC price", &TradingRecord::default(), 0.0);
        assert_eq!(summary.trade_count, 0);
        assert_eq!(summary.to_string(), "BTC price, trades count: 0 p = 0");
    }

    #[test]
    fn profit_is_inserted_verbatim() {
        let summary = ChartSummary::new("X", &TradingRecord::default(), 1.0537);
        assert!(summary.to_string().ends_with("p = 1.0537"));
    }

    #[test]
    fn summary_serialization_roundtrip() {
        let record = TradingRecord::new(vec![Trade::new(0, 1)]);
        let summary = ChartSummary::new("BTC price", &record, 2.25);
        let json = serde_json::to_string(&summary).unwrap();
        let deser: ChartSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.title, summary.title);
        assert_eq!(deser.trade_count, summary.trade_count);
        assert_eq!(deser.total_profit, summary.total_profit);
    }
}
