//! Trade and TradingRecord — the strategy run output consumed by the pipeline.

use serde::{Deserialize, Serialize};

/// One completed entry/exit pair, referencing bar positions in a `BarSeries`.
///
/// `entry_bar <= exit_bar` is assumed from the strategy engine, not enforced
/// here. Indices that fall outside the series are handled by the marker
/// builder's skip policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_bar: usize,
    pub exit_bar: usize,
}

impl Trade {
    pub fn new(entry_bar: usize, exit_bar: usize) -> Self {
        Self {
            entry_bar,
            exit_bar,
        }
    }
}

/// Ordered list of trades from one strategy run, in chronological entry order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradingRecord {
    trades: Vec<Trade>,
}

impl TradingRecord {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }
}
