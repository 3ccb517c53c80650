//! One-shot chart assembly — everything a renderer needs for one strategy run.

use serde::{Deserialize, Serialize};

use super::config::ChartConfig;
use super::markers::{build_markers, Marker};
use super::ohlc::{build_ohlc, OhlcRecord};
use super::series::{build_series, ChartSeries};
use super::summary::ChartSummary;
use crate::domain::{BarSeries, TradingRecord};
use crate::indicators::Indicator;

/// Complete chart-ready output for a single conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartView {
    pub ohlc: Vec<OhlcRecord>,
    pub series: Vec<ChartSeries>,
    pub markers: Vec<Marker>,
    pub summary: ChartSummary,
}

impl ChartView {
    /// Run every builder over the same inputs: candlesticks, one line series
    /// per indicator, buy/sell markers, and the title summary. The summary
    /// title is the bar series name.
    pub fn build(
        bars: &BarSeries,
        indicators: &[&dyn Indicator],
        record: &TradingRecord,
        total_profit: f64,
        config: ChartConfig,
    ) -> Self {
        Self {
            ohlc: build_ohlc(bars),
            series: indicators
                .iter()
                .map(|indicator| {
                    build_series(bars, *indicator, config.granularity, config.collision_policy)
                })
                .collect(),
            markers: build_markers(bars, record, config.granularity),
            summary: ChartSummary::new(bars.name(), record, total_profit),
        }
    }
}
