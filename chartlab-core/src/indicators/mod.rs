//! Indicator evaluators — the numeric series plotted over a bar series.
//!
//! Indicators are pure functions: bar history in, numeric series out. They
//! are precomputed once per chart build and consumed bar-by-bar by the
//! indicator series builder. Warmup positions hold `f64::NAN`; the series
//! builder treats any non-finite value as "no point for this bar".

pub mod close_price;
pub mod sma;

pub use close_price::ClosePrice;
pub use sma::Sma;

use crate::domain::Bar;

/// Trait for indicator evaluators.
///
/// `compute` returns a `Vec<f64>` of the same length as `bars`, with the
/// first `lookback()` values set to `f64::NAN`.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "close", "sma_20"). Used as the chart
    /// series name.
    fn name(&self) -> &str;

    /// Number of bars needed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Create synthetic bars from close prices for testing.
///
/// Bars are spaced one minute apart starting at 2024-01-02 00:00:00 UTC,
/// with plausible OHLC around each close.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| bar_at(i as i64 * 60, close))
        .collect()
}

/// Create a single synthetic bar `offset_secs` after 2024-01-02 00:00:00 UTC.
#[cfg(test)]
pub fn bar_at(offset_secs: i64, close: f64) -> Bar {
    use chrono::{Duration, TimeZone, Utc};
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    Bar {
        end_time: base + Duration::seconds(offset_secs),
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1000.0,
    }
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
