//! Close price — the identity indicator used for price-line overlays.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone, Default)]
pub struct ClosePrice;

impl ClosePrice {
    pub fn new() -> Self {
        Self
    }
}

impl Indicator for ClosePrice {
    fn name(&self) -> &str {
        "close"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        bars.iter().map(|bar| bar.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    #[test]
    fn close_price_copies_closes() {
        let bars = make_bars(&[10.0, 11.0, 12.0]);
        let values = ClosePrice::new().compute(&bars);
        assert_eq!(values, vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn close_price_has_no_warmup() {
        assert_eq!(ClosePrice::new().lookback(), 0);
    }

    #[test]
    fn close_price_empty_series() {
        assert!(ClosePrice::new().compute(&[]).is_empty());
    }
}
