//! Long-term trend rule: close against the 200-day simple moving average.

use crate::services::signals::SignalRule;
use crate::types::{IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// Distance of the close from SMA(200), as a fraction of the average.
///
/// There is no neutral band: a close exactly on the average falls in the
/// mild sell band together with everything down to -5%.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sma200Trend;

impl Sma200Trend {
    /// Beyond this distance the signal is strong.
    pub const STRONG_DISTANCE: f64 = 0.05;
}

impl SignalRule for Sma200Trend {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Sma200
    }

    fn name(&self) -> &str {
        "SMA (200)"
    }

    fn evaluate(&self, current: &IndicatorRow, _previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        let close = current.close()?;
        let sma_200 = current.sma_200()?;
        if sma_200 == 0.0 {
            return None;
        }

        let pct = (close - sma_200) / sma_200;
        if !pct.is_finite() {
            return None;
        }

        let record = if pct > Self::STRONG_DISTANCE {
            SignalRecord::new(pct, SignalDirection::Buy, Strength::Strong, format!("SMA200 +{:.1}%", pct * 100.0))
        } else if pct > 0.0 {
            SignalRecord::new(pct, SignalDirection::Buy, Strength::Mild, format!("SMA200 +{:.1}%", pct * 100.0))
        } else if pct < -Self::STRONG_DISTANCE {
            SignalRecord::new(pct, SignalDirection::Sell, Strength::Strong, format!("SMA200 {:.1}%", pct * 100.0))
        } else {
            SignalRecord::new(pct, SignalDirection::Sell, Strength::Mild, format!("SMA200 {:.1}%", pct * 100.0))
        };

        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(close: f64, sma_200: f64) -> Option<SignalRecord> {
        let row = IndicatorRow::default().with_close(close).with_sma_200(sma_200);
        Sma200Trend.evaluate(&row, None)
    }

    #[test]
    fn test_sma200_five_percent_is_mild() {
        let record = eval(105.0, 100.0).unwrap();
        assert_eq!(record.direction, SignalDirection::Buy);
        assert_eq!(record.strength, Strength::Mild);
        assert_eq!(record.label, "SMA200 +5.0%");
    }

    #[test]
    fn test_sma200_six_percent_is_strong() {
        let record = eval(106.0, 100.0).unwrap();
        assert_eq!(record.direction, SignalDirection::Buy);
        assert_eq!(record.strength, Strength::Strong);
        assert!((record.value - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_sma200_below_average() {
        let mild = eval(97.0, 100.0).unwrap();
        assert_eq!(mild.direction, SignalDirection::Sell);
        assert_eq!(mild.strength, Strength::Mild);
        assert_eq!(mild.label, "SMA200 -3.0%");

        let strong = eval(90.0, 100.0).unwrap();
        assert_eq!(strong.direction, SignalDirection::Sell);
        assert_eq!(strong.strength, Strength::Strong);
        assert_eq!(strong.label, "SMA200 -10.0%");

        let edge = eval(95.0, 100.0).unwrap();
        assert_eq!(edge.strength, Strength::Mild);
    }

    #[test]
    fn test_sma200_on_average_is_mild_sell() {
        let record = eval(100.0, 100.0).unwrap();
        assert_eq!(record.direction, SignalDirection::Sell);
        assert_eq!(record.strength, Strength::Mild);
        assert_eq!(record.value, 0.0);
    }

    #[test]
    fn test_sma200_zero_average_not_evaluable() {
        assert!(eval(100.0, 0.0).is_none());
    }

    #[test]
    fn test_sma200_needs_close() {
        let row = IndicatorRow::default().with_sma_200(100.0);
        assert!(Sma200Trend.evaluate(&row, None).is_none());
    }

    #[test]
    fn test_sma200_overflowing_distance_not_evaluable() {
        assert!(eval(f64::MAX, f64::MIN_POSITIVE).is_none());
    }
}
