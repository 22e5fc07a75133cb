//! MACD (Moving Average Convergence Divergence) rule.

use crate::services::signals::SignalRule;
use crate::types::{IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// MACD rule.
///
/// Compares the MACD line against its signal line:
/// - MACD above signal: bullish
/// - MACD below signal: bearish
#[derive(Debug, Default, Clone, Copy)]
pub struct Macd;

impl SignalRule for Macd {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Macd
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn evaluate(&self, current: &IndicatorRow, _previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        let macd = current.macd()?;
        let signal = current.macd_signal()?;
        let diff = macd - signal;
        if !diff.is_finite() {
            return None;
        }

        let record = if diff > 0.0 {
            SignalRecord::new(diff, SignalDirection::Buy, Strength::Mild, "MACD 강세")
        } else if diff < 0.0 {
            SignalRecord::new(diff, SignalDirection::Sell, Strength::Mild, "MACD 약세")
        } else {
            SignalRecord::new(diff, SignalDirection::Neutral, Strength::Neutral, "MACD 중립")
        };

        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_bullish() {
        let row = IndicatorRow::default().with_macd(1.5, 1.0);
        let record = Macd.evaluate(&row, None).unwrap();
        assert_eq!(record.direction, SignalDirection::Buy);
        assert_eq!(record.strength, Strength::Mild);
        assert_eq!(record.value, 0.5);
        assert_eq!(record.label, "MACD 강세");
    }

    #[test]
    fn test_macd_bearish() {
        let row = IndicatorRow::default().with_macd(-0.2, 0.3);
        let record = Macd.evaluate(&row, None).unwrap();
        assert_eq!(record.direction, SignalDirection::Sell);
        assert_eq!(record.strength, Strength::Mild);
        assert_eq!(record.label, "MACD 약세");
    }

    #[test]
    fn test_macd_equal_lines_neutral() {
        let row = IndicatorRow::default().with_macd(0.7, 0.7);
        let record = Macd.evaluate(&row, None).unwrap();
        assert_eq!(record.direction, SignalDirection::Neutral);
        assert_eq!(record.strength, Strength::Neutral);
    }

    #[test]
    fn test_macd_needs_both_lines() {
        let mut row = IndicatorRow::default();
        row.macd = Some(1.0);
        assert!(Macd.evaluate(&row, None).is_none());

        row.macd = None;
        row.macd_signal = Some(1.0);
        assert!(Macd.evaluate(&row, None).is_none());
    }

    #[test]
    fn test_macd_overflowing_difference_not_evaluable() {
        let row = IndicatorRow::default().with_macd(f64::MAX, f64::MIN);
        assert!(Macd.evaluate(&row, None).is_none());

        let row = IndicatorRow::default().with_macd(f64::MIN, f64::MAX);
        assert!(Macd.evaluate(&row, None).is_none());
    }
}
