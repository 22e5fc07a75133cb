//! Relative Strength Index (RSI) rule.

use crate::services::signals::SignalRule;
use crate::types::{IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// RSI (Relative Strength Index) rule.
///
/// Reads the precomputed 14-period RSI (0-100):
/// - Below 30: Oversold (strong buy)
/// - 30 to 45: Buy-leaning
/// - 45 to 55: Neutral
/// - 55 to 70: Sell-leaning
/// - Above 70: Overbought (strong sell)
#[derive(Debug, Default, Clone, Copy)]
pub struct Rsi;

impl Rsi {
    pub const OVERSOLD: f64 = 30.0;
    pub const BUY_LEANING: f64 = 45.0;
    pub const SELL_LEANING: f64 = 55.0;
    pub const OVERBOUGHT: f64 = 70.0;

    /// Classify an RSI value.
    pub fn classify(rsi: f64) -> SignalRecord {
        if rsi < Self::OVERSOLD {
            SignalRecord::new(rsi, SignalDirection::Buy, Strength::Strong, format!("과매도 ({:.1})", rsi))
        } else if rsi < Self::BUY_LEANING {
            SignalRecord::new(rsi, SignalDirection::Buy, Strength::Mild, format!("매수 우위 ({:.1})", rsi))
        } else if rsi > Self::OVERBOUGHT {
            SignalRecord::new(rsi, SignalDirection::Sell, Strength::Strong, format!("과매수 ({:.1})", rsi))
        } else if rsi > Self::SELL_LEANING {
            SignalRecord::new(rsi, SignalDirection::Sell, Strength::Mild, format!("매도 우위 ({:.1})", rsi))
        } else {
            SignalRecord::new(rsi, SignalDirection::Neutral, Strength::Neutral, format!("중립 ({:.1})", rsi))
        }
    }
}

impl SignalRule for Rsi {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Rsi
    }

    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn evaluate(&self, current: &IndicatorRow, _previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        current.rsi_14().map(Self::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(rsi: f64) -> SignalRecord {
        Rsi.evaluate(&IndicatorRow::default().with_rsi(rsi), None).unwrap()
    }

    #[test]
    fn test_rsi_key_and_name() {
        assert_eq!(Rsi.key(), IndicatorKey::Rsi);
        assert_eq!(Rsi.name(), "RSI (14)");
    }

    #[test]
    fn test_rsi_missing_is_not_evaluable() {
        assert!(Rsi.evaluate(&IndicatorRow::default(), None).is_none());
        assert!(Rsi
            .evaluate(&IndicatorRow::default().with_rsi(f64::NAN), None)
            .is_none());
    }

    #[test]
    fn test_rsi_oversold_boundary() {
        let at = eval(30.0);
        assert_eq!(at.direction, SignalDirection::Buy);
        assert_eq!(at.strength, Strength::Mild);

        let below = eval(29.999);
        assert_eq!(below.direction, SignalDirection::Buy);
        assert_eq!(below.strength, Strength::Strong);
        assert_eq!(below.label, "과매도 (30.0)");
    }

    #[test]
    fn test_rsi_overbought_boundary() {
        let at = eval(70.0);
        assert_eq!(at.direction, SignalDirection::Sell);
        assert_eq!(at.strength, Strength::Mild);
        assert_eq!(at.label, "매도 우위 (70.0)");

        let above = eval(70.001);
        assert_eq!(above.direction, SignalDirection::Sell);
        assert_eq!(above.strength, Strength::Strong);
    }

    #[test]
    fn test_rsi_neutral_band_is_inclusive() {
        for rsi in [45.0, 50.0, 55.0] {
            let record = eval(rsi);
            assert_eq!(record.direction, SignalDirection::Neutral, "rsi {}", rsi);
            assert_eq!(record.strength, Strength::Neutral);
        }
        assert_eq!(eval(50.0).label, "중립 (50.0)");
        assert_eq!(eval(44.99).strength, Strength::Mild);
        assert_eq!(eval(55.01).direction, SignalDirection::Sell);
    }

    #[test]
    fn test_rsi_value_is_raw_reading() {
        assert_eq!(eval(12.5).value, 12.5);
    }
}
