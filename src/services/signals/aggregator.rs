//! Weighted aggregation of indicator signals into one overall call.

use crate::types::{IndicatorKey, OverallSignal, SignalSet};
use tracing::debug;

pub const RSI_WEIGHT: f64 = 1.5;
pub const MACD_WEIGHT: f64 = 1.0;
pub const SMA200_WEIGHT: f64 = 1.5;
pub const CROSS_WEIGHT: f64 = 2.0;
pub const BB_WEIGHT: f64 = 0.5;
pub const MFI_WEIGHT: f64 = 1.0;

/// Fixed per-indicator weights, in pipeline order.
pub const SIGNAL_WEIGHTS: [(IndicatorKey, f64); 6] = [
    (IndicatorKey::Rsi, RSI_WEIGHT),
    (IndicatorKey::Macd, MACD_WEIGHT),
    (IndicatorKey::Sma200, SMA200_WEIGHT),
    (IndicatorKey::Cross, CROSS_WEIGHT),
    (IndicatorKey::Bb, BB_WEIGHT),
    (IndicatorKey::Mfi, MFI_WEIGHT),
];

impl IndicatorKey {
    /// Aggregation weight for this indicator.
    pub fn weight(&self) -> f64 {
        match self {
            IndicatorKey::Rsi => RSI_WEIGHT,
            IndicatorKey::Macd => MACD_WEIGHT,
            IndicatorKey::Sma200 => SMA200_WEIGHT,
            IndicatorKey::Cross => CROSS_WEIGHT,
            IndicatorKey::Bb => BB_WEIGHT,
            IndicatorKey::Mfi => MFI_WEIGHT,
        }
    }
}

/// Combines a signal set into a score and label.
pub struct SignalAggregator;

impl SignalAggregator {
    /// Sum of weight * signed strength over the present indicators.
    pub fn score(signals: &SignalSet) -> f64 {
        signals
            .iter()
            .map(|(key, record)| key.weight() * record.signed_strength())
            .sum()
    }

    pub fn aggregate(signals: &SignalSet) -> OverallSignal {
        let overall = OverallSignal::from_score(Self::score(signals));
        debug!(
            "Aggregated {} signals: score {:.2} ({})",
            signals.len(),
            overall.score,
            overall.label
        );
        overall
    }
}

/// Aggregate a signal set into its overall call.
pub fn aggregate(signals: &SignalSet) -> OverallSignal {
    SignalAggregator::aggregate(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OverallLabel, SignalDirection, SignalRecord, Strength};

    fn record(direction: SignalDirection, strength: Strength) -> SignalRecord {
        SignalRecord::new(0.0, direction, strength, "")
    }

    #[test]
    fn test_weights_table_covers_every_key() {
        assert_eq!(IndicatorKey::Cross.weight(), 2.0);
        assert_eq!(IndicatorKey::Bb.weight(), 0.5);
        let keys: Vec<_> = SIGNAL_WEIGHTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, IndicatorKey::ALL.to_vec());
    }

    #[test]
    fn test_weight_matches_published_table() {
        for (key, weight) in SIGNAL_WEIGHTS {
            assert_eq!(key.weight(), weight, "{}", key);
        }
    }

    #[test]
    fn test_empty_set_is_neutral() {
        let overall = aggregate(&SignalSet::new());
        assert_eq!(overall.score, 0.0);
        assert_eq!(overall.label, OverallLabel::Neutral);
    }

    #[test]
    fn test_weighted_example() {
        let signals: SignalSet = [
            (IndicatorKey::Rsi, record(SignalDirection::Buy, Strength::Strong)),
            (IndicatorKey::Macd, record(SignalDirection::Buy, Strength::Mild)),
            (IndicatorKey::Sma200, record(SignalDirection::Sell, Strength::Mild)),
        ]
        .into_iter()
        .collect();

        let overall = aggregate(&signals);
        assert_eq!(overall.score, 2.5);
        assert_eq!(overall.label, OverallLabel::Buy);
    }

    #[test]
    fn test_neutral_records_contribute_nothing() {
        let signals: SignalSet = [
            (IndicatorKey::Bb, record(SignalDirection::Neutral, Strength::Neutral)),
            (IndicatorKey::Mfi, record(SignalDirection::Neutral, Strength::Neutral)),
        ]
        .into_iter()
        .collect();
        assert_eq!(SignalAggregator::score(&signals), 0.0);
    }

    #[test]
    fn test_strong_sell_everywhere() {
        let signals: SignalSet = IndicatorKey::ALL
            .iter()
            .map(|k| (*k, record(SignalDirection::Sell, Strength::Strong)))
            .collect();
        let overall = aggregate(&signals);
        assert_eq!(overall.score, -15.0);
        assert_eq!(overall.label, OverallLabel::StrongSell);
    }

    #[test]
    fn test_label_bands() {
        assert_eq!(OverallLabel::from_score(5.0), OverallLabel::StrongBuy);
        assert_eq!(OverallLabel::from_score(4.999), OverallLabel::Buy);
        assert_eq!(OverallLabel::from_score(2.0), OverallLabel::Buy);
        assert_eq!(OverallLabel::from_score(1.999), OverallLabel::Neutral);
        assert_eq!(OverallLabel::from_score(-1.999), OverallLabel::Neutral);
        assert_eq!(OverallLabel::from_score(-2.0), OverallLabel::Sell);
        assert_eq!(OverallLabel::from_score(-4.999), OverallLabel::Sell);
        assert_eq!(OverallLabel::from_score(-5.0), OverallLabel::StrongSell);
    }
}
