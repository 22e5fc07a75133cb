//! Runs the rule pipeline over an indicator row.

use super::aggregator::aggregate;
use super::indicators::all_rules;
use super::SignalRule;
use crate::types::{IndicatorRow, OverallSignal, SignalSet};
use tracing::trace;

/// Ordered pipeline of indicator rules.
pub struct SignalDetector {
    rules: Vec<Box<dyn SignalRule>>,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalDetector {
    /// Create a detector with every built-in rule.
    pub fn new() -> Self {
        Self { rules: all_rules() }
    }

    /// Create a detector from a custom rule list.
    pub fn with_rules(rules: Vec<Box<dyn SignalRule>>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule. Rules whose inputs are unknown are left out.
    pub fn detect(&self, current: &IndicatorRow, previous: Option<&IndicatorRow>) -> SignalSet {
        let mut signals = SignalSet::new();

        for rule in &self.rules {
            match rule.evaluate(current, previous) {
                Some(record) => {
                    signals.insert(rule.key(), record);
                }
                None => trace!("{} not evaluable", rule.name()),
            }
        }

        signals
    }
}

/// Detect signals with the built-in rule set.
pub fn detect_signals(current: &IndicatorRow, previous: Option<&IndicatorRow>) -> SignalSet {
    SignalDetector::new().detect(current, previous)
}

/// Detect signals and aggregate them in one step.
pub fn evaluate(current: &IndicatorRow, previous: Option<&IndicatorRow>) -> (SignalSet, OverallSignal) {
    let signals = detect_signals(current, previous);
    let overall = aggregate(&signals);
    (signals, overall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::{Mfi, Rsi};
    use crate::types::IndicatorKey;

    fn full_row() -> IndicatorRow {
        IndicatorRow::default()
            .with_close(120.0)
            .with_rsi(25.0)
            .with_macd(1.2, 0.8)
            .with_moving_averages(110.0, 100.0)
            .with_bollinger(130.0, 115.0, 100.0)
            .with_mfi(15.0)
    }

    #[test]
    fn test_detect_empty_row() {
        let signals = detect_signals(&IndicatorRow::default(), None);
        assert!(signals.is_empty());
    }

    #[test]
    fn test_detect_full_row_has_every_key() {
        let signals = detect_signals(&full_row(), None);
        assert_eq!(signals.keys().collect::<Vec<_>>(), IndicatorKey::ALL.to_vec());
    }

    #[test]
    fn test_detect_only_rsi() {
        let row = IndicatorRow::default().with_rsi(60.0);
        let signals = detect_signals(&row, None);
        assert_eq!(signals.len(), 1);
        assert!(signals.contains(IndicatorKey::Rsi));
    }

    #[test]
    fn test_custom_rule_list() {
        let detector = SignalDetector::with_rules(vec![Box::new(Rsi), Box::new(Mfi)]);
        let signals = detector.detect(&full_row(), None);
        assert_eq!(signals.len(), 2);
        assert!(!signals.contains(IndicatorKey::Macd));
    }

    #[test]
    fn test_evaluate_full_buy_row() {
        let (signals, overall) = evaluate(&full_row(), None);
        assert_eq!(signals.len(), 6);
        // rsi 1.5*2 + macd 1 + sma200 1.5*2 + cross 2*1 + bb 0 + mfi 1*2
        assert_eq!(overall.score, 11.0);
    }
}
