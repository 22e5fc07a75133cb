//! Trading signals service module.
//!
//! Converts precomputed indicator rows into per-indicator signals and
//! combines them into one weighted call.

pub mod aggregator;
pub mod detector;
pub mod indicators;

pub use aggregator::{aggregate, SignalAggregator, SIGNAL_WEIGHTS};
pub use detector::{detect_signals, evaluate, SignalDetector};

use crate::types::{IndicatorKey, IndicatorRow, SignalRecord};

/// Trait for implementing one indicator rule.
pub trait SignalRule: Send + Sync {
    /// Key this rule writes into the signal set.
    fn key(&self) -> IndicatorKey;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Evaluate the rule.
    /// Returns None when a required input is unknown or a denominator is zero.
    fn evaluate(&self, current: &IndicatorRow, previous: Option<&IndicatorRow>)
        -> Option<SignalRecord>;
}
