//! Golden/death cross rule on SMA(50) against SMA(200).

use crate::services::signals::SignalRule;
use crate::types::{IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// Moving average cross rule.
///
/// A transition between the previous and current period is a strong signal.
/// Without a transition (or without a usable previous row) the current
/// ordering of the averages is reported as a mild signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovingAverageCross;

impl MovingAverageCross {
    /// Detect a cross between two periods, if one happened.
    pub fn transition(
        prev_short: f64,
        prev_long: f64,
        short: f64,
        long: f64,
    ) -> Option<SignalDirection> {
        if prev_short <= prev_long && short > long {
            Some(SignalDirection::Buy)
        } else if prev_short >= prev_long && short < long {
            Some(SignalDirection::Sell)
        } else {
            None
        }
    }
}

impl SignalRule for MovingAverageCross {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Cross
    }

    fn name(&self) -> &str {
        "SMA 50/200 Cross"
    }

    fn evaluate(&self, current: &IndicatorRow, previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        let sma_50 = current.sma_50()?;
        let sma_200 = current.sma_200()?;

        // Transition check must run before the steady-state fallback
        let crossed = previous
            .and_then(|prev| Some((prev.sma_50()?, prev.sma_200()?)))
            .and_then(|(prev_50, prev_200)| Self::transition(prev_50, prev_200, sma_50, sma_200));

        let record = match crossed {
            Some(SignalDirection::Buy) => {
                SignalRecord::new(sma_50, SignalDirection::Buy, Strength::Strong, "황금십자 발생!")
            }
            Some(_) => {
                SignalRecord::new(sma_50, SignalDirection::Sell, Strength::Strong, "죽음십자 발생!")
            }
            None if sma_50 > sma_200 => {
                SignalRecord::new(sma_50, SignalDirection::Buy, Strength::Mild, "황금십자 유지")
            }
            None => SignalRecord::new(sma_50, SignalDirection::Sell, Strength::Mild, "죽음십자 유지"),
        };

        Some(record)
    }
}
