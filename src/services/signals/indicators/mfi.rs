//! Money Flow Index (MFI) rule.

use crate::services::signals::SignalRule;
use crate::types::{IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// MFI (Money Flow Index) rule.
///
/// Volume-weighted RSI, read from the precomputed 14-period value:
/// - Below 20: Oversold (bullish)
/// - Above 80: Overbought (bearish)
#[derive(Debug, Default, Clone, Copy)]
pub struct Mfi;

impl Mfi {
    pub const OVERSOLD: f64 = 20.0;
    pub const OVERBOUGHT: f64 = 80.0;
}

impl SignalRule for Mfi {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Mfi
    }

    fn name(&self) -> &str {
        "MFI (14)"
    }

    fn evaluate(&self, current: &IndicatorRow, _previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        let mfi = current.mfi_14()?;

        let record = if mfi < Self::OVERSOLD {
            SignalRecord::new(mfi, SignalDirection::Buy, Strength::Strong, format!("MFI 과매도 ({:.1})", mfi))
        } else if mfi > Self::OVERBOUGHT {
            SignalRecord::new(mfi, SignalDirection::Sell, Strength::Strong, format!("MFI 과매수 ({:.1})", mfi))
        } else {
            SignalRecord::new(mfi, SignalDirection::Neutral, Strength::Neutral, format!("MFI 중립 ({:.1})", mfi))
        };

        Some(record)
    }
}
