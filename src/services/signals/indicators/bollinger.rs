//! Bollinger Bands rule.

use crate::services::signals::SignalRule;
use crate::types::{BandZone, IndicatorKey, IndicatorRow, SignalDirection, SignalRecord, Strength};

/// Bollinger Bands rule.
///
/// The outer 30% of each half of the envelope is treated as "near" a band:
/// - Close in the upper zone: bearish (mean reversion)
/// - Close in the lower zone: bullish
/// - Otherwise: neutral
#[derive(Debug, Default, Clone, Copy)]
pub struct BollingerBands;

impl BollingerBands {
    /// Fraction of the half-width from the middle at which a zone starts.
    pub const ZONE_RATIO: f64 = 0.7;

    /// Locate the close inside the envelope.
    /// Returns None unless close and all three bands are known.
    pub fn zone(row: &IndicatorRow) -> Option<BandZone> {
        let close = row.close()?;
        let upper = row.bb_upper()?;
        let middle = row.bb_middle()?;
        let lower = row.bb_lower()?;

        let upper_zone = middle + Self::ZONE_RATIO * (upper - middle);
        let lower_zone = middle - Self::ZONE_RATIO * (middle - lower);

        if close >= upper_zone {
            Some(BandZone::NearUpper)
        } else if close <= lower_zone {
            Some(BandZone::NearLower)
        } else {
            Some(BandZone::Middle)
        }
    }
}

impl SignalRule for BollingerBands {
    fn key(&self) -> IndicatorKey {
        IndicatorKey::Bb
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn evaluate(&self, current: &IndicatorRow, _previous: Option<&IndicatorRow>) -> Option<SignalRecord> {
        let zone = Self::zone(current)?;
        let close = current.close()?;

        let record = match zone {
            BandZone::NearUpper => {
                SignalRecord::new(close, SignalDirection::Sell, Strength::Mild, "BB 상단 근접")
            }
            BandZone::NearLower => {
                SignalRecord::new(close, SignalDirection::Buy, Strength::Mild, "BB 하단 근접")
            }
            BandZone::Middle => {
                SignalRecord::new(close, SignalDirection::Neutral, Strength::Neutral, "BB 중간 구간")
            }
        };

        Some(record)
    }
}
