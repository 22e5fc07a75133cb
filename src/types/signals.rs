use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direction of a single indicator signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl SignalDirection {
    /// +1 for buy, -1 for sell, 0 for neutral.
    pub fn sign(&self) -> f64 {
        match self {
            SignalDirection::Buy => 1.0,
            SignalDirection::Sell => -1.0,
            SignalDirection::Neutral => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-rule confidence ordinal.
///
/// Only comparable across indicators through the aggregation weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Strength {
    Neutral = 0,
    Mild = 1,
    Strong = 2,
}

impl Strength {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.as_u8()
    }
}

impl TryFrom<u8> for Strength {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Strength::Neutral),
            1 => Ok(Strength::Mild),
            2 => Ok(Strength::Strong),
            other => Err(format!("strength must be 0, 1 or 2, got {}", other)),
        }
    }
}

/// Indicator keys, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKey {
    Rsi,
    Macd,
    Sma200,
    Cross,
    Bb,
    Mfi,
}

impl IndicatorKey {
    pub const ALL: [IndicatorKey; 6] = [
        IndicatorKey::Rsi,
        IndicatorKey::Macd,
        IndicatorKey::Sma200,
        IndicatorKey::Cross,
        IndicatorKey::Bb,
        IndicatorKey::Mfi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKey::Rsi => "rsi",
            IndicatorKey::Macd => "macd",
            IndicatorKey::Sma200 => "sma200",
            IndicatorKey::Cross => "cross",
            IndicatorKey::Bb => "bb",
            IndicatorKey::Mfi => "mfi",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rsi" => Some(Self::Rsi),
            "macd" => Some(Self::Macd),
            "sma200" => Some(Self::Sma200),
            "cross" => Some(Self::Cross),
            "bb" => Some(Self::Bb),
            "mfi" => Some(Self::Mfi),
            _ => None,
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one indicator rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// The number the rule fired on (raw value, difference or percentage).
    pub value: f64,
    pub direction: SignalDirection,
    pub strength: Strength,
    /// Display text; not used in scoring.
    pub label: String,
}

impl SignalRecord {
    pub fn new(
        value: f64,
        direction: SignalDirection,
        strength: Strength,
        label: impl Into<String>,
    ) -> Self {
        Self {
            value,
            direction,
            strength,
            label: label.into(),
        }
    }

    /// Strength with the direction's sign applied.
    pub fn signed_strength(&self) -> f64 {
        self.direction.sign() * self.strength.as_u8() as f64
    }
}

/// Indicator signals keyed by indicator.
///
/// Only indicators whose inputs were known are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSet(BTreeMap<IndicatorKey, SignalRecord>);

impl SignalSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a record, replacing any previous one for the same key.
    pub fn insert(&mut self, key: IndicatorKey, record: SignalRecord) -> Option<SignalRecord> {
        self.0.insert(key, record)
    }

    pub fn get(&self, key: IndicatorKey) -> Option<&SignalRecord> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: IndicatorKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = IndicatorKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKey, &SignalRecord)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(IndicatorKey, SignalRecord)> for SignalSet {
    fn from_iter<I: IntoIterator<Item = (IndicatorKey, SignalRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Overall call for a symbol.
///
/// Serialized as the display strings downstream filters match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallLabel {
    #[serde(rename = "강력매수")]
    StrongBuy,
    #[serde(rename = "매수")]
    Buy,
    #[serde(rename = "중립")]
    Neutral,
    #[serde(rename = "매도")]
    Sell,
    #[serde(rename = "강력매도")]
    StrongSell,
}

impl OverallLabel {
    pub const STRONG_BUY_THRESHOLD: f64 = 5.0;
    pub const BUY_THRESHOLD: f64 = 2.0;
    pub const STRONG_SELL_THRESHOLD: f64 = -5.0;
    pub const SELL_THRESHOLD: f64 = -2.0;

    /// Map a weighted score to its label. First matching band wins.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::STRONG_BUY_THRESHOLD {
            OverallLabel::StrongBuy
        } else if score >= Self::BUY_THRESHOLD {
            OverallLabel::Buy
        } else if score <= Self::STRONG_SELL_THRESHOLD {
            OverallLabel::StrongSell
        } else if score <= Self::SELL_THRESHOLD {
            OverallLabel::Sell
        } else {
            OverallLabel::Neutral
        }
    }

    /// Get display label for this call.
    pub fn label(&self) -> &'static str {
        match self {
            OverallLabel::StrongBuy => "강력매수",
            OverallLabel::Buy => "매수",
            OverallLabel::Neutral => "중립",
            OverallLabel::Sell => "매도",
            OverallLabel::StrongSell => "강력매도",
        }
    }

    /// Parse from a display label or an English variant name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "강력매수" => Some(Self::StrongBuy),
            "매수" => Some(Self::Buy),
            "중립" => Some(Self::Neutral),
            "매도" => Some(Self::Sell),
            "강력매도" => Some(Self::StrongSell),
            other => match other.to_lowercase().replace(['_', ' '], "").as_str() {
                "strongbuy" => Some(Self::StrongBuy),
                "buy" => Some(Self::Buy),
                "neutral" => Some(Self::Neutral),
                "sell" => Some(Self::Sell),
                "strongsell" => Some(Self::StrongSell),
                _ => None,
            },
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, OverallLabel::Buy | OverallLabel::StrongBuy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, OverallLabel::Sell | OverallLabel::StrongSell)
    }
}

impl fmt::Display for OverallLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted score and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSignal {
    pub label: OverallLabel,
    pub score: f64,
}

impl OverallSignal {
    pub fn from_score(score: f64) -> Self {
        Self {
            label: OverallLabel::from_score(score),
            score,
        }
    }
}

impl Default for OverallSignal {
    fn default() -> Self {
        Self::from_score(0.0)
    }
}
