use serde::{Deserialize, Serialize};

use super::{IndicatorRow, OverallLabel, OverallSignal, SignalSet};

/// Close relative to the 200-day average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sma200Position {
    #[serde(rename = "상방")]
    Above,
    #[serde(rename = "하방")]
    Below,
}

impl Sma200Position {
    /// Above only when both values are known and close is strictly higher.
    pub fn from_row(row: &IndicatorRow) -> Self {
        match (row.close(), row.sma_200()) {
            (Some(close), Some(sma_200)) if close > sma_200 => Sma200Position::Above,
            _ => Sma200Position::Below,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sma200Position::Above => "상방",
            Sma200Position::Below => "하방",
        }
    }
}

/// MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacdTrend {
    #[serde(rename = "강세")]
    Bullish,
    #[serde(rename = "약세")]
    Bearish,
}

impl MacdTrend {
    pub fn from_row(row: &IndicatorRow) -> Self {
        match (row.macd(), row.macd_signal()) {
            (Some(macd), Some(signal)) if macd > signal => MacdTrend::Bullish,
            _ => MacdTrend::Bearish,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MacdTrend::Bullish => "강세",
            MacdTrend::Bearish => "약세",
        }
    }
}

/// Where the close sits inside the Bollinger envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandZone {
    #[serde(rename = "상단 근접")]
    NearUpper,
    #[serde(rename = "중간 구간")]
    Middle,
    #[serde(rename = "하단 근접")]
    NearLower,
}

impl BandZone {
    pub fn label(&self) -> &'static str {
        match self {
            BandZone::NearUpper => "상단 근접",
            BandZone::Middle => "중간 구간",
            BandZone::NearLower => "하단 근접",
        }
    }
}

/// Screener constraints. Empty sets do not constrain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerFilter {
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub sma200: Vec<Sma200Position>,
    pub macd: Vec<MacdTrend>,
    pub bands: Vec<BandZone>,
    pub labels: Vec<OverallLabel>,
}

impl Default for ScreenerFilter {
    fn default() -> Self {
        Self {
            rsi_min: 0.0,
            rsi_max: 100.0,
            sma200: Vec::new(),
            macd: Vec::new(),
            bands: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// Full evaluation of one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolEvaluation {
    pub symbol: String,
    /// Company name, falling back to the symbol.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// Percentage change against the previous close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
    pub sma200: Sma200Position,
    pub macd: MacdTrend,
    pub band: BandZone,
    pub signals: SignalSet,
    pub overall: OverallSignal,
}

/// Screener output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerResult {
    pub total: usize,
    pub matched: usize,
    pub results: Vec<SymbolEvaluation>,
}

/// Market-wide counts for an overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub advancing: usize,
    pub declining: usize,
    pub buy_signals: usize,
    pub sell_signals: usize,
}

/// Overview of a whole universe of symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOverview {
    pub summary: SignalSummary,
    pub leaderboard: Vec<SymbolEvaluation>,
    pub buy_opportunities: Vec<SymbolEvaluation>,
    pub overbought: Vec<SymbolEvaluation>,
    /// Largest one-day moves up, among symbols with a known change.
    pub top_gainers: Vec<SymbolEvaluation>,
    /// Largest one-day moves down, among symbols with a known change.
    pub top_losers: Vec<SymbolEvaluation>,
}
