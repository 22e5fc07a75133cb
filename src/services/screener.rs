//! Screener over a universe of symbols.
//!
//! Evaluates each symbol independently, then filters, ranks and summarizes
//! the evaluations for tables and leaderboards.

use crate::error::{AppError, Result};
use crate::services::signals::{aggregate, indicators::BollingerBands, SignalDetector};
use crate::types::{
    BandZone, IndicatorRow, MacdTrend, MarketOverview, ScreenerFilter, ScreenerResult,
    SignalSummary, Sma200Position, SymbolEvaluation, SymbolSnapshot,
};
use tracing::debug;

/// RSI assumed for ranking opportunities when it is unknown.
const DEFAULT_RSI: f64 = 50.0;

/// Percentage change of the close against the previous close.
/// None when either close is unknown or the previous close is zero.
pub fn change_pct(current: &IndicatorRow, previous: Option<&IndicatorRow>) -> Option<f64> {
    let close = current.close()?;
    let prev_close = previous?.close()?;
    if prev_close == 0.0 {
        return None;
    }
    let pct = (close - prev_close) / prev_close * 100.0;
    pct.is_finite().then_some(pct)
}

impl ScreenerFilter {
    /// Check the RSI range is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.rsi_min.is_finite() || !self.rsi_max.is_finite() {
            return Err(AppError::BadRequest("RSI range must be finite".to_string()));
        }
        if self.rsi_min > self.rsi_max {
            return Err(AppError::BadRequest(format!(
                "rsi_min ({}) must not exceed rsi_max ({})",
                self.rsi_min, self.rsi_max
            )));
        }
        Ok(())
    }

    /// Whether an evaluation passes every constraint.
    pub fn matches(&self, evaluation: &SymbolEvaluation) -> bool {
        // Unknown RSI never excludes a symbol
        let rsi_ok = evaluation
            .rsi
            .map_or(true, |rsi| rsi >= self.rsi_min && rsi <= self.rsi_max);

        rsi_ok
            && (self.sma200.is_empty() || self.sma200.contains(&evaluation.sma200))
            && (self.macd.is_empty() || self.macd.contains(&evaluation.macd))
            && (self.bands.is_empty() || self.bands.contains(&evaluation.band))
            && (self.labels.is_empty() || self.labels.contains(&evaluation.overall.label))
    }
}

/// Evaluates symbols and builds screener views.
#[derive(Default)]
pub struct Screener {
    detector: SignalDetector,
}

impl Screener {
    pub fn new() -> Self {
        Self {
            detector: SignalDetector::new(),
        }
    }

    /// Evaluate one symbol.
    pub fn evaluate(&self, snapshot: &SymbolSnapshot) -> SymbolEvaluation {
        let current = &snapshot.current;
        let previous = snapshot.previous.as_ref();

        let signals = self.detector.detect(current, previous);
        let overall = aggregate(&signals);

        SymbolEvaluation {
            symbol: snapshot.symbol.to_uppercase(),
            name: snapshot
                .name
                .clone()
                .unwrap_or_else(|| snapshot.symbol.to_uppercase()),
            close: current.close(),
            rsi: current.rsi_14(),
            change_pct: change_pct(current, previous),
            sma200: Sma200Position::from_row(current),
            macd: MacdTrend::from_row(current),
            band: BollingerBands::zone(current).unwrap_or(BandZone::Middle),
            signals,
            overall,
        }
    }

    /// Evaluate every snapshot, preserving input order.
    pub fn evaluate_batch(&self, snapshots: &[SymbolSnapshot]) -> Vec<SymbolEvaluation> {
        snapshots.iter().map(|s| self.evaluate(s)).collect()
    }

    /// Filter the universe and sort matches by score, highest first.
    pub fn screen(&self, snapshots: &[SymbolSnapshot], filter: &ScreenerFilter) -> ScreenerResult {
        let evaluations = self.evaluate_batch(snapshots);
        let total = evaluations.len();

        let mut results: Vec<SymbolEvaluation> = evaluations
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        sort_by_score_desc(&mut results);

        debug!("Screener matched {} of {} symbols", results.len(), total);

        ScreenerResult {
            total,
            matched: results.len(),
            results,
        }
    }

    /// Build the market overview: counts, movers, leaderboard and top opportunities.
    pub fn overview(&self, snapshots: &[SymbolSnapshot], limit: usize) -> MarketOverview {
        let evaluations = self.evaluate_batch(snapshots);

        MarketOverview {
            summary: summarize(&evaluations),
            buy_opportunities: buy_opportunities(&evaluations, limit),
            overbought: overbought(&evaluations, limit),
            top_gainers: top_gainers(&evaluations, limit),
            top_losers: top_losers(&evaluations, limit),
            leaderboard: leaderboard(evaluations),
        }
    }
}

fn sort_by_score_desc(evaluations: &mut [SymbolEvaluation]) {
    evaluations.sort_by(|a, b| b.overall.score.total_cmp(&a.overall.score));
}

/// All evaluations ranked by score, highest first. Ties keep input order.
pub fn leaderboard(mut evaluations: Vec<SymbolEvaluation>) -> Vec<SymbolEvaluation> {
    sort_by_score_desc(&mut evaluations);
    evaluations
}

/// Buy calls with RSI below 50, best score first.
pub fn buy_opportunities(evaluations: &[SymbolEvaluation], limit: usize) -> Vec<SymbolEvaluation> {
    let mut picks: Vec<SymbolEvaluation> = evaluations
        .iter()
        .filter(|e| e.overall.label.is_buy() && e.rsi.unwrap_or(DEFAULT_RSI) < DEFAULT_RSI)
        .cloned()
        .collect();
    sort_by_score_desc(&mut picks);
    picks.truncate(limit);
    picks
}

/// Sell calls with RSI above 50, worst score first.
pub fn overbought(evaluations: &[SymbolEvaluation], limit: usize) -> Vec<SymbolEvaluation> {
    let mut picks: Vec<SymbolEvaluation> = evaluations
        .iter()
        .filter(|e| e.overall.label.is_sell() && e.rsi.unwrap_or(DEFAULT_RSI) > DEFAULT_RSI)
        .cloned()
        .collect();
    picks.sort_by(|a, b| a.overall.score.total_cmp(&b.overall.score));
    picks.truncate(limit);
    picks
}

fn with_known_change(evaluations: &[SymbolEvaluation]) -> Vec<SymbolEvaluation> {
    evaluations
        .iter()
        .filter(|e| e.change_pct.is_some())
        .cloned()
        .collect()
}

/// Biggest one-day gains first. Symbols without a change are skipped.
pub fn top_gainers(evaluations: &[SymbolEvaluation], limit: usize) -> Vec<SymbolEvaluation> {
    let mut movers = with_known_change(evaluations);
    movers.sort_by(|a, b| {
        let (a, b) = (a.change_pct.unwrap_or_default(), b.change_pct.unwrap_or_default());
        b.total_cmp(&a)
    });
    movers.truncate(limit);
    movers
}

/// Biggest one-day losses first. Symbols without a change are skipped.
pub fn top_losers(evaluations: &[SymbolEvaluation], limit: usize) -> Vec<SymbolEvaluation> {
    let mut movers = with_known_change(evaluations);
    movers.sort_by(|a, b| {
        let (a, b) = (a.change_pct.unwrap_or_default(), b.change_pct.unwrap_or_default());
        a.total_cmp(&b)
    });
    movers.truncate(limit);
    movers
}

/// Count advancing/declining symbols and buy/sell calls.
pub fn summarize(evaluations: &[SymbolEvaluation]) -> SignalSummary {
    evaluations
        .iter()
        .fold(SignalSummary::default(), |mut summary, e| {
            match e.change_pct {
                Some(pct) if pct > 0.0 => summary.advancing += 1,
                Some(pct) if pct < 0.0 => summary.declining += 1,
                _ => {}
            }
            if e.overall.label.is_buy() {
                summary.buy_signals += 1;
            } else if e.overall.label.is_sell() {
                summary.sell_signals += 1;
            }
            summary
        })
}
