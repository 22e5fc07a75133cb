//! Indicator rule implementations.

pub mod bollinger;
pub mod cross;
pub mod macd;
pub mod mfi;
pub mod rsi;
pub mod sma200;

pub use bollinger::BollingerBands;
pub use cross::MovingAverageCross;
pub use macd::Macd;
pub use mfi::Mfi;
pub use rsi::Rsi;
pub use sma200::Sma200Trend;

use super::SignalRule;

/// Get all rules, in pipeline order.
pub fn all_rules() -> Vec<Box<dyn SignalRule>> {
    vec![
        // Momentum
        Box::new(Rsi),
        Box::new(Macd),
        // Trend
        Box::new(Sma200Trend),
        Box::new(MovingAverageCross),
        // Volatility
        Box::new(BollingerBands),
        // Volume
        Box::new(Mfi),
    ]
}
