//! Signal detection, aggregation and screening services.

pub mod screener;
pub mod signals;

pub use screener::Screener;
pub use signals::{
    aggregate, detect_signals, evaluate, SignalAggregator, SignalDetector, SignalRule,
    SIGNAL_WEIGHTS,
};
